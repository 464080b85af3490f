//! Index dump and query result formatting.
//!
//! Two dump modes:
//! - **Human** (default): `Index:` and `File names -> document titles:`
//!   headers, one `"key": value` line per entry
//! - **JSON** (`--json`): `{"index": {...}, "titles": {...}}`
//!
//! Query results always use the line format of the interactive protocol and
//! are written as raw bytes, so queries and titles are echoed exactly.

use serde_json::json;
use std::fmt::Write as _;
use std::io::{self, Write};
use textsearch_core::FilePath;
use textsearch_search::{InvertedIndex, TitleMap};

/// Dump formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format the index and title map.
pub fn format_dump(index: &InvertedIndex, titles: &TitleMap, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format_dump_human(index, titles),
        OutputMode::Json => serde_json::to_string_pretty(&json!({
            "index": index,
            "titles": titles,
        }))
        .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)),
    }
}

fn format_dump_human(index: &InvertedIndex, titles: &TitleMap) -> String {
    let mut out = String::from("Index:\n");
    for (term, postings) in index.iter() {
        let files: Vec<&str> = postings.iter().map(FilePath::as_str).collect();
        let _ = writeln!(out, "{:?}: {:?}", term, files);
    }
    out.push_str("File names -> document titles:\n");
    for (path, title) in titles.iter() {
        let _ = writeln!(out, "{:?}: {:?}", path.as_str(), title);
    }
    out
}

/// Write the response to one interactive query.
///
/// `query` is echoed as given; each result line carries the article title.
pub fn write_results<W: Write>(
    out: &mut W,
    query: &[u8],
    results: &[FilePath],
    titles: &TitleMap,
) -> io::Result<()> {
    out.write_all(b"Results for query '")?;
    out.write_all(query)?;
    out.write_all(b"':\n")?;
    if results.is_empty() {
        return out.write_all(b"No results match that query.\n");
    }
    for (i, path) in results.iter().enumerate() {
        let title = titles.get(path).map(|t| t.as_bytes()).unwrap_or_default();
        write!(out, "{}.  Title: ", i + 1)?;
        out.write_all(title)?;
        writeln!(out, ",  File: {}", path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use textsearch_search::IndexBuilder;

    fn cats_and_dogs() -> (InvertedIndex, TitleMap) {
        let mut builder = IndexBuilder::new();
        builder
            .add_document(FilePath::from("a.txt"), Cursor::new("Cats and dogs"))
            .unwrap();
        builder
            .add_document(FilePath::from("b.txt"), Cursor::new("Dogs only\ndogs"))
            .unwrap();
        builder.finish()
    }

    fn results(query: &[u8], found: &[FilePath], titles: &TitleMap) -> Vec<u8> {
        let mut out = Vec::new();
        write_results(&mut out, query, found, titles).unwrap();
        out
    }

    #[test]
    fn test_write_results() {
        let (_, titles) = cats_and_dogs();
        let found = vec![FilePath::from("a.txt"), FilePath::from("b.txt")];
        assert_eq!(
            results(b"dogs", &found, &titles),
            b"Results for query 'dogs':\n\
              1.  Title: Cats and dogs,  File: a.txt\n\
              2.  Title: Dogs only,  File: b.txt\n"
        );
    }

    #[test]
    fn test_write_no_results() {
        let (_, titles) = cats_and_dogs();
        assert_eq!(
            results(b"missing", &[], &titles),
            b"Results for query 'missing':\nNo results match that query.\n"
        );
    }

    #[test]
    fn test_write_results_echoes_raw_bytes() {
        let mut builder = IndexBuilder::new();
        builder
            .add_document(FilePath::from("c.txt"), Cursor::new(b"Caf\xff\n".to_vec()))
            .unwrap();
        let (_, titles) = builder.finish();

        assert_eq!(
            results(b"caf\xff", &[FilePath::from("c.txt")], &titles),
            b"Results for query 'caf\xff':\n1.  Title: Caf\xff,  File: c.txt\n"
        );
    }

    #[test]
    fn test_format_dump_human_invalid_utf8() {
        let mut builder = IndexBuilder::new();
        builder
            .add_document(FilePath::from("a.txt"), Cursor::new(b"caf\xff".to_vec()))
            .unwrap();
        builder
            .add_document(FilePath::from("b.txt"), Cursor::new(b"caf\xfe".to_vec()))
            .unwrap();
        let (index, titles) = builder.finish();

        let dump = format_dump(&index, &titles, OutputMode::Human);
        assert!(dump.contains("\"caf\\xfe\": [\"b.txt\"]\n\"caf\\xff\": [\"a.txt\"]\n"));
        assert!(dump.contains("\"a.txt\": \"caf\\xff\"\n"));
    }

    #[test]
    fn test_format_dump_human() {
        let (index, titles) = cats_and_dogs();
        assert_eq!(
            format_dump(&index, &titles, OutputMode::Human),
            "Index:\n\
             \"and\": [\"a.txt\"]\n\
             \"cats\": [\"a.txt\"]\n\
             \"dogs\": [\"a.txt\", \"b.txt\", \"b.txt\"]\n\
             \"only\": [\"b.txt\"]\n\
             File names -> document titles:\n\
             \"a.txt\": \"Cats and dogs\"\n\
             \"b.txt\": \"Dogs only\"\n"
        );
    }

    #[test]
    fn test_format_dump_human_escapes() {
        let mut builder = IndexBuilder::new();
        builder
            .add_document(FilePath::from("q.txt"), Cursor::new("\"Quoted.\""))
            .unwrap();
        let (index, titles) = builder.finish();

        let dump = format_dump(&index, &titles, OutputMode::Human);
        assert!(dump.contains("\"q.txt\": \"\\\"Quoted.\\\"\""));
    }

    #[test]
    fn test_format_dump_empty() {
        let dump = format_dump(&InvertedIndex::new(), &TitleMap::new(), OutputMode::Human);
        assert_eq!(dump, "Index:\nFile names -> document titles:\n");
    }

    #[test]
    fn test_format_dump_json() {
        let (index, titles) = cats_and_dogs();
        let dump = format_dump(&index, &titles, OutputMode::Json);
        let value: serde_json::Value = serde_json::from_str(&dump).unwrap();

        assert_eq!(value["index"]["dogs"], json!(["a.txt", "b.txt", "b.txt"]));
        assert_eq!(value["titles"]["b.txt"], json!("Dogs only"));
    }
}
