//! Index construction
//!
//! `build_index` is a pure builder: it takes a set of file paths and returns
//! the finished `(InvertedIndex, TitleMap)`. Each file is read once; the
//! first line supplies the title and every line is tokenized into postings.
//!
//! Paths are de-duplicated and sorted before reading so that every posting
//! list comes out in ascending `FilePath` order.

use crate::index::{InvertedIndex, TitleMap};
use crate::title::extract_title;
use crate::tokenizer::tokenize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use textsearch_core::{Error, FilePath, Result, Title};
use tracing::{debug, info};

/// Build the inverted index and title map for a set of files.
///
/// Duplicate paths are indexed once. Files are processed in lexicographic
/// order regardless of input order.
///
/// # Errors
///
/// Returns `Error::Io` naming the file if any file cannot be opened or
/// read. Nothing built before the failure is returned.
pub fn build_index<I>(paths: I) -> Result<(InvertedIndex, TitleMap)>
where
    I: IntoIterator<Item = FilePath>,
{
    let paths: BTreeSet<FilePath> = paths.into_iter().collect();
    let mut builder = IndexBuilder::new();

    for path in paths {
        let file = File::open(path.as_path()).map_err(|e| Error::io(path.as_str(), e))?;
        builder.add_document(path, BufReader::new(file))?;
    }

    let (index, titles) = builder.finish();
    let stats = index.stats(&titles);
    info!(
        target: "textsearch::index",
        documents = stats.documents,
        terms = stats.terms,
        postings = stats.postings,
        "Index built"
    );
    Ok((index, titles))
}

/// Incremental builder fed one document at a time
///
/// Documents must be added in strictly ascending path order; this is what
/// keeps posting lists sorted without a final pass.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    index: InvertedIndex,
    titles: TitleMap,
    last: Option<FilePath>,
}

impl IndexBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize one document and record its title.
    ///
    /// Returns the number of term occurrences added. Lines are read as raw
    /// bytes and never decoded, so invalid UTF-8 neither fails the build
    /// nor merges distinct tokens.
    ///
    /// # Errors
    ///
    /// `Error::InvalidInput` if `path` does not sort after the previously
    /// added document, `Error::Io` if reading fails.
    pub fn add_document<R: BufRead>(&mut self, path: FilePath, mut reader: R) -> Result<usize> {
        if let Some(last) = &self.last {
            if &path <= last {
                return Err(Error::InvalidInput(format!(
                    "document {} added after {}",
                    path, last
                )));
            }
        }

        let mut buf = Vec::new();
        let mut title: Option<Title> = None;
        let mut occurrences = 0;

        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| Error::io(path.as_str(), e))?;
            if n == 0 {
                break;
            }

            if title.is_none() {
                title = Some(extract_title(&buf));
            }
            for term in tokenize(&buf) {
                self.index.add_posting(term, path.clone());
                occurrences += 1;
            }
        }

        debug!(target: "textsearch::index", path = %path, occurrences, "Document indexed");
        self.titles.insert(path.clone(), title.unwrap_or_default());
        self.last = Some(path);
        Ok(occurrences)
    }

    /// Consume the builder, returning the finished structures
    pub fn finish(self) -> (InvertedIndex, TitleMap) {
        (self.index, self.titles)
    }
}
