//! Article title extraction
//!
//! The title of an article is its first line with surrounding whitespace
//! trimmed. An empty file has an empty title. Interior content is kept
//! byte for byte, including punctuation, case and malformed UTF-8.
//!
//! A line ends at `\n`, `\r\n` or a lone `\r`.

use crate::tokenizer::is_separator;
use textsearch_core::Title;

/// Build a title from the first line of a file.
///
/// `first_line` may still carry its terminator, or run on past a lone `\r`;
/// both are cut off before trimming.
pub fn extract_title(first_line: &[u8]) -> Title {
    let line = match first_line.iter().position(|&b| b == b'\r' || b == b'\n') {
        Some(end) => &first_line[..end],
        None => first_line,
    };
    let start = line.iter().position(|&b| !is_separator(b));
    let end = line.iter().rposition(|&b| !is_separator(b));
    match (start, end) {
        (Some(start), Some(end)) => Title::from(&line[start..=end]),
        _ => Title::default(),
    }
}
