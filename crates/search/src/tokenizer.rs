//! Tokenizer for indexed text
//!
//! Pipeline: split on ASCII whitespace → trim surrounding ASCII punctuation
//!           → ASCII lowercase → drop empty tokens
//!
//! Works on raw bytes. No stemming, stopwords or Unicode normalization;
//! non-ASCII bytes (including malformed UTF-8) pass through untouched, so
//! the index is identical on every platform.

use textsearch_core::Term;

/// Word separators: space, `\t`, `\n`, `\r`, vertical tab and form feed.
pub fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

/// Normalize a single separator-delimited candidate token.
///
/// Leading and trailing ASCII punctuation is stripped (interior punctuation
/// is kept), then the remainder is ASCII-lowercased. Returns `None` when
/// nothing is left.
///
/// # Example
///
/// ```
/// use textsearch_search::tokenizer::normalize_token;
///
/// assert_eq!(normalize_token(b"\"Don't!\""), Some("don't".into()));
/// assert_eq!(normalize_token(b"--"), None);
/// ```
pub fn normalize_token(token: &[u8]) -> Option<Term> {
    let start = token.iter().position(|b| !b.is_ascii_punctuation())?;
    let end = token.iter().rposition(|b| !b.is_ascii_punctuation())?;
    Some(Term::new(token[start..=end].to_ascii_lowercase()))
}

/// Tokenize text into index terms.
///
/// The returned iterator is lazy and borrows `text`; every term it yields
/// is non-empty and contains no ASCII uppercase letters.
///
/// # Example
///
/// ```
/// use textsearch_search::tokenizer::tokenize;
///
/// let tokens: Vec<_> = tokenize("Hello, World!").collect();
/// assert_eq!(tokens, vec!["hello", "world"]);
/// ```
pub fn tokenize<T>(text: &T) -> impl Iterator<Item = Term> + '_
where
    T: AsRef<[u8]> + ?Sized,
{
    text.as_ref()
        .split(|&b| is_separator(b))
        .filter_map(normalize_token)
}
