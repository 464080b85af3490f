//! Core types for textsearch
//!
//! This module defines the foundational types:
//! - ByteString: Owned article text that need not be valid UTF-8
//! - FilePath: Ordered identifier of an indexed source file
//! - Term: Normalized index key
//! - Title: Trimmed first line of an article

use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt::{self, Write as _};
use std::path::Path;

/// A normalized, lowercased, non-empty index key
///
/// Terms are only produced by the tokenizer; they are compared by exact
/// byte equality.
pub type Term = ByteString;

/// The trimmed first line of an indexed file
pub type Title = ByteString;

// ============================================================================
// ByteString
// ============================================================================

/// Owned bytes read from an article
///
/// Articles are not required to be valid UTF-8. Bytes are kept exactly as
/// read, so two inputs that differ in any byte never compare equal.
/// Ordering is byte-lexicographic, which agrees with `str` ordering on
/// valid UTF-8.
///
/// Rendering is lossless:
/// - `Debug` quotes and escapes like `str`'s `Debug`, writing each invalid
///   byte as `\xNN`
/// - `Display` (and `Serialize`) writes valid text as-is except that `\`
///   is doubled, and each invalid byte as `\xNN`
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteString(Vec<u8>);

impl ByteString {
    /// Create a ByteString from raw bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The text, if it is valid UTF-8
    pub fn to_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split into alternating valid UTF-8 runs and single invalid sequences.
    fn chunks(&self) -> Chunks<'_> {
        Chunks { rest: &self.0 }
    }
}

enum Chunk<'a> {
    Valid(&'a str),
    Invalid(&'a [u8]),
}

struct Chunks<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        if self.rest.is_empty() {
            return None;
        }
        match std::str::from_utf8(self.rest) {
            Ok(valid) => {
                self.rest = &[];
                Some(Chunk::Valid(valid))
            }
            Err(e) if e.valid_up_to() > 0 => {
                let (valid, rest) = self.rest.split_at(e.valid_up_to());
                self.rest = rest;
                // The prefix up to `valid_up_to` is valid by definition
                std::str::from_utf8(valid).ok().map(Chunk::Valid)
            }
            Err(e) => {
                let bad = e.error_len().unwrap_or(self.rest.len());
                let (invalid, rest) = self.rest.split_at(bad);
                self.rest = rest;
                Some(Chunk::Invalid(invalid))
            }
        }
    }
}

fn write_hex_escapes(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for b in bytes {
        write!(f, "\\x{:02x}", b)?;
    }
    Ok(())
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = self.to_str() {
            return fmt::Debug::fmt(text, f);
        }
        f.write_char('"')?;
        for chunk in self.chunks() {
            match chunk {
                Chunk::Valid(text) => {
                    for c in text.chars() {
                        match c {
                            '\'' => f.write_char(c)?,
                            _ => write!(f, "{}", c.escape_debug())?,
                        }
                    }
                }
                Chunk::Invalid(bytes) => write_hex_escapes(f, bytes)?,
            }
        }
        f.write_char('"')
    }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.chunks() {
            match chunk {
                Chunk::Valid(text) => {
                    for (i, part) in text.split('\\').enumerate() {
                        if i > 0 {
                            f.write_str("\\\\")?;
                        }
                        f.write_str(part)?;
                    }
                }
                Chunk::Invalid(bytes) => write_hex_escapes(f, bytes)?,
            }
        }
        Ok(())
    }
}

impl Serialize for ByteString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&str> for ByteString {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for ByteString {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for ByteString {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<str> for ByteString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for ByteString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<[u8]> for ByteString {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

// ============================================================================
// FilePath
// ============================================================================

/// Identifier of an indexed source file
///
/// A FilePath wraps the display form of the path the file was read from.
/// Ordering is byte-lexicographic on that string, which is what makes
/// posting lists and query results deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilePath(String);

impl FilePath {
    /// Create a FilePath from its string form
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Create a FilePath from a filesystem path
    ///
    /// Non-UTF-8 components are replaced lossily.
    pub fn from_path(path: &Path) -> Self {
        Self(path.display().to_string())
    }

    /// Get the string form of this path
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Borrow as a filesystem path for opening
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FilePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FilePath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for FilePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
