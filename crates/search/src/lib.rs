//! Indexing and query evaluation for textsearch
//!
//! This crate provides:
//! - Tokenizer: whitespace split, punctuation trim, ASCII lowercase, over raw bytes
//! - Title extraction from the first line of an article
//! - InvertedIndex and TitleMap, built once and read-only afterwards
//! - build_index: single-pass indexer over a set of files
//! - Conjunctive query engine with merge-based posting intersection
//! - Directory enumeration of `.txt` articles
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use textsearch_search::{build_index, search, text_files_in_dir};
//!
//! let files = text_files_in_dir(Path::new("articles"), ".txt")?;
//! let (index, titles) = build_index(files)?;
//! for path in search(&index, "cats dogs") {
//!     if let Some(title) = titles.get(&path) {
//!         println!("{}: {}", path, title);
//!     }
//! }
//! # Ok::<(), textsearch_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod discover;
pub mod index;
pub mod indexer;
pub mod query;
pub mod title;
pub mod tokenizer;

// Re-export commonly used types
pub use discover::text_files_in_dir;
pub use index::{IndexStats, InvertedIndex, PostingList, TitleMap};
pub use indexer::{build_index, IndexBuilder};
pub use query::{evaluate, intersect, parse_query, search, QueryOutcome};
pub use title::extract_title;
pub use tokenizer::{is_separator, normalize_token, tokenize};
