//! textsearch - conjunctive keyword search over plain-text articles
//!
//! Builds an in-memory inverted index from the `.txt` files of a directory
//! and answers AND queries with the files containing every query term.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use textsearch::{build_index, search, text_files_in_dir};
//!
//! let files = text_files_in_dir(Path::new("articles"), ".txt")?;
//! let (index, titles) = build_index(files)?;
//!
//! for path in search(&index, "cats dogs") {
//!     if let Some(title) = titles.get(&path) {
//!         println!("{} ({})", title, path);
//!     }
//! }
//! # Ok::<(), textsearch::Error>(())
//! ```
//!
//! # Architecture
//!
//! `textsearch-core` holds the shared types, errors and configuration;
//! `textsearch-search` holds the tokenizer, indexer and query engine. The
//! `textsearch` binary lives in `textsearch-cli`.

pub use textsearch_core::{ByteString, Error, FilePath, Result, SearchConfig, Term, Title};
pub use textsearch_search::*;
