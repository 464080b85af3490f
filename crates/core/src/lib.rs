//! Core types for textsearch
//!
//! This crate defines the foundational types used throughout the system:
//! - FilePath: Ordered identifier of an indexed file
//! - ByteString, Term, Title: Raw article text, index key and article title
//! - Error: Error type hierarchy
//! - SearchConfig: TOML configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{SearchConfig, DEFAULT_EXTENSION, DEFAULT_LOG_LEVEL};
pub use error::{Error, Result};
pub use types::{ByteString, FilePath, Term, Title};
