//! Search configuration via a TOML file
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the standard behavior: index `.txt` files, log warnings and above.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default extension of indexed articles.
pub const DEFAULT_EXTENSION: &str = ".txt";

/// Default log level when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration loaded from a TOML file.
///
/// # Example
///
/// ```toml
/// extension = ".txt"
/// log_level = "warn"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// File name suffix of the articles to index.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Log filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            log_level: default_log_level(),
        }
    }
}

impl SearchConfig {
    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` on malformed TOML and `Error::InvalidInput`
    /// when the extension is empty.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: SearchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::io(path.display().to_string(), e))?;
        Self::from_toml(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                msg
            )),
            other => other,
        })
    }

    /// Check field values that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            return Err(Error::InvalidInput(
                "extension must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# textsearch configuration
#
# File name suffix of the articles to index (default: ".txt").
# Only direct children of the directory are considered.
extension = ".txt"

# Log level when RUST_LOG is unset (default: "warn").
# Logs go to stderr; stdout carries only search output.
log_level = "warn"
"#
    }
}
