//! Error types for configuration loading.

use std::path::PathBuf;

use ganzhi_base::SymbolError;
use thiserror::Error;

/// Errors raised while loading configuration or the corpus it names.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A config file that is not valid TOML for [`crate::Config`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value outside its allowed set.
    #[error("invalid configuration: {0}")]
    Invalid(String),
    /// A corpus file with malformed content or keys.
    #[error("corpus {path}: {source}")]
    Corpus {
        path: PathBuf,
        #[source]
        source: SymbolError,
    },
}
