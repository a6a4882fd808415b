//! Layered configuration for the `ganzhi` CLI.
//!
//! Precedence, lowest first: built-in defaults, a TOML file, then
//! `GANZHI_*` environment variables.
//!
//! ```toml
//! [output]
//! format = "text"
//! pretty = true
//!
//! [corpus]
//! path = "corpus.json"
//! builtin = true
//!
//! [logging]
//! level = "debug"
//! ```

pub mod error;

use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ganzhi_base::Classics;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::ConfigError;

/// File consulted when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "ganzhi.toml";

pub const ENV_OUTPUT_FORMAT: &str = "GANZHI_OUTPUT_FORMAT";
pub const ENV_LOG_LEVEL: &str = "GANZHI_LOG_LEVEL";
pub const ENV_CORPUS_PATH: &str = "GANZHI_CORPUS_PATH";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            other => Err(ConfigError::Invalid(format!("unknown output format {other:?}"))),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Text => "text",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorpusConfig {
    /// Extra JSON corpus layered over the built-in excerpts.
    pub path: Option<PathBuf>,
    /// Start from the built-in excerpts.
    pub builtin: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: None,
            builtin: true,
        }
    }
}

impl CorpusConfig {
    /// Build the classical corpora this config describes.
    pub fn load(&self) -> Result<Classics, ConfigError> {
        let base = if self.builtin {
            Classics::builtin()
        } else {
            Classics::empty()
        };
        let Some(path) = &self.path else {
            return Ok(base);
        };
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let extra = Classics::from_json_str(&json).map_err(|source| ConfigError::Corpus {
            path: path.clone(),
            source,
        })?;
        debug!(
            path = %path.display(),
            month = extra.month_entries(),
            hour = extra.hour_entries(),
            "loaded corpus"
        );
        Ok(base.merged(extra))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
    pub corpus: CorpusConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load from `path`, else `./ganzhi.toml` when present, else defaults;
    /// then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)?
                } else {
                    Self::default()
                }
            }
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Parse a TOML file without environment overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `GANZHI_*` overrides read through `lookup`.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(format) = lookup(ENV_OUTPUT_FORMAT) {
            self.output.format = format.parse()?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(path) = lookup(ENV_CORPUS_PATH) {
            self.corpus.path = Some(PathBuf::from(path));
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown log level {:?}",
                self.logging.level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!(c.output.format, OutputFormat::Json);
        assert!(!c.output.pretty);
        assert!(c.corpus.builtin);
        assert_eq!(c.logging.level, "info");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = Config::from_toml_str("[output]\nformat = \"text\"\n").unwrap();
        assert_eq!(c.output.format, OutputFormat::Text);
        assert_eq!(c.logging.level, "info");
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(matches!(
            Config::from_toml_str("[output]\ncolour = true\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn env_overrides_file_values() {
        let c = Config::from_toml_str("[output]\nformat = \"text\"\n")
            .unwrap()
            .with_overrides(|key| match key {
                ENV_OUTPUT_FORMAT => Some("JSON".into()),
                ENV_LOG_LEVEL => Some("debug".into()),
                _ => None,
            })
            .unwrap();
        assert_eq!(c.output.format, OutputFormat::Json);
        assert_eq!(c.logging.level, "debug");
        assert_eq!(c.corpus.path, None);
    }

    #[test]
    fn bad_values_rejected() {
        assert!(matches!(
            Config::default().with_overrides(|k| (k == ENV_OUTPUT_FORMAT).then(|| "xml".into())),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[logging]\nlevel = \"loud\"\n"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn builtin_corpus_without_path() {
        let classics = CorpusConfig::default().load().unwrap();
        assert_eq!(classics, Classics::builtin());
        let none = CorpusConfig {
            path: None,
            builtin: false,
        };
        assert_eq!(none.load().unwrap(), Classics::empty());
    }
}
