//! Error types for symbol parsing and corpus loading.

use thiserror::Error;

/// Errors raised when a glyph or lookup key falls outside the closed tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SymbolError {
    /// Not one of the 10 heavenly stems.
    #[error("unknown stem: {0:?}")]
    UnknownStem(String),
    /// Not one of the 12 earthly branches.
    #[error("unknown branch: {0:?}")]
    UnknownBranch(String),
    /// A pillar string that is not exactly one stem followed by one branch,
    /// or a stem/branch pair of mismatched polarity.
    #[error("malformed pillar: {0:?}")]
    MalformedPillar(String),
    /// A corpus key that does not follow the corpus key grammar.
    #[error("malformed {corpus} key: {key:?}")]
    MalformedKey {
        /// Corpus the key was meant for.
        corpus: &'static str,
        /// Offending key.
        key: String,
    },
    /// A corpus file that is not a JSON object of string values.
    #[error("corpus parse error: {0}")]
    CorpusParse(String),
}

impl From<serde_json::Error> for SymbolError {
    fn from(e: serde_json::Error) -> Self {
        Self::CorpusParse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            SymbolError::UnknownStem("X".into()).to_string(),
            "unknown stem: \"X\""
        );
        let e = SymbolError::MalformedKey {
            corpus: "hour",
            key: "甲丙寅".into(),
        };
        assert_eq!(e.to_string(), "malformed hour key: \"甲丙寅\"");
    }
}
