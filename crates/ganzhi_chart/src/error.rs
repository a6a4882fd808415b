//! Error types for chart derivation.

use ganzhi_base::SymbolError;
use thiserror::Error;

/// Failures raised while deriving a chart.
///
/// Absent classical-text or star entries are not errors; they simply
/// leave the matching report section out.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// An input stem, branch or pillar outside the closed tables.
    #[error("invalid symbol: {0}")]
    InvalidSymbol(#[from] SymbolError),
    /// Calendar Service output that breaks the cycle contract.
    #[error("malformed upstream data: {0}")]
    MalformedUpstream(String),
    /// A classical-text corpus that could not be loaded or queried.
    #[error("corpus error: {0}")]
    Corpus(SymbolError),
    /// A report value that failed to serialize.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ChartError {
    pub(crate) fn upstream(msg: impl Into<String>) -> Self {
        Self::MalformedUpstream(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = ChartError::from(SymbolError::UnknownStem("x".into()));
        assert_eq!(e.to_string(), "invalid symbol: unknown stem: \"x\"");
        let e = ChartError::upstream("cycle 3 has no years");
        assert_eq!(e.to_string(), "malformed upstream data: cycle 3 has no years");
    }

    #[test]
    fn symbol_errors_convert() {
        let e: ChartError = SymbolError::MalformedPillar("甲丑".into()).into();
        assert!(matches!(e, ChartError::InvalidSymbol(_)));
    }
}
