use thiserror::Error;

use crate::assets::AssetKind;

/// Reasons a basket cannot be assembled into a strategy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{asset} ticker '{found}' does not match strategy ticker '{expected}'")]
    TickerMismatch {
        expected: String,
        found: String,
        asset: AssetKind,
    },
}

impl ValidationError {
    pub fn offending_ticker(&self) -> &str {
        match self {
            ValidationError::TickerMismatch { found, .. } => found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_both_tickers() {
        let err = ValidationError::TickerMismatch {
            expected: "AAA".to_string(),
            found: "BBB".to_string(),
            asset: AssetKind::Call,
        };
        assert_eq!(
            err.to_string(),
            "call ticker 'BBB' does not match strategy ticker 'AAA'"
        );
        assert_eq!(err.offending_ticker(), "BBB");
    }
}
