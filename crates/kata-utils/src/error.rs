//! Error types for the utility library

/// Utility errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UtilError {
    /// Structured text could not be decoded
    #[error("parse error at line {line}, column {column}: {message}")]
    Parse {
        /// 1-based line of the failure (0 when unknown)
        line: usize,
        /// 1-based column of the failure (0 when unknown)
        column: usize,
        /// Decoder message
        message: String,
    },

    /// Input is well-formed but not acceptable
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl UtilError {
    /// Create parse error without position information
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            line: 0,
            column: 0,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for UtilError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for utility operations
pub type UtilResult<T> = Result<T, UtilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let err = UtilError::Parse {
            line: 1,
            column: 2,
            message: "key must be a string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "parse error at line 1, column 2: key must be a string"
        );
    }

    #[test]
    fn serde_error_conversion_keeps_position() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let err: UtilError = serde_err.into();
        assert!(matches!(err, UtilError::Parse { line: 1, .. }));
    }
}
