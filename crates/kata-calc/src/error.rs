//! Error types for the arithmetic service
//!
//! Every operation that has a restricted domain reports the violation
//! to the immediate caller instead of producing `inf`/`NaN` or panicking.

/// Arithmetic errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// Divisor was zero (either sign)
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero {
        /// The dividend that was rejected
        dividend: f64,
    },

    /// Input outside the operation's mathematical domain
    #[error("invalid domain for {operation}: {reason}")]
    InvalidDomain {
        /// Operation name
        operation: &'static str,
        /// What was wrong with the input
        reason: String,
    },

    /// Result does not fit the output type
    #[error("{operation} overflowed for input {input}")]
    Overflow {
        /// Operation name
        operation: &'static str,
        /// Input that overflowed
        input: i64,
    },

    /// Wrong number of operands passed to the dispatcher
    #[error("{operation} expects {expected} operand(s), got {actual}")]
    Arity {
        /// Operation name
        operation: &'static str,
        /// Operands the operation takes
        expected: usize,
        /// Operands supplied
        actual: usize,
    },

    /// Operation name not recognised
    #[error("unknown operation: '{0}'")]
    UnknownOperation(String),
}

impl CalcError {
    /// Create invalid domain error
    pub fn invalid_domain(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidDomain {
            operation,
            reason: reason.into(),
        }
    }

    /// Whether retrying with corrected input can succeed
    #[inline]
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::UnknownOperation(_))
    }
}

/// Result type alias for arithmetic operations
pub type CalcResult<T> = Result<T, CalcError>;
