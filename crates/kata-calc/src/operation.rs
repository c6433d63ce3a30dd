//! Named operations and dispatch
//!
//! Lets adapters (the CLI) pick an operation by name and evaluate it over
//! a slice of operands.

use crate::error::{CalcError, CalcResult};
use crate::ops;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a × b`
    Multiply,
    /// `a / b`
    Divide,
    /// `base ^ exponent`
    Power,
    /// `√n`
    Sqrt,
    /// `value × percent / 100`
    Percentage,
    /// `n!`
    Factorial,
}

impl Operation {
    /// All operations, in display order
    pub const ALL: [Operation; 8] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Sqrt,
        Operation::Percentage,
        Operation::Factorial,
    ];

    /// Lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Sqrt => "sqrt",
            Operation::Percentage => "percentage",
            Operation::Factorial => "factorial",
        }
    }

    /// Number of operands taken
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Operation::Sqrt | Operation::Factorial => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == lowered)
            .ok_or_else(|| CalcError::UnknownOperation(s.to_string()))
    }
}

/// Evaluate `op` over `operands`
///
/// Factorial operands must be non-negative integers; the result is
/// widened to `f64`.
///
/// # Errors
/// [`CalcError::Arity`] on a wrong operand count, otherwise whatever the
/// underlying operation reports.
pub fn evaluate(op: Operation, operands: &[f64]) -> CalcResult<f64> {
    if operands.len() != op.arity() {
        return Err(CalcError::Arity {
            operation: op.name(),
            expected: op.arity(),
            actual: operands.len(),
        });
    }

    let result = match (op, operands) {
        (Operation::Add, &[a, b]) => ops::add(a, b),
        (Operation::Subtract, &[a, b]) => ops::subtract(a, b),
        (Operation::Multiply, &[a, b]) => ops::multiply(a, b),
        (Operation::Divide, &[a, b]) => ops::divide(a, b)?,
        (Operation::Power, &[a, b]) => ops::power(a, b),
        (Operation::Percentage, &[a, b]) => ops::percentage(a, b),
        (Operation::Sqrt, &[n]) => ops::sqrt(n)?,
        (Operation::Factorial, &[n]) => factorial_f64(n)?,
        _ => unreachable!("operand count checked against arity"),
    };
    tracing::debug!(operation = %op, ?operands, result, "evaluated");
    Ok(result)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn factorial_f64(n: f64) -> CalcResult<f64> {
    if n.fract() != 0.0 || !n.is_finite() {
        return Err(CalcError::invalid_domain(
            "factorial",
            format!("not defined for non-integer {n}"),
        ));
    }
    if n > ops::MAX_FACTORIAL_INPUT as f64 {
        return Err(CalcError::Overflow {
            operation: "factorial",
            input: n as i64,
        });
    }
    ops::factorial(n as i64).map(|v| v as f64)
}
