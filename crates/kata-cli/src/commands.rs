//! One-shot calculator and utility commands
//!
//! Each runner returns the text to print so the binary stays a thin shell.

use anyhow::{Context, Result};
use kata_calc::{evaluate, Operation};

/// Evaluate `op_name` over `operands`
///
/// # Errors
/// Unknown operation, wrong operand count, or a domain error.
pub fn run_calc(op_name: &str, operands: &[f64]) -> Result<String> {
    let op: Operation = op_name.parse()?;
    let value = evaluate(op, operands).with_context(|| format!("{op} failed"))?;
    Ok(format_number(value))
}

/// Integral values print without a fractional part
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// A utility invocation
#[derive(Debug, Clone, PartialEq)]
pub enum UtilCommand {
    /// Palindrome check
    Palindrome(String),
    /// Maximum of numbers
    Max(Vec<f64>),
    /// Decode and pretty-print JSON
    Json(String),
    /// Distinct words in first-occurrence order
    Dedupe(Vec<String>),
    /// Email shape check
    Email(String),
    /// Capitalize text
    Capitalize(String),
    /// Age from a `YYYY-MM-DD` birth date
    Age(String),
}

/// Run a utility command
///
/// # Errors
/// Malformed JSON or birth date, or a birth date in the future.
pub fn run_util(command: &UtilCommand) -> Result<String> {
    let output = match command {
        UtilCommand::Palindrome(text) => kata_utils::is_palindrome(text).to_string(),
        UtilCommand::Max(values) => kata_utils::find_max(values.as_slice())
            .map_or_else(|| "(empty)".to_string(), format_number),
        UtilCommand::Json(text) => {
            let value = kata_utils::parse_json(text).context("could not parse JSON")?;
            serde_json::to_string_pretty(&value)?
        }
        UtilCommand::Dedupe(items) => kata_utils::remove_duplicates(items.as_slice()).join(" "),
        UtilCommand::Email(address) => kata_utils::validate_email(address).to_string(),
        UtilCommand::Capitalize(text) => kata_utils::capitalize(text),
        UtilCommand::Age(birth) => kata_utils::calculate_age_str(birth)
            .context("could not calculate age")?
            .to_string(),
    };
    Ok(output)
}
