//! Kata Arithmetic Service
//!
//! Stateless arithmetic over `f64` with explicit domain errors:
//! - **ops**: add, subtract, multiply, divide, power, sqrt, percentage, factorial
//! - **operation**: name-based dispatch for adapters
//!
//! # Example
//!
//! ```rust
//! use kata_calc::{divide, multiply, CalcError};
//!
//! assert_eq!(multiply(3.0, 4.0), 12.0);
//! assert_eq!(divide(10.0, 2.0), Ok(5.0));
//! assert!(matches!(divide(1.0, 0.0), Err(CalcError::DivisionByZero { .. })));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod operation;
pub mod ops;

// Re-exports
pub use error::{CalcError, CalcResult};
pub use operation::{evaluate, Operation};
pub use ops::{
    add, divide, factorial, multiply, percentage, power, sqrt, subtract, MAX_FACTORIAL_INPUT,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
