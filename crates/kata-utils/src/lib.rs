//! Kata Utility Library
//!
//! Stateless helpers with explicit failure modes:
//! - **text**: palindrome check, email shape check, capitalization
//! - **collections**: max-finding, order-preserving deduplication
//! - **json**: recoverable JSON decoding
//! - **age**: whole-year age calculation
//!
//! # Example
//!
//! ```rust
//! use kata_utils::{find_max, is_palindrome, parse_json, remove_duplicates};
//!
//! assert!(is_palindrome("A man, a plan, a canal: Panama"));
//! assert_eq!(find_max(&[3, 1, 9, 9, 2]), Some(9));
//! assert_eq!(remove_duplicates(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
//! assert!(parse_json("{invalid").is_err());
//! ```

#![warn(missing_docs)]

pub mod age;
pub mod collections;
pub mod error;
pub mod json;
pub mod text;

// Re-exports
pub use age::{age_on, calculate_age, calculate_age_str, parse_birth_date};
pub use collections::{find_max, find_max_opt, remove_duplicates};
pub use error::{UtilError, UtilResult};
pub use json::parse_json;
pub use text::{capitalize, capitalize_opt, is_palindrome, validate_email};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for utility operations
    pub use crate::{
        calculate_age, capitalize, find_max, is_palindrome, parse_json, remove_duplicates,
        validate_email, UtilError, UtilResult,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
