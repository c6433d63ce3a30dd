//! Kata Todo List Manager
//!
//! An explicitly owned, ordered, in-memory todo collection driven through
//! a command interface (`add`, `toggle`, `edit`, `delete`, `clear_completed`,
//! `move_to`, `set_priority`, `set_category`). Presentation is left to adapters.
//!
//! # Example
//!
//! ```rust
//! use kata_todo::{TodoError, TodoList};
//!
//! let mut list = TodoList::new();
//! assert_eq!(list.add("   ").unwrap_err(), TodoError::InvalidInput);
//!
//! let id = list.add("buy milk").unwrap().id;
//! list.toggle(id).unwrap();
//! assert_eq!(list.clear_completed(), 1);
//! assert!(list.is_empty());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod list;
pub mod types;

// Re-exports
pub use config::{TodoConfig, DEFAULT_MAX_TEXT_LEN};
pub use error::{TodoError, TodoResult};
pub use list::TodoList;
pub use types::{Filter, Priority, Todo, TodoId};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
