//! Kata command adapter
//!
//! The presentation layer over the Kata libraries:
//! - **cli**: `kata` argument definition and dispatch
//! - **commands**: one-shot calculator and utility runners
//! - **session**: interactive todo session over any `BufRead`/`Write` pair
//! - **config**: TOML configuration
//! - **logging**: tracing subscriber setup

#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod session;

// Re-exports
pub use cli::{build_cli, dispatch};
pub use config::CliConfig;
pub use session::{Outcome, Session, SessionError, TodoCommand};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
