//! CLI configuration
//!
//! Loaded from an optional TOML file; every field falls back to its default.
//!
//! ```toml
//! log_filter = "kata_todo=debug"
//! log_format = "json"
//! prompt = "todo> "
//!
//! [todo]
//! max_text_len = 120
//! ```

use crate::logging::LogFormat;
use anyhow::{Context, Result};
use kata_todo::TodoConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default interactive prompt
pub const DEFAULT_PROMPT: &str = "> ";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Tracing filter used when neither `--log` nor `RUST_LOG` is set
    pub log_filter: String,
    /// Stderr log layout
    pub log_format: LogFormat,
    /// Prompt printed before each todo session command
    pub prompt: String,
    /// Todo list limits
    pub todo: TodoConfig,
}

impl CliConfig {
    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Malformed TOML or wrongly typed fields.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    /// Load from `path`, or defaults when no path is given
    ///
    /// # Errors
    /// An explicit path that cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in config file {}", path.display()))
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::default(),
            prompt: DEFAULT_PROMPT.to_string(),
            todo: TodoConfig::default(),
        }
    }
}
