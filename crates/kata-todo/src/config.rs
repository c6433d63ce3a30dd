//! Todo list configuration

use serde::{Deserialize, Serialize};

/// Default limit on todo text length, in characters
pub const DEFAULT_MAX_TEXT_LEN: usize = 256;

/// Todo list configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Maximum trimmed text length, in characters
    pub max_text_len: usize,
}

impl TodoConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With maximum text length
    #[inline]
    #[must_use]
    pub fn with_max_text_len(mut self, max: usize) -> Self {
        self.max_text_len = max;
        self
    }
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            max_text_len: DEFAULT_MAX_TEXT_LEN,
        }
    }
}
