//! JSON decoding
//!
//! Uses serde_json; malformed text is reported as [`UtilError::Parse`]
//! so callers can recover.

use crate::error::{UtilError, UtilResult};
use serde_json::Value;

/// Parse `text` as JSON
///
/// # Errors
/// [`UtilError::Parse`] with the decoder's line, column, and message.
pub fn parse_json(text: &str) -> UtilResult<Value> {
    serde_json::from_str(text).map_err(|e| {
        tracing::warn!(error = %e, "rejected malformed JSON");
        UtilError::from(e)
    })
}
