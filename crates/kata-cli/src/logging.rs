//! Tracing subscriber setup for the `kata` binary

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format of the stderr log layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Pick the filter: explicit directive, then `RUST_LOG`, then `fallback`
///
/// # Errors
/// An explicit directive or fallback that does not parse.
pub fn resolve_filter(directive: Option<&str>, fallback: &str) -> Result<EnvFilter> {
    if let Some(directive) = directive {
        return EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log filter '{directive}'"));
    }
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(fallback)
            .with_context(|| format!("invalid log filter '{fallback}'")),
    }
}

/// Install the global subscriber, writing to stderr
///
/// # Errors
/// Bad filter, or a subscriber is already installed.
pub fn init_tracing(directive: Option<&str>, fallback: &str, format: LogFormat) -> Result<()> {
    let (text, json) = match format {
        LogFormat::Text => (
            Some(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(false),
            ),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(fmt::layer().json().with_writer(std::io::stderr)),
        ),
    };
    tracing_subscriber::registry()
        .with(resolve_filter(directive, fallback)?)
        .with(text)
        .with(json)
        .try_init()
        .context("failed to install tracing subscriber")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directive_accepted() {
        assert!(resolve_filter(Some("kata_todo=debug,kata_calc=trace"), "warn").is_ok());
    }

    #[test]
    fn log_format_names() {
        assert_eq!(LogFormat::default(), LogFormat::Text);
        assert_eq!(
            serde_json::from_str::<LogFormat>("\"json\"").unwrap(),
            LogFormat::Json
        );
    }
}
