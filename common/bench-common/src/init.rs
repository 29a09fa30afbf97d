//! Logging setup for harness binaries
//!
//! A harness owns stdout for its result line, so every log record is sent to
//! stderr. Driver scripts that scrape stdout never see log output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// How log records are rendered on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Plain text lines without ANSI escapes
    Text,
    /// One JSON object per record
    Json,
}

impl LogFormat {
    /// Pick the format from a `LOG_FORMAT` value; anything but `json` is text
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Install the global subscriber for a harness crate.
///
/// `crate_name` is logged at `info` unless `RUST_LOG` says otherwise for it.
/// `LOG_FORMAT=json` selects [`LogFormat::Json`]. Fails if a subscriber is
/// already installed.
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(crate_directive(crate_name).parse()?);
    let format = LogFormat::from_setting(std::env::var("LOG_FORMAT").ok().as_deref());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(stderr_layer.json()).try_init()?,
        LogFormat::Text => registry.with(stderr_layer.with_ansi(false)).try_init()?,
    }

    Ok(())
}

fn crate_directive(crate_name: &str) -> String {
    format!("{}={}", crate_name, tracing::Level::INFO)
}
