//! # growth-console
//!
//! A terminal administrative console for the Marketing & Growth campaign
//! backend. Three views over a REST API:
//!
//! ```text
//! Dashboard (health probe) │ Brands (CRUD) │ Campaigns (per-brand CRUD)
//! ```
//!
//! The library is split into a typed API client (`api`) and the console
//! state/rendering (`tui`); the binary owns the terminal and the event loop.

// ── Lint policy ───────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(missing_docs)]

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub mod api;
pub mod config;
pub mod tui;

// Re-exports for convenience
pub use api::client::ApiClient;
pub use config::ConsoleConfig;

/// Initialise the global tracing subscriber.
///
/// Reads the `LOG_FORMAT` environment variable to choose output format:
/// - `"json"` — structured JSON output for log aggregators
/// - anything else (including unset) — human-readable pretty output
///
/// Filter level is controlled by `RUST_LOG` (e.g. `RUST_LOG=info`). Output
/// goes to stderr so a running console can redirect it away from the
/// terminal it is drawing on.
///
/// # Errors
///
/// Returns [`ConsoleError::Other`] if the global subscriber has already
/// been set (e.g. by a previous call or a test harness).
pub fn init_tracing() -> Result<(), ConsoleError> {
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let result = match format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init(),
        _ => tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init(),
    };

    result.map_err(|e| ConsoleError::Other(format!("tracing init failed: {e}")))
}

/// Top-level console errors.
///
/// Everything that can stop the console from starting or force it to exit
/// is mapped to a variant here. Per-request API failures are *not* fatal and
/// live in [`api::error::ApiError`] instead.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Configuration is missing or invalid (bad base URL, zero timeout).
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Terminal setup or restore failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Catch-all for errors that do not fit a specific variant.
    #[error("{0}")]
    Other(String),
}
