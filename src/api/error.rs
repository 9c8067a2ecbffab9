//! # Module: API Error Taxonomy
//!
//! ## Responsibility
//! Maps every failure surface of the HTTP client to a single error type:
//! network/transport failures, non-2xx application errors (with the
//! server-supplied message), and undecodable bodies.
//!
//! ## Guarantees
//! - `Display` always yields something fit for a toast: the server's
//!   `detail` when present, else a status reason, never a raw backtrace

use thiserror::Error;

/// Errors produced by the typed API client.
///
/// All variants implement `std::error::Error` via [`thiserror`]. Views
/// render `to_string()` directly.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend answered with a non-2xx status. `message` is the JSON
    /// `detail` field when present, else the HTTP status text, else a
    /// generic failure string.
    #[error("{message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Human-readable message for display.
        message: String,
    },

    /// The request never completed: connect failure, timeout, or an I/O
    /// error while reading the body.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx body that could not be decoded into the expected type.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether this is a not-found application error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Server { status: 404, .. })
    }
}
