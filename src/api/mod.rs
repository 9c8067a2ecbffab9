//! # Module: Typed API Client
//!
//! ## Responsibility
//! Everything that talks HTTP: the JSON transport, the error taxonomy, the
//! pass-through DTOs, and one thin typed client per backend resource
//! (health, brands, campaigns).
//!
//! ## Guarantees
//! - Callers never see raw protocol errors; every failure is an [`error::ApiError`]
//!   carrying a human-readable message
//! - `204 No Content` resolves without attempting JSON decode
//! - DTOs never assume optional sub-fields exist
//!
//! ## NOT Responsible For
//! - View state or rendering (that belongs to `tui`)
//! - Interpreting pipeline payloads (they are opaque, displayed verbatim)

pub mod brands;
pub mod campaigns;
pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
