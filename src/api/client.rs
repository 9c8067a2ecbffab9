//! # Module: API Client Facade
//!
//! ## Responsibility
//! Owns the [`Transport`] and hands out per-resource clients, mirroring the
//! backend's route groups: `health`, `brands`, `campaigns`.
//!
//! ## Guarantees
//! - One `reqwest` client (and connection pool) per console process
//! - Resource clients borrow the transport; nothing is cloned per call

use super::brands::BrandsApi;
use super::campaigns::CampaignsApi;
use super::error::ApiError;
use super::transport::Transport;
use super::types::Health;
use crate::config::ConsoleConfig;

/// Typed client for the campaign backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    transport: Transport,
}

impl ApiClient {
    /// Builds a client from the resolved console configuration.
    ///
    /// # Errors
    /// Returns [`ApiError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &ConsoleConfig) -> Result<Self, ApiError> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// `GET /health` — the dashboard's single read-only probe.
    ///
    /// # Errors
    /// Any [`ApiError`]; the dashboard renders it as "unreachable".
    pub async fn health(&self) -> Result<Health, ApiError> {
        self.transport.get("/health").await
    }

    /// Brand CRUD operations.
    pub fn brands(&self) -> BrandsApi<'_> {
        BrandsApi::new(&self.transport)
    }

    /// Per-brand campaign CRUD operations.
    pub fn campaigns(&self) -> CampaignsApi<'_> {
        CampaignsApi::new(&self.transport)
    }
}
