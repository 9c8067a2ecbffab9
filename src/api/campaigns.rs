//! # Module: Campaigns Resource Client
//!
//! ## Responsibility
//! Typed CRUD over `/brands/:brandId/campaigns`. Campaigns are children of
//! a brand; there is no flat campaign surface.
//!
//! ## Guarantees
//! - `create` embeds `brand_id` in the body as well as the path (the
//!   backend reads it from the body)
//! - `delete` resolves on `204 No Content` without touching the body

use super::error::ApiError;
use super::transport::Transport;
use super::types::{Campaign, CampaignCreate, CampaignCreated};

/// Client for the `/brands/:brandId/campaigns` route group.
#[derive(Debug)]
pub struct CampaignsApi<'a> {
    transport: &'a Transport,
}

impl<'a> CampaignsApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// `GET /brands/:brandId/campaigns` — all campaigns of one brand.
    ///
    /// # Errors
    /// Any [`ApiError`].
    pub async fn list(&self, brand_id: &str) -> Result<Vec<Campaign>, ApiError> {
        self.transport
            .get(&format!("/brands/{brand_id}/campaigns"))
            .await
    }

    /// `GET /brands/:brandId/campaigns/:id` — one campaign with its opaque
    /// pipeline payloads.
    ///
    /// # Errors
    /// [`ApiError::Server`] with status 404 when the campaign does not exist.
    pub async fn get(&self, brand_id: &str, id: &str) -> Result<Campaign, ApiError> {
        self.transport
            .get(&format!("/brands/{brand_id}/campaigns/{id}"))
            .await
    }

    /// `POST /brands/:brandId/campaigns` — runs the backend pipeline and
    /// returns its verdict plus the opaque result payload.
    ///
    /// # Errors
    /// Any [`ApiError`].
    pub async fn create(
        &self,
        brand_id: &str,
        body: &CampaignCreate,
    ) -> Result<CampaignCreated, ApiError> {
        self.transport
            .post(&format!("/brands/{brand_id}/campaigns"), body)
            .await
    }

    /// `DELETE /brands/:brandId/campaigns/:id` — resolves to no value.
    ///
    /// # Errors
    /// Any [`ApiError`].
    pub async fn delete(&self, brand_id: &str, id: &str) -> Result<(), ApiError> {
        self.transport
            .delete(&format!("/brands/{brand_id}/campaigns/{id}"))
            .await
    }
}
