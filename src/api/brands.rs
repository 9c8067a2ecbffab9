//! # Module: Brands Resource Client
//!
//! ## Responsibility
//! Typed CRUD over `/brands`, matching the backend routes one-for-one.
//!
//! ## Guarantees
//! - `delete` resolves on `204 No Content` without touching the body
//! - A missing brand surfaces as an [`ApiError::Server`] with the backend's
//!   "Brand not found" detail, never as a decode failure

use super::error::ApiError;
use super::transport::Transport;
use super::types::{Brand, BrandPayload, BrandSummary};

/// Client for the `/brands` route group.
#[derive(Debug)]
pub struct BrandsApi<'a> {
    transport: &'a Transport,
}

impl<'a> BrandsApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// `GET /brands` — id/name summaries for list views.
    ///
    /// # Errors
    /// Any [`ApiError`].
    pub async fn list(&self) -> Result<Vec<BrandSummary>, ApiError> {
        self.transport.get("/brands").await
    }

    /// `POST /brands` — create a brand; every field may be empty.
    ///
    /// # Errors
    /// Any [`ApiError`].
    pub async fn create(&self, payload: &BrandPayload) -> Result<Brand, ApiError> {
        self.transport.post("/brands", payload).await
    }

    /// `GET /brands/:id` — the full brand document.
    ///
    /// # Errors
    /// [`ApiError::Server`] with status 404 when the brand does not exist.
    pub async fn get(&self, id: &str) -> Result<Brand, ApiError> {
        self.transport.get(&format!("/brands/{id}")).await
    }

    /// `PUT /brands/:id` — update; the full field set is sent.
    ///
    /// # Errors
    /// Any [`ApiError`].
    pub async fn update(&self, id: &str, payload: &BrandPayload) -> Result<Brand, ApiError> {
        self.transport.put(&format!("/brands/{id}"), payload).await
    }

    /// `DELETE /brands/:id` — resolves to no value.
    ///
    /// # Errors
    /// Any [`ApiError`].
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.transport.delete(&format!("/brands/{id}")).await
    }
}
