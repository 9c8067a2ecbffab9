//! # Module: Request Bridge
//!
//! ## Responsibility
//! The seam between the synchronous render loop and async I/O. The loop
//! pushes [`ApiCommand`]s into a bounded channel; a Tokio task owning the
//! [`ApiClient`] spawns one task per command and pushes exactly one
//! [`ApiEvent`] back per command.
//!
//! ## Guarantees
//! - A slow request never blocks a later one (per-command spawn)
//! - Generation-sensitive responses carry their token back unchanged so the
//!   view can discard stale ones
//! - Channel pressure sheds with a warning rather than blocking the UI

use tokio::sync::mpsc::{Receiver, Sender};

use crate::api::types::{
    Brand, BrandPayload, BrandSummary, Campaign, CampaignCreate, CampaignCreated, Health,
};
use crate::api::ApiClient;

/// Capacity of the command channel (loop → bridge).
pub const COMMAND_QUEUE_CAP: usize = 64;

/// Capacity of the event channel (bridge → loop).
pub const EVENT_QUEUE_CAP: usize = 256;

/// Which view's brand list a `ListBrands` response feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandListTarget {
    /// The Brands tab's main list.
    BrandsTab,
    /// The Campaigns tab's brand selector.
    CampaignsTab,
}

/// A network action requested by the view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCommand {
    /// `GET /health`.
    FetchHealth,
    /// `GET /brands` for the given view.
    ListBrands {
        /// Destination view for the response.
        target: BrandListTarget,
    },
    /// `GET /brands/:id`.
    GetBrand {
        /// Brand to load.
        id: String,
    },
    /// `POST /brands`.
    CreateBrand {
        /// Full brand payload.
        payload: BrandPayload,
    },
    /// `PUT /brands/:id`.
    UpdateBrand {
        /// Brand to update.
        id: String,
        /// Full brand payload.
        payload: BrandPayload,
    },
    /// `DELETE /brands/:id`.
    DeleteBrand {
        /// Brand to delete.
        id: String,
    },
    /// `GET /brands/:brandId/campaigns`.
    ListCampaigns {
        /// Owning brand.
        brand_id: String,
        /// Generation token of the selection that triggered the fetch.
        generation: u64,
    },
    /// `GET /brands/:brandId/campaigns/:id`.
    GetCampaign {
        /// Owning brand.
        brand_id: String,
        /// Campaign to load.
        id: String,
        /// Generation token of the selection that triggered the fetch.
        generation: u64,
    },
    /// `POST /brands/:brandId/campaigns`.
    CreateCampaign {
        /// Owning brand.
        brand_id: String,
        /// Validated request body.
        payload: CampaignCreate,
    },
    /// `DELETE /brands/:brandId/campaigns/:id`.
    DeleteCampaign {
        /// Owning brand.
        brand_id: String,
        /// Campaign to delete.
        id: String,
    },
}

/// The outcome of one [`ApiCommand`], delivered back to the view layer.
///
/// Errors are carried as display strings; everything a view does with a
/// failure is show it.
#[derive(Debug)]
pub enum ApiEvent {
    /// Health probe outcome.
    Health(Result<Health, String>),
    /// Brand list for one view.
    BrandList {
        /// Destination view.
        target: BrandListTarget,
        /// Summaries or a display error.
        result: Result<Vec<BrandSummary>, String>,
    },
    /// Full brand loaded.
    BrandLoaded(Result<Brand, String>),
    /// Brand created; the server's copy is returned.
    BrandCreated(Result<Brand, String>),
    /// Brand updated; the server's copy is returned.
    BrandUpdated(Result<Brand, String>),
    /// Brand deleted.
    BrandDeleted {
        /// Deleted brand id.
        id: String,
        /// Unit or a display error.
        result: Result<(), String>,
    },
    /// Campaign list for the brand selected at `generation`.
    CampaignList {
        /// Token carried over from the triggering command.
        generation: u64,
        /// Campaigns or a display error.
        result: Result<Vec<Campaign>, String>,
    },
    /// Campaign detail for the selection at `generation`.
    CampaignLoaded {
        /// Token carried over from the triggering command.
        generation: u64,
        /// Campaign or a display error.
        result: Result<Campaign, String>,
    },
    /// Campaign created; pipeline verdict and opaque result.
    CampaignCreated(Result<CampaignCreated, String>),
    /// Campaign deleted.
    CampaignDeleted {
        /// Deleted campaign id.
        id: String,
        /// Unit or a display error.
        result: Result<(), String>,
    },
}

/// Runs the bridge until the command channel closes.
///
/// Each received command is executed on its own task so requests overlap;
/// every command produces exactly one event. If the event channel has been
/// dropped the outcome is discarded with a warning.
pub async fn run(client: ApiClient, mut commands: Receiver<ApiCommand>, events: Sender<ApiEvent>) {
    while let Some(command) = commands.recv().await {
        let client = client.clone();
        let events = events.clone();
        tokio::spawn(async move {
            tracing::debug!(?command, "bridge executing");
            let event = execute(&client, command).await;
            if events.send(event).await.is_err() {
                tracing::warn!("event channel closed, dropping response");
            }
        });
    }
    tracing::debug!("command channel closed, bridge stopping");
}

/// Executes one command against the API client.
async fn execute(client: &ApiClient, command: ApiCommand) -> ApiEvent {
    match command {
        ApiCommand::FetchHealth => {
            ApiEvent::Health(client.health().await.map_err(|e| e.to_string()))
        }
        ApiCommand::ListBrands { target } => ApiEvent::BrandList {
            target,
            result: client.brands().list().await.map_err(|e| e.to_string()),
        },
        ApiCommand::GetBrand { id } => {
            ApiEvent::BrandLoaded(client.brands().get(&id).await.map_err(|e| e.to_string()))
        }
        ApiCommand::CreateBrand { payload } => ApiEvent::BrandCreated(
            client
                .brands()
                .create(&payload)
                .await
                .map_err(|e| e.to_string()),
        ),
        ApiCommand::UpdateBrand { id, payload } => ApiEvent::BrandUpdated(
            client
                .brands()
                .update(&id, &payload)
                .await
                .map_err(|e| e.to_string()),
        ),
        ApiCommand::DeleteBrand { id } => {
            let result = client.brands().delete(&id).await.map_err(|e| e.to_string());
            ApiEvent::BrandDeleted { id, result }
        }
        ApiCommand::ListCampaigns {
            brand_id,
            generation,
        } => ApiEvent::CampaignList {
            generation,
            result: client
                .campaigns()
                .list(&brand_id)
                .await
                .map_err(|e| e.to_string()),
        },
        ApiCommand::GetCampaign {
            brand_id,
            id,
            generation,
        } => ApiEvent::CampaignLoaded {
            generation,
            result: client
                .campaigns()
                .get(&brand_id, &id)
                .await
                .map_err(|e| e.to_string()),
        },
        ApiCommand::CreateCampaign { brand_id, payload } => ApiEvent::CampaignCreated(
            client
                .campaigns()
                .create(&brand_id, &payload)
                .await
                .map_err(|e| e.to_string()),
        ),
        ApiCommand::DeleteCampaign { brand_id, id } => {
            let result = client
                .campaigns()
                .delete(&brand_id, &id)
                .await
                .map_err(|e| e.to_string());
            ApiEvent::CampaignDeleted { id, result }
        }
    }
}
