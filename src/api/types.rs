//! # Module: API Data Transfer Objects
//!
//! ## Responsibility
//! Pass-through DTOs mirroring backend JSON. The client performs no
//! validation or transformation here; pipeline payloads stay opaque
//! `serde_json::Value`s displayed verbatim.
//!
//! ## Guarantees
//! - Every optional or nested field is defensively defaulted, so a sparse
//!   backend document never fails to decode
//! - Serialized request bodies match the backend schemas field-for-field

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Backend-reported status, `"ok"` when healthy.
    #[serde(default)]
    pub status: String,
}

/// One entry of `GET /brands` — list views only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandSummary {
    /// Server-issued brand id.
    pub id: String,
    /// Display name, possibly empty.
    #[serde(default)]
    pub name: String,
}

/// Nested brand guidelines, optional everywhere they appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandGuidelines {
    /// Free-text visual style description.
    #[serde(default)]
    pub visual_style: String,
    /// Preferred marketing channels.
    #[serde(default)]
    pub preferred_channels: Vec<String>,
    /// Content restrictions the backend agents must honor.
    #[serde(default)]
    pub content_restrictions: Vec<String>,
}

/// Backend-owned brand memory; the client only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandMemory {
    /// Ids of campaigns previously run for this brand.
    #[serde(default)]
    pub past_campaigns: Vec<String>,
    /// Free-text insights accumulated by the backend.
    #[serde(default)]
    pub latest_insights: Vec<String>,
    /// Guidelines, `{}` on a fresh brand.
    #[serde(default)]
    pub brand_guidelines: BrandGuidelines,
}

/// Full brand document: `GET /brands/:id` and create/update responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Server-issued brand id.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Industry label, e.g. "Tech".
    #[serde(default)]
    pub industry: String,
    /// Voice/tone label, e.g. "Professional".
    #[serde(default)]
    pub tone: String,
    /// Unique selling point.
    #[serde(default)]
    pub usp: String,
    /// Audience description, e.g. "B2B".
    #[serde(default)]
    pub target_audience: String,
    /// Backend-owned memory block.
    #[serde(default)]
    pub memory: BrandMemory,
    /// ISO-8601 creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// ISO-8601 last-update timestamp.
    #[serde(default)]
    pub updated_at: String,
}

/// Request body for `POST /brands` and `PUT /brands/:id`.
///
/// The backend defaults every field, so an empty payload is legal; create
/// and update share one shape, and update sends the full field set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BrandPayload {
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Industry label.
    pub industry: String,
    /// Voice/tone label.
    pub tone: String,
    /// Unique selling point.
    pub usp: String,
    /// Audience description.
    pub target_audience: String,
    /// Nested guidelines block.
    pub brand_guidelines: BrandGuidelines,
    /// Seed insights stored into brand memory.
    pub latest_insights: Vec<String>,
}

/// Full campaign document, as listed and fetched per brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    /// Server-issued campaign id.
    pub id: String,
    /// Owning brand id.
    #[serde(default)]
    pub brand_id: String,
    /// Owning brand name, when the backend joins it in.
    #[serde(default)]
    pub brand_name: Option<String>,
    /// Pipeline outcome: `"completed"` or `"failed"`.
    #[serde(default)]
    pub status: String,
    /// Campaign goal.
    #[serde(default)]
    pub goal: String,
    /// Audience description.
    #[serde(default)]
    pub target_audience: String,
    /// Budget in whatever currency the backend assumes.
    #[serde(default)]
    pub budget: f64,
    /// Opaque research payload, displayed verbatim.
    #[serde(default)]
    pub research: Option<Value>,
    /// Opaque strategy payload, displayed verbatim.
    #[serde(default)]
    pub strategy: Option<Value>,
    /// Opaque content payload, displayed verbatim.
    #[serde(default)]
    pub content: Option<Value>,
    /// Opaque QA report, displayed verbatim.
    #[serde(default)]
    pub qa_report: Option<Value>,
    /// Opaque analytics payload, displayed verbatim.
    #[serde(default)]
    pub analytics: Option<Value>,
    /// ISO-8601 creation timestamp, when present.
    #[serde(default)]
    pub created_at: Option<String>,
    /// ISO-8601 last-update timestamp, when present.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Request body for `POST /brands/:brandId/campaigns`.
///
/// `brand_id` is embedded in the body as well as the path; the backend
/// reads it from the body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignCreate {
    /// Owning brand id.
    pub brand_id: String,
    /// Campaign goal.
    pub goal: String,
    /// Audience description.
    pub target_audience: String,
    /// Budget; validated non-negative client-side before any network call.
    pub budget: f64,
}

/// Create-campaign response: the pipeline result is echoed back opaquely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignCreated {
    /// Server-issued campaign id.
    pub id: String,
    /// Pipeline outcome: `"completed"` or `"failed"`.
    #[serde(default)]
    pub status: String,
    /// Opaque pipeline output, displayed verbatim.
    #[serde(default)]
    pub research: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_decodes_with_empty_memory() {
        let brand: Brand = serde_json::from_str(
            r#"{"id":"brand_1","name":"Acme","memory":{}}"#,
        )
        .expect("sparse brand should decode");
        assert_eq!(brand.id, "brand_1");
        assert!(brand.memory.latest_insights.is_empty());
        assert_eq!(brand.memory.brand_guidelines, BrandGuidelines::default());
    }

    #[test]
    fn test_brand_decodes_without_memory_key() {
        let brand: Brand = serde_json::from_str(r#"{"id":"brand_1"}"#)
            .expect("brand without memory should decode");
        assert!(brand.memory.past_campaigns.is_empty());
        assert_eq!(brand.created_at, "");
    }

    #[test]
    fn test_brand_decodes_full_memory() {
        let brand: Brand = serde_json::from_str(
            r#"{
                "id": "brand_1",
                "name": "Acme",
                "memory": {
                    "past_campaigns": ["c1"],
                    "latest_insights": ["video is up"],
                    "brand_guidelines": {
                        "visual_style": "bold",
                        "preferred_channels": ["Instagram", "Email"],
                        "content_restrictions": ["no health claims"]
                    }
                },
                "created_at": "2025-01-01T00:00:00Z",
                "updated_at": "2025-01-02T00:00:00Z"
            }"#,
        )
        .expect("full brand should decode");
        assert_eq!(
            brand.memory.brand_guidelines.preferred_channels,
            vec!["Instagram", "Email"]
        );
        assert_eq!(brand.memory.past_campaigns, vec!["c1"]);
    }

    #[test]
    fn test_campaign_decodes_with_opaque_payloads() {
        let campaign: Campaign = serde_json::from_str(
            r#"{
                "id": "c1",
                "brand_id": "brand_1",
                "status": "completed",
                "goal": "Launch",
                "target_audience": "B2B",
                "budget": 250.5,
                "research": {"summary": "dense"},
                "qa_report": {"critical_issues": []}
            }"#,
        )
        .expect("campaign should decode");
        assert_eq!(campaign.budget, 250.5);
        assert!(campaign.research.is_some());
        assert!(campaign.strategy.is_none());
        assert!(campaign.brand_name.is_none());
    }

    #[test]
    fn test_campaign_created_decodes_without_research() {
        let created: CampaignCreated =
            serde_json::from_str(r#"{"id":"c1","status":"failed"}"#)
                .expect("create response should decode");
        assert_eq!(created.status, "failed");
        assert!(created.research.is_none());
    }

    #[test]
    fn test_brand_payload_serializes_backend_field_names() {
        let payload = BrandPayload {
            name: "Acme".to_string(),
            brand_guidelines: BrandGuidelines {
                visual_style: "bold".to_string(),
                preferred_channels: vec!["Email".to_string()],
                content_restrictions: vec![],
            },
            ..BrandPayload::default()
        };
        let value = serde_json::to_value(&payload).expect("payload serializes");
        assert_eq!(value["name"], "Acme");
        assert_eq!(value["brand_guidelines"]["visual_style"], "bold");
        assert_eq!(value["brand_guidelines"]["preferred_channels"][0], "Email");
        assert!(value["latest_insights"].as_array().is_some());
    }

    #[test]
    fn test_campaign_create_embeds_brand_id() {
        let body = CampaignCreate {
            brand_id: "brand_1".to_string(),
            goal: "Launch".to_string(),
            target_audience: "B2B".to_string(),
            budget: 250.5,
        };
        let value = serde_json::to_value(&body).expect("body serializes");
        assert_eq!(value["brand_id"], "brand_1");
        assert_eq!(value["budget"], 250.5);
    }
}
