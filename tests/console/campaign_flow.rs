//! Campaign flows: brand-selection-driven fetches, stale-response discard,
//! detail expansion, two-step delete, and budget validation.

use std::time::Duration;

use growth_console::api::types::{BrandSummary, Campaign};
use growth_console::tui::app::{App, CampaignsPane, Tab, ToastKind};
use growth_console::tui::bridge::{ApiCommand, ApiEvent, BrandListTarget};

fn app_with_brands() -> App {
    let mut app = App::new(Duration::from_secs(5));
    app.select_tab(Tab::Campaigns);
    app.apply(ApiEvent::BrandList {
        target: BrandListTarget::CampaignsTab,
        result: Ok(vec![
            BrandSummary {
                id: "b1".to_string(),
                name: "Acme".to_string(),
            },
            BrandSummary {
                id: "b2".to_string(),
                name: "Globex".to_string(),
            },
        ]),
    });
    app
}

fn campaign(id: &str, brand: &str) -> Campaign {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "brand_id": brand,
        "status": "completed",
        "goal": "Launch",
        "target_audience": "B2B",
        "budget": 100.0,
        "research": {"summary": "opaque"},
        "qa_report": {"critical_issues": []}
    }))
    .expect("campaign fixture decodes")
}

#[test]
fn test_brand_selection_drives_dependent_fetch() {
    let mut app = app_with_brands();

    let commands = app.campaigns_select_brand();
    assert_eq!(commands.len(), 1, "exactly one campaign-list fetch");
    let generation = app.campaigns.generation;
    assert_eq!(
        commands,
        vec![ApiCommand::ListCampaigns {
            brand_id: "b1".to_string(),
            generation
        }]
    );

    app.apply(ApiEvent::CampaignList {
        generation,
        result: Ok(vec![campaign("c1", "b1"), campaign("c2", "b1")]),
    });
    assert_eq!(app.campaigns.campaigns.len(), 2);
    assert!(!app.campaigns.list_loading);
}

#[test]
fn test_switching_brand_clears_detail_and_discards_stale_response() {
    let mut app = app_with_brands();

    // Select b1; its list arrives and a campaign is expanded.
    app.campaigns_select_brand();
    let first_generation = app.campaigns.generation;
    app.apply(ApiEvent::CampaignList {
        generation: first_generation,
        result: Ok(vec![campaign("c1", "b1")]),
    });
    app.campaigns_switch_pane(CampaignsPane::Campaigns);
    app.campaigns_load_selected();
    app.apply(ApiEvent::CampaignLoaded {
        generation: first_generation,
        result: Ok(campaign("c1", "b1")),
    });
    assert!(app.campaigns.expanded.is_some());

    // Switch to b2 before its list returns: the detail panel clears and
    // exactly one new fetch goes out.
    app.campaigns_switch_pane(CampaignsPane::Brands);
    app.campaigns_cursor_down();
    let commands = app.campaigns_select_brand();
    assert_eq!(commands.len(), 1);
    assert!(app.campaigns.expanded.is_none());

    // The superseded b1 response arrives late and must not overwrite.
    app.apply(ApiEvent::CampaignList {
        generation: first_generation,
        result: Ok(vec![campaign("c1", "b1")]),
    });
    assert!(app.campaigns.campaigns.is_empty());
    assert!(app.campaigns.list_loading);

    // The b2 response lands normally.
    app.apply(ApiEvent::CampaignList {
        generation: app.campaigns.generation,
        result: Ok(vec![campaign("c9", "b2")]),
    });
    assert_eq!(app.campaigns.campaigns[0].id, "c9");
}

#[test]
fn test_delete_removes_exactly_that_id_and_clears_its_panel() {
    let mut app = app_with_brands();
    app.campaigns_select_brand();
    let generation = app.campaigns.generation;
    app.apply(ApiEvent::CampaignList {
        generation,
        result: Ok(vec![
            campaign("c1", "b1"),
            campaign("c2", "b1"),
            campaign("c3", "b1"),
        ]),
    });

    // Expand c2, then delete it via the two-step confirm.
    app.campaigns_switch_pane(CampaignsPane::Campaigns);
    app.campaigns_cursor_down();
    app.campaigns_load_selected();
    app.apply(ApiEvent::CampaignLoaded {
        generation,
        result: Ok(campaign("c2", "b1")),
    });

    app.campaigns_request_delete();
    let commands = app.campaigns_confirm_delete();
    assert_eq!(
        commands,
        vec![ApiCommand::DeleteCampaign {
            brand_id: "b1".to_string(),
            id: "c2".to_string()
        }]
    );

    app.apply(ApiEvent::CampaignDeleted {
        id: "c2".to_string(),
        result: Ok(()),
    });

    let ids: Vec<&str> = app
        .campaigns
        .campaigns
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids, vec!["c1", "c3"], "other campaigns unaffected");
    assert!(app.campaigns.expanded.is_none(), "expanded panel cleared");
}

#[test]
fn test_only_one_delete_confirmation_visible() {
    let mut app = app_with_brands();
    app.campaigns_select_brand();
    app.apply(ApiEvent::CampaignList {
        generation: app.campaigns.generation,
        result: Ok(vec![campaign("c1", "b1"), campaign("c2", "b1")]),
    });
    app.campaigns_switch_pane(CampaignsPane::Campaigns);

    app.campaigns_request_delete();
    assert_eq!(app.campaigns.confirm_delete.as_deref(), Some("c1"));
    app.campaigns_cursor_down();
    app.campaigns_request_delete();
    assert_eq!(
        app.campaigns.confirm_delete.as_deref(),
        Some("c2"),
        "new request replaces the previous confirmation"
    );
}

#[test]
fn test_budget_validation_blocks_before_network() {
    let mut app = app_with_brands();
    app.campaigns_select_brand();
    app.campaigns_begin_create();

    for bad in ["-5", "ten", "", "NaN"] {
        app.campaigns.form.budget = bad.to_string();
        let commands = app.campaigns_submit();
        assert!(commands.is_empty(), "budget {bad:?} must not reach the network");
        assert!(app.campaigns.pending.is_none());
    }
    assert!(app.toasts.iter().all(|t| t.kind == ToastKind::Error));

    // A valid decimal goes through, parsed numerically.
    app.campaigns.form.goal = "Launch".to_string();
    app.campaigns.form.budget = "250.50".to_string();
    let commands = app.campaigns_submit();
    match commands.as_slice() {
        [ApiCommand::CreateCampaign { payload, .. }] => assert_eq!(payload.budget, 250.5),
        other => panic!("expected create command, got {other:?}"),
    }
}

#[test]
fn test_create_shows_response_and_refreshes_list() {
    let mut app = app_with_brands();
    app.campaigns_select_brand();
    app.apply(ApiEvent::CampaignList {
        generation: app.campaigns.generation,
        result: Ok(Vec::new()),
    });

    app.campaigns_begin_create();
    app.campaigns.form.goal = "Launch".to_string();
    app.campaigns.form.target_audience = "B2B".to_string();
    app.campaigns.form.budget = "10".to_string();
    app.campaigns_submit();

    let created = serde_json::from_value(serde_json::json!({
        "id": "c7",
        "status": "completed",
        "research": {"summary": "pipeline output"}
    }))
    .expect("create response decodes");

    let followups = app.apply(ApiEvent::CampaignCreated(Ok(created)));
    assert_eq!(followups.len(), 1, "campaign list refresh");
    assert!(!app.campaigns.editing, "form closed");
    assert!(
        app.campaigns
            .created
            .as_ref()
            .is_some_and(|c| c.research.is_some()),
        "opaque payload kept verbatim for display"
    );
}
