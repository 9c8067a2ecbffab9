//! Cross-view synchronization: mount-time refetches, pending-action guards,
//! and shed-command rollback.

use std::time::Duration;

use growth_console::api::types::{Brand, BrandSummary};
use growth_console::tui::app::{App, BrandsPending, HealthProbe, Tab};
use growth_console::tui::bridge::{ApiCommand, ApiEvent, BrandListTarget};

fn app() -> App {
    App::new(Duration::from_secs(5))
}

#[test]
fn test_every_tab_refetches_on_mount() {
    let mut app = app();

    let dashboard = app.select_tab(Tab::Dashboard);
    assert_eq!(dashboard, vec![ApiCommand::FetchHealth]);

    let brands = app.select_tab(Tab::Brands);
    assert_eq!(
        brands,
        vec![ApiCommand::ListBrands {
            target: BrandListTarget::BrandsTab
        }]
    );

    let campaigns = app.select_tab(Tab::Campaigns);
    assert_eq!(
        campaigns,
        vec![ApiCommand::ListBrands {
            target: BrandListTarget::CampaignsTab
        }]
    );

    // Returning to a tab refetches again: no cross-mount cache.
    let again = app.select_tab(Tab::Brands);
    assert_eq!(again.len(), 1);
}

#[test]
fn test_campaigns_remount_refetches_selected_brand_campaigns() {
    let mut app = app();
    app.select_tab(Tab::Campaigns);
    app.apply(ApiEvent::BrandList {
        target: BrandListTarget::CampaignsTab,
        result: Ok(vec![BrandSummary {
            id: "b1".to_string(),
            name: "Acme".to_string(),
        }]),
    });
    app.campaigns_select_brand();
    let generation_before = app.campaigns.generation;

    app.select_tab(Tab::Dashboard);
    let remount = app.select_tab(Tab::Campaigns);
    assert_eq!(remount.len(), 2, "brand selector + campaign list");
    assert!(
        app.campaigns.generation > generation_before,
        "remount supersedes any in-flight list response"
    );
}

#[test]
fn test_no_state_leaks_between_brand_views() {
    let mut app = app();
    // The Brands tab list and the Campaigns tab selector are independent.
    app.apply(ApiEvent::BrandList {
        target: BrandListTarget::BrandsTab,
        result: Ok(vec![BrandSummary {
            id: "b1".to_string(),
            name: "Acme".to_string(),
        }]),
    });
    assert_eq!(app.brands.brands.len(), 1);
    assert!(app.campaigns.brands.is_empty());
}

#[test]
fn test_pending_guard_blocks_duplicate_submission() {
    let mut app = app();
    app.brands_begin_create();
    let first = app.brands_submit();
    assert_eq!(first.len(), 1);
    let second = app.brands_submit();
    assert!(second.is_empty(), "in-flight action disables re-trigger");

    // The response re-enables the action.
    app.apply(ApiEvent::BrandCreated(Err("boom".to_string())));
    let third = app.brands_submit();
    assert_eq!(third.len(), 1);
}

#[test]
fn test_rollback_restores_idle_after_shed() {
    let mut app = app();
    app.brands.brands = vec![BrandSummary {
        id: "b1".to_string(),
        name: "Acme".to_string(),
    }];
    let commands = app.brands_load_selected();
    assert_eq!(app.brands.pending, Some(BrandsPending::Load));

    // The dispatcher failed to enqueue; rollback must return to idle so the
    // user can re-trigger.
    app.rollback(&commands[0]);
    assert!(app.brands.pending.is_none());
    assert_eq!(app.brands_load_selected().len(), 1);
}

#[test]
fn test_dashboard_probe_is_loading_until_response() {
    let mut app = app();
    app.select_tab(Tab::Dashboard);
    assert_eq!(app.dashboard.probe, HealthProbe::Loading);

    app.apply(ApiEvent::Health(Err("connection refused".to_string())));
    assert!(matches!(app.dashboard.probe, HealthProbe::Unreachable(_)));

    // Manual re-probe returns to loading; no automatic retry exists.
    let commands = app.dashboard_refresh();
    assert_eq!(commands, vec![ApiCommand::FetchHealth]);
    assert_eq!(app.dashboard.probe, HealthProbe::Loading);
}

#[test]
fn test_loaded_brand_does_not_outlive_its_view_semantics() {
    let mut app = app();
    let brand: Brand = serde_json::from_value(serde_json::json!({"id": "b1"}))
        .expect("brand fixture decodes");
    app.apply(ApiEvent::BrandLoaded(Ok(brand)));

    // Deleting the loaded brand drops the transient copy entirely.
    app.brands_request_delete();
    app.brands_confirm_delete();
    app.apply(ApiEvent::BrandDeleted {
        id: "b1".to_string(),
        result: Ok(()),
    });
    assert!(app.brands.current.is_none());
}
