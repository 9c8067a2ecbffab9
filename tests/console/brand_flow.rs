//! Brand CRUD flows: list → load → edit → submit → refresh.

use std::time::Duration;

use growth_console::api::types::{Brand, BrandSummary};
use growth_console::tui::app::{App, BrandsMode, BrandsPending, Tab, ToastKind};
use growth_console::tui::bridge::{ApiCommand, ApiEvent, BrandListTarget};

fn app() -> App {
    App::new(Duration::from_secs(5))
}

fn server_brand(id: &str) -> Brand {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": "Acme",
        "description": "Rocket supplies",
        "industry": "Aerospace",
        "tone": "Bold",
        "usp": "Fastest delivery",
        "target_audience": "Coyotes",
        "memory": {
            "past_campaigns": [],
            "latest_insights": ["desert ads work", "anvil fatigue"],
            "brand_guidelines": {
                "visual_style": "Red and dust",
                "preferred_channels": ["Instagram", "TikTok", "Email"],
                "content_restrictions": ["no anvils"]
            }
        },
        "created_at": "2025-06-01T12:00:00Z",
        "updated_at": "2025-06-01T12:00:00Z"
    }))
    .expect("brand fixture decodes")
}

#[test]
fn test_full_lifecycle_list_load_update() {
    let mut app = app();

    // Mount the tab and deliver the list.
    let mount = app.select_tab(Tab::Brands);
    assert_eq!(mount.len(), 1);
    app.apply(ApiEvent::BrandList {
        target: BrandListTarget::BrandsTab,
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
    assert!(!app.brands.list_loading);
    assert_eq!(app.brands.brands.len(), 2);

    // Select an entry: a fresh get, then a one-way server→form sync.
    let load = app.brands_load_selected();
    assert_eq!(
        load,
        vec![ApiCommand::GetBrand {
            id: "b1".to_string()
        }]
    );
    app.apply(ApiEvent::BrandLoaded(Ok(server_brand("b1"))));

    assert_eq!(app.brands.mode, BrandsMode::Update);
    assert_eq!(app.brands.form.name, "Acme");
    assert_eq!(
        app.brands.form.preferred_channels,
        "Instagram\nTikTok\nEmail"
    );
    assert_eq!(
        app.brands.form.latest_insights,
        "desert ads work\nanvil fatigue"
    );

    // Local edits never write back until submit.
    app.brands.form.name = "Acme Corp".to_string();
    assert_eq!(
        app.brands.current.as_ref().map(|b| b.name.as_str()),
        Some("Acme")
    );

    // Submit the update; the payload carries the edited field set.
    let update = app.brands_submit();
    match update.as_slice() {
        [ApiCommand::UpdateBrand { id, payload }] => {
            assert_eq!(id, "b1");
            assert_eq!(payload.name, "Acme Corp");
            assert_eq!(
                payload.brand_guidelines.preferred_channels,
                vec!["Instagram", "TikTok", "Email"]
            );
        }
        other => panic!("expected update command, got {other:?}"),
    }
    assert_eq!(app.brands.pending, Some(BrandsPending::Update));
}

#[test]
fn test_create_round_trip_form_mirrors_server_response() {
    let mut app = app();
    app.brands_begin_create();
    app.brands.form.name = "acme".to_string();

    let submit = app.brands_submit();
    assert_eq!(submit.len(), 1);

    // The backend normalizes/fills fields; the form must mirror its copy,
    // not keep the local draft.
    let followups = app.apply(ApiEvent::BrandCreated(Ok(server_brand("b7"))));
    assert_eq!(
        followups,
        vec![ApiCommand::ListBrands {
            target: BrandListTarget::BrandsTab
        }]
    );
    assert_eq!(app.brands.form.name, "Acme");
    assert_eq!(app.brands.form.visual_style, "Red and dust");
    assert_eq!(app.brands.mode, BrandsMode::Update);
    assert!(app
        .toasts
        .iter()
        .any(|t| t.kind == ToastKind::Success && t.text.contains("b7")));
}

#[test]
fn test_delete_clears_loaded_brand_and_refreshes() {
    let mut app = app();
    app.apply(ApiEvent::BrandLoaded(Ok(server_brand("b1"))));
    app.brands_request_delete();
    let confirm = app.brands_confirm_delete();
    assert_eq!(
        confirm,
        vec![ApiCommand::DeleteBrand {
            id: "b1".to_string()
        }]
    );

    let followups = app.apply(ApiEvent::BrandDeleted {
        id: "b1".to_string(),
        result: Ok(()),
    });
    assert_eq!(followups.len(), 1, "list refresh after delete");
    assert!(app.brands.current.is_none());
    assert_eq!(app.brands.mode, BrandsMode::Browse);
    assert_eq!(app.brands.form.name, "");
}

#[test]
fn test_failed_action_returns_view_to_pre_action_state() {
    let mut app = app();
    app.apply(ApiEvent::BrandLoaded(Ok(server_brand("b1"))));
    let before_mode = app.brands.mode;
    let before_form = app.brands.form.clone();

    app.brands_submit();
    app.apply(ApiEvent::BrandUpdated(Err("Brand not found".to_string())));

    assert!(app.brands.pending.is_none(), "back to idle");
    assert_eq!(app.brands.mode, before_mode);
    assert_eq!(app.brands.form, before_form);
    assert!(app
        .toasts
        .iter()
        .any(|t| t.kind == ToastKind::Error && t.text == "Brand not found"));
}

#[test]
fn test_list_error_rendered_inline_not_fatal() {
    let mut app = app();
    app.select_tab(Tab::Brands);
    app.apply(ApiEvent::BrandList {
        target: BrandListTarget::BrandsTab,
        result: Err("network error: connection refused".to_string()),
    });
    assert!(app.brands.list_error.is_some());
    assert!(!app.should_quit);

    // A successful refresh clears the inline error.
    app.brands_refresh();
    app.apply(ApiEvent::BrandList {
        target: BrandListTarget::BrandsTab,
        result: Ok(Vec::new()),
    });
    assert!(app.brands.list_error.is_none());
}
