//! Toast queue semantics: ordering, bounding, timer-based eviction.

use std::time::Duration;

use growth_console::tui::app::{App, ToastKind, TOASTS_CAP};
use growth_console::tui::bridge::ApiEvent;

#[test]
fn test_queue_ordered_by_creation_and_bounded() {
    let mut app = App::new(Duration::from_secs(5));
    for i in 0..(TOASTS_CAP + 3) {
        app.push_success(format!("toast {i}"));
    }
    assert_eq!(app.toasts.len(), TOASTS_CAP);
    // Oldest evicted first; remaining are still in creation order.
    assert_eq!(app.toasts[0].text, "toast 3");
    assert!(app
        .toasts
        .iter()
        .zip(app.toasts.iter().skip(1))
        .all(|(a, b)| a.created <= b.created));
}

#[test]
fn test_each_toast_self_removes_after_fixed_delay() {
    let ttl = Duration::from_millis(200);
    let mut app = App::new(ttl);
    app.push_success("first");
    let first_created = app.toasts[0].created;

    // Evicting before the delay keeps it; after the delay removes it.
    app.evict_toasts(first_created + Duration::from_millis(100));
    assert_eq!(app.toasts.len(), 1);
    app.evict_toasts(first_created + ttl);
    assert!(app.toasts.is_empty());
}

#[test]
fn test_failures_surface_as_error_toasts() {
    let mut app = App::new(Duration::from_secs(5));
    app.apply(ApiEvent::BrandCreated(Err("detail from server".to_string())));
    app.apply(ApiEvent::CampaignCreated(Err(
        "network error: timed out".to_string()
    )));

    assert_eq!(app.toasts.len(), 2);
    assert!(app.toasts.iter().all(|t| t.kind == ToastKind::Error));
    assert_eq!(app.toasts[0].text, "detail from server");
}

#[test]
fn test_success_toast_wording() {
    let mut app = App::new(Duration::from_secs(5));
    app.apply(ApiEvent::BrandDeleted {
        id: "b1".to_string(),
        result: Ok(()),
    });
    assert!(app.toasts.iter().any(|t| t.text == "Brand deleted"));
}
