//! # Module: Console Widgets
//!
//! ## Responsibility
//! One renderer per panel. Each widget exposes `render(f, area, app)` and
//! reads app state without mutating it.

pub mod brands;
pub mod campaigns;
pub mod dashboard;
pub mod form;
pub mod toast;

/// Truncates a string to a maximum width, adding `…` if truncated.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let count = s.chars().count();
    if count <= max_width {
        return s.to_string();
    }
    if max_width <= 1 {
        return "\u{2026}".to_string();
    }
    let kept: String = s.chars().take(max_width - 1).collect();
    format!("{kept}\u{2026}")
}

/// Keeps the tail of a string within a maximum width, prefixing `…` when
/// the head is cut off. Used for fields being edited, where the caret sits
/// at the end.
pub fn tail(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let count = s.chars().count();
    if count <= max_width {
        return s.to_string();
    }
    if max_width <= 1 {
        return "\u{2026}".to_string();
    }
    let kept: String = s
        .chars()
        .skip(count - (max_width - 1))
        .collect();
    format!("\u{2026}{kept}")
}
