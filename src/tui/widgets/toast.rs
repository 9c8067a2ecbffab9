//! # Widget: Toast Overlay
//!
//! ## Responsibility
//! Renders the toast queue as a top-right overlay stack, oldest first.
//! Toasts are already bounded and self-expiring; this widget only draws
//! whatever the queue holds this frame.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::tui::app::{App, ToastKind};

/// Widest a toast is allowed to render.
const MAX_TOAST_WIDTH: u16 = 48;

/// Renders the toast stack over the given area.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    for (i, toast) in app.toasts.iter().enumerate() {
        let y = area.y + 1 + i as u16;
        if y >= area.y + area.height.saturating_sub(1) {
            break;
        }

        let (icon, color) = match toast.kind {
            ToastKind::Success => ("\u{2714}", Color::Green),
            ToastKind::Error => ("\u{2716}", Color::Red),
        };
        let text = format!(" {icon} {} ", toast.text);
        let width = toast_width(&text, area.width);
        let x = area.x + area.width.saturating_sub(width + 1);
        let rect = Rect::new(x, y, width, 1);

        f.render_widget(Clear, rect);
        f.render_widget(
            Paragraph::new(Span::styled(
                super::truncate_with_ellipsis(&text, width as usize),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            rect,
        );
    }
}

/// Display width for a toast, clamped to the cap and the terminal.
fn toast_width(text: &str, area_width: u16) -> u16 {
    let wanted = text.chars().count() as u16;
    wanted
        .min(MAX_TOAST_WIDTH)
        .min(area_width.saturating_sub(4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_width_fits_text() {
        assert_eq!(toast_width("1234567890", 100), 10);
    }

    #[test]
    fn test_toast_width_clamped_to_cap() {
        let long = "x".repeat(200);
        assert_eq!(toast_width(&long, 200), MAX_TOAST_WIDTH);
    }

    #[test]
    fn test_toast_width_clamped_to_terminal() {
        let long = "x".repeat(200);
        assert_eq!(toast_width(&long, 30), 26);
    }
}
