//! # Widget: Form Fields
//!
//! ## Responsibility
//! Shared renderer for the brand and campaign forms: one line per field
//! with a fixed-width label column, the focused field highlighted with a
//! caret, and a submitting indicator in the title.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::{tail, truncate_with_ellipsis};

/// Width of the label column, separator included.
const LABEL_WIDTH: usize = 22;

/// Renders a labelled field list.
///
/// # Arguments
/// * `title` - Panel title.
/// * `labels`/`values` - Parallel field slices.
/// * `focus` - Focused field index while editing, `None` when read-only.
/// * `busy` - Whether a submit for this form is in flight.
pub fn render_fields(
    f: &mut Frame,
    area: Rect,
    title: &str,
    labels: &[&str],
    values: &[&str],
    focus: Option<usize>,
    busy: bool,
) {
    let full_title = if busy {
        format!("{title}· submitting\u{2026} ")
    } else {
        title.to_string()
    };

    let border = if focus.is_some() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(full_title)
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let value_width = (inner.width as usize).saturating_sub(LABEL_WIDTH + 2);

    let lines: Vec<Line> = labels
        .iter()
        .zip(values.iter())
        .enumerate()
        .map(|(i, (label, value))| field_line(i, label, value, focus, value_width))
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

/// Builds one field line, highlighting the focused field.
fn field_line<'a>(
    index: usize,
    label: &'a str,
    value: &'a str,
    focus: Option<usize>,
    value_width: usize,
) -> Line<'a> {
    let focused = focus == Some(index);
    let marker = if focused { "\u{25b8} " } else { "  " };
    let label_span = Span::styled(
        format!("{marker}{label:<width$}", width = LABEL_WIDTH.saturating_sub(2)),
        Style::default().fg(Color::DarkGray),
    );

    if focused {
        let shown = tail(value, value_width.saturating_sub(1));
        Line::from(vec![
            label_span,
            Span::styled(
                shown,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("\u{2588}", Style::default().fg(Color::Yellow)),
        ])
    } else {
        Line::from(vec![
            label_span,
            Span::styled(
                truncate_with_ellipsis(value, value_width),
                Style::default().fg(Color::White),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_line_carries_caret() {
        let line = field_line(1, "Goal", "Launch", Some(1), 20);
        let rendered: String = line.spans.iter().map(|s| s.content.clone()).collect();
        assert!(rendered.starts_with('\u{25b8}'));
        assert!(rendered.ends_with('\u{2588}'));
    }

    #[test]
    fn test_unfocused_line_plain() {
        let line = field_line(0, "Goal", "Launch", Some(1), 20);
        let rendered: String = line.spans.iter().map(|s| s.content.clone()).collect();
        assert!(!rendered.contains('\u{2588}'));
        assert!(rendered.contains("Launch"));
    }

    #[test]
    fn test_long_value_keeps_tail_when_focused() {
        let value = "a very long value that exceeds the column";
        let line = field_line(0, "Goal", value, Some(0), 10);
        let rendered: String = line.spans.iter().map(|s| s.content.clone()).collect();
        assert!(rendered.contains('\u{2026}'));
        assert!(rendered.contains("column"));
    }
}
