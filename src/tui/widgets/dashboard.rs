//! # Widget: Dashboard
//!
//! ## Responsibility
//! Renders the single read-only health probe with its three-state display:
//! loading, reachable (with the backend's status string), or unreachable
//! (with the failure message). No retry loop; `r` re-probes manually.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::tui::app::{App, HealthProbe};

/// Renders the dashboard view.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let card = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2).min(64),
        height: area.height.saturating_sub(2).min(11),
    };

    let block = Block::default()
        .title(" API HEALTH ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(probe_color(&app.dashboard.probe)));

    let mut lines = vec![Line::from("")];
    if !app.dashboard.api_base.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  API root: {}", app.dashboard.api_base),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }
    match &app.dashboard.probe {
        HealthProbe::Loading => {
            lines.push(Line::from(Span::styled(
                "  Checking\u{2026}",
                Style::default().fg(Color::DarkGray),
            )));
        }
        HealthProbe::Reachable(status) => {
            lines.push(Line::from(vec![
                Span::raw("  Status: "),
                Span::styled(
                    status.clone(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  Use the Brands tab to create and manage brands, and the",
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(Span::styled(
                "  Campaigns tab to run campaigns.",
                Style::default().fg(Color::DarkGray),
            )));
        }
        HealthProbe::Unreachable(message) => {
            lines.push(Line::from(Span::styled(
                format!("  Backend unreachable: {message}"),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  Start the API server, check --api-url / GROWTH_API_URL,",
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(Span::styled(
                "  then press r to probe again.",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let para = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(para, card);
}

/// Border color per probe state.
fn probe_color(probe: &HealthProbe) -> Color {
    match probe {
        HealthProbe::Loading => Color::DarkGray,
        HealthProbe::Reachable(_) => Color::Green,
        HealthProbe::Unreachable(_) => Color::Red,
    }
}
