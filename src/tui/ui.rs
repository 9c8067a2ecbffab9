//! # Module: Console Rendering
//!
//! ## Responsibility
//! Orchestrates the overall layout: outer chrome with title-bar clock and
//! key-hint footer, the tab bar, dispatch to the active view's widget, the
//! help overlay, the minimum-size guard, and the toast overlay on top.
//!
//! ## Guarantees
//! - Minimum size guard displays a centered message if the terminal is too
//!   small
//! - No panics during rendering regardless of terminal dimensions

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::app::{App, BrandsMode, Tab, MIN_COLS, MIN_ROWS};
use super::widgets;

/// Renders the complete console UI into the given frame.
pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    // Minimum size guard
    if size.width < MIN_COLS || size.height < MIN_ROWS {
        draw_too_small(f, size);
        return;
    }

    // Help overlay
    if app.show_help {
        draw_help_overlay(f, size);
        return;
    }

    // Title bar with clock
    let title = format!(
        " growth-console {:>width$} ",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        width = (size.width as usize).saturating_sub(24),
    );

    let outer_block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let footer_block = Block::default()
        .title_bottom(footer_line(app))
        .borders(Borders::NONE);

    let inner = outer_block.inner(size);
    f.render_widget(outer_block, size);
    f.render_widget(footer_block, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(10),   // Active view
        ])
        .split(inner);

    draw_tab_bar(f, chunks[0], app);

    match app.active_tab {
        Tab::Dashboard => widgets::dashboard::render(f, chunks[1], app),
        Tab::Brands => widgets::brands::render(f, chunks[1], app),
        Tab::Campaigns => widgets::campaigns::render(f, chunks[1], app),
    }

    widgets::toast::render(f, size, app);
}

/// Builds the key-hint footer for the current context.
fn footer_line(app: &App) -> Line<'static> {
    let editing = match app.active_tab {
        Tab::Brands => app.brands.mode != BrandsMode::Browse,
        Tab::Campaigns => app.campaigns.editing,
        Tab::Dashboard => false,
    };
    let hints = if editing {
        " [↑↓/tab] field  [Ctrl+S] submit  [esc] back  [Ctrl+C] quit "
    } else {
        match app.active_tab {
            Tab::Dashboard => " [1/2/3] view  [r] re-probe  [h]elp  [q]uit ",
            Tab::Brands => {
                " [↑↓] select  [enter] load  [n]ew  [e]dit  [d]elete  [r]efresh  [h]elp  [q]uit "
            }
            Tab::Campaigns => {
                " [←→] pane  [↑↓] select  [enter] open  [n]ew  [d]elete  [r]efresh  [h]elp  [q]uit "
            }
        }
    };
    Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
}

/// Renders the tab bar, highlighting the mounted view.
fn draw_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, tab) in Tab::ALL.iter().enumerate() {
        let label = format!(" {}:{} ", i + 1, tab.label());
        let style = if *tab == app.active_tab {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the "terminal too small" warning.
fn draw_too_small(f: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too small \u{2014} resize to at least {}x{}",
        MIN_COLS, MIN_ROWS
    );
    let current_size = format!("Current size: {}x{}", area.width, area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            msg,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            current_size,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    f.render_widget(para, area);
}

/// Renders the help overlay.
fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let popup_width = 56.min(area.width.saturating_sub(4));
    let popup_height = 20.min(area.height.saturating_sub(4));
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);

    let dim = Style::default().fg(Color::DarkGray);
    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  growth-console",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("  Views:", Style::default().fg(Color::White))),
        Line::from(Span::styled(
            "    [1] Dashboard   [2] Brands   [3] Campaigns",
            dim,
        )),
        Line::from(Span::styled("    [Tab] Next view", dim)),
        Line::from(""),
        Line::from(Span::styled("  Lists:", Style::default().fg(Color::White))),
        Line::from(Span::styled(
            "    [↑↓] Move   [Enter] Load/open   [←→] Switch pane",
            dim,
        )),
        Line::from(Span::styled(
            "    [n] New   [e] Edit   [d] Delete (then y/n)   [r] Refresh",
            dim,
        )),
        Line::from(""),
        Line::from(Span::styled("  Forms:", Style::default().fg(Color::White))),
        Line::from(Span::styled(
            "    [↑↓/Tab] Field   type to edit   [Ctrl+S] Submit",
            dim,
        )),
        Line::from(Span::styled("    [Esc] Back without submitting", dim)),
        Line::from(""),
        Line::from(Span::styled(
            "    [q]/[Esc] Quit   [Ctrl+C] Force quit",
            dim,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Press any key to close",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Paragraph::new(help_text).block(block), popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_min_size_constants() {
        assert_eq!(MIN_COLS, 80);
        assert_eq!(MIN_ROWS, 24);
    }

    #[test]
    fn test_too_small_detection() {
        let area = Rect::new(0, 0, 60, 40);
        assert!(area.width < MIN_COLS);
        let area = Rect::new(0, 0, 100, 20);
        assert!(area.height < MIN_ROWS);
        let area = Rect::new(0, 0, MIN_COLS, MIN_ROWS);
        assert!(area.width >= MIN_COLS && area.height >= MIN_ROWS);
    }

    #[test]
    fn test_footer_switches_to_edit_hints() {
        let mut app = App::new(Duration::from_secs(5));
        app.active_tab = Tab::Brands;
        let browse = format!("{:?}", footer_line(&app));
        app.brands.mode = BrandsMode::Create;
        let edit = format!("{:?}", footer_line(&app));
        assert_ne!(browse, edit);
        assert!(edit.contains("Ctrl+S"));
    }

    #[test]
    fn test_popup_centering_calculation() {
        let area_width: u16 = 120;
        let popup_width = 56.min(area_width.saturating_sub(4));
        let popup_x = (area_width.saturating_sub(popup_width)) / 2;
        assert_eq!(popup_width, 56);
        assert_eq!(popup_x, 32);
    }
}
