//! # Widget: Brands View
//!
//! ## Responsibility
//! Renders the Brands tab: summary list, the create/update form, and the
//! loaded brand as verbatim JSON. A pending delete shows a centered confirm
//! popup over the view.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::tui::app::{App, BrandsMode, BrandsPending};
use crate::tui::forms::BrandForm;

/// Renders the Brands tab.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30), // Summary list
            Constraint::Percentage(38), // Form
            Constraint::Percentage(32), // Loaded brand JSON
        ])
        .split(area);

    render_list(f, cols[0], app);
    render_form_panel(f, cols[1], app);
    render_current(f, cols[2], app);

    if let Some(id) = &app.brands.confirm_delete {
        render_confirm_popup(f, area, id);
    }
}

/// Renders the brand summary list.
fn render_list(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.brands.list_loading {
        " BRANDS (loading\u{2026}) "
    } else {
        " BRANDS "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if let Some(error) = &app.brands.list_error {
        let para = Paragraph::new(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )))
        .block(block)
        .wrap(Wrap { trim: true });
        f.render_widget(para, area);
        return;
    }

    if app.brands.brands.is_empty() {
        let hint = if app.brands.list_loading {
            ""
        } else {
            "No brands yet. Press n to create one."
        };
        let para = Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        )))
        .block(block)
        .wrap(Wrap { trim: true });
        f.render_widget(para, area);
        return;
    }

    let items: Vec<ListItem> = app
        .brands
        .brands
        .iter()
        .map(|summary| {
            let name = if summary.name.is_empty() {
                "(Unnamed)"
            } else {
                summary.name.as_str()
            };
            ListItem::new(Line::from(vec![
                Span::styled(name.to_string(), Style::default().fg(Color::White)),
                Span::styled(
                    format!("  {}", summary.id),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("\u{25b8} ");

    let mut state = ListState::default();
    state.select(Some(app.brands.cursor));
    f.render_stateful_widget(list, area, &mut state);
}

/// Renders the create/update form panel.
fn render_form_panel(f: &mut Frame, area: Rect, app: &App) {
    let busy = matches!(
        app.brands.pending,
        Some(BrandsPending::Create) | Some(BrandsPending::Update)
    );
    let (title, focus) = match app.brands.mode {
        BrandsMode::Browse => (" BRAND FORM \u{2014} [n]ew / [e]dit ".to_string(), None),
        BrandsMode::Create => (
            " NEW BRAND \u{2014} POST /brands ".to_string(),
            Some(app.brands.form.focus),
        ),
        BrandsMode::Update => {
            let id = app
                .brands
                .current
                .as_ref()
                .map(|brand| brand.id.as_str())
                .unwrap_or("?");
            (
                format!(" UPDATE {id} \u{2014} PUT /brands/:id "),
                Some(app.brands.form.focus),
            )
        }
    };

    let values: Vec<&str> = (0..BrandForm::FIELD_COUNT)
        .map(|i| app.brands.form.field(i))
        .collect();

    super::form::render_fields(f, area, &title, &BrandForm::LABELS, &values, focus, busy);
}

/// Renders the loaded brand as pretty JSON.
fn render_current(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.brands.pending == Some(BrandsPending::Load) {
        " CURRENT BRAND (loading\u{2026}) "
    } else {
        " CURRENT BRAND "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let body = match &app.brands.current {
        Some(brand) => serde_json::to_string_pretty(brand)
            .unwrap_or_else(|_| "(unrenderable)".to_string()),
        None => "Select a brand (enter) to load it.".to_string(),
    };

    let para = Paragraph::new(body)
        .style(Style::default().fg(Color::DarkGray))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

/// Centered y/n confirmation popup for a brand delete.
fn render_confirm_popup(f: &mut Frame, area: Rect, id: &str) {
    let popup_width = 44.min(area.width.saturating_sub(4));
    let popup_height = 5.min(area.height.saturating_sub(2));
    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" DELETE BRAND ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let para = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" Delete brand {id}? "),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            " [y] delete   [n] cancel ",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(block);
    f.render_widget(para, popup_area);
}
