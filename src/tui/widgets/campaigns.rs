//! # Widget: Campaigns View
//!
//! ## Responsibility
//! Renders the Campaigns tab: the brand selector, the dependent campaign
//! list with inline delete confirmation, the expanded detail panel, and the
//! create form / create-response panel. The pane with the cursor carries a
//! highlighted border.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::api::types::Campaign;
use crate::tui::app::{App, CampaignsPane, CampaignsPending};
use crate::tui::forms::CampaignForm;

/// Renders the Campaigns tab.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(26), // Brand selector
            Constraint::Percentage(36), // Campaign list
            Constraint::Percentage(38), // Detail + form/response
        ])
        .split(area);

    render_brand_selector(f, cols[0], app);
    render_campaign_list(f, cols[1], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(55), // Detail panel
            Constraint::Percentage(45), // Create form / response
        ])
        .split(cols[2]);

    render_detail(f, right[0], app);
    render_bottom(f, right[1], app);
}

/// Border style for a pane depending on cursor focus.
fn pane_border(app: &App, pane: CampaignsPane) -> Style {
    if app.campaigns.pane == pane && !app.campaigns.editing {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Status indicator for a campaign, in the pipeline's vocabulary.
pub fn status_span(status: &str) -> Span<'static> {
    let (symbol, color) = match status {
        "completed" => ("\u{25cf}", Color::Green),
        "failed" => ("\u{25cb}", Color::Red),
        _ => ("\u{25d0}", Color::Yellow),
    };
    Span::styled(symbol.to_string(), Style::default().fg(color))
}

/// Renders the single-select brand list driving the campaign fetch.
fn render_brand_selector(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.campaigns.brands_loading {
        " BRANDS (loading\u{2026}) "
    } else {
        " BRANDS "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(pane_border(app, CampaignsPane::Brands));

    if app.campaigns.brands.is_empty() {
        let para = Paragraph::new(Span::styled(
            "No brands \u{2014} create one in the Brands tab.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block)
        .wrap(Wrap { trim: true });
        f.render_widget(para, area);
        return;
    }

    let items: Vec<ListItem> = app
        .campaigns
        .brands
        .iter()
        .map(|summary| {
            let selected = app
                .campaigns
                .selected_brand
                .as_deref()
                .is_some_and(|id| id == summary.id);
            let marker = if selected { "\u{25cf} " } else { "  " };
            let name = if summary.name.is_empty() {
                "(Unnamed)"
            } else {
                summary.name.as_str()
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::styled(name.to_string(), Style::default().fg(Color::White)),
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
    state.select(Some(app.campaigns.brand_cursor));
    f.render_stateful_widget(list, area, &mut state);
}

/// One campaign list line; the confirming campaign shows its inline y/n.
fn campaign_line(campaign: &Campaign, confirming: bool) -> Line<'static> {
    let mut spans = vec![
        status_span(&campaign.status),
        Span::styled(
            format!(" {}", campaign.goal),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("  ${:.2}  {}", campaign.budget, campaign.id),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if confirming {
        spans.push(Span::styled(
            "  delete? [y]/[n]",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

/// Renders the campaign list of the selected brand.
fn render_campaign_list(f: &mut Frame, area: Rect, app: &App) {
    let title = match (&app.campaigns.selected_brand, app.campaigns.list_loading) {
        (Some(id), true) => format!(" CAMPAIGNS \u{2014} {id} (loading\u{2026}) "),
        (Some(id), false) => format!(" CAMPAIGNS \u{2014} {id} "),
        (None, _) => " CAMPAIGNS ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(pane_border(app, CampaignsPane::Campaigns));

    if let Some(error) = &app.campaigns.list_error {
        let para = Paragraph::new(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ))
        .block(block)
        .wrap(Wrap { trim: true });
        f.render_widget(para, area);
        return;
    }

    if app.campaigns.selected_brand.is_none() {
        let para = Paragraph::new(Span::styled(
            "Select a brand (enter) to list its campaigns.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block)
        .wrap(Wrap { trim: true });
        f.render_widget(para, area);
        return;
    }

    if app.campaigns.campaigns.is_empty() {
        let hint = if app.campaigns.list_loading {
            ""
        } else {
            "No campaigns for this brand. Press n to create one."
        };
        let para = Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray)))
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(para, area);
        return;
    }

    let items: Vec<ListItem> = app
        .campaigns
        .campaigns
        .iter()
        .map(|campaign| {
            let confirming = app
                .campaigns
                .confirm_delete
                .as_deref()
                .is_some_and(|id| id == campaign.id);
            ListItem::new(campaign_line(campaign, confirming))
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
    state.select(Some(app.campaigns.cursor));
    f.render_stateful_widget(list, area, &mut state);
}

/// Renders the expanded campaign detail as verbatim JSON.
fn render_detail(f: &mut Frame, area: Rect, app: &App) {
    let (title, body) = match (&app.campaigns.expanded, app.campaigns.detail_loading) {
        (_, true) => (" CAMPAIGN ".to_string(), "Loading\u{2026}".to_string()),
        (Some(campaign), false) => (
            format!(" CAMPAIGN {} ", campaign.id),
            serde_json::to_string_pretty(campaign)
                .unwrap_or_else(|_| "(unrenderable)".to_string()),
        ),
        (None, false) => (
            " CAMPAIGN ".to_string(),
            "Enter on a campaign to expand it.".to_string(),
        ),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let para = Paragraph::new(body)
        .style(Style::default().fg(Color::DarkGray))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

/// Renders the create form while editing, else the last create response.
fn render_bottom(f: &mut Frame, area: Rect, app: &App) {
    if app.campaigns.editing {
        let brand = app.campaigns.selected_brand.as_deref().unwrap_or("?");
        let values: Vec<&str> = (0..CampaignForm::FIELD_COUNT)
            .map(|i| app.campaigns.form.field(i))
            .collect();
        super::form::render_fields(
            f,
            area,
            &format!(" NEW CAMPAIGN \u{2014} {brand} "),
            &CampaignForm::LABELS,
            &values,
            Some(app.campaigns.form.focus),
            app.campaigns.pending == Some(CampaignsPending::Create),
        );
        return;
    }

    let block = Block::default()
        .title(" CREATE RESPONSE ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let body = match &app.campaigns.created {
        Some(created) => serde_json::to_string_pretty(created)
            .unwrap_or_else(|_| "(unrenderable)".to_string()),
        None => "[n] create a campaign for the selected brand.".to_string(),
    };

    let para = Paragraph::new(body)
        .style(Style::default().fg(Color::DarkGray))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(para, area);
}
