//! # Module: Console Event Handling
//!
//! ## Responsibility
//! Polls crossterm events and translates keyboard input into app state
//! mutations and [`ApiCommand`]s. Dispatch depends on context: edit modes
//! capture typing, delete confirmations capture y/n, everything else is
//! browse navigation.
//!
//! ## Guarantees
//! - Non-blocking event polling with configurable timeout
//! - No panics on any key combination
//! - Ctrl+C always quits, even mid-edit

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, BrandsMode, CampaignsPane, Tab};
use super::bridge::ApiCommand;

/// Result of polling for a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key press to dispatch.
    Key(KeyEvent),
    /// A terminal resize occurred.
    Resize(u16, u16),
    /// No actionable event within the poll window.
    None,
}

/// Polls for a single input event with the given timeout.
///
/// # Returns
/// The detected `InputEvent`, or `InputEvent::None` if no event occurred.
/// Any crossterm polling error also yields `InputEvent::None` (never
/// panics). Key releases and repeats are ignored.
pub fn poll_event(timeout: Duration) -> InputEvent {
    let available = match event::poll(timeout) {
        Ok(v) => v,
        Err(_) => return InputEvent::None,
    };
    if !available {
        return InputEvent::None;
    }

    match event::read() {
        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => InputEvent::Key(key),
        Ok(Event::Resize(w, h)) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    }
}

/// Applies an input event to the app state.
///
/// # Returns
/// The [`ApiCommand`]s the triggering action requires; the caller forwards
/// them to the request bridge.
pub fn apply_event(app: &mut App, event: InputEvent) -> Vec<ApiCommand> {
    match event {
        InputEvent::Key(key) => handle_key(app, key),
        InputEvent::Resize(_, _) | InputEvent::None => Vec::new(),
    }
}

/// Context-sensitive key dispatch.
fn handle_key(app: &mut App, key: KeyEvent) -> Vec<ApiCommand> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return Vec::new();
    }

    // The help overlay swallows the next key
    if app.show_help {
        app.show_help = false;
        return Vec::new();
    }

    // Edit modes capture typing
    match app.active_tab {
        Tab::Brands if app.brands.mode != BrandsMode::Browse => {
            return handle_brands_edit(app, key)
        }
        Tab::Campaigns if app.campaigns.editing => return handle_campaigns_edit(app, key),
        _ => {}
    }

    // A pending delete confirmation captures y/n
    if app.active_tab == Tab::Brands && app.brands.confirm_delete.is_some() {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.brands_confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.brands_cancel_delete();
                Vec::new()
            }
            _ => Vec::new(),
        };
    }
    if app.active_tab == Tab::Campaigns && app.campaigns.confirm_delete.is_some() {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.campaigns_confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.campaigns_cancel_delete();
                Vec::new()
            }
            _ => Vec::new(),
        };
    }

    // Global browse keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
            Vec::new()
        }
        KeyCode::Esc => {
            if app.active_tab == Tab::Campaigns && app.campaigns.expanded.is_some() {
                app.campaigns.expanded = None;
            } else {
                app.should_quit = true;
            }
            Vec::new()
        }
        KeyCode::Char('1') => app.select_tab(Tab::Dashboard),
        KeyCode::Char('2') => app.select_tab(Tab::Brands),
        KeyCode::Char('3') => app.select_tab(Tab::Campaigns),
        KeyCode::Tab => app.select_tab(app.active_tab.next()),
        KeyCode::Char('h') | KeyCode::Char('H') => {
            app.show_help = true;
            Vec::new()
        }
        _ => match app.active_tab {
            Tab::Dashboard => handle_dashboard_browse(app, key),
            Tab::Brands => handle_brands_browse(app, key),
            Tab::Campaigns => handle_campaigns_browse(app, key),
        },
    }
}

fn handle_dashboard_browse(app: &mut App, key: KeyEvent) -> Vec<ApiCommand> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => app.dashboard_refresh(),
        _ => Vec::new(),
    }
}

fn handle_brands_browse(app: &mut App, key: KeyEvent) -> Vec<ApiCommand> {
    match key.code {
        KeyCode::Up => {
            app.brands_cursor_up();
            Vec::new()
        }
        KeyCode::Down => {
            app.brands_cursor_down();
            Vec::new()
        }
        KeyCode::Enter => app.brands_load_selected(),
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.brands_begin_create();
            Vec::new()
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.brands_begin_update();
            Vec::new()
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            app.brands_request_delete();
            Vec::new()
        }
        KeyCode::Char('r') | KeyCode::Char('R') => app.brands_refresh(),
        _ => Vec::new(),
    }
}

fn handle_campaigns_browse(app: &mut App, key: KeyEvent) -> Vec<ApiCommand> {
    match key.code {
        KeyCode::Left => {
            app.campaigns_switch_pane(CampaignsPane::Brands);
            Vec::new()
        }
        KeyCode::Right => {
            app.campaigns_switch_pane(CampaignsPane::Campaigns);
            Vec::new()
        }
        KeyCode::Up => {
            app.campaigns_cursor_up();
            Vec::new()
        }
        KeyCode::Down => {
            app.campaigns_cursor_down();
            Vec::new()
        }
        KeyCode::Enter => match app.campaigns.pane {
            CampaignsPane::Brands => app.campaigns_select_brand(),
            CampaignsPane::Campaigns => app.campaigns_load_selected(),
        },
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.campaigns_begin_create();
            Vec::new()
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            if app.campaigns.pane == CampaignsPane::Campaigns {
                app.campaigns_request_delete();
            }
            Vec::new()
        }
        KeyCode::Char('r') | KeyCode::Char('R') => app.campaigns_refresh(),
        _ => Vec::new(),
    }
}

fn handle_brands_edit(app: &mut App, key: KeyEvent) -> Vec<ApiCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
        return app.brands_submit();
    }
    match key.code {
        KeyCode::Esc => app.brands_leave_form(),
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => app.brands.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.brands.form.focus_prev(),
        KeyCode::Backspace => app.brands.form.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.brands.form.insert_char(c)
        }
        _ => {}
    }
    Vec::new()
}

fn handle_campaigns_edit(app: &mut App, key: KeyEvent) -> Vec<ApiCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
        return app.campaigns_submit();
    }
    match key.code {
        KeyCode::Esc => app.campaigns_leave_form(),
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => app.campaigns.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.campaigns.form.focus_prev(),
        KeyCode::Backspace => app.campaigns.form.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.campaigns.form.insert_char(c)
        }
        _ => {}
    }
    Vec::new()
}
