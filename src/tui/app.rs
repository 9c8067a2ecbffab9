//! # Module: Console App State
//!
//! ## Responsibility
//! Owns all view state and provides the update logic. The `App` struct is
//! the single source of truth for every widget's data: the active tab, each
//! view's lists/forms/pending flags, and the toast queue. User actions and
//! API responses are applied through pure methods that return the follow-up
//! [`ApiCommand`]s to dispatch, so every transition is testable in
//! isolation.
//!
//! ## Guarantees
//! - Each view owns its state exclusively; no cross-tab cache
//! - Pending-action flags prevent duplicate submissions
//! - Responses carrying a stale generation token are discarded, never
//!   applied over newer state
//! - The toast queue is bounded and entries self-expire

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::bridge::{ApiCommand, ApiEvent, BrandListTarget};
use super::forms::{BrandForm, CampaignForm};
use crate::api::types::{Brand, BrandSummary, Campaign, CampaignCreated};

/// Maximum number of toasts kept on screen at once.
pub const TOASTS_CAP: usize = 4;

/// Minimum terminal width for the console to render.
pub const MIN_COLS: u16 = 80;

/// Minimum terminal height for the console to render.
pub const MIN_ROWS: u16 = 24;

/// Which view is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Health probe view.
    Dashboard,
    /// Brand CRUD view.
    Brands,
    /// Per-brand campaign CRUD view.
    Campaigns,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 3] = [Tab::Dashboard, Tab::Brands, Tab::Campaigns];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Brands => "Brands",
            Tab::Campaigns => "Campaigns",
        }
    }

    /// The tab after this one, wrapping.
    pub fn next(&self) -> Tab {
        match self {
            Tab::Dashboard => Tab::Brands,
            Tab::Brands => Tab::Campaigns,
            Tab::Campaigns => Tab::Dashboard,
        }
    }
}

/// Toast severity, which also picks the display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// A completed action.
    Success,
    /// A failed or blocked action.
    Error,
}

/// A self-expiring notification.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Severity.
    pub kind: ToastKind,
    /// Display text.
    pub text: String,
    /// Creation time; the queue is ordered by it and entries expire a fixed
    /// delay after it.
    pub created: Instant,
}

/// Dashboard health probe state: loading, reachable, or unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthProbe {
    /// Probe in flight.
    Loading,
    /// Backend answered; carries the reported status string.
    Reachable(String),
    /// Probe failed; carries the display error.
    Unreachable(String),
}

/// Dashboard view state.
#[derive(Debug)]
pub struct DashboardState {
    /// Probe outcome driving the three-state render.
    pub probe: HealthProbe,
    /// API root being probed, shown so the operator knows what answered.
    pub api_base: String,
}

/// Which form the Brands tab shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandsMode {
    /// List navigation; no form focused.
    Browse,
    /// Editing a new-brand form.
    Create,
    /// Editing the update form of the loaded brand.
    Update,
}

/// In-flight action on the Brands tab, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandsPending {
    /// `GET /brands/:id`.
    Load,
    /// `POST /brands`.
    Create,
    /// `PUT /brands/:id`.
    Update,
    /// `DELETE /brands/:id`.
    Delete,
}

/// Brands view state.
#[derive(Debug)]
pub struct BrandsState {
    /// Brand summaries for the list panel.
    pub brands: Vec<BrandSummary>,
    /// List fetch in flight.
    pub list_loading: bool,
    /// List fetch failure, rendered inline in the list panel.
    pub list_error: Option<String>,
    /// List cursor.
    pub cursor: usize,
    /// Currently loaded brand, shown as JSON and mirrored into the form.
    pub current: Option<Brand>,
    /// The create/update form.
    pub form: BrandForm,
    /// Browse / create / update.
    pub mode: BrandsMode,
    /// In-flight action; blocks duplicate submissions.
    pub pending: Option<BrandsPending>,
    /// Brand id awaiting delete confirmation.
    pub confirm_delete: Option<String>,
}

/// Which pane of the Campaigns tab has the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignsPane {
    /// Brand selector list.
    Brands,
    /// Campaign list.
    Campaigns,
}

/// In-flight action on the Campaigns tab, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignsPending {
    /// `POST /brands/:brandId/campaigns`.
    Create,
    /// `DELETE /brands/:brandId/campaigns/:id`.
    Delete,
}

/// Campaigns view state.
#[derive(Debug)]
pub struct CampaignsState {
    /// Brand selector entries.
    pub brands: Vec<BrandSummary>,
    /// Brand selector fetch in flight.
    pub brands_loading: bool,
    /// Brand selector cursor.
    pub brand_cursor: usize,
    /// Id of the brand whose campaigns are listed.
    pub selected_brand: Option<String>,
    /// Campaigns of the selected brand.
    pub campaigns: Vec<Campaign>,
    /// Campaign list fetch in flight.
    pub list_loading: bool,
    /// Campaign list failure, rendered inline.
    pub list_error: Option<String>,
    /// Campaign list cursor.
    pub cursor: usize,
    /// Expanded detail panel content.
    pub expanded: Option<Campaign>,
    /// Detail fetch in flight.
    pub detail_loading: bool,
    /// Campaign id awaiting delete confirmation; at most one at a time.
    pub confirm_delete: Option<String>,
    /// Create form visible and focused.
    pub editing: bool,
    /// The create form.
    pub form: CampaignForm,
    /// Last create response, displayed verbatim.
    pub created: Option<CampaignCreated>,
    /// In-flight action; blocks duplicate submissions.
    pub pending: Option<CampaignsPending>,
    /// Pane holding the cursor.
    pub pane: CampaignsPane,
    /// Generation token for dependent fetches; bumped on every brand
    /// selection change so stale responses are discarded.
    pub generation: u64,
}

/// Primary application state for the console.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Mounted view.
    pub active_tab: Tab,
    /// Dashboard view state.
    pub dashboard: DashboardState,
    /// Brands view state.
    pub brands: BrandsState,
    /// Campaigns view state.
    pub campaigns: CampaignsState,
    /// Active toasts, oldest at the front.
    pub toasts: VecDeque<Toast>,
    /// How long a toast stays visible.
    toast_ttl: Duration,
}

impl App {
    /// Creates a fresh `App`. The caller dispatches
    /// [`App::select_tab`]`(Tab::Dashboard)` to trigger the initial probe.
    pub fn new(toast_ttl: Duration) -> Self {
        Self {
            should_quit: false,
            show_help: false,
            active_tab: Tab::Dashboard,
            dashboard: DashboardState {
                probe: HealthProbe::Loading,
                api_base: String::new(),
            },
            brands: BrandsState {
                brands: Vec::new(),
                list_loading: false,
                list_error: None,
                cursor: 0,
                current: None,
                form: BrandForm::default(),
                mode: BrandsMode::Browse,
                pending: None,
                confirm_delete: None,
            },
            campaigns: CampaignsState {
                brands: Vec::new(),
                brands_loading: false,
                brand_cursor: 0,
                selected_brand: None,
                campaigns: Vec::new(),
                list_loading: false,
                list_error: None,
                cursor: 0,
                expanded: None,
                detail_loading: false,
                confirm_delete: None,
                editing: false,
                form: CampaignForm::default(),
                created: None,
                pending: None,
                pane: CampaignsPane::Brands,
                generation: 0,
            },
            toasts: VecDeque::with_capacity(TOASTS_CAP),
            toast_ttl,
        }
    }

    // ── Toasts ───────────────────────────────────────────────────────────

    /// Pushes a success toast, evicting the oldest if at capacity.
    pub fn push_success(&mut self, text: impl Into<String>) {
        self.push_toast(ToastKind::Success, text.into());
    }

    /// Pushes an error toast, evicting the oldest if at capacity.
    pub fn push_error(&mut self, text: impl Into<String>) {
        self.push_toast(ToastKind::Error, text.into());
    }

    fn push_toast(&mut self, kind: ToastKind, text: String) {
        if self.toasts.len() >= TOASTS_CAP {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            kind,
            text,
            created: Instant::now(),
        });
    }

    /// Removes toasts older than the toast lifetime.
    pub fn evict_toasts(&mut self, now: Instant) {
        let ttl = self.toast_ttl;
        self.toasts
            .retain(|toast| now.duration_since(toast.created) < ttl);
    }

    // ── Tab navigation ───────────────────────────────────────────────────

    /// Mounts a tab and returns the fetches that tab performs on mount.
    ///
    /// Every mount refetches: the dashboard probes health, the Brands tab
    /// reloads its list, and the Campaigns tab reloads its brand selector
    /// plus, when a brand is selected, its campaign list.
    pub fn select_tab(&mut self, tab: Tab) -> Vec<ApiCommand> {
        self.active_tab = tab;
        match tab {
            Tab::Dashboard => {
                self.dashboard.probe = HealthProbe::Loading;
                vec![ApiCommand::FetchHealth]
            }
            Tab::Brands => {
                self.brands.list_loading = true;
                self.brands.list_error = None;
                vec![ApiCommand::ListBrands {
                    target: BrandListTarget::BrandsTab,
                }]
            }
            Tab::Campaigns => {
                self.campaigns.brands_loading = true;
                let mut commands = vec![ApiCommand::ListBrands {
                    target: BrandListTarget::CampaignsTab,
                }];
                if let Some(brand_id) = self.campaigns.selected_brand.clone() {
                    self.campaigns.generation += 1;
                    self.campaigns.list_loading = true;
                    commands.push(ApiCommand::ListCampaigns {
                        brand_id,
                        generation: self.campaigns.generation,
                    });
                }
                commands
            }
        }
    }

    // ── Dashboard actions ────────────────────────────────────────────────

    /// Manual re-probe; there is no automatic retry loop.
    pub fn dashboard_refresh(&mut self) -> Vec<ApiCommand> {
        self.dashboard.probe = HealthProbe::Loading;
        vec![ApiCommand::FetchHealth]
    }

    // ── Brands actions ───────────────────────────────────────────────────

    /// Moves the brand list cursor up.
    pub fn brands_cursor_up(&mut self) {
        self.brands.cursor = self.brands.cursor.saturating_sub(1);
    }

    /// Moves the brand list cursor down.
    pub fn brands_cursor_down(&mut self) {
        if self.brands.cursor + 1 < self.brands.brands.len() {
            self.brands.cursor += 1;
        }
    }

    /// Loads the brand under the cursor: a fresh `GET`, whose response is
    /// mirrored into the update form (one-way sync).
    pub fn brands_load_selected(&mut self) -> Vec<ApiCommand> {
        if self.brands.pending.is_some() {
            return Vec::new();
        }
        let Some(id) = self
            .brands
            .brands
            .get(self.brands.cursor)
            .map(|summary| summary.id.clone())
        else {
            return Vec::new();
        };
        self.brands.pending = Some(BrandsPending::Load);
        vec![ApiCommand::GetBrand { id }]
    }

    /// Opens an empty create form.
    pub fn brands_begin_create(&mut self) {
        self.brands.form.clear();
        self.brands.mode = BrandsMode::Create;
    }

    /// Re-enters the update form of the loaded brand, if any.
    pub fn brands_begin_update(&mut self) {
        if self.brands.current.is_some() {
            self.brands.mode = BrandsMode::Update;
        }
    }

    /// Leaves the form without submitting.
    pub fn brands_leave_form(&mut self) {
        self.brands.mode = BrandsMode::Browse;
    }

    /// Submits the visible form.
    pub fn brands_submit(&mut self) -> Vec<ApiCommand> {
        if self.brands.pending.is_some() {
            return Vec::new();
        }
        match self.brands.mode {
            BrandsMode::Browse => Vec::new(),
            BrandsMode::Create => {
                self.brands.pending = Some(BrandsPending::Create);
                vec![ApiCommand::CreateBrand {
                    payload: self.brands.form.payload(),
                }]
            }
            BrandsMode::Update => {
                let Some(id) = self.brands.current.as_ref().map(|brand| brand.id.clone())
                else {
                    return Vec::new();
                };
                self.brands.pending = Some(BrandsPending::Update);
                vec![ApiCommand::UpdateBrand {
                    id,
                    payload: self.brands.form.payload(),
                }]
            }
        }
    }

    /// Starts the delete confirmation for the loaded brand.
    pub fn brands_request_delete(&mut self) {
        let id = self.brands.current.as_ref().map(|brand| brand.id.clone());
        if id.is_some() {
            self.brands.confirm_delete = id;
        }
    }

    /// Confirms the pending brand delete.
    pub fn brands_confirm_delete(&mut self) -> Vec<ApiCommand> {
        if self.brands.pending.is_some() {
            return Vec::new();
        }
        let Some(id) = self.brands.confirm_delete.take() else {
            return Vec::new();
        };
        self.brands.pending = Some(BrandsPending::Delete);
        vec![ApiCommand::DeleteBrand { id }]
    }

    /// Cancels the pending brand delete.
    pub fn brands_cancel_delete(&mut self) {
        self.brands.confirm_delete = None;
    }

    /// Reloads the brand list.
    pub fn brands_refresh(&mut self) -> Vec<ApiCommand> {
        self.brands.list_loading = true;
        self.brands.list_error = None;
        vec![ApiCommand::ListBrands {
            target: BrandListTarget::BrandsTab,
        }]
    }

    // ── Campaigns actions ────────────────────────────────────────────────

    /// Switches the cursor between the brand selector and the campaign list.
    pub fn campaigns_switch_pane(&mut self, pane: CampaignsPane) {
        self.campaigns.pane = pane;
    }

    /// Moves the cursor of the focused pane up.
    pub fn campaigns_cursor_up(&mut self) {
        match self.campaigns.pane {
            CampaignsPane::Brands => {
                self.campaigns.brand_cursor = self.campaigns.brand_cursor.saturating_sub(1);
            }
            CampaignsPane::Campaigns => {
                self.campaigns.cursor = self.campaigns.cursor.saturating_sub(1);
            }
        }
    }

    /// Moves the cursor of the focused pane down.
    pub fn campaigns_cursor_down(&mut self) {
        match self.campaigns.pane {
            CampaignsPane::Brands => {
                if self.campaigns.brand_cursor + 1 < self.campaigns.brands.len() {
                    self.campaigns.brand_cursor += 1;
                }
            }
            CampaignsPane::Campaigns => {
                if self.campaigns.cursor + 1 < self.campaigns.campaigns.len() {
                    self.campaigns.cursor += 1;
                }
            }
        }
    }

    /// Selects the brand under the cursor, clearing the previous selection's
    /// detail panel and triggering exactly one campaign-list fetch.
    pub fn campaigns_select_brand(&mut self) -> Vec<ApiCommand> {
        let Some(summary) = self.campaigns.brands.get(self.campaigns.brand_cursor) else {
            return Vec::new();
        };
        let brand_id = summary.id.clone();
        self.campaigns.selected_brand = Some(brand_id.clone());
        self.campaigns.campaigns.clear();
        self.campaigns.cursor = 0;
        self.campaigns.expanded = None;
        self.campaigns.detail_loading = false;
        self.campaigns.confirm_delete = None;
        self.campaigns.list_error = None;
        self.campaigns.generation += 1;
        self.campaigns.list_loading = true;
        vec![ApiCommand::ListCampaigns {
            brand_id,
            generation: self.campaigns.generation,
        }]
    }

    /// Expands the campaign under the cursor via a fresh detail fetch.
    pub fn campaigns_load_selected(&mut self) -> Vec<ApiCommand> {
        let Some(brand_id) = self.campaigns.selected_brand.clone() else {
            return Vec::new();
        };
        let Some(id) = self
            .campaigns
            .campaigns
            .get(self.campaigns.cursor)
            .map(|campaign| campaign.id.clone())
        else {
            return Vec::new();
        };
        self.campaigns.detail_loading = true;
        vec![ApiCommand::GetCampaign {
            brand_id,
            id,
            generation: self.campaigns.generation,
        }]
    }

    /// Starts the two-step delete confirm for the campaign under the cursor.
    /// Only one confirmation is visible at a time.
    pub fn campaigns_request_delete(&mut self) {
        let id = self
            .campaigns
            .campaigns
            .get(self.campaigns.cursor)
            .map(|campaign| campaign.id.clone());
        if id.is_some() {
            self.campaigns.confirm_delete = id;
        }
    }

    /// Confirms the pending campaign delete.
    pub fn campaigns_confirm_delete(&mut self) -> Vec<ApiCommand> {
        if self.campaigns.pending.is_some() {
            return Vec::new();
        }
        let Some(brand_id) = self.campaigns.selected_brand.clone() else {
            return Vec::new();
        };
        let Some(id) = self.campaigns.confirm_delete.take() else {
            return Vec::new();
        };
        self.campaigns.pending = Some(CampaignsPending::Delete);
        vec![ApiCommand::DeleteCampaign { brand_id, id }]
    }

    /// Cancels the pending campaign delete.
    pub fn campaigns_cancel_delete(&mut self) {
        self.campaigns.confirm_delete = None;
    }

    /// Opens the create-campaign form; requires a selected brand.
    pub fn campaigns_begin_create(&mut self) {
        if self.campaigns.selected_brand.is_some() {
            self.campaigns.form.clear();
            self.campaigns.editing = true;
        } else {
            self.push_error("Select a brand first");
        }
    }

    /// Leaves the create form without submitting.
    pub fn campaigns_leave_form(&mut self) {
        self.campaigns.editing = false;
    }

    /// Validates and submits the create-campaign form. A budget that is not
    /// a non-negative number blocks submission and issues no network call.
    pub fn campaigns_submit(&mut self) -> Vec<ApiCommand> {
        if self.campaigns.pending.is_some() {
            return Vec::new();
        }
        let Some(brand_id) = self.campaigns.selected_brand.clone() else {
            return Vec::new();
        };
        match self.campaigns.form.payload(&brand_id) {
            Err(message) => {
                self.push_error(message);
                Vec::new()
            }
            Ok(payload) => {
                self.campaigns.pending = Some(CampaignsPending::Create);
                vec![ApiCommand::CreateCampaign { brand_id, payload }]
            }
        }
    }

    /// Reloads the campaign list of the selected brand.
    pub fn campaigns_refresh(&mut self) -> Vec<ApiCommand> {
        let Some(brand_id) = self.campaigns.selected_brand.clone() else {
            return Vec::new();
        };
        self.campaigns.generation += 1;
        self.campaigns.list_loading = true;
        self.campaigns.list_error = None;
        vec![ApiCommand::ListCampaigns {
            brand_id,
            generation: self.campaigns.generation,
        }]
    }

    // ── API event application ────────────────────────────────────────────

    /// Applies an API response to view state and returns follow-up fetches
    /// (e.g. the list refresh after a successful create/delete).
    pub fn apply(&mut self, event: ApiEvent) -> Vec<ApiCommand> {
        match event {
            ApiEvent::Health(result) => {
                self.dashboard.probe = match result {
                    Ok(health) => HealthProbe::Reachable(health.status),
                    Err(message) => HealthProbe::Unreachable(message),
                };
                Vec::new()
            }

            ApiEvent::BrandList {
                target: BrandListTarget::BrandsTab,
                result,
            } => {
                self.brands.list_loading = false;
                match result {
                    Ok(brands) => {
                        self.brands.brands = brands;
                        self.brands.list_error = None;
                        self.brands.cursor =
                            clamp_cursor(self.brands.cursor, self.brands.brands.len());
                    }
                    Err(message) => self.brands.list_error = Some(message),
                }
                Vec::new()
            }

            ApiEvent::BrandList {
                target: BrandListTarget::CampaignsTab,
                result,
            } => {
                self.campaigns.brands_loading = false;
                match result {
                    Ok(brands) => {
                        self.campaigns.brands = brands;
                        self.campaigns.brand_cursor =
                            clamp_cursor(self.campaigns.brand_cursor, self.campaigns.brands.len());
                    }
                    Err(message) => self.push_error(message),
                }
                Vec::new()
            }

            ApiEvent::BrandLoaded(result) => {
                self.brands.pending = None;
                match result {
                    Ok(brand) => {
                        self.brands.form.fill_from(&brand);
                        self.brands.current = Some(brand);
                        self.brands.mode = BrandsMode::Update;
                        self.push_success("Brand loaded");
                    }
                    Err(message) => self.push_error(message),
                }
                Vec::new()
            }

            ApiEvent::BrandCreated(result) => {
                self.brands.pending = None;
                match result {
                    Ok(brand) => {
                        self.push_success(format!("Brand created: {}", brand.id));
                        self.brands.form.fill_from(&brand);
                        self.brands.current = Some(brand);
                        self.brands.mode = BrandsMode::Update;
                        self.brands_refresh()
                    }
                    Err(message) => {
                        self.push_error(message);
                        Vec::new()
                    }
                }
            }

            ApiEvent::BrandUpdated(result) => {
                self.brands.pending = None;
                match result {
                    Ok(brand) => {
                        self.brands.current = Some(brand);
                        self.push_success("Brand updated");
                    }
                    Err(message) => self.push_error(message),
                }
                Vec::new()
            }

            ApiEvent::BrandDeleted { id, result } => {
                self.brands.pending = None;
                match result {
                    Ok(()) => {
                        if self
                            .brands
                            .current
                            .as_ref()
                            .is_some_and(|current| current.id == id)
                        {
                            self.brands.current = None;
                            self.brands.form.clear();
                            self.brands.mode = BrandsMode::Browse;
                        }
                        self.push_success("Brand deleted");
                        self.brands_refresh()
                    }
                    Err(message) => {
                        self.push_error(message);
                        Vec::new()
                    }
                }
            }

            ApiEvent::CampaignList { generation, result } => {
                if generation != self.campaigns.generation {
                    tracing::debug!(generation, "discarding stale campaign list");
                    return Vec::new();
                }
                self.campaigns.list_loading = false;
                match result {
                    Ok(campaigns) => {
                        self.campaigns.campaigns = campaigns;
                        self.campaigns.list_error = None;
                        self.campaigns.cursor =
                            clamp_cursor(self.campaigns.cursor, self.campaigns.campaigns.len());
                    }
                    Err(message) => self.campaigns.list_error = Some(message),
                }
                Vec::new()
            }

            ApiEvent::CampaignLoaded { generation, result } => {
                if generation != self.campaigns.generation {
                    tracing::debug!(generation, "discarding stale campaign detail");
                    return Vec::new();
                }
                self.campaigns.detail_loading = false;
                match result {
                    Ok(campaign) => self.campaigns.expanded = Some(campaign),
                    Err(message) => self.push_error(message),
                }
                Vec::new()
            }

            ApiEvent::CampaignCreated(result) => {
                self.campaigns.pending = None;
                match result {
                    Ok(created) => {
                        self.push_success(format!(
                            "Campaign created: {} ({})",
                            created.id, created.status
                        ));
                        self.campaigns.created = Some(created);
                        self.campaigns.editing = false;
                        self.campaigns_refresh()
                    }
                    Err(message) => {
                        self.push_error(message);
                        Vec::new()
                    }
                }
            }

            ApiEvent::CampaignDeleted { id, result } => {
                self.campaigns.pending = None;
                match result {
                    Ok(()) => {
                        self.campaigns.campaigns.retain(|c| c.id != id);
                        self.campaigns.cursor =
                            clamp_cursor(self.campaigns.cursor, self.campaigns.campaigns.len());
                        if self
                            .campaigns
                            .expanded
                            .as_ref()
                            .is_some_and(|expanded| expanded.id == id)
                        {
                            self.campaigns.expanded = None;
                        }
                        self.push_success("Campaign deleted");
                    }
                    Err(message) => self.push_error(message),
                }
                Vec::new()
            }
        }
    }

    /// Reverts the pending flag set for a command whose enqueue was shed.
    pub fn rollback(&mut self, command: &ApiCommand) {
        match command {
            ApiCommand::FetchHealth => {}
            ApiCommand::ListBrands {
                target: BrandListTarget::BrandsTab,
            } => self.brands.list_loading = false,
            ApiCommand::ListBrands {
                target: BrandListTarget::CampaignsTab,
            } => self.campaigns.brands_loading = false,
            ApiCommand::GetBrand { .. }
            | ApiCommand::CreateBrand { .. }
            | ApiCommand::UpdateBrand { .. }
            | ApiCommand::DeleteBrand { .. } => self.brands.pending = None,
            ApiCommand::ListCampaigns { .. } => self.campaigns.list_loading = false,
            ApiCommand::GetCampaign { .. } => self.campaigns.detail_loading = false,
            ApiCommand::CreateCampaign { .. } | ApiCommand::DeleteCampaign { .. } => {
                self.campaigns.pending = None
            }
        }
    }
}

/// Keeps a cursor inside a list of `len` items (0 for an empty list).
fn clamp_cursor(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        cursor.min(len - 1)
    }
}
