//! # Module: Form State
//!
//! ## Responsibility
//! Editable form models for the two CRUD views: field storage, focus
//! cycling, character editing, the multi-value text⇄array mapping, and the
//! client-side budget check that runs before any network call.
//!
//! ## Guarantees
//! - Server→form fill is one-way; nothing writes back until explicit submit
//! - The text⇄array mapping is lossless for the common case (trim, drop
//!   empties, split on newline or comma) and knowingly lossy for values
//!   containing literal commas; that is a documented UI limitation
//! - Focus is always a valid field index

use crate::api::types::{Brand, BrandPayload, CampaignCreate};

/// Error shown when the budget field does not hold a non-negative number.
pub const BUDGET_ERROR: &str = "Budget must be a positive number";

/// Splits newline-or-comma-delimited text into trimmed, non-empty items.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins list items for display, one item per line.
pub fn join_list(items: &[String]) -> String {
    items.join("\n")
}

/// Validates and parses the budget field.
///
/// # Errors
/// Returns [`BUDGET_ERROR`] for anything that is not a finite, non-negative
/// number. Callers must not issue a network call on `Err`.
pub fn parse_budget(text: &str) -> Result<f64, String> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| BUDGET_ERROR.to_string())?;
    if !value.is_finite() || value < 0.0 {
        return Err(BUDGET_ERROR.to_string());
    }
    Ok(value)
}

/// Editable brand form backing both the create and update panels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandForm {
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Industry label.
    pub industry: String,
    /// Voice/tone label.
    pub tone: String,
    /// Unique selling point.
    pub usp: String,
    /// Audience description.
    pub target_audience: String,
    /// Guidelines: visual style free text.
    pub visual_style: String,
    /// Guidelines: preferred channels, newline-or-comma text.
    pub preferred_channels: String,
    /// Guidelines: content restrictions, newline-or-comma text.
    pub content_restrictions: String,
    /// Seed insights, newline-or-comma text.
    pub latest_insights: String,
    /// Currently focused field index.
    pub focus: usize,
}

impl BrandForm {
    /// Number of editable fields.
    pub const FIELD_COUNT: usize = 10;

    /// Field labels in focus order.
    pub const LABELS: [&'static str; Self::FIELD_COUNT] = [
        "Name",
        "Description",
        "Industry",
        "Tone",
        "USP",
        "Target audience",
        "Visual style",
        "Preferred channels",
        "Content restrictions",
        "Latest insights",
    ];

    /// Returns the field value at `index`, or `""` if out of range.
    pub fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.name,
            1 => &self.description,
            2 => &self.industry,
            3 => &self.tone,
            4 => &self.usp,
            5 => &self.target_audience,
            6 => &self.visual_style,
            7 => &self.preferred_channels,
            8 => &self.content_restrictions,
            9 => &self.latest_insights,
            _ => "",
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            0 => &mut self.name,
            1 => &mut self.description,
            2 => &mut self.industry,
            3 => &mut self.tone,
            4 => &mut self.usp,
            5 => &mut self.target_audience,
            6 => &mut self.visual_style,
            7 => &mut self.preferred_channels,
            8 => &mut self.content_restrictions,
            _ => &mut self.latest_insights,
        }
    }

    /// Moves focus to the next field, wrapping.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Self::FIELD_COUNT;
    }

    /// Moves focus to the previous field, wrapping.
    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Self::FIELD_COUNT - 1) % Self::FIELD_COUNT;
    }

    /// Appends a character to the focused field.
    pub fn insert_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Resets every field and the focus.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// One-way server→form sync: mirrors a fetched brand into the form,
    /// serializing multi-value fields one item per line.
    pub fn fill_from(&mut self, brand: &Brand) {
        let guidelines = &brand.memory.brand_guidelines;
        self.name = brand.name.clone();
        self.description = brand.description.clone();
        self.industry = brand.industry.clone();
        self.tone = brand.tone.clone();
        self.usp = brand.usp.clone();
        self.target_audience = brand.target_audience.clone();
        self.visual_style = guidelines.visual_style.clone();
        self.preferred_channels = join_list(&guidelines.preferred_channels);
        self.content_restrictions = join_list(&guidelines.content_restrictions);
        self.latest_insights = join_list(&brand.memory.latest_insights);
        self.focus = 0;
    }

    /// Builds the request body from the current field values.
    pub fn payload(&self) -> BrandPayload {
        BrandPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            industry: self.industry.clone(),
            tone: self.tone.clone(),
            usp: self.usp.clone(),
            target_audience: self.target_audience.clone(),
            brand_guidelines: crate::api::types::BrandGuidelines {
                visual_style: self.visual_style.clone(),
                preferred_channels: split_list(&self.preferred_channels),
                content_restrictions: split_list(&self.content_restrictions),
            },
            latest_insights: split_list(&self.latest_insights),
        }
    }
}

/// Editable campaign-creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignForm {
    /// Campaign goal.
    pub goal: String,
    /// Audience description.
    pub target_audience: String,
    /// Budget as typed; validated on submit.
    pub budget: String,
    /// Currently focused field index.
    pub focus: usize,
}

impl CampaignForm {
    /// Number of editable fields.
    pub const FIELD_COUNT: usize = 3;

    /// Field labels in focus order.
    pub const LABELS: [&'static str; Self::FIELD_COUNT] =
        ["Goal", "Target audience", "Budget"];

    /// Returns the field value at `index`, or `""` if out of range.
    pub fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.goal,
            1 => &self.target_audience,
            2 => &self.budget,
            _ => "",
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            0 => &mut self.goal,
            1 => &mut self.target_audience,
            _ => &mut self.budget,
        }
    }

    /// Moves focus to the next field, wrapping.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Self::FIELD_COUNT;
    }

    /// Moves focus to the previous field, wrapping.
    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Self::FIELD_COUNT - 1) % Self::FIELD_COUNT;
    }

    /// Appends a character to the focused field.
    pub fn insert_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Resets every field and the focus.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validates the form and builds the request body.
    ///
    /// # Errors
    /// Returns the budget validation message; no request body is produced
    /// and no network call may be issued.
    pub fn payload(&self, brand_id: &str) -> Result<CampaignCreate, String> {
        let budget = parse_budget(&self.budget)?;
        Ok(CampaignCreate {
            brand_id: brand_id.to_string(),
            goal: self.goal.clone(),
            target_audience: self.target_audience.clone(),
            budget,
        })
    }
}
