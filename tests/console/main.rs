//! Integration tests for the console state machine.
//!
//! These tests verify cross-module flows without a terminal or a network:
//! brand CRUD round-trips through form state, brand-selection-driven
//! campaign fetches with stale-response discard, delete confirmation
//! semantics, and toast lifecycle.

mod brand_flow;
mod campaign_flow;
mod toast_lifecycle;
mod view_sync;
