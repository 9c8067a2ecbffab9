//! # Module: Console UI
//!
//! ## Responsibility
//! Everything between the keyboard and the API client: view state (`app`),
//! key handling (`events`), the async request bridge (`bridge`), form
//! models (`forms`), and rendering (`ui`, `widgets`).
//!
//! ## Architecture
//! ```text
//! key press ─▶ events::apply_event ─▶ App (state) ─▶ ApiCommand ─▶ bridge
//!                                        ▲                           │
//!                                        └────── ApiEvent ◀──────────┘
//! ```
//! The render loop stays synchronous; the bridge runs the network calls on
//! the Tokio runtime and reports back through a bounded channel.

pub mod app;
pub mod bridge;
pub mod events;
pub mod forms;
pub mod ui;
pub mod widgets;
