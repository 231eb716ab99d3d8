//! Portfolio UI Components
//!
//! Presentational Dioxus components shared by the portfolio pages. They hold
//! no page state of their own; callers pass data in and get callbacks out.
//!
//! Styling lives in the application's global stylesheet. Components only
//! emit class names:
//! - `.btn-*` buttons, `.icon-btn` for compact controls
//! - `.filter-btn` / `.filter-btn.active` for the portfolio filter
//! - `.tech-tag` badges and `.skill-*` bars

pub mod components;

pub use components::*;
