//! # Core Application Logic
//!
//! This module contains Inquest's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┼───────────┐
//!                    ▼           ▼           ▼
//!             ┌────────────┐ ┌────────┐ ┌─────────┐
//!             │    TUI     │ │  api   │ │ config  │
//!             │  Adapter   │ │ (HTTP) │ │ (toml)  │
//!             │ (ratatui)  │ │        │ │         │
//!             └────────────┘ └────────┘ └─────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Layered configuration (defaults → file → env → CLI)

pub mod action;
pub mod config;
pub mod state;
