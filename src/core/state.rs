//! # Application State
//!
//! Core business state for Inquest. This module contains domain state only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn AnalysisBackend>  // HTTP client behind a trait
//! ├── api_status: ApiStatus              // backend connectivity
//! ├── result: Option<AnalysisResult>     // last successful analysis
//! ├── error: Option<String>              // analyze failure message
//! ├── is_loading: bool                   // analyze call in flight
//! └── status_message: String             // transient header text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.
//!
//! Invariant: at most one of `result` / `error` is `Some` at any time. The
//! reducer clears both before spawning a new analysis.

use std::sync::Arc;

use crate::api::{AnalysisBackend, AnalysisResult};

/// Backend connectivity as reported by the health probe.
///
/// Lifecycle: `Checking` on startup, set once by the probe, re-enterable
/// from `Error` via the manual retry action. `Connected` is terminal for
/// the session; analyze failures never demote it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    /// Health probe in flight (startup or manual retry).
    Checking,
    /// Backend answered the probe with a 2xx.
    Connected,
    /// Probe failed (non-2xx or network error).
    Error,
}

pub struct App {
    pub backend: Arc<dyn AnalysisBackend>,
    pub api_status: ApiStatus,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
    pub is_loading: bool,
    /// Transient text under the header title (e.g. corpus stats).
    pub status_message: String,
}

impl App {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self {
            backend,
            api_status: ApiStatus::Checking,
            result: None,
            error: None,
            is_loading: false,
            status_message: String::new(),
        }
    }
}
