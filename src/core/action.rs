//! # Actions
//!
//! Everything that can happen in Inquest becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The analyze task reports back? That's `Action::AnalysisFinished`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and names the side effect the event loop must perform.
//! No I/O here — spawning requests happens in the TUI event loop.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply an action, assert on the state
//! and the returned effect.

use log::{info, warn};

use crate::api::{AnalysisResult, CorpusStats};
use crate::core::state::{ApiStatus, App};

/// Everything that can happen in the app.
#[derive(Debug)]
pub enum Action {
    /// Start (or restart) the backend health probe.
    CheckHealth,
    /// Health probe finished. `true` means any 2xx status.
    HealthChecked(bool),
    /// User submitted a question from the input box.
    Submit(String),
    /// The analyze task finished, one way or the other. The task sends
    /// exactly one of these on every path, so loading always ends.
    AnalysisFinished(Result<AnalysisResult, String>),
    /// Corpus stats arrived (fetched after a successful health probe).
    StatsLoaded(CorpusStats),
    /// Dismiss the current result and error.
    ClearResults,
    Quit,
}

/// Side effects the event loop performs after a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    SpawnHealthCheck,
    SpawnAnalyze(String),
    SpawnStatsFetch,
}

/// The reducer: applies an action to the state and names the side effect.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::CheckHealth => {
            app.api_status = ApiStatus::Checking;
            Effect::SpawnHealthCheck
        }
        Action::HealthChecked(ok) => {
            if ok {
                info!("Backend healthy");
                app.api_status = ApiStatus::Connected;
                Effect::SpawnStatsFetch
            } else {
                // Detail of the failure is in the log, not the UI.
                warn!("Backend health check failed");
                app.api_status = ApiStatus::Error;
                Effect::None
            }
        }
        Action::Submit(text) => {
            if app.is_loading || text.trim().is_empty() {
                return Effect::None;
            }
            app.error = None;
            app.result = None;
            app.is_loading = true;
            Effect::SpawnAnalyze(text)
        }
        Action::AnalysisFinished(outcome) => {
            // Loading ends no matter which branch the request took.
            app.is_loading = false;
            match outcome {
                Ok(result) => {
                    info!("Analysis finished in {:.2}s", result.analysis_time);
                    app.result = Some(result);
                    app.error = None;
                }
                Err(message) => {
                    warn!("Analysis failed: {}", message);
                    app.error = Some(message);
                    app.result = None;
                }
            }
            Effect::None
        }
        Action::StatsLoaded(stats) => {
            if let Some(sections) = stats.total_sections {
                app.status_message = format!("{} sections indexed", sections);
            }
            Effect::None
        }
        Action::ClearResults => {
            app.result = None;
            app.error = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
