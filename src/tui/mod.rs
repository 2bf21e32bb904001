//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm, and the
//! only place network requests are spawned. Tasks report back as Actions
//! over an mpsc channel drained once per loop iteration, so every state
//! transition happens on the UI thread through `update()`.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (connecting, analyzing): draws every ~80ms so the
//!   spinner stays smooth.
//! - **Idle**: sleeps up to 500ms, only redraws on events.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous
//! redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::api::{AnalysisBackend, HttpBackend};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{ApiStatus, App};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputEvent, QueryInput, ResultPanelState, SuggestionsState};
use crate::tui::components::suggestions::SuggestionEvent;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub query_input: QueryInput,
    pub result_panel: ResultPanelState,
    /// Suggestions overlay (None = hidden)
    pub suggestions: Option<SuggestionsState>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            query_input: QueryInput::new(),
            result_panel: ResultPanelState::new(),
            suggestions: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,   // Scroll wheel over the result panel
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend: Arc<dyn AnalysisBackend> = Arc::new(HttpBackend::new(config.base_url.clone()));
    let mut app = App::new(backend);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Kick off the initial health probe
    let effect = update(&mut app, Action::CheckHealth);
    run_effect(effect, &app, &tx);

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync QueryInput props with App state
        tui.query_input.dimmed = app.is_loading;

        // Spinner is animating while connecting or analyzing
        let animating = app.is_loading || app.api_status == ApiStatus::Checking;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of state
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Manual retry is only meaningful while disconnected
            if matches!(event, TuiEvent::RetryConnection) {
                if app.api_status == ApiStatus::Error {
                    let effect = update(&mut app, Action::CheckHealth);
                    run_effect(effect, &app, &tx);
                }
                continue;
            }

            // Everything below needs a connected backend
            if app.api_status != ApiStatus::Connected {
                continue;
            }

            // When the suggestions overlay is open, it owns the keyboard
            if let Some(ref mut suggestions) = tui.suggestions {
                if let Some(suggestion_event) = suggestions.handle_event(&event) {
                    match suggestion_event {
                        SuggestionEvent::Select(question) => {
                            tui.query_input.set_text(&question);
                            tui.suggestions = None;
                        }
                        SuggestionEvent::Dismiss => {
                            tui.suggestions = None;
                        }
                    }
                }
                continue;
            }

            match event {
                TuiEvent::ToggleSuggestions => {
                    tui.suggestions = Some(SuggestionsState::new());
                }
                TuiEvent::ClearResults => {
                    let effect = update(&mut app, Action::ClearResults);
                    run_effect(effect, &app, &tx);
                }
                // Esc dismisses an inline analysis error
                TuiEvent::Escape => {
                    if app.error.is_some() {
                        let effect = update(&mut app, Action::ClearResults);
                        run_effect(effect, &app, &tx);
                    }
                }
                // Result panel owns scrolling and arrow keys
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown
                | TuiEvent::CursorUp
                | TuiEvent::CursorDown => {
                    tui.result_panel.handle_event(&event);
                }
                // QueryInput handles everything else
                other => {
                    if let Some(input_event) = tui.query_input.handle_event(&other) {
                        match input_event {
                            InputEvent::Submit(text) => {
                                let effect = update(&mut app, Action::Submit(text));
                                run_effect(effect, &app, &tx);
                            }
                            InputEvent::ContentChanged => {}
                        }
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle actions reported back by the network tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if effect == Effect::Quit {
                should_quit = true;
                break;
            }
            run_effect(effect, &app, &tx);
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Execute the side effect named by the reducer.
fn run_effect(effect: Effect, app: &App, tx: &mpsc::Sender<Action>) {
    match effect {
        Effect::SpawnHealthCheck => spawn_health_check(app.backend.clone(), tx.clone()),
        Effect::SpawnAnalyze(question) => {
            spawn_analyze(app.backend.clone(), question, tx.clone());
        }
        Effect::SpawnStatsFetch => spawn_stats_fetch(app.backend.clone(), tx.clone()),
        Effect::None | Effect::Quit => {}
    }
}

fn spawn_health_check(backend: Arc<dyn AnalysisBackend>, tx: mpsc::Sender<Action>) {
    info!("Spawning health check");
    tokio::spawn(async move {
        let healthy = match backend.check_health().await {
            Ok(()) => true,
            Err(e) => {
                // All failure shapes collapse to "unhealthy"; detail stays in the log.
                warn!("Health check failed: {}", e);
                false
            }
        };
        if tx.send(Action::HealthChecked(healthy)).is_err() {
            warn!("Failed to send health result: receiver dropped");
        }
    });
}

fn spawn_analyze(backend: Arc<dyn AnalysisBackend>, question: String, tx: mpsc::Sender<Action>) {
    info!("Spawning analyze request");
    tokio::spawn(async move {
        // Exactly one AnalysisFinished per request, whatever happened,
        // so the loading flag always ends up cleared.
        let outcome = backend
            .analyze(&question)
            .await
            .map_err(|e| e.user_message());
        if tx.send(Action::AnalysisFinished(outcome)).is_err() {
            warn!("Failed to send analysis outcome: receiver dropped");
        }
    });
}

fn spawn_stats_fetch(backend: Arc<dyn AnalysisBackend>, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        match backend.stats().await {
            Ok(stats) => {
                if tx.send(Action::StatsLoaded(stats)).is_err() {
                    warn!("Failed to send stats: receiver dropped");
                }
            }
            // Stats are decoration; a failure never surfaces in the UI.
            Err(e) => debug!("Stats fetch failed: {}", e),
        }
    });
}
