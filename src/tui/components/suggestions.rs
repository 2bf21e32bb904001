//! # Suggestions Component
//!
//! Overlay listing example questions. Opened with Ctrl+E, dismissed with
//! Esc; Enter copies the selected question into the input field.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SuggestionsState` lives in `TuiState`
//! - `Suggestions` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::tui::event::TuiEvent;

/// The example questions offered in the overlay, in display order.
pub const EXAMPLE_QUESTIONS: [&str; 8] = [
    "What is Netflix's total revenue for 2024?",
    "What are Netflix's main revenue streams?",
    "How many subscribers does Netflix have?",
    "What are Netflix's biggest risk factors?",
    "What is Netflix's content spending?",
    "What are Netflix's operating expenses?",
    "How much cash does Netflix have?",
    "What is Netflix's debt situation?",
];

/// Persistent state for the suggestions overlay.
pub struct SuggestionsState {
    pub selected: usize,
    pub list_state: ListState,
}

impl SuggestionsState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }

    /// Handle a key event, returning a SuggestionEvent if the overlay
    /// should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<SuggestionEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::ToggleSuggestions => Some(SuggestionEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(EXAMPLE_QUESTIONS.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Some(SuggestionEvent::Select(
                EXAMPLE_QUESTIONS[self.selected].to_string(),
            )),
            _ => None,
        }
    }
}

impl Default for SuggestionsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the suggestions overlay.
#[derive(Debug, PartialEq)]
pub enum SuggestionEvent {
    /// Use this question: overwrite the input field and close the overlay.
    Select(String),
    Dismiss,
}

/// Transient render wrapper for the suggestions overlay.
pub struct Suggestions<'a> {
    state: &'a mut SuggestionsState,
}

impl<'a> Suggestions<'a> {
    pub fn new(state: &'a mut SuggestionsState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 60, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Example Questions ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Use  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = EXAMPLE_QUESTIONS
            .iter()
            .enumerate()
            .map(|(i, question)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::styled(*question, style))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
