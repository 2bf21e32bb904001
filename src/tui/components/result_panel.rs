//! # ResultPanel Component
//!
//! Scrollable view of a completed analysis: the echoed question, the
//! answer split into paragraphs, the elapsed-time badge, and the cited
//! sections when the backend supplies them.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ResultPanelState` (scroll position) lives in `TuiState`
//! - `ResultPanel` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::AnalysisResult;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Format the backend-reported elapsed time.
///
/// Sub-second times collapse to `"< 1s"`; everything else gets one decimal.
pub fn format_time(seconds: f64) -> String {
    if seconds < 1.0 {
        "< 1s".to_string()
    } else {
        format!("{seconds:.1}s")
    }
}

/// Split an answer into its non-blank paragraphs, order preserved.
pub fn paragraphs(answer: &str) -> Vec<&str> {
    answer
        .split('\n')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Scroll state for the result panel. Must be persisted in `TuiState`.
#[derive(Default)]
pub struct ResultPanelState {
    pub scroll_state: ScrollViewState,
}

impl ResultPanelState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for ResultPanelState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp | TuiEvent::CursorUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown | TuiEvent::CursorDown => {
                self.scroll_state.scroll_down();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper, created fresh each frame.
pub struct ResultPanel<'a> {
    pub state: &'a mut ResultPanelState,
    pub result: &'a AnalysisResult,
}

impl<'a> ResultPanel<'a> {
    pub fn new(state: &'a mut ResultPanelState, result: &'a AnalysisResult) -> Self {
        Self { state, result }
    }

    fn build_lines(&self) -> Vec<Line<'a>> {
        let result = self.result;
        let header_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    "Analysis complete",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format_time(result.analysis_time),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::default(),
            Line::styled("Question", header_style),
            Line::raw(result.question.as_str()),
            Line::default(),
            Line::styled("Answer", header_style),
        ];

        for paragraph in paragraphs(&result.answer) {
            lines.push(Line::raw(paragraph));
            lines.push(Line::default());
        }

        if let Some(sections) = &result.sections_used
            && !sections.is_empty()
        {
            lines.push(Line::styled("Sections used", header_style));
            for section in sections {
                lines.push(Line::from(vec![
                    Span::styled("- ", Style::default().fg(Color::DarkGray)),
                    Span::raw(section.as_str()),
                ]));
            }
            lines.push(Line::default());
        }

        lines.push(Line::styled(
            "Ctrl+X Clear",
            Style::default().fg(Color::DarkGray),
        ));
        lines
    }
}

impl Component for ResultPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // scrollbar gutter

        let paragraph = Paragraph::new(self.build_lines()).wrap(Wrap { trim: false });
        let height = (paragraph.line_count(content_width) as u16).max(1);

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
