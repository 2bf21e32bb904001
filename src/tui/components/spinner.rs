//! # Spinner Component
//!
//! Loading indicator shown while a request is in flight. Stateless: the
//! event loop's animation clock supplies the frame index.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Glyph for a given animation frame. Wraps around.
pub fn glyph(frame_index: usize) -> &'static str {
    FRAMES[frame_index % FRAMES.len()]
}

/// Animated spinner with a label, centered in its area.
pub struct Spinner<'a> {
    pub frame_index: usize,
    pub label: &'a str,
}

impl<'a> Spinner<'a> {
    pub fn new(frame_index: usize, label: &'a str) -> Self {
        Self { frame_index, label }
    }
}

impl Component for Spinner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [center] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);

        let line = Line::from(vec![
            Span::styled(glyph(self.frame_index), Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::raw(self.label),
        ]);

        frame.render_widget(
            Paragraph::new(line).alignment(Alignment::Center),
            center,
        );
    }
}
