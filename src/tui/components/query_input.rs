//! # QueryInput Component
//!
//! The question field at the bottom of the screen.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//! - Render the current buffer, wrapped, with internal scrolling
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. `dimmed` is a prop from the
//! application state: while an analysis is in flight the field is disabled
//! and all editing events are ignored.
//!
//! Questions are a single logical line: pasted newlines are flattened to
//! spaces. Submit emits the current text without clearing the buffer, so
//! the question stays editable for a follow-up.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Left + right borders consumed horizontally by the bordered block
const HORIZONTAL_OVERHEAD: u16 = 2;
/// Top + bottom borders consumed vertically
const VERTICAL_OVERHEAD: u16 = 2;
/// Maximum visible content lines before internal scrolling kicks in
const MAX_VISIBLE_LINES: u16 = 3;
/// Offset from area edge to content (border width)
const BORDER_OFFSET: u16 = 1;

/// High-level events emitted by the QueryInput
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the question (Enter pressed, buffer non-blank)
    Submit(String),
    /// Text content changed
    ContentChanged,
}

/// Build textwrap options configured for the input field inner width.
fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Inner content width after subtracting the border overhead.
fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Count wrapped lines for the given text (always at least 1).
fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 || text.is_empty() {
        return 1;
    }
    (textwrap::wrap(text, wrap_options(width)).len() as u16).max(1)
}

/// Byte offset of the previous character boundary before `pos`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the next character boundary after `pos`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Newlines have no meaning in a question; collapse them on paste.
fn flatten(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

/// Text input component for the user's question.
///
/// # Props
///
/// - `dimmed`: disables the field while an analysis is in flight
///
/// # State
///
/// - `buffer`: current question text
/// - `cursor_pos`: byte offset into `buffer`
/// - `scroll_offset`: first visible wrapped line when the text overflows
pub struct QueryInput {
    /// Question text (Internal State)
    pub buffer: String,
    /// Disabled while loading (Prop)
    pub dimmed: bool,
    cursor_pos: usize,
    scroll_offset: u16,
}

impl QueryInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            dimmed: false,
            cursor_pos: 0,
            scroll_offset: 0,
        }
    }

    /// Overwrite the buffer (suggestion selection) and move the cursor to
    /// the end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = flatten(text);
        self.cursor_pos = self.buffer.len();
        self.scroll_offset = 0;
    }

    /// Required height for the current buffer, clamped to the viewport limit.
    pub fn calculate_height(&self, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        let content_lines = wrap_line_count(&self.buffer, width);
        content_lines.min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    /// Which wrapped line (0-based) the cursor is on.
    fn cursor_line(&self, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        if width == 0 {
            return 0;
        }
        let lines = textwrap::wrap(&self.buffer[..self.cursor_pos], wrap_options(width));
        lines.len().saturating_sub(1) as u16
    }

    /// Keep the cursor's line inside the visible window.
    fn update_scroll_offset(&mut self, content_width: u16) {
        let width = inner_width(content_width);
        let total_lines = wrap_line_count(&self.buffer, width);

        if total_lines <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let cursor_line = self.cursor_line(content_width);
        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = cursor_line.saturating_sub(MAX_VISIBLE_LINES - 1);
        }
    }

    /// The wrapped lines currently inside the visible window.
    fn visible_text(&self, content_width: u16) -> String {
        if self.scroll_offset == 0 {
            return self.buffer.clone();
        }

        let width = inner_width(content_width);
        if width == 0 {
            return String::new();
        }

        let lines = textwrap::wrap(&self.buffer, wrap_options(width));
        let start = self.scroll_offset as usize;
        let end = (start + MAX_VISIBLE_LINES as usize).min(lines.len());
        lines[start..end].join("\n")
    }

    /// Screen coordinates for the terminal cursor.
    ///
    /// textwrap trims trailing whitespace from wrapped lines, so the column
    /// is counted from the characters before the cursor rather than from
    /// the last wrapped segment's length.
    fn screen_pos(&self, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + BORDER_OFFSET, area.y + BORDER_OFFSET);
        }

        let before_cursor = &self.buffer[..self.cursor_pos];
        let wrapped = textwrap::wrap(before_cursor, wrap_options(width));

        let cursor_line = wrapped.len().saturating_sub(1) as u16;
        let cursor_col = if wrapped.is_empty() {
            0
        } else {
            let chars_in_prev_segments: usize = wrapped
                .iter()
                .take(wrapped.len() - 1)
                .map(|seg| seg.chars().count())
                .sum();
            (before_cursor.chars().count() - chars_in_prev_segments) as u16
        };

        let visible_line = cursor_line.saturating_sub(self.scroll_offset);
        (
            area.x + BORDER_OFFSET + cursor_col,
            area.y + BORDER_OFFSET + visible_line,
        )
    }
}

impl Default for QueryInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for QueryInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.update_scroll_offset(area.width);

        let (title, border_style) = if self.dimmed {
            (
                " Question (analyzing...) ",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            )
        } else {
            (" Question ", Style::default().fg(Color::Cyan))
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(title)
            .title_bottom(Line::from(" Enter Analyze | Ctrl+E Examples ").centered());

        let input = Paragraph::new(self.visible_text(area.width)).block(block);
        frame.render_widget(input, area);

        if !self.dimmed {
            let (cursor_x, cursor_y) = self.screen_pos(area);
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

impl EventHandler for QueryInput {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        // Disabled while an analysis is in flight
        if self.dimmed {
            return None;
        }

        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor_pos, *c);
                self.cursor_pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                let text = flatten(text);
                self.buffer.insert_str(self.cursor_pos, &text);
                self.cursor_pos += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor_pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor_pos);
                    self.buffer.drain(prev..self.cursor_pos);
                    self.cursor_pos = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor_pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor_pos);
                    self.buffer.drain(self.cursor_pos..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor_pos > 0 {
                    self.cursor_pos = prev_char_boundary(&self.buffer, self.cursor_pos);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor_pos < self.buffer.len() {
                    self.cursor_pos = next_char_boundary(&self.buffer, self.cursor_pos);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor_pos != 0).then(|| {
                self.cursor_pos = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor_pos != self.buffer.len()).then(|| {
                self.cursor_pos = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                // The buffer is kept: the question stays on screen next to
                // its answer and can be edited for a follow-up.
                if !self.buffer.trim().is_empty() {
                    Some(InputEvent::Submit(self.buffer.clone()))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_handle_input() {
        let mut input = QueryInput::new();

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");

        let res = input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_submit_keeps_buffer() {
        let mut input = QueryInput::new();
        input.set_text("What is the revenue?");

        let res = input.handle_event(&TuiEvent::Submit);
        match res {
            Some(InputEvent::Submit(text)) => assert_eq!(text, "What is the revenue?"),
            _ => panic!("Expected Submit event"),
        }

        assert_eq!(
            input.buffer, "What is the revenue?",
            "Buffer must survive submission"
        );
    }

    #[test]
    fn test_submit_blank_is_ignored() {
        let mut input = QueryInput::new();
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);

        input.set_text("   ");
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_dimmed_ignores_all_events() {
        let mut input = QueryInput::new();
        input.set_text("pending question");
        input.dimmed = true;

        assert_eq!(input.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        assert_eq!(input.buffer, "pending question");
    }

    #[test]
    fn test_set_text_flattens_and_moves_cursor_to_end() {
        let mut input = QueryInput::new();
        input.set_text("line one\nline two");
        assert_eq!(input.buffer, "line one line two");
        assert_eq!(input.cursor_pos, input.buffer.len());
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = QueryInput::new();
        input.handle_event(&TuiEvent::Paste("a\r\nb".to_string()));
        assert_eq!(input.buffer, "a  b");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = QueryInput::new();
        input.handle_event(&TuiEvent::InputChar('é'));
        input.handle_event(&TuiEvent::InputChar('x'));
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "x");
    }

    #[test]
    fn test_height_clamps_to_viewport() {
        let mut input = QueryInput::new();
        assert_eq!(input.calculate_height(40), 1 + VERTICAL_OVERHEAD);

        input.set_text(&"word ".repeat(60));
        assert_eq!(
            input.calculate_height(40),
            MAX_VISIBLE_LINES + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn test_render_shows_title() {
        let backend = TestBackend::new(50, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = QueryInput::new();

        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Question"));
    }
}
