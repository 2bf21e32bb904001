//! # StatusHeader Component
//!
//! Top bar showing the app title, backend connectivity, and a transient
//! status line.
//!
//! Purely presentational: all data arrives as props, the component holds
//! no state of its own. The connectivity indicator is an exhaustive map
//! from [`ApiStatus`] to an icon/text/color triple.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::ApiStatus;
use crate::tui::component::Component;

/// Icon, label, and color for a connectivity status.
pub fn status_indicator(status: ApiStatus) -> (&'static str, &'static str, Color) {
    match status {
        ApiStatus::Connected => ("●", "Connected", Color::Green),
        ApiStatus::Error => ("●", "Disconnected", Color::Red),
        ApiStatus::Checking => ("●", "Connecting...", Color::Yellow),
    }
}

/// Two-line header: title plus connectivity on top, status line below.
pub struct StatusHeader {
    /// Backend connectivity (Prop)
    pub api_status: ApiStatus,
    /// Transient status text, e.g. corpus stats (Prop)
    pub status_message: String,
}

impl StatusHeader {
    pub fn new(api_status: ApiStatus, status_message: String) -> Self {
        Self {
            api_status,
            status_message,
        }
    }
}

impl Component for StatusHeader {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (icon, text, color) = status_indicator(self.api_status);

        let title_line = Line::from(vec![
            Span::styled(
                "Inquest",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  10-K filing analyzer  |  "),
            Span::styled(format!("{icon} {text}"), Style::default().fg(color)),
        ]);

        let subtitle = if self.status_message.is_empty() {
            "Ask any question about the filing's financials, strategy, or risks".to_string()
        } else {
            self.status_message.clone()
        };
        let subtitle_line = Line::from(Span::styled(
            subtitle,
            Style::default().fg(Color::DarkGray),
        ));

        frame.render_widget(Paragraph::new(vec![title_line, subtitle_line]), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(header: &mut StatusHeader) -> String {
        let backend = TestBackend::new(80, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                header.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn indicator_covers_all_statuses() {
        assert_eq!(status_indicator(ApiStatus::Connected).1, "Connected");
        assert_eq!(status_indicator(ApiStatus::Error).1, "Disconnected");
        assert_eq!(status_indicator(ApiStatus::Checking).1, "Connecting...");
    }

    #[test]
    fn indicator_colors_match_status() {
        assert_eq!(status_indicator(ApiStatus::Connected).2, Color::Green);
        assert_eq!(status_indicator(ApiStatus::Error).2, Color::Red);
        assert_eq!(status_indicator(ApiStatus::Checking).2, Color::Yellow);
    }

    #[test]
    fn renders_title_and_connectivity() {
        let mut header = StatusHeader::new(ApiStatus::Connected, String::new());
        let text = render_to_text(&mut header);
        assert!(text.contains("Inquest"));
        assert!(text.contains("Connected"));
    }

    #[test]
    fn renders_status_message_when_present() {
        let mut header =
            StatusHeader::new(ApiStatus::Connected, "57 sections indexed".to_string());
        let text = render_to_text(&mut header);
        assert!(text.contains("57 sections indexed"));
    }

    #[test]
    fn renders_disconnected_state() {
        let mut header = StatusHeader::new(ApiStatus::Error, String::new());
        let text = render_to_text(&mut header);
        assert!(text.contains("Disconnected"));
    }
}
