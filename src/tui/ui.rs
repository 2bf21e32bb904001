use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::{ApiStatus, App};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ResultPanel, Spinner, StatusHeader, Suggestions};

/// Top-level layout, driven by connectivity:
///
/// - `Checking`: header + spinner panel
/// - `Error`: header + blocking connection-error panel
/// - `Connected`: header + main panel (landing / spinner / error / result)
///   + input field, with the suggestions overlay on top when open
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let area = frame.area();
    let mut header = StatusHeader::new(app.api_status, app.status_message.clone());

    match app.api_status {
        ApiStatus::Checking => {
            let [header_area, main_area] = Layout::vertical([Length(2), Min(0)]).areas(area);
            header.render(frame, header_area);
            Spinner::new(spinner_frame, "Connecting to the analyzer backend...")
                .render(frame, main_area);
        }
        ApiStatus::Error => {
            let [header_area, main_area] = Layout::vertical([Length(2), Min(0)]).areas(area);
            header.render(frame, header_area);
            draw_connection_error(frame, main_area);
        }
        ApiStatus::Connected => {
            let input_height = tui.query_input.calculate_height(area.width);
            let [header_area, main_area, input_area] =
                Layout::vertical([Length(2), Min(0), Length(input_height)]).areas(area);
            header.render(frame, header_area);

            if app.is_loading {
                Spinner::new(spinner_frame, "Analyzing the filing...").render(frame, main_area);
            } else if let Some(error_msg) = &app.error {
                draw_analysis_error(frame, main_area, error_msg);
            } else if let Some(result) = &app.result {
                ResultPanel::new(&mut tui.result_panel, result).render(frame, main_area);
            } else {
                draw_landing(frame, main_area);
            }

            tui.query_input.render(frame, input_area);

            if let Some(ref mut suggestions) = tui.suggestions {
                Suggestions::new(suggestions).render(frame, main_area);
            }
        }
    }
}

/// Blocking full-panel message while the backend is unreachable.
fn draw_connection_error(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::raw("Cannot reach the analyzer backend."),
        Line::raw("Make sure the server is running, then retry."),
        Line::raw(""),
        Line::styled(
            "Ctrl+R Retry Connection  Ctrl+C Quit",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(" Connection Error ")
                .border_style(Style::default().fg(Color::Red)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Inline, dismissible message for a failed analyze call.
fn draw_analysis_error(frame: &mut Frame, area: Rect, error_msg: &str) {
    let lines = vec![
        Line::raw(""),
        Line::raw(error_msg),
        Line::raw(""),
        Line::styled(
            "Ctrl+X Try Again  Esc Dismiss",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(" Analysis Error ")
                .border_style(Style::default().fg(Color::Red)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Empty-state text shown before the first analysis.
fn draw_landing(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled(
            "Ask anything about the 10-K filing",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Ctrl+E shows example questions",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(area);

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        center,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_result, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                draw_ui(f, app, tui, 0);
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
    fn checking_shows_spinner_panel() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Connecting to the analyzer backend..."));
        assert!(!text.contains("Question"));
    }

    #[test]
    fn error_status_shows_blocking_panel_with_retry() {
        let mut app = test_app();
        app.api_status = ApiStatus::Error;
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Connection Error"));
        assert!(text.contains("Retry Connection"));
    }

    #[test]
    fn connected_shows_landing_and_input() {
        let mut app = test_app();
        app.api_status = ApiStatus::Connected;
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Ask anything about the 10-K filing"));
        assert!(text.contains("Question"));
    }

    #[test]
    fn loading_shows_spinner_over_main_area() {
        let mut app = test_app();
        app.api_status = ApiStatus::Connected;
        app.is_loading = true;
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Analyzing the filing..."));
    }

    #[test]
    fn analysis_error_is_shown_inline() {
        let mut app = test_app();
        app.api_status = ApiStatus::Connected;
        app.error = Some("Question is required".to_string());
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Analysis Error"));
        assert!(text.contains("Question is required"));
        assert!(text.contains("Try Again"));
    }

    #[test]
    fn result_is_rendered_when_present() {
        let mut app = test_app();
        app.api_status = ApiStatus::Connected;
        app.result = Some(sample_result());
        let mut tui = TuiState::new();
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Analysis complete"));
    }

    #[test]
    fn suggestions_overlay_draws_on_top() {
        let mut app = test_app();
        app.api_status = ApiStatus::Connected;
        let mut tui = TuiState::new();
        tui.suggestions = Some(crate::tui::components::SuggestionsState::new());
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Example Questions"));
    }
}
