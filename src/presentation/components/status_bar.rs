use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

/// Two-line status bar: focus and key hints, then the latest message.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Length(1), Constraint::Length(1)],
        )
        .split(area);

        let focus = Span::styled(
            format!("[{}]", state.ui.focus.title()),
            Style::default().fg(Color::Gray).italic(),
        );
        let hints = Span::styled(
            " tab: switch pane · q: quit · ctrl-z: suspend",
            Style::default().fg(Color::DarkGray),
        );
        let status_line =
            Paragraph::new(Line::from(vec![focus, hints])).style(Style::default().bg(Color::Black));
        frame.render_widget(status_line, layout[0]);

        let message_line =
            Paragraph::new(state.system.status_message.clone().unwrap_or_default());
        frame.render_widget(message_line, layout[1]);
    }
}
