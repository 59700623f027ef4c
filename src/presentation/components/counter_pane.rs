use ratatui::prelude::*;

use crate::{
    core::state::{AppState, Pane},
    presentation::widgets::WidgetTemplates,
};

/// Stateless renderer for the counter view.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterPane;

impl CounterPane {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let widget = state
            .counter
            .render_with(&WidgetTemplates)
            .focused(state.ui.focus == Pane::Counter);
        frame.render_widget(widget, area);
    }
}
