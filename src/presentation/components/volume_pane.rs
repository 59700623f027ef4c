use ratatui::prelude::*;

use crate::{
    core::state::{AppState, Pane},
    presentation::widgets::WidgetTemplates,
};

/// Stateless renderer for the volume view.
#[derive(Debug, Clone, Copy, Default)]
pub struct VolumePane;

impl VolumePane {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let widget = state
            .volume
            .render_with(&WidgetTemplates)
            .focused(state.ui.focus == Pane::Volume);
        frame.render_widget(widget, area);
    }
}
