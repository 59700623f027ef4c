//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod counter_pane;
pub mod status_bar;
pub mod volume_pane;

pub use counter_pane::CounterPane;
pub use status_bar::StatusBar;
pub use volume_pane::VolumePane;

/// Collection of all components
pub struct Components {
    pub volume: VolumePane,
    pub counter: CounterPane,
    pub status_bar: StatusBar,
}

impl Components {
    pub fn new() -> Self {
        Self {
            volume: VolumePane::new(),
            counter: CounterPane::new(),
            status_bar: StatusBar::new(),
        }
    }

    /// Render all components
    ///
    /// This is the main rendering entry point that delegates to individual
    /// components.
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        // Layout: [pane row, status bar (2 rows)]
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Min(0),    // Panes
                Constraint::Length(2), // Status bar
            ])
            .split(area);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(layout[0]);

        self.volume.view(state, frame, panes[0]);
        self.counter.view(state, frame, panes[1]);
        self.status_bar.view(state, frame, layout[1]);
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
