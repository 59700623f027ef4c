pub mod counter;
pub mod volume;

pub use counter::CounterWidget;
pub use volume::VolumeWidget;

use crate::view::{counter::CounterTemplates, volume::VolumeTemplates, VolumeLevel};

/// Production templating collaborator: turns view state into ratatui
/// widgets. Views stay ignorant of layout and styling.
#[derive(Debug, Clone, Copy, Default)]
pub struct WidgetTemplates;

impl VolumeTemplates for WidgetTemplates {
    type Artifact = VolumeWidget;

    fn volume_template(&self, level: VolumeLevel) -> VolumeWidget {
        VolumeWidget::new(level)
    }
}

impl CounterTemplates for WidgetTemplates {
    type Artifact = CounterWidget;

    fn counter_template(&self, count: u32) -> CounterWidget {
        CounterWidget::new(count)
    }
}
