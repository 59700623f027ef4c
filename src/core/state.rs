use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    view::{Counter, VolumeControl},
};

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub volume: VolumeControl,
    pub counter: Counter,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

/// Which pane currently receives forwarded input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Pane {
    #[default]
    Volume,
    Counter,
}

impl Pane {
    pub fn next(self) -> Self {
        match self {
            Pane::Volume => Pane::Counter,
            Pane::Counter => Pane::Volume,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Pane::Volume => "Volume",
            Pane::Counter => "Counter",
        }
    }
}

/// UI-related state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Pane,
}

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
}

impl AppState {
    /// Initialize AppState with the given config
    pub fn new(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert_eq!(state.volume.level().get(), 30);
        assert_eq!(state.counter.count(), 0);
        assert_eq!(state.ui.focus, Pane::Volume);
        assert!(!state.system.should_quit);
        assert!(!state.system.should_suspend);
        assert_eq!(state.system.status_message, None);
    }

    #[test]
    fn test_pane_cycle() {
        assert_eq!(Pane::Volume.next(), Pane::Counter);
        assert_eq!(Pane::Counter.next(), Pane::Volume);
        assert_eq!(Pane::Volume.next().next(), Pane::Volume);
    }

    #[test]
    fn test_pane_titles() {
        assert_eq!(Pane::Volume.title(), "Volume");
        assert_eq!(Pane::Counter.title(), "Counter");
    }
}
