//! Volume control view.
//!
//! A bounded integer level in `[0, 100]` driven by `key_update` events. The
//! transition is a pure function over the closed [`Key`] set; every other
//! input is a no-op.

use serde::{Deserialize, Serialize};

use crate::event::{Key, ViewEvent, KEY_FIELD, KEY_UPDATE};

pub const MIN_VOLUME: u8 = 0;
pub const MAX_VOLUME: u8 = 100;

const DEFAULT_VOLUME: u8 = 30;
const VOLUME_STEP: u8 = 10;

/// A volume value, guaranteed to stay within `[MIN_VOLUME, MAX_VOLUME]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VolumeLevel(u8);

impl VolumeLevel {
    /// Clamping constructor.
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_VOLUME))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Pure transition for a single key press.
    ///
    /// Arrows up/down jump to the bounds; left/right step by ten and
    /// saturate, so the result is always in range.
    pub fn apply(self, key: Key) -> Self {
        match key {
            Key::ArrowUp => Self(MAX_VOLUME),
            Key::ArrowDown => Self(MIN_VOLUME),
            Key::ArrowLeft => Self(self.0.saturating_sub(VOLUME_STEP)),
            Key::ArrowRight => Self((self.0 + VOLUME_STEP).min(MAX_VOLUME)),
        }
    }
}

impl Default for VolumeLevel {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

impl std::fmt::Display for VolumeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Template-production collaborator for the volume view.
///
/// The view does not know how its artifact is laid out or displayed; the
/// presentation layer supplies the implementation.
pub trait VolumeTemplates {
    type Artifact;

    fn volume_template(&self, level: VolumeLevel) -> Self::Artifact;
}

/// The volume view: one owned level, mutated only by `handle_event`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolumeControl {
    level: VolumeLevel,
}

impl VolumeControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(level: VolumeLevel) -> Self {
        Self { level }
    }

    pub fn level(&self) -> VolumeLevel {
        self.level
    }

    /// Consume one event. Total: events that are not a `key_update` carrying
    /// a known key name leave the level unchanged.
    pub fn handle_event(&mut self, event: &ViewEvent) {
        if !event.is(KEY_UPDATE) {
            return;
        }
        if let Some(key) = event.get(KEY_FIELD).and_then(Key::parse) {
            self.level = self.level.apply(key);
        }
    }

    /// Project the current level through the templating collaborator.
    pub fn render_with<T: VolumeTemplates>(&self, templates: &T) -> T::Artifact {
        templates.volume_template(self.level)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    struct TextTemplates;

    impl VolumeTemplates for TextTemplates {
        type Artifact = String;

        fn volume_template(&self, level: VolumeLevel) -> String {
            format!("volume: {level}")
        }
    }

    #[test]
    fn test_initial_level_is_thirty() {
        let view = VolumeControl::new();
        assert_eq!(view.level().get(), 30);
    }

    #[test]
    fn test_constructor_clamps() {
        assert_eq!(VolumeLevel::new(250).get(), 100);
        assert_eq!(VolumeLevel::new(100).get(), 100);
        assert_eq!(VolumeLevel::new(0).get(), 0);
    }

    #[rstest]
    #[case(0, "ArrowUp", 100)]
    #[case(55, "ArrowUp", 100)]
    #[case(100, "ArrowDown", 0)]
    #[case(1, "ArrowDown", 0)]
    #[case(30, "ArrowLeft", 20)]
    #[case(30, "ArrowRight", 40)]
    #[case(5, "ArrowLeft", 0)]
    #[case(0, "ArrowLeft", 0)]
    #[case(95, "ArrowRight", 100)]
    #[case(100, "ArrowRight", 100)]
    fn test_key_update_transitions(#[case] start: u8, #[case] key: &str, #[case] expected: u8) {
        let mut view = VolumeControl::with_level(VolumeLevel::new(start));
        view.handle_event(&ViewEvent::key_update(key));
        assert_eq!(view.level().get(), expected);
    }

    #[test]
    fn test_clamp_is_stable_at_bounds() {
        let mut view = VolumeControl::with_level(VolumeLevel::new(95));
        view.handle_event(&ViewEvent::key_update("ArrowRight"));
        assert_eq!(view.level().get(), 100);
        view.handle_event(&ViewEvent::key_update("ArrowRight"));
        assert_eq!(view.level().get(), 100);

        let mut view = VolumeControl::with_level(VolumeLevel::new(5));
        view.handle_event(&ViewEvent::key_update("ArrowLeft"));
        assert_eq!(view.level().get(), 0);
        view.handle_event(&ViewEvent::key_update("ArrowLeft"));
        assert_eq!(view.level().get(), 0);
    }

    #[test]
    fn test_unknown_key_is_noop() {
        let mut view = VolumeControl::new();
        view.handle_event(&ViewEvent::key_update("Enter"));
        view.handle_event(&ViewEvent::key_update(""));
        assert_eq!(view.level().get(), 30);
    }

    #[test]
    fn test_missing_key_field_is_noop() {
        let mut view = VolumeControl::new();
        view.handle_event(&ViewEvent::new(KEY_UPDATE));
        assert_eq!(view.level().get(), 30);
    }

    #[test]
    fn test_other_event_types_are_noop() {
        let mut view = VolumeControl::new();
        view.handle_event(&ViewEvent::new("click").with(KEY_FIELD, "ArrowUp"));
        view.handle_event(&ViewEvent::new("inc"));
        assert_eq!(view.level().get(), 30);
    }

    #[test]
    fn test_level_stays_in_range_for_any_sequence() {
        let keys = [
            "ArrowLeft",
            "ArrowLeft",
            "ArrowDown",
            "ArrowLeft",
            "ArrowRight",
            "ArrowUp",
            "ArrowRight",
            "ArrowRight",
            "Escape",
            "ArrowDown",
        ];
        let mut view = VolumeControl::new();
        for key in keys {
            view.handle_event(&ViewEvent::key_update(key));
            assert!(view.level().get() <= MAX_VOLUME);
        }
    }

    #[test]
    fn test_render_is_a_pure_projection() {
        let mut view = VolumeControl::new();
        let first = view.render_with(&TextTemplates);
        let second = view.render_with(&TextTemplates);
        assert_eq!(first, second);
        assert_eq!(first, "volume: 30%");

        view.handle_event(&ViewEvent::key_update("ArrowRight"));
        assert_eq!(view.render_with(&TextTemplates), "volume: 40%");
    }
}
