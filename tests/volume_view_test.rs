//! Behavioral contract of the volume view through the public API.

use pretty_assertions::assert_eq;
use rstest::rstest;
use voltui::{
    event::ViewEvent,
    view::volume::{VolumeLevel, VolumeTemplates},
    VolumeControl,
};

struct TextTemplates;

impl VolumeTemplates for TextTemplates {
    type Artifact = String;

    fn volume_template(&self, level: VolumeLevel) -> String {
        format!("<gauge value=\"{}\"/>", level.get())
    }
}

#[test]
fn freshly_created_controller_is_at_thirty() {
    assert_eq!(VolumeControl::new().level().get(), 30);
}

#[rstest]
#[case("ArrowUp", 100)]
#[case("ArrowDown", 0)]
#[case("ArrowLeft", 20)]
#[case("ArrowRight", 40)]
fn arrow_keys_move_the_level(#[case] key: &str, #[case] expected: u8) {
    let mut view = VolumeControl::new();
    view.handle_event(&ViewEvent::key_update(key));
    assert_eq!(view.level().get(), expected);
}

#[rstest]
#[case(0)]
#[case(30)]
#[case(77)]
#[case(100)]
fn absolute_sets_ignore_the_starting_point(#[case] start: u8) {
    let mut view = VolumeControl::with_level(VolumeLevel::new(start));
    view.handle_event(&ViewEvent::key_update("ArrowUp"));
    assert_eq!(view.level().get(), 100);

    let mut view = VolumeControl::with_level(VolumeLevel::new(start));
    view.handle_event(&ViewEvent::key_update("ArrowDown"));
    assert_eq!(view.level().get(), 0);
}

#[test]
fn repeated_steps_never_overflow() {
    let mut view = VolumeControl::with_level(VolumeLevel::new(95));
    for _ in 0..5 {
        view.handle_event(&ViewEvent::key_update("ArrowRight"));
        assert_eq!(view.level().get(), 100);
    }
}

#[test]
fn repeated_steps_never_underflow() {
    let mut view = VolumeControl::with_level(VolumeLevel::new(5));
    for _ in 0..5 {
        view.handle_event(&ViewEvent::key_update("ArrowLeft"));
        assert_eq!(view.level().get(), 0);
    }
}

#[test]
fn unknown_keys_are_noops() {
    let mut view = VolumeControl::new();
    view.handle_event(&ViewEvent::key_update("Unknown"));
    assert_eq!(view.level().get(), 30);
}

#[test]
fn non_matching_event_types_never_change_the_level() {
    let mut view = VolumeControl::new();
    view.handle_event(&ViewEvent::new("other"));
    view.handle_event(&ViewEvent::new("other").with("key", "ArrowUp"));
    view.handle_event(&ViewEvent::new("click").with("value", "100"));
    assert_eq!(view.level().get(), 30);
}

#[test]
fn level_is_in_range_after_every_event() {
    // A long mixed sequence, including events that should be ignored.
    let events = [
        ViewEvent::key_update("ArrowRight"),
        ViewEvent::key_update("ArrowRight"),
        ViewEvent::key_update("ArrowUp"),
        ViewEvent::key_update("ArrowRight"),
        ViewEvent::new("inc"),
        ViewEvent::key_update("ArrowDown"),
        ViewEvent::key_update("ArrowLeft"),
        ViewEvent::key_update("PageDown"),
        ViewEvent::new("key_update"),
        ViewEvent::key_update("ArrowUp"),
        ViewEvent::key_update("ArrowLeft"),
    ];

    let mut view = VolumeControl::new();
    for event in &events {
        view.handle_event(event);
        assert!(view.level().get() <= 100, "out of range after {event:?}");
    }
    assert_eq!(view.level().get(), 90);
}

#[test]
fn render_requests_the_same_level_until_the_next_event() {
    let mut view = VolumeControl::new();
    assert_eq!(view.render_with(&TextTemplates), "<gauge value=\"30\"/>");
    assert_eq!(view.render_with(&TextTemplates), "<gauge value=\"30\"/>");

    view.handle_event(&ViewEvent::key_update("ArrowDown"));
    assert_eq!(view.render_with(&TextTemplates), "<gauge value=\"0\"/>");
}
