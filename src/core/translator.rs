use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    config::keybindings::Action,
    core::{
        msg::{Msg, SystemMsg, UiMsg},
        raw_msg::RawMsg,
        state::{AppState, Pane},
    },
    event::ViewEvent,
    view::counter,
};

/// Translates raw external events into domain messages.
/// This function is pure and contains no side effects.
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::Error(error))],

        // User input - translate based on focus and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // Frequent events and terminal geometry are handled by the runner
        RawMsg::Tick | RawMsg::Render | RawMsg::Resize(_, _) => vec![],
    }
}

/// Translates keyboard input based on configured bindings and pane focus.
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Global bindings that must work even with an empty keymap
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    if let Some(action) = state.config.config.keybindings.action_for(&[key]) {
        return action_msgs(action);
    }

    // Unbound keys are forwarded to the focused view as wire events.
    match state.ui.focus {
        Pane::Volume => dom_key_name(key)
            .map(|name| vec![Msg::Volume(ViewEvent::key_update(&name))])
            .unwrap_or_default(),
        Pane::Counter => match key.code {
            KeyCode::Char('+') | KeyCode::Char('=') => {
                vec![Msg::Counter(ViewEvent::new(counter::INC))]
            }
            KeyCode::Char('-') => vec![Msg::Counter(ViewEvent::new(counter::DEC))],
            _ => vec![],
        },
    }
}

fn action_msgs(action: Action) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::FocusNext => vec![Msg::Ui(UiMsg::FocusNext)],
    }
}

/// Browser-style name for a terminal key, as a client bootstrap would report
/// `event.key`. Keys with control/alt held and keys without a stable name
/// yield `None` and are not forwarded.
pub fn dom_key_name(key: KeyEvent) -> Option<String> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    let name = match key.code {
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Char(c) => c.to_string(),
        _ => return None,
    };
    Some(name)
}
