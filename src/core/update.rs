use crate::core::{
    msg::{Msg, SystemMsg, UiMsg},
    state::AppState,
};

/// Elm-like update function.
/// Returns the new state from the current state and one message. Pure: the
/// views themselves perform no I/O, so there is no command channel here.
pub fn update(msg: Msg, mut state: AppState) -> AppState {
    match msg {
        Msg::Volume(event) => {
            let before = state.volume.level();
            state.volume.handle_event(&event);
            if state.volume.level() != before {
                state.system.status_message = Some(format!("volume {}", state.volume.level()));
            }
            state
        }

        Msg::Counter(event) => {
            let before = state.counter.count();
            state.counter.handle_event(&event);
            if state.counter.count() != before {
                state.system.status_message = Some(format!("count {}", state.counter.count()));
            }
            state
        }

        Msg::System(SystemMsg::Quit) => {
            state.system.should_quit = true;
            state
        }

        Msg::System(SystemMsg::Suspend) => {
            state.system.should_suspend = true;
            state
        }

        Msg::System(SystemMsg::Resume) => {
            state.system.should_suspend = false;
            state
        }

        Msg::System(SystemMsg::Error(error)) => {
            log::error!("{error}");
            state.system.status_message = Some(error);
            state
        }

        Msg::Ui(UiMsg::FocusNext) => {
            state.ui.focus = state.ui.focus.next();
            state
        }
    }
}
