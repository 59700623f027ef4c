use serde::{Deserialize, Serialize};

use crate::event::ViewEvent;

/// System-level messages (lifecycle, status).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    Suspend,
    Resume,
    Error(String),
}

/// UI chrome messages, separate from view semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    FocusNext,
}

/// Domain messages representing application intent.
/// These are processed by the update function; view variants carry the
/// wire-shaped event for the owning view to dispatch on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    /// Event addressed to the volume view.
    Volume(ViewEvent),

    /// Event addressed to the counter view.
    Counter(ViewEvent),

    /// System operations (delegated to SystemState).
    System(SystemMsg),

    /// UI operations (delegated to UiState).
    Ui(UiMsg),
}
