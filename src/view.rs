//! Stateful view components.
//!
//! Each view owns its state, consumes [`ViewEvent`](crate::event::ViewEvent)s
//! through `handle_event` and projects its state into a renderable artifact
//! through a templates trait implemented by the presentation layer. Views are
//! total over their input: events they do not recognize leave them untouched.

pub mod counter;
pub mod volume;

pub use counter::Counter;
pub use volume::{VolumeControl, VolumeLevel};
