//! Elm-like application core.
//!
//! Raw external events ([`raw_msg::RawMsg`]) are translated into domain
//! messages ([`msg::Msg`]) by the pure [`translator`], then folded into
//! [`state::AppState`] by the pure [`update::update`] function. Rendering
//! reads the state elsewhere; nothing in this module performs I/O.

pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
