//! Presentation layer.
//!
//! Stateless components render [`AppState`](crate::core::state::AppState)
//! into ratatui widgets. The widgets module is the production implementation
//! of the views' template-producer seams.

pub mod components;
pub mod widgets;
