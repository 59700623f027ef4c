//! # Voltui - Terminal Volume Control
//!
//! A terminal host for wire-event-driven view components, built with Rust and
//! Ratatui. This library implements an Elm-like architecture for predictable
//! state management.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **View** (`presentation`): UI rendering based on current state
//!
//! Views themselves (`view::volume`, `view::counter`) consume wire-shaped
//! `{type, data}` events and are total over their input: anything they do not
//! recognize is a no-op.
//!
//! ## Example Usage
//!
//! ```rust
//! use voltui::{core::msg::Msg, core::state::AppState, core::update::update, event::ViewEvent};
//!
//! // Initialize state
//! let state = AppState::default();
//! assert_eq!(state.volume.level().get(), 30);
//!
//! // Process messages
//! let state = update(Msg::Volume(ViewEvent::key_update("ArrowRight")), state);
//! assert_eq!(state.volume.level().get(), 40);
//!
//! // Unknown keys leave the state untouched
//! let state = update(Msg::Volume(ViewEvent::key_update("Enter")), state);
//! assert_eq!(state.volume.level().get(), 40);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Messages, state, translator and the pure update function
//! - [`view`] - The event-driven view components
//! - [`event`] - Wire-shaped view events
//! - [`presentation`] - Components and widgets
//! - [`config`] - Configuration management
//! - [`app`] - The terminal event loop host

#![deny(warnings)]
#![allow(dead_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod event;
pub mod presentation;
pub mod tui;
pub mod utils;
pub mod view;

// Re-exports for convenience
pub use crate::core::msg::Msg;
pub use crate::core::raw_msg::RawMsg;
pub use crate::core::state::AppState;
pub use crate::core::translator::translate_raw_to_domain;
pub use crate::core::update::update;
pub use crate::event::ViewEvent;
pub use crate::view::{Counter, VolumeControl, VolumeLevel};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
