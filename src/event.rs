//! Wire-shaped events delivered to views.
//!
//! Views receive tagged messages of the form `{type, data}` where `data` is a
//! flat string map. Only a handful of type tags and key names have a defined
//! effect; everything else is a no-op by contract, so event construction and
//! inspection never fail.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Type tag for keyboard updates forwarded from the input layer.
pub const KEY_UPDATE: &str = "key_update";

/// Data field carrying the key name of a [`KEY_UPDATE`] event.
pub const KEY_FIELD: &str = "key";

/// A tagged event with a string payload map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: HashMap<String, String>,
}

impl ViewEvent {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            data: HashMap::new(),
        }
    }

    /// Builder-style payload field.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(field.into(), value.into());
        self
    }

    /// A `key_update` event carrying a browser-style key name.
    pub fn key_update(key_name: &str) -> Self {
        Self::new(KEY_UPDATE).with(KEY_FIELD, key_name)
    }

    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.data.get(field).map(String::as_str)
    }
}

/// Closed set of key identifiers with a defined effect on views.
///
/// Any name outside this set parses to `None`, which callers treat as a
/// no-op rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }
}
