use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

/// Application-level commands a key sequence can be bound to.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Quit,
    Suspend,
    FocusNext,
}

/// Key sequences mapped to actions. Config files spell sequences in the
/// `<mod-key>` syntax, e.g. `"<q>"`, `"<ctrl-c>"` or `"<g><g>"`.
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl KeyBindings {
    pub fn action_for(&self, keys: &[KeyEvent]) -> Option<Action> {
        self.0.get(keys).copied()
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                let keys = parse_key_sequence(&key_str).map_err(serde::de::Error::custom)?;
                Ok((keys, action))
            })
            .collect::<Result<HashMap<_, _>, D::Error>>()?;

        Ok(KeyBindings(keybindings))
    }
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            }
            rest if rest.starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            }
            rest if rest.starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            }
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let c = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "f1" => KeyCode::F(1),
        "f2" => KeyCode::F(2),
        "f3" => KeyCode::F(3),
        "f4" => KeyCode::F(4),
        "f5" => KeyCode::F(5),
        "f6" => KeyCode::F(6),
        "f7" => KeyCode::F(7),
        "f8" => KeyCode::F(8),
        "f9" => KeyCode::F(9),
        "f10" => KeyCode::F(10),
        "f11" => KeyCode::F(11),
        "f12" => KeyCode::F(12),
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        "tab" => KeyCode::Tab,
        c if c.len() == 1 => {
            let mut c = c.chars().next().ok_or_else(|| "empty key".to_string())?;
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("unable to parse key: {raw}")),
    };
    Ok(KeyEvent::new(c, modifiers))
}

pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
    parse_key_code_with_modifiers(remaining, modifiers)
}

/// Parse a `<key><key>...` sequence.
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("unable to parse `{raw}`"));
    }
    let raw = if !raw.contains("><") {
        let raw = raw.strip_prefix('<').unwrap_or(raw);
        let raw = raw.strip_suffix('>').unwrap_or(raw);
        raw
    } else {
        raw
    };
    let sequences = raw
        .split("><")
        .map(|seq| {
            if let Some(s) = seq.strip_prefix('<') {
                s
            } else if let Some(s) = seq.strip_suffix('>') {
                s
            } else {
                seq
            }
        })
        .collect::<Vec<_>>();

    sequences.into_iter().map(parse_key_event).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_simple_key() {
        assert_eq!(
            parse_key_event("q").expect("parses"),
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())
        );
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(
            parse_key_event("enter").expect("parses"),
            KeyEvent::new(KeyCode::Enter, KeyModifiers::empty())
        );
        assert_eq!(
            parse_key_event("tab").expect("parses"),
            KeyEvent::new(KeyCode::Tab, KeyModifiers::empty())
        );
        assert_eq!(
            parse_key_event("f5").expect("parses"),
            KeyEvent::new(KeyCode::F(5), KeyModifiers::empty())
        );
    }

    #[test]
    fn test_parse_with_modifiers() {
        assert_eq!(
            parse_key_event("ctrl-c").expect("parses"),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        );
        assert_eq!(
            parse_key_event("alt-enter").expect("parses"),
            KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT)
        );
        assert_eq!(
            parse_key_event("ctrl-alt-x").expect("parses"),
            KeyEvent::new(
                KeyCode::Char('x'),
                KeyModifiers::CONTROL | KeyModifiers::ALT
            )
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            parse_key_event("CTRL-C").expect("parses"),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        );
    }

    #[test]
    fn test_parse_invalid_key() {
        assert!(parse_key_event("invalid-key").is_err());
        assert!(parse_key_event("").is_err());
    }

    #[test]
    fn test_parse_key_sequence() {
        assert_eq!(
            parse_key_sequence("<q>").expect("parses"),
            vec![KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())]
        );
        assert_eq!(
            parse_key_sequence("<g><g>").expect("parses"),
            vec![
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::empty()),
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::empty())
            ]
        );
    }

    #[test]
    fn test_parse_unbalanced_sequence() {
        assert!(parse_key_sequence("<q").is_err());
    }

    #[test]
    fn test_keybindings_deserialize() {
        let bindings: KeyBindings =
            json5::from_str(r#"{ "<q>": "Quit", "<ctrl-z>": "Suspend" }"#).expect("parses");
        let quit = parse_key_sequence("<q>").expect("parses");
        let suspend = parse_key_sequence("<ctrl-z>").expect("parses");
        assert_eq!(bindings.action_for(&quit), Some(Action::Quit));
        assert_eq!(bindings.action_for(&suspend), Some(Action::Suspend));
        assert_eq!(bindings.action_for(&[]), None);
    }
}
