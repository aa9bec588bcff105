//! Keyboard shortcut matching

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::events::KeyEvent;
use crate::Result;

const MOD_CTRL: u8 = 0b0001;
const MOD_ALT: u8 = 0b0010;
const MOD_SHIFT: u8 = 0b0100;
const MOD_META: u8 = 0b1000;

/// A keyboard modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    /// Cmd on macOS, Win on Windows
    Meta,
}

impl Modifier {
    fn bit(self) -> u8 {
        match self {
            Modifier::Ctrl => MOD_CTRL,
            Modifier::Alt => MOD_ALT,
            Modifier::Shift => MOD_SHIFT,
            Modifier::Meta => MOD_META,
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "ctrl" | "control" => Some(Modifier::Ctrl),
            "alt" | "option" | "opt" => Some(Modifier::Alt),
            "shift" => Some(Modifier::Shift),
            "meta" | "cmd" | "command" | "super" | "win" => Some(Modifier::Meta),
            _ => None,
        }
    }
}

/// Canonical key combination.
///
/// Modifiers are a bitmask. Single-character keys from a binding are stored
/// lowercase, so `"Ctrl+C"` names the unshifted `c` key. An event matches
/// when its key is exactly that key and every bound modifier is held; extra
/// modifiers do not prevent a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    mods: u8,
    key: String,
}

impl KeyCombo {
    /// Parse a human-readable binding such as `"Ctrl+C"` or `"Ctrl+Shift+H"`.
    ///
    /// The last token is the key; every earlier token must be a modifier.
    pub fn parse(binding: &str) -> Result<Self> {
        let invalid = |reason: &str| CoreError::InvalidKeybind {
            binding: binding.to_string(),
            reason: reason.to_string(),
        };

        let tokens: Vec<&str> = binding.split('+').map(str::trim).collect();
        let (key, modifiers) = match tokens.split_last() {
            Some((key, modifiers)) if !key.is_empty() => (key, modifiers),
            _ => return Err(invalid("keybind has no key component")),
        };

        let mut mods = 0u8;
        for token in modifiers {
            let modifier = Modifier::parse(token)
                .ok_or_else(|| invalid(&format!("unrecognized modifier: {token}")))?;
            mods |= modifier.bit();
        }

        Ok(Self {
            mods,
            key: normalize_key(key),
        })
    }

    /// Build from a key event reported by the renderer
    pub fn from_event(event: &KeyEvent) -> Self {
        Self {
            mods: Self::event_mods(event),
            key: normalize_key(&event.key),
        }
    }

    fn event_mods(event: &KeyEvent) -> u8 {
        let mut mods = 0u8;
        if event.ctrl {
            mods |= MOD_CTRL;
        }
        if event.alt {
            mods |= MOD_ALT;
        }
        if event.shift {
            mods |= MOD_SHIFT;
        }
        if event.meta {
            mods |= MOD_META;
        }
        mods
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        let held = Self::event_mods(event);
        held & self.mods == self.mods && event.key == self.key
    }

    pub fn has(&self, modifier: Modifier) -> bool {
        self.mods & modifier.bit() != 0
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (modifier, label) in [
            (Modifier::Ctrl, "Ctrl"),
            (Modifier::Alt, "Alt"),
            (Modifier::Shift, "Shift"),
            (Modifier::Meta, "Meta"),
        ] {
            if self.has(modifier) {
                write!(f, "{label}+")?;
            }
        }
        if self.key.chars().count() == 1 {
            write!(f, "{}", self.key.to_uppercase())
        } else {
            write!(f, "{}", self.key)
        }
    }
}

fn normalize_key(key: &str) -> String {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_lowercase().collect(),
        _ => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: &str, ctrl: bool, shift: bool) -> KeyEvent {
        KeyEvent {
            key: key.to_string(),
            ctrl,
            alt: false,
            shift,
            meta: false,
        }
    }

    #[test]
    fn test_parse_ctrl_c() {
        let combo = KeyCombo::parse("Ctrl+C").unwrap();
        assert!(combo.has(Modifier::Ctrl));
        assert!(!combo.has(Modifier::Shift));
        assert_eq!(combo.key(), "c");
        assert_eq!(combo.to_string(), "Ctrl+C");
    }

    #[test]
    fn test_parse_aliases() {
        let combo = KeyCombo::parse("control + option + h").unwrap();
        assert!(combo.has(Modifier::Ctrl));
        assert!(combo.has(Modifier::Alt));
        assert_eq!(combo.key(), "h");
        assert_eq!(combo.to_string(), "Ctrl+Alt+H");
    }

    #[test]
    fn test_parse_errors() {
        assert!(KeyCombo::parse("").is_err());
        assert!(KeyCombo::parse("Ctrl+").is_err());
        assert!(KeyCombo::parse("Hyper+C").is_err());
    }

    #[test]
    fn test_matches_event() {
        let combo = KeyCombo::parse("Ctrl+C").unwrap();
        assert!(combo.matches(&key("c", true, false)));
        assert!(!combo.matches(&key("c", false, false)));
        assert!(!combo.matches(&key("C", true, true)));
        assert!(!combo.matches(&key("v", true, false)));
    }

    #[test]
    fn test_extra_modifiers_still_match() {
        let combo = KeyCombo::parse("Ctrl+C").unwrap();
        let event = KeyEvent {
            key: "c".to_string(),
            ctrl: true,
            alt: true,
            shift: false,
            meta: false,
        };
        assert!(combo.matches(&event));
    }

    #[test]
    fn test_key_case_is_exact() {
        let combo = KeyCombo::parse("Ctrl+C").unwrap();
        // Caps Lock reports the uppercase key
        assert!(!combo.matches(&key("C", true, false)));
        assert_eq!(KeyCombo::from_event(&key("C", true, false)).key(), "c");
    }

    #[test]
    fn test_named_keys_kept() {
        let combo = KeyCombo::parse("Ctrl+Enter").unwrap();
        assert!(combo.matches(&key("Enter", true, false)));
    }
}
