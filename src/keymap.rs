/// Key mapping table
///
/// Translates between the single characters used in `configuration.json`
/// and the key codes of the windowing layer. Only the top-row digits and
/// the letters a-z are bindable.
use iced::keyboard::key::Code;
use iced::keyboard::Key;

use crate::error::UnsupportedKeyError;

/// The platform key identifier
pub type KeyId = Code;

#[rustfmt::skip]
const TABLE: [(char, KeyId); 36] = [
    ('0', Code::Digit0), ('1', Code::Digit1), ('2', Code::Digit2), ('3', Code::Digit3),
    ('4', Code::Digit4), ('5', Code::Digit5), ('6', Code::Digit6), ('7', Code::Digit7),
    ('8', Code::Digit8), ('9', Code::Digit9),

    ('a', Code::KeyA), ('b', Code::KeyB), ('c', Code::KeyC), ('d', Code::KeyD),
    ('e', Code::KeyE), ('f', Code::KeyF), ('g', Code::KeyG), ('h', Code::KeyH),
    ('i', Code::KeyI), ('j', Code::KeyJ), ('k', Code::KeyK), ('l', Code::KeyL),
    ('m', Code::KeyM), ('n', Code::KeyN), ('o', Code::KeyO), ('p', Code::KeyP),
    ('q', Code::KeyQ), ('r', Code::KeyR), ('s', Code::KeyS), ('t', Code::KeyT),
    ('u', Code::KeyU), ('v', Code::KeyV), ('w', Code::KeyW), ('x', Code::KeyX),
    ('y', Code::KeyY), ('z', Code::KeyZ),
];

/// Convert a configured character to its key code.
/// Upper-case letters map to the same key as their lower-case form.
pub fn to_key_id(c: char) -> Result<KeyId, UnsupportedKeyError> {
    let lower = c.to_ascii_lowercase();
    TABLE
        .iter()
        .find(|(ch, _)| *ch == lower)
        .map(|(_, code)| *code)
        .ok_or(UnsupportedKeyError(c))
}

/// Key code for a key event, if it produced one bindable character.
/// Press and release events both carry the logical key, so they resolve
/// the same way under any keyboard layout.
pub fn from_key(key: &Key) -> Option<KeyId> {
    let Key::Character(s) = key else {
        return None;
    };
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => to_key_id(c).ok(),
        _ => None,
    }
}

/// Convert a key code back to its character, if the key is bindable.
pub fn to_char(key: KeyId) -> Option<char> {
    TABLE
        .iter()
        .find(|(_, code)| *code == key)
        .map(|(ch, _)| *ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_alphanumeric_round_trips() {
        for c in ('0'..='9').chain('a'..='z') {
            let key = to_key_id(c).unwrap();
            assert_eq!(to_char(key), Some(c));
        }
    }

    #[test]
    fn test_uppercase_is_folded() {
        assert_eq!(to_key_id('Q').unwrap(), Code::KeyQ);
    }

    #[test]
    fn test_rejects_non_alphanumeric() {
        assert_eq!(to_key_id('-'), Err(UnsupportedKeyError('-')));
        assert_eq!(to_key_id(' '), Err(UnsupportedKeyError(' ')));
        assert_eq!(to_key_id('é'), Err(UnsupportedKeyError('é')));
    }

    #[test]
    fn test_key_events_resolve_through_table() {
        assert_eq!(from_key(&Key::Character("7".into())), Some(Code::Digit7));
        assert_eq!(from_key(&Key::Character("A".into())), Some(Code::KeyA));
    }

    #[test]
    fn test_modifier_and_symbol_keys_are_not_bindable() {
        use iced::keyboard::key::Named;

        assert_eq!(from_key(&Key::Named(Named::Shift)), None);
        assert_eq!(from_key(&Key::Named(Named::Enter)), None);
        assert_eq!(from_key(&Key::Character("&".into())), None);
        assert_eq!(from_key(&Key::Character("ab".into())), None);
        assert_eq!(from_key(&Key::Unidentified), None);
    }

    #[test]
    fn test_unbound_codes_have_no_char() {
        assert_eq!(to_char(Code::Space), None);
        assert_eq!(to_char(Code::Numpad1), None);
    }
}
