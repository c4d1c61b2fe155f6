//! Adapter to convert DOM `keydown` data to our Keystroke type

use super::types::{KeyCode, Keystroke, Modifiers};

/// Convert a DOM `keyCode` plus modifier flags to a Keystroke
///
/// Returns None for codes with no mapping (e.g. bare modifier keys).
pub fn keystroke_from_dom(
    key_code: u32,
    ctrl: bool,
    shift: bool,
    alt: bool,
    meta: bool,
) -> Option<Keystroke> {
    let mods = Modifiers::new(ctrl, shift, alt, meta);

    let key = match key_code {
        8 => KeyCode::Backspace,
        9 => KeyCode::Tab,
        13 => KeyCode::Enter,
        27 => KeyCode::Escape,
        32 => KeyCode::Space,
        33 => KeyCode::PageUp,
        34 => KeyCode::PageDown,
        35 => KeyCode::End,
        36 => KeyCode::Home,
        37 => KeyCode::Left,
        38 => KeyCode::Up,
        39 => KeyCode::Right,
        40 => KeyCode::Down,
        46 => KeyCode::Delete,

        // Digit row and numpad digits
        48..=57 => KeyCode::Char(char::from_digit(key_code - 48, 10)?),
        96..=105 => KeyCode::Char(char::from_digit(key_code - 96, 10)?),

        // Letters arrive as their uppercase ASCII code
        65..=90 => KeyCode::Char(char::from_u32(key_code)?.to_ascii_lowercase()),

        112..=123 => KeyCode::F((key_code - 111) as u8),

        _ => return None,
    };

    Some(Keystroke::new(key, mods))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_ctrl_enter() {
        assert_eq!(
            keystroke_from_dom(13, false, false, false, false),
            Some(Keystroke::enter())
        );
        assert_eq!(
            keystroke_from_dom(13, true, false, false, false),
            Some(Keystroke::ctrl_enter())
        );
    }

    #[test]
    fn test_escape_and_editing_keys() {
        assert_eq!(
            keystroke_from_dom(27, false, false, false, false),
            Some(Keystroke::escape())
        );
        assert_eq!(
            keystroke_from_dom(8, false, false, false, false).map(|k| k.key),
            Some(KeyCode::Backspace)
        );
        assert_eq!(
            keystroke_from_dom(46, false, false, false, false).map(|k| k.key),
            Some(KeyCode::Delete)
        );
        assert_eq!(
            keystroke_from_dom(37, false, true, false, false),
            Some(Keystroke::new(KeyCode::Left, Modifiers::SHIFT))
        );
    }

    #[test]
    fn test_letters_and_digits() {
        assert_eq!(
            keystroke_from_dom(65, false, false, false, false),
            Some(Keystroke::char('a'))
        );
        assert_eq!(
            keystroke_from_dom(90, false, false, false, true),
            Some(Keystroke::char_with_mods('z', Modifiers::META))
        );
        assert_eq!(
            keystroke_from_dom(55, false, false, false, false),
            Some(Keystroke::char('7'))
        );
        assert_eq!(
            keystroke_from_dom(99, false, false, false, false),
            Some(Keystroke::char('3'))
        );
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(
            keystroke_from_dom(112, false, false, false, false).map(|k| k.key),
            Some(KeyCode::F(1))
        );
        assert_eq!(
            keystroke_from_dom(123, false, false, false, false).map(|k| k.key),
            Some(KeyCode::F(12))
        );
    }

    #[test]
    fn test_unmapped_codes() {
        // Shift, Ctrl, Alt on their own
        assert_eq!(keystroke_from_dom(16, false, true, false, false), None);
        assert_eq!(keystroke_from_dom(17, true, false, false, false), None);
        assert_eq!(keystroke_from_dom(18, false, false, true, false), None);
    }
}
