//! Swiss German (QWERTZ).
use blekbd_macros::keymap;

use crate::keyboard::KeyEvent;

pub(super) static KEYMAP: &[(char, KeyEvent)] = &keymap!(
    r#"
    | Key    | Base  | Shift | AltGr  |
    |--------|-------|-------|--------|
    | A      | a     | A     |        |
    | B      | b     | B     |        |
    | C      | c     | C     |        |
    | D      | d     | D     |        |
    | E      | e     | E     |        |
    | F      | f     | F     |        |
    | G      | g     | G     |        |
    | H      | h     | H     |        |
    | I      | i     | I     |        |
    | J      | j     | J     |        |
    | K      | k     | K     |        |
    | L      | l     | L     |        |
    | M      | m     | M     |        |
    | N      | n     | N     |        |
    | O      | o     | O     |        |
    | P      | p     | P     |        |
    | Q      | q     | Q     |        |
    | R      | r     | R     |        |
    | S      | s     | S     |        |
    | T      | t     | T     |        |
    | U      | u     | U     |        |
    | V      | v     | V     |        |
    | W      | w     | W     |        |
    | X      | x     | X     |        |
    | Y      | z     | Z     |        |
    | Z      | y     | Y     |        |
    | 1      | 1     | +     |        |
    | 2      | 2     | "     | @      |
    | 3      | 3     | *     | #      |
    | 4      | 4     | ç     |        |
    | 5      | 5     | %     |        |
    | 6      | 6     | &     | ¬      |
    | 7      | 7     | /     | ¦ Pipe |
    | 8      | 8     | (     | ¢      |
    | 9      | 9     | )     |        |
    | 0      | 0     | =     |        |
    | Enter  | Enter |       |        |
    | Tab    | Tab   |       |        |
    | Space  | Space |       |        |
    | -      | '     | ?     |        |
    | =      | ^     | `     | ~      |
    | [      | ü     | Ü     | [      |
    | ]      | è     | È     | ]      |
    | ;      | ö     | Ö     |        |
    | '      | ä     | Ä     | {      |
    | \      | $     | £     | }      |
    | NonUs\ | <     | >     | \      |
    | ,      | ,     | ;     |        |
    | .      | .     | :     |        |
    | /      | -     | _     |        |
"#
);

#[cfg(test)]
mod tests {
    use crate::keyboard::{Key, KeyEvent, Modifiers};
    use crate::layout::Layout;

    #[test]
    fn umlauts_sit_on_us_bracket_and_punctuation_keys() {
        let ch = Layout::SwissGerman;
        assert_eq!(ch.lookup('ü'), Some(KeyEvent::new(Key::LeftBracket, Modifiers::NONE)));
        assert_eq!(ch.lookup('ü'), Layout::Us.lookup('['));
        assert_eq!(ch.lookup('Ü'), Some(KeyEvent::new(Key::LeftBracket, Modifiers::LEFT_SHIFT)));
        assert_eq!(ch.lookup('ö'), Some(KeyEvent::new(Key::Semicolon, Modifiers::NONE)));
        assert_eq!(ch.lookup('ä'), Some(KeyEvent::new(Key::Apostrophe, Modifiers::NONE)));
    }

    #[test]
    fn alt_gr_tier() {
        let ch = Layout::SwissGerman;
        assert_eq!(ch.lookup('@'), Some(KeyEvent::new(Key::Digit2, Modifiers::RIGHT_ALT)));
        assert_eq!(ch.lookup('|'), Some(KeyEvent::new(Key::Digit7, Modifiers::RIGHT_ALT)));
        assert_eq!(ch.lookup('\\'), Some(KeyEvent::new(Key::NonUsBackslash, Modifiers::RIGHT_ALT)));
        assert_eq!(ch.lookup('ç'), Some(KeyEvent::new(Key::Digit4, Modifiers::LEFT_SHIFT)));
    }
}
