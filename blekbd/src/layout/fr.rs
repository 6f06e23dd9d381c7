//! French (AZERTY).
use blekbd_macros::keymap;

use crate::keyboard::KeyEvent;

// U+00B5 is the micro sign, not Greek mu
pub(super) static KEYMAP: &[(char, KeyEvent)] = &keymap!(
    r#"
    | Key    | Base  | Shift  | AltGr |
    |--------|-------|--------|-------|
    | A      | q     | Q      |       |
    | B      | b     | B      |       |
    | C      | c     | C      |       |
    | D      | d     | D      |       |
    | E      | e     | E      | €     |
    | F      | f     | F      |       |
    | G      | g     | G      |       |
    | H      | h     | H      |       |
    | I      | i     | I      |       |
    | J      | j     | J      |       |
    | K      | k     | K      |       |
    | L      | l     | L      |       |
    | M      | ,     | ?      |       |
    | N      | n     | N      |       |
    | O      | o     | O      |       |
    | P      | p     | P      |       |
    | Q      | a     | A      |       |
    | R      | r     | R      |       |
    | S      | s     | S      |       |
    | T      | t     | T      |       |
    | U      | u     | U      |       |
    | V      | v     | V      |       |
    | W      | z     | Z      |       |
    | X      | x     | X      |       |
    | Y      | y     | Y      |       |
    | Z      | w     | W      |       |
    | 1      | &     | 1      |       |
    | 2      | é     | 2      | ~     |
    | 3      | "     | 3      | #     |
    | 4      | '     | 4      | {     |
    | 5      | (     | 5      | [     |
    | 6      | -     | 6      | Pipe  |
    | 7      | è     | 7      | `     |
    | 8      | _     | 8      | \     |
    | 9      | ç     | 9      |       |
    | 0      | à     | 0      | @     |
    | Enter  | Enter |        |       |
    | Tab    | Tab   |        |       |
    | Space  | Space |        |       |
    | -      | )     | °      | ]     |
    | =      | =     | +      | }     |
    | [      | ^     |        |       |
    | ]      | $     |        |       |
    | ;      | m     | M      |       |
    | '      | ù     | %      |       |
    | \      | *     | U+00B5 |       |
    | NonUs\ | <     | >      |       |
    | ,      | ;     | .      |       |
    | .      | :     | /      |       |
    | /      | !     | §      |       |
"#
);

#[cfg(test)]
mod tests {
    use crate::keyboard::{Key, KeyEvent, Modifiers};
    use crate::layout::Layout;

    #[test]
    fn number_row_accents_and_alt_gr() {
        let fr = Layout::French;
        assert_eq!(fr.lookup('é'), Some(KeyEvent::new(Key::Digit2, Modifiers::NONE)));
        assert_eq!(fr.lookup('è'), Some(KeyEvent::new(Key::Digit7, Modifiers::NONE)));
        assert_eq!(fr.lookup('ç'), Some(KeyEvent::new(Key::Digit9, Modifiers::NONE)));
        assert_eq!(fr.lookup('@'), Some(KeyEvent::new(Key::Digit0, Modifiers::RIGHT_ALT)));
        assert_eq!(fr.lookup('|'), Some(KeyEvent::new(Key::Digit6, Modifiers::RIGHT_ALT)));
        assert_eq!(fr.lookup('\\'), Some(KeyEvent::new(Key::Digit8, Modifiers::RIGHT_ALT)));
    }

    #[test]
    fn micro_sign_and_punctuation() {
        let fr = Layout::French;
        assert_eq!(fr.lookup('µ'), Some(KeyEvent::new(Key::Backslash, Modifiers::LEFT_SHIFT)));
        assert_eq!(fr.lookup('μ'), None);
        assert_eq!(fr.lookup('.'), Some(KeyEvent::new(Key::Comma, Modifiers::LEFT_SHIFT)));
        assert_eq!(fr.lookup('!'), Some(KeyEvent::new(Key::Slash, Modifiers::NONE)));
    }
}
