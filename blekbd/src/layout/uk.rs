//! UK English (QWERTY, ISO).
use blekbd_macros::keymap;

use crate::keyboard::KeyEvent;

pub(super) static KEYMAP: &[(char, KeyEvent)] = &keymap!(
    r#"
    | Key    | Base  | Shift | AltGr |
    |--------|-------|-------|-------|
    | A      | a     | A     | á     |
    | B      | b     | B     |       |
    | C      | c     | C     |       |
    | D      | d     | D     |       |
    | E      | e     | E     | é     |
    | F      | f     | F     |       |
    | G      | g     | G     |       |
    | H      | h     | H     |       |
    | I      | i     | I     | í     |
    | J      | j     | J     |       |
    | K      | k     | K     |       |
    | L      | l     | L     |       |
    | M      | m     | M     |       |
    | N      | n     | N     |       |
    | O      | o     | O     | ó     |
    | P      | p     | P     |       |
    | Q      | q     | Q     |       |
    | R      | r     | R     |       |
    | S      | s     | S     |       |
    | T      | t     | T     |       |
    | U      | u     | U     | ú     |
    | V      | v     | V     |       |
    | W      | w     | W     |       |
    | X      | x     | X     |       |
    | Y      | y     | Y     |       |
    | Z      | z     | Z     |       |
    | 1      | 1     | !     |       |
    | 2      | 2     | "     |       |
    | 3      | 3     | £     |       |
    | 4      | 4     | $     | €     |
    | 5      | 5     | %     |       |
    | 6      | 6     | ^     |       |
    | 7      | 7     | &     |       |
    | 8      | 8     | *     |       |
    | 9      | 9     | (     |       |
    | 0      | 0     | )     |       |
    | Enter  | Enter |       |       |
    | Tab    | Tab   |       |       |
    | Space  | Space |       |       |
    | -      | -     | _     |       |
    | =      | =     | +     |       |
    | [      | [     | {     |       |
    | ]      | ]     | }     |       |
    | \      | #     | ~     |       |
    | NonUs# | \     | Pipe  |       |
    | ;      | ;     | :     |       |
    | '      | '     | @     |       |
    | `      | `     | ¬     |       |
    | ,      | ,     | <     |       |
    | .      | .     | >     |       |
    | /      | /     | ?     |       |
"#
);
