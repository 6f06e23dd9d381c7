/// HID keyboard usage ids (usage page 0x07), named by their US legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Key {
    A = 0x04,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Digit0,
    Enter,
    Escape,
    Backspace,
    Tab,
    Space,
    Minus,
    Equal,
    LeftBracket,
    RightBracket,
    Backslash,
    NonUsHash,
    Semicolon,
    Apostrophe,
    Grave,
    Comma,
    Period,
    Slash,
    CapsLock,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    PrintScreen,
    ScrollLock,
    Pause,
    Insert,
    Home,
    PageUp,
    DeleteForward,
    End,
    PageDown,
    RightArrow,
    LeftArrow,
    DownArrow,
    UpArrow,
    NonUsBackslash = 0x64,
    Application,
    LeftControl = 0xe0,
    LeftShift,
    LeftAlt,
    LeftGui, // Win key(Windows), Command key(Mac), Meta key
    RightControl,
    RightShift,
    RightAlt, // AltGr
    RightGui,
}

impl Key {
    const LETTERS: [Key; 26] = [
        Key::A,
        Key::B,
        Key::C,
        Key::D,
        Key::E,
        Key::F,
        Key::G,
        Key::H,
        Key::I,
        Key::J,
        Key::K,
        Key::L,
        Key::M,
        Key::N,
        Key::O,
        Key::P,
        Key::Q,
        Key::R,
        Key::S,
        Key::T,
        Key::U,
        Key::V,
        Key::W,
        Key::X,
        Key::Y,
        Key::Z,
    ];

    /// The key carrying an ASCII letter on a US keyboard, either case.
    pub fn letter(ascii: u8) -> Option<Key> {
        if ascii.is_ascii_alphabetic() {
            Some(Self::LETTERS[(ascii.to_ascii_uppercase() - b'A') as usize])
        } else {
            None
        }
    }

    pub fn is_modifier_key(&self) -> bool {
        (*self as u8) >= 0xe0
    }

    pub fn key_code(&self) -> u8 {
        *self as u8
    }

    pub(crate) fn modifier_key_flag(&self) -> u8 {
        if self.is_modifier_key() {
            1 << ((*self as u8) - 0xe0)
        } else {
            0x00
        }
    }
}
