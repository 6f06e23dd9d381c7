use super::{Key, Modifiers};

/// One key press: a physical key plus the modifiers held while it is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub const BACKSPACE: KeyEvent = KeyEvent::new(Key::Backspace, Modifiers::NONE);
    pub const ENTER: KeyEvent = KeyEvent::new(Key::Enter, Modifiers::NONE);

    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        KeyEvent { key, modifiers }
    }

    pub fn ctrl(key: Key) -> Self {
        KeyEvent::new(key, Modifiers::LEFT_CTRL)
    }

    pub fn key_code(&self) -> u8 {
        self.key.key_code()
    }

    pub fn modifier_bits(&self) -> u8 {
        self.modifiers.bits()
    }

    /// `key_code | modifiers << 8`. Never zero, since no key has usage id 0.
    pub fn packed(&self) -> u16 {
        u16::from(self.key_code()) | (u16::from(self.modifier_bits()) << 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_layout() {
        let event = KeyEvent::new(Key::Digit2, Modifiers::RIGHT_ALT);
        assert_eq!(event.packed(), 0x401f);
        assert_eq!(KeyEvent::BACKSPACE.packed(), 0x002a);
        assert_eq!(KeyEvent::ctrl(Key::J).packed(), 0x010d);
    }
}
