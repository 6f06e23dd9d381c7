use core::ops::BitOr;

use super::Key;

/// Modifier byte of a HID keyboard report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0x00);
    pub const LEFT_CTRL: Modifiers = Modifiers(0x01);
    pub const LEFT_SHIFT: Modifiers = Modifiers(0x02);
    pub const LEFT_ALT: Modifiers = Modifiers(0x04);
    pub const LEFT_GUI: Modifiers = Modifiers(0x08);
    pub const RIGHT_CTRL: Modifiers = Modifiers(0x10);
    pub const RIGHT_SHIFT: Modifiers = Modifiers(0x20);
    /// AltGr on ISO layouts
    pub const RIGHT_ALT: Modifiers = Modifiers(0x40);
    pub const RIGHT_GUI: Modifiers = Modifiers(0x80);

    pub const fn from_bits(bits: u8) -> Self {
        Modifiers(bits)
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn contains(&self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

impl From<Key> for Modifiers {
    fn from(key: Key) -> Self {
        Modifiers(key.modifier_key_flag())
    }
}
