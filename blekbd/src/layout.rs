//! National keyboard layouts.
//!
//! Each layout maps a character to the physical key (and modifier tier) that
//! types it on that national keyboard. Keys are named after their US legend,
//! so `Key::Y` on a QWERTZ layout is the key labelled `Z`.

mod ch_de;
mod codepoints;
mod de;
mod es;
mod fr;
mod it;
mod uk;
mod us;

use crate::keyboard::KeyEvent;

pub use codepoints::Codepoints;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Layout {
    Us = 0,
    SwissGerman = 1,
    German = 2,
    French = 3,
    Uk = 4,
    Spanish = 5,
    Italian = 6,
}

/// What the configuration surface shows for a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayoutInfo {
    pub id: u8,
    pub code: &'static str,
    pub name: &'static str,
}

impl Layout {
    /// All layouts in id order.
    pub const ALL: [Layout; 7] = [
        Layout::Us,
        Layout::SwissGerman,
        Layout::German,
        Layout::French,
        Layout::Uk,
        Layout::Spanish,
        Layout::Italian,
    ];

    /// Persisted as-is, so values must never change.
    pub fn id(&self) -> u8 {
        *self as u8
    }

    pub fn from_id(id: u8) -> Option<Layout> {
        Self::ALL.get(id as usize).copied()
    }

    /// Exact, case-sensitive match on the short code.
    pub fn from_code(code: &str) -> Option<Layout> {
        Self::ALL.iter().find(|l| l.code() == code).copied()
    }

    pub fn code(&self) -> &'static str {
        match self {
            Layout::Us => "us",
            Layout::SwissGerman => "ch-de",
            Layout::German => "de",
            Layout::French => "fr",
            Layout::Uk => "uk",
            Layout::Spanish => "es",
            Layout::Italian => "it",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Layout::Us => "US English",
            Layout::SwissGerman => "Swiss German",
            Layout::German => "German",
            Layout::French => "French",
            Layout::Uk => "UK English",
            Layout::Spanish => "Spanish",
            Layout::Italian => "Italian",
        }
    }

    pub fn info(&self) -> LayoutInfo {
        LayoutInfo {
            id: self.id(),
            code: self.code(),
            name: self.name(),
        }
    }

    pub fn enumerate() -> impl Iterator<Item = LayoutInfo> {
        Self::ALL.into_iter().map(|l| l.info())
    }

    /// bCountryCode of the HID class descriptor (HID 1.11, section 6.2.1).
    pub fn hid_country_code(&self) -> u8 {
        match self {
            Layout::Us => 33,
            Layout::SwissGerman => 28,
            Layout::German => 9,
            Layout::French => 8,
            Layout::Uk => 32,
            Layout::Spanish => 25,
            Layout::Italian => 14,
        }
    }

    fn keymap(&self) -> &'static [(char, KeyEvent)] {
        match self {
            Layout::Us => us::KEYMAP,
            Layout::SwissGerman => ch_de::KEYMAP,
            Layout::German => de::KEYMAP,
            Layout::French => fr::KEYMAP,
            Layout::Uk => uk::KEYMAP,
            Layout::Spanish => es::KEYMAP,
            Layout::Italian => it::KEYMAP,
        }
    }

    /// The key typing `c`, or `None` when this keyboard has no key for it.
    pub fn lookup(&self, c: char) -> Option<KeyEvent> {
        let keymap = self.keymap();
        keymap
            .binary_search_by_key(&c, |&(symbol, _)| symbol)
            .ok()
            .map(|i| keymap[i].1)
    }

    /// Packed form of [`Layout::lookup`]: `key_code | modifiers << 8`, 0 when unmapped.
    pub fn lookup_packed(&self, codepoint: u32) -> u16 {
        char::from_u32(codepoint)
            .and_then(|c| self.lookup(c))
            .map(|event| event.packed())
            .unwrap_or(0)
    }

    /// Keys to type a UTF-8 buffer, skipping characters this layout cannot type.
    pub fn keystrokes<'a>(&self, text: &'a [u8]) -> Keystrokes<'a> {
        Keystrokes {
            layout: *self,
            codepoints: Codepoints::new(text),
        }
    }
}

/// Lazy `(char, KeyEvent)` sequence for a text, see [`Layout::keystrokes`].
#[derive(Debug, Clone)]
pub struct Keystrokes<'a> {
    layout: Layout,
    codepoints: Codepoints<'a>,
}

impl<'a> Iterator for Keystrokes<'a> {
    type Item = (char, KeyEvent);

    fn next(&mut self) -> Option<Self::Item> {
        let layout = self.layout;
        self.codepoints
            .by_ref()
            .find_map(|c| layout.lookup(c).map(|event| (c, event)))
    }
}
