use usbd_hid::descriptor::generator_prelude::*;
use usbd_hid_macros::gen_hid_descriptor;

use crate::keyboard::KeyEvent;

/// Boot keyboard report: modifier byte, reserved byte, six key slots.
#[gen_hid_descriptor(
    (collection = APPLICATION, usage_page = GENERIC_DESKTOP, usage = KEYBOARD) = {
        (usage_page = KEYBOARD, usage_min = 0xe0, usage_max = 0xe7) = {
            #[packed_bits 8] #[item_settings data,variable,absolute] modifier=input;
        };
        (usage_min = 0x00, usage_max = 0xff) = {
            #[item_settings constant,variable,absolute] reserved=input;
        };
        (usage_page = KEYBOARD, usage_min = 0x00, usage_max = 0xdd) = {
            #[item_settings data,array,absolute] key_codes=input;
        };
    }
)]
#[repr(C)]
#[derive(PartialEq, Eq)]
pub struct HidKeyboardReport {
    pub modifier: u8,
    pub reserved: u8,
    pub key_codes: [u8; 6],
}

impl HidKeyboardReport {
    /// All keys up.
    pub const fn release() -> Self {
        HidKeyboardReport {
            modifier: 0,
            reserved: 0,
            key_codes: [0; 6],
        }
    }

    /// `event`'s key down with its modifiers held.
    pub fn press(event: KeyEvent) -> Self {
        let mut report = Self::release();
        report.modifier = event.modifier_bits() | event.key.modifier_key_flag();
        if !event.key.is_modifier_key() {
            report.key_codes[0] = event.key_code();
        }
        report
    }
}
