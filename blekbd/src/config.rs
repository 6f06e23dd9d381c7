//! Compile-time configuration.

use crate::layout::Layout;
use crate::usb::DeviceInfo;

/// Layout used when nothing valid is persisted.
pub const DEFAULT_LAYOUT: Layout = Layout::SwissGerman;

/// Storage namespace shared by all persisted settings.
pub const STORAGE_NAMESPACE: &str = "blekbd";
/// Key holding the layout id (one `u8`).
pub const STORAGE_KEY_LAYOUT: &str = "kbd_layout";

/// Number of trace lines kept for the debug dashboard.
pub const TRACE_CAPACITY: usize = 50;
/// Longest trace line in bytes, longer lines are truncated.
pub const TRACE_LINE_LEN: usize = 128;
/// Bytes of inserted text shown in a trace line.
pub const TRACE_TEXT_PREVIEW: usize = 32;

pub const DEVICE_INFO: DeviceInfo = DeviceInfo {
    manufacturer: "blekbd",
    vendor_id: 0x1209,
    product_id: 0x0001,
    product_name: "USB Keyboard",
    serial_number: "000001",
};

/// Time a key is held down and the pause after releasing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TypingDelay {
    pub press_ms: u32,
    pub release_ms: u32,
}

impl TypingDelay {
    pub const fn new(press_ms: u32) -> Self {
        TypingDelay {
            press_ms,
            release_ms: press_ms / 2,
        }
    }
}

impl Default for TypingDelay {
    fn default() -> Self {
        TypingDelay::new(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_delay_is_half_the_press_delay() {
        assert_eq!(
            TypingDelay::default(),
            TypingDelay {
                press_ms: 50,
                release_ms: 25
            }
        );
        assert_eq!(TypingDelay::new(15).release_ms, 7);
    }
}
