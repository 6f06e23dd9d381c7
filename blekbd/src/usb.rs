//! USB HID keyboard output.

mod device_info;
mod hid_report;
mod usb_keyboard;

pub use device_info::DeviceInfo;
pub use hid_report::HidKeyboardReport;
pub use usb_keyboard::UsbKeyboard;
