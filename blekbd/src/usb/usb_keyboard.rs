use embedded_hal::delay::DelayNs;
use usb_device::{
    class_prelude::{UsbBus, UsbBusAllocator},
    device::{StringDescriptors, UsbDevice, UsbDeviceBuilder, UsbDeviceState, UsbVidPid},
    prelude::BuilderError,
    LangID, UsbError,
};
use usbd_hid::{
    descriptor::SerializedDescriptor,
    hid_class::{HIDClass, HidClassSettings, HidCountryCode},
};

use crate::{
    config::TypingDelay,
    keyboard::{KeyEvent, KeyboardOutput},
    layout::Layout,
};

use super::{hid_report::HidKeyboardReport, DeviceInfo};

/// Types keys on the USB host, one press and release per [`KeyEvent`].
pub struct UsbKeyboard<'a, B: UsbBus, D: DelayNs> {
    usb_device: UsbDevice<'a, B>,
    keyboard_usb_hid: HIDClass<'a, B>,
    delay: D,
    typing: TypingDelay,
}

impl<'a, B: UsbBus, D: DelayNs> UsbKeyboard<'a, B, D> {
    /// `layout` only sets the country code in the HID descriptor, which the
    /// host reads once at enumeration.
    pub fn new(
        device_info: DeviceInfo,
        usb_bus_alloc: &'a UsbBusAllocator<B>,
        layout: Layout,
        delay: D,
        typing: TypingDelay,
    ) -> Result<UsbKeyboard<'a, B, D>, BuilderError> {
        let settings = HidClassSettings {
            locale: country_code(layout),
            ..Default::default()
        };
        let keyboard_usb_hid =
            HIDClass::new_with_settings(usb_bus_alloc, HidKeyboardReport::desc(), 10, settings);
        let descriptors = StringDescriptors::new(LangID::EN_US)
            .manufacturer(device_info.manufacturer)
            .serial_number(device_info.serial_number)
            .product(device_info.product_name);
        let usb_device = UsbDeviceBuilder::new(
            usb_bus_alloc,
            UsbVidPid(device_info.vendor_id, device_info.product_id),
        )
        .strings(&[descriptors])?
        .device_class(0)
        .build();

        Ok(UsbKeyboard {
            usb_device,
            keyboard_usb_hid,
            delay,
            typing,
        })
    }

    pub fn poll(&mut self) -> bool {
        self.usb_device.poll(&mut [&mut self.keyboard_usb_hid])
    }

    pub fn state(&self) -> UsbDeviceState {
        self.usb_device.state()
    }

    pub fn is_ready(&self) -> bool {
        self.state() == UsbDeviceState::Configured
    }

    fn push(&mut self, report: &HidKeyboardReport) -> Result<(), UsbError> {
        self.poll();
        self.keyboard_usb_hid.push_input(report).map(|_| ())
    }
}

impl<'a, B: UsbBus, D: DelayNs> KeyboardOutput for UsbKeyboard<'a, B, D> {
    type Error = UsbError;

    fn send_key(&mut self, event: KeyEvent) -> Result<(), UsbError> {
        if !self.is_ready() {
            warn!("USB not ready");
            return Err(UsbError::InvalidState);
        }
        self.push(&HidKeyboardReport::press(event))?;
        self.delay.delay_ms(self.typing.press_ms);
        self.push(&HidKeyboardReport::release())?;
        self.delay.delay_ms(self.typing.release_ms);
        Ok(())
    }
}

fn country_code(layout: Layout) -> HidCountryCode {
    match layout {
        Layout::Us => HidCountryCode::US,
        Layout::SwissGerman => HidCountryCode::SwissGerman,
        Layout::German => HidCountryCode::German,
        Layout::French => HidCountryCode::French,
        Layout::Uk => HidCountryCode::UK,
        Layout::Spanish => HidCountryCode::Spanish,
        Layout::Italian => HidCountryCode::Italian,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_codes_match_layouts() {
        for layout in Layout::ALL {
            assert_eq!(country_code(layout) as u8, layout.hid_country_code());
        }
    }
}
