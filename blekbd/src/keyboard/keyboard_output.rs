use core::fmt::Debug;

use super::KeyEvent;

/// Something that can type a key on the host, e.g. a USB HID keyboard.
///
/// `send_key` presses and releases the key before returning, including any
/// settle delay, so consecutive calls reach the host in order.
pub trait KeyboardOutput {
    type Error: 'static + Debug;
    fn send_key(&mut self, event: KeyEvent) -> Result<(), Self::Error>;
}

impl<T: KeyboardOutput + ?Sized> KeyboardOutput for &mut T {
    type Error = T::Error;

    fn send_key(&mut self, event: KeyEvent) -> Result<(), Self::Error> {
        (**self).send_key(event)
    }
}
