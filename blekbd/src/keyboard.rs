mod key;
mod key_event;
mod keyboard_output;
mod modifiers;

pub use key::Key;
pub use key_event::KeyEvent;
pub use keyboard_output::KeyboardOutput;
pub use modifiers::Modifiers;
