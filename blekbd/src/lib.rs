//! Core of a BLE to USB HID keyboard bridge.
//!
//! Text and editing commands arrive as small binary buffers over a wireless
//! link; [`command::Controller`] decodes them and types the matching keys for
//! the active national [`layout::Layout`] through a [`keyboard::KeyboardOutput`].
#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible in the other modules
mod fmt;

pub mod command;
pub mod config;
pub mod keyboard;
pub mod layout;
pub mod selection;
pub mod trace;
pub mod usb;
