//! Decoder for the binary command protocol spoken over the wireless link.

mod controller;
mod error;
mod message;

pub use controller::Controller;
pub use error::{Error, ParseError};
pub use message::Command;
