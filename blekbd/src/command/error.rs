use core::fmt::Debug;

use snafu::Snafu;

/// Why an inbound buffer is not a command.
#[derive(Debug, Clone, Copy, Snafu, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    #[snafu(display("Empty command"))]
    Empty,
    #[snafu(display("Command 0x{opcode:02x} is missing its payload"))]
    MissingPayload { opcode: u8 },
    #[snafu(display("Ctrl is only supported with letters, got 0x{key:02x}"))]
    InvalidCtrlKey { key: u8 },
    #[snafu(display("Unknown command 0x{opcode:02x}"))]
    UnknownCommand { opcode: u8 },
}

#[derive(Debug, Snafu, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E: 'static + Debug> {
    #[snafu(display("Malformed command: {source}"))]
    Malformed { source: ParseError },
    /// The keyboard output failed; keys after the failing one were not sent.
    #[snafu(display("Failed to send key: {source:?}"))]
    Output {
        #[snafu(source(false))]
        #[cfg_attr(feature = "defmt", defmt(Debug2Format))]
        source: E,
    },
}
