use crate::keyboard::Key;

use super::ParseError;

/// One command; a buffer from the transport holds exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    Backspace { count: u8 },       // 0x01 <count>
    Insert { text: &'a [u8] },     // 0x02 <utf-8 text>
    Enter,                         // 0x03
    Ctrl { letter: u8, key: Key }, // 0x04 <ascii letter>
}

impl<'a> Command<'a> {
    pub const BACKSPACE: u8 = 0x01;
    pub const INSERT: u8 = 0x02;
    pub const ENTER: u8 = 0x03;
    pub const CTRL: u8 = 0x04;

    /// Borrows the payload from `buffer`; nothing is copied.
    ///
    /// Bytes after a complete Backspace, Enter or Ctrl command are ignored.
    pub fn parse(buffer: &'a [u8]) -> Result<Self, ParseError> {
        let (&opcode, payload) = buffer.split_first().ok_or(ParseError::Empty)?;
        match opcode {
            Self::BACKSPACE => {
                let &count = payload
                    .first()
                    .ok_or(ParseError::MissingPayload { opcode })?;
                Ok(Command::Backspace { count })
            }
            Self::INSERT => {
                if payload.is_empty() {
                    Err(ParseError::MissingPayload { opcode })
                } else {
                    Ok(Command::Insert { text: payload })
                }
            }
            Self::ENTER => Ok(Command::Enter),
            Self::CTRL => {
                let &letter = payload
                    .first()
                    .ok_or(ParseError::MissingPayload { opcode })?;
                let key = Key::letter(letter).ok_or(ParseError::InvalidCtrlKey { key: letter })?;
                Ok(Command::Ctrl { letter, key })
            }
            _ => Err(ParseError::UnknownCommand { opcode }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(
            Command::parse(&[0x01, 3]),
            Ok(Command::Backspace { count: 3 })
        );
        assert_eq!(
            Command::parse(&[0x01, 0]),
            Ok(Command::Backspace { count: 0 })
        );
        assert_eq!(
            Command::parse(b"\x02hi"),
            Ok(Command::Insert { text: b"hi" })
        );
        assert_eq!(Command::parse(&[0x03]), Ok(Command::Enter));
        assert_eq!(Command::parse(&[0x03, 0xff]), Ok(Command::Enter));
        assert_eq!(
            Command::parse(&[0x04, b'J']),
            Ok(Command::Ctrl {
                letter: b'J',
                key: Key::J
            })
        );
        assert_eq!(
            Command::parse(&[0x04, b'c']),
            Ok(Command::Ctrl {
                letter: b'c',
                key: Key::C
            })
        );
    }

    #[test]
    fn insert_keeps_nul_and_invalid_bytes() {
        assert_eq!(
            Command::parse(b"\x02a\0\xffb"),
            Ok(Command::Insert { text: b"a\0\xffb" })
        );
    }

    #[test]
    fn malformed_commands() {
        assert_eq!(Command::parse(&[]), Err(ParseError::Empty));
        assert_eq!(
            Command::parse(&[0x01]),
            Err(ParseError::MissingPayload { opcode: 0x01 })
        );
        assert_eq!(
            Command::parse(&[0x02]),
            Err(ParseError::MissingPayload { opcode: 0x02 })
        );
        assert_eq!(
            Command::parse(&[0x04]),
            Err(ParseError::MissingPayload { opcode: 0x04 })
        );
        assert_eq!(
            Command::parse(&[0x04, b'1']),
            Err(ParseError::InvalidCtrlKey { key: b'1' })
        );
        assert_eq!(
            Command::parse(&[0x00]),
            Err(ParseError::UnknownCommand { opcode: 0x00 })
        );
        assert_eq!(
            Command::parse(&[0x05, 1, 2]),
            Err(ParseError::UnknownCommand { opcode: 0x05 })
        );
    }
}
