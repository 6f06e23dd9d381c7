use core::fmt::{self, Display, Write};

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::{
    config::TRACE_TEXT_PREVIEW,
    keyboard::{KeyEvent, KeyboardOutput},
    layout::Codepoints,
    selection::{LayoutSelection, Storage},
    trace::{format_line, Channel, Tracer},
};

use super::{Command, Error, ParseError};

/// Turns commands into key presses on `output`, using the active layout.
///
/// `process` takes `&mut self`, so one controller handles one command at a
/// time. The transport must hand over whole commands; partial buffers are
/// not reassembled.
pub struct Controller<'a, M: RawMutex, S: Storage, O: KeyboardOutput, T: Tracer = ()> {
    selection: &'a LayoutSelection<M, S>,
    output: O,
    tracer: T,
}

impl<'a, M: RawMutex, S: Storage, O: KeyboardOutput, T: Tracer> Controller<'a, M, S, O, T> {
    pub fn new(selection: &'a LayoutSelection<M, S>, output: O, tracer: T) -> Self {
        Controller {
            selection,
            output,
            tracer,
        }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    /// Decodes one command from `buffer` and types it.
    ///
    /// A malformed buffer sends nothing. Otherwise keys are sent in order
    /// until the first failure, which aborts the rest of the command.
    pub fn process(&mut self, buffer: &[u8]) -> Result<(), Error<O::Error>> {
        let command = match Command::parse(buffer) {
            Ok(command) => command,
            Err(source) => {
                warn!("{}", source);
                if let ParseError::UnknownCommand { opcode } = source {
                    self.trace(Channel::Received, format_args!("UNKNOWN 0x{opcode:02X}"));
                }
                return Err(Error::Malformed { source });
            }
        };

        match command {
            Command::Backspace { count } => {
                info!("Backspace x{}", count);
                self.trace(Channel::Received, format_args!("BS x{count}"));
                for _ in 0..count {
                    let event = KeyEvent::BACKSPACE;
                    self.send(event, format_args!("BS K:0x{:02X}", event.key_code()))?;
                }
                Ok(())
            }
            Command::Insert { text } => {
                self.trace(
                    Channel::Received,
                    format_args!("INSERT: {}", Preview(text)),
                );
                self.insert(text)
            }
            Command::Enter => {
                info!("Enter");
                self.trace(Channel::Received, format_args!("ENTER"));
                let event = KeyEvent::ENTER;
                self.send(event, format_args!("ENTER K:0x{:02X}", event.key_code()))
            }
            Command::Ctrl { letter, key } => {
                // Traced as received, the key is the same for either case
                let letter = char::from(letter);
                info!("Ctrl+{}", letter);
                self.trace(Channel::Received, format_args!("CTRL+{letter}"));
                let event = KeyEvent::ctrl(key);
                self.send(
                    event,
                    format_args!(
                        "CTRL+{letter} K:0x{:02X} M:0x{:02X}",
                        event.key_code(),
                        event.modifier_bits()
                    ),
                )
            }
        }
    }

    fn insert(&mut self, text: &[u8]) -> Result<(), Error<O::Error>> {
        let layout = self.selection.get();
        debug!("Typing {} bytes as {}", text.len(), layout.name());
        let mut typed = 0_usize;
        for (c, event) in layout.keystrokes(text) {
            let (code, bits) = (event.key_code(), event.modifier_bits());
            if (' '..='~').contains(&c) {
                self.send(event, format_args!("'{c}' K:0x{code:02X} M:0x{bits:02X}"))?;
            } else {
                let cp = u32::from(c);
                self.send(event, format_args!("U+{cp:04X} K:0x{code:02X} M:0x{bits:02X}"))?;
            }
            typed += 1;
        }
        info!("Typed {} characters", typed);
        Ok(())
    }

    fn send(&mut self, event: KeyEvent, line: fmt::Arguments) -> Result<(), Error<O::Error>> {
        self.trace(Channel::Sent, line);
        self.output.send_key(event).map_err(|source| {
            error!("Failed to send key: {}", debug2format!(&source));
            Error::Output { source }
        })
    }

    fn trace(&mut self, channel: Channel, args: fmt::Arguments) {
        self.tracer.trace(channel, &format_line(args));
    }
}

/// The start of an insert payload, for trace lines.
struct Preview<'a>(&'a [u8]);

impl Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = &self.0[..self.0.len().min(TRACE_TEXT_PREVIEW)];
        Codepoints::new(bytes).try_for_each(|c| f.write_char(c))
    }
}

#[cfg(test)]
mod tests {
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    use super::*;
    use crate::{
        keyboard::{Key, Modifiers},
        layout::Layout,
        selection::MemoryStorage,
        trace::TraceLog,
    };

    type Selection = LayoutSelection<NoopRawMutex, MemoryStorage<4>>;

    /// Records keys, failing the call with index `fail_at`.
    #[derive(Default)]
    struct MockOutput {
        sent: Vec<KeyEvent>,
        calls: usize,
        fail_at: Option<usize>,
    }

    impl KeyboardOutput for MockOutput {
        type Error = &'static str;

        fn send_key(&mut self, event: KeyEvent) -> Result<(), Self::Error> {
            let call = self.calls;
            self.calls += 1;
            if self.fail_at == Some(call) {
                return Err("usb not ready");
            }
            self.sent.push(event);
            Ok(())
        }
    }

    fn selection(layout: Layout) -> Selection {
        let selection = Selection::init(MemoryStorage::new());
        selection.set(layout).unwrap();
        selection
    }

    fn plain(key: Key) -> KeyEvent {
        KeyEvent::new(key, Modifiers::NONE)
    }

    fn lines(log: &TraceLog) -> Vec<(Channel, String)> {
        log.iter()
            .map(|(channel, line)| (channel, line.to_string()))
            .collect()
    }

    #[test]
    fn backspace_count() {
        let selection = selection(Layout::Us);
        let mut controller = Controller::new(&selection, MockOutput::default(), ());
        controller.process(&[0x01, 3]).unwrap();
        assert_eq!(controller.output().sent, [KeyEvent::BACKSPACE; 3]);

        controller.output_mut().sent.clear();
        controller.process(&[0x01, 0]).unwrap();
        assert!(controller.output().sent.is_empty());
    }

    #[test]
    fn backspace_stops_at_first_failure() {
        let selection = selection(Layout::Us);
        let output = MockOutput {
            fail_at: Some(1),
            ..Default::default()
        };
        let mut controller = Controller::new(&selection, output, ());
        assert_eq!(
            controller.process(&[0x01, 3]),
            Err(Error::Output {
                source: "usb not ready"
            })
        );
        assert_eq!(controller.output().sent, [KeyEvent::BACKSPACE]);
        assert_eq!(controller.output().calls, 2);
    }

    #[test]
    fn insert_types_with_the_active_layout() {
        let selection = selection(Layout::Us);
        let mut controller = Controller::new(&selection, MockOutput::default(), ());
        controller.process(b"\x02hi").unwrap();
        assert_eq!(controller.output().sent, [plain(Key::H), plain(Key::I)]);

        selection.set(Layout::German).unwrap();
        controller.output_mut().sent.clear();
        controller.process(b"\x02yz").unwrap();
        assert_eq!(controller.output().sent, [plain(Key::Z), plain(Key::Y)]);
    }

    #[test]
    fn insert_skips_unmapped_and_invalid() {
        let selection = selection(Layout::Us);
        let mut controller = Controller::new(&selection, MockOutput::default(), ());
        controller.process("\x02a€\u{0}b".as_bytes()).unwrap();
        controller.process(b"\x02\xffc\xe2\x82").unwrap();
        assert_eq!(
            controller.output().sent,
            [plain(Key::A), plain(Key::B), plain(Key::C)]
        );
    }

    #[test]
    fn insert_stops_at_first_failure() {
        let selection = selection(Layout::Us);
        let output = MockOutput {
            fail_at: Some(2),
            ..Default::default()
        };
        let mut controller = Controller::new(&selection, output, ());
        assert!(matches!(
            controller.process(b"\x02abcd"),
            Err(Error::Output { .. })
        ));
        assert_eq!(controller.output().sent, [plain(Key::A), plain(Key::B)]);
    }

    #[test]
    fn enter_and_ctrl() {
        let selection = selection(Layout::French);
        let mut controller = Controller::new(&selection, MockOutput::default(), ());
        controller.process(&[0x03]).unwrap();
        controller.process(&[0x04, b'J']).unwrap();
        controller.process(&[0x04, b'a']).unwrap();
        // Ctrl uses the US letter key whatever the layout
        assert_eq!(
            controller.output().sent,
            [
                KeyEvent::ENTER,
                KeyEvent::new(Key::J, Modifiers::LEFT_CTRL),
                KeyEvent::new(Key::A, Modifiers::LEFT_CTRL),
            ]
        );
    }

    #[test]
    fn malformed_commands_send_nothing() {
        let selection = selection(Layout::Us);
        let mut controller = Controller::new(&selection, MockOutput::default(), ());
        let cases: [(&[u8], ParseError); 6] = [
            (&[], ParseError::Empty),
            (&[0x01], ParseError::MissingPayload { opcode: 0x01 }),
            (&[0x02], ParseError::MissingPayload { opcode: 0x02 }),
            (&[0x04], ParseError::MissingPayload { opcode: 0x04 }),
            (&[0x04, b'1'], ParseError::InvalidCtrlKey { key: b'1' }),
            (&[0x7f, 1], ParseError::UnknownCommand { opcode: 0x7f }),
        ];
        for (buffer, source) in cases {
            assert_eq!(
                controller.process(buffer),
                Err(Error::Malformed { source })
            );
        }
        assert_eq!(controller.output().calls, 0);
    }

    #[test]
    fn trace_lines() {
        let selection = selection(Layout::SwissGerman);
        let mut log: TraceLog = TraceLog::new();
        let mut controller = Controller::new(&selection, MockOutput::default(), &mut log);
        controller.process(&[0x01, 1]).unwrap();
        controller.process("\x02Aü".as_bytes()).unwrap();
        controller.process(&[0x03]).unwrap();
        controller.process(&[0x04, b'c']).unwrap();
        let _ = controller.process(&[0x09]);
        drop(controller);

        let expected = [
            (Channel::Received, "BS x1"),
            (Channel::Sent, "BS K:0x2A"),
            (Channel::Received, "INSERT: Aü"),
            (Channel::Sent, "'A' K:0x04 M:0x02"),
            (Channel::Sent, "U+00FC K:0x2F M:0x00"),
            (Channel::Received, "ENTER"),
            (Channel::Sent, "ENTER K:0x28"),
            (Channel::Received, "CTRL+c"),
            (Channel::Sent, "CTRL+c K:0x06 M:0x01"),
            (Channel::Received, "UNKNOWN 0x09"),
        ]
        .map(|(channel, line)| (channel, line.to_string()));
        assert_eq!(lines(&log), expected);
    }

    #[test]
    fn insert_preview_is_bounded() {
        let selection = selection(Layout::Us);
        let mut log: TraceLog = TraceLog::new();
        let mut controller = Controller::new(&selection, MockOutput::default(), &mut log);
        let mut buffer = vec![0x02];
        buffer.extend_from_slice("x".repeat(TRACE_TEXT_PREVIEW + 8).as_bytes());
        controller.process(&buffer).unwrap();
        drop(controller);

        let (channel, line) = log.iter().next().unwrap();
        assert_eq!(channel, Channel::Received);
        assert_eq!(line, format!("INSERT: {}", "x".repeat(TRACE_TEXT_PREVIEW)));
        assert_eq!(log.len(), 1 + TRACE_TEXT_PREVIEW + 8);
    }
}
