//! Human readable trace of received commands and sent keys.
//!
//! Lines are short and bounded; the debug dashboard polls a [`TraceLog`] and
//! shows them oldest first.

use core::fmt::{self, Write};

use heapless::{HistoryBuffer, String};

use crate::config::{TRACE_CAPACITY, TRACE_LINE_LEN};

pub type Line = String<TRACE_LINE_LEN>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Commands as they arrived over the wireless link.
    Received,
    /// Key events handed to the keyboard output.
    Sent,
}

pub trait Tracer {
    fn trace(&mut self, channel: Channel, line: &str);
}

/// Tracing disabled.
impl Tracer for () {
    fn trace(&mut self, _channel: Channel, _line: &str) {}
}

impl<T: Tracer + ?Sized> Tracer for &mut T {
    fn trace(&mut self, channel: Channel, line: &str) {
        (**self).trace(channel, line)
    }
}

/// Formats `args` into a [`Line`], dropping whatever does not fit.
pub fn format_line(args: fmt::Arguments) -> Line {
    let mut writer = Truncating(Line::new());
    // Truncating never reports an error, only Display impls could
    let _ = writer.write_fmt(args);
    writer.0
}

struct Truncating<const N: usize>(String<N>);

impl<const N: usize> Write for Truncating<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Ring of the most recent `N` trace lines.
pub struct TraceLog<const N: usize = TRACE_CAPACITY> {
    lines: HistoryBuffer<(Channel, Line), N>,
}

impl<const N: usize> TraceLog<N> {
    pub const fn new() -> Self {
        TraceLog {
            lines: HistoryBuffer::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 0
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &str)> + '_ {
        self.lines
            .oldest_ordered()
            .map(|(channel, line)| (*channel, line.as_str()))
    }
}

impl<const N: usize> Default for TraceLog<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Tracer for TraceLog<N> {
    fn trace(&mut self, channel: Channel, line: &str) {
        self.lines.write((channel, format_line(format_args!("{line}"))));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_lines_are_truncated_on_a_char_boundary() {
        let long = "é".repeat(TRACE_LINE_LEN);
        let line = format_line(format_args!("{long}"));
        assert_eq!(line.len(), TRACE_LINE_LEN);
        assert!(line.chars().all(|c| c == 'é'));

        let line = format_line(format_args!("x{long}"));
        assert_eq!(line.len(), TRACE_LINE_LEN - 1);
    }

    #[test]
    fn log_keeps_the_newest_lines_in_order() {
        let mut log = TraceLog::<3>::new();
        assert!(log.is_empty());
        for i in 0..5 {
            let line = format_line(format_args!("line {i}"));
            log.trace(Channel::Sent, &line);
        }
        log.trace(Channel::Received, "ENTER");
        assert_eq!(log.len(), 3);
        assert_eq!(
            log.iter().collect::<Vec<_>>(),
            [
                (Channel::Sent, "line 3"),
                (Channel::Sent, "line 4"),
                (Channel::Received, "ENTER"),
            ]
        );

        log.clear();
        assert_eq!(log.iter().count(), 0);
    }

    #[test]
    fn default_capacity() {
        let mut log: TraceLog = TraceLog::default();
        for _ in 0..TRACE_CAPACITY + 10 {
            log.trace(Channel::Received, "BS x1");
        }
        assert_eq!(log.len(), TRACE_CAPACITY);
    }
}
