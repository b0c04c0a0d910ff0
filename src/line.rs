//! Incremental, non-blocking assembly of serial bytes into command lines.

use crate::config::LINE_CAPACITY;
use heapless::Vec;

/// Outcome of feeding one byte to a [`LineAssembler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineEvent {
    /// Nothing to do yet.
    None,

    /// A terminator arrived and [`LineAssembler::line`] holds a non-empty line.
    ///
    /// The caller interprets the line and then calls [`LineAssembler::clear`].
    LineReady,

    /// The line exceeded the buffer capacity and was discarded.
    ///
    /// The rest of the line, up to its terminator, is dropped as well.
    Overflow,
}

/// Accumulates bytes into a bounded line buffer.
///
/// NUL bytes are ignored; CR and LF both terminate a line. A terminator on an
/// empty buffer produces no event so CR+LF pairs do not yield empty lines.
///
/// # Type Parameters
/// * `CAP` - Maximum number of data bytes in a line
#[derive(Debug)]
pub struct LineAssembler<const CAP: usize = LINE_CAPACITY> {
    buffer: Vec<u8, CAP>,
    discarding: bool,
}

impl<const CAP: usize> LineAssembler<CAP> {
    /// Creates an empty assembler.
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            discarding: false,
        }
    }

    /// Feeds one byte from the serial source.
    pub fn feed(&mut self, byte: u8) -> LineEvent {
        match byte {
            0 => LineEvent::None,
            b'\r' | b'\n' => {
                if self.discarding {
                    self.discarding = false;
                    LineEvent::None
                } else if self.buffer.is_empty() {
                    LineEvent::None
                } else {
                    LineEvent::LineReady
                }
            }
            _ if self.discarding => LineEvent::None,
            _ => {
                if self.buffer.push(byte).is_err() {
                    self.clear();
                    self.discarding = true;
                    LineEvent::Overflow
                } else {
                    LineEvent::None
                }
            }
        }
    }

    /// Bytes of the line assembled so far.
    #[inline]
    pub fn line(&self) -> &[u8] {
        &self.buffer
    }

    /// Number of buffered bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no bytes are buffered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns true while the tail of an overflowed line is being dropped.
    #[inline]
    pub fn is_discarding(&self) -> bool {
        self.discarding
    }

    /// Zeroes the buffered bytes and resets the length to zero.
    pub fn clear(&mut self) {
        self.buffer.iter_mut().for_each(|b| *b = 0);
        self.buffer.clear();
    }
}

impl<const CAP: usize> Default for LineAssembler<CAP> {
    fn default() -> Self {
        Self::new()
    }
}
