//! Core types shared across the firmware.

use palette::Srgb;

/// An 8-bit per channel RGB color.
pub type Rgb8 = Srgb<u8>;

/// Status reported back over serial after every interpreted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// Command was recognized, validated and executed.
    Success,

    /// Bad argument, out-of-range value or unrecognized command name.
    Failure,
}

impl Status {
    /// Numeric status code written on the wire.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Failure => 1,
        }
    }

    /// The status line as sent to the host, terminator included.
    #[inline]
    pub const fn line(self) -> &'static [u8] {
        match self {
            Status::Success => b"0\r\n",
            Status::Failure => b"1\r\n",
        }
    }
}

impl<T> From<&Result<T, CommandError>> for Status {
    fn from(result: &Result<T, CommandError>) -> Self {
        match result {
            Ok(_) => Status::Success,
            Err(_) => Status::Failure,
        }
    }
}

/// Reasons a line is rejected by the command interpreter.
///
/// All of these are reported to the host as the same status code; the
/// distinction only exists for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Line contained no tokens.
    Empty,

    /// First token is not a known command name.
    UnknownCommand,

    /// Fewer arguments than the command requires.
    MissingArgument {
        /// Zero-based argument position.
        position: u8,
    },

    /// Argument did not parse as a number, or is out of range.
    InvalidArgument {
        /// Zero-based argument position.
        position: u8,
    },

    /// `blink` with a repeat count of zero.
    ZeroRepeats,
}

impl core::fmt::Display for CommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command line"),
            CommandError::UnknownCommand => write!(f, "unrecognized command"),
            CommandError::MissingArgument { position } => {
                write!(f, "missing argument at position {}", position)
            }
            CommandError::InvalidArgument { position } => {
                write!(f, "invalid or out-of-range argument at position {}", position)
            }
            CommandError::ZeroRepeats => {
                write!(f, "blink requires a repeat count of at least one")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}
