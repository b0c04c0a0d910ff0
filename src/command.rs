//! Parsing of command lines into validated [`Command`] values.

use crate::types::{CommandError, Rgb8};
use core::num::NonZeroU32;
use core::str::FromStr;

/// A fully validated command, ready for execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Alternate the strip between off and `color`, `repeats` times.
    Blink {
        color: Rgb8,
        duration_ms: u32,
        repeats: NonZeroU32,
    },
    /// Light pixels one at a time in index order.
    Wipe { color: Rgb8, duration_ms: u32 },
    /// Set every pixel at once.
    Color { color: Rgb8 },
    /// Hand control to the breathing animation.
    Pulse,
}

impl Command {
    /// Parses one line of space-separated tokens.
    ///
    /// Arguments are validated left to right and parsing stops at the first
    /// bad one. Tokens after the last expected argument are ignored.
    ///
    /// # Errors
    /// * `Empty` - No tokens on the line
    /// * `UnknownCommand` - First token is not a command name
    /// * `MissingArgument` - Line ended before all arguments were read
    /// * `InvalidArgument` - Argument is not a number or is out of range
    /// * `ZeroRepeats` - `blink` repeat count is zero
    pub fn parse(line: &[u8]) -> Result<Self, CommandError> {
        let mut tokens = line.split(|&b| b == b' ').filter(|t| !t.is_empty());
        let name = tokens.next().ok_or(CommandError::Empty)?;
        let mut args = Arguments::new(tokens);

        match name {
            b"blink" => {
                let color = args.color()?;
                let duration_ms = args.number()?;
                let repeats = NonZeroU32::new(args.number()?).ok_or(CommandError::ZeroRepeats)?;
                Ok(Command::Blink {
                    color,
                    duration_ms,
                    repeats,
                })
            }
            b"wipe" => {
                let color = args.color()?;
                let duration_ms = args.number()?;
                Ok(Command::Wipe { color, duration_ms })
            }
            b"color" => Ok(Command::Color {
                color: args.color()?,
            }),
            b"pulse" => Ok(Command::Pulse),
            _ => Err(CommandError::UnknownCommand),
        }
    }

    /// Command name as it appears on the wire.
    pub const fn name(&self) -> &'static str {
        match self {
            Command::Blink { .. } => "blink",
            Command::Wipe { .. } => "wipe",
            Command::Color { .. } => "color",
            Command::Pulse => "pulse",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Command {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Command::Blink {
                color,
                duration_ms,
                repeats,
            } => defmt::write!(
                f,
                "blink({=u8}, {=u8}, {=u8}, {=u32}ms, x{=u32})",
                color.red,
                color.green,
                color.blue,
                *duration_ms,
                repeats.get()
            ),
            Command::Wipe { color, duration_ms } => defmt::write!(
                f,
                "wipe({=u8}, {=u8}, {=u8}, {=u32}ms)",
                color.red,
                color.green,
                color.blue,
                *duration_ms
            ),
            Command::Color { color } => defmt::write!(
                f,
                "color({=u8}, {=u8}, {=u8})",
                color.red,
                color.green,
                color.blue
            ),
            Command::Pulse => defmt::write!(f, "pulse"),
        }
    }
}

/// Positional argument reader over the tokens following the command name.
struct Arguments<I> {
    tokens: I,
    position: u8,
}

impl<'a, I: Iterator<Item = &'a [u8]>> Arguments<I> {
    fn new(tokens: I) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Reads and parses the next token.
    ///
    /// Unparseable and out-of-range tokens are both reported as invalid.
    fn parse_next<T: FromStr>(&mut self) -> Result<T, CommandError> {
        let position = self.position;
        self.position = self.position.saturating_add(1);

        let token = self
            .tokens
            .next()
            .ok_or(CommandError::MissingArgument { position })?;

        core::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or(CommandError::InvalidArgument { position })
    }

    /// A color channel in 0..=255.
    fn channel(&mut self) -> Result<u8, CommandError> {
        self.parse_next::<u8>()
    }

    /// A non-negative duration or count.
    fn number(&mut self) -> Result<u32, CommandError> {
        self.parse_next::<u32>()
    }

    fn color(&mut self) -> Result<Rgb8, CommandError> {
        let red = self.channel()?;
        let green = self.channel()?;
        let blue = self.channel()?;
        Ok(Rgb8::new(red, green, blue))
    }
}
