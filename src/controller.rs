//! The top-level controller that owns all firmware state.
//!
//! [`StripController`] ties the serial transport, the line assembler, the
//! command interpreter, the effects and the pulse animator into one
//! cooperative control loop. Every piece of mutable state lives here and is
//! touched by exactly one flow of control.

use crate::COLOR_OFF;
use crate::command::Command;
use crate::config::FirmwareConfig;
use crate::effects;
use crate::line::{LineAssembler, LineEvent};
use crate::pulse::PulseAnimator;
use crate::strip::LedStrip;
use crate::types::{CommandError, Status};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_io::{Read, ReadReady, Write};

/// Drives an LED strip from line-oriented serial commands.
///
/// # Type Parameters
/// * `L` - LED strip implementation
/// * `S` - Serial transport (polled, byte-oriented)
/// * `D` - Blocking delay provider
/// * `P` - Activity indicator output pin
pub struct StripController<L, S, D, P> {
    strip: L,
    serial: S,
    delay: D,
    indicator: P,
    config: FirmwareConfig,
    line: LineAssembler,
    pulse: PulseAnimator,
    pulsing: bool,
}

impl<L, S, D, P> StripController<L, S, D, P>
where
    L: LedStrip,
    S: Read + ReadReady + Write,
    D: DelayNs,
    P: OutputPin,
{
    /// Creates the controller and brings the hardware to its startup state.
    ///
    /// The strip is set to the default brightness with every pixel off and
    /// shown once; the activity indicator is set to idle.
    pub fn new(mut strip: L, serial: S, delay: D, mut indicator: P, config: FirmwareConfig) -> Self {
        strip.set_brightness(config.default_brightness);
        effects::fill(&mut strip, COLOR_OFF);
        let _ = indicator.set_state(config.idle_level());

        info!("strip controller ready, {=usize} pixels", strip.pixel_count());

        Self {
            strip,
            serial,
            delay,
            indicator,
            config,
            line: LineAssembler::new(),
            pulse: PulseAnimator::new(config.pulse),
            pulsing: false,
        }
    }

    /// Runs the control loop forever.
    ///
    /// Transport errors are logged and the loop carries on with the next
    /// iteration.
    pub fn run(&mut self) -> ! {
        loop {
            if self.poll().is_err() {
                warn!("serial transport error");
            }
        }
    }

    /// Performs one control loop iteration.
    ///
    /// Drains every byte currently available on the serial port, interpreting
    /// each completed line as it arrives, then advances the pulse animation
    /// by one step if pulsing is on.
    ///
    /// A transport error stops draining for this iteration. The pulse step
    /// still runs and the error is returned afterwards.
    pub fn poll(&mut self) -> Result<(), S::Error> {
        let drained = self.drain();

        if self.pulsing {
            self.pulse.step(&mut self.strip);
            self.delay.delay_ms(self.pulse.config().interval_ms());
        }

        drained
    }

    fn drain(&mut self) -> Result<(), S::Error> {
        while self.serial.read_ready()? {
            let mut byte = [0u8; 1];
            if self.serial.read(&mut byte)? == 0 {
                break;
            }
            self.handle_byte(byte[0])?;
        }
        Ok(())
    }

    /// Feeds one byte through the line assembler.
    ///
    /// A completed line is interpreted immediately; an overflowing line is
    /// reported with the overflow diagnostic instead of a status.
    pub fn handle_byte(&mut self, byte: u8) -> Result<(), S::Error> {
        match self.line.feed(byte) {
            LineEvent::None => Ok(()),
            LineEvent::LineReady => {
                let result = self.interpret_buffered();
                self.line.clear();
                result.map(|_| ())
            }
            LineEvent::Overflow => {
                warn!("input line overflow, discarding");
                self.serial.write_all(self.config.overflow_message.as_bytes())?;
                self.serial.write_all(b"\r\n")
            }
        }
    }

    fn interpret_buffered(&mut self) -> Result<Status, S::Error> {
        let _ = self.indicator.set_state(self.config.busy_level);
        let command = Command::parse(self.line.line());
        self.respond(command)
    }

    /// Parses and executes one line, then writes its status line.
    ///
    /// The activity indicator is busy from before parsing until the status
    /// is about to be written.
    pub fn interpret(&mut self, line: &[u8]) -> Result<Status, S::Error> {
        let _ = self.indicator.set_state(self.config.busy_level);
        self.respond(Command::parse(line))
    }

    fn respond(&mut self, command: Result<Command, CommandError>) -> Result<Status, S::Error> {
        let status = Status::from(&command);
        match command {
            Ok(command) => {
                debug!("executing {=str}", command.name());
                self.execute(command);
            }
            Err(err) => {
                warn!("rejected command: {}", err);
            }
        }

        let _ = self.indicator.set_state(self.config.idle_level());
        self.serial.write_all(status.line())?;
        Ok(status)
    }

    /// Executes an already validated command.
    ///
    /// Every command except `pulse` stops pulsing and restores the default
    /// brightness before touching the pixels.
    pub fn execute(&mut self, command: Command) {
        if command == Command::Pulse {
            self.pulse.start(self.strip.brightness());
            self.pulsing = true;
            info!("pulsing started");
            return;
        }

        self.pulsing = false;
        self.strip.set_brightness(self.config.default_brightness);

        match command {
            Command::Blink {
                color,
                duration_ms,
                repeats,
            } => effects::blink(&mut self.strip, &mut self.delay, color, duration_ms, repeats),
            Command::Wipe { color, duration_ms } => {
                effects::wipe(&mut self.strip, &mut self.delay, color, duration_ms)
            }
            Command::Color { color } => effects::fill(&mut self.strip, color),
            Command::Pulse => {}
        }
    }

    /// Returns true while the breathing animation owns the strip.
    #[inline]
    pub fn is_pulsing(&self) -> bool {
        self.pulsing
    }

    /// Returns the pulse animator state.
    #[inline]
    pub fn pulse(&self) -> &PulseAnimator {
        &self.pulse
    }

    /// Returns the line assembler state.
    #[inline]
    pub fn line(&self) -> &LineAssembler {
        &self.line
    }

    /// Returns the strip.
    #[inline]
    pub fn strip(&self) -> &L {
        &self.strip
    }

    /// Returns the serial transport.
    #[inline]
    pub fn serial(&self) -> &S {
        &self.serial
    }

    /// Returns the serial transport mutably, e.g. to queue input in tests.
    #[inline]
    pub fn serial_mut(&mut self) -> &mut S {
        &mut self.serial
    }

    /// Returns the delay provider.
    #[inline]
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Returns the activity indicator pin.
    #[inline]
    pub fn indicator(&self) -> &P {
        &self.indicator
    }

    /// Returns the firmware configuration.
    #[inline]
    pub fn config(&self) -> &FirmwareConfig {
        &self.config
    }

    /// Consumes the controller and returns the hardware it owned.
    pub fn release(self) -> (L, S, D, P) {
        (self.strip, self.serial, self.delay, self.indicator)
    }
}
