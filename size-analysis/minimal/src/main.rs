#![no_std]
#![no_main]

use core::convert::Infallible;

use cortex_m_rt::entry;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use panic_halt as _;
use serial_led_strip::{DEFAULT_LED_COUNT, FirmwareConfig, LedStrip, Rgb8, StripController};

// ============================================================================
// Minimal Strip Implementation
// ============================================================================

/// No-op strip for measuring library overhead
pub struct MinimalStrip {
    brightness: u8,
}

impl LedStrip for MinimalStrip {
    fn pixel_count(&self) -> usize {
        DEFAULT_LED_COUNT
    }

    fn set_pixel(&mut self, index: usize, color: Rgb8) {
        core::hint::black_box((index, color));
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn show(&mut self) {
        core::hint::black_box(self.brightness);
    }
}

// ============================================================================
// Minimal Serial Implementation
// ============================================================================

/// Serial port whose readiness and data the optimizer cannot predict
pub struct MinimalSerial;

impl embedded_io::ErrorType for MinimalSerial {
    type Error = Infallible;
}

impl embedded_io::Read for MinimalSerial {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        match buf.first_mut() {
            Some(byte) => {
                *byte = core::hint::black_box(b'\n');
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

impl embedded_io::ReadReady for MinimalSerial {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(core::hint::black_box(false))
    }
}

impl embedded_io::Write for MinimalSerial {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        core::hint::black_box(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

// ============================================================================
// Minimal Delay and Pin Implementations
// ============================================================================

pub struct MinimalDelay;

impl DelayNs for MinimalDelay {
    fn delay_ns(&mut self, ns: u32) {
        core::hint::black_box(ns);
    }
}

pub struct MinimalPin;

impl ErrorType for MinimalPin {
    type Error = Infallible;
}

impl OutputPin for MinimalPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[entry]
fn main() -> ! {
    let mut controller = StripController::new(
        MinimalStrip { brightness: 0 },
        MinimalSerial,
        MinimalDelay,
        MinimalPin,
        FirmwareConfig::DEFAULT,
    );

    // Every command path must stay reachable so it is included in the binary
    for line in [
        &b"blink 255 0 0 1000 2"[..],
        b"wipe 0 0 255 1500",
        b"color 1 2 3",
        b"pulse",
    ] {
        let _ = controller.interpret(core::hint::black_box(line));
    }

    controller.run()
}
