//! Shared test infrastructure for serial-led-strip integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::convert::Infallible;
use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin, PinState};
use serial_led_strip::{FirmwareConfig, LedStrip, Rgb8, StripController};

// ============================================================================
// Mock Strip
// ============================================================================

/// What the physical strip displayed at one `show`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub pixels: Vec<Rgb8>,
    pub brightness: u8,
}

impl Frame {
    pub fn is_uniform(&self, color: Rgb8) -> bool {
        self.pixels.iter().all(|&p| p == color)
    }
}

/// Mock strip that records every shown frame
pub struct MockStrip {
    pixels: Vec<Rgb8>,
    brightness: u8,
    frames: Vec<Frame>,
}

impl MockStrip {
    pub fn new(count: usize) -> Self {
        Self {
            pixels: vec![Rgb8::new(0, 0, 0); count],
            brightness: 255,
            frames: Vec::new(),
        }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Buffered (not necessarily shown) pixel colors
    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }
}

impl LedStrip for MockStrip {
    fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, index: usize, color: Rgb8) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn show(&mut self) {
        self.frames.push(Frame {
            pixels: self.pixels.clone(),
            brightness: self.brightness,
        });
    }
}

// ============================================================================
// Mock Serial
// ============================================================================

/// Mock serial port with a scripted receive queue and a captured transmit log
#[derive(Default)]
pub struct MockSerial {
    rx: VecDeque<u8>,
    tx: Vec<u8>,
}

impl MockSerial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes as if the host had sent them
    pub fn push_input(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }

    pub fn pending_input(&self) -> usize {
        self.rx.len()
    }

    /// Everything written back to the host
    pub fn output(&self) -> &[u8] {
        &self.tx
    }

    /// Output split into lines without terminators
    pub fn output_lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.tx)
            .split("\r\n")
            .filter(|l| !l.is_empty())
            .map(str::to_owned)
            .collect()
    }

    pub fn take_output(&mut self) -> Vec<String> {
        let lines = self.output_lines();
        self.tx.clear();
        lines
    }
}

impl embedded_io::ErrorType for MockSerial {
    type Error = Infallible;
}

impl embedded_io::Read for MockSerial {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let mut n = 0;
        while n < buf.len() {
            match self.rx.pop_front() {
                Some(byte) => {
                    buf[n] = byte;
                    n += 1;
                }
                None => break,
            }
        }
        Ok(n)
    }
}

impl embedded_io::ReadReady for MockSerial {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.rx.is_empty())
    }
}

impl embedded_io::Write for MockSerial {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.tx.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Serial port whose every operation fails, as a disconnected transport would
#[derive(Default)]
pub struct FailingSerial {
    attempts: usize,
}

impl FailingSerial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of transport calls made so far
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl embedded_io::ErrorType for FailingSerial {
    type Error = embedded_io::ErrorKind;
}

impl embedded_io::Read for FailingSerial {
    fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.attempts += 1;
        Err(embedded_io::ErrorKind::Other)
    }
}

impl embedded_io::ReadReady for FailingSerial {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        self.attempts += 1;
        Err(embedded_io::ErrorKind::Other)
    }
}

impl embedded_io::Write for FailingSerial {
    fn write(&mut self, _buf: &[u8]) -> Result<usize, Self::Error> {
        self.attempts += 1;
        Err(embedded_io::ErrorKind::Other)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Err(embedded_io::ErrorKind::Other)
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Mock delay that records requested millisecond waits instead of sleeping
#[derive(Default)]
pub struct MockDelay {
    waits_ms: Vec<u32>,
    total_ns: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waits_ms(&self) -> &[u32] {
        &self.waits_ms
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}

// ============================================================================
// Mock Pin
// ============================================================================

/// Mock output pin that records every level it is driven to
#[derive(Default)]
pub struct MockPin {
    history: Vec<PinState>,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[PinState] {
        &self.history
    }

    pub fn level(&self) -> Option<PinState> {
        self.history.last().copied()
    }
}

impl digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.history.push(PinState::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.history.push(PinState::High);
        Ok(())
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub const LED_COUNT: usize = 15;

pub type TestController = StripController<MockStrip, MockSerial, MockDelay, MockPin>;

/// Controller over fresh mocks with the default configuration
pub fn controller() -> TestController {
    controller_with(FirmwareConfig::DEFAULT)
}

pub fn controller_with(config: FirmwareConfig) -> TestController {
    StripController::new(
        MockStrip::new(LED_COUNT),
        MockSerial::new(),
        MockDelay::new(),
        MockPin::new(),
        config,
    )
}

/// Controller over a serial port that always fails
pub fn failing_controller() -> StripController<MockStrip, FailingSerial, MockDelay, MockPin> {
    StripController::new(
        MockStrip::new(LED_COUNT),
        FailingSerial::new(),
        MockDelay::new(),
        MockPin::new(),
        FirmwareConfig::DEFAULT,
    )
}

/// Queue `input` on the serial port and run one loop iteration
pub fn send(controller: &mut TestController, input: &[u8]) {
    controller.serial_mut().push_input(input);
    controller.poll().unwrap();
}

pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
pub const RED: Rgb8 = Rgb8::new(255, 0, 0);
