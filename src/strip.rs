//! LED strip hardware abstraction.
//!
//! Defines the [`LedStrip`] capability the firmware drives and a buffered
//! implementation, [`SmartLedsStrip`], on top of any `smart-leds` driver.

use crate::types::Rgb8;
use smart_leds::{RGB8, SmartLedsWrite, brightness};

/// Trait for abstracting an addressable LED strip.
///
/// Pixel and brightness changes are buffered and only become visible on the
/// physical strip after [`show`](LedStrip::show).
pub trait LedStrip {
    /// Number of pixels on the strip. Fixed for the lifetime of the strip.
    fn pixel_count(&self) -> usize;

    /// Sets the color of one pixel. Out-of-range indices are ignored.
    fn set_pixel(&mut self, index: usize, color: Rgb8);

    /// Sets the global brightness scalar applied on output.
    fn set_brightness(&mut self, brightness: u8);

    /// Returns the current global brightness.
    fn brightness(&self) -> u8;

    /// Flushes the buffered pixels and brightness to the hardware.
    ///
    /// Handle any driver errors internally - this method cannot fail.
    fn show(&mut self);
}

/// A frame-buffered strip backed by a [`SmartLedsWrite`] driver.
///
/// # Type Parameters
/// * `W` - The underlying wire driver (WS2812 over SPI/PIO/RMT, APA102, ...)
/// * `N` - Number of pixels on the strip
pub struct SmartLedsStrip<W, const N: usize> {
    writer: W,
    pixels: [RGB8; N],
    brightness: u8,
}

impl<W, const N: usize> SmartLedsStrip<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    /// Creates a strip with all pixels off at full brightness.
    ///
    /// Nothing is written to the hardware until the first `show`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pixels: [RGB8::default(); N],
            brightness: u8::MAX,
        }
    }

    /// Returns the buffered pixel colors.
    pub fn pixels(&self) -> &[RGB8; N] {
        &self.pixels
    }

    /// Returns the wrapped driver.
    pub fn release(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> LedStrip for SmartLedsStrip<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    #[inline]
    fn pixel_count(&self) -> usize {
        N
    }

    fn set_pixel(&mut self, index: usize, color: Rgb8) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = RGB8::new(color.red, color.green, color.blue);
        }
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn show(&mut self) {
        let frame = brightness(self.pixels.iter().copied(), self.brightness);
        if self.writer.write(frame).is_err() {
            warn!("strip driver rejected frame");
        }
    }
}
