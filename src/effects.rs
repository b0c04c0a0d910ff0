//! Blocking strip effects run by the command interpreter.
//!
//! Each effect owns the strip and the delay for its whole duration; nothing
//! else runs until it returns.

use crate::COLOR_OFF;
use crate::strip::LedStrip;
use crate::types::Rgb8;
use core::num::NonZeroU32;
use embedded_hal::delay::DelayNs;

/// Sets every pixel to `color` without showing.
fn set_all<L: LedStrip>(strip: &mut L, color: Rgb8) {
    for index in 0..strip.pixel_count() {
        strip.set_pixel(index, color);
    }
}

/// Sets every pixel to `color` and shows once.
pub fn fill<L: LedStrip>(strip: &mut L, color: Rgb8) {
    set_all(strip, color);
    strip.show();
}

/// Lights pixels one by one in index order, showing after each.
///
/// Waits `duration_ms / pixel_count` (truncated) after every pixel. A strip
/// with no pixels does nothing.
pub fn wipe<L: LedStrip, D: DelayNs>(strip: &mut L, delay: &mut D, color: Rgb8, duration_ms: u32) {
    let count = strip.pixel_count();
    if count == 0 {
        return;
    }
    let wait = wipe_interval(duration_ms, count);

    for index in 0..count {
        strip.set_pixel(index, color);
        strip.show();
        delay.delay_ms(wait);
    }
}

/// Alternates the strip between off and `color`, `repeats` times, then turns it off.
///
/// Each half-cycle lasts `duration_ms / (2 * repeats)` (truncated), so a
/// short duration with many repeats degenerates into back-to-back updates.
pub fn blink<L: LedStrip, D: DelayNs>(
    strip: &mut L,
    delay: &mut D,
    color: Rgb8,
    duration_ms: u32,
    repeats: NonZeroU32,
) {
    let wait = blink_interval(duration_ms, repeats);

    for _ in 0..repeats.get() {
        fill(strip, COLOR_OFF);
        delay.delay_ms(wait);
        fill(strip, color);
        delay.delay_ms(wait);
    }
    fill(strip, COLOR_OFF);
}

/// Per-pixel wait for a wipe across `count` pixels.
#[inline]
pub fn wipe_interval(duration_ms: u32, count: usize) -> u32 {
    match u32::try_from(count) {
        Ok(0) => 0,
        Ok(count) => duration_ms / count,
        Err(_) => 0,
    }
}

/// Half-cycle wait for a blink.
#[inline]
pub fn blink_interval(duration_ms: u32, repeats: NonZeroU32) -> u32 {
    (u64::from(duration_ms) / (2 * u64::from(repeats.get()))) as u32
}
