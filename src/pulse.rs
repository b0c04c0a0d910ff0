//! Triangle-wave breathing animation.

use crate::config::PulseConfig;
use crate::strip::LedStrip;

/// Direction the brightness is currently moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseDirection {
    Rising,
    Falling,
}

/// Steps brightness up and down between the configured bounds.
///
/// On reaching a bound the brightness is clamped to it and the direction
/// reverses, so the displayed value never leaves `[min, max]`.
#[derive(Debug, Clone)]
pub struct PulseAnimator {
    config: PulseConfig,
    rising: bool,
    brightness: u8,
}

impl PulseAnimator {
    /// Creates an animator that starts falling from the top of its range.
    pub const fn new(config: PulseConfig) -> Self {
        Self {
            config,
            rising: false,
            brightness: config.max(),
        }
    }

    /// Synchronizes with the brightness currently on the strip.
    ///
    /// Values outside the range are clamped. The direction carries over from
    /// any previous pulse.
    pub fn start(&mut self, brightness: u8) {
        self.brightness = brightness.clamp(self.config.min(), self.config.max());
    }

    /// Computes and records the next brightness value.
    pub fn advance(&mut self) -> u8 {
        let min = self.config.min();
        let max = self.config.max();
        let step = self.config.step();
        let current = self.brightness.clamp(min, max);

        self.brightness = if self.rising {
            match current.checked_add(step) {
                Some(next) if next <= max => next,
                _ => {
                    self.rising = false;
                    max
                }
            }
        } else {
            match current.checked_sub(step) {
                Some(next) if next >= min => next,
                _ => {
                    self.rising = true;
                    min
                }
            }
        };

        self.brightness
    }

    /// Advances one step, applies it to the strip and shows it.
    pub fn step<L: LedStrip>(&mut self, strip: &mut L) {
        let brightness = self.advance();
        trace!("pulse brightness {=u8}", brightness);
        strip.set_brightness(brightness);
        strip.show();
    }

    /// Last brightness produced.
    #[inline]
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Current direction of travel.
    #[inline]
    pub fn direction(&self) -> PulseDirection {
        if self.rising {
            PulseDirection::Rising
        } else {
            PulseDirection::Falling
        }
    }

    /// Returns the animation parameters.
    #[inline]
    pub fn config(&self) -> &PulseConfig {
        &self.config
    }
}
