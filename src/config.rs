//! Firmware constants and their validated configuration types.

use embedded_hal::digital::PinState;

/// Maximum input line length, counting the reserved terminator slot.
pub const MAX_LINE_LEN: usize = 127;

/// Number of data bytes a single command line may hold.
pub const LINE_CAPACITY: usize = MAX_LINE_LEN - 1;

/// Pixel count of the reference strip hardware.
pub const DEFAULT_LED_COUNT: usize = 15;

/// Configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pulse minimum is above the pulse maximum.
    InvertedRange,

    /// Pulse step of zero would never move.
    ZeroStep,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvertedRange => {
                write!(f, "pulse minimum brightness must not exceed the maximum")
            }
            ConfigError::ZeroStep => write!(f, "pulse brightness step must be non-zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Breathing animation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseConfig {
    min: u8,
    max: u8,
    step: u8,
    interval_ms: u32,
}

impl PulseConfig {
    /// 20..=120 in steps of 5, one step every 100 ms.
    pub const DEFAULT: Self = Self {
        min: 20,
        max: 120,
        step: 5,
        interval_ms: 100,
    };

    /// Creates a validated pulse configuration.
    ///
    /// # Errors
    /// * `InvertedRange` - `min` is greater than `max`
    /// * `ZeroStep` - `step` is zero
    pub const fn new(min: u8, max: u8, step: u8, interval_ms: u32) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvertedRange);
        }
        if step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        Ok(Self {
            min,
            max,
            step,
            interval_ms,
        })
    }

    /// Lowest brightness the animation displays.
    #[inline]
    pub const fn min(&self) -> u8 {
        self.min
    }

    /// Highest brightness the animation displays.
    #[inline]
    pub const fn max(&self) -> u8 {
        self.max
    }

    /// Brightness change per animation step.
    #[inline]
    pub const fn step(&self) -> u8 {
        self.step
    }

    /// Delay after each animation step.
    #[inline]
    pub const fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Top-level firmware configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareConfig {
    /// Brightness applied by every explicit (non-pulse) command and at startup.
    pub default_brightness: u8,

    /// Breathing animation parameters.
    pub pulse: PulseConfig,

    /// Activity indicator level while a command is being processed.
    pub busy_level: PinState,

    /// Diagnostic sent instead of a status when a line overflows.
    pub overflow_message: &'static str,
}

impl FirmwareConfig {
    pub const DEFAULT: Self = Self {
        default_brightness: 128,
        pulse: PulseConfig::DEFAULT,
        busy_level: PinState::Low,
        overflow_message: "Input too long",
    };

    pub const fn with_default_brightness(mut self, brightness: u8) -> Self {
        self.default_brightness = brightness;
        self
    }

    pub const fn with_pulse(mut self, pulse: PulseConfig) -> Self {
        self.pulse = pulse;
        self
    }

    pub const fn with_busy_level(mut self, level: PinState) -> Self {
        self.busy_level = level;
        self
    }

    pub const fn with_overflow_message(mut self, message: &'static str) -> Self {
        self.overflow_message = message;
        self
    }

    /// Indicator level between commands.
    #[inline]
    pub fn idle_level(&self) -> PinState {
        !self.busy_level
    }
}

impl Default for FirmwareConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
