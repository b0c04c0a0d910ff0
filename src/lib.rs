#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`StripController`**: Owns all firmware state and runs the cooperative control loop
//! - **`LineAssembler`**: Collects serial bytes into bounded command lines
//! - **`Command`**: A parsed, validated command (`blink`, `wipe`, `color`, `pulse`)
//! - **`PulseAnimator`**: Triangle-wave breathing animation stepped once per loop iteration
//! - **`LedStrip`**: Trait to implement for your strip hardware (or use `SmartLedsStrip`)
//! - **`FirmwareConfig`**: Brightness, pulse and indicator settings
//! - **`Status`**: The `0`/`1` code written back after every command
//!
//! The serial port is any `embedded_io::{Read, ReadReady, Write}` implementation,
//! delays come from `embedded_hal::delay::DelayNs` and the activity indicator is an
//! `embedded_hal::digital::OutputPin`.

// Must come first so the logging macros are visible to the other modules
#[macro_use]
mod fmt;

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod command;
pub mod config;
pub mod controller;
pub mod effects;
pub mod line;
pub mod pulse;
pub mod strip;
pub mod types;

pub use command::Command;
pub use config::{
    ConfigError, DEFAULT_LED_COUNT, FirmwareConfig, LINE_CAPACITY, MAX_LINE_LEN, PulseConfig,
};
pub use controller::StripController;
pub use line::{LineAssembler, LineEvent};
pub use pulse::{PulseAnimator, PulseDirection};
pub use strip::{LedStrip, SmartLedsStrip};
pub use types::{CommandError, Rgb8, Status};

pub const COLOR_OFF: Rgb8 = Rgb8::new(0, 0, 0);
