//! Unified error types for the Glimmer firmware.
//!
//! The control loop itself has no fallible operations — every raw duty
//! value is valid input. What *can* fail is one-shot startup: peripheral
//! configuration and the periodic timer registration. Those paths funnel
//! into this single enum so `main()` handles them uniformly.
//! All variants are `Copy` and carry `&'static str` context only.

use core::fmt;

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral or timer initialisation failed. Payload names the step.
    Init(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
