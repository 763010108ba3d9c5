//! Indicator LED driver.
//!
//! One fixed digital output channel, ON or OFF — the PWM waveform is made
//! of these calls over time, not by a hardware PWM peripheral.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the indicator GPIO via hw_init.
//! On host/test: tracks state in-memory only.

use crate::app::ports::{LedState, OutputPort};
use crate::drivers::hw_init;
use crate::pins;

pub struct IndicatorLed {
    lit: bool,
}

impl IndicatorLed {
    pub fn new() -> Self {
        Self { lit: false }
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }
}

impl Default for IndicatorLed {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPort for IndicatorLed {
    fn set_output(&mut self, state: LedState) {
        hw_init::gpio_write(pins::BLINK_LED_GPIO, state.is_on());
        self.lit = state.is_on();
    }
}

// ── embedded-hal bridge ───────────────────────────────────────

/// Adapter that drives any `embedded_hal` output pin through the
/// [`OutputPort`] boundary. Used by bench rigs where the indicator hangs
/// off an expander or a different board entirely.
pub struct PinOutput<P> {
    pin: P,
}

impl<P: embedded_hal::digital::OutputPin> PinOutput<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: embedded_hal::digital::OutputPin> OutputPort for PinOutput<P> {
    fn set_output(&mut self, state: LedState) {
        let res = if state.is_on() {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        if res.is_err() {
            log::warn!("indicator pin write failed");
        }
    }
}
