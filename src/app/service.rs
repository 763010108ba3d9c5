//! PWM service — the hexagonal core.
//!
//! [`PwmService`] owns the tick counter and runs the comparator that
//! decides the LED state each tick. It exposes a clean, hardware-agnostic
//! API. All I/O flows through port traits injected at call sites, making
//! the entire service testable with mock adapters.
//!
//! ```text
//!  DutyStorePort ──▶ ┌────────────────────┐
//!                    │     PwmService      │
//!     OutputPort ◀── │  counter · compare  │
//!                    └────────────────────┘
//! ```

use super::ports::{DutyStorePort, LedState, OutputPort};

// ───────────────────────────────────────────────────────────────
// PwmService
// ───────────────────────────────────────────────────────────────

/// The PWM control loop core.
///
/// Owns the 8-bit tick counter — the only mutable state in the system.
/// The counter sweeps a 0→255 sawtooth, one step per tick, so a full PWM
/// period is 256 ticks and a duty word `d` in [0, 255] yields `d + 1`
/// ON ticks per period.
pub struct PwmService {
    /// Wraps modulo 256; single writer (tick handling is serialised
    /// through the event queue, so no locking is needed here).
    counter: u8,
    /// Total ticks since boot, for telemetry only.
    tick_count: u64,
}

impl PwmService {
    pub fn new() -> Self {
        Self {
            counter: 0,
            tick_count: 0,
        }
    }

    /// Current counter position within the PWM period.
    pub fn counter(&self) -> u8 {
        self.counter
    }

    /// Total ticks handled since boot.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Run one PWM step: advance the counter, take a fresh duty snapshot,
    /// and drive the output. Exactly one [`OutputPort`] call per tick.
    ///
    /// The duty word is re-read on every tick — never cached — so a host
    /// write takes effect on the very next tick.
    ///
    /// The comparison is *inclusive* (`counter <= duty`), matching the
    /// deployed behaviour: duty 0 is not fully off, it is ON for the one
    /// tick per period where the counter is 0 (≈0.39 %). A duty word at
    /// or above 256 always exceeds the 8-bit counter, so the output is
    /// permanently ON.
    pub fn on_tick(&mut self, duty: &impl DutyStorePort, out: &mut impl OutputPort) {
        self.counter = self.counter.wrapping_add(1);
        self.tick_count += 1;

        let snapshot = duty.raw_duty();
        let led_on = u32::from(self.counter) <= snapshot;

        out.set_output(if led_on { LedState::On } else { LedState::Off });
    }
}

impl Default for PwmService {
    fn default() -> Self {
        Self::new()
    }
}

/// Effective ON-fraction of a raw duty word, in percent. Telemetry only —
/// the comparator never goes through this.
pub fn duty_percent(raw: u32) -> f32 {
    let on_ticks = if raw >= 255 { 256 } else { raw + 1 };
    on_ticks as f32 * 100.0 / 256.0
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────
