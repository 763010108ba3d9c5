//! System configuration parameters
//!
//! All tunable parameters for the Glimmer indicator firmware. The duty
//! cycle itself is *not* configuration — it lives in the shared word and
//! is owned by the host-side writer.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Timing ---
    /// PWM tick interval (microseconds). One full PWM period is 256 ticks,
    /// so 40 µs gives a ~98 Hz refresh — comfortably above flicker fusion.
    pub tick_interval_us: u64,
    /// Telemetry heartbeat interval (seconds).
    pub telemetry_interval_secs: u32,

    // --- Tick delivery ---
    /// Dispatch the tick callback from ISR context instead of the esp_timer
    /// task. ISR dispatch has lower jitter but a tighter execution budget.
    pub tick_from_isr: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            tick_interval_us: 40,       // ~98 Hz PWM refresh
            telemetry_interval_secs: 60, // 1/min
            tick_from_isr: false,
        }
    }
}

impl SystemConfig {
    /// Reject configurations the timer hardware cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_us == 0 {
            return Err(Error::Config("tick_interval_us must be non-zero"));
        }
        if self.telemetry_interval_secs == 0 {
            return Err(Error::Config("telemetry_interval_secs must be non-zero"));
        }
        Ok(())
    }

    /// Ticks per telemetry heartbeat at the configured tick rate.
    pub fn ticks_per_heartbeat(&self) -> u64 {
        u64::from(self.telemetry_interval_secs) * 1_000_000 / self.tick_interval_us
    }
}
