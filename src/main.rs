//! Glimmer Firmware — Main Entry Point
//!
//! Hexagonal architecture with event-driven execution: a periodic timer
//! feeds tick events into a lock-free queue, and this loop drains them
//! into the PWM core.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  SharedWordDutyStore      IndicatorLed                   │
//! │  (DutyStorePort)          (OutputPort)                   │
//! │                                                          │
//! │  ───────────── Port Trait Boundary ─────────────         │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │            PwmService (pure logic)             │      │
//! │  │  8-bit sawtooth counter · inclusive comparator │      │
//! │  └────────────────────────────────────────────────┘      │
//! │                                                          │
//! │  hw_timer (tick source) · events (SPSC queue)            │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
mod error;
mod events;
mod pins;

pub mod app;
mod drivers;
mod duty;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use app::ports::DutyStorePort;
use app::service::{duty_percent, PwmService};
use config::SystemConfig;
use drivers::led::IndicatorLed;
use duty::SharedWordDutyStore;
use events::{push_event, Event};

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Glimmer v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = SystemConfig::default();
    if let Err(e) = config.validate() {
        // No valid tick interval means no PWM at all — halt until the
        // watchdog resets us.
        log::error!("config invalid: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Peripherals + tick source ──────────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    if let Err(e) = drivers::hw_timer::start_tick_timer(&config) {
        log::error!("tick timer failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 4. Adapters + PWM core ────────────────────────────────
    let duty_store = SharedWordDutyStore::new();
    let mut led = IndicatorLed::new();
    let mut pwm = PwmService::new();

    let ticks_per_heartbeat = config.ticks_per_heartbeat();
    let mut heartbeat_ticks: u64 = 0;

    info!("System ready. Entering run loop.");

    // ── 5. Run loop (never returns) ───────────────────────────
    loop {
        // Simulate the timer via sleep on non-espidf targets. On real
        // hardware the esp_timer callback pushes tick events instead.
        #[cfg(not(target_os = "espidf"))]
        {
            std::thread::sleep(std::time::Duration::from_micros(config.tick_interval_us));
            drivers::hw_timer::sim_fire_tick();
        }

        events::drain_events(|event| match event {
            Event::PwmTick => {
                pwm.on_tick(&duty_store, &mut led);

                heartbeat_ticks += 1;
                if heartbeat_ticks >= ticks_per_heartbeat {
                    heartbeat_ticks = 0;
                    push_event(Event::TelemetryTick);
                }
            }

            Event::TelemetryTick => {
                // Fresh snapshot for the log line; the comparator did its
                // own read on the tick that mattered.
                let raw = duty_store.raw_duty();
                info!(
                    "telemetry: duty_word={} (~{:.1}% on), ticks={}",
                    raw,
                    duty_percent(raw),
                    pwm.tick_count()
                );
            }
        });
    }
}
