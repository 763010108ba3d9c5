//! Periodic tick timer using ESP-IDF's esp_timer API.
//!
//! Registers one periodic timer at the configured PWM tick interval. The
//! callback does exactly one thing — push a tick event into the lock-free
//! SPSC queue — so it stays within the ISR execution budget either way
//! the dispatch preference points. On simulation targets, the run loop
//! approximates the timer with thread::sleep.

use crate::config::SystemConfig;
use crate::error::Result;
use crate::events::{push_event, Event};

#[cfg(target_os = "espidf")]
use crate::error::Error;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

// SAFETY: TICK_TIMER is written once in `start_tick_timer()` from the
// single main-task context before any callback fires, and never read
// afterwards — the timer runs for the life of the device (there is no
// stop path; shutdown is device reset).
#[cfg(target_os = "espidf")]
static mut TICK_TIMER: esp_timer_handle_t = core::ptr::null_mut();

#[cfg(target_os = "espidf")]
unsafe extern "C" fn pwm_tick_cb(_arg: *mut core::ffi::c_void) {
    push_event(Event::PwmTick);
}

/// Create and start the periodic PWM tick timer.
#[cfg(target_os = "espidf")]
pub fn start_tick_timer(config: &SystemConfig) -> Result<()> {
    let dispatch = if config.tick_from_isr {
        esp_timer_dispatch_t_ESP_TIMER_ISR
    } else {
        esp_timer_dispatch_t_ESP_TIMER_TASK
    };

    // SAFETY: TICK_TIMER is written here once at boot from the single
    // main-task context. The callback only calls push_event(), which is
    // ISR-safe (lock-free atomics).
    unsafe {
        let args = esp_timer_create_args_t {
            callback: Some(pwm_tick_cb),
            arg: core::ptr::null_mut(),
            dispatch_method: dispatch,
            name: b"pwm_tick\0".as_ptr() as *const _,
            skip_unhandled_events: false,
        };
        let ret = esp_timer_create(&args, &raw mut TICK_TIMER);
        if ret != ESP_OK {
            return Err(Error::Init("tick timer create failed"));
        }
        let ret = esp_timer_start_periodic(TICK_TIMER, config.tick_interval_us);
        if ret != ESP_OK {
            return Err(Error::Init("tick timer start failed"));
        }
    }

    info!(
        "hw_timer: PWM tick @ {} µs ({} dispatch)",
        config.tick_interval_us,
        if config.tick_from_isr { "ISR" } else { "task" }
    );
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn start_tick_timer(config: &SystemConfig) -> Result<()> {
    log::info!(
        "hw_timer(sim): no hardware timer; run loop sleeps {} µs per tick",
        config.tick_interval_us
    );
    Ok(())
}

/// Push one tick by hand — the sim stand-in for the timer firing.
#[cfg(not(target_os = "espidf"))]
pub fn sim_fire_tick() -> bool {
    push_event(Event::PwmTick)
}
