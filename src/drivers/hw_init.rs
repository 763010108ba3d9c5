//! One-shot hardware peripheral initialization.
//!
//! Configures the indicator GPIO using raw ESP-IDF sys calls. Called once
//! from `main()` before the event loop starts. The shared duty word is
//! deliberately *not* touched here — bring-up zeroes that region and the
//! host owns it from then on.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

use crate::error::Result;

#[cfg(target_os = "espidf")]
use crate::error::Error;
#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<()> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::BLINK_LED_GPIO,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    // SAFETY: called once from main() before the event loop; single-threaded.
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK {
        return Err(Error::Init("indicator GPIO config failed"));
    }
    // Start dark: the first tick decides the real state.
    unsafe { gpio_set_level(pins::BLINK_LED_GPIO, 0) };

    info!("hw_init: indicator GPIO {} configured", pins::BLINK_LED_GPIO);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<()> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // the pin was validated during init_peripherals().
    unsafe {
        gpio_set_level(pin, if high { 1 } else { 0 });
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}
