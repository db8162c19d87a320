//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the status LED driver and the button pin, exposing them through
//! [`InputPort`] and [`ActuatorPort`]. This is the only module in the
//! system that touches actual hardware. On non-espidf targets, the
//! underlying drivers use cfg-gated simulation stubs.

use crate::app::ports::{ActuatorPort, InputPort};
use crate::config::FirmwareConfig;
use crate::drivers::hw_init;
use crate::drivers::status_led::StatusLed;
use crate::error::{ActuatorError, SensorError};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    led: StatusLed,
    button_gpio: i32,
}

impl HardwareAdapter {
    pub fn new(config: &FirmwareConfig) -> Self {
        Self {
            led: StatusLed::new(config.status_led_gpio),
            button_gpio: config.button_gpio,
        }
    }

    /// Current commanded LED level (for diagnostics).
    pub fn led_is_lit(&self) -> bool {
        self.led.is_lit()
    }
}

// ── InputPort implementation ──────────────────────────────────

impl InputPort for HardwareAdapter {
    fn button_pressed(&mut self) -> Result<bool, SensorError> {
        // Active-low switch: pressed pulls the pin to ground.
        Ok(!hw_init::gpio_read(self.button_gpio)?)
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_status_led(&mut self, on: bool) -> Result<(), ActuatorError> {
        self.led.set(on)
    }
}
