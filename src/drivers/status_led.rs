//! Status LED driver.
//!
//! Single digital output (active HIGH). The level is written only on
//! state changes, never re-asserted every tick.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the GPIO via hw_init.
//! On host/test: writes to the in-memory simulation level.

use crate::drivers::hw_init;
use crate::error::ActuatorError;

pub struct StatusLed {
    gpio: i32,
    lit: bool,
}

impl StatusLed {
    pub fn new(gpio: i32) -> Self {
        Self { gpio, lit: false }
    }

    pub fn set(&mut self, on: bool) -> Result<(), ActuatorError> {
        hw_init::gpio_write(self.gpio, on)?;
        self.lit = on;
        Ok(())
    }

    pub fn off(&mut self) -> Result<(), ActuatorError> {
        self.set(false)
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pins;

    #[test]
    fn tracks_commanded_level() {
        let mut led = StatusLed::new(pins::STATUS_LED_GPIO);
        assert!(!led.is_lit());
        led.set(true).unwrap();
        assert!(led.is_lit());
        led.off().unwrap();
        assert!(!led.is_lit());
    }
}
