//! Device configuration parameters.
//!
//! All tunable parameters for the Sigma pendant firmware, constructed once
//! at boot and never mutated afterwards. The safety-rail fields are
//! validated by [`crate::safety::check_invariants`] before the control
//! loop starts.

use serde::{Deserialize, Serialize};

use crate::pins;

/// Firmware version string, baked in at build time.
pub const FIRMWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core firmware configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirmwareConfig {
    // --- Identity ---
    /// Serial console baud rate.
    pub serial_baud_rate: u32,

    // --- Hardware mapping ---
    /// Status LED output pin.
    pub status_led_gpio: i32,
    /// Push-button input pin (active low).
    pub button_gpio: i32,

    // --- Button sampling ---
    /// Minimum interval between two accepted button samples (milliseconds).
    pub debounce_interval_ms: u32,

    // --- Audio safety rails ---
    // All SPL values are referenced to 20 µPa (dB SPL). Stay below the
    // recommended ceiling for prolonged use; the firmware warns at boot if
    // the configuration inverts the limits.
    /// Recommended SPL ceiling for extended listening sessions.
    pub recommended_max_spl_db: f32,
    /// Absolute SPL ceiling — never exceed.
    pub absolute_max_spl_db: f32,

    // --- Microphone bias limits ---
    /// Lower mic-bias bound (volts).
    pub mic_bias_min_volts: f32,
    /// Upper mic-bias bound (volts).
    pub mic_bias_max_volts: f32,

    // --- Battery protection thresholds ---
    /// Nominal cell voltage.
    pub battery_nominal_volts: f32,
    /// Low-battery warning threshold.
    pub battery_low_volts: f32,
    /// Critical threshold — stop use below this.
    pub battery_critical_volts: f32,
}

impl Default for FirmwareConfig {
    fn default() -> Self {
        Self {
            // Identity
            serial_baud_rate: pins::SERIAL_BAUD_RATE,

            // Hardware mapping
            status_led_gpio: pins::STATUS_LED_GPIO,
            button_gpio: pins::BUTTON_GPIO,

            // Button sampling
            debounce_interval_ms: 10,

            // Audio safety rails
            recommended_max_spl_db: 85.0,
            absolute_max_spl_db: 94.0,

            // Mic bias — keep between 1.8 V and 3.3 V to avoid damage
            mic_bias_min_volts: 1.8,
            mic_bias_max_volts: 3.3,

            // Battery (single Li-Po cell)
            battery_nominal_volts: 3.7,
            battery_low_volts: 3.3,
            battery_critical_volts: 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = FirmwareConfig::default();
        assert!(c.serial_baud_rate > 0);
        assert!(c.debounce_interval_ms > 0);
        assert!(c.recommended_max_spl_db <= c.absolute_max_spl_db);
        assert!(c.mic_bias_min_volts < c.mic_bias_max_volts);
        assert!(c.battery_critical_volts < c.battery_low_volts);
        assert!(c.battery_low_volts <= c.battery_nominal_volts);
    }

    #[test]
    fn default_config_passes_invariant_check() {
        let c = FirmwareConfig::default();
        assert!(crate::safety::check_invariants(&c).is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let c = FirmwareConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: FirmwareConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c.status_led_gpio, c2.status_led_gpio);
        assert_eq!(c.debounce_interval_ms, c2.debounce_interval_ms);
        assert!((c.recommended_max_spl_db - c2.recommended_max_spl_db).abs() < 0.001);
    }

    #[test]
    fn postcard_roundtrip() {
        let c = FirmwareConfig::default();
        let bytes = postcard::to_allocvec(&c).unwrap();
        let c2: FirmwareConfig = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(c.button_gpio, c2.button_gpio);
        assert!((c.battery_low_volts - c2.battery_low_volts).abs() < 0.001);
    }
}
