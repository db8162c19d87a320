//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them — the serial console adapter renders the
//! human-readable startup report and runtime lines.

use crate::config::FirmwareConfig;
use crate::drivers::button::ButtonState;
use crate::safety::Violation;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The firmware finished initialisation (carries the version string).
    Ready { version: &'static str },

    /// A configuration invariant does not hold. One per violation,
    /// emitted once at startup; the system continues degraded.
    SafetyViolation(Violation),

    /// Informational restatement of the configured safety thresholds.
    SafetySummary(SafetySummary),

    /// The debounced button state flipped.
    ButtonToggled { state: ButtonState },
}

/// The operator-facing threshold callouts, captured at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafetySummary {
    pub recommended_max_spl_db: f32,
    pub absolute_max_spl_db: f32,
    pub mic_bias_min_volts: f32,
    pub mic_bias_max_volts: f32,
    pub battery_low_volts: f32,
    pub battery_critical_volts: f32,
}

impl From<&FirmwareConfig> for SafetySummary {
    fn from(config: &FirmwareConfig) -> Self {
        Self {
            recommended_max_spl_db: config.recommended_max_spl_db,
            absolute_max_spl_db: config.absolute_max_spl_db,
            mic_bias_min_volts: config.mic_bias_min_volts,
            mic_bias_max_volts: config.mic_bias_max_volts,
            battery_low_volts: config.battery_low_volts,
            battery_critical_volts: config.battery_critical_volts,
        }
    }
}
