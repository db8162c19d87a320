//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by rendering structured application events as
//! the line-oriented serial report (UART / USB-CDC in production, stdout
//! on host). Emission order is preserved, so the startup report reads:
//! blank separator, ready banner, usage hint, one warning per violation,
//! then the threshold callouts.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that renders every [`AppEvent`] onto the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Ready { version } => {
                info!("");
                info!("Sigma firmware ready (v{version})");
                info!("Press the button to toggle the status LED");
            }
            AppEvent::SafetyViolation(violation) => {
                warn!("[safety] {violation} — check configuration");
            }
            AppEvent::SafetySummary(s) => {
                info!(
                    "[safety] Maintain SPL under {:.1} dB for extended sessions (absolute max {:.1} dB).",
                    s.recommended_max_spl_db, s.absolute_max_spl_db,
                );
                info!(
                    "[safety] Keep mic bias between {:.2} V and {:.2} V.",
                    s.mic_bias_min_volts, s.mic_bias_max_volts,
                );
                info!(
                    "[safety] Stop use if battery drops below {:.2} V (critical at {:.2} V).",
                    s.battery_low_volts, s.battery_critical_volts,
                );
            }
            AppEvent::ButtonToggled { state } => {
                info!("Button state: {state}");
            }
        }
    }
}
