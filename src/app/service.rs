//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the configuration and the debounced button state
//! machine. All I/O flows through port traits injected at call sites,
//! making the whole service testable with mock adapters.
//!
//! ```text
//!   InputPort ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                 │        AppService         │
//! ActuatorPort ◀──│  debounce · safety check  │
//!                 └──────────────────────────┘
//! ```

use log::{info, warn};

use crate::config::{FirmwareConfig, FIRMWARE_VERSION};
use crate::drivers::button::{ButtonDebouncer, ButtonState};
use crate::error::Result;
use crate::safety;

use super::events::{AppEvent, SafetySummary};
use super::ports::{ActuatorPort, EventSink, InputPort};

/// The application service orchestrates all domain logic.
pub struct AppService {
    config: FirmwareConfig,
    button: ButtonDebouncer,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// Does **not** touch hardware — call [`start`](Self::start) next,
    /// exactly once, before the first tick.
    pub fn new(config: FirmwareConfig) -> Self {
        let button = ButtonDebouncer::new(config.debounce_interval_ms);
        Self { config, button }
    }

    pub fn config(&self) -> &FirmwareConfig {
        &self.config
    }

    /// Last debounced button state.
    pub fn button_state(&self) -> ButtonState {
        self.button.state()
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive the output to its default level and emit the startup report:
    /// `Ready`, one `SafetyViolation` per broken invariant, then the
    /// threshold `SafetySummary`.
    ///
    /// Violations are non-fatal — the service still starts so the device
    /// stays minimally operable; only an output write failure is an error.
    pub fn start<HW, S>(&mut self, hw: &mut HW, sink: &mut S) -> Result<()>
    where
        HW: ActuatorPort,
        S: EventSink,
    {
        hw.set_status_led(false)?;

        sink.emit(&AppEvent::Ready {
            version: FIRMWARE_VERSION,
        });

        let violations = safety::check_invariants(&self.config);
        if !violations.is_empty() {
            warn!(
                "safety: {} configuration invariant(s) violated, continuing degraded",
                violations.len()
            );
        }
        for violation in &violations {
            sink.emit(&AppEvent::SafetyViolation(*violation));
        }

        sink.emit(&AppEvent::SafetySummary(SafetySummary::from(&self.config)));

        info!("AppService started ({} violations)", violations.len());
        Ok(())
    }

    // ── Control loop ──────────────────────────────────────────

    /// One control tick. Consults the input port only when the debounce
    /// guard passes; on an edge, writes the LED level and emits
    /// [`AppEvent::ButtonToggled`]. Returns the new state on an edge.
    ///
    /// Safe to call at arbitrary intervals; never blocks, no allocation,
    /// bounded constant time. Port I/O errors propagate to the host.
    pub fn tick<HW, S>(&mut self, hw: &mut HW, sink: &mut S, now_ms: u32) -> Result<Option<ButtonState>>
    where
        HW: InputPort + ActuatorPort,
        S: EventSink,
    {
        if !self.button.try_sample(now_ms) {
            return Ok(None);
        }

        let pressed = hw.button_pressed()?;
        let Some(state) = self.button.update(pressed) else {
            return Ok(None);
        };

        hw.set_status_led(state.is_pressed())?;
        sink.emit(&AppEvent::ButtonToggled { state });
        Ok(Some(state))
    }
}
