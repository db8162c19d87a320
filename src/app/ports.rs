//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (GPIO, serial console) implement these traits. The
//! [`AppService`](super::service::AppService) consumes them via generics,
//! so the domain core never touches hardware directly.
//!
//! Every I/O method returns a typed `Result` even though the core has no
//! recovery path for a failed read or write — the host decides what a
//! failure means (on this device: fatal), and recovery can be added later
//! without changing the interface.

use crate::error::{ActuatorError, SensorError};

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to sample the button.
pub trait InputPort {
    /// Current raw button reading: `true` while physically held.
    /// Adapters translate electrical polarity (the switch is active low).
    fn button_pressed(&mut self) -> Result<bool, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the status LED.
pub trait ActuatorPort {
    /// Drive the status LED high (`true`) or low (`false`).
    fn set_status_led(&mut self, on: bool) -> Result<(), ActuatorError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / console)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port. Adapters
/// decide where they go — the serial console in production, a recording
/// buffer in tests. Emission order is the report order.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
