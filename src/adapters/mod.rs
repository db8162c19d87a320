//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to              |
//! |------------|--------------|--------------------------|
//! | `hardware` | InputPort    | Button GPIO              |
//! |            | ActuatorPort | Status LED GPIO          |
//! | `log_sink` | EventSink    | Serial log output        |
//! | `time`     | —            | ESP32 system timer       |

pub mod hardware;
pub mod log_sink;
pub mod time;
