//! Sigma pendant firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod safety;

pub mod error;
pub mod pins;

// Adapters and drivers compile on every target; the hardware-touching
// paths inside are cfg-gated, host builds get simulation stubs.
pub mod adapters;
pub mod drivers;
