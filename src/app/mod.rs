//! Application layer — ports, events, and the domain service.

pub mod events;
pub mod ports;
pub mod service;
