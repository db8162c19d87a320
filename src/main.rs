//! Sigma Pendant Firmware — Main Entry Point
//!
//! Hexagonal architecture with a single cooperative control loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 Adapters (outer ring)                │
//! │                                                      │
//! │  HardwareAdapter      LogEventSink    Esp32Time      │
//! │  (Input+Actuator)     (EventSink)     (monotonic ms) │
//! │                                                      │
//! │  ───────────── Port Trait Boundary ──────────────    │
//! │                                                      │
//! │  ┌────────────────────────────────────────────────┐  │
//! │  │            AppService (pure logic)             │  │
//! │  │  button debounce · safety invariant check      │  │
//! │  └────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
mod config;
mod error;
mod pins;
mod safety;

mod adapters;
mod app;
mod drivers;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use adapters::time::Esp32TimeAdapter;
use app::service::AppService;
use config::FirmwareConfig;

fn main() -> Result<()> {
    // ── 1. Bootstrap ──────────────────────────────────────────
    #[cfg(target_os = "espidf")]
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    // ── 2. Peripheral init ────────────────────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Configuration ──────────────────────────────────────
    let config = FirmwareConfig::default();
    info!("Serial console at {} baud", config.serial_baud_rate);

    // ── 4. Adapters + service ─────────────────────────────────
    let time = Esp32TimeAdapter::new();
    let mut hw = HardwareAdapter::new(&config);
    let mut sink = LogEventSink::new();
    let mut app = AppService::new(config);

    // Startup report: ready banner, invariant warnings, threshold callouts.
    app.start(&mut hw, &mut sink)?;

    info!("System ready. Entering control loop.");

    // ── 5. Control loop ───────────────────────────────────────
    loop {
        // Yield between ticks so FreeRTOS housekeeping (and the idle-task
        // watchdog) keep running; on host targets this simply paces the sim.
        #[cfg(target_os = "espidf")]
        esp_idf_hal::delay::FreeRtos::delay_ms(1);
        #[cfg(not(target_os = "espidf"))]
        std::thread::sleep(std::time::Duration::from_millis(1));

        let now_ms = time.uptime_ms();

        // A failed LED write has no recovery path on this board; propagate
        // and let the runtime fault the process.
        app.tick(&mut hw, &mut sink, now_ms)?;
    }
}
