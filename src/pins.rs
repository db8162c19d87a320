//! GPIO pin assignments for the Sigma pendant dev board.
//!
//! Single source of truth — configuration defaults and drivers reference
//! this module rather than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Status LED
// ---------------------------------------------------------------------------

/// On-board status LED (active HIGH on the ESP32 devkit).
pub const STATUS_LED_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// User button (active-low, uses the BOOT button's internal pull-up)
// ---------------------------------------------------------------------------

/// Momentary push-button for toggling the status LED.
pub const BUTTON_GPIO: i32 = 0;

// ---------------------------------------------------------------------------
// UART console
// ---------------------------------------------------------------------------

/// Serial console baud rate.
pub const SERIAL_BAUD_RATE: u32 = 115_200;
