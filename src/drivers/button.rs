//! Sampling-debounced button state machine.
//!
//! ## Hardware
//!
//! Active-low momentary switch with a pull-up; the main loop polls the
//! GPIO level at control-tick rate. There is no vote or hysteresis
//! filter: the debouncer rate-limits how often the raw level is even
//! consulted, then trusts the single sample taken outside that window.
//!
//! ## Semantics
//!
//! - A tick within `debounce_interval_ms` of the last accepted sample is
//!   ignored entirely — the raw input is not consulted.
//! - An accepted sample that differs from the current state flips the
//!   state and reports the edge; an equal sample reports nothing.
//! - The very first tick is always accepted.

/// Debounced reading of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Released,
    Pressed,
}

impl ButtonState {
    pub fn is_pressed(self) -> bool {
        self == Self::Pressed
    }

    fn from_pressed(pressed: bool) -> Self {
        if pressed { Self::Pressed } else { Self::Released }
    }
}

impl core::fmt::Display for ButtonState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Released => write!(f, "released"),
            Self::Pressed => write!(f, "pressed"),
        }
    }
}

/// Two-state toggle debouncer. Owns all mutable controller state; the
/// caller passes it by exclusive reference, so independent instances can
/// coexist and tests need no process-wide reset.
pub struct ButtonDebouncer {
    interval_ms: u32,
    /// Timestamp of the last accepted sample; `None` until the first one.
    last_sample_ms: Option<u32>,
    state: ButtonState,
}

impl ButtonDebouncer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_sample_ms: None,
            state: ButtonState::Released,
        }
    }

    /// Last debounced reading.
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Debounce guard. Returns `true` when a sample should be taken now,
    /// recording `now_ms` as the sample time. Returns `false` while still
    /// inside the debounce window — the caller must not read the input.
    ///
    /// Timestamps are wrapping milliseconds; correctness needs only that
    /// ticks arrive reasonably often relative to the interval.
    pub fn try_sample(&mut self, now_ms: u32) -> bool {
        if let Some(last) = self.last_sample_ms {
            if now_ms.wrapping_sub(last) < self.interval_ms {
                return false;
            }
        }
        self.last_sample_ms = Some(now_ms);
        true
    }

    /// Apply an accepted sample. Returns the new state on an edge, `None`
    /// when the sample matches the current state.
    pub fn update(&mut self, pressed: bool) -> Option<ButtonState> {
        let sampled = ButtonState::from_pressed(pressed);
        if sampled == self.state {
            return None;
        }
        self.state = sampled;
        Some(sampled)
    }

    /// Guard and edge detection in one call, for callers that already hold
    /// the raw level. Never blocks, never allocates, constant time.
    pub fn tick(&mut self, pressed: bool, now_ms: u32) -> Option<ButtonState> {
        if !self.try_sample(now_ms) {
            return None;
        }
        self.update(pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_always_accepted() {
        let mut btn = ButtonDebouncer::new(10);
        assert_eq!(btn.tick(true, 0), Some(ButtonState::Pressed));
    }

    #[test]
    fn samples_inside_window_are_ignored() {
        let mut btn = ButtonDebouncer::new(10);
        assert_eq!(btn.tick(true, 0), Some(ButtonState::Pressed));
        // Bounce back within the window — not even consulted.
        assert_eq!(btn.tick(false, 5), None);
        assert_eq!(btn.state(), ButtonState::Pressed);
    }

    #[test]
    fn edge_outside_window_is_reported() {
        let mut btn = ButtonDebouncer::new(10);
        btn.tick(true, 0);
        assert_eq!(btn.tick(false, 20), Some(ButtonState::Released));
    }

    #[test]
    fn unchanged_input_reports_nothing() {
        let mut btn = ButtonDebouncer::new(10);
        assert_eq!(btn.tick(true, 0), Some(ButtonState::Pressed));
        assert_eq!(btn.tick(true, 15), None);
        assert_eq!(btn.tick(true, 30), None);
        assert_eq!(btn.tick(true, 100), None);
    }

    #[test]
    fn scenario_press_bounce_release() {
        // (raw=true, t=0) → Pressed; (raw=true, t=5) ignored;
        // (raw=false, t=20) → Released. Two notifications total.
        let mut btn = ButtonDebouncer::new(10);
        let mut changes = 0;
        for (raw, t) in [(true, 0), (true, 5), (false, 20)] {
            if btn.tick(raw, t).is_some() {
                changes += 1;
            }
        }
        assert_eq!(changes, 2);
        assert_eq!(btn.state(), ButtonState::Released);
    }

    #[test]
    fn guard_resets_window_on_accept() {
        let mut btn = ButtonDebouncer::new(10);
        assert!(btn.try_sample(0));
        assert!(!btn.try_sample(9));
        assert!(btn.try_sample(10));
        // Window is measured from the last accepted sample, not the first.
        assert!(!btn.try_sample(19));
        assert!(btn.try_sample(20));
    }

    #[test]
    fn wrapping_timestamps_are_handled() {
        let mut btn = ButtonDebouncer::new(10);
        assert_eq!(btn.tick(true, u32::MAX - 3), Some(ButtonState::Pressed));
        // 4 ms elapsed across the wrap — still inside the window.
        assert_eq!(btn.tick(false, 0), None);
        // 12 ms elapsed across the wrap — accepted.
        assert_eq!(btn.tick(false, 8), Some(ButtonState::Released));
    }
}
