//! Property tests for the invariant checker and the debounce state machine.
//!
//! Runs on host (x86_64) only — proptest is not available for ESP32
//! targets. On ESP32, these tests are compiled out.

#![cfg(not(target_os = "espidf"))]

use proptest::prelude::*;
use sigma_firmware::config::FirmwareConfig;
use sigma_firmware::drivers::button::ButtonDebouncer;
use sigma_firmware::safety::{check_invariants, Violation};

fn is_spl(v: &Violation) -> bool {
    matches!(v, Violation::SplRecommendedAboveAbsolute { .. })
}

fn is_mic_bias(v: &Violation) -> bool {
    matches!(
        v,
        Violation::MicBiasInverted { .. }
            | Violation::MicBiasBelowEnvelope { .. }
            | Violation::MicBiasAboveEnvelope { .. }
    )
}

fn is_battery(v: &Violation) -> bool {
    matches!(
        v,
        Violation::BatteryCriticalNotBelowLow { .. } | Violation::BatteryLowAboveNominal { .. }
    )
}

// ── Invariant checker ─────────────────────────────────────────

proptest! {
    /// Ordered SPL limits never yield an SPL violation; inverted limits
    /// yield exactly one.
    #[test]
    fn spl_violation_iff_inverted(
        recommended in 40.0f32..=140.0,
        absolute in 40.0f32..=140.0,
    ) {
        let config = FirmwareConfig {
            recommended_max_spl_db: recommended,
            absolute_max_spl_db: absolute,
            ..FirmwareConfig::default()
        };
        let spl_count = check_invariants(&config).iter().filter(|v| is_spl(v)).count();
        if recommended <= absolute {
            prop_assert_eq!(spl_count, 0);
        } else {
            prop_assert_eq!(spl_count, 1);
        }
    }

    /// Ordered mic-bias bounds inside the [1.5 V, 3.6 V] envelope are
    /// never reported.
    #[test]
    fn mic_bias_in_envelope_is_clean(
        min in 1.5f32..3.6,
        span in 0.001f32..=2.1,
    ) {
        let max = (min + span).min(3.6);
        prop_assume!(min < max);
        let config = FirmwareConfig {
            mic_bias_min_volts: min,
            mic_bias_max_volts: max,
            ..FirmwareConfig::default()
        };
        prop_assert!(!check_invariants(&config).iter().any(is_mic_bias));
    }

    /// A bound outside the envelope is reported as the matching violation.
    #[test]
    fn mic_bias_outside_envelope_is_reported(below in 0.0f32..1.5, above in 3.6f32..6.0) {
        prop_assume!(above > 3.6);
        let config = FirmwareConfig {
            mic_bias_min_volts: below,
            mic_bias_max_volts: above,
            ..FirmwareConfig::default()
        };
        let violations = check_invariants(&config);
        prop_assert!(
            violations.contains(&Violation::MicBiasBelowEnvelope { volts: below }),
            "expected MicBiasBelowEnvelope {{ volts: {} }}",
            below
        );
        prop_assert!(
            violations.contains(&Violation::MicBiasAboveEnvelope { volts: above }),
            "expected MicBiasAboveEnvelope {{ volts: {} }}",
            above
        );
    }

    /// `critical < low <= nominal` never yields a battery violation.
    #[test]
    fn ordered_battery_thresholds_are_clean(
        critical in 2.5f32..3.4,
        low_step in 0.001f32..=0.5,
        nominal_step in 0.0f32..=0.5,
    ) {
        let low = critical + low_step;
        let nominal = low + nominal_step;
        let config = FirmwareConfig {
            battery_critical_volts: critical,
            battery_low_volts: low,
            battery_nominal_volts: nominal,
            ..FirmwareConfig::default()
        };
        prop_assert!(!check_invariants(&config).iter().any(is_battery));
    }

    /// The check is pure: repeated evaluation gives identical results.
    #[test]
    fn check_is_referentially_transparent(
        recommended in 40.0f32..=140.0,
        min in 0.0f32..=5.0,
        critical in 2.0f32..=4.0,
    ) {
        let config = FirmwareConfig {
            recommended_max_spl_db: recommended,
            mic_bias_min_volts: min,
            battery_critical_volts: critical,
            ..FirmwareConfig::default()
        };
        prop_assert_eq!(check_invariants(&config), check_invariants(&config));
    }
}

// ── Debounce state machine ────────────────────────────────────

proptest! {
    /// Two ticks closer together than the interval yield at most one
    /// state change, and the second never reports one.
    #[test]
    fn debounce_idempotence(
        first_raw: bool,
        second_raw: bool,
        start in 0u32..1_000_000,
        gap in 0u32..10,
    ) {
        let mut btn = ButtonDebouncer::new(10);
        let first = btn.tick(first_raw, start);
        let second = btn.tick(second_raw, start.wrapping_add(gap));
        prop_assert!(second.is_none());
        let changes = usize::from(first.is_some()) + usize::from(second.is_some());
        prop_assert!(changes <= 1);
    }

    /// An unchanged input, sampled beyond the interval each time,
    /// produces no further changes after the first transition.
    #[test]
    fn steady_input_is_edge_triggered(
        raw: bool,
        start in 0u32..1_000_000,
        gaps in proptest::collection::vec(10u32..1_000, 1..20),
    ) {
        let mut btn = ButtonDebouncer::new(10);
        let mut now = start;
        let mut changes = 0;
        prop_assert!(btn.tick(raw, now).is_some() || !raw);
        for gap in gaps {
            now = now.wrapping_add(gap);
            if btn.tick(raw, now).is_some() {
                changes += 1;
            }
        }
        prop_assert_eq!(changes, 0);
    }

    /// The debounced state always equals the last accepted sample.
    #[test]
    fn state_tracks_accepted_samples(
        samples in proptest::collection::vec((any::<bool>(), 0u32..1_000), 1..50),
    ) {
        let mut btn = ButtonDebouncer::new(10);
        let mut now = 0u32;
        let mut last_accepted = false;
        for (raw, gap) in samples {
            now = now.wrapping_add(gap);
            if btn.try_sample(now) {
                btn.update(raw);
                last_accepted = raw;
            }
            prop_assert_eq!(btn.state().is_pressed(), last_accepted);
        }
    }
}
