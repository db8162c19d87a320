//! Startup safety-rail validation.
//!
//! The configuration declares ordering relationships among its audio,
//! mic-bias, and battery constants. [`check_invariants`] evaluates every
//! relationship and returns a violation per broken one. The check is pure:
//! no side effects, same result for the same configuration.
//!
//! Violations are **non-fatal**. The device stays minimally operable
//! (button + LED keep working) even with misconfigured safety rails; the
//! operator is warned once at startup through the event sink.

use core::fmt;

use crate::config::FirmwareConfig;

/// Hardware-safe mic-bias envelope (volts). Bias outside this range can
/// damage the capsule regardless of what the configured bounds say.
pub const MIC_BIAS_HARD_MIN_VOLTS: f32 = 1.5;
pub const MIC_BIAS_HARD_MAX_VOLTS: f32 = 3.6;

/// Upper bound on simultaneously reportable violations.
pub const MAX_VIOLATIONS: usize = 8;

/// A broken ordering relationship among configuration constants,
/// carrying the offending values as observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Violation {
    /// `recommended_max_spl_db > absolute_max_spl_db` (equality is valid).
    SplRecommendedAboveAbsolute { recommended_db: f32, absolute_db: f32 },
    /// `mic_bias_min_volts >= mic_bias_max_volts`.
    MicBiasInverted { min_volts: f32, max_volts: f32 },
    /// Lower mic-bias bound below the hardware envelope.
    MicBiasBelowEnvelope { volts: f32 },
    /// Upper mic-bias bound above the hardware envelope.
    MicBiasAboveEnvelope { volts: f32 },
    /// `battery_critical_volts >= battery_low_volts`.
    BatteryCriticalNotBelowLow { critical_volts: f32, low_volts: f32 },
    /// `battery_low_volts > battery_nominal_volts`.
    BatteryLowAboveNominal { low_volts: f32, nominal_volts: f32 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SplRecommendedAboveAbsolute {
                recommended_db,
                absolute_db,
            } => write!(
                f,
                "recommended SPL {recommended_db:.1} dB exceeds absolute maximum {absolute_db:.1} dB"
            ),
            Self::MicBiasInverted {
                min_volts,
                max_volts,
            } => write!(
                f,
                "mic bias bounds inverted ({min_volts:.2} V >= {max_volts:.2} V)"
            ),
            Self::MicBiasBelowEnvelope { volts } => write!(
                f,
                "mic bias lower bound {volts:.2} V below hardware minimum {MIC_BIAS_HARD_MIN_VOLTS:.1} V"
            ),
            Self::MicBiasAboveEnvelope { volts } => write!(
                f,
                "mic bias upper bound {volts:.2} V above hardware maximum {MIC_BIAS_HARD_MAX_VOLTS:.1} V"
            ),
            Self::BatteryCriticalNotBelowLow {
                critical_volts,
                low_volts,
            } => write!(
                f,
                "battery critical threshold {critical_volts:.2} V not below low threshold {low_volts:.2} V"
            ),
            Self::BatteryLowAboveNominal {
                low_volts,
                nominal_volts,
            } => write!(
                f,
                "battery low threshold {low_volts:.2} V above nominal {nominal_volts:.2} V"
            ),
        }
    }
}

/// Fixed-capacity violation list — no heap allocation on the report path.
pub type Violations = heapless::Vec<Violation, MAX_VIOLATIONS>;

/// Evaluate every declared invariant against `config`.
///
/// Returns one [`Violation`] per broken relationship, in declaration order
/// (SPL, mic bias, battery). An empty list means the configuration honours
/// every safety rail.
pub fn check_invariants(config: &FirmwareConfig) -> Violations {
    let mut violations = Violations::new();

    // Audio: equal limits are valid, only an inversion is reported.
    if config.recommended_max_spl_db > config.absolute_max_spl_db {
        violations
            .push(Violation::SplRecommendedAboveAbsolute {
                recommended_db: config.recommended_max_spl_db,
                absolute_db: config.absolute_max_spl_db,
            })
            .ok();
    }

    // Mic bias: ordered bounds, both within the hardware envelope.
    if config.mic_bias_min_volts >= config.mic_bias_max_volts {
        violations
            .push(Violation::MicBiasInverted {
                min_volts: config.mic_bias_min_volts,
                max_volts: config.mic_bias_max_volts,
            })
            .ok();
    }
    if config.mic_bias_min_volts < MIC_BIAS_HARD_MIN_VOLTS {
        violations
            .push(Violation::MicBiasBelowEnvelope {
                volts: config.mic_bias_min_volts,
            })
            .ok();
    }
    if config.mic_bias_max_volts > MIC_BIAS_HARD_MAX_VOLTS {
        violations
            .push(Violation::MicBiasAboveEnvelope {
                volts: config.mic_bias_max_volts,
            })
            .ok();
    }

    // Battery: critical < low <= nominal.
    if config.battery_critical_volts >= config.battery_low_volts {
        violations
            .push(Violation::BatteryCriticalNotBelowLow {
                critical_volts: config.battery_critical_volts,
                low_volts: config.battery_low_volts,
            })
            .ok();
    }
    if config.battery_low_volts > config.battery_nominal_volts {
        violations
            .push(Violation::BatteryLowAboveNominal {
                low_volts: config.battery_low_volts,
                nominal_volts: config.battery_nominal_volts,
            })
            .ok();
    }

    violations
}
