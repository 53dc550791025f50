//! Stability classification from the aggregated SDD triple.

use std::fmt;

use serde::Serialize;
use tracing::warn;

/// Score below which a robot is rated [`StabilityLevel::Low`].
const MEDIUM_THRESHOLD: f64 = 1.5;
/// Score at or above which a robot is rated [`StabilityLevel::High`].
const HIGH_THRESHOLD: f64 = 3.5;

/// Tri-level stability verdict for a robot.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum StabilityLevel {
    /// Score below 1.5, or any degenerate or faulted computation.
    Low,
    /// Score in `[1.5, 3.5)`.
    Medium,
    /// Score of 3.5 or above.
    High,
}

impl StabilityLevel {
    /// The display label used by the legacy presentation layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for StabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a stiffness/deflection/damping triple to a [`StabilityLevel`].
///
/// The score is `stiffness / (damping * deflection)`, banded at 1.5 and 3.5
/// with closed-open intervals. The function never fails: a zero damping or
/// deflection short-circuits to `Low` before the division, and a non-finite
/// score (the floating-point analogue of the overflow the calibration source
/// guarded against) also fails safe to `Low`.
///
/// # Examples
/// ```
/// use armstat::{classify, StabilityLevel};
///
/// assert_eq!(classify(10.0, 1.0, 2.0), StabilityLevel::High);
/// assert_eq!(classify(4.0, 1.0, 2.0), StabilityLevel::Medium);
/// assert_eq!(classify(1.0, 1.0, 2.0), StabilityLevel::Low);
/// assert_eq!(classify(0.0, 0.0, 0.0), StabilityLevel::Low);
/// ```
#[must_use]
pub fn classify(stiffness: f64, deflection: f64, damping: f64) -> StabilityLevel {
    if damping == 0.0 || deflection == 0.0 {
        return StabilityLevel::Low;
    }
    let score = stiffness / (damping * deflection);
    if !score.is_finite() {
        warn!(stiffness, deflection, damping, "non-finite stability score; failing safe");
        return StabilityLevel::Low;
    }
    if score < MEDIUM_THRESHOLD {
        StabilityLevel::Low
    } else if score < HIGH_THRESHOLD {
        StabilityLevel::Medium
    } else {
        StabilityLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_damping_or_deflection_fails_closed_to_low() {
        assert_eq!(classify(10.0, 1.0, 0.0), StabilityLevel::Low);
        assert_eq!(classify(10.0, 0.0, 1.0), StabilityLevel::Low);
        assert_eq!(classify(0.0, 0.0, 0.0), StabilityLevel::Low);
    }

    #[test]
    fn band_boundaries_are_inclusive_on_the_lower_bound() {
        // score = stiffness / (damping * deflection) with damping * deflection = 2.
        assert_eq!(classify(3.0, 1.0, 2.0), StabilityLevel::Medium); // exactly 1.5
        assert_eq!(classify(7.0, 1.0, 2.0), StabilityLevel::High); // exactly 3.5
        assert_eq!(classify(3.0 - 1.0e-9, 1.0, 2.0), StabilityLevel::Low);
        assert_eq!(classify(7.0 - 1.0e-9, 1.0, 2.0), StabilityLevel::Medium);
    }

    #[test]
    fn classification_is_monotonic_in_stiffness() {
        let mut previous = StabilityLevel::Low;
        for stiffness in [0.5, 1.0, 2.0, 3.0, 5.0, 8.0, 100.0] {
            let level = classify(stiffness, 1.0, 1.0);
            assert!(level >= previous, "level regressed at stiffness {stiffness}");
            previous = level;
        }
    }

    #[test]
    fn classification_is_non_increasing_in_damping_times_deflection() {
        let mut previous = StabilityLevel::High;
        for damping in [0.1, 0.5, 1.0, 2.0, 5.0, 50.0] {
            let level = classify(5.0, 1.0, damping);
            assert!(level <= previous, "level increased at damping {damping}");
            previous = level;
        }
    }

    #[test]
    fn non_finite_scores_fail_safe_to_low() {
        assert_eq!(classify(f64::INFINITY, 1.0, 1.0), StabilityLevel::Low);
        assert_eq!(classify(f64::NAN, 1.0, 1.0), StabilityLevel::Low);
        // An enormous stiffness over a tiny denominator overflows to infinity.
        assert_eq!(classify(f64::MAX, 1.0e-300, 1.0e-10), StabilityLevel::Low);
    }

    #[test]
    fn labels_match_the_legacy_presentation_strings() {
        assert_eq!(StabilityLevel::Low.to_string(), "Low");
        assert_eq!(StabilityLevel::Medium.to_string(), "Medium");
        assert_eq!(StabilityLevel::High.to_string(), "High");
    }
}
