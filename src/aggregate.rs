//! Two-pass aggregation of per-arm responses into SDD statistics.
//!
//! The first pass collects deflection and mass populations across all valid
//! arms. The worst-case (largest) deflection in each modulus scenario fixes a
//! pair of population-level spring constants, and the second pass derives the
//! stiffness and damping populations from them. Each population is then
//! sorted and reduced to its (min, median, max) triple.

use std::f64::consts::PI;

use tracing::{debug, warn};

use crate::beam::{evaluate_arm, ModulusBand};
use crate::geometry::ArmSpec;
use crate::materials::Material;
use crate::statistics::{population_summary, SddStatistics};

/// Constant in the empirical damping model, which keys the damping
/// coefficient only on arm mass: `c = sqrt(8.967 / (4 * pi^2 * m^2 + 8.967))`.
const DAMPING_MODEL_CONSTANT: f64 = 8.967;

/// Populations collected by the first aggregation pass.
///
/// Exposed so callers and tests can account for which arms contributed to
/// which population; an arm rejected by the section checks must not appear in
/// any of them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeflectionPass {
    /// Tip deflections evaluated at the lower end of the modulus band.
    pub deflections_min: Vec<f64>,
    /// Tip deflections evaluated at the upper end of the modulus band.
    pub deflections_max: Vec<f64>,
    /// Masses of the arms that passed the section checks.
    pub masses: Vec<f64>,
}

/// Run the per-arm calculator over every arm and collect the deflection and
/// mass populations.
///
/// Arms failing the section checks are skipped. A non-positive deflection is
/// dropped from its population without excluding the arm's mass, and a
/// non-finite deflection is treated as an internal invariant violation:
/// logged and substituted with an excluded contribution.
#[must_use]
pub fn collect_deflections(
    arms: &[ArmSpec],
    force: f64,
    band: ModulusBand,
    density: f64,
) -> DeflectionPass {
    let mut pass = DeflectionPass::default();
    for arm in arms {
        let Some(response) = evaluate_arm(arm, force, band, density) else {
            continue;
        };
        pass.masses.push(response.mass);
        for (deflection, population) in [
            (response.deflection_min, &mut pass.deflections_min),
            (response.deflection_max, &mut pass.deflections_max),
        ] {
            if !deflection.is_finite() {
                warn!(?arm, deflection, "non-finite deflection; contribution skipped");
            } else if deflection > 0.0 {
                population.push(deflection);
            }
        }
    }
    pass
}

/// Aggregate the mechanical response of a whole robot into [`SddStatistics`].
///
/// Returns the all-zero record when either deflection population comes back
/// empty, meaning no arm produced a usable deflection in that scenario.
#[must_use]
pub fn aggregate(arms: &[ArmSpec], force: f64, band: ModulusBand, density: f64) -> SddStatistics {
    let pass = collect_deflections(arms, force, band, density);
    let Some(max_deflection_min) = pass.deflections_min.iter().copied().reduce(f64::max) else {
        debug!("no usable deflections at the lower modulus; returning zeroed statistics");
        return SddStatistics::zero();
    };
    let Some(max_deflection_max) = pass.deflections_max.iter().copied().reduce(f64::max) else {
        debug!("no usable deflections at the upper modulus; returning zeroed statistics");
        return SddStatistics::zero();
    };

    // The most-deflecting arm governs: the population-level spring constants
    // come from the worst case in each modulus scenario, and every valid arm
    // contributes those same two constants to the stiffness population.
    let spring_min = force / max_deflection_min;
    let spring_max = force / max_deflection_max;

    let mut stiffnesses = Vec::new();
    let mut dampings = Vec::new();
    for arm in arms {
        // Second pass, validated independently of the first: an arm excluded
        // from the deflection populations may still contribute here as long
        // as it satisfies the basic section checks.
        if !arm.has_valid_section() {
            continue;
        }
        let mass = arm.section_volume() * density;
        if mass <= 0.0 {
            continue;
        }

        if spring_min > 0.0 {
            stiffnesses.push(spring_min);
        }
        if spring_max > 0.0 {
            stiffnesses.push(spring_max);
        }

        let damping_coefficient = (DAMPING_MODEL_CONSTANT
            / (4.0 * PI * PI * mass * mass + DAMPING_MODEL_CONSTANT))
            .sqrt();
        for spring in [spring_min, spring_max] {
            let critical_damping = (4.0 * mass * spring).sqrt();
            if !critical_damping.is_finite() {
                warn!(?arm, spring, "non-finite critical damping; contribution skipped");
                continue;
            }
            if critical_damping > 0.0 {
                let ratio = damping_coefficient / critical_damping;
                if ratio > 0.0 {
                    dampings.push(ratio);
                }
            }
        }
    }

    let mut deflections = pass.deflections_min;
    deflections.extend_from_slice(&pass.deflections_max);

    let deflection = population_summary(deflections);
    let stiffness = population_summary(stiffnesses);
    let damping = population_summary(dampings);

    SddStatistics {
        min_deflection: deflection.min,
        median_deflection: deflection.median,
        max_deflection: deflection.max,
        min_stiffness: stiffness.min,
        median_stiffness: stiffness.median,
        max_stiffness: stiffness.max,
        min_damping: damping.min,
        median_damping: damping.median,
        max_damping: damping.max,
    }
}

/// Aggregate using the published properties of a [`Material`].
///
/// The material's single Young's modulus is applied to both ends of the
/// modulus band.
#[must_use]
pub fn aggregate_for_material(arms: &[ArmSpec], force: f64, material: Material) -> SddStatistics {
    let properties = material.properties();
    aggregate(
        arms,
        force,
        ModulusBand::uniform(properties.youngs_modulus),
        properties.density,
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::arm;

    /// Hand-computed response for the reference arm used across these tests.
    fn reference_arm_quantities() -> (f64, f64, f64) {
        let od: f64 = 0.05;
        let id: f64 = od - 2.0 * 0.005;
        let inertia = (PI / 64.0) * (od.powi(4) - id.powi(4));
        let deflection = 1_000.0 * 1.0 / (3.0 * 200_000.0 * inertia);
        let mass = PI * 1.0 * (od * od - id * id) / 4.0 * 7_850.0;
        (inertia, deflection, mass)
    }

    #[test]
    fn invalid_arms_appear_in_no_population() {
        let arms = [
            arm(1.0, 0.05, 5.0),
            arm(1.2, 0.05, 5.0),
            // Walls overlap; must be absent from every population.
            arm(1.0, 0.05, 30.0),
        ];
        let pass = collect_deflections(&arms, 1_000.0, ModulusBand::uniform(200_000.0), 7_850.0);
        assert_eq!(pass.deflections_min.len(), 2);
        assert_eq!(pass.deflections_max.len(), 2);
        assert_eq!(pass.masses.len(), 2);
    }

    #[test]
    fn single_arm_populations_are_degenerate() {
        let arms = [arm(1.0, 0.05, 5.0)];
        let statistics = aggregate(&arms, 1_000.0, ModulusBand::uniform(200_000.0), 7_850.0);

        let (_, deflection, mass) = reference_arm_quantities();
        let spring = 1_000.0 / deflection;
        let damping_coefficient = (DAMPING_MODEL_CONSTANT
            / (4.0 * PI * PI * mass * mass + DAMPING_MODEL_CONSTANT))
            .sqrt();
        let damping = damping_coefficient / (4.0 * mass * spring).sqrt();

        // One arm, both band ends equal: every triple collapses to one value.
        assert_relative_eq!(statistics.min_deflection, deflection);
        assert_relative_eq!(statistics.median_deflection, deflection);
        assert_relative_eq!(statistics.max_deflection, deflection);
        assert_relative_eq!(statistics.min_stiffness, spring);
        assert_relative_eq!(statistics.median_stiffness, spring);
        assert_relative_eq!(statistics.max_stiffness, spring);
        assert_relative_eq!(statistics.min_damping, damping);
        assert_relative_eq!(statistics.median_damping, damping);
        assert_relative_eq!(statistics.max_damping, damping);
    }

    #[test]
    fn spring_constants_come_from_the_most_deflecting_arm() {
        // The longer arm deflects more and therefore fixes the spring
        // constant for the whole population.
        let arms = [arm(1.0, 0.05, 5.0), arm(1.5, 0.05, 5.0)];
        let band = ModulusBand::uniform(200_000.0);
        let pass = collect_deflections(&arms, 1_000.0, band, 7_850.0);
        let worst = pass
            .deflections_min
            .iter()
            .copied()
            .reduce(f64::max)
            .expect("populated");

        let statistics = aggregate(&arms, 1_000.0, band, 7_850.0);
        // Both arms contribute the same two (equal) global constants.
        assert_relative_eq!(statistics.min_stiffness, 1_000.0 / worst);
        assert_relative_eq!(statistics.max_stiffness, 1_000.0 / worst);
        assert_relative_eq!(statistics.median_stiffness, 1_000.0 / worst);
    }

    #[test]
    fn combined_deflection_population_spans_both_band_ends() {
        let arms = [arm(1.0, 0.05, 5.0)];
        let statistics = aggregate(&arms, 1_000.0, ModulusBand::new(100_000.0, 200_000.0), 7_850.0);
        // Soft end deflects twice as much as the stiff end.
        assert_relative_eq!(
            statistics.max_deflection,
            2.0 * statistics.min_deflection,
            epsilon = 1.0e-12
        );
        assert_relative_eq!(
            statistics.median_deflection,
            1.5 * statistics.min_deflection,
            epsilon = 1.0e-12
        );
    }

    #[test]
    fn no_arms_yields_zeroed_statistics() {
        let statistics = aggregate(&[], 1_000.0, ModulusBand::uniform(200_000.0), 7_850.0);
        assert_eq!(statistics, SddStatistics::zero());
    }

    #[test]
    fn all_invalid_arms_yield_zeroed_statistics() {
        let arms = [arm(0.0, 0.05, 5.0), arm(1.0, 0.05, 30.0)];
        let statistics = aggregate(&arms, 1_000.0, ModulusBand::uniform(200_000.0), 7_850.0);
        assert_eq!(statistics, SddStatistics::zero());
    }

    #[test]
    fn non_positive_force_leaves_deflection_populations_empty() {
        // Deflections share the sign of the force, so a zero or compressive
        // load produces the degenerate all-zero output.
        let arms = [arm(1.0, 0.05, 5.0)];
        let band = ModulusBand::uniform(200_000.0);
        assert_eq!(aggregate(&arms, 0.0, band, 7_850.0), SddStatistics::zero());
        assert_eq!(
            aggregate(&arms, -1_000.0, band, 7_850.0),
            SddStatistics::zero()
        );
    }

    #[test]
    fn material_helper_matches_explicit_band() {
        let arms = [arm(1.0, 0.05, 5.0), arm(0.8, 0.04, 4.0)];
        let by_material = aggregate_for_material(&arms, 1_000.0, Material::Titanium);
        let by_band = aggregate(&arms, 1_000.0, ModulusBand::uniform(116_000.0), 4_500.0);
        assert_eq!(by_material, by_band);
    }
}
