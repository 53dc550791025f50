//! High-level orchestration of aggregation, classification and records.

use serde::Serialize;

use crate::aggregate::aggregate;
use crate::beam::ModulusBand;
use crate::classify::{classify, StabilityLevel};
use crate::geometry::ArmSpec;
use crate::materials::Material;
use crate::records::{build_records, ArmRecord};
use crate::statistics::SddStatistics;

/// Complete result of a stability analysis for one robot.
///
/// Bundles everything the presentation and export layers need: the nine-field
/// statistics, the headline verdict derived from the median triple, and the
/// per-arm breakdown.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StabilityAnalysis {
    /// Applied tip force in newtons.
    pub force: f64,
    /// Material shared by every arm.
    pub material: Material,
    /// Aggregated stiffness/damping/deflection statistics.
    pub statistics: SddStatistics,
    /// Headline stability verdict.
    pub level: StabilityLevel,
    /// Per-arm breakdown for display and export.
    pub records: Vec<ArmRecord>,
}

/// Run the full analysis for a robot whose arms share one material.
///
/// The headline verdict is [`classify`] applied to the median triple of the
/// aggregated statistics, so feeding `statistics.median_*` back into
/// [`classify`] always reproduces `level`.
///
/// # Examples
/// ```
/// use armstat::{analyze, arm, classify, Material};
///
/// let arms = [arm(1.0, 0.05, 5.0), arm(1.2, 0.05, 5.0)];
/// let analysis = analyze(&arms, 1_000.0, Material::Steel);
/// let replayed = classify(
///     analysis.statistics.median_stiffness,
///     analysis.statistics.median_deflection,
///     analysis.statistics.median_damping,
/// );
/// assert_eq!(analysis.level, replayed);
/// ```
#[must_use]
pub fn analyze(arms: &[ArmSpec], force: f64, material: Material) -> StabilityAnalysis {
    let properties = material.properties();
    let statistics = aggregate(
        arms,
        force,
        ModulusBand::uniform(properties.youngs_modulus),
        properties.density,
    );
    let level = classify(
        statistics.median_stiffness,
        statistics.median_deflection,
        statistics.median_damping,
    );
    let records = build_records(arms, properties.density);
    StabilityAnalysis {
        force,
        material,
        statistics,
        level,
        records,
    }
}
