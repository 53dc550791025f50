//! Fixed-shape per-arm records for display and export.

use serde::Serialize;

use crate::geometry::ArmSpec;

/// One row of the per-arm breakdown handed to the presentation and export
/// layers.
///
/// Every requested arm produces a record; arms with unusable geometry keep
/// their raw inputs but report zeroed derived quantities rather than being
/// dropped, so the export always shows `number_of_arms` rows.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ArmRecord {
    /// One-based arm index as shown to the operator.
    pub arm_number: usize,
    /// Arm length in metres, as supplied.
    pub length: f64,
    /// Outer diameter in metres, as supplied.
    pub outer_diameter: f64,
    /// Derived inner diameter in metres, clamped to be non-negative.
    pub inner_diameter: f64,
    /// Wall thickness in millimetres, as supplied.
    pub wall_thickness: f64,
    /// Material volume in cubic metres, zero when the section is unusable.
    pub volume: f64,
    /// Arm mass in kilograms, zero when the section is unusable.
    pub mass: f64,
}

/// Build the per-arm record set for a robot.
#[must_use]
pub fn build_records(arms: &[ArmSpec], density: f64) -> Vec<ArmRecord> {
    arms.iter()
        .enumerate()
        .map(|(index, arm)| {
            let inner_diameter = if arm.outer_diameter > 0.0 {
                arm.inner_diameter()
            } else {
                0.0
            };
            let volume = if arm.length > 0.0 && arm.outer_diameter > 0.0 && inner_diameter > 0.0 {
                arm.section_volume()
            } else {
                0.0
            };
            let mass = if volume > 0.0 { volume * density } else { 0.0 };
            ArmRecord {
                arm_number: index + 1,
                length: arm.length,
                outer_diameter: arm.outer_diameter,
                inner_diameter: inner_diameter.max(0.0),
                wall_thickness: arm.wall_thickness,
                volume: volume.max(0.0),
                mass: mass.max(0.0),
            }
        })
        .collect()
}
