//! Geometric description of hollow circular robotic arms.

use std::f64::consts::PI;

use serde::Serialize;

/// Physical description of one robotic arm, modelled as a hollow circular
/// cantilever fixed at the shoulder joint.
///
/// Lengths and diameters are in metres; the wall thickness is supplied in
/// millimetres, matching the units used on engineering drawings, and is
/// converted internally.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ArmSpec {
    /// Arm length in metres.
    pub length: f64,
    /// Outer diameter of the tube in metres.
    pub outer_diameter: f64,
    /// Wall thickness of the tube in millimetres.
    pub wall_thickness: f64,
}

impl ArmSpec {
    /// Create an [`ArmSpec`] with explicit dimensions.
    #[must_use]
    pub const fn new(length: f64, outer_diameter: f64, wall_thickness: f64) -> Self {
        Self {
            length,
            outer_diameter,
            wall_thickness,
        }
    }

    /// Wall thickness converted to metres.
    #[must_use]
    pub fn wall_thickness_m(&self) -> f64 {
        self.wall_thickness / 1000.0
    }

    /// Inner diameter of the tube in metres.
    ///
    /// A non-positive result means the walls overlap and the section is not
    /// physically realisable.
    ///
    /// # Examples
    /// ```
    /// use armstat::arm;
    ///
    /// let spec = arm(1.0, 0.05, 5.0);
    /// assert!((spec.inner_diameter() - 0.04).abs() < 1.0e-12);
    /// ```
    #[must_use]
    pub fn inner_diameter(&self) -> f64 {
        self.outer_diameter - 2.0 * self.wall_thickness_m()
    }

    /// Whether the arm passes the basic section checks used throughout the
    /// engine: positive length, outer diameter, wall thickness and inner
    /// diameter.
    #[must_use]
    pub fn has_valid_section(&self) -> bool {
        self.length > 0.0
            && self.outer_diameter > 0.0
            && self.wall_thickness > 0.0
            && self.inner_diameter() > 0.0
    }

    /// Material volume of the tube in cubic metres.
    ///
    /// Computed as the annular cross-section swept along the arm length.
    #[must_use]
    pub fn section_volume(&self) -> f64 {
        let od = self.outer_diameter;
        let id = self.inner_diameter();
        PI * self.length * (od * od - id * id) / 4.0
    }
}

/// Convenience helper for creating [`ArmSpec`] instances.
///
/// # Examples
/// ```
/// use armstat::arm;
///
/// let spec = arm(0.8, 0.04, 3.0);
/// assert_eq!(spec.length, 0.8);
/// ```
#[must_use]
pub const fn arm(length: f64, outer_diameter: f64, wall_thickness: f64) -> ArmSpec {
    ArmSpec::new(length, outer_diameter, wall_thickness)
}

/// Build the arm list from the six-slot parallel arrays supplied by the form
/// layer.
///
/// Only the first `number_of_arms` slots are meaningful; missing slots are
/// treated as zeroed dimensions and will be excluded by the section checks
/// downstream.
#[must_use]
pub fn arms_from_slots(
    number_of_arms: usize,
    lengths: &[f64],
    outer_diameters: &[f64],
    thicknesses: &[f64],
) -> Vec<ArmSpec> {
    (0..number_of_arms)
        .map(|index| {
            ArmSpec::new(
                lengths.get(index).copied().unwrap_or(0.0),
                outer_diameters.get(index).copied().unwrap_or(0.0),
                thicknesses.get(index).copied().unwrap_or(0.0),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn wall_thickness_is_converted_to_metres() {
        let spec = arm(1.0, 0.05, 5.0);
        assert_relative_eq!(spec.wall_thickness_m(), 0.005);
        assert_relative_eq!(spec.inner_diameter(), 0.04, epsilon = 1.0e-12);
    }

    #[test]
    fn section_volume_matches_annulus_formula() {
        let spec = arm(1.0, 0.05, 5.0);
        let od = 0.05;
        let id = od - 2.0 * 0.005;
        let expected = PI * 1.0 * (od * od - id * id) / 4.0;
        assert_relative_eq!(spec.section_volume(), expected);
    }

    #[test]
    fn overlapping_walls_invalidate_the_section() {
        // 30 mm of wall on a 50 mm tube leaves no bore.
        let spec = arm(1.0, 0.05, 30.0);
        assert!(spec.inner_diameter() <= 0.0);
        assert!(!spec.has_valid_section());
    }

    #[test]
    fn non_positive_dimensions_invalidate_the_section() {
        assert!(!arm(0.0, 0.05, 5.0).has_valid_section());
        assert!(!arm(1.0, 0.0, 5.0).has_valid_section());
        assert!(!arm(1.0, 0.05, 0.0).has_valid_section());
        assert!(arm(1.0, 0.05, 5.0).has_valid_section());
    }

    #[test]
    fn slots_are_truncated_to_the_requested_arm_count() {
        let lengths = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let diameters = [0.05; 6];
        let thicknesses = [5.0; 6];
        let arms = arms_from_slots(2, &lengths, &diameters, &thicknesses);
        assert_eq!(arms.len(), 2);
        assert_relative_eq!(arms[1].length, 2.0);
    }

    #[test]
    fn missing_slots_default_to_zeroed_dimensions() {
        let arms = arms_from_slots(3, &[1.0], &[0.05], &[5.0]);
        assert_eq!(arms.len(), 3);
        assert!(arms[0].has_valid_section());
        assert!(!arms[2].has_valid_section());
        assert_relative_eq!(arms[2].length, 0.0);
    }
}
