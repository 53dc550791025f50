//! Per-arm mechanical response of a hollow circular cantilever.
//!
//! Each arm is treated as a cantilever beam loaded at the free end, so the
//! tip deflection follows the classic closed form `F * L^3 / (3 * E * I)`
//! (see <https://en.wikipedia.org/wiki/Deflection_(engineering)>).

use std::f64::consts::PI;

use tracing::debug;

use crate::geometry::ArmSpec;

/// Young's modulus band used when evaluating deflections.
///
/// The engine always evaluates deflection twice, once against each end of the
/// band. The supported materials currently publish a single modulus, so both
/// ends are equal, but keeping the band explicit leaves room for materials
/// with a tolerance range on the modulus.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModulusBand {
    /// Lower end of the modulus band.
    pub min: f64,
    /// Upper end of the modulus band.
    pub max: f64,
}

impl ModulusBand {
    /// Create a band with explicit ends.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Create a degenerate band where both ends share one modulus.
    #[must_use]
    pub const fn uniform(youngs_modulus: f64) -> Self {
        Self {
            min: youngs_modulus,
            max: youngs_modulus,
        }
    }
}

/// Derived mechanical quantities for a single arm.
///
/// These are ephemeral per-request values: computed once, consumed by the
/// aggregator, never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmResponse {
    /// Inner diameter of the tube in metres.
    pub inner_diameter: f64,
    /// Material volume in cubic metres.
    pub volume: f64,
    /// Arm mass in kilograms.
    pub mass: f64,
    /// Area moment of inertia of the annular section.
    pub area_moment_of_inertia: f64,
    /// Tip deflection evaluated at the lower end of the modulus band.
    pub deflection_min: f64,
    /// Tip deflection evaluated at the upper end of the modulus band.
    pub deflection_max: f64,
}

/// Evaluate the mechanical response of one arm under a point load.
///
/// Returns `None` when the arm fails any of the section checks: non-positive
/// length, outer diameter, wall thickness, inner diameter, area moment of
/// inertia or mass. Exclusion is silent by design; invalid arms simply do not
/// contribute to the aggregate populations.
#[must_use]
pub fn evaluate_arm(
    arm: &ArmSpec,
    force: f64,
    band: ModulusBand,
    density: f64,
) -> Option<ArmResponse> {
    if arm.length <= 0.0 || arm.outer_diameter <= 0.0 || arm.wall_thickness <= 0.0 {
        debug!(?arm, "arm excluded: non-positive dimension");
        return None;
    }
    let inner_diameter = arm.inner_diameter();
    if inner_diameter <= 0.0 {
        debug!(?arm, inner_diameter, "arm excluded: walls overlap");
        return None;
    }

    let od = arm.outer_diameter;
    // Hollow circular section: I = (pi / 64) * (OD^4 - ID^4).
    let area_moment_of_inertia = (PI / 64.0) * (od.powi(4) - inner_diameter.powi(4));
    if area_moment_of_inertia <= 0.0 {
        debug!(?arm, area_moment_of_inertia, "arm excluded: degenerate section");
        return None;
    }

    let volume = arm.section_volume();
    let mass = volume * density;
    if mass <= 0.0 {
        debug!(?arm, mass, "arm excluded: non-positive mass");
        return None;
    }

    let length_cubed = arm.length.powi(3);
    let deflection_min = (force * length_cubed) / (3.0 * band.min * area_moment_of_inertia);
    let deflection_max = (force * length_cubed) / (3.0 * band.max * area_moment_of_inertia);

    Some(ArmResponse {
        inner_diameter,
        volume,
        mass,
        area_moment_of_inertia,
        deflection_min,
        deflection_max,
    })
}
