//! Material property table for the supported arm materials.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::MaterialError;

/// Closed enumeration of the materials the engine knows how to model.
///
/// Properties for anything outside this set are a caller error; names are
/// resolved through [`FromStr`] which rejects unknown keys instead of
/// defaulting.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Material {
    /// Structural steel.
    Steel,
    /// Aluminum alloy.
    Aluminum,
    /// Titanium alloy.
    Titanium,
    /// Carbon fiber composite.
    CarbonFiber,
    /// Brass.
    Brass,
    /// Copper.
    Copper,
}

/// Mechanical properties looked up for a [`Material`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialProperties {
    /// Young's modulus in the calibration units of the engine (MPa-valued).
    pub youngs_modulus: f64,
    /// Density in kilograms per cubic metre.
    pub density: f64,
}

impl Material {
    /// Every supported material, in table order.
    pub const ALL: [Self; 6] = [
        Self::Steel,
        Self::Aluminum,
        Self::Titanium,
        Self::CarbonFiber,
        Self::Brass,
        Self::Copper,
    ];

    /// Look up the mechanical properties for this material.
    ///
    /// # Examples
    /// ```
    /// use armstat::Material;
    ///
    /// let steel = Material::Steel.properties();
    /// assert_eq!(steel.youngs_modulus, 200_000.0);
    /// assert_eq!(steel.density, 7_850.0);
    /// ```
    #[must_use]
    pub const fn properties(self) -> MaterialProperties {
        match self {
            Self::Steel => MaterialProperties {
                youngs_modulus: 200_000.0,
                density: 7_850.0,
            },
            Self::Aluminum => MaterialProperties {
                youngs_modulus: 70_000.0,
                density: 2_700.0,
            },
            Self::Titanium => MaterialProperties {
                youngs_modulus: 116_000.0,
                density: 4_500.0,
            },
            Self::CarbonFiber => MaterialProperties {
                youngs_modulus: 230_000.0,
                density: 1_600.0,
            },
            Self::Brass => MaterialProperties {
                youngs_modulus: 105_000.0,
                density: 8_500.0,
            },
            Self::Copper => MaterialProperties {
                youngs_modulus: 110_000.0,
                density: 8_960.0,
            },
        }
    }

    /// The form key used by the input layer for this material.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Steel => "steel",
            Self::Aluminum => "aluminum",
            Self::Titanium => "titanium",
            Self::CarbonFiber => "carbonFiber",
            Self::Brass => "brass",
            Self::Copper => "copper",
        }
    }
}

impl FromStr for Material {
    type Err = MaterialError;

    /// Resolve a form key into a [`Material`].
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::Unknown`] when the key does not name a
    /// supported material.
    ///
    /// # Examples
    /// ```
    /// use armstat::Material;
    ///
    /// let material: Material = "carbonFiber".parse().expect("known material");
    /// assert_eq!(material, Material::CarbonFiber);
    /// assert!("unobtainium".parse::<Material>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "steel" => Ok(Self::Steel),
            "aluminum" => Ok(Self::Aluminum),
            "titanium" => Ok(Self::Titanium),
            "carbonFiber" => Ok(Self::CarbonFiber),
            "brass" => Ok(Self::Brass),
            "copper" => Ok(Self::Copper),
            other => Err(MaterialError::Unknown(other.to_owned())),
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_table_matches_calibration_values() {
        let expected = [
            (Material::Steel, 200_000.0, 7_850.0),
            (Material::Aluminum, 70_000.0, 2_700.0),
            (Material::Titanium, 116_000.0, 4_500.0),
            (Material::CarbonFiber, 230_000.0, 1_600.0),
            (Material::Brass, 105_000.0, 8_500.0),
            (Material::Copper, 110_000.0, 8_960.0),
        ];
        for (material, youngs_modulus, density) in expected {
            let properties = material.properties();
            assert_eq!(properties.youngs_modulus, youngs_modulus);
            assert_eq!(properties.density, density);
        }
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for material in Material::ALL {
            let parsed: Material = material.key().parse().expect("key resolves");
            assert_eq!(parsed, material);
        }
    }

    #[test]
    fn unknown_keys_are_rejected_not_defaulted() {
        let error = "wood".parse::<Material>().expect_err("unknown key rejected");
        assert_eq!(error, MaterialError::Unknown("wood".to_owned()));
        // Case matters: the form layer sends camelCase keys.
        assert!("CarbonFiber".parse::<Material>().is_err());
        assert!("Steel".parse::<Material>().is_err());
    }

    #[test]
    fn display_uses_the_form_key() {
        assert_eq!(Material::CarbonFiber.to_string(), "carbonFiber");
        assert_eq!(Material::Steel.to_string(), "steel");
    }
}
