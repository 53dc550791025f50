//! Population reductions and the nine-field statistics record.

use serde::Serialize;

/// Aggregated stiffness/damping/deflection statistics for one robot.
///
/// Nine fields: `{min, median, max}` for each of deflection, stiffness and
/// damping. Immutable after construction and owned by the caller; the
/// presentation and export layers consume it as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct SddStatistics {
    /// Smallest combined deflection.
    pub min_deflection: f64,
    /// Lower-median-pair average of the combined deflections.
    pub median_deflection: f64,
    /// Largest combined deflection.
    pub max_deflection: f64,
    /// Smallest stiffness sample.
    pub min_stiffness: f64,
    /// Lower-median-pair average of the stiffness samples.
    pub median_stiffness: f64,
    /// Largest stiffness sample.
    pub max_stiffness: f64,
    /// Smallest damping ratio.
    pub min_damping: f64,
    /// Lower-median-pair average of the damping ratios.
    pub median_damping: f64,
    /// Largest damping ratio.
    pub max_damping: f64,
}

impl SddStatistics {
    /// The all-zero record returned when no arm passes validation.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            min_deflection: 0.0,
            median_deflection: 0.0,
            max_deflection: 0.0,
            min_stiffness: 0.0,
            median_stiffness: 0.0,
            max_stiffness: 0.0,
            min_damping: 0.0,
            median_damping: 0.0,
            max_damping: 0.0,
        }
    }
}

/// Reduction of one sorted population to its (min, median, max) triple.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PopulationSummary {
    /// First element of the sorted population, or zero when empty.
    pub min: f64,
    /// Lower-median-pair average, the sole element, or zero when empty.
    pub median: f64,
    /// Last element of the sorted population, or zero when empty.
    pub max: f64,
}

/// Sort a population ascending and reduce it to (min, median, max).
///
/// The median is the average of elements `n/2 - 1` and `n/2` for every
/// population larger than one, including odd sizes. This lower-median-pair
/// rule is not the textbook median for odd counts, but the classification
/// thresholds downstream were calibrated against it, so it is preserved
/// verbatim.
///
/// # Examples
/// ```
/// use armstat::population_summary;
///
/// let summary = population_summary(vec![4.0, 1.0, 3.0, 2.0]);
/// assert_eq!(summary.min, 1.0);
/// assert_eq!(summary.median, 2.5);
/// assert_eq!(summary.max, 4.0);
/// ```
#[must_use]
pub fn population_summary(mut population: Vec<f64>) -> PopulationSummary {
    population.sort_by(f64::total_cmp);
    match population.len() {
        0 => PopulationSummary::default(),
        1 => PopulationSummary {
            min: population[0],
            median: population[0],
            max: population[0],
        },
        n => PopulationSummary {
            min: population[0],
            median: (population[n / 2 - 1] + population[n / 2]) / 2.0,
            max: population[n - 1],
        },
    }
}
