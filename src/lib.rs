#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod aggregate;
mod analysis;
mod beam;
mod classify;
mod errors;
mod geometry;
mod materials;
mod records;
mod report;
mod statistics;

pub use aggregate::{aggregate, aggregate_for_material, collect_deflections, DeflectionPass};
pub use analysis::{analyze, StabilityAnalysis};
pub use beam::{evaluate_arm, ArmResponse, ModulusBand};
pub use classify::{classify, StabilityLevel};
pub use errors::MaterialError;
pub use geometry::{arm, arms_from_slots, ArmSpec};
pub use materials::{Material, MaterialProperties};
pub use records::{build_records, ArmRecord};
pub use report::{render_json, render_summary};
pub use statistics::{population_summary, PopulationSummary, SddStatistics};
