//! Rendering of a [`StabilityAnalysis`] for CLI and export consumers.

use std::fmt::Write;

use crate::analysis::StabilityAnalysis;

/// Render a human-readable summary of a stability analysis.
///
/// The report leads with the headline verdict, then walks through the nine
/// aggregated statistics and the per-arm breakdown so an operator can
/// cross-check the numbers against hand calculations.
#[must_use]
pub fn render_summary(analysis: &StabilityAnalysis) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Stability analysis ({} arms, {} tip load = {:.1} N)",
        analysis.records.len(),
        analysis.material,
        analysis.force
    )
    .expect("writing to string cannot fail");

    writeln!(&mut output, "Verdict: {}", analysis.level)
        .expect("writing to string cannot fail");

    let statistics = &analysis.statistics;
    writeln!(
        &mut output,
        "Deflection: min = {:.4e}, median = {:.4e}, max = {:.4e}",
        statistics.min_deflection, statistics.median_deflection, statistics.max_deflection
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Stiffness:  min = {:.4e}, median = {:.4e}, max = {:.4e}",
        statistics.min_stiffness, statistics.median_stiffness, statistics.max_stiffness
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Damping:    min = {:.4e}, median = {:.4e}, max = {:.4e}",
        statistics.min_damping, statistics.median_damping, statistics.max_damping
    )
    .expect("writing to string cannot fail");

    for record in &analysis.records {
        writeln!(
            &mut output,
            "Arm {}: L = {:.3} m, OD = {:.3} m, ID = {:.3} m, t = {:.1} mm, mass = {:.3} kg",
            record.arm_number,
            record.length,
            record.outer_diameter,
            record.inner_diameter,
            record.wall_thickness,
            record.mass
        )
        .expect("writing to string cannot fail");
    }

    output
}

/// Render the JSON payload consumed by the export collaborator.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] when serialization fails, which for this
/// plain value type indicates a bug rather than bad input.
pub fn render_json(analysis: &StabilityAnalysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(analysis)
}
