use armstat::{analyze, arm, Material};

fn main() {
    // Fix the geometry and survey how the verdict shifts with material choice
    let arms = [arm(0.8, 0.05, 5.0), arm(1.0, 0.05, 5.0), arm(1.2, 0.06, 6.0)];

    for material in Material::ALL {
        let analysis = analyze(&arms, 1_000.0, material);
        println!(
            "{:<12} verdict = {:<6} median deflection = {:.4e}",
            material.to_string(),
            analysis.level.to_string(),
            analysis.statistics.median_deflection
        );
    }
}
