use armstat::{analyze, arm, Material};

fn main() {
    // Create a simple two-arm steel robot
    let arms = [arm(1.0, 0.05, 5.0), arm(1.2, 0.05, 5.0)];

    // Run the full analysis under a 1 kN tip load
    let analysis = analyze(&arms, 1_000.0, Material::Steel);

    // Report the headline verdict and the median triple behind it
    println!("Stability verdict: {}", analysis.level);
    println!(
        "Median stiffness = {:.4e}, deflection = {:.4e}, damping = {:.4e}",
        analysis.statistics.median_stiffness,
        analysis.statistics.median_deflection,
        analysis.statistics.median_damping
    );
}
