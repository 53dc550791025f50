use std::error::Error;

use armstat::{analyze, arm, render_json, render_summary, Material};

fn main() -> Result<(), Box<dyn Error>> {
    // Log excluded arms and substituted contributions to stderr; the report
    // itself goes to stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    // Describe the robot: three hollow steel arms of increasing length under
    // a shared 1 kN tip load.
    let arms = [
        arm(0.8, 0.05, 5.0),
        arm(1.0, 0.05, 5.0),
        arm(1.2, 0.06, 6.0),
    ];

    // Aggregate the per-arm mechanics and classify the result.
    let analysis = analyze(&arms, 1_000.0, Material::Steel);

    // Render the human-readable report followed by the export payload.
    println!("{}", render_summary(&analysis));
    println!("{}", render_json(&analysis)?);

    Ok(())
}
