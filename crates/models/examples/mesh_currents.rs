//! Solves the three-loop mesh circuit with both elimination kernels.
//!
//! ```text
//! cargo run -p numkit-models --example mesh_currents
//! ```
//!
//! Prints the loop currents, the determinant and inverse of the mesh
//! resistance matrix, and the first few elimination steps of each method.

use std::error::Error;

use log::LevelFilter;
use nalgebra::DMatrix;
use numkit_models::mesh::MeshNetwork;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Elimination steps shown per method.
const SHOWN_STEPS: usize = 4;

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let network = MeshNetwork::default();
    let analysis = network.analyze()?;

    for (method, elimination) in [
        ("Gaussian elimination", &analysis.gauss),
        ("Gauss-Jordan", &analysis.gauss_jordan),
    ] {
        println!("\n{method}:");
        for (i, current) in elimination.x.iter().enumerate() {
            println!("  I{} = {current:.2} A", i + 1);
        }
    }

    println!("\nDeterminant: {:.2}", analysis.determinant);
    println!("\nInverse:{}", analysis.inverse);

    show_steps("Gaussian elimination steps", &analysis.gauss.steps);
    show_steps("Gauss-Jordan steps", &analysis.gauss_jordan.steps);

    Ok(())
}

fn show_steps(title: &str, steps: &[DMatrix<f64>]) {
    println!("\n{title} (first {SHOWN_STEPS} of {}):", steps.len());
    for (i, step) in steps.iter().take(SHOWN_STEPS).enumerate() {
        println!("step {}:{step:.3}", i + 1);
    }
}

fn init_logging() {
    let level = std::env::var("NUMKIT_LOG")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    if let Err(err) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("logging disabled: {err}");
    }
}
