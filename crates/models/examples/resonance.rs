//! Finds the resistance that tunes a series RLC circuit to a target frequency.
//!
//! ```text
//! cargo run -p numkit-models --example resonance -- [target_hz] [inductance_h] [capacitance_uf]
//! ```
//!
//! Defaults are 60 Hz, 0.5 H and 10 µF. Set `NUMKIT_LOG=debug` to see every
//! solver iteration.

use std::{error::Error, process::ExitCode};

use log::LevelFilter;
use numkit_models::rlc::{Circuit, ParameterError, ResonantFrequency, TargetFrequency};
use numkit_observers::LogObserver;
use numkit_solvers::equation::{bisection, newton};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Tolerance on both the residual (Hz) and the step or half-width (Ω).
const TOL: f64 = 0.1;

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is::<ParameterError>() => {
            eprintln!("Parameter error: {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Calculation error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let target = arg(1, 60.0)?;
    let inductance = arg(2, 0.5)?;
    let capacitance = arg(3, 10.0)?;

    println!("Circuit parameters:");
    println!("  L = {inductance} H");
    println!("  C = {capacitance} µF");
    println!("  target f = {target} Hz");
    println!("  tolerance = {TOL}");

    let circuit = Circuit::new(inductance, capacitance)?;
    let problem = TargetFrequency::new(circuit, target)?;
    let model = ResonantFrequency(circuit);

    let bracket = problem.bracket();
    println!("\nBisection on [{:.2}, {:.2}] Ω...", bracket[0], bracket[1]);
    let bisected = bisection::solve(
        &model,
        &problem,
        bracket,
        &bisection::Config::new(100, TOL)?,
        LogObserver::default().with_label("bisection"),
    )?;

    // Start above the root, where the concave curve keeps Newton on the
    // near side of the critical resistance.
    let x0 = 0.9 * circuit.critical_resistance();
    println!("Newton-Raphson from R = {x0:.2} Ω...");
    let newton = newton::solve(
        &model,
        &problem,
        x0,
        &newton::Config::new(100, TOL, 1e-10)?.with_domain(newton::Domain::NonNegative),
        LogObserver::default().with_label("newton"),
    )?;

    println!("\nResults:");
    println!("Bisection:");
    println!("  R = {:.4} Ω", bisected.x);
    println!("  iterations: {}", bisected.iters);
    println!("  final frequency: {:.2} Hz", bisected.snapshot.output);
    println!("Newton-Raphson:");
    println!("  R = {:.4} Ω", newton.x);
    println!("  iterations: {}", newton.iters);
    println!("  final frequency: {:.2} Hz", newton.snapshot.output);

    Ok(())
}

fn arg(position: usize, default: f64) -> Result<f64, Box<dyn Error>> {
    match std::env::args().nth(position) {
        Some(text) => Ok(text.parse()?),
        None => Ok(default),
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
