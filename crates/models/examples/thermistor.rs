//! Compares finite-difference slopes of a thermistor curve with the exact one.
//!
//! ```text
//! cargo run -p numkit-models --example thermistor -- [step_k]
//! ```
//!
//! The step defaults to 1e-5 K. Temperatures run from 250 K to 350 K.

use std::error::Error;

use log::{LevelFilter, info};
use numkit_models::thermistor::{Thermistor, compare_slopes, temperature_sweep};
use numkit_solvers::derivative::{Scheme, StepSize};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let h = match std::env::args().nth(1) {
        Some(text) => StepSize::new(text.parse()?)?,
        None => StepSize::default(),
    };
    info!("step size {} K", h.get());

    let rows = compare_slopes(
        &Thermistor::default(),
        temperature_sweep(250.0, 350.0, 10.0),
        h,
    )?;

    println!("dR/dT (Ω/K) at each temperature, h = {} K\n", h.get());
    print!("{:>5} | {:>10}", "T (K)", "exact");
    for scheme in Scheme::ALL {
        print!(" | {scheme:>10}");
    }
    println!();
    println!("{}", "-".repeat(5 + 13 * 5));
    for row in &rows {
        print!("{:>5.0} | {:>10.2}", row.temperature, row.exact);
        for estimate in row.estimates {
            print!(" | {estimate:>10.2}");
        }
        println!();
    }

    println!("\nRelative error (%)\n");
    print!("{:>5}", "T (K)");
    for scheme in Scheme::ALL {
        print!(" | {scheme:>10}");
    }
    println!();
    for row in &rows {
        print!("{:>5.0}", row.temperature);
        for error in row.relative_errors() {
            print!(" | {:>10.3e}", 100.0 * error);
        }
        println!();
    }

    Ok(())
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
