//! Interactive visualizations of numkit solvers.
//!
//! Each mode solves a small problem and opens a plot window showing what the
//! solver did.
//!
//! # Usage
//!
//! ```text
//! cargo run -p numkit-observers --example plot --features plot -- bisect
//! cargo run -p numkit-observers --example plot --features plot -- newton
//! cargo run -p numkit-observers --example plot --features plot -- newton 3.0
//! cargo run -p numkit-observers --example plot --features plot -- derivative
//! ```
//!
//! # Modes
//!
//! - **bisect** — Find the Dottie number (the fixed point of cos x) on
//!   \[0, 2\]. The residual magnitude halves on average each iteration.
//!
//! - **newton [x0]** — Find the same root with Newton-Raphson from `x0`
//!   (default `1.0`). The residual collapses quadratically once close.
//!
//! - **derivative** — Relative error of each finite-difference scheme for
//!   d/dx exp(x) at x = 1 over step sizes from 1 to 1e-12. Truncation error
//!   falls with the scheme's order until round-off takes over.

use std::error::Error;

use numkit_core::{Function, Root, RootWithDerivative};
use numkit_observers::{PlotObserver, ShowConfig};
use numkit_solvers::{
    derivative::{Scheme, StepSize, relative_error},
    equation::{bisection, newton},
};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "bisect".into());
    match mode.as_str() {
        "bisect" => bisect(),
        "newton" => {
            let x0 = std::env::args()
                .nth(2)
                .map(|text| text.parse::<f64>())
                .transpose()?
                .unwrap_or(1.0);
            newton_raphson(x0)
        }
        "derivative" => derivative(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [bisect|newton [x0]|derivative]");
            std::process::exit(1);
        }
    }
}

fn bisect() -> Result<(), Box<dyn Error>> {
    let mut obs = PlotObserver::<2>::new(["x", "|residual|"]);

    let solution = bisection::solve(
        &Function(|x: f64| x.cos() - x),
        &Root,
        [0.0, 2.0],
        &bisection::Config::new(100, 1e-12)?,
        &mut obs,
    )?;

    obs.show(
        ShowConfig::new()
            .title(format!(
                "Bisection: cos(x) = x  →  x ≈ {:.6} after {} halvings",
                solution.x, solution.iters
            ))
            .legend()
            .log_y(),
    )?;

    Ok(())
}

fn newton_raphson(x0: f64) -> Result<(), Box<dyn Error>> {
    let mut obs = PlotObserver::<2>::new(["x", "|residual|"]);

    let solution = newton::solve(
        &Function(|x: f64| x.cos() - x),
        &RootWithDerivative(|x: f64| -x.sin() - 1.0),
        x0,
        &newton::Config::new(100, 1e-14, 1e-12)?,
        &mut obs,
    )?;

    obs.show(
        ShowConfig::new()
            .title(format!(
                "Newton-Raphson from x0 = {x0}  →  x ≈ {:.12} after {} steps",
                solution.x, solution.iters
            ))
            .legend()
            .log_y()
            .markers(),
    )?;

    Ok(())
}

fn derivative() -> Result<(), Box<dyn Error>> {
    let model = Function(f64::exp);
    let exact = 1.0_f64.exp();
    let mut obs = PlotObserver::<4>::new(Scheme::ALL.map(Scheme::name));

    for i in 0..=48 {
        let log_h = -f64::from(i) / 4.0;
        let h = StepSize::new(10.0_f64.powf(log_h))?;
        let errors = Scheme::ALL.map(|scheme| {
            scheme
                .estimate(&model, 1.0, h)
                .ok()
                .map(|estimate| relative_error(estimate, exact))
        });
        obs.record(log_h, errors);
    }

    obs.show(
        ShowConfig::new()
            .title("d/dx exp(x) at x = 1: relative error against log₁₀(h)")
            .legend()
            .log_y(),
    )?;

    Ok(())
}
