//! Compares fixed-step methods on a problem with a known solution.
//!
//! Solves the configured preset with each selected method, writes the
//! trajectories side by side to a data file, and prints how far each one
//! strays from the exact solution.
//!
//! # Usage
//!
//! ```text
//! cargo run -p odestep-demo
//! cargo run -p odestep-demo -- run.toml
//! cargo run -p odestep-demo --features plot -- run.toml
//! ```
//!
//! Without a config file the decay problem `y' = -2y` is solved with Euler
//! and midpoint over 30 steps. See [`RunConfig`] for the recognized keys.

mod comparison;
mod config;
mod preset;

use std::{error::Error, io};

use comparison::Comparison;
use config::RunConfig;

fn main() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    let spec = config.spec()?;

    let log = config.log_steps.then(io::stderr);
    let comparison = Comparison::run(config.problem, spec, &config.methods, log)?;

    let table = comparison.table()?;
    table.write_file(&config.output, config.format)?;
    println!(
        "{}: wrote {} rows to {}",
        config.problem.equation(),
        table.len(),
        config.output.display(),
    );

    println!();
    print!("{}", comparison.header());
    println!();
    match comparison.summary() {
        Some(summary) => print!("{summary}"),
        None => println!("initial condition overridden; no exact solution to compare against"),
    }

    if config.plot {
        show(&comparison, config.plot_errors)?;
    }
    Ok(())
}

#[cfg(feature = "plot")]
fn show(comparison: &Comparison, errors: bool) -> Result<(), Box<dyn Error>> {
    if errors {
        comparison.show_errors()
    } else {
        comparison.show_solutions()
    }
}

#[cfg(not(feature = "plot"))]
fn show(_comparison: &Comparison, _errors: bool) -> Result<(), Box<dyn Error>> {
    eprintln!("plotting requires the `plot` feature; rebuild with --features plot");
    Ok(())
}
