#![forbid(unsafe_code)]

use std::time::Instant;

use clap::Parser;
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use percolation::PercolationStats;

/// Estimates the percolation threshold of an n-by-n grid by Monte Carlo
/// simulation.
#[derive(Parser)]
struct Args {
    /// Grid dimension
    n: usize,
    /// Number of independent experiments to run
    trials: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let args = Args::parse();

    let started = Instant::now();
    let stats = PercolationStats::run(args.n, args.trials)?;
    info!(
        "{} trials on a {}x{} grid took {:.3} seconds",
        args.trials,
        args.n,
        args.n,
        started.elapsed().as_secs_f64()
    );

    println!("mean                    = {:.6}", stats.mean());
    println!("stddev                  = {:.6}", stats.stddev());
    println!(
        "95% confidence interval = [{:.6}, {:.6}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    );

    Ok(())
}
