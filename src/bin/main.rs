//! Estimates the percolation threshold of an n-by-n grid from t random trials.
//!
//! ```bash
//! percolation-stats 200 100
//! mean                    = 0.5929934999999997
//! stddev                  = 0.00876990421552567
//! 95% confidence interval = 0.5912745987737567, 0.5947124012262428
//! ```

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use percolation::{ExperimentConfig, PercolationStats};

#[derive(Parser, Debug)]
#[command(name = "percolation-stats")]
#[command(version)]
#[command(about = "Monte Carlo estimate of the site percolation threshold")]
struct Args {
    /// Number of rows and columns of the grid
    n: usize,

    /// Number of independent trials
    t: usize,

    /// Seed of the experiment, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Run the trials one after another on the main thread
    #[arg(long)]
    sequential: bool,

    /// Log the experiment at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(log_level(args.verbose))
        .parse_default_env()
        .init();

    let mut config = ExperimentConfig::new(args.n, args.t).parallel(!args.sequential);
    if let Some(seed) = args.seed {
        config = config.seed(seed);
    }

    info!("starting {} trials on a {}-by-{} grid", args.t, args.n, args.n);
    let start = Instant::now();

    let stats = PercolationStats::with_config(&config)
        .with_context(|| format!("could not run {} trials on a {}-by-{} grid", args.t, args.n, args.n))?;

    info!("finished in {:.3?}", start.elapsed());

    print!("{}", report(&stats));

    Ok(())
}

fn log_level(verbose: bool) -> LevelFilter {
    if verbose { LevelFilter::Debug } else { LevelFilter::Warn }
}

/// The three summary lines, each ending in a newline.
fn report(stats: &PercolationStats) -> String {
    format!(
        "mean                    = {}\nstddev                  = {}\n95% confidence interval = {}, {}\n",
        stats.mean(),
        stats.stddev(),
        stats.confidence_lo(),
        stats.confidence_hi(),
    )
}
