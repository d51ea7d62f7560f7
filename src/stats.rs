//! Monte Carlo estimation of the percolation threshold.
//!
//! See [`PercolationStats`] for more information.
//!
//! [`PercolationStats`]: struct.PercolationStats.html

use {
    log::{debug, trace},
    rand::{Rng, SeedableRng},
    rand_chacha::ChaCha8Rng,
    crate::{
        error::Error,
        percolation::Percolation,
    },
};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// The z-score of a two-sided 95% confidence interval.
const CONFIDENCE_95: f64 = 1.96;

/// How a [`PercolationStats`] experiment is run.
///
/// # Examples
///
/// ```
/// use percolation::{ExperimentConfig, PercolationStats};
///
/// let config = ExperimentConfig::new(10, 5).seed(7).parallel(false);
/// let first = PercolationStats::with_config(&config).unwrap();
/// let second = PercolationStats::with_config(&config).unwrap();
///
/// assert!(first.thresholds() == second.thresholds());
/// ```
///
/// [`PercolationStats`]: struct.PercolationStats.html
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// The number of rows and columns of every grid.
    pub size: usize,
    /// The number of independent trials.
    pub trials: usize,
    /// The seed of the experiment, trial `k` reads stream `k` of a generator with this seed.
    /// A random seed is drawn when this is `None`.
    pub seed: Option<u64>,
    /// Whether trials run on the rayon thread pool.
    /// This has no effect without the `rayon` feature.
    pub parallel: bool,
}

impl ExperimentConfig {
    /// An unseeded, parallel experiment of `trials` grids of `size` by `size` sites.
    pub fn new(size: usize, trials: usize) -> Self {
        Self {
            size,
            trials,
            seed: None,
            parallel: true,
        }
    }

    /// Sets the seed of the experiment.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets whether the trials run in parallel.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for ExperimentConfig {
    /// 100 trials on a 200-by-200 grid.
    fn default() -> Self {
        Self::new(200, 100)
    }
}

/// The outcome of `t` independent percolation trials on n-by-n grids.
///
/// Each trial opens uniformly random closed sites of a fresh [`Percolation`] until it
/// percolates and records the fraction of open sites, an estimate of the percolation
/// threshold. The estimates are summarized by their sample mean, sample standard deviation,
/// and a 95% confidence interval for the mean.
///
/// A random site that is already open is drawn again without being counted, which
/// makes every closed site equally likely to be opened next.
///
/// # Examples
///
/// ```
/// use percolation::PercolationStats;
///
/// let stats = PercolationStats::new(20, 30).unwrap();
///
/// assert!(stats.trials() == 30);
/// assert!(stats.thresholds().iter().all(|&x| 0.0 < x && x <= 1.0));
/// assert!(stats.confidence_lo() <= stats.mean());
/// assert!(stats.mean() <= stats.confidence_hi());
/// ```
///
/// [`Percolation`]: struct.Percolation.html
#[derive(Clone, Debug, PartialEq)]
pub struct PercolationStats {
    size: usize,
    /// The fraction of open sites at the moment each trial percolated.
    thresholds: Box<[f64]>,
}

impl PercolationStats {
    /// Runs `trials` independent trials on `size`-by-`size` grids with a random seed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if `size` is zero and [`Error::InvalidTrials`] if
    /// `trials` is zero.
    ///
    /// [`Error::InvalidSize`]: enum.Error.html#variant.InvalidSize
    /// [`Error::InvalidTrials`]: enum.Error.html#variant.InvalidTrials
    pub fn new(size: usize, trials: usize) -> Result<Self, Error> {
        Self::with_config(&ExperimentConfig::new(size, trials))
    }

    /// Runs the experiment described by `config`.
    ///
    /// Trial `k` draws its sites from stream `k` of a `ChaCha8Rng` seeded with `seed`, so a seeded
    /// experiment gives the same thresholds whether or not it runs in parallel.
    ///
    /// # Errors
    ///
    /// The same as [`new`](#method.new).
    pub fn with_config(config: &ExperimentConfig) -> Result<Self, Error> {
        if config.size == 0 {
            return Err(Error::InvalidSize(config.size))
        }
        if config.trials == 0 {
            return Err(Error::InvalidTrials(config.trials))
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        debug!(
            "running {} trials on a {}-by-{} grid (seed {}, parallel {})",
            config.trials, config.size, config.size, seed, config.parallel,
        );

        let thresholds = run_trials(config.size, config.trials, seed, config.parallel)?;

        let stats = Self {
            size: config.size,
            thresholds: thresholds.into_boxed_slice(),
        };
        debug!("mean threshold {} with standard deviation {}", stats.mean(), stats.stddev());

        Ok(stats)
    }

    /// Returns the number of rows and columns of the grids.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of trials.
    #[inline]
    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Returns the threshold estimate of every trial in trial order.
    #[inline]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        mean(&self.thresholds)
    }

    /// Sample standard deviation of the percolation threshold.
    ///
    /// This is `NaN` for a single trial.
    pub fn stddev(&self) -> f64 {
        stddev(&self.thresholds)
    }

    /// Lower bound of the 95% confidence interval, `NaN` for a single trial.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    /// Upper bound of the 95% confidence interval, `NaN` for a single trial.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }
}

/// Returns the mean of `values`, `NaN` if it is empty.
///
/// # Examples
///
/// ```
/// assert!(percolation::stats::mean(&[1.0, 2.0, 6.0]) == 3.0);
/// assert!(percolation::stats::mean(&[]).is_nan());
/// ```
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Returns the sample standard deviation of `values`, dividing by `len - 1`.
///
/// With fewer than two values this is `NaN`.
///
/// # Examples
///
/// ```
/// assert!(percolation::stats::stddev(&[2.0, 4.0, 6.0]) == 2.0);
/// assert!(percolation::stats::stddev(&[0.5]).is_nan());
/// ```
pub fn stddev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN
    }

    let mean = mean(values);
    let squares: f64 = values.iter().map(|value| (value - mean) * (value - mean)).sum();

    (squares / (values.len() - 1) as f64).sqrt()
}

#[cfg(feature = "rayon")]
fn run_trials(size: usize, trials: usize, seed: u64, parallel: bool) -> Result<Vec<f64>, Error> {
    if parallel {
        (0 .. trials).into_par_iter().map(|trial| seeded_trial(size, seed, trial)).collect()
    } else {
        (0 .. trials).map(|trial| seeded_trial(size, seed, trial)).collect()
    }
}

#[cfg(not(feature = "rayon"))]
fn run_trials(size: usize, trials: usize, seed: u64, _parallel: bool) -> Result<Vec<f64>, Error> {
    (0 .. trials).map(|trial| seeded_trial(size, seed, trial)).collect()
}

/// The generator of trial number `trial`, independent of every other trial and seed.
fn trial_rng(seed: u64, trial: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(trial as u64);
    rng
}

/// Runs trial number `trial` with its own generator.
fn seeded_trial(size: usize, seed: u64, trial: usize) -> Result<f64, Error> {
    let mut rng = trial_rng(seed, trial);
    let threshold = run_trial(size, &mut rng)?;
    trace!("trial {} percolated at threshold {}", trial, threshold);

    Ok(threshold)
}

/// Opens random sites of a fresh grid until it percolates and returns the open fraction.
fn run_trial<R: Rng>(size: usize, rng: &mut R) -> Result<f64, Error> {
    let mut grid = Percolation::new(size)?;

    while !grid.percolates() {
        let row = rng.gen_range(1 ..= size);
        let col = rng.gen_range(1 ..= size);

        if grid.is_open(row, col)? {
            continue
        }

        grid.open(row, col)?;
    }

    Ok(grid.open_sites() as f64 / (size * size) as f64)
}
