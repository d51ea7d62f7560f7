//! Site percolation on square grids, modelled with [disjoint-sets/union-find].
//!
//! The main struct of this crate is [`Percolation`], an n-by-n grid of sites that start
//! closed and are opened one at a time.
//! An open site is *full* when a chain of open neighbors connects it to the top row and the
//! grid *percolates* when an open path connects the top row to the bottom row.
//! `open`, `is_full` and `percolates` are extremely fast and have an amortized complexity of
//! `O(α(n))` where 'α' is the inverse Ackermann function.
//!
//! [`PercolationStats`] uses the grid for a Monte Carlo estimate of the percolation threshold:
//! the fraction of sites that has to be open, at random, before the grid percolates.
//! For large grids this is close to `0.593`.
//!
//! ```
//! use percolation::{ExperimentConfig, PercolationStats};
//!
//! let stats = PercolationStats::with_config(&ExperimentConfig::new(50, 40).seed(2024)).unwrap();
//!
//! assert!(stats.mean() > 0.5 && stats.mean() < 0.7);
//! ```
//!
//! Trials run on the rayon thread pool unless the `rayon` feature is disabled.
//! The `proptest` feature implements `Arbitrary` for [`Percolation`].
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`Percolation`]: struct.Percolation.html
//! [`PercolationStats`]: struct.PercolationStats.html

/// A convenient macro to create a `BitVec` similar to `vec!`.
macro_rules! bit_vec {
    ($element: expr; $len: expr) => {
        bit_vec::BitVec::from_elem($len, $element)
    };
}

pub mod disjoint_sets;
mod error;
pub mod percolation;
pub mod stats;

pub use error::Error;
pub use percolation::Percolation;
pub use stats::{ExperimentConfig, PercolationStats};
