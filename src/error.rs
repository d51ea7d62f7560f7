//! The error returned by the grid and the experiment driver.

use std::fmt;

/// Error type for invalid arguments passed to a [`Percolation`] or [`PercolationStats`].
///
/// Every variant describes an invalid argument, nothing fails after validation.
///
/// [`Percolation`]: struct.Percolation.html
/// [`PercolationStats`]: struct.PercolationStats.html
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The grid size has to be at least 1.
    InvalidSize(usize),
    /// The number of trials has to be at least 1.
    InvalidTrials(usize),
    /// Rows and columns are 1-based and may not exceed the grid size.
    SiteOutOfBounds {
        row: usize,
        col: usize,
        size: usize,
    },
}

impl Error {
    /// Returns `true` for every error, they all reject an argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::Percolation;
    ///
    /// let error = Percolation::new(0).unwrap_err();
    /// assert!(error.is_invalid_argument());
    /// ```
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::InvalidSize(_)
            | Error::InvalidTrials(_)
            | Error::SiteOutOfBounds { .. } => true,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSize(size) => {
                write!(f, "invalid argument: grid size must be positive, got {}", size)
            },
            Error::InvalidTrials(trials) => {
                write!(f, "invalid argument: trial count must be positive, got {}", trials)
            },
            Error::SiteOutOfBounds { row, col, size } => write!(
                f,
                "invalid argument: site ({}, {}) is outside the {}-by-{} grid",
                row, col, size, size,
            ),
        }
    }
}

impl std::error::Error for Error {}
