//! An n-by-n grid of sites that are opened one at a time.
//!
//! See [`Percolation`] for more information.
//!
//! [`Percolation`]: struct.Percolation.html

use {
    std::fmt,
    bit_vec::BitVec,
    crate::{
        disjoint_sets::DisjointSets,
        error::Error,
    },
};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// The index of the virtual site above the top row, in both forests.
const TOP: usize = 0;

/// An n-by-n grid of sites that start closed and can be opened one at a time.
///
/// Rows and columns are 1-based. A site is *full* when a chain of open neighboring sites
/// connects it to the top row, and the grid *percolates* when a full site exists in the
/// bottom row.
///
/// Connectivity is kept in two [disjoint-sets/union-find] forests whose element `0`
/// is a virtual site above the top row and whose elements `1 ..= n²` are the sites
/// (site `(i, j)` has index `(i - 1) * n + j`):
///
/// - `full` answers `is_full` and has no other virtual sites.
/// - `percolation` answers `percolates` and has an extra virtual site `n² + 1` below the
///   bottom row.
///
/// If `full` had the virtual bottom site every open bottom-row site would be connected
/// to the top as soon as the grid percolates, even when it is not reachable through open
/// sites. Keeping the bottom site out of `full` avoids this backwash.
///
/// # Examples
///
/// ```
/// use percolation::Percolation;
///
/// let mut grid = Percolation::new(3).unwrap();
/// grid.open(1, 2).unwrap();
/// grid.open(2, 2).unwrap();
/// assert!(grid.is_full(2, 2).unwrap());
/// assert!(!grid.percolates());
///
/// grid.open(3, 2).unwrap();
/// assert!(grid.percolates());
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Percolation {
    /// The number of rows and of columns.
    size: usize,
    /// Whether a site is open, indexed by its forest index minus one.
    open: BitVec,
    /// The number of bits set in `open`.
    open_sites: usize,
    /// Connectivity of the sites and the virtual top site.
    full: DisjointSets,
    /// Connectivity of the sites, the virtual top site and the virtual bottom site.
    percolation: DisjointSets,
}

impl Percolation {
    /// Creates an n-by-n grid with all sites closed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if `size` is zero or `size * size + 2` overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::{Error, Percolation};
    ///
    /// let grid = Percolation::new(4).unwrap();
    /// assert!(grid.size() == 4);
    /// assert!(grid.open_sites() == 0);
    /// assert!(!grid.percolates());
    ///
    /// assert!(Percolation::new(0) == Err(Error::InvalidSize(0)));
    /// ```
    ///
    /// [`Error::InvalidSize`]: enum.Error.html#variant.InvalidSize
    pub fn new(size: usize) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::InvalidSize(size))
        }

        // Two extra indices are needed for the virtual sites.
        let sites = size
            .checked_mul(size)
            .filter(|sites| sites.checked_add(2).is_some())
            .ok_or(Error::InvalidSize(size))?;

        Ok(Self::closed(size, sites))
    }

    /// Creates a grid of `sites == size * size` closed sites without validating the size.
    fn closed(size: usize, sites: usize) -> Self {
        Self {
            size,
            open: bit_vec![false; sites],
            open_sites: 0,
            full: DisjointSets::new(sites + 1),
            percolation: DisjointSets::new(sites + 2),
        }
    }

    /// Returns the number of rows, which is also the number of columns.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of open sites.
    #[inline]
    pub fn open_sites(&self) -> usize {
        self.open_sites
    }

    /// Opens the site at (`row`, `col`) if it is not open already.
    ///
    /// The site is joined with the open sites directly above, below, left, and right of it.
    /// A site in the top row is joined with the virtual top site in both forests,
    /// a site in the bottom row is joined with the virtual bottom site in the
    /// `percolation` forest only.
    /// Opening an open site changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SiteOutOfBounds`] unless `1 <= row <= n` and `1 <= col <= n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::Percolation;
    ///
    /// let mut grid = Percolation::new(2).unwrap();
    /// grid.open(1, 1).unwrap();
    /// grid.open(1, 1).unwrap();
    ///
    /// assert!(grid.is_open(1, 1).unwrap());
    /// assert!(grid.open_sites() == 1);
    /// assert!(grid.open(3, 1).is_err());
    /// ```
    ///
    /// [`Error::SiteOutOfBounds`]: enum.Error.html#variant.SiteOutOfBounds
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), Error> {
        self.check(row, col)?;
        self.open_unchecked(row, col);

        Ok(())
    }

    /// Returns `true` if the site at (`row`, `col`) is open.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SiteOutOfBounds`] unless `1 <= row <= n` and `1 <= col <= n`.
    ///
    /// [`Error::SiteOutOfBounds`]: enum.Error.html#variant.SiteOutOfBounds
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, Error> {
        self.check(row, col)?;

        Ok(self.is_open_unchecked(row, col))
    }

    /// Returns `true` if the site at (`row`, `col`) is connected to the top row
    /// through open sites.
    ///
    /// A closed site is never full.
    /// This is answered by the `full` forest so it does not change when the grid percolates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SiteOutOfBounds`] unless `1 <= row <= n` and `1 <= col <= n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::Percolation;
    ///
    /// let mut grid = Percolation::new(2).unwrap();
    /// grid.open(1, 1).unwrap();
    /// grid.open(2, 1).unwrap();
    /// // Full through its open neighbor on the left.
    /// grid.open(2, 2).unwrap();
    /// assert!(grid.is_full(2, 2).unwrap());
    ///
    /// assert!(!grid.is_full(1, 2).unwrap());
    /// assert!(grid.is_full(0, 1).is_err());
    /// ```
    ///
    /// [`Error::SiteOutOfBounds`]: enum.Error.html#variant.SiteOutOfBounds
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool, Error> {
        self.check(row, col)?;

        Ok(self.is_full_unchecked(row, col))
    }

    /// Returns `true` if an open path connects the top row to the bottom row.
    ///
    /// Once this returns `true` it keeps doing so, sites are never closed again.
    #[inline]
    pub fn percolates(&self) -> bool {
        self.percolation.same_set(TOP, self.bottom())
    }

    fn check(&self, row: usize, col: usize) -> Result<(), Error> {
        if (1 ..= self.size).contains(&row) && (1 ..= self.size).contains(&col) {
            Ok(())
        } else {
            Err(Error::SiteOutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    /// The forest index of the site at (`row`, `col`).
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.size + col
    }

    /// The forest index of the virtual site below the bottom row.
    #[inline]
    fn bottom(&self) -> usize {
        self.size * self.size + 1
    }

    #[inline]
    fn is_open_unchecked(&self, row: usize, col: usize) -> bool {
        self.open.get(self.index(row, col) - 1).unwrap_or(false)
    }

    #[inline]
    fn is_full_unchecked(&self, row: usize, col: usize) -> bool {
        self.full.same_set(TOP, self.index(row, col))
    }

    /// Opens a site the caller has checked to be inside the grid.
    fn open_unchecked(&mut self, row: usize, col: usize) {
        if self.is_open_unchecked(row, col) {
            return
        }

        let index = self.index(row, col);
        self.open.set(index - 1, true);
        self.open_sites += 1;

        if row == 1 {
            self.join(TOP, index);
        } else if self.is_open_unchecked(row - 1, col) {
            let above = self.index(row - 1, col);
            self.join(index, above);
        }

        if row == self.size {
            // Only `percolation` knows about the bottom site.
            let bottom = self.bottom();
            self.percolation.union(index, bottom);
        } else if self.is_open_unchecked(row + 1, col) {
            let below = self.index(row + 1, col);
            self.join(index, below);
        }

        if col > 1 && self.is_open_unchecked(row, col - 1) {
            self.join(index, index - 1);
        }

        if col < self.size && self.is_open_unchecked(row, col + 1) {
            self.join(index, index + 1);
        }
    }

    /// Joins two indices in both forests.
    #[inline]
    fn join(&mut self, first_index: usize, second_index: usize) {
        self.full.union(first_index, second_index);
        self.percolation.union(first_index, second_index);
    }
}

impl fmt::Display for Percolation {
    /// Draws one line per row, `#` for a closed site, `.` for an open site and `~` for a
    /// full site.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 1 ..= self.size {
            for col in 1 ..= self.size {
                let symbol = if !self.is_open_unchecked(row, col) {
                    '#'
                } else if self.is_full_unchecked(row, col) {
                    '~'
                } else {
                    '.'
                };

                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for Percolation {
    /// The largest size of the generated grids.
    type Parameters = usize;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(max_size: Self::Parameters) -> Self::Strategy {
        // A zero parameter is the default and stands for small grids.
        let max_size = if max_size == 0 { 8 } else { max_size };

        (1 ..= max_size).prop_flat_map(|size| {
            let sites = size * size;

            proptest::collection::vec((1 ..= size, 1 ..= size), 0 ..= sites).prop_map(move |opened| {
                let mut grid = Self::closed(size, sites);

                for (row, col) in opened {
                    grid.open_unchecked(row, col);
                }

                grid
            })
        }).boxed()
    }
}
