use std::collections::VecDeque;

use proptest::prelude::*;

use percolation::{Error, Percolation};

/// Opens `sites` in order on a fresh grid.
fn grid_with(size: usize, sites: &[(usize, usize)]) -> Percolation {
    let mut grid = Percolation::new(size).unwrap();
    for &(row, col) in sites {
        grid.open(row, col).unwrap();
    }
    grid
}

/// A grid size together with a sequence of sites inside it, repeats allowed.
fn sites_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize ..= 10).prop_flat_map(|size| {
        let sites = proptest::collection::vec((1 ..= size, 1 ..= size), 0 ..= 2 * size * size);
        (Just(size), sites)
    })
}

/// Marks every open site reachable from an open top-row site, by breadth-first search.
fn reachable_from_top(grid: &Percolation) -> Vec<Vec<bool>> {
    let size = grid.size();
    let mut seen = vec![vec![false; size + 1]; size + 1];
    let mut queue = VecDeque::<(usize, usize)>::new();

    for col in 1 ..= size {
        if grid.is_open(1, col).unwrap() {
            seen[1][col] = true;
            queue.push_back((1, col));
        }
    }

    while let Some((row, col)) = queue.pop_front() {
        let neighbors = [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ];

        for (next_row, next_col) in neighbors {
            if (1 ..= size).contains(&next_row)
                && (1 ..= size).contains(&next_col)
                && !seen[next_row][next_col]
                && grid.is_open(next_row, next_col).unwrap()
            {
                seen[next_row][next_col] = true;
                queue.push_back((next_row, next_col));
            }
        }
    }

    seen
}

#[test]
fn single_site_grid() {
    let mut grid = Percolation::new(1).unwrap();
    assert!(!grid.percolates());
    assert!(!grid.is_full(1, 1).unwrap());

    grid.open(1, 1).unwrap();
    assert!(grid.percolates());
    assert!(grid.is_full(1, 1).unwrap());
}

#[test]
fn two_by_two_grid_with_one_open_column() {
    let grid = grid_with(2, &[(1, 1), (2, 1)]);

    assert!(grid.percolates());
    assert!(grid.is_full(1, 1).unwrap());
    assert!(grid.is_full(2, 1).unwrap());
    assert!(!grid.is_full(2, 2).unwrap());
    assert!(!grid.is_full(1, 2).unwrap());
    assert!(!grid.is_open(1, 2).unwrap());
    assert_eq!(grid.open_sites(), 2);
}

#[test]
fn open_bottom_row_is_not_full_without_a_path_to_the_top() {
    let grid = grid_with(3, &[(1, 1), (3, 1), (3, 2), (3, 3)]);

    assert!(!grid.percolates());
    assert!(grid.is_full(1, 1).unwrap());
    for col in 1 ..= 3 {
        assert!(grid.is_open(3, col).unwrap());
        assert!(!grid.is_full(3, col).unwrap());
    }
}

#[test]
fn percolating_grid_does_not_backwash() {
    // Column 1 percolates, the bottom-right site only touches the bottom row.
    let grid = grid_with(3, &[(1, 1), (2, 1), (3, 1), (3, 3)]);

    assert!(grid.percolates());
    assert!(grid.is_full(3, 1).unwrap());
    assert!(grid.is_open(3, 3).unwrap());
    assert!(!grid.is_full(3, 3).unwrap());
}

#[test]
fn open_bottom_row_does_not_fill_isolated_sites_after_percolating() {
    let mut sites = vec![(1, 1), (2, 1), (3, 1), (2, 3)];
    sites.extend((1 ..= 4).map(|col| (4, col)));
    let grid = grid_with(4, &sites);

    assert!(grid.percolates());
    for col in 1 ..= 4 {
        assert!(grid.is_full(4, col).unwrap());
    }
    assert!(grid.is_open(2, 3).unwrap());
    assert!(!grid.is_full(2, 3).unwrap());
}

#[test]
fn diagonal_sites_are_not_connected() {
    let grid = grid_with(2, &[(1, 1), (2, 2)]);

    assert!(!grid.percolates());
    assert!(!grid.is_full(2, 2).unwrap());
}

#[test]
fn invalid_arguments_are_rejected() {
    assert_eq!(Percolation::new(0), Err(Error::InvalidSize(0)));

    let mut grid = Percolation::new(3).unwrap();
    let out_of_bounds = [(0, 1), (1, 0), (4, 1), (1, 4)];

    for &(row, col) in &out_of_bounds {
        let expected = Err(Error::SiteOutOfBounds { row, col, size: 3 });

        assert_eq!(grid.is_full(row, col), expected);
        assert_eq!(grid.is_open(row, col), expected);
        assert_eq!(grid.open(row, col).map(|_| false), expected);
    }

    assert!(grid.is_full(0, 1).unwrap_err().is_invalid_argument());
    assert_eq!(grid, Percolation::new(3).unwrap());
}

#[test]
fn error_messages_name_the_argument() {
    assert_eq!(
        Error::SiteOutOfBounds { row: 0, col: 2, size: 5 }.to_string(),
        "invalid argument: site (0, 2) is outside the 5-by-5 grid",
    );
    assert_eq!(
        Error::InvalidSize(0).to_string(),
        "invalid argument: grid size must be positive, got 0",
    );
}

proptest! {
    #[test]
    fn fresh_grid_is_closed(size in 1usize ..= 30) {
        let grid = Percolation::new(size).unwrap();

        prop_assert!(!grid.percolates());
        prop_assert_eq!(grid.open_sites(), 0);
        for row in 1 ..= size {
            for col in 1 ..= size {
                prop_assert!(!grid.is_open(row, col).unwrap());
                prop_assert!(!grid.is_full(row, col).unwrap());
            }
        }
    }

    #[test]
    fn opening_twice_is_opening_once((size, sites) in sites_strategy()) {
        let once = grid_with(size, &sites);

        let mut twice = Percolation::new(size).unwrap();
        for &(row, col) in &sites {
            twice.open(row, col).unwrap();
            twice.open(row, col).unwrap();
        }

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.percolates(), twice.percolates());
    }

    #[test]
    fn percolation_is_monotone((size, sites) in sites_strategy()) {
        let mut grid = Percolation::new(size).unwrap();
        let mut percolated = false;

        for &(row, col) in &sites {
            grid.open(row, col).unwrap();

            if percolated {
                prop_assert!(grid.percolates());
            }
            percolated = grid.percolates();
        }
    }

    #[test]
    fn full_sites_are_reachable_from_the_top((size, sites) in sites_strategy()) {
        let grid = grid_with(size, &sites);
        let reachable = reachable_from_top(&grid);

        for row in 1 ..= size {
            for col in 1 ..= size {
                let full = grid.is_full(row, col).unwrap();

                prop_assert_eq!(full, reachable[row][col], "site ({}, {})\n{}", row, col, grid);
                if !grid.is_open(row, col).unwrap() {
                    prop_assert!(!full);
                }
            }
        }

        let bottom_reached = (1 ..= size).any(|col| reachable[size][col]);
        prop_assert_eq!(grid.percolates(), bottom_reached);
    }

    #[test]
    fn open_sites_counts_distinct_sites((size, sites) in sites_strategy()) {
        let grid = grid_with(size, &sites);

        let mut distinct = sites.clone();
        distinct.sort_unstable();
        distinct.dedup();

        prop_assert_eq!(grid.open_sites(), distinct.len());
    }
}

#[cfg(feature = "proptest")]
proptest! {
    #[test]
    fn arbitrary_grids_are_consistent(grid in any::<Percolation>()) {
        let size = grid.size();
        let reachable = reachable_from_top(&grid);

        let mut open = 0;
        for row in 1 ..= size {
            for col in 1 ..= size {
                if grid.is_open(row, col).unwrap() {
                    open += 1;
                }
                prop_assert_eq!(grid.is_full(row, col).unwrap(), reachable[row][col]);
            }
        }

        prop_assert_eq!(grid.open_sites(), open);
        prop_assert_eq!(grid.percolates(), (1 ..= size).any(|col| reachable[size][col]));
    }
}
