//! Contains the implementation of the [disjoint-sets/union-find] used by the grid.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure

mod forest;
mod metadata;

pub use self::forest::DisjointSets;
