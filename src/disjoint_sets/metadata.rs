use std::cell::Cell;

/// This provides additional information about a given element in the `DisjointSets`.
///
/// For each element in the `DisjointSets` we store a `Metadata`.
#[derive(Clone, Debug)]
pub(crate) struct Metadata {
    /// The parent of the element in its sets tree.
    /// These form an upside down tree where each child has the index of its parent.
    /// This is a `Cell` so queries can compress paths through a shared reference.
    parent: Cell<usize>,
    /// A maximum to the height of the tree of the set.
    rank: usize,
}

impl Metadata {
    /// Create a new `Metadata` for an element with the given index.
    pub(crate) fn new(index: usize) -> Self {
        Self {
            parent: Cell::new(index),
            rank: 0,
        }
    }

    /// Return the `parent` variable.
    pub(crate) fn parent(&self) -> usize {
        self.parent.get()
    }

    /// Set the `parent` variable.
    pub(crate) fn set_parent(&self, value: usize) {
        self.parent.set(value);
    }

    /// Return the `rank` variable.
    pub(crate) fn rank(&self) -> usize {
        self.rank
    }

    /// Set the `rank` variable.
    pub(crate) fn set_rank(&mut self, value: usize) {
        self.rank = value;
    }
}
