//! A [disjoint-sets/union-find] forest over the indices `0 .. len`.
//!
//! See [`DisjointSets`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSets`]: struct.DisjointSets.html

use {
    std::{
        cmp::Ordering,
        collections::HashMap,
        fmt,
    },
    crate::disjoint_sets::metadata::Metadata,
};

/// A [disjoint-sets/union-find] forest where every index in `0 .. len` is a member of a set.
///
/// Initially each index has its own set but sets can be joined with the `union` method.
/// Trees are joined by rank and every query compresses the path it walked,
/// so any sequence of `m` operations takes `O(m α(n))` time.
///
/// This implementation chooses not to expose the `find` method and instead has a `same_set` method.
/// This is so that the representative of the set stays an implementation detail.
///
/// # Examples
///
/// ```
/// use percolation::disjoint_sets::DisjointSets;
///
/// let mut sets = DisjointSets::new(4);
/// sets.union(1, 2);
/// sets.union(2, 3);
///
/// assert!(sets.same_set(1, 3));
/// assert!(!sets.same_set(0, 3));
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
#[derive(Clone)]
pub struct DisjointSets {
    /// The metadata for each index.
    meta: Vec<Metadata>,
}

impl DisjointSets {
    /// Constructs a new `DisjointSets` with `len` elements, each in its own set.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::disjoint_sets::DisjointSets;
    ///
    /// let sets = DisjointSets::new(3);
    ///
    /// assert!(sets.len() == 3);
    /// assert!(!sets.same_set(0, 1));
    /// assert!(!sets.same_set(1, 2));
    /// ```
    #[inline]
    pub fn new(len: usize) -> Self {
        Self {
            meta: (0 .. len).map(Metadata::new).collect(),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.meta.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.meta.is_empty()
    }

    /// Joins the sets of the `first_index` and the `second_index`.
    ///
    /// This method will be executed in `O(α(n))` time where `α` is the inverse
    /// Ackermann function. The inverse Ackermann function has value below 5
    /// for any value of `n` that can be written in the physical universe.
    /// Joining two indices that already share a set changes nothing.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::disjoint_sets::DisjointSets;
    ///
    /// let mut sets = DisjointSets::new(4);
    ///
    /// sets.union(1, 2);
    /// assert!(sets.same_set(1, 2));
    /// assert!(!sets.same_set(2, 3));
    ///
    /// // We added 3 to the existing set with 1 and 2.
    /// sets.union(3, 1);
    /// assert!(sets.same_set(2, 3));
    /// assert!(!sets.same_set(0, 3));
    /// ```
    pub fn union(&mut self, first_index: usize, second_index: usize) {
        let i = self.find(first_index);
        let j = self.find(second_index);

        if i == j {
            return
        }

        // We add to the tree with the highest rank.
        match Ord::cmp(&self.meta[i].rank(), &self.meta[j].rank()) {
            Ordering::Less => {
                self.meta[i].set_parent(j);
            },
            Ordering::Equal => {
                // We add the first tree to the second tree.
                self.meta[i].set_parent(j);
                // The second tree becomes higher.
                let rank = self.meta[j].rank();
                self.meta[j].set_rank(rank + 1);
            },
            Ordering::Greater => {
                self.meta[j].set_parent(i);
            },
        }
    }

    /// Returns `true` if `first_index` and `second_index` are in the same set.
    ///
    /// This method will be executed in `O(α(n))` time where `α` is the inverse
    /// Ackermann function.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` are out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::disjoint_sets::DisjointSets;
    ///
    /// let mut sets = DisjointSets::new(4);
    ///
    /// sets.union(1, 3);
    /// sets.union(0, 1);
    ///
    /// assert!(sets.same_set(0, 1));
    /// assert!(!sets.same_set(0, 2));
    /// assert!(sets.same_set(0, 3));
    /// assert!(!sets.same_set(1, 2));
    /// assert!(sets.same_set(1, 3));
    /// assert!(!sets.same_set(2, 3));
    /// ```
    #[inline]
    pub fn same_set(&self, first_index: usize, second_index: usize) -> bool {
        self.find(first_index) == self.find(second_index)
    }

    /// Gives the representative of the set that `index` belongs to.
    ///
    /// Each index of a set will give the same value.
    /// This method is private to keep the representative of the set an implementation detail.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    pub(crate) fn find(&self, index: usize) -> usize {
        // If the node is its own parent we have found the root.
        if self.meta[index].parent() == index {
            index
        } else {
            // This method is recursive so each parent on the way to the root is updated.
            // Union by rank keeps the depth below `log2(len)`.
            let root = self.find(self.meta[index].parent());

            self.meta[index].set_parent(root);

            root
        }
    }
}

impl fmt::Debug for DisjointSets {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        // We map the roots to `usize` names in order of first appearance.
        let mut map = HashMap::with_capacity(self.len());
        let mut builder = formatter.debug_list();

        for i in 0 .. self.len() {
            let next_name = map.len();
            let name = *map.entry(self.find(i)).or_insert(next_name);

            builder.entry(&name);
        }

        builder.finish()
    }
}

impl PartialEq for DisjointSets {
    /// Two forests are equal when they partition the same indices in the same way,
    /// regardless of the shape of their trees.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false
        }

        // The roots of both forests have to map one to one.
        let mut forward = HashMap::with_capacity(self.len());
        let mut backward = HashMap::with_capacity(self.len());

        for i in 0 .. self.len() {
            let self_root = self.find(i);
            let other_root = other.find(i);

            if *forward.entry(self_root).or_insert(other_root) != other_root
                || *backward.entry(other_root).or_insert(self_root) != self_root
            {
                return false
            }
        }

        true
    }
}

impl Eq for DisjointSets {}
