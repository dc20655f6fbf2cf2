//! Disjoint-set forest (union-find) over point indices.
//!
//! Parents and ranks are plain index arrays. `find` compresses paths with an
//! explicit loop so arbitrarily deep chains never touch the call stack, and
//! `union` links by rank. The forest also keeps a live component counter that
//! starts at `len` and drops by exactly one on every merge.

use crate::error::ForestError;

/// Outcome of [`DisjointSetForest::union`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Merge {
    /// Two components were joined under `root`.
    Merged {
        /// Representative of the combined component.
        root: usize,
    },
    /// Both elements already shared `root`; nothing changed.
    AlreadyJoined {
        /// Representative shared by both elements.
        root: usize,
    },
}

impl Merge {
    /// Returns `true` when the call actually joined two components.
    #[must_use]
    pub const fn is_merged(self) -> bool {
        matches!(self, Self::Merged { .. })
    }

    /// Returns the representative of the component holding both elements.
    #[must_use]
    pub const fn root(self) -> usize {
        match self {
            Self::Merged { root } | Self::AlreadyJoined { root } => root,
        }
    }
}

/// Union-find over the indices `0..len` with path compression and union by
/// rank.
///
/// # Examples
/// ```
/// use junction_core::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(4);
/// assert!(forest.union(0, 2)?.is_merged());
/// assert!(!forest.union(2, 0)?.is_merged());
/// assert!(forest.connected(0, 2)?);
/// assert_eq!(forest.component_count(), 3);
///
/// let mut sizes = forest.component_sizes();
/// sizes.sort_unstable();
/// assert_eq!(sizes, [1, 1, 2]);
/// # Ok::<(), junction_core::ForestError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSetForest {
    /// Creates `len` singleton components, each its own representative.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Returns the number of elements tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns whether the forest tracks no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of live components.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the representative of `node`'s component.
    ///
    /// Every element visited on the way is re-pointed directly at the
    /// representative.
    ///
    /// # Errors
    /// Returns [`ForestError::IndexOutOfBounds`] when `node >= len`.
    pub fn find(&mut self, node: usize) -> Result<usize, ForestError> {
        self.check(node)?;
        Ok(self.root_of(node))
    }

    /// Returns whether `left` and `right` currently share a component.
    ///
    /// # Errors
    /// Returns [`ForestError::IndexOutOfBounds`] when either index is
    /// `>= len`.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool, ForestError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Joins the components holding `left` and `right`.
    ///
    /// The lower-rank root is attached beneath the higher-rank root; on equal
    /// ranks `right`'s root goes beneath `left`'s and the survivor's rank
    /// grows by one. Calling this on already-joined elements changes nothing.
    ///
    /// # Errors
    /// Returns [`ForestError::IndexOutOfBounds`] when either index is
    /// `>= len`. No state is modified in that case.
    pub fn union(&mut self, left: usize, right: usize) -> Result<Merge, ForestError> {
        self.check(left)?;
        self.check(right)?;

        let mut left = self.root_of(left);
        let mut right = self.root_of(right);
        if left == right {
            return Ok(Merge::AlreadyJoined { root: left });
        }

        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        Ok(Merge::Merged { root: left })
    }

    /// Returns the size of every live component, ordered by representative
    /// index.
    ///
    /// The sizes always sum to [`len`](Self::len). Callers that need a
    /// ranking must sort the result themselves.
    pub fn component_sizes(&mut self) -> Vec<usize> {
        let mut counts = vec![0_usize; self.len()];
        for node in 0..self.len() {
            let root = self.root_of(node);
            counts[root] += 1;
        }
        counts.retain(|&count| count > 0);
        counts
    }

    fn check(&self, node: usize) -> Result<(), ForestError> {
        if node < self.len() {
            Ok(())
        } else {
            Err(ForestError::IndexOutOfBounds {
                index: node,
                len: self.len(),
            })
        }
    }

    /// Two passes: locate the root, then rewire every node on the path.
    fn root_of(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }
}

#[cfg(test)]
mod property;
