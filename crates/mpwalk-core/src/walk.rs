//! The walk sampling kernel.
//!
//! One call produces the full batch of walks for one starting node. Each
//! step follows the edge type the compiled path dictates and picks among
//! the matching neighbors uniformly at random. A node whose type is in the
//! exclude set is traversed but not recorded. Hitting a node with no
//! neighbors of the required type truncates that single walk at its
//! current length; it never fails the batch.

use rand::prelude::*;

use crate::metapath::CompiledPath;
use crate::network::{NetworkIndex, NodeId};

/// One recorded walk: the visited nodes, post exclusion filter.
pub type Walk = Vec<NodeId>;

/// Node types skipped when recording a walk. Excluded nodes remain valid
/// transit hops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludeSet {
    types: Vec<char>,
}

impl ExcludeSet {
    /// Build an exclude set from a string of type characters.
    pub fn new(types: &str) -> Self {
        Self {
            types: types.chars().collect(),
        }
    }

    /// Whether nodes of this type are excluded from recorded walks.
    pub fn contains(&self, node_type: char) -> bool {
        self.types.contains(&node_type)
    }

    /// True when no type is excluded.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl From<&str> for ExcludeSet {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Generate `num_walks` metapath-guided walks from one starting node.
///
/// Pure with respect to the index and the compiled path; all randomness
/// comes from the caller-supplied generator, so a seeded generator makes
/// the batch reproducible.
pub fn generate_walks<R: Rng>(
    index: &NetworkIndex,
    start: NodeId,
    path: &CompiledPath,
    exclude: &ExcludeSet,
    num_walks: usize,
    rng: &mut R,
) -> Vec<Walk> {
    let mut walks = Vec::with_capacity(num_walks);

    for _ in 0..num_walks {
        let mut walk = Vec::with_capacity(path.len());
        let mut current = start;

        for d in 0..path.len() {
            if !exclude.contains(index.node_type(current)) {
                walk.push(current);
            }
            let neighbors = index.neighbors(current, path.step(d));
            match neighbors.choose(rng) {
                Some(&next) => current = next,
                // Dead end: truncate this walk, keep the rest of the batch
                None => break,
            }
        }

        walks.push(walk);
    }

    walks
}
