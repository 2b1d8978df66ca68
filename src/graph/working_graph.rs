use crate::graph::original_graph::OriginalGraph;
use fxhash::{FxHashMap, FxHashSet};
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Mutable subgraph of an [`OriginalGraph`].
///
/// Vertices are only ever removed as a whole, together with their incident
/// edges, and later restored from the original adjacency. Restoring vertices in
/// the reverse order of their removal reproduces every intermediate state.
#[derive(Clone, Debug)]
pub struct WorkingGraph<'a> {
    original: &'a OriginalGraph,
    data: FxHashMap<usize, FxHashSet<usize>>,
    edge_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationError {
    AbsentVertex(usize),
    PresentVertex(usize),
    UnknownVertex(usize),
}

impl Display for MutationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            MutationError::AbsentVertex(v) => {
                write!(f, "Cannot remove vertex {}: not in working graph", v)
            }
            MutationError::PresentVertex(v) => {
                write!(f, "Cannot restore vertex {}: already in working graph", v)
            }
            MutationError::UnknownVertex(v) => {
                write!(f, "Cannot restore vertex {}: not in original graph", v)
            }
        }
    }
}

impl Error for MutationError {}

impl<'a> WorkingGraph<'a> {
    pub fn new(original: &'a OriginalGraph) -> Self {
        let mut data: FxHashMap<usize, FxHashSet<usize>> =
            FxHashMap::with_capacity_and_hasher(original.order(), Default::default());
        for v in original.vertices() {
            data.insert(v, original.neighbors(v).iter().copied().collect());
        }
        Self {
            original,
            data,
            edge_count: original.edge_count(),
        }
    }

    pub fn original(&self) -> &'a OriginalGraph {
        self.original
    }

    pub fn has_vertex(&self, u: usize) -> bool {
        self.data.contains_key(&u)
    }

    pub fn order(&self) -> usize {
        self.data.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn degree(&self, u: usize) -> usize {
        self.data.get(&u).map_or(0, |nb| nb.len())
    }

    /// Current neighbors of `u`, sorted ascending.
    pub fn neighbors(&self, u: usize) -> Vec<usize> {
        let mut neighbors: Vec<usize> = self
            .data
            .get(&u)
            .map(|nb| nb.iter().copied().collect())
            .unwrap_or_default();
        neighbors.sort_unstable();
        neighbors
    }

    pub fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.data.keys().copied())
    }

    pub fn max_degree(&self) -> usize {
        self.data.values().map(|nb| nb.len()).max().unwrap_or(0)
    }

    /// Vertex of maximum current degree, lowest id on ties.
    pub fn max_degree_vertex(&self) -> Option<usize> {
        self.data
            .iter()
            .max_by(|(a, a_nb), (b, b_nb)| a_nb.len().cmp(&b_nb.len()).then(b.cmp(a)))
            .map(|(v, _)| *v)
    }

    /// Deletes `u` and all its incident edges.
    pub fn remove(&mut self, u: usize) -> Result<(), MutationError> {
        let neighbors = self
            .data
            .remove(&u)
            .ok_or(MutationError::AbsentVertex(u))?;
        for v in neighbors.iter() {
            if let Some(nb) = self.data.get_mut(v) {
                nb.remove(&u);
            }
        }
        self.edge_count -= neighbors.len();
        Ok(())
    }

    /// Reinserts `u` with the edges of the original graph whose other endpoint
    /// is currently present.
    pub fn restore(&mut self, u: usize) -> Result<(), MutationError> {
        if !self.original.has_vertex(u) {
            return Err(MutationError::UnknownVertex(u));
        }
        if self.has_vertex(u) {
            return Err(MutationError::PresentVertex(u));
        }
        let mut neighbors: FxHashSet<usize> =
            FxHashSet::with_capacity_and_hasher(self.original.degree(u), Default::default());
        for v in self.original.neighbors(u).iter().copied() {
            if let Some(nb) = self.data.get_mut(&v) {
                nb.insert(u);
                neighbors.insert(v);
            }
        }
        self.edge_count += neighbors.len();
        self.data.insert(u, neighbors);
        Ok(())
    }
}
