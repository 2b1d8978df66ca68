use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Immutable reference graph on the vertices `1..=order`.
///
/// Adjacency lists are sorted ascending. Index 0 is unused so that vertex ids
/// can be used as indices directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OriginalGraph {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    EmptyGraph,
    TooManyVertices(usize),
    VertexOutOfRange { vertex: usize, node_count: usize },
    SelfLoop(usize),
    DuplicateEdge(usize, usize),
}

impl Display for GraphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            GraphError::EmptyGraph => write!(f, "Node count must be positive"),
            GraphError::TooManyVertices(n) => {
                write!(f, "Cannot allocate a graph with {} vertices", n)
            }
            GraphError::VertexOutOfRange { vertex, node_count } => write!(
                f,
                "Vertex {} is outside of the declared range 1..={}",
                vertex, node_count
            ),
            GraphError::SelfLoop(v) => write!(f, "Self loop at vertex {}", v),
            GraphError::DuplicateEdge(u, v) => write!(f, "Duplicate edge: ({}, {})", u, v),
        }
    }
}

impl Error for GraphError {}

impl OriginalGraph {
    /// Builds the graph on `1..=node_count` from an undirected edge list.
    pub fn build(node_count: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        if node_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        let slots = node_count
            .checked_add(1)
            .ok_or(GraphError::TooManyVertices(node_count))?;
        let mut adjacency: Vec<Vec<usize>> = Vec::new();
        adjacency
            .try_reserve_exact(slots)
            .map_err(|_| GraphError::TooManyVertices(node_count))?;
        adjacency.resize(slots, Vec::new());
        for (u, v) in edges.iter().copied() {
            for x in [u, v].iter().copied() {
                if x == 0 || x > node_count {
                    return Err(GraphError::VertexOutOfRange {
                        vertex: x,
                        node_count,
                    });
                }
            }
            if u == v {
                return Err(GraphError::SelfLoop(u));
            }
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
        for (u, neighbors) in adjacency.iter_mut().enumerate() {
            neighbors.sort_unstable();
            if let Some(pair) = neighbors.windows(2).find(|pair| pair[0] == pair[1]) {
                return Err(GraphError::DuplicateEdge(u.min(pair[0]), u.max(pair[0])));
            }
        }
        Ok(Self {
            adjacency,
            edge_count: edges.len(),
        })
    }

    pub fn order(&self) -> usize {
        self.adjacency.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn has_vertex(&self, u: usize) -> bool {
        u != 0 && u < self.adjacency.len()
    }

    pub fn degree(&self, u: usize) -> usize {
        assert!(self.has_vertex(u));
        self.adjacency[u].len()
    }

    pub fn neighbors(&self, u: usize) -> &[usize] {
        assert!(self.has_vertex(u));
        self.adjacency[u].as_slice()
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.neighbors(u).binary_search(&v).is_ok()
    }

    pub fn vertices(&self) -> impl Iterator<Item = usize> {
        1..self.adjacency.len()
    }

    /// Every edge once, as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, nb)| nb.iter().copied().filter(move |v| u < *v).map(move |v| (u, v)))
    }

    pub fn max_degree(&self) -> usize {
        self.vertices().map(|v| self.degree(v)).max().unwrap_or(0)
    }

    /// Vertex of maximum degree, lowest id on ties.
    pub fn max_degree_vertex(&self) -> Option<usize> {
        self.vertices()
            .max_by(|a, b| self.degree(*a).cmp(&self.degree(*b)).then(b.cmp(a)))
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{GraphError, OriginalGraph};

    #[test]
    fn build_path() {
        let graph = OriginalGraph::build(4, &[(1, 2), (2, 3), (3, 4)]).unwrap();
        assert_eq!(graph.order(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.degree(1), 1);
        assert_eq!(graph.degree(2), 2);
        assert_eq!(graph.neighbors(3), &[2, 4]);
        assert!(graph.has_edge(4, 3));
        assert!(!graph.has_edge(1, 4));
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn isolated_vertices() {
        let graph = OriginalGraph::build(3, &[]).unwrap();
        assert_eq!(graph.order(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.max_degree(), 0);
        assert_eq!(graph.max_degree_vertex(), Some(1));
    }

    #[test]
    fn max_degree_tie_break() {
        let graph = OriginalGraph::build(5, &[(4, 5), (4, 1), (2, 3), (2, 1)]).unwrap();
        assert_eq!(graph.max_degree(), 2);
        assert_eq!(graph.max_degree_vertex(), Some(1));

        let graph = OriginalGraph::build(5, &[(4, 5), (4, 3), (2, 3), (2, 1)]).unwrap();
        assert_eq!(graph.max_degree_vertex(), Some(2));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(OriginalGraph::build(0, &[]), Err(GraphError::EmptyGraph));
    }

    #[test]
    fn rejects_unallocatable_node_count() {
        assert_eq!(
            OriginalGraph::build(usize::MAX, &[(1, 2)]),
            Err(GraphError::TooManyVertices(usize::MAX))
        );
        assert_eq!(
            OriginalGraph::build(usize::MAX / 2, &[]),
            Err(GraphError::TooManyVertices(usize::MAX / 2))
        );
    }

    #[test]
    fn rejects_dangling_edges() {
        assert_eq!(
            OriginalGraph::build(3, &[(1, 4)]),
            Err(GraphError::VertexOutOfRange {
                vertex: 4,
                node_count: 3
            })
        );
        assert_eq!(
            OriginalGraph::build(3, &[(0, 1)]),
            Err(GraphError::VertexOutOfRange {
                vertex: 0,
                node_count: 3
            })
        );
    }

    #[test]
    fn rejects_self_loops_and_duplicates() {
        assert_eq!(
            OriginalGraph::build(3, &[(2, 2)]),
            Err(GraphError::SelfLoop(2))
        );
        assert_eq!(
            OriginalGraph::build(3, &[(1, 2), (2, 3), (2, 1)]),
            Err(GraphError::DuplicateEdge(1, 2))
        );
    }
}
