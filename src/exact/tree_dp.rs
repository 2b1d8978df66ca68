use crate::datastructures::BitSet;
use crate::graph::OriginalGraph;
use std::cmp::min;
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

#[cfg(feature = "log")]
use log::info;

const ROOT: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotATreeError {
    EdgeCount { nodes: usize, edges: usize },
    Cycle { u: usize, v: usize },
    Disconnected { vertex: usize },
}

impl Display for NotATreeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            NotATreeError::EdgeCount { nodes, edges } => write!(
                f,
                "Not a tree: {} vertices require {} edges, found {}",
                nodes,
                nodes - 1,
                edges
            ),
            NotATreeError::Cycle { u, v } => {
                write!(f, "Not a tree: edge ({}, {}) closes a cycle", u, v)
            }
            NotATreeError::Disconnected { vertex } => {
                write!(f, "Not a tree: vertex {} is not reachable from the root", vertex)
            }
        }
    }
}

impl Error for NotATreeError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeCover {
    pub size: usize,
    /// Sorted ascending, only computed on request.
    pub members: Option<Vec<usize>>,
}

/// Rooted view of a tree: pre-order from the root and the parent of every
/// vertex (0 for the root).
struct RootedTree {
    preorder: Vec<usize>,
    parent: Vec<usize>,
}

impl RootedTree {
    fn new(graph: &OriginalGraph) -> Result<Self, NotATreeError> {
        let n = graph.order();
        if graph.edge_count() + 1 != n {
            return Err(NotATreeError::EdgeCount {
                nodes: n,
                edges: graph.edge_count(),
            });
        }
        let mut parent = vec![0; n + 1];
        let mut visited = BitSet::new(n + 1);
        let mut preorder = Vec::with_capacity(n);
        let mut stack = vec![ROOT];
        visited.set_bit(ROOT);
        while let Some(v) = stack.pop() {
            preorder.push(v);
            for u in graph.neighbors(v).iter().copied() {
                if u == parent[v] {
                    continue;
                }
                if visited.set_bit(u) {
                    return Err(NotATreeError::Cycle { u: v, v: u });
                }
                parent[u] = v;
                stack.push(u);
            }
        }
        if visited.cardinality() < n {
            let vertex = graph
                .vertices()
                .find(|v| !visited[*v])
                .unwrap_or(ROOT);
            return Err(NotATreeError::Disconnected { vertex });
        }
        Ok(Self { preorder, parent })
    }
}

/// Minimum vertex cover of a tree by dynamic programming over a rooted tree.
///
/// Every vertex carries the cost of its subtree with the vertex excluded and
/// with it included. Children are finalized before their parent by walking the
/// pre-order backwards, so no recursion is involved and paths with millions of
/// vertices are fine.
pub struct TreeCoverSolver<'a> {
    graph: &'a OriginalGraph,
    members: bool,
}

impl<'a> TreeCoverSolver<'a> {
    pub fn with_graph(graph: &'a OriginalGraph) -> Self {
        Self {
            graph,
            members: false,
        }
    }

    impl_setter!(self, members, bool);

    pub fn compute(self) -> Result<TreeCover, NotATreeError> {
        let tree = RootedTree::new(self.graph)?;
        #[cfg(feature = "log")]
        info!("solving tree with {} vertices", self.graph.order());

        let n = self.graph.order();
        let mut excluded = vec![0usize; n + 1];
        let mut included = vec![1usize; n + 1];
        for v in tree.preorder.iter().rev().copied() {
            let p = tree.parent[v];
            if p == 0 {
                continue;
            }
            excluded[p] += included[v];
            included[p] += min(excluded[v], included[v]);
        }
        let size = min(excluded[ROOT], included[ROOT]);

        let members = if self.members {
            Some(reconstruct(&tree, &excluded, &included))
        } else {
            None
        };
        Ok(TreeCover { size, members })
    }
}

/// Walks the pre-order so every parent is decided before its children, taking
/// a vertex whenever that is at least as cheap as leaving it out.
fn reconstruct(tree: &RootedTree, excluded: &[usize], included: &[usize]) -> Vec<usize> {
    let mut chosen = BitSet::new(excluded.len());
    for v in tree.preorder.iter().copied() {
        let p = tree.parent[v];
        let forced = p != 0 && !chosen[p];
        if forced || included[v] <= excluded[v] {
            chosen.set_bit(v);
        }
    }
    chosen.iter().collect()
}

#[cfg(test)]
mod tests {
    use crate::cover::is_vertex_cover;
    use crate::exact::branch_and_bound::BranchAndBound;
    use crate::exact::tree_dp::{NotATreeError, TreeCoverSolver};
    use crate::graph::OriginalGraph;
    use crate::generator::random_tree;

    fn path(n: usize) -> OriginalGraph {
        let edges: Vec<_> = (1..n).map(|v| (v, v + 1)).collect();
        OriginalGraph::build(n, &edges).unwrap()
    }

    #[test]
    fn single_vertex() {
        let graph = OriginalGraph::build(1, &[]).unwrap();
        let cover = TreeCoverSolver::with_graph(&graph)
            .members(true)
            .compute()
            .unwrap();
        assert_eq!(cover.size, 0);
        assert_eq!(cover.members, Some(vec![]));
    }

    #[test]
    fn path_of_four() {
        let graph = path(4);
        let cover = TreeCoverSolver::with_graph(&graph)
            .members(true)
            .compute()
            .unwrap();
        assert_eq!(cover.size, 2);
        assert_eq!(cover.members, Some(vec![1, 3]));
    }

    #[test]
    fn star() {
        let graph = OriginalGraph::build(5, &[(1, 2), (1, 3), (1, 4), (1, 5)]).unwrap();
        let cover = TreeCoverSolver::with_graph(&graph)
            .members(true)
            .compute()
            .unwrap();
        assert_eq!(cover.size, 1);
        assert_eq!(cover.members, Some(vec![1]));

        let graph = OriginalGraph::build(5, &[(3, 1), (3, 2), (3, 4), (3, 5)]).unwrap();
        let cover = TreeCoverSolver::with_graph(&graph)
            .members(true)
            .compute()
            .unwrap();
        assert_eq!(cover.members, Some(vec![3]));
    }

    #[test]
    fn paths() {
        for n in 1..40 {
            let graph = path(n);
            let cover = TreeCoverSolver::with_graph(&graph)
                .members(true)
                .compute()
                .unwrap();
            assert_eq!(cover.size, n / 2);
            let members = cover.members.unwrap();
            assert_eq!(members.len(), n / 2);
            assert!(is_vertex_cover(&graph, &members));
        }
    }

    #[test]
    fn long_path_without_recursion() {
        let n = 1_000_000;
        let graph = path(n);
        let cover = TreeCoverSolver::with_graph(&graph).compute().unwrap();
        assert_eq!(cover.size, n / 2);
        assert_eq!(cover.members, None);
    }

    #[test]
    fn random_trees_give_valid_covers() {
        for seed in 0..30 {
            let graph = random_tree(200, seed).unwrap();
            let cover = TreeCoverSolver::with_graph(&graph)
                .members(true)
                .compute()
                .unwrap();
            let members = cover.members.unwrap();
            assert_eq!(members.len(), cover.size);
            assert!(is_vertex_cover(&graph, &members));
        }
    }

    #[test]
    fn agrees_with_branch_and_bound() {
        for seed in 0..20 {
            let graph = random_tree(14, seed).unwrap();
            let tree = TreeCoverSolver::with_graph(&graph).compute().unwrap();
            let outcome = BranchAndBound::with_graph(&graph).compute().unwrap();
            assert!(outcome.proven_optimal);
            assert_eq!(tree.size, outcome.cover.size());
        }
    }

    #[test]
    fn deterministic() {
        let graph = random_tree(5_000, 11).unwrap();
        let first = TreeCoverSolver::with_graph(&graph).compute().unwrap();
        for _ in 0..3 {
            let again = TreeCoverSolver::with_graph(&graph).compute().unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn rejects_wrong_edge_count() {
        let graph = OriginalGraph::build(4, &[(1, 2), (3, 4)]).unwrap();
        assert_eq!(
            TreeCoverSolver::with_graph(&graph).compute(),
            Err(NotATreeError::EdgeCount { nodes: 4, edges: 2 })
        );
    }

    #[test]
    fn rejects_cycle() {
        // triangle plus an isolated vertex has the right edge count
        let graph = OriginalGraph::build(4, &[(1, 2), (2, 3), (1, 3)]).unwrap();
        match TreeCoverSolver::with_graph(&graph).compute() {
            Err(NotATreeError::Cycle { .. }) => {}
            other => panic!("expected a cycle, got {:?}", other),
        }
    }

    #[test]
    fn rejects_disconnected_forest() {
        let graph = OriginalGraph::build(3, &[(2, 3)]).unwrap();
        assert_eq!(
            TreeCoverSolver::with_graph(&graph).compute(),
            Err(NotATreeError::EdgeCount { nodes: 3, edges: 1 })
        );
        let graph = OriginalGraph::build(2, &[]).unwrap();
        assert_eq!(
            TreeCoverSolver::with_graph(&graph).compute(),
            Err(NotATreeError::EdgeCount { nodes: 2, edges: 0 })
        );

        // edge count matches, the cycle sits outside the root component
        let graph = OriginalGraph::build(5, &[(1, 2), (3, 4), (4, 5), (3, 5)]).unwrap();
        assert_eq!(
            TreeCoverSolver::with_graph(&graph).compute(),
            Err(NotATreeError::Disconnected { vertex: 3 })
        );
    }
}
