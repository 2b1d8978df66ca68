use crate::graph::{GraphError, OriginalGraph};
use rand::prelude::{SliceRandom, StdRng};
use rand::{Rng, SeedableRng};

/// Random tree on `1..=node_count`.
///
/// The vertices `2..=node_count` are visited in shuffled order and each vertex
/// `i` is attached to a uniformly chosen parent in `1..i`. The same seed always
/// yields the same tree.
pub fn random_tree(node_count: usize, seed: u64) -> Result<OriginalGraph, GraphError> {
    let mut rng: StdRng = SeedableRng::seed_from_u64(seed);
    let mut vertices: Vec<usize> = (2..=node_count).collect();
    vertices.shuffle(&mut rng);
    let edges: Vec<(usize, usize)> = vertices
        .into_iter()
        .map(|i| (rng.gen_range(1..i), i))
        .collect();
    OriginalGraph::build(node_count, &edges)
}

#[cfg(test)]
mod tests {
    use crate::generator::random_tree;
    use crate::graph::GraphError;

    #[test]
    fn generates_trees() {
        for n in 1..50 {
            let graph = random_tree(n, n as u64).unwrap();
            assert_eq!(graph.order(), n);
            assert_eq!(graph.edge_count(), n - 1);
            assert!(graph
                .vertices()
                .skip(1)
                .all(|v| graph.neighbors(v).iter().any(|u| *u < v)));
        }
    }

    #[test]
    fn seeded() {
        assert_eq!(random_tree(300, 5).unwrap(), random_tree(300, 5).unwrap());
        assert_ne!(random_tree(300, 5).unwrap(), random_tree(300, 6).unwrap());
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(random_tree(0, 1), Err(GraphError::EmptyGraph));
    }
}
