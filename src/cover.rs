use crate::graph::OriginalGraph;

/// A vertex cover given by its members, sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VertexCover {
    members: Vec<usize>,
}

impl VertexCover {
    pub fn new(mut members: Vec<usize>) -> Self {
        members.sort_unstable();
        members.dedup();
        Self { members }
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn members(&self) -> &[usize] {
        self.members.as_slice()
    }

    pub fn contains(&self, v: usize) -> bool {
        self.members.binary_search(&v).is_ok()
    }

    pub fn into_members(self) -> Vec<usize> {
        self.members
    }

    pub fn covers(&self, graph: &OriginalGraph) -> bool {
        is_vertex_cover(graph, &self.members)
    }
}

/// Checks that every edge of `graph` has an endpoint in `members`.
pub fn is_vertex_cover(graph: &OriginalGraph, members: &[usize]) -> bool {
    let mut selected = vec![false; graph.order() + 1];
    for v in members.iter().copied() {
        if !graph.has_vertex(v) {
            return false;
        }
        selected[v] = true;
    }
    graph.edges().all(|(u, v)| selected[u] || selected[v])
}

#[cfg(test)]
mod tests {
    use crate::cover::{is_vertex_cover, VertexCover};
    use crate::graph::OriginalGraph;

    #[test]
    fn normalizes_members() {
        let cover = VertexCover::new(vec![4, 2, 4, 1]);
        assert_eq!(cover.size(), 3);
        assert_eq!(cover.members(), &[1, 2, 4]);
        assert!(cover.contains(2));
        assert!(!cover.contains(3));
    }

    #[test]
    fn validates_cover() {
        let graph = OriginalGraph::build(4, &[(1, 2), (2, 3), (3, 4)]).unwrap();
        assert!(is_vertex_cover(&graph, &[2, 4]));
        assert!(is_vertex_cover(&graph, &[1, 3]));
        assert!(!is_vertex_cover(&graph, &[1, 4]));
        assert!(!is_vertex_cover(&graph, &[2, 3, 7]));
        assert!(VertexCover::new(vec![2, 3]).covers(&graph));
        assert!(VertexCover::default().covers(&OriginalGraph::build(2, &[]).unwrap()));
    }
}
