use crate::graph::WorkingGraph;

/// Result of bounding a partial cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Estimate {
    /// No edges remain, the partial cover of this size is complete.
    Complete(usize),
    /// No completion of the partial cover is smaller than this.
    Lowerbound(usize),
}

pub trait CoverLowerbound {
    /// `max_degree` is the current maximum degree of `graph`, which the caller
    /// already knows from picking the branching vertex.
    fn estimate(graph: &WorkingGraph, max_degree: usize, cover_size: usize) -> Estimate;
}

/// `ceil(E / Δ) + s`: a vertex covers at most Δ of the E remaining edges.
pub struct EdgeDegreeBound {}

impl CoverLowerbound for EdgeDegreeBound {
    fn estimate(graph: &WorkingGraph, max_degree: usize, cover_size: usize) -> Estimate {
        let edges = graph.edge_count();
        if edges == 0 {
            return Estimate::Complete(cover_size);
        }
        debug_assert!(max_degree > 0);
        let max_degree = max_degree.max(1);
        Estimate::Lowerbound((edges + max_degree - 1) / max_degree + cover_size)
    }
}
