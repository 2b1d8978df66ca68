use crate::cover::VertexCover;
use crate::graph::{MutationError, OriginalGraph, WorkingGraph};
use crate::lowerbound::{CoverLowerbound, EdgeDegreeBound, Estimate};
use crate::timeout::{Stopper, Timer, Unlimited};
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;
use std::time::Duration;

#[cfg(feature = "log")]
use log::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// The vertex stays out of the cover, all its current neighbors go in.
    Exclude,
    /// The vertex goes into the cover.
    Include,
}

/// One decided vertex on the current search path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub vertex: usize,
    pub decision: Decision,
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:?})", self.vertex, self.decision)
    }
}

/// Pending branch. `parent` is the assignment that has to be the tail of the
/// search path when this entry is applied; `None` marks a top-level branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub vertex: usize,
    pub decision: Decision,
    pub parent: Option<Assignment>,
}

impl FrontierEntry {
    fn assignment(&self) -> Assignment {
        Assignment {
            vertex: self.vertex,
            decision: self.decision,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    pub iterations: usize,
    pub accepted: usize,
    pub pruned: usize,
    pub expanded: usize,
    pub restarts: usize,
    /// Sizes of the best cover over time, starting with the trivial cover.
    pub improvements: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub cover: VertexCover,
    /// `false` if the search was stopped before the frontier was exhausted.
    pub proven_optimal: bool,
    pub statistics: SearchStatistics,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    CorruptedBacktrack {
        parent: Assignment,
        path_len: usize,
    },
    Mutation(MutationError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::CorruptedBacktrack { parent, path_len } => write!(
                f,
                "Corrupted backtrack state: parent {} not found on search path of length {}",
                parent, path_len
            ),
            SearchError::Mutation(e) => write!(f, "Corrupted working graph: {}", e),
        }
    }
}

impl Error for SearchError {}

impl From<MutationError> for SearchError {
    fn from(e: MutationError) -> Self {
        SearchError::Mutation(e)
    }
}

/// Exact minimum vertex cover by depth-first branch and bound.
///
/// The working graph is mutated in place. Every applied decision is appended
/// to the search path, and backtracking restores vertices from the tail of the
/// path until the parent of the next frontier entry is the tail again.
pub struct BranchAndBound<'a, B: CoverLowerbound = EdgeDegreeBound> {
    original: &'a OriginalGraph,
    working_graph: WorkingGraph<'a>,
    frontier: Vec<FrontierEntry>,
    path: Vec<Assignment>,
    cover_size: usize,
    best: Vec<usize>,
    statistics: SearchStatistics,
    cutoff: Option<Duration>,
    bound: PhantomData<B>,
}

impl<'a> BranchAndBound<'a, EdgeDegreeBound> {
    pub fn with_graph(graph: &'a OriginalGraph) -> Self {
        Self::with_bound(graph)
    }
}

impl<'a, B: CoverLowerbound> BranchAndBound<'a, B> {
    pub fn with_bound(graph: &'a OriginalGraph) -> Self {
        Self {
            original: graph,
            working_graph: WorkingGraph::new(graph),
            frontier: Vec::new(),
            path: Vec::new(),
            cover_size: 0,
            best: graph.vertices().collect(),
            statistics: SearchStatistics::default(),
            cutoff: None,
            bound: PhantomData,
        }
    }

    impl_setter!(self, cutoff, Option<Duration>);

    pub fn compute(self) -> Result<SearchOutcome, SearchError> {
        match self.cutoff {
            Some(duration) => self.compute_with(Timer::new(duration)),
            None => self.compute_with(Unlimited),
        }
    }

    pub fn compute_with<S: Stopper>(mut self, mut stopper: S) -> Result<SearchOutcome, SearchError> {
        stopper.init();
        #[cfg(feature = "log")]
        info!(
            "branch and bound on {} vertices and {} edges",
            self.original.order(),
            self.original.edge_count()
        );
        self.statistics.improvements.push(self.best.len());

        if self.original.edge_count() == 0 {
            self.best.clear();
            self.statistics.improvements.push(0);
            return Ok(self.finish(true));
        }

        if let Some(v) = self.original.max_degree_vertex() {
            self.push_children(v, None);
        }

        while !self.frontier.is_empty() && !stopper.stop() {
            self.statistics.iterations += 1;
            let entry = match self.frontier.pop() {
                Some(entry) => entry,
                None => break,
            };
            let applied = entry.assignment();
            self.apply(applied)?;

            let branch_vertex = self.working_graph.max_degree_vertex();
            let max_degree = branch_vertex.map_or(0, |v| self.working_graph.degree(v));
            match B::estimate(&self.working_graph, max_degree, self.cover_size) {
                Estimate::Complete(size) => {
                    self.statistics.accepted += 1;
                    if size < self.best.len() {
                        self.update_best();
                    }
                }
                Estimate::Lowerbound(bound) if bound >= self.best.len() => {
                    self.statistics.pruned += 1;
                }
                Estimate::Lowerbound(_) => {
                    self.statistics.expanded += 1;
                    if let Some(v) = branch_vertex {
                        self.push_children(v, Some(applied));
                    }
                    continue;
                }
            }
            self.backtrack()?;
        }

        let proven_optimal = self.frontier.is_empty();
        #[cfg(feature = "log")]
        if !proven_optimal {
            warn!(
                "search stopped with {} open branches, cover of size {} is not proven optimal",
                self.frontier.len(),
                self.best.len()
            );
        }
        Ok(self.finish(proven_optimal))
    }

    fn push_children(&mut self, vertex: usize, parent: Option<Assignment>) {
        self.frontier.push(FrontierEntry {
            vertex,
            decision: Decision::Exclude,
            parent,
        });
        self.frontier.push(FrontierEntry {
            vertex,
            decision: Decision::Include,
            parent,
        });
    }

    fn apply(&mut self, assignment: Assignment) -> Result<(), SearchError> {
        if assignment.decision == Decision::Exclude {
            for u in self.working_graph.neighbors(assignment.vertex) {
                self.working_graph.remove(u)?;
                self.path.push(Assignment {
                    vertex: u,
                    decision: Decision::Include,
                });
                self.cover_size += 1;
            }
        } else {
            self.cover_size += 1;
        }
        self.working_graph.remove(assignment.vertex)?;
        self.path.push(assignment);
        Ok(())
    }

    fn update_best(&mut self) {
        self.best = self
            .path
            .iter()
            .filter(|a| a.decision == Decision::Include)
            .map(|a| a.vertex)
            .collect();
        self.statistics.improvements.push(self.best.len());
        #[cfg(feature = "log")]
        debug!(
            "improved cover to size {} after {} iterations",
            self.best.len(),
            self.statistics.iterations
        );
    }

    /// Rewinds the search path to the parent of the next frontier entry.
    fn backtrack(&mut self) -> Result<(), SearchError> {
        let parent = match self.frontier.last() {
            Some(next) => next.parent,
            None => return Ok(()),
        };
        match parent {
            None => {
                self.statistics.restarts += 1;
                #[cfg(feature = "log")]
                debug!("restarting from the original graph");
                self.working_graph = WorkingGraph::new(self.original);
                self.path.clear();
                self.cover_size = 0;
            }
            Some(parent) => {
                let position = self.path.iter().rposition(|a| *a == parent).ok_or(
                    SearchError::CorruptedBacktrack {
                        parent,
                        path_len: self.path.len(),
                    },
                )?;
                while self.path.len() > position + 1 {
                    if let Some(assignment) = self.path.pop() {
                        if assignment.decision == Decision::Include {
                            self.cover_size -= 1;
                        }
                        self.working_graph.restore(assignment.vertex)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn finish(self, proven_optimal: bool) -> SearchOutcome {
        #[cfg(feature = "log")]
        info!(
            "branch and bound finished after {} iterations with cover size {}",
            self.statistics.iterations,
            self.best.len()
        );
        SearchOutcome {
            cover: VertexCover::new(self.best),
            proven_optimal,
            statistics: self.statistics,
        }
    }
}
