pub use branch_and_bound::{
    Assignment, BranchAndBound, Decision, FrontierEntry, SearchError, SearchOutcome,
    SearchStatistics,
};
pub use tree_dp::{NotATreeError, TreeCover, TreeCoverSolver};

pub mod branch_and_bound;
pub mod tree_dp;
