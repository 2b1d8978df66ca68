#[macro_use]
mod util;

pub(crate) mod datastructures;

pub mod cover;
pub mod exact;
pub mod generator;
pub mod graph;
pub mod io;
pub mod lowerbound;
pub mod timeout;

#[cfg(feature = "logging")]
pub mod log;
#[cfg(feature = "handle-ctrlc")]
pub mod signals;

pub use cover::VertexCover;
pub use exact::{BranchAndBound, TreeCoverSolver};
pub use graph::OriginalGraph;
