pub use original_graph::{GraphError, OriginalGraph};
pub use working_graph::{MutationError, WorkingGraph};

mod original_graph;
mod working_graph;
