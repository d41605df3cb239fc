mod graph;
mod graph_error;
pub mod ports;

pub use graph::{GraphUseCase, GraphUseCaseImpl};
pub use graph_error::GraphError;
