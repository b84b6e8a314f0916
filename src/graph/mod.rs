pub mod traits;
pub mod directed;
pub mod generators;

pub use traits::{Graph, Vertex, Weight};
pub use directed::DirectedGraph;
