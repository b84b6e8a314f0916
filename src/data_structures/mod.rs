pub mod vertex_index;

pub use vertex_index::VertexIndex;
