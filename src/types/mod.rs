pub mod curve;
pub mod mesh;

pub use curve::Curve;
pub use mesh::Mesh;
