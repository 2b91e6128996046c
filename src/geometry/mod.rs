pub mod polyline;
pub mod radius;

pub use polyline::{Projection, project};
pub use radius::RadiusProfile;
