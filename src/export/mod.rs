pub mod glb;

pub use glb::write_glb;
