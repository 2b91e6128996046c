pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod lathe;
pub mod scene;
pub mod session;
pub mod types;

pub use config::{LatheConfig, SessionConfig};
pub use error::{LatheError, Result};
pub use lathe::{build, build_with};
pub use session::Session;
pub use types::{Curve, Mesh};
