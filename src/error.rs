use std::io;

/// All error types for lathe-sketch.
#[derive(thiserror::Error, Debug)]
pub enum LatheError {
    #[error("Invalid axis: {0}")]
    InvalidAxis(String),
    #[error("Degenerate ring: resolution {0} is below the minimum of 3")]
    DegenerateRing(usize),
    #[error("Degenerate profile: {0}")]
    DegenerateProfile(String),
    #[error("Polyline error: {0}")]
    Polyline(String),
    #[error("Mesh too large: {0} vertices exceed the u32 index range")]
    MeshTooLarge(usize),
    #[error("Input error: {0}")]
    Input(String),
    #[error("Output error: {0}")]
    Output(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LatheError>;
