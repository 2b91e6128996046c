use glam::Vec2;

/// Window extent in pixels, used to map cursor positions into the sketch
/// plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Map a cursor position (pixels, origin top-left, y down) to normalized
    /// device coordinates in `[-1, 1]` with y up.
    pub fn to_ndc(&self, cursor: Vec2) -> Vec2 {
        2.0 * cursor / Vec2::new(self.width, -self.height) + Vec2::new(-1.0, 1.0)
    }
}
