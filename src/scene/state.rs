use glam::Vec2;
use tracing::debug;

use crate::config::LatheConfig;
use crate::error::Result;
use crate::lathe;
use crate::types::{Curve, Mesh};

/// Which curve a generic point-placed event extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Profile,
    Axis,
}

impl EditMode {
    pub fn toggle(&mut self) {
        *self = match self {
            EditMode::Profile => EditMode::Axis,
            EditMode::Axis => EditMode::Profile,
        };
    }
}

/// Flat sketch view or orbiting 3-D preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Sketch,
    Orbit,
}

impl ViewMode {
    pub fn toggle(&mut self) {
        *self = match self {
            ViewMode::Sketch => ViewMode::Orbit,
            ViewMode::Orbit => ViewMode::Sketch,
        };
    }
}

/// Everything event handlers may touch: both curves, the current mesh and
/// the interaction modes.
///
/// The mesh is private so it can only change through [`SceneState::rebuild`],
/// which swaps in a fully built replacement or leaves the old one alone.
#[derive(Debug, Clone, Default)]
pub struct SceneState {
    pub profile: Curve,
    pub axis: Curve,
    pub mode: EditMode,
    pub view: ViewMode,
    pub lathe: LatheConfig,
    mesh: Mesh,
    mesh_revision: u64,
    failed_rebuilds: usize,
}

impl SceneState {
    /// Empty scene with the default vertical center line `(0, 0) → (0, 5)`.
    pub fn new(lathe: LatheConfig) -> Self {
        let mut scene = Self::with_curves(Curve::new(), Curve::new(), lathe);
        scene
            .axis
            .replace(vec![glam::Vec3::ZERO, glam::Vec3::new(0.0, 5.0, 0.0)]);
        scene
    }

    pub fn with_curves(profile: Curve, axis: Curve, lathe: LatheConfig) -> Self {
        Self {
            profile,
            axis,
            lathe,
            ..Default::default()
        }
    }

    /// Append a point to the curve selected by the edit mode.
    pub fn place_point(&mut self, position: Vec2) {
        let target = match self.mode {
            EditMode::Profile => &mut self.profile,
            EditMode::Axis => &mut self.axis,
        };
        target.append(position.extend(0.0));
        debug!(mode = ?self.mode, x = position.x, y = position.y, "Placed point");
    }

    /// Recompute the mesh from the current curves.
    ///
    /// On success the new mesh replaces the old one; on failure the previous
    /// mesh stays in place and the failure is counted.
    pub fn rebuild(&mut self) -> Result<&Mesh> {
        match lathe::build_with(&self.profile, &self.axis, &self.lathe) {
            Ok(mesh) => {
                self.mesh = mesh;
                self.mesh_revision += 1;
                Ok(&self.mesh)
            }
            Err(e) => {
                self.failed_rebuilds += 1;
                Err(e)
            }
        }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Bumped on every successful rebuild.
    pub fn mesh_revision(&self) -> u64 {
        self.mesh_revision
    }

    pub fn failed_rebuilds(&self) -> usize {
        self.failed_rebuilds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LatheError;

    fn small_config() -> LatheConfig {
        LatheConfig::with_ring_resolution(8)
    }

    #[test]
    fn new_scene_has_default_axis() {
        let scene = SceneState::new(small_config());
        assert!(scene.profile.is_empty());
        assert_eq!(scene.axis.len(), 2);
        assert_eq!(scene.axis.last(), Some(glam::Vec3::new(0.0, 5.0, 0.0)));
        assert_eq!(scene.mode, EditMode::Profile);
        assert_eq!(scene.view, ViewMode::Sketch);
        assert!(scene.mesh().is_empty());
    }

    #[test]
    fn modes_toggle_back_and_forth() {
        let mut mode = EditMode::default();
        mode.toggle();
        assert_eq!(mode, EditMode::Axis);
        mode.toggle();
        assert_eq!(mode, EditMode::Profile);

        let mut view = ViewMode::default();
        view.toggle();
        assert_eq!(view, ViewMode::Orbit);
        view.toggle();
        assert_eq!(view, ViewMode::Sketch);
    }

    #[test]
    fn place_point_follows_mode() {
        let mut scene = SceneState::with_curves(Curve::new(), Curve::new(), small_config());
        scene.place_point(Vec2::new(0.5, 0.5));
        scene.mode.toggle();
        scene.place_point(Vec2::new(0.0, -1.0));

        assert_eq!(scene.profile.points(), &[glam::Vec3::new(0.5, 0.5, 0.0)]);
        assert_eq!(scene.axis.points(), &[glam::Vec3::new(0.0, -1.0, 0.0)]);
    }

    #[test]
    fn successful_rebuild_replaces_mesh() {
        let mut scene = SceneState::new(small_config());
        for p in [[1.0, 0.0], [1.5, 1.0], [1.0, 2.0]] {
            scene.place_point(Vec2::from(p));
        }

        let vertices = scene.rebuild().unwrap().vertex_count();
        assert_eq!(vertices, 24);
        assert_eq!(scene.mesh_revision(), 1);
        assert_eq!(scene.failed_rebuilds(), 0);
    }

    #[test]
    fn failed_rebuild_keeps_previous_mesh() {
        let mut scene = SceneState::new(small_config());
        for p in [[1.0, 0.0], [1.5, 1.0], [1.0, 2.0]] {
            scene.place_point(Vec2::from(p));
        }
        scene.rebuild().unwrap();
        let good = scene.mesh().clone();
        let profile_before = scene.profile.clone();

        // Break the axis and try again
        scene.axis.replace(vec![glam::Vec3::ZERO]);
        let err = scene.rebuild().unwrap_err();
        assert!(matches!(err, LatheError::InvalidAxis(_)));

        assert_eq!(scene.mesh(), &good);
        assert_eq!(scene.mesh_revision(), 1);
        assert_eq!(scene.failed_rebuilds(), 1);
        assert_eq!(scene.profile, profile_before);

        // Fix the axis and retry
        scene.axis.append(glam::Vec3::new(0.0, 3.0, 0.0));
        assert!(scene.rebuild().is_ok());
        assert_eq!(scene.mesh_revision(), 2);
    }
}
