use tracing::{debug, info, warn};

use super::bus::{EventBus, SubscriptionId};
use super::events::{EventKind, SceneEvent};

/// Subscribe the standard sketch behavior to `bus`:
///
/// - point events append to the profile, the axis, or (for the generic
///   event) whichever curve the edit mode selects
/// - a rebuild request recomputes the mesh; a failure is logged and the
///   previous mesh stays on screen
/// - toggle events flip the edit and view modes
pub fn install_default_handlers(bus: &mut EventBus) -> Vec<SubscriptionId> {
    vec![
        bus.subscribe(EventKind::PointPlaced, |event, scene| {
            if let SceneEvent::PointPlaced(p) = event {
                scene.place_point(*p);
            }
        }),
        bus.subscribe(EventKind::ProfilePointPlaced, |event, scene| {
            if let SceneEvent::ProfilePointPlaced(p) = event {
                scene.profile.append(p.extend(0.0));
                debug!(x = p.x, y = p.y, points = scene.profile.len(), "Profile point");
            }
        }),
        bus.subscribe(EventKind::AxisPointPlaced, |event, scene| {
            if let SceneEvent::AxisPointPlaced(p) = event {
                scene.axis.append(p.extend(0.0));
                debug!(x = p.x, y = p.y, points = scene.axis.len(), "Axis point");
            }
        }),
        bus.subscribe(EventKind::RebuildRequested, |_, scene| {
            let profile_points = scene.profile.len();
            let axis_points = scene.axis.len();
            match scene.rebuild() {
                Ok(mesh) => info!(
                    profile_points,
                    axis_points,
                    vertices = mesh.vertex_count(),
                    triangles = mesh.triangle_count(),
                    "Rebuilt mesh"
                ),
                Err(e) => warn!(%e, profile_points, axis_points, "Rebuild failed, keeping previous mesh"),
            }
        }),
        bus.subscribe(EventKind::ModeToggled, |_, scene| {
            scene.mode.toggle();
            info!(mode = ?scene.mode, "Edit mode");
        }),
        bus.subscribe(EventKind::ViewToggled, |_, scene| {
            scene.view.toggle();
            info!(view = ?scene.view, "View mode");
        }),
    ]
}
