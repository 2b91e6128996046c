use std::fs;
use std::path::Path;

use glam::{Vec2, Vec3};
use serde::Deserialize;

use crate::config::LatheConfig;
use crate::error::{LatheError, Result};
use crate::types::Curve;

use super::events::SceneEvent;
use super::input::Viewport;
use super::state::SceneState;

/// A recorded sketch session: optional starting curves plus the semantic
/// events to replay.
#[derive(Debug, Clone, Deserialize)]
pub struct EventScript {
    /// Window size `[width, height]`, required by `click` events.
    #[serde(default)]
    pub viewport: Option<[f32; 2]>,
    /// Starting axis; the default center line when absent.
    #[serde(default)]
    pub axis: Option<Vec<[f32; 2]>>,
    #[serde(default)]
    pub profile: Vec<[f32; 2]>,
    pub events: Vec<ScriptEvent>,
}

/// One entry of the script's `events` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    PointPlaced { position: [f32; 2] },
    /// Raw cursor position in pixels, mapped through the viewport.
    Click { cursor: [f32; 2] },
    ProfilePointPlaced { position: [f32; 2] },
    AxisPointPlaced { position: [f32; 2] },
    RebuildRequested,
    ModeToggled,
    ViewToggled,
}

impl EventScript {
    /// Load a script from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LatheError::Input(format!(
                "Script file not found: {}",
                path.display()
            )));
        }
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| LatheError::Input(format!("Invalid event script: {e}")))
    }

    /// Scene holding the script's starting curves.
    pub fn initial_scene(&self, lathe: LatheConfig) -> SceneState {
        let mut scene = SceneState::new(lathe);
        if let Some(axis) = &self.axis {
            scene.axis = Curve::from_xy(axis);
        }
        if !self.profile.is_empty() {
            scene
                .profile
                .replace(self.profile.iter().map(|p| Vec3::new(p[0], p[1], 0.0)).collect());
        }
        scene
    }

    /// Translate script entries into scene events, in order.
    pub fn to_events(&self) -> Result<Vec<SceneEvent>> {
        let viewport = self.viewport.map(|[w, h]| Viewport::new(w, h));

        self.events
            .iter()
            .enumerate()
            .map(|(i, e)| -> Result<SceneEvent> {
                Ok(match *e {
                    ScriptEvent::PointPlaced { position } => {
                        SceneEvent::PointPlaced(Vec2::from(position))
                    }
                    ScriptEvent::Click { cursor } => {
                        let vp = viewport.ok_or_else(|| {
                            LatheError::Input(format!(
                                "event {i}: click requires a viewport"
                            ))
                        })?;
                        SceneEvent::PointPlaced(vp.to_ndc(Vec2::from(cursor)))
                    }
                    ScriptEvent::ProfilePointPlaced { position } => {
                        SceneEvent::ProfilePointPlaced(Vec2::from(position))
                    }
                    ScriptEvent::AxisPointPlaced { position } => {
                        SceneEvent::AxisPointPlaced(Vec2::from(position))
                    }
                    ScriptEvent::RebuildRequested => SceneEvent::RebuildRequested,
                    ScriptEvent::ModeToggled => SceneEvent::ModeToggled,
                    ScriptEvent::ViewToggled => SceneEvent::ViewToggled,
                })
            })
            .collect()
    }
}
