use glam::Vec2;

/// Semantic input events, in the sketch plane's normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    /// Generic click, routed to the profile or the axis by the edit mode.
    PointPlaced(Vec2),
    ProfilePointPlaced(Vec2),
    AxisPointPlaced(Vec2),
    RebuildRequested,
    ModeToggled,
    ViewToggled,
}

/// Payload-free tag of a [`SceneEvent`], used as the subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointPlaced,
    ProfilePointPlaced,
    AxisPointPlaced,
    RebuildRequested,
    ModeToggled,
    ViewToggled,
}

impl SceneEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            SceneEvent::PointPlaced(_) => EventKind::PointPlaced,
            SceneEvent::ProfilePointPlaced(_) => EventKind::ProfilePointPlaced,
            SceneEvent::AxisPointPlaced(_) => EventKind::AxisPointPlaced,
            SceneEvent::RebuildRequested => EventKind::RebuildRequested,
            SceneEvent::ModeToggled => EventKind::ModeToggled,
            SceneEvent::ViewToggled => EventKind::ViewToggled,
        }
    }
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::PointPlaced => "point_placed",
            EventKind::ProfilePointPlaced => "profile_point_placed",
            EventKind::AxisPointPlaced => "axis_point_placed",
            EventKind::RebuildRequested => "rebuild_requested",
            EventKind::ModeToggled => "mode_toggled",
            EventKind::ViewToggled => "view_toggled",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(SceneEvent::PointPlaced(Vec2::ZERO).kind(), EventKind::PointPlaced);
        assert_eq!(
            SceneEvent::ProfilePointPlaced(Vec2::ONE).kind(),
            EventKind::ProfilePointPlaced
        );
        assert_eq!(
            SceneEvent::AxisPointPlaced(Vec2::ONE).kind(),
            EventKind::AxisPointPlaced
        );
        assert_eq!(SceneEvent::RebuildRequested.kind(), EventKind::RebuildRequested);
        assert_eq!(SceneEvent::ModeToggled.kind(), EventKind::ModeToggled);
        assert_eq!(SceneEvent::ViewToggled.kind(), EventKind::ViewToggled);
    }

    #[test]
    fn kind_display() {
        assert_eq!(EventKind::RebuildRequested.to_string(), "rebuild_requested");
        assert_eq!(EventKind::AxisPointPlaced.to_string(), "axis_point_placed");
    }
}
