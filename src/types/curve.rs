use glam::{DVec2, Vec3};

/// An ordered, mutable sequence of points.
///
/// Point order is the path of the curve: consecutive points form segments.
/// `revision` is bumped on every mutation so a renderer holding a derived
/// line-strip buffer knows to re-upload it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    points: Vec<Vec3>,
    revision: u64,
}

impl Curve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a curve from planar `(x, y)` points at `z = 0`.
    pub fn from_xy(points: &[[f32; 2]]) -> Self {
        let mut curve = Self::new();
        curve.replace(points.iter().map(|p| Vec3::new(p[0], p[1], 0.0)).collect());
        curve
    }

    /// Extend the curve by one point. Always grows, never validates.
    pub fn append(&mut self, point: Vec3) {
        self.points.push(point);
        self.revision += 1;
    }

    /// Replace every point at once.
    pub fn replace(&mut self, points: Vec<Vec3>) {
        self.points = points;
        self.revision += 1;
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn last(&self) -> Option<Vec3> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of line segments; zero below two points.
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Mutation counter for derived render buffers.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Planar f64 snapshot of the points (z dropped).
    pub fn to_dvec2(&self) -> Vec<DVec2> {
        self.points.iter().map(|p| p.truncate().as_dvec2()).collect()
    }

    /// Whether at least two points differ in the sketch plane (z ignored).
    pub fn has_distinct_points(&self) -> bool {
        match self.points.first() {
            Some(first) => {
                let first = first.truncate();
                self.points.iter().any(|p| p.truncate() != first)
            }
            None => false,
        }
    }

    /// Tightly packed `[x, y, z]` f32 bytes for a line-strip vertex buffer.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_curve() {
        let curve = Curve::new();
        assert!(curve.is_empty());
        assert_eq!(curve.len(), 0);
        assert_eq!(curve.segment_count(), 0);
        assert_eq!(curve.revision(), 0);
        assert_eq!(curve.last(), None);
        assert!(!curve.has_distinct_points());
        assert!(curve.vertex_bytes().is_empty());
    }

    #[test]
    fn append_keeps_prior_points_in_order() {
        let mut curve = Curve::from_xy(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
        let before = curve.points().to_vec();

        let p = Vec3::new(0.25, -0.5, 0.0);
        curve.append(p);

        assert_eq!(curve.len(), 4);
        assert_eq!(curve.last(), Some(p));
        assert_eq!(&curve.points()[..3], before.as_slice());
        assert_eq!(curve.segment_count(), 3);
    }

    #[test]
    fn every_mutation_bumps_revision() {
        let mut curve = Curve::new();
        curve.append(Vec3::ZERO);
        curve.append(Vec3::X);
        assert_eq!(curve.revision(), 2);

        curve.replace(vec![Vec3::Y]);
        assert_eq!(curve.revision(), 3);
        assert_eq!(curve.points(), &[Vec3::Y]);
    }

    #[test]
    fn planar_snapshot_drops_z() {
        let mut curve = Curve::new();
        curve.append(Vec3::new(0.5, -2.0, 9.0));
        let snap = curve.to_dvec2();
        assert_eq!(snap, vec![DVec2::new(0.5, -2.0)]);
    }

    #[test]
    fn distinct_points_detection() {
        let same = Curve::from_xy(&[[1.0, 1.0], [1.0, 1.0]]);
        assert!(!same.has_distinct_points());

        let different = Curve::from_xy(&[[1.0, 1.0], [1.0, 1.0], [0.0, 2.0]]);
        assert!(different.has_distinct_points());
    }

    #[test]
    fn distinct_points_ignore_depth() {
        let mut stacked = Curve::new();
        stacked.replace(vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)]);
        assert!(!stacked.has_distinct_points());
    }

    #[test]
    fn vertex_bytes_are_packed_xyz() {
        let curve = Curve::from_xy(&[[1.0, 2.0], [3.0, 4.0]]);
        let bytes = curve.vertex_bytes();
        assert_eq!(bytes.len(), 2 * 12);

        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats, &[1.0, 2.0, 0.0, 3.0, 4.0, 0.0]);
    }
}
