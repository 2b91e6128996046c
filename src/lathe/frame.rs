use std::f64::consts::FRAC_PI_2;

use glam::{DVec2, DVec3};
use rayon::prelude::*;

use crate::error::Result;
use crate::geometry::polyline::project;

/// Local sweep frame of one profile point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepFrame {
    /// Projection of the profile point onto the axis (z = 0).
    pub origin: DVec2,
    /// Distance from the profile point to the axis; scales the ring.
    pub distance: f64,
    /// Rotation in the X-Y plane aligning the around-Y ring with the
    /// axis → profile direction.
    pub angle: f64,
    /// Finite-difference outward direction in the profile plane.
    pub normal: DVec2,
}

impl SweepFrame {
    /// Ring point at angle `t` for radius multiplier `r`.
    pub fn ring_point(&self, cos_t: f64, sin_t: f64, r: f64) -> DVec3 {
        let rot0 = DVec3::new(r * cos_t, 0.0, r * sin_t) * self.distance;
        let (s, c) = self.angle.sin_cos();
        DVec3::new(
            rot0.x * c - rot0.y * s + self.origin.x,
            rot0.x * s + rot0.y * c + self.origin.y,
            rot0.z,
        )
    }

    /// Unit normal at angle `t`. Falls back to the radial direction when
    /// the profile normal vanishes.
    pub fn ring_normal(&self, cos_t: f64, sin_t: f64, r: f64) -> DVec3 {
        let nm = self.normal;
        DVec3::new(nm.x * r * cos_t, nm.y, nm.x * r * sin_t)
            .try_normalize()
            .unwrap_or(DVec3::new(cos_t, 0.0, sin_t))
    }
}

/// Per-point outward directions of a cyclic profile.
///
/// The vector to the next neighbor is rotated by −90° and the vector to the
/// previous neighbor by +90°; each is normalized (a zero-length vector
/// contributes zero) and the two are averaged.
pub fn profile_normals(profile: &[DVec2]) -> Vec<DVec2> {
    let n = profile.len();
    (0..n)
        .map(|j| {
            let p = profile[j];
            let next = profile[(j + 1) % n];
            let prev = profile[(j + n - 1) % n];

            let to_next = next - p;
            let to_prev = prev - p;
            let a = DVec2::new(to_next.y, -to_next.x)
                .try_normalize()
                .unwrap_or(DVec2::ZERO);
            let b = to_prev.perp().try_normalize().unwrap_or(DVec2::ZERO);
            (a + b) * 0.5
        })
        .collect()
}

/// Rotation aligning the canonical sweep with `offset = point − projection`.
pub fn sweep_angle(offset: DVec2) -> f64 {
    -offset.x.atan2(offset.y) + FRAC_PI_2
}

/// Build one sweep frame per profile point by projecting onto the axis.
pub fn sweep_frames(profile: &[DVec2], axis: &[DVec2]) -> Result<Vec<SweepFrame>> {
    let normals = profile_normals(profile);

    profile
        .par_iter()
        .zip(normals.par_iter())
        .map(|(&p, &normal)| {
            let projection = project(axis, p)?;
            Ok(SweepFrame {
                origin: projection.point,
                distance: projection.distance,
                angle: sweep_angle(p - projection.point),
                normal,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn square() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn square_normals_point_outward() {
        let normals = profile_normals(&square());
        assert_eq!(normals[0], DVec2::new(-0.5, -0.5));
        assert_eq!(normals[1], DVec2::new(0.5, -0.5));
        assert_eq!(normals[2], DVec2::new(0.5, 0.5));
        assert_eq!(normals[3], DVec2::new(-0.5, 0.5));
    }

    #[test]
    fn duplicate_neighbors_do_not_produce_nan() {
        let profile = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
        ];
        for n in profile_normals(&profile) {
            assert!(n.is_finite());
        }
    }

    #[test]
    fn two_point_profile_normals_cancel() {
        let profile = vec![DVec2::new(0.0, 0.0), DVec2::new(0.0, 1.0)];
        for n in profile_normals(&profile) {
            assert_eq!(n, DVec2::ZERO);
        }
    }

    #[test]
    fn sweep_angle_for_cardinal_offsets() {
        // Profile to the right of a vertical axis needs no rotation
        assert_abs_diff_eq!(sweep_angle(DVec2::new(1.0, 0.0)), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sweep_angle(DVec2::new(0.0, 1.0)), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(sweep_angle(DVec2::new(-1.0, 0.0)), PI, epsilon = 1e-12);
        // Zero offset still yields a finite angle
        assert!(sweep_angle(DVec2::ZERO).is_finite());
    }

    #[test]
    fn frames_measure_axis_distance() {
        let axis = [DVec2::new(0.0, -1.0), DVec2::new(0.0, 2.0)];
        let frames = sweep_frames(&square(), &axis).unwrap();

        assert_eq!(frames.len(), 4);
        assert_abs_diff_eq!(frames[0].distance, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(frames[1].distance, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(frames[2].distance, 1.0, epsilon = 1e-12);
        assert!(frames[2].origin.abs_diff_eq(DVec2::new(0.0, 1.0), 1e-12));
        assert_abs_diff_eq!(frames[1].angle, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn ring_point_circles_the_origin() {
        let frame = SweepFrame {
            origin: DVec2::new(0.0, 2.0),
            distance: 1.0,
            angle: 0.0,
            normal: DVec2::X,
        };
        for k in 0..8 {
            let t = k as f64 * PI / 4.0;
            let p = frame.ring_point(t.cos(), t.sin(), 3.0);
            assert_abs_diff_eq!(p.y, 2.0, epsilon = 1e-12);
            let radial = DVec2::new(p.x, p.z).length();
            assert_abs_diff_eq!(radial, 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn ring_point_rotation_follows_angle() {
        let frame = SweepFrame {
            origin: DVec2::ZERO,
            distance: 1.0,
            angle: FRAC_PI_2,
            normal: DVec2::X,
        };
        // t = 0: canonical point (r, 0, 0) rotated a quarter turn onto +Y
        let p = frame.ring_point(1.0, 0.0, 2.0);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn ring_normal_is_unit_or_radial_fallback() {
        let frame = SweepFrame {
            origin: DVec2::ZERO,
            distance: 0.0,
            angle: 0.0,
            normal: DVec2::new(0.5, -0.5),
        };
        let n = frame.ring_normal(0.6, 0.8, 3.0);
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-12);
        // Unnormalized (0.5·3·0.6, -0.5, 0.5·3·0.8) = (0.9, -0.5, 1.2)
        let expected = DVec3::new(0.9, -0.5, 1.2).normalize();
        assert!(n.abs_diff_eq(expected, 1e-12));

        let flat = SweepFrame {
            normal: DVec2::ZERO,
            ..frame
        };
        let n = flat.ring_normal(0.6, 0.8, 3.0);
        assert_eq!(n, DVec3::new(0.6, 0.0, 0.8));
    }
}
