use glam::DVec2;

use crate::error::{LatheError, Result};

/// Closest point on a polyline to some query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Euclidean distance from the query to `point`.
    pub distance: f64,
    pub point: DVec2,
    /// Index of the winning segment (`polyline[segment]` → `polyline[segment + 1]`).
    pub segment: usize,
    /// Segment parameter in `[0, 1]`.
    pub t: f64,
}

/// Project `query` onto the nearest segment of `polyline`.
///
/// Each segment `(v, w)` is parameterized as `v + t·(w − v)` with `t` clamped
/// to `[0, 1]`. The first segment reaching the minimum distance wins; a
/// zero-length segment behaves as a single point (`t = 0`).
///
/// Fails with [`LatheError::Polyline`] when the polyline has fewer than two
/// points, since there is no segment to project onto.
pub fn project(polyline: &[DVec2], query: DVec2) -> Result<Projection> {
    if polyline.len() < 2 {
        return Err(LatheError::Polyline(format!(
            "projection needs at least 2 points, got {}",
            polyline.len()
        )));
    }

    let mut best: Option<Projection> = None;

    for (segment, pair) in polyline.windows(2).enumerate() {
        let (t, point) = closest_on_segment(pair[0], pair[1], query);
        let distance = query.distance(point);

        // Strict comparison keeps the first segment on ties
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(Projection {
                distance,
                point,
                segment,
                t,
            });
        }
    }

    best.ok_or_else(|| LatheError::Polyline("polyline has no segments".into()))
}

/// Clamped projection of `q` onto segment `v → w`, returning `(t, point)`.
fn closest_on_segment(v: DVec2, w: DVec2, q: DVec2) -> (f64, DVec2) {
    let d = w - v;
    let len_sq = d.length_squared();
    if len_sq <= f64::EPSILON * f64::EPSILON {
        return (0.0, v);
    }
    let t = ((q - v).dot(d) / len_sq).clamp(0.0, 1.0);
    (t, v + d * t)
}
