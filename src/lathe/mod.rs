//! Lathe mesh builder.
//!
//! Sweeps a profile curve around an axis curve: every profile point is
//! projected onto the axis, a local frame is derived from that projection,
//! and a ring of `M` vertices with a periodically modulated radius is emitted
//! around it. Rings are stitched into a grid that wraps in both the ring and
//! the profile direction.

pub mod frame;
pub mod topology;

use std::f64::consts::TAU;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::LatheConfig;
use crate::error::{LatheError, Result};
use crate::types::{Curve, Mesh};

use frame::{SweepFrame, sweep_frames};
use topology::grid_indices;

/// Smallest ring resolution that still encloses area.
pub const MIN_RING_RESOLUTION: usize = 3;

/// Build a lathe mesh with default radius and UV parameters.
pub fn build(profile: &Curve, axis: &Curve, ring_resolution: usize) -> Result<Mesh> {
    build_with(profile, axis, &LatheConfig::with_ring_resolution(ring_resolution))
}

/// Build a lathe mesh from the current curves.
///
/// Always a full recompute. Inputs are validated before any geometry is
/// produced, so an error never comes with a partially populated mesh. An
/// empty profile is not an error and yields an empty mesh.
pub fn build_with(profile: &Curve, axis: &Curve, config: &LatheConfig) -> Result<Mesh> {
    let m = config.ring_resolution;
    if m < MIN_RING_RESOLUTION {
        return Err(LatheError::DegenerateRing(m));
    }

    if profile.is_empty() {
        warn!("Empty profile, producing empty mesh");
        return Ok(Mesh::default());
    }

    validate_axis(axis)?;

    let n = profile.len();
    if n < 2 {
        return Err(LatheError::DegenerateProfile(format!(
            "need at least 2 profile points for a tangent estimate, got {n}"
        )));
    }

    let vertex_count = n
        .checked_mul(m)
        .filter(|&c| c <= u32::MAX as usize)
        .ok_or(LatheError::MeshTooLarge(n.saturating_mul(m)))?;

    // Snapshot both curves so indices cannot shift mid-build
    let profile_pts = profile.to_dvec2();
    let axis_pts = axis.to_dvec2();

    let frames = sweep_frames(&profile_pts, &axis_pts)?;
    let ring = RingTable::new(m, config);

    let rings: Vec<RingVertices> = frames
        .par_iter()
        .enumerate()
        .map(|(j, frame)| emit_ring(frame, j, n, &ring, config))
        .collect();

    let mut mesh = Mesh {
        positions: Vec::with_capacity(vertex_count * 3),
        normals: Vec::with_capacity(vertex_count * 3),
        uvs: Vec::with_capacity(vertex_count * 2),
        indices: grid_indices(n, m),
    };
    for r in rings {
        mesh.positions.extend_from_slice(&r.positions);
        mesh.normals.extend_from_slice(&r.normals);
        mesh.uvs.extend_from_slice(&r.uvs);
    }

    debug!(
        profile_points = n,
        ring_resolution = m,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        radius = config.radius.name(),
        "Built lathe mesh"
    );

    Ok(mesh)
}

fn validate_axis(axis: &Curve) -> Result<()> {
    if axis.len() < 2 {
        return Err(LatheError::InvalidAxis(format!(
            "need at least 2 points, got {}",
            axis.len()
        )));
    }
    if !axis.has_distinct_points() {
        return Err(LatheError::InvalidAxis(
            "all axis points coincide".to_string(),
        ));
    }
    Ok(())
}

/// Per-step ring angle data shared by every profile point.
struct RingTable {
    cos: Vec<f64>,
    sin: Vec<f64>,
    radius: Vec<f64>,
}

impl RingTable {
    fn new(m: usize, config: &LatheConfig) -> Self {
        let mut table = RingTable {
            cos: Vec::with_capacity(m),
            sin: Vec::with_capacity(m),
            radius: Vec::with_capacity(m),
        };
        let inc = TAU / m as f64;
        for i in 0..m {
            let t = inc * i as f64;
            let (s, c) = t.sin_cos();
            table.cos.push(c);
            table.sin.push(s);
            table.radius.push(config.radius.radius(t));
        }
        table
    }

    fn len(&self) -> usize {
        self.cos.len()
    }
}

struct RingVertices {
    positions: Vec<f32>,
    normals: Vec<f32>,
    uvs: Vec<f32>,
}

/// Emit the `M` vertices of profile point `j` (f64 math, f32 output).
fn emit_ring(
    frame: &SweepFrame,
    j: usize,
    n: usize,
    ring: &RingTable,
    config: &LatheConfig,
) -> RingVertices {
    let m = ring.len();
    let mut out = RingVertices {
        positions: Vec::with_capacity(m * 3),
        normals: Vec::with_capacity(m * 3),
        uvs: Vec::with_capacity(m * 2),
    };

    let v = config.uv.offset + config.uv.scale * j as f64 / (n - 1) as f64;

    for i in 0..m {
        let (c, s, r) = (ring.cos[i], ring.sin[i], ring.radius[i]);

        let p = frame.ring_point(c, s, r);
        out.positions
            .extend_from_slice(&[p.x as f32, p.y as f32, p.z as f32]);

        let nrm = frame.ring_normal(c, s, r);
        out.normals
            .extend_from_slice(&[nrm.x as f32, nrm.y as f32, nrm.z as f32]);

        let u = config.uv.offset + config.uv.scale * i as f64 / m as f64;
        out.uvs.extend_from_slice(&[u as f32, v as f32]);
    }

    out
}
