use glam::{Vec2, Vec3};

use crate::error::{LatheError, Result};

/// Generated surface geometry, ready for GPU upload.
///
/// All buffers are contiguous `Vec<f32>` / `Vec<u32>` so they can be handed to
/// a vertex/index buffer (or the GLB writer) without copying. A mesh is only
/// ever replaced as a whole; there is no partial update path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Interleaved positions: [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Interleaved unit normals, one per position
    pub normals: Vec<f32>,
    /// Interleaved texture coordinates: [u, v, u, v, ...]
    pub uvs: Vec<f32>,
    /// Triangle indices into the vertex buffers
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Number of vertices (positions / 3).
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles (indices / 3).
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Whether the mesh contains no geometry.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[i * 3..i * 3 + 3])
    }

    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.normals[i * 3..i * 3 + 3])
    }

    pub fn uv(&self, i: usize) -> Vec2 {
        Vec2::from_slice(&self.uvs[i * 2..i * 2 + 2])
    }

    /// Iterate index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    pub fn max_index(&self) -> Option<u32> {
        self.indices.iter().copied().max()
    }

    /// Check attribute array lengths and index ranges.
    pub fn validate(&self) -> Result<()> {
        let n = self.vertex_count();
        if self.positions.len() % 3 != 0 {
            return Err(LatheError::Output(format!(
                "position buffer length {} is not a multiple of 3",
                self.positions.len()
            )));
        }
        if self.normals.len() != n * 3 {
            return Err(LatheError::Output(format!(
                "expected {} normal floats, found {}",
                n * 3,
                self.normals.len()
            )));
        }
        if self.uvs.len() != n * 2 {
            return Err(LatheError::Output(format!(
                "expected {} uv floats, found {}",
                n * 2,
                self.uvs.len()
            )));
        }
        if self.indices.len() % 3 != 0 {
            return Err(LatheError::Output(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }
        if let Some(bad) = self.indices.iter().find(|&&i| i as usize >= n) {
            return Err(LatheError::Output(format!(
                "index {bad} out of range for {n} vertices"
            )));
        }
        Ok(())
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
