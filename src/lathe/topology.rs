/// Flattened vertex index of ring step `i` on profile point `j`.
///
/// Both dimensions wrap: `j` modulo the profile count `n`, `i` modulo the
/// ring resolution `m`.
#[inline]
pub fn vertex_index(i: usize, j: usize, n: usize, m: usize) -> u32 {
    ((j % n) * m + (i % m)) as u32
}

/// Index buffer for an `n × m` grid wrapped in both directions.
///
/// Two triangles per cell, `6·n·m` indices in total, emitted profile-major
/// to match the vertex layout. The caller guarantees `n·m` fits in `u32`.
pub fn grid_indices(n: usize, m: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity(6 * n * m);
    for j in 0..n {
        for i in 0..m {
            let a = vertex_index(i, j, n, m);
            let b = vertex_index(i + 1, j, n, m);
            let c = vertex_index(i, j + 1, n, m);
            let d = vertex_index(i + 1, j + 1, n, m);
            indices.extend_from_slice(&[a, b, c, d, c, b]);
        }
    }
    indices
}
