//! Per-vertex normals for indexed triangle lists.

use glam::Vec3;

/// Computes smooth vertex normals for an indexed triangle list.
///
/// Each triangle contributes its area-weighted face normal to its three
/// corners. Vertices not referenced by any triangle, and triangles with
/// out-of-range indices, contribute nothing; such vertices get a zero normal.
pub fn compute_normals(vertices: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; vertices.len()];

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= vertices.len() || b >= vertices.len() || c >= vertices.len() {
            continue;
        }

        // Cross product length is twice the area, so this is already area-weighted
        let weighted = (vertices[b] - vertices[a]).cross(vertices[c] - vertices[a]);
        normals[a] += weighted;
        normals[b] += weighted;
        normals[c] += weighted;
    }

    for normal in &mut normals {
        *normal = normal.normalize_or_zero();
    }

    normals
}
