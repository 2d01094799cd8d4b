//! Uniform lattice construction.

use fieldvis_core::{FieldvisError, Result};
use glam::{UVec3, Vec3};

use super::{CellType, Grid};

/// Largest number of nodes a uniform grid may have.
///
/// A full hexahedral lattice at this size already needs about 2 GiB of cell
/// indices.
pub const MAX_UNIFORM_NODES: u64 = 1 << 26;

impl Grid {
    /// Builds a uniform lattice of `node_dim` nodes starting at `origin`.
    ///
    /// Node `(i, j, k)` sits at `origin + (i, j, k) * spacing` and has flat
    /// index `i + nx * (j + ny * k)`. When every axis has at least two nodes
    /// the cells are hexahedra; when exactly one axis is flat they are quads
    /// spanning the other two axes. Otherwise the grid has points only.
    ///
    /// Grids with more than [`MAX_UNIFORM_NODES`] nodes, or whose points
    /// cannot be allocated, fail with [`FieldvisError::GridTooLarge`].
    pub fn uniform(node_dim: UVec3, origin: Vec3, spacing: Vec3) -> Result<Self> {
        let nodes = u64::from(node_dim.x) * u64::from(node_dim.y) * u64::from(node_dim.z);
        if nodes > MAX_UNIFORM_NODES {
            return Err(FieldvisError::GridTooLarge { nodes });
        }

        let mut points = Vec::new();
        points
            .try_reserve_exact(nodes as usize)
            .map_err(|_| FieldvisError::GridTooLarge { nodes })?;
        for k in 0..node_dim.z {
            for j in 0..node_dim.y {
                for i in 0..node_dim.x {
                    let ijk = Vec3::new(i as f32, j as f32, k as f32);
                    points.push(origin + ijk * spacing);
                }
            }
        }

        let mut grid = Grid::new(points);
        let wide: Vec<usize> = (0..3).filter(|&a| node_dim[a] >= 2).collect();

        if wide.len() == 3 {
            for k in 0..node_dim.z - 1 {
                for j in 0..node_dim.y - 1 {
                    for i in 0..node_dim.x - 1 {
                        let n = |di: u32, dj: u32, dk: u32| {
                            flatten_node_index(node_dim, i + di, j + dj, k + dk)
                        };
                        let hex = [
                            n(0, 0, 0),
                            n(1, 0, 0),
                            n(1, 0, 1),
                            n(0, 0, 1),
                            n(0, 1, 1),
                            n(1, 1, 1),
                            n(1, 1, 0),
                            n(0, 1, 0),
                        ];
                        grid.push_cell(CellType::Hexahedron, &hex)?;
                    }
                }
            }
        } else if wide.len() == 2 && node_dim.min_element() == 1 {
            let (a, b) = (wide[0], wide[1]);
            for v in 0..node_dim[b] - 1 {
                for u in 0..node_dim[a] - 1 {
                    let n = |du: u32, dv: u32| {
                        let mut ijk = UVec3::ZERO;
                        ijk[a] = u + du;
                        ijk[b] = v + dv;
                        flatten_node_index(node_dim, ijk.x, ijk.y, ijk.z)
                    };
                    grid.push_cell(CellType::Quad, &[n(0, 0), n(1, 0), n(1, 1), n(0, 1)])?;
                }
            }
        }

        log::trace!(
            "uniform grid {node_dim}: {} points, {} cells",
            grid.num_points(),
            grid.num_cells()
        );
        Ok(grid)
    }
}

/// Flattens a 3D node index to a linear index, x varying fastest.
pub fn flatten_node_index(node_dim: UVec3, i: u32, j: u32, k: u32) -> u32 {
    i + node_dim.x * (j + node_dim.y * k)
}
