//! The fixed "house" mesh: a cube with a gabled roof.

use fieldvis_core::Result;
use glam::Vec3;

use crate::grid::{CellType, Grid};

/// Builds the house mesh.
///
/// The walls are one hexahedron over points 0..7 (a unit cube), the gables
/// are two triangles, and the roof is two quads meeting at the ridge between
/// points 8 and 9, which runs along z at height 1.5 above `x = 0.5`.
pub fn house() -> Result<Grid> {
    let points = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.5, 1.5, 1.0),
        Vec3::new(0.5, 1.5, 0.0),
    ];

    let cell_counts = [
        (CellType::Hexahedron, 1),
        (CellType::Triangle, 2),
        (CellType::Quad, 2),
    ];

    #[rustfmt::skip]
    let indices = [
        // walls
        0, 1, 2, 3, 4, 5, 6, 7,
        // gables
        7, 6, 9,
        4, 5, 8,
        // roof
        4, 7, 9, 8,
        6, 5, 8, 9,
    ];

    Grid::from_cell_counts(points, &cell_counts, &indices)
}
