//! Cell-to-primitive decomposition.
//!
//! Turns the cells of a [`Grid`] into a triangle list for solid shading and a
//! line list for the wireframe. Both lists index into the grid's points.
//!
//! | cell       | triangles              | lines                      |
//! |------------|------------------------|----------------------------|
//! | triangle   | (a,b,c)                | a-b, b-c, c-a              |
//! | quad       | (a,b,c), (a,c,d)       | a-b, b-c, c-d, d-a         |
//! | hexahedron | quad rule on each face | quad rule on each face     |
//!
//! Other cell types contribute nothing.

use fieldvis_core::{AbortFlag, Result};
use glam::Vec3;

use crate::grid::{Cell, CellType, Grid};

/// The six faces of a hexahedron as local corner indices.
///
/// Faces shared by two hexahedra are emitted once per cell.
pub const HEX_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [0, 1, 6, 7],
    [0, 3, 4, 7],
    [5, 6, 1, 2],
    [5, 6, 7, 4],
    [5, 2, 3, 4],
];

/// Which cells to decompose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellFilter {
    /// Every cell of the grid.
    #[default]
    All,
    /// Only the cell with this index; out-of-range selects nothing.
    Single(usize),
}

impl CellFilter {
    /// Builds a filter from a "single cell" switch and a signed cell index.
    ///
    /// A negative index never matches a cell.
    pub fn from_selection(single_cell: bool, cell_index: i64) -> Self {
        if single_cell {
            Self::Single(usize::try_from(cell_index).unwrap_or(usize::MAX))
        } else {
            Self::All
        }
    }

    fn selects(self, index: usize) -> bool {
        match self {
            Self::All => true,
            Self::Single(i) => i == index,
        }
    }
}

/// Triangle and line lists produced from a grid's cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderBuffers {
    /// Triangles for solid shading.
    pub triangles: Vec<[u32; 3]>,
    /// Line segments for the wireframe.
    pub lines: Vec<[u32; 2]>,
}

impl RenderBuffers {
    /// Returns the number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the number of line segments.
    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if neither list holds anything.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty() && self.lines.is_empty()
    }

    /// Flattens the triangle list into an index buffer.
    pub fn triangle_indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Expands the line list into segment endpoint positions.
    ///
    /// Each segment contributes its two endpoints back to back, the layout
    /// non-indexed line shaders expect.
    pub fn line_vertices(&self, points: &[Vec3]) -> Vec<Vec3> {
        self.lines
            .iter()
            .flat_map(|&[a, b]| [points[a as usize], points[b as usize]])
            .collect()
    }

    /// Returns the triangle list as bytes.
    pub fn triangle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Returns the line list as bytes.
    pub fn line_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lines)
    }

    fn push_triangle(&mut self, [a, b, c]: [u32; 3]) {
        self.triangles.push([a, b, c]);
        self.lines.extend([[a, b], [b, c], [c, a]]);
    }

    fn push_quad(&mut self, [a, b, c, d]: [u32; 4]) {
        self.triangles.extend([[a, b, c], [a, c, d]]);
        self.lines.extend([[a, b], [b, c], [c, d], [d, a]]);
    }

    fn push_cell(&mut self, cell: Cell<'_>) {
        match cell.cell_type() {
            CellType::Triangle => {
                self.push_triangle([cell.index(0), cell.index(1), cell.index(2)]);
            }
            CellType::Quad => {
                self.push_quad([cell.index(0), cell.index(1), cell.index(2), cell.index(3)]);
            }
            CellType::Hexahedron => {
                for [a, b, c, d] in HEX_FACES {
                    self.push_quad([cell.index(a), cell.index(b), cell.index(c), cell.index(d)]);
                }
            }
            CellType::Point
            | CellType::Line
            | CellType::Tetrahedron
            | CellType::Pyramid
            | CellType::Prism => {}
        }
    }
}

fn selected_cells(grid: &Grid, filter: CellFilter) -> impl Iterator<Item = Cell<'_>> + '_ {
    grid.cells()
        .enumerate()
        .filter(move |(i, _)| filter.selects(*i))
        .map(|(_, cell)| cell)
}

/// Decomposes the selected cells into triangles and line segments.
pub fn decompose(grid: &Grid, filter: CellFilter) -> RenderBuffers {
    let mut buffers = RenderBuffers::default();
    for cell in selected_cells(grid, filter) {
        buffers.push_cell(cell);
    }
    buffers
}

/// Like [`decompose`], but stops with `Err(Aborted)` once `abort` is raised.
///
/// The flag is checked before every cell; no partial output is returned.
pub fn try_decompose(grid: &Grid, filter: CellFilter, abort: &AbortFlag) -> Result<RenderBuffers> {
    let mut buffers = RenderBuffers::default();
    for cell in selected_cells(grid, filter) {
        abort.check()?;
        buffers.push_cell(cell);
    }
    Ok(buffers)
}
