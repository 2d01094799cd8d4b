//! Grids: points plus typed cells referencing them.
//!
//! # Overview
//!
//! A [`Grid`] owns an ordered list of points and an ordered list of cells.
//! Each cell has a [`CellType`] and references its corners by `u32` index.
//! Construction checks that every index is in range and that each cell has
//! exactly as many indices as its type requires.
//!
//! # Corner conventions
//!
//! Quads list their corners counter-clockwise (0-1-2-3). Hexahedra list the
//! bottom face first (0-1-2-3); corners 7, 6, 5, 4 sit above 0, 1, 2, 3:
//!
//! ```text
//!        4--------5
//!       /|       /|
//!      / |      / |
//!     7--------6  |
//!     |  |     |  |
//!     |  3-----|--2
//!     | /      | /
//!     |/       |/
//!     0--------1
//! ```

mod uniform;

pub use uniform::{flatten_node_index, MAX_UNIFORM_NODES};

use std::any::Any;
use std::sync::Arc;

use fieldvis_core::{Dataset, FieldvisError, Result};
use glam::Vec3;

/// Topology of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    /// A single vertex.
    Point,
    /// A line segment (2 vertices).
    Line,
    /// A triangle (3 vertices).
    Triangle,
    /// A quadrilateral (4 vertices).
    Quad,
    /// A tetrahedron (4 vertices).
    Tetrahedron,
    /// A pyramid with a quad base (5 vertices).
    Pyramid,
    /// A triangular prism (6 vertices).
    Prism,
    /// A hexahedron (8 vertices).
    Hexahedron,
}

impl CellType {
    /// Number of vertex indices a cell of this type references.
    pub fn num_vertices(self) -> usize {
        match self {
            Self::Point => 1,
            Self::Line => 2,
            Self::Triangle => 3,
            Self::Quad | Self::Tetrahedron => 4,
            Self::Pyramid => 5,
            Self::Prism => 6,
            Self::Hexahedron => 8,
        }
    }

    /// Returns the type name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Line => "line",
            Self::Triangle => "triangle",
            Self::Quad => "quad",
            Self::Tetrahedron => "tetrahedron",
            Self::Pyramid => "pyramid",
            Self::Prism => "prism",
            Self::Hexahedron => "hexahedron",
        }
    }
}

/// A borrowed view of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell<'a> {
    cell_type: CellType,
    indices: &'a [u32],
}

impl<'a> Cell<'a> {
    /// Returns the cell type.
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// Returns the number of corners.
    pub fn num_vertices(&self) -> usize {
        self.indices.len()
    }

    /// Returns the vertex index of corner `j`.
    pub fn index(&self, j: usize) -> u32 {
        self.indices[j]
    }

    /// Returns all corner indices.
    pub fn indices(&self) -> &'a [u32] {
        self.indices
    }
}

/// An unstructured grid of points and typed cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    points: Vec<Vec3>,
    cell_types: Vec<CellType>,
    // Start of each cell's indices; cell i spans offsets[i]..offsets[i + 1]
    offsets: Vec<usize>,
    indices: Vec<u32>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Grid {
    /// Creates a grid with points and no cells.
    pub fn new(points: Vec<Vec3>) -> Self {
        Self {
            points,
            cell_types: Vec::new(),
            offsets: vec![0],
            indices: Vec::new(),
        }
    }

    /// Creates a grid from runs of equally typed cells.
    ///
    /// `cell_counts` lists `(type, count)` runs in order; `indices` holds the
    /// corners of all cells back to back. Runs whose total corner count
    /// overflows `usize` can never match and are reported as a size mismatch.
    pub fn from_cell_counts(
        points: Vec<Vec3>,
        cell_counts: &[(CellType, usize)],
        indices: &[u32],
    ) -> Result<Self> {
        let expected = cell_counts
            .iter()
            .try_fold(0_usize, |acc, &(t, n)| {
                t.num_vertices().checked_mul(n)?.checked_add(acc)
            })
            .ok_or(FieldvisError::SizeMismatch {
                expected: usize::MAX,
                actual: indices.len(),
            })?;
        if expected != indices.len() {
            return Err(FieldvisError::SizeMismatch {
                expected,
                actual: indices.len(),
            });
        }

        let mut grid = Self::new(points);
        let mut cursor = 0;
        for &(cell_type, count) in cell_counts {
            for _ in 0..count {
                let n = cell_type.num_vertices();
                grid.push_cell(cell_type, &indices[cursor..cursor + n])?;
                cursor += n;
            }
        }
        Ok(grid)
    }

    /// Appends a cell, checking its arity and index range.
    pub fn push_cell(&mut self, cell_type: CellType, corners: &[u32]) -> Result<()> {
        if corners.len() != cell_type.num_vertices() {
            return Err(FieldvisError::CellArity {
                cell_type: cell_type.name(),
                expected: cell_type.num_vertices(),
                actual: corners.len(),
            });
        }
        if let Some(&index) = corners.iter().find(|&&i| i as usize >= self.points.len()) {
            return Err(FieldvisError::IndexOutOfBounds {
                index,
                len: self.points.len(),
            });
        }

        self.cell_types.push(cell_type);
        self.indices.extend_from_slice(corners);
        self.offsets.push(self.indices.len());
        Ok(())
    }

    /// Returns the number of points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the points.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Returns the number of cells.
    pub fn num_cells(&self) -> usize {
        self.cell_types.len()
    }

    /// Returns cell `i`, or `None` if out of range.
    pub fn cell(&self, i: usize) -> Option<Cell<'_>> {
        let cell_type = *self.cell_types.get(i)?;
        Some(Cell {
            cell_type,
            indices: &self.indices[self.offsets[i]..self.offsets[i + 1]],
        })
    }

    /// Iterates over all cells in order.
    pub fn cells(&self) -> impl Iterator<Item = Cell<'_>> + '_ {
        (0..self.num_cells()).filter_map(move |i| self.cell(i))
    }

    /// Returns the number of cells of the given type.
    pub fn count_cells(&self, cell_type: CellType) -> usize {
        self.cell_types.iter().filter(|&&t| t == cell_type).count()
    }

    /// Returns the axis-aligned bounding box, or `None` for an empty grid.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        if self.points.is_empty() {
            return None;
        }

        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for &p in &self.points {
            min = min.min(p);
            max = max.max(p);
        }
        Some((min, max))
    }
}

impl Dataset for Grid {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }

    fn type_name(&self) -> &'static str {
        "Grid"
    }
}
