//! The built-in algorithms.

mod field_visualization;
mod grid_visualization;
mod structured_grid;
mod unstructured_grid;

pub use field_visualization::FieldVisualization;
pub use grid_visualization::GridVisualization;
pub use structured_grid::StructuredGrid;
pub use unstructured_grid::UnstructuredGrid;
