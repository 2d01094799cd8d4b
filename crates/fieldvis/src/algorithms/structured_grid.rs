//! Uniform lattice generation.

use std::sync::Arc;

use fieldvis_core::{AbortFlag, FieldvisError, OptionSchema, Options, Result};
use fieldvis_structures::Grid;
use glam::{UVec3, Vec3};

use crate::algorithm::{Algorithm, OutputDecl, Outputs};

/// Builds a uniform grid of hexahedra from origin, node counts, and spacing.
#[derive(Debug, Default)]
pub struct StructuredGrid;

impl StructuredGrid {
    /// Creates the algorithm.
    pub fn new() -> Self {
        Self
    }
}

/// Converts the `extent` option into per-axis node counts.
///
/// Components are truncated toward zero; negative or non-finite components
/// are rejected.
fn node_dim(extent: Vec3) -> Result<UVec3> {
    let mut dim = UVec3::ZERO;
    for axis in 0..3 {
        let v = extent[axis];
        if !v.is_finite() || v < 0.0 {
            return Err(FieldvisError::InvalidOption {
                name: "extent".to_string(),
                reason: format!("component {axis} is {v}, expected a non-negative count"),
            });
        }
        dim[axis] = v as u32;
    }
    Ok(dim)
}

impl Algorithm for StructuredGrid {
    fn name(&self) -> &'static str {
        "Aufgabe1/StructuredGrid"
    }

    fn description(&self) -> &'static str {
        "Generate a uniform grid."
    }

    fn options(&self) -> OptionSchema {
        OptionSchema::new()
            .add("origin", "Grid origin", Vec3::ZERO)
            .add("extent", "Number of nodes (cell count + 1) per axis", Vec3::ZERO)
            .add("spacing", "Distance between neighboring nodes", Vec3::ZERO)
    }

    fn outputs(&self) -> &'static [OutputDecl] {
        const OUTPUTS: &[OutputDecl] = &[OutputDecl::data("grid")];
        OUTPUTS
    }

    fn execute(&self, options: &Options, abort: &AbortFlag) -> Result<Outputs> {
        let origin: Vec3 = options.get("origin")?;
        let extent: Vec3 = options.get("extent")?;
        let spacing: Vec3 = options.get("spacing")?;

        let dim = node_dim(extent)?;
        abort.check()?;
        let grid = Grid::uniform(dim, origin, spacing)?;

        let mut outputs = Outputs::new();
        outputs.set_data("grid", Arc::new(grid));
        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldvis_structures::CellType;

    fn run(overrides: &Options) -> Result<Outputs> {
        let algorithm = StructuredGrid::new();
        let options = Options::resolve(&algorithm.options(), overrides);
        algorithm.execute(&options, &AbortFlag::new())
    }

    #[test]
    fn test_builds_hex_grid() {
        let outputs = run(&Options::new()
            .with("origin", Vec3::new(-1.0, 0.0, 0.0))
            .with("extent", Vec3::new(3.0, 2.0, 2.0))
            .with("spacing", Vec3::splat(0.5)))
        .unwrap();

        let grid = outputs.data::<Grid>("grid").unwrap();
        assert_eq!(grid.num_points(), 12);
        assert_eq!(grid.count_cells(CellType::Hexahedron), 2);
        assert_eq!(grid.points()[11], Vec3::new(0.0, 0.5, 0.5));
    }

    #[test]
    fn test_default_options_give_empty_grid() {
        let outputs = run(&Options::new()).unwrap();
        let grid = outputs.data::<Grid>("grid").unwrap();
        assert_eq!(grid.num_points(), 0);
        assert_eq!(grid.num_cells(), 0);
    }

    #[test]
    fn test_fractional_extent_truncates() {
        assert_eq!(node_dim(Vec3::new(2.9, 1.0, 0.2)).unwrap(), UVec3::new(2, 1, 0));
    }

    #[test]
    fn test_rejects_negative_extent() {
        let err = run(&Options::new().with("extent", Vec3::new(2.0, -1.0, 2.0))).unwrap_err();
        assert!(matches!(err, FieldvisError::InvalidOption { name, .. } if name == "extent"));
        assert!(node_dim(Vec3::new(f32::NAN, 1.0, 1.0)).is_err());
    }

    #[test]
    fn test_extent_counts_nodes() {
        let schema = StructuredGrid::new().options();
        let extent = schema.get("extent").unwrap();
        assert!(extent.description.contains("nodes"));

        // Two nodes per axis make a single cell
        let outputs = run(&Options::new()
            .with("extent", Vec3::splat(2.0))
            .with("spacing", Vec3::ONE))
        .unwrap();
        assert_eq!(outputs.data::<Grid>("grid").unwrap().num_cells(), 1);
    }

    #[test]
    fn test_oversized_extent() {
        let err = run(&Options::new().with("extent", Vec3::splat(1600.0))).unwrap_err();
        assert!(matches!(err, FieldvisError::GridTooLarge { .. }));
    }

    #[test]
    fn test_abort() {
        let algorithm = StructuredGrid::new();
        let options = Options::from_schema(&algorithm.options());
        let abort = AbortFlag::new();
        abort.abort();
        assert!(matches!(
            algorithm.execute(&options, &abort),
            Err(FieldvisError::Aborted)
        ));
    }
}
