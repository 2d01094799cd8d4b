//! The house mesh as an algorithm.

use std::sync::Arc;

use fieldvis_core::{AbortFlag, OptionSchema, Options, Result};
use fieldvis_structures::house;

use crate::algorithm::{Algorithm, OutputDecl, Outputs};

/// Emits the fixed house mesh: hexahedral walls, triangular gables, quad roof.
#[derive(Debug, Default)]
pub struct UnstructuredGrid;

impl UnstructuredGrid {
    /// Creates the algorithm.
    pub fn new() -> Self {
        Self
    }
}

impl Algorithm for UnstructuredGrid {
    fn name(&self) -> &'static str {
        "Aufgabe1/UnstructuredGrid (House)"
    }

    fn description(&self) -> &'static str {
        "Generate an unstructured grid shaped like a house."
    }

    fn options(&self) -> OptionSchema {
        OptionSchema::new()
    }

    fn outputs(&self) -> &'static [OutputDecl] {
        const OUTPUTS: &[OutputDecl] = &[OutputDecl::data("grid")];
        OUTPUTS
    }

    fn execute(&self, _options: &Options, abort: &AbortFlag) -> Result<Outputs> {
        abort.check()?;
        let mut outputs = Outputs::new();
        outputs.set_data("grid", Arc::new(house()?));
        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldvis_structures::Grid;

    #[test]
    fn test_has_no_options() {
        assert!(UnstructuredGrid::new().options().is_empty());
    }

    #[test]
    fn test_outputs_house() {
        let outputs = UnstructuredGrid::new()
            .execute(&Options::new(), &AbortFlag::new())
            .unwrap();
        let grid = outputs.data::<Grid>("grid").unwrap();
        assert_eq!(grid.num_points(), 10);
        assert_eq!(grid.num_cells(), 5);
    }
}
