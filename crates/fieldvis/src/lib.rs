//! fieldvis: grid construction, cell decomposition, and field glyphs.
//!
//! The crate bundles four algorithms behind a common [`Algorithm`] trait:
//!
//! - `Aufgabe1/StructuredGrid` builds a uniform lattice of hexahedra or quads.
//! - `Aufgabe1/UnstructuredGrid (House)` builds a fixed mixed-cell mesh.
//! - `Aufgabe2/Visualization` turns a grid's cells into a triangle drawable and
//!   a wireframe drawable.
//! - `Aufgabe3/Field` places sphere glyphs where a field exceeds a threshold.
//!
//! # Quick Start
//!
//! ```no_run
//! use fieldvis::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!     let registry = default_registry()?;
//!     let abort = AbortFlag::new();
//!
//!     let house = registry.run("Aufgabe1/UnstructuredGrid (House)", &Options::new(), &abort)?;
//!     let grid = house.data::<Grid>("grid").expect("house grid");
//!
//!     let drawn = registry.run(
//!         "Aufgabe2/Visualization",
//!         &Options::new().with("grid", grid),
//!         &abort,
//!     )?;
//!     assert!(drawn.graphics("gridCells").is_some());
//!     Ok(())
//! }
//! ```

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod algorithm;
pub mod algorithms;
pub mod registry;

pub use algorithm::{Algorithm, Output, OutputDecl, OutputKind, Outputs};
pub use algorithms::{FieldVisualization, GridVisualization, StructuredGrid, UnstructuredGrid};
pub use registry::AlgorithmRegistry;

// Re-export core types
pub use fieldvis_core::{
    downcast_dataset, AbortFlag, Dataset, FieldvisError, OptionSchema, OptionValue, Options,
    Result, UVec3, Vec3, Vec4,
};

// Re-export render types
pub use fieldvis_render::{
    BoundingSphere, Drawable, GlyphBatch, GraphicsSystem, Primitive, PrimitiveKind, RenderOption,
    UniformValue,
};

// Re-export structures
pub use fieldvis_structures::{
    decompose, house, try_decompose, CellFilter, CellType, Field, Grid, RenderBuffers,
    ScalarField, VectorField,
};

use std::path::PathBuf;

/// Initializes `env_logger` once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::try_init();
}

/// Builds a registry holding the four built-in algorithms.
///
/// Shaders resolve against the default resource path.
pub fn default_registry() -> Result<AlgorithmRegistry> {
    registry_with_resources(fieldvis_render::DEFAULT_RESOURCE_PATH)
}

/// Builds a registry whose drawables resolve shaders under `resource_path`.
pub fn registry_with_resources(resource_path: impl Into<PathBuf>) -> Result<AlgorithmRegistry> {
    let system = GraphicsSystem::new(resource_path);

    let mut registry = AlgorithmRegistry::new();
    registry.register(Box::new(StructuredGrid::new()))?;
    registry.register(Box::new(UnstructuredGrid::new()))?;
    registry.register(Box::new(GridVisualization::new(system)))?;
    registry.register(Box::new(FieldVisualization::new()))?;

    log::info!("fieldvis registry built with {} algorithms", registry.len());
    Ok(registry)
}
