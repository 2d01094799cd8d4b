//! Data structures for fieldvis.
//!
//! This crate provides:
//! - [`Grid`]s of points and typed cells, including uniform lattices
//! - the fixed [`house`] mesh
//! - [`ScalarField`]s and [`VectorField`]s defined on grid points
//! - [`decompose`], which turns cells into triangle and line lists

// Geometry code intentionally uses casts for indices and coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod decompose;
pub mod field;
pub mod grid;
pub mod house;

pub use decompose::{decompose, try_decompose, CellFilter, RenderBuffers, HEX_FACES};
pub use field::{as_field, Field, ScalarField, VectorField};
pub use grid::{flatten_node_index, Cell, CellType, Grid, MAX_UNIFORM_NODES};
pub use house::house;
