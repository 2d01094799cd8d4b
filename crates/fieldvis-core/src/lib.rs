//! Core abstractions for fieldvis.
//!
//! This crate provides the types shared by every fieldvis layer:
//! - [`FieldvisError`] and the [`Result`] alias
//! - [`Options`] bags and the [`OptionSchema`] algorithms declare
//! - the [`Dataset`] trait for grids and fields passed between algorithms
//! - [`AbortFlag`] for cancelling long-running loops

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod abort;
pub mod dataset;
pub mod error;
pub mod options;

pub use abort::AbortFlag;
pub use dataset::{downcast_dataset, Dataset};
pub use error::{FieldvisError, Result};
pub use options::{FromOptionValue, OptionDecl, OptionSchema, OptionValue, Options};

// Re-export glam types for convenience
pub use glam::{UVec3, Vec3, Vec4};
