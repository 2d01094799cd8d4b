//! Graphics description layer for fieldvis.
//!
//! Nothing here talks to a GPU. This crate describes what should be drawn:
//! - [`Primitive`]s: indexed triangle or line batches with named vertex
//!   buffers, uniforms, render options, and a [`ShaderProgram`]
//! - [`GlyphBatch`]es of spheres collected by an [`ObjectRenderer`]
//! - helpers for [`BoundingSphere`]s and smooth vertex normals

// Graphics code intentionally uses casts for indices, colors, and coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod bounds;
pub mod buffer;
pub mod drawable;
pub mod error;
pub mod normals;
pub mod objects;
pub mod primitive;
pub mod shader;
pub mod system;

pub use bounds::{compute_bounding_sphere, compute_bounding_sphere_of_spheres, BoundingSphere};
pub use buffer::{IndexBuffer, VertexBuffer};
pub use drawable::Drawable;
pub use error::{RenderError, RenderResult};
pub use normals::compute_normals;
pub use objects::{GlyphBatch, ObjectRenderer, ObjectType, SphereInstance};
pub use primitive::{Primitive, PrimitiveConfig, PrimitiveKind, RenderOption, UniformValue};
pub use shader::ShaderProgram;
pub use system::{GraphicsSystem, DEFAULT_RESOURCE_PATH};
