//! Entry point for creating buffers, programs, and primitives.

use std::path::{Path, PathBuf};

use glam::Vec3;

use crate::buffer::{IndexBuffer, VertexBuffer};
use crate::drawable::Drawable;
use crate::error::RenderResult;
use crate::primitive::PrimitiveConfig;
use crate::shader::ShaderProgram;

/// Default resource directory holding the shared shader sources.
pub const DEFAULT_RESOURCE_PATH: &str = "utils/Graphics";

/// Creates graphics resources relative to a shader resource directory.
#[derive(Debug, Clone)]
pub struct GraphicsSystem {
    resource_path: PathBuf,
}

impl Default for GraphicsSystem {
    fn default() -> Self {
        Self::new(DEFAULT_RESOURCE_PATH)
    }
}

impl GraphicsSystem {
    /// Creates a graphics system resolving shaders under `resource_path`.
    pub fn new(resource_path: impl Into<PathBuf>) -> Self {
        Self {
            resource_path: resource_path.into(),
        }
    }

    /// Returns the resource directory.
    pub fn resource_path(&self) -> &Path {
        &self.resource_path
    }

    /// Creates a vertex buffer.
    pub fn make_buffer(&self, values: &[Vec3]) -> VertexBuffer {
        VertexBuffer::from_vec3(values)
    }

    /// Creates an index buffer.
    pub fn make_index_buffer(&self, indices: Vec<u32>) -> IndexBuffer {
        IndexBuffer::new(indices)
    }

    /// Creates a program from shader files relative to the resource directory.
    pub fn make_program_from_files(
        &self,
        vertex: impl AsRef<Path>,
        fragment: impl AsRef<Path>,
    ) -> RenderResult<ShaderProgram> {
        ShaderProgram::from_files(
            self.resource_path.join(vertex),
            self.resource_path.join(fragment),
        )
    }

    /// Validates a primitive configuration and wraps it in a drawable.
    pub fn make_primitive(
        &self,
        config: PrimitiveConfig,
        program: ShaderProgram,
    ) -> RenderResult<Drawable> {
        config.build(program).map(Drawable::Primitive)
    }
}
