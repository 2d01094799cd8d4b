//! Shader program references.

use std::path::{Path, PathBuf};

use crate::error::{RenderError, RenderResult};

/// A shader program identified by its vertex and fragment source files.
///
/// Sources are not read here; the renderer consuming the drawable loads and
/// compiles them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderProgram {
    vertex_path: PathBuf,
    fragment_path: PathBuf,
}

impl ShaderProgram {
    /// Creates a program from explicit file paths.
    pub fn from_files(
        vertex_path: impl Into<PathBuf>,
        fragment_path: impl Into<PathBuf>,
    ) -> RenderResult<Self> {
        let vertex_path = vertex_path.into();
        let fragment_path = fragment_path.into();
        if vertex_path.as_os_str().is_empty() || fragment_path.as_os_str().is_empty() {
            return Err(RenderError::EmptyProgramPath);
        }
        Ok(Self {
            vertex_path,
            fragment_path,
        })
    }

    /// Path of the vertex shader source.
    pub fn vertex_path(&self) -> &Path {
        &self.vertex_path
    }

    /// Path of the fragment shader source.
    pub fn fragment_path(&self) -> &Path {
        &self.fragment_path
    }
}
