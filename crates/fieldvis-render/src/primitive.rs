//! Render primitives: indexed triangle or line batches bound to a shader.

use std::collections::BTreeMap;

use glam::{Vec3, Vec4};

use crate::bounds::BoundingSphere;
use crate::buffer::{IndexBuffer, VertexBuffer};
use crate::error::{RenderError, RenderResult};
use crate::shader::ShaderProgram;

/// The kind of geometric primitive a batch is drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Every three vertices (or indices) form a triangle.
    Triangles,
    /// Every two vertices (or indices) form a line segment.
    Lines,
}

impl PrimitiveKind {
    /// Number of vertices per primitive.
    pub fn arity(self) -> usize {
        match self {
            Self::Triangles => 3,
            Self::Lines => 2,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Triangles => "triangle",
            Self::Lines => "line",
        }
    }
}

/// Boolean render state switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RenderOption {
    /// Alpha blending.
    Blend,
    /// Depth testing.
    DepthTest,
}

/// A uniform value bound to the shader program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// An integer uniform.
    Int(i32),
    /// A float uniform.
    Float(f32),
    /// A 3-component vector uniform.
    Vec3(Vec3),
    /// A 4-component vector uniform (colors).
    Vec4(Vec4),
}

impl From<i32> for UniformValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<Vec3> for UniformValue {
    fn from(value: Vec3) -> Self {
        Self::Vec3(value)
    }
}

impl From<Vec4> for UniformValue {
    fn from(value: Vec4) -> Self {
        Self::Vec4(value)
    }
}

/// Builder describing a primitive before it is validated.
#[derive(Debug, Clone)]
pub struct PrimitiveConfig {
    kind: PrimitiveKind,
    vertex_buffers: Vec<(String, VertexBuffer)>,
    index_buffer: Option<IndexBuffer>,
    uniforms: BTreeMap<String, UniformValue>,
    render_options: BTreeMap<RenderOption, bool>,
    bounding_sphere: Option<BoundingSphere>,
}

impl PrimitiveConfig {
    /// Starts a configuration for the given primitive kind.
    #[must_use]
    pub fn new(kind: PrimitiveKind) -> Self {
        Self {
            kind,
            vertex_buffers: Vec::new(),
            index_buffer: None,
            uniforms: BTreeMap::new(),
            render_options: BTreeMap::new(),
            bounding_sphere: None,
        }
    }

    /// Binds a named vertex attribute buffer.
    #[must_use]
    pub fn vertex_buffer(mut self, name: impl Into<String>, buffer: VertexBuffer) -> Self {
        self.vertex_buffers.push((name.into(), buffer));
        self
    }

    /// Sets the index buffer.
    #[must_use]
    pub fn index_buffer(mut self, buffer: IndexBuffer) -> Self {
        self.index_buffer = Some(buffer);
        self
    }

    /// Sets a uniform value.
    #[must_use]
    pub fn uniform(mut self, name: impl Into<String>, value: impl Into<UniformValue>) -> Self {
        self.uniforms.insert(name.into(), value.into());
        self
    }

    /// Sets a render state switch.
    #[must_use]
    pub fn render_option(mut self, option: RenderOption, enabled: bool) -> Self {
        self.render_options.insert(option, enabled);
        self
    }

    /// Sets the bounding sphere used for culling.
    #[must_use]
    pub fn bounding_sphere(mut self, sphere: BoundingSphere) -> Self {
        self.bounding_sphere = Some(sphere);
        self
    }

    /// Checks buffer consistency and binds the program.
    ///
    /// All vertex buffers must have the same length, indices must be in range,
    /// and the element count must be a multiple of the primitive arity.
    pub fn build(self, program: ShaderProgram) -> RenderResult<Primitive> {
        let Some((first_name, first)) = self.vertex_buffers.first() else {
            return Err(RenderError::NoVertexBuffers);
        };
        let vertex_count = first.len();
        log::trace!("building {:?} primitive from '{first_name}'", self.kind);

        for (name, buffer) in &self.vertex_buffers {
            if buffer.len() != vertex_count {
                return Err(RenderError::BufferLengthMismatch {
                    name: name.clone(),
                    expected: vertex_count,
                    actual: buffer.len(),
                });
            }
        }

        let element_count = match &self.index_buffer {
            Some(indices) => {
                if let Some(max) = indices.max_index() {
                    if max as usize >= vertex_count {
                        return Err(RenderError::IndexOutOfBounds {
                            index: max,
                            len: vertex_count,
                        });
                    }
                }
                indices.len()
            }
            None => vertex_count,
        };
        if element_count % self.kind.arity() != 0 {
            return Err(RenderError::IncompletePrimitive {
                kind: self.kind.label(),
                count: element_count,
            });
        }

        Ok(Primitive {
            kind: self.kind,
            vertex_buffers: self.vertex_buffers,
            index_buffer: self.index_buffer,
            uniforms: self.uniforms,
            render_options: self.render_options,
            bounding_sphere: self.bounding_sphere.unwrap_or_default(),
            program,
        })
    }
}

/// A validated primitive bound to a shader program.
#[derive(Debug, Clone)]
pub struct Primitive {
    kind: PrimitiveKind,
    vertex_buffers: Vec<(String, VertexBuffer)>,
    index_buffer: Option<IndexBuffer>,
    uniforms: BTreeMap<String, UniformValue>,
    render_options: BTreeMap<RenderOption, bool>,
    bounding_sphere: BoundingSphere,
    program: ShaderProgram,
}

impl Primitive {
    /// Returns the primitive kind.
    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    /// Returns the named vertex buffer.
    pub fn vertex_buffer(&self, name: &str) -> Option<&VertexBuffer> {
        self.vertex_buffers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, b)| b)
    }

    /// Returns the names of all bound vertex buffers, in binding order.
    pub fn vertex_buffer_names(&self) -> impl Iterator<Item = &str> {
        self.vertex_buffers.iter().map(|(n, _)| n.as_str())
    }

    /// Returns the index buffer, if the primitive is indexed.
    pub fn index_buffer(&self) -> Option<&IndexBuffer> {
        self.index_buffer.as_ref()
    }

    /// Returns a uniform value by name.
    pub fn uniform(&self, name: &str) -> Option<UniformValue> {
        self.uniforms.get(name).copied()
    }

    /// Returns whether a render state switch is enabled.
    pub fn render_option(&self, option: RenderOption) -> bool {
        self.render_options.get(&option).copied().unwrap_or(false)
    }

    /// Returns the bounding sphere.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        self.bounding_sphere
    }

    /// Returns the shader program.
    pub fn program(&self) -> &ShaderProgram {
        &self.program
    }

    /// Returns the number of vertices per bound buffer.
    pub fn num_vertices(&self) -> usize {
        self.vertex_buffers.first().map_or(0, |(_, b)| b.len())
    }

    /// Returns the number of triangles or line segments drawn.
    pub fn num_primitives(&self) -> usize {
        let elements = self
            .index_buffer
            .as_ref()
            .map_or_else(|| self.num_vertices(), IndexBuffer::len);
        elements / self.kind.arity()
    }
}
