//! CPU-side vertex and index buffers.

use glam::Vec3;

/// A vertex buffer of 3-component float attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexBuffer {
    data: Vec<[f32; 3]>,
}

impl VertexBuffer {
    /// Creates a vertex buffer from positions or directions.
    pub fn from_vec3(values: &[Vec3]) -> Self {
        Self {
            data: values.iter().map(|v| v.to_array()).collect(),
        }
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the vertex at `index`.
    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.data.get(index).map(|v| Vec3::from_array(*v))
    }

    /// Returns the raw attribute data.
    pub fn data(&self) -> &[[f32; 3]] {
        &self.data
    }

    /// Returns the buffer contents as bytes, ready for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}

/// A `u32` index buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexBuffer {
    data: Vec<u32>,
}

impl IndexBuffer {
    /// Creates an index buffer.
    pub fn new(data: Vec<u32>) -> Self {
        Self { data }
    }

    /// Returns the number of indices.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer holds no indices.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the indices.
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Returns the largest index, if any.
    pub fn max_index(&self) -> Option<u32> {
        self.data.iter().copied().max()
    }

    /// Returns the buffer contents as bytes, ready for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}
