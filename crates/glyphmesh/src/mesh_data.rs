//! Owned snapshot of the live part of a vertex buffer.

use crate::vertex::TextVertex;

/// Live quads of a buffer as interleaved vertices plus triangle indices.
///
/// Produced by [`VertexBuffer::to_mesh_data`](crate::VertexBuffer::to_mesh_data)
/// for renderers that want an owned copy regardless of the buffer's layout.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex data
    pub vertices: Vec<TextVertex>,
    /// Index data (triangles)
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_data(vertices: Vec<TextVertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
