use crate::topology::VERTICES_PER_QUAD;

/// Errors returned by the fallible parts of the vertex buffer API.
///
/// Index arguments outside the allocated storage are not reported here; they
/// are contract violations and panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The buffer is already at the per-mesh quad ceiling and cannot grow.
    CapacityExceeded {
        requested_quads: usize,
        max_quads: usize,
    },

    /// A vertex count that does not describe whole quads.
    UnalignedVertexCount(usize),

    /// A vertex count larger than the allocated storage.
    VertexCountOutOfRange { count: usize, capacity: usize },
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::CapacityExceeded {
                requested_quads,
                max_quads,
            } => write!(
                f,
                "Capacity exceeded: requested {} quads but a mesh holds at most {}",
                requested_quads, max_quads
            ),
            MeshError::UnalignedVertexCount(count) => write!(
                f,
                "Vertex count {} is not a multiple of {}",
                count, VERTICES_PER_QUAD
            ),
            MeshError::VertexCountOutOfRange { count, capacity } => write!(
                f,
                "Vertex count {} exceeds buffer capacity of {} vertices",
                count, capacity
            ),
        }
    }
}

impl std::error::Error for MeshError {}

/// Result type for vertex buffer operations.
pub type MeshResult<T> = Result<T, MeshError>;
