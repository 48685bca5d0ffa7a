//! Triangle index pattern for glyph quads.
//!
//! Every quad is two counter-clockwise triangles over its four vertices:
//! `(0, 1, 2)` and `(2, 3, 0)`, offset by the quad's first vertex index.

use std::ops::Range;

pub const VERTICES_PER_QUAD: usize = 4;
pub const INDICES_PER_QUAD: usize = 6;

/// Index pattern of one quad relative to its first vertex.
pub const QUAD_INDICES: [u32; INDICES_PER_QUAD] = [0, 1, 2, 2, 3, 0];

/// Per-mesh quad ceiling. Keeps the vertex count below 65535 so indices
/// fit renderers limited to 16-bit index buffers.
pub const MAX_QUADS: usize = 16383;

/// Indices of quad `quad`.
#[inline]
pub fn quad_indices(quad: usize) -> [u32; INDICES_PER_QUAD] {
    let base = (quad * VERTICES_PER_QUAD) as u32;
    QUAD_INDICES.map(|i| base + i)
}

/// Append the index pattern for every quad in `quads`.
pub fn append_quad_indices(indices: &mut Vec<u32>, quads: Range<usize>) {
    indices.reserve(quads.len() * INDICES_PER_QUAD);
    for quad in quads {
        indices.extend_from_slice(&quad_indices(quad));
    }
}

/// Full index sequence for `quads` quads.
pub fn build_quad_indices(quads: usize) -> Vec<u32> {
    let mut indices = Vec::new();
    append_quad_indices(&mut indices, 0..quads);
    indices
}

/// Check that `indices` is exactly the quad pattern repeated from quad 0.
pub fn is_valid_topology(indices: &[u32]) -> bool {
    indices.len() % INDICES_PER_QUAD == 0
        && indices
            .chunks_exact(INDICES_PER_QUAD)
            .enumerate()
            .all(|(quad, chunk)| chunk == quad_indices(quad))
}
