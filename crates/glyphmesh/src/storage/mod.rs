//! Physical attribute storage.
//!
//! A buffer picks one layout at construction and keeps it:
//! - [`InterleavedStorage`]: one [`TextVertex`] record per vertex
//! - [`SplitArrays`]: one index-aligned array per attribute
//!
//! Both implement [`QuadStorage`]; [`VertexStorage`] is the tagged union the
//! buffer actually holds.

mod interleaved;
mod split;

use std::ops::Range;

pub use interleaved::InterleavedStorage;
pub use split::SplitArrays;

use crate::topology::VERTICES_PER_QUAD;
use crate::vertex::TextVertex;

/// Physical layout of vertex attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VertexLayout {
    /// Array of composite records.
    Interleaved,
    /// One array per attribute.
    #[default]
    SplitArrays,
}

/// Operations shared by both attribute layouts.
///
/// Quad arguments are quad indices, not vertex indices. Out-of-range
/// arguments panic. None of these change the number of slots; allocation is
/// owned by [`VertexBuffer`](crate::VertexBuffer) so capacity and triangle
/// indices stay in step.
pub trait QuadStorage {
    /// Number of allocated vertex slots.
    fn len(&self) -> usize;

    /// Exchange all four vertices of quads `a` and `b`.
    fn swap_quads(&mut self, a: usize, b: usize);

    fn write_quad(&mut self, quad: usize, vertices: &[TextVertex; VERTICES_PER_QUAD]);

    fn read_quad(&self, quad: usize) -> [TextVertex; VERTICES_PER_QUAD];
}

/// Allocation and clearing, reachable only through the buffer.
pub(crate) trait StorageAlloc: QuadStorage {
    /// Grow or truncate to `vertices` slots, keeping existing contents.
    fn resize(&mut self, vertices: usize);

    /// Reset every slot in `range` (vertex indices) to its cleared value.
    fn reset_range(&mut self, range: Range<usize>);
}

/// Attribute storage in whichever layout the buffer was built with.
#[derive(Debug, Clone)]
pub enum VertexStorage {
    Interleaved(InterleavedStorage),
    Split(SplitArrays),
}

impl VertexStorage {
    pub fn layout(&self) -> VertexLayout {
        match self {
            VertexStorage::Interleaved(_) => VertexLayout::Interleaved,
            VertexStorage::Split(_) => VertexLayout::SplitArrays,
        }
    }
}

impl QuadStorage for VertexStorage {
    fn len(&self) -> usize {
        match self {
            VertexStorage::Interleaved(s) => s.len(),
            VertexStorage::Split(s) => s.len(),
        }
    }

    fn swap_quads(&mut self, a: usize, b: usize) {
        match self {
            VertexStorage::Interleaved(s) => s.swap_quads(a, b),
            VertexStorage::Split(s) => s.swap_quads(a, b),
        }
    }

    fn write_quad(&mut self, quad: usize, vertices: &[TextVertex; VERTICES_PER_QUAD]) {
        match self {
            VertexStorage::Interleaved(s) => s.write_quad(quad, vertices),
            VertexStorage::Split(s) => s.write_quad(quad, vertices),
        }
    }

    fn read_quad(&self, quad: usize) -> [TextVertex; VERTICES_PER_QUAD] {
        match self {
            VertexStorage::Interleaved(s) => s.read_quad(quad),
            VertexStorage::Split(s) => s.read_quad(quad),
        }
    }
}

impl StorageAlloc for VertexStorage {
    fn resize(&mut self, vertices: usize) {
        match self {
            VertexStorage::Interleaved(s) => s.resize(vertices),
            VertexStorage::Split(s) => s.resize(vertices),
        }
    }

    fn reset_range(&mut self, range: Range<usize>) {
        match self {
            VertexStorage::Interleaved(s) => s.reset_range(range),
            VertexStorage::Split(s) => s.reset_range(range),
        }
    }
}

/// Swap the 4-element groups of quads `a` and `b` in one attribute array.
pub(crate) fn swap_quad_groups<T>(data: &mut [T], a: usize, b: usize) {
    if a == b {
        return;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = data.split_at_mut(hi * VERTICES_PER_QUAD);
    let lo_start = lo * VERTICES_PER_QUAD;
    head[lo_start..lo_start + VERTICES_PER_QUAD].swap_with_slice(&mut tail[..VERTICES_PER_QUAD]);
}

/// Vertex index range covered by `quad`.
#[inline]
pub(crate) fn quad_range(quad: usize) -> Range<usize> {
    let start = quad * VERTICES_PER_QUAD;
    start..start + VERTICES_PER_QUAD
}
