use std::ops::Range;

use bytemuck::Zeroable;
use glyphmesh_core::profiling::profile_function;

use super::{QuadStorage, StorageAlloc, quad_range, swap_quad_groups};
use crate::config::GrowthFill;
use crate::topology::VERTICES_PER_QUAD;
use crate::vertex::TextVertex;

/// Interleaved layout: one [`TextVertex`] record per vertex slot.
#[derive(Debug, Clone)]
pub struct InterleavedStorage {
    vertices: Vec<TextVertex>,
    growth_fill: GrowthFill,
}

impl InterleavedStorage {
    /// Allocate `vertices` records filled according to `growth_fill`.
    pub fn new(vertices: usize, growth_fill: GrowthFill) -> Self {
        let mut storage = Self {
            vertices: Vec::new(),
            growth_fill,
        };
        storage.resize(vertices);
        storage
    }

    pub fn vertices(&self) -> &[TextVertex] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut [TextVertex] {
        &mut self.vertices
    }

    pub fn growth_fill(&self) -> GrowthFill {
        self.growth_fill
    }

    /// Raw bytes of every record, for upload as a single vertex stream.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    fn fill_value(&self) -> TextVertex {
        match self.growth_fill {
            GrowthFill::Zeroed => TextVertex::zeroed(),
            GrowthFill::Defaults => TextVertex::DEFAULT,
        }
    }
}

impl QuadStorage for InterleavedStorage {
    fn len(&self) -> usize {
        self.vertices.len()
    }

    fn swap_quads(&mut self, a: usize, b: usize) {
        swap_quad_groups(&mut self.vertices, a, b);
    }

    fn write_quad(&mut self, quad: usize, vertices: &[TextVertex; VERTICES_PER_QUAD]) {
        self.vertices[quad_range(quad)].copy_from_slice(vertices);
    }

    fn read_quad(&self, quad: usize) -> [TextVertex; VERTICES_PER_QUAD] {
        let start = quad * VERTICES_PER_QUAD;
        [
            self.vertices[start],
            self.vertices[start + 1],
            self.vertices[start + 2],
            self.vertices[start + 3],
        ]
    }
}

impl StorageAlloc for InterleavedStorage {
    fn resize(&mut self, vertices: usize) {
        profile_function!();
        let fill = self.fill_value();
        self.vertices.resize(vertices, fill);
    }

    fn reset_range(&mut self, range: Range<usize>) {
        self.vertices[range].fill(TextVertex::DEFAULT);
    }
}
