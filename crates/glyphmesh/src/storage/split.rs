use std::ops::Range;

use glyphmesh_core::math::{Vec2, Vec3, Vec4};
use glyphmesh_core::profiling::profile_function;

use super::{QuadStorage, StorageAlloc, quad_range, swap_quad_groups};
use crate::color::Color32;
use crate::topology::VERTICES_PER_QUAD;
use crate::vertex::TextVertex;

const DEFAULT_NORMAL: Vec3 = Vec3::new(0.0, 0.0, -1.0);
const DEFAULT_TANGENT: Vec4 = Vec4::new(-1.0, 0.0, 0.0, 1.0);

/// Split layout: parallel attribute arrays of equal length.
///
/// Index `i` of every array belongs to vertex `i`. New and cleared slots hold
/// the default attribute values.
#[derive(Debug, Clone, Default)]
pub struct SplitArrays {
    positions: Vec<Vec3>,
    uvs0: Vec<Vec4>,
    uvs2: Vec<Vec2>,
    colors: Vec<Color32>,
    normals: Vec<Vec3>,
    tangents: Vec<Vec4>,
}

impl SplitArrays {
    /// Allocate `vertices` default-filled slots in every array.
    pub fn new(vertices: usize) -> Self {
        let mut arrays = Self::default();
        arrays.resize(vertices);
        arrays
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Atlas UVs: `xy` texture coordinates, `z` atlas page, `w` signed SDF scale.
    pub fn uvs0(&self) -> &[Vec4] {
        &self.uvs0
    }

    pub fn uvs2(&self) -> &[Vec2] {
        &self.uvs2
    }

    pub fn colors(&self) -> &[Color32] {
        &self.colors
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn tangents(&self) -> &[Vec4] {
        &self.tangents
    }

    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    pub fn uvs0_mut(&mut self) -> &mut [Vec4] {
        &mut self.uvs0
    }

    pub fn uvs2_mut(&mut self) -> &mut [Vec2] {
        &mut self.uvs2
    }

    pub fn colors_mut(&mut self) -> &mut [Color32] {
        &mut self.colors
    }

    pub fn normals_mut(&mut self) -> &mut [Vec3] {
        &mut self.normals
    }

    pub fn tangents_mut(&mut self) -> &mut [Vec4] {
        &mut self.tangents
    }

    /// Gather vertex `index` into a record.
    pub fn vertex(&self, index: usize) -> TextVertex {
        TextVertex {
            position: self.positions[index].into(),
            uv0: self.uvs0[index].into(),
            uv2: self.uvs2[index].into(),
            color: self.colors[index],
            normal: self.normals[index].into(),
            tangent: self.tangents[index].into(),
        }
    }

    /// Scatter a record into slot `index` of every array.
    pub fn set_vertex(&mut self, index: usize, vertex: &TextVertex) {
        self.positions[index] = vertex.position();
        self.uvs0[index] = vertex.uv0();
        self.uvs2[index] = vertex.uv2();
        self.colors[index] = vertex.color;
        self.normals[index] = vertex.normal();
        self.tangents[index] = vertex.tangent();
    }
}

impl QuadStorage for SplitArrays {
    fn len(&self) -> usize {
        self.positions.len()
    }

    fn swap_quads(&mut self, a: usize, b: usize) {
        swap_quad_groups(&mut self.positions, a, b);
        swap_quad_groups(&mut self.uvs0, a, b);
        swap_quad_groups(&mut self.uvs2, a, b);
        swap_quad_groups(&mut self.colors, a, b);
        swap_quad_groups(&mut self.normals, a, b);
        swap_quad_groups(&mut self.tangents, a, b);
    }

    fn write_quad(&mut self, quad: usize, vertices: &[TextVertex; VERTICES_PER_QUAD]) {
        for (index, vertex) in quad_range(quad).zip(vertices) {
            self.set_vertex(index, vertex);
        }
    }

    fn read_quad(&self, quad: usize) -> [TextVertex; VERTICES_PER_QUAD] {
        let start = quad * VERTICES_PER_QUAD;
        std::array::from_fn(|i| self.vertex(start + i))
    }
}

impl StorageAlloc for SplitArrays {
    fn resize(&mut self, vertices: usize) {
        profile_function!();
        self.positions.resize(vertices, Vec3::ZERO);
        self.uvs0.resize(vertices, Vec4::ZERO);
        self.uvs2.resize(vertices, Vec2::ZERO);
        self.colors.resize(vertices, Color32::WHITE);
        self.normals.resize(vertices, DEFAULT_NORMAL);
        self.tangents.resize(vertices, DEFAULT_TANGENT);
    }

    fn reset_range(&mut self, range: Range<usize>) {
        self.positions[range.clone()].fill(Vec3::ZERO);
        self.uvs0[range.clone()].fill(Vec4::ZERO);
        self.uvs2[range.clone()].fill(Vec2::ZERO);
        self.colors[range.clone()].fill(Color32::WHITE);
        self.normals[range.clone()].fill(DEFAULT_NORMAL);
        self.tangents[range].fill(DEFAULT_TANGENT);
    }
}
