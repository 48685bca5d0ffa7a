//! Quad-per-character vertex buffer.
//!
//! [`VertexBuffer`] separates allocated capacity from live geometry. Storage
//! for `capacity_quads()` quads always exists together with its triangle
//! indices, while `vertex_count()` tracks how many vertices the layout engine
//! has actually written. Shrinking text only clears the stale tail; slots are
//! never removed, so small length changes between frames do not reallocate.

use glyphmesh_core::profiling::profile_function;

use crate::config::BufferConfig;
use crate::error::{MeshError, MeshResult};
use crate::mesh_data::MeshData;
use crate::storage::{
    InterleavedStorage, QuadStorage, SplitArrays, StorageAlloc, VertexLayout, VertexStorage,
};
use crate::topology::{
    INDICES_PER_QUAD, MAX_QUADS, VERTICES_PER_QUAD, append_quad_indices, build_quad_indices,
};
use crate::vertex::TextVertex;

/// Order in which quads are handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VertexSortingOrder {
    /// Leave quads in layout order.
    #[default]
    Normal,
    /// Reverse the live quads, e.g. for right-to-left runs.
    Reverse,
}

/// How the glyphs referenced by this buffer were rasterized.
///
/// Carried alongside the geometry so the renderer can pick a matching shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GlyphRenderMode {
    SmoothHinted,
    #[default]
    Smooth,
    RasterHinted,
    Raster,
    Sdf,
    SdfAa,
    SdfAaHinted,
    /// Colour bitmaps such as emoji.
    Color,
}

/// Opaque handle to a caller-owned render material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(u64);

impl MaterialId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Geometry of up to `capacity_quads()` character quads.
///
/// # Invariants
///
/// - `vertex_count()` is a multiple of 4 and never exceeds `capacity_vertices()`.
/// - `triangles()` holds exactly 6 indices per allocated quad, following
///   [`QUAD_INDICES`](crate::QUAD_INDICES) relative to the quad's first vertex,
///   including quads past `vertex_count()`.
/// - Cleared slots hold [`TextVertex::DEFAULT`].
///
/// # Example
///
/// ```
/// use glyphmesh::{VertexBuffer, VertexLayout};
///
/// let mut buffer = VertexBuffer::new(1, VertexLayout::Interleaved);
/// buffer.resize(3);
/// assert_eq!(buffer.triangles().len(), 18);
/// assert_eq!(&buffer.triangles()[12..], &[8, 9, 10, 10, 11, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct VertexBuffer {
    storage: VertexStorage,
    triangles: Vec<u32>,
    vertex_count: usize,
    capacity_quads: usize,
    material: Option<MaterialId>,
    glyph_render_mode: GlyphRenderMode,
}

impl VertexBuffer {
    /// Allocate storage for `capacity_quads` quads in `layout`.
    ///
    /// Capacities above [`MAX_QUADS`] are clamped.
    pub fn new(capacity_quads: usize, layout: VertexLayout) -> Self {
        Self::with_config(
            BufferConfig::new()
                .with_layout(layout)
                .with_initial_quads(capacity_quads),
        )
    }

    pub fn with_config(config: BufferConfig) -> Self {
        profile_function!();
        let quads = clamp_quads(config.initial_quads);
        let vertices = quads * VERTICES_PER_QUAD;

        let storage = match config.layout {
            VertexLayout::Interleaved => {
                VertexStorage::Interleaved(InterleavedStorage::new(vertices, config.growth_fill))
            }
            VertexLayout::SplitArrays => VertexStorage::Split(SplitArrays::new(vertices)),
        };

        let triangles = build_quad_indices(quads);

        tracing::debug!(quads, layout = ?config.layout, "allocated glyph vertex buffer");

        Self {
            storage,
            triangles,
            vertex_count: 0,
            capacity_quads: quads,
            material: None,
            glyph_render_mode: GlyphRenderMode::default(),
        }
    }

    /// Grow or shrink to `capacity_quads` quads.
    ///
    /// Vertices below the new capacity keep their contents. Triangle indices
    /// for existing quads are left alone; indices for added quads are appended.
    /// If the live geometry no longer fits, `vertex_count()` is truncated to
    /// the new capacity.
    pub fn resize(&mut self, capacity_quads: usize) {
        profile_function!();
        let quads = clamp_quads(capacity_quads);
        let previous = self.capacity_quads;
        if quads == previous {
            return;
        }

        self.storage.resize(quads * VERTICES_PER_QUAD);
        if quads > previous {
            append_quad_indices(&mut self.triangles, previous..quads);
        } else {
            self.triangles.truncate(quads * INDICES_PER_QUAD);
        }
        self.capacity_quads = quads;
        self.vertex_count = self.vertex_count.min(self.capacity_vertices());

        tracing::debug!(from = previous, to = quads, "resized glyph vertex buffer");
    }

    /// Reset attribute storage to default values.
    ///
    /// With `full_reset` every slot is reset and `vertex_count()` drops to 0.
    /// Otherwise only the slots past `vertex_count()` are reset. Triangle
    /// indices are never touched.
    pub fn clear(&mut self, full_reset: bool) {
        profile_function!();
        if full_reset {
            let len = self.storage.len();
            self.storage.reset_range(0..len);
            self.vertex_count = 0;
            tracing::trace!(vertices = len, "cleared glyph vertex buffer");
        } else {
            self.clear_unused();
        }
    }

    /// Reset every vertex slot at and beyond `start_index`.
    ///
    /// `vertex_count()` and the triangle indices are unchanged, so the reset
    /// quads render as degenerate geometry.
    ///
    /// # Panics
    ///
    /// Panics if `start_index > capacity_vertices()`.
    pub fn clear_from(&mut self, start_index: usize) {
        profile_function!();
        let len = self.storage.len();
        assert!(
            start_index <= len,
            "clear start {} out of range for {} vertices",
            start_index,
            len
        );
        if start_index < len {
            self.storage.reset_range(start_index..len);
            tracing::trace!(start_index, cleared = len - start_index, "cleared stale vertices");
        }
    }

    /// Reset every slot past the live geometry.
    pub fn clear_unused(&mut self) {
        self.clear_from(self.vertex_count);
    }

    /// Reorder the live quads.
    pub fn sort_geometry(&mut self, order: VertexSortingOrder) {
        match order {
            VertexSortingOrder::Normal => {}
            VertexSortingOrder::Reverse => self.reverse_quad_order(),
        }
    }

    /// Swap quad `i` with quad `quad_count() - 1 - i` for the first half of the
    /// live quads. Quads past `vertex_count()` are not touched.
    pub fn reverse_quad_order(&mut self) {
        profile_function!();
        let total = self.quad_count();
        for i in 0..total / 2 {
            self.storage.swap_quads(i, total - 1 - i);
        }
        tracing::trace!(quads = total, "reversed quad order");
    }

    /// Exchange every attribute of quads `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either quad is outside the allocated capacity.
    pub fn swap_quads(&mut self, a: usize, b: usize) {
        self.check_quad(a);
        self.check_quad(b);
        self.storage.swap_quads(a, b);
    }

    /// Overwrite the four vertices of `quad`.
    ///
    /// Does not change `vertex_count()`; see [`push_quad`](Self::push_quad).
    ///
    /// # Panics
    ///
    /// Panics if `quad >= capacity_quads()`.
    pub fn set_quad(&mut self, quad: usize, vertices: [TextVertex; VERTICES_PER_QUAD]) {
        self.check_quad(quad);
        self.storage.write_quad(quad, &vertices);
    }

    /// Read the four vertices of `quad`, whichever layout backs the buffer.
    ///
    /// # Panics
    ///
    /// Panics if `quad >= capacity_quads()`.
    pub fn quad(&self, quad: usize) -> [TextVertex; VERTICES_PER_QUAD] {
        self.check_quad(quad);
        self.storage.read_quad(quad)
    }

    /// Write a quad directly after the live geometry and extend `vertex_count()`.
    ///
    /// A full buffer grows to the next power of two quads, clamped to
    /// [`MAX_QUADS`]. Returns the index of the written quad.
    pub fn push_quad(&mut self, vertices: [TextVertex; VERTICES_PER_QUAD]) -> MeshResult<usize> {
        let quad = self.quad_count();
        if quad >= self.capacity_quads {
            if self.capacity_quads >= MAX_QUADS {
                return Err(MeshError::CapacityExceeded {
                    requested_quads: quad + 1,
                    max_quads: MAX_QUADS,
                });
            }
            self.resize((quad + 1).next_power_of_two());
        }

        self.storage.write_quad(quad, &vertices);
        self.vertex_count += VERTICES_PER_QUAD;
        Ok(quad)
    }

    /// Set the number of live vertices.
    pub fn set_vertex_count(&mut self, count: usize) -> MeshResult<()> {
        if count % VERTICES_PER_QUAD != 0 {
            return Err(MeshError::UnalignedVertexCount(count));
        }
        let capacity = self.capacity_vertices();
        if count > capacity {
            return Err(MeshError::VertexCountOutOfRange { count, capacity });
        }
        self.vertex_count = count;
        Ok(())
    }

    pub fn layout(&self) -> VertexLayout {
        self.storage.layout()
    }

    /// Number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of live quads.
    pub fn quad_count(&self) -> usize {
        self.vertex_count / VERTICES_PER_QUAD
    }

    pub fn capacity_quads(&self) -> usize {
        self.capacity_quads
    }

    pub fn capacity_vertices(&self) -> usize {
        self.capacity_quads * VERTICES_PER_QUAD
    }

    /// Triangle indices for every allocated quad.
    pub fn triangles(&self) -> &[u32] {
        &self.triangles
    }

    /// Triangle indices for the live quads only.
    pub fn live_triangles(&self) -> &[u32] {
        &self.triangles[..self.quad_count() * INDICES_PER_QUAD]
    }

    pub fn material(&self) -> Option<MaterialId> {
        self.material
    }

    pub fn set_material(&mut self, material: Option<MaterialId>) {
        self.material = material;
    }

    pub fn glyph_render_mode(&self) -> GlyphRenderMode {
        self.glyph_render_mode
    }

    pub fn set_glyph_render_mode(&mut self, mode: GlyphRenderMode) {
        self.glyph_render_mode = mode;
    }

    pub fn storage(&self) -> &VertexStorage {
        &self.storage
    }

    /// Interleaved records, if the buffer uses that layout.
    pub fn interleaved(&self) -> Option<&InterleavedStorage> {
        match &self.storage {
            VertexStorage::Interleaved(s) => Some(s),
            VertexStorage::Split(_) => None,
        }
    }

    pub fn interleaved_mut(&mut self) -> Option<&mut InterleavedStorage> {
        match &mut self.storage {
            VertexStorage::Interleaved(s) => Some(s),
            VertexStorage::Split(_) => None,
        }
    }

    /// Attribute arrays, if the buffer uses the split layout.
    pub fn split(&self) -> Option<&SplitArrays> {
        match &self.storage {
            VertexStorage::Split(s) => Some(s),
            VertexStorage::Interleaved(_) => None,
        }
    }

    pub fn split_mut(&mut self) -> Option<&mut SplitArrays> {
        match &mut self.storage {
            VertexStorage::Split(s) => Some(s),
            VertexStorage::Interleaved(_) => None,
        }
    }

    /// Bytes of every interleaved record, or `None` for the split layout.
    pub fn vertex_bytes(&self) -> Option<&[u8]> {
        self.interleaved().map(InterleavedStorage::as_bytes)
    }

    /// Bytes of the full triangle index sequence.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Copy the live quads into an owned interleaved mesh.
    pub fn to_mesh_data(&self) -> MeshData {
        profile_function!();
        let vertices = match &self.storage {
            VertexStorage::Interleaved(s) => s.vertices()[..self.vertex_count].to_vec(),
            VertexStorage::Split(s) => (0..self.vertex_count).map(|i| s.vertex(i)).collect(),
        };
        MeshData::from_data(vertices, self.live_triangles().to_vec())
    }

    fn check_quad(&self, quad: usize) {
        assert!(
            quad < self.capacity_quads,
            "quad {} out of range for capacity of {} quads",
            quad,
            self.capacity_quads
        );
    }
}

impl Default for VertexBuffer {
    fn default() -> Self {
        Self::with_config(BufferConfig::default())
    }
}

fn clamp_quads(requested: usize) -> usize {
    if requested > MAX_QUADS {
        tracing::debug!(requested, max = MAX_QUADS, "clamping glyph buffer to quad ceiling");
        MAX_QUADS
    } else {
        requested
    }
}
