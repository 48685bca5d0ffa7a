//! The interleaved per-vertex record.

use bytemuck::{Pod, Zeroable};
use glyphmesh_core::math::{PackedVec2, PackedVec3, PackedVec4, Vec2, Vec3, Vec4};
use static_assertions::const_assert_eq;

use crate::color::Color32;

/// One vertex of a glyph quad.
///
/// `uv0` packs the atlas lookup: `xy` are texture coordinates, `z` is the
/// atlas page and `w` is the SDF scale, negative for bold text.
///
/// # Memory Layout
///
/// ```text
/// Offset | Field    | Size
/// -------|----------|------
/// 0      | position | 12
/// 12     | uv0      | 16
/// 28     | uv2      | 8
/// 36     | color    | 4
/// 40     | normal   | 12
/// 52     | tangent  | 16
/// Total: 68 bytes
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TextVertex {
    pub position: PackedVec3,
    pub uv0: PackedVec4,
    pub uv2: PackedVec2,
    pub color: Color32,
    pub normal: PackedVec3,
    pub tangent: PackedVec4,
}

const_assert_eq!(std::mem::size_of::<TextVertex>(), 68);

impl TextVertex {
    pub const DEFAULT_COLOR: Color32 = Color32::WHITE;
    pub const DEFAULT_NORMAL: PackedVec3 = PackedVec3::new(0.0, 0.0, -1.0);
    pub const DEFAULT_TANGENT: PackedVec4 = PackedVec4::new(-1.0, 0.0, 0.0, 1.0);

    /// The value of an unused vertex: origin, zero UVs, opaque white,
    /// facing -Z.
    pub const DEFAULT: TextVertex = TextVertex {
        position: PackedVec3::ZERO,
        uv0: PackedVec4::ZERO,
        uv2: PackedVec2::ZERO,
        color: Self::DEFAULT_COLOR,
        normal: Self::DEFAULT_NORMAL,
        tangent: Self::DEFAULT_TANGENT,
    };

    /// Create a vertex at `position` with default normal, tangent and colour.
    pub fn new(position: Vec3, uv0: Vec4) -> Self {
        Self {
            position: position.into(),
            uv0: uv0.into(),
            ..Self::DEFAULT
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position.into();
        self
    }

    pub fn with_uv0(mut self, uv0: Vec4) -> Self {
        self.uv0 = uv0.into();
        self
    }

    pub fn with_uv2(mut self, uv2: Vec2) -> Self {
        self.uv2 = uv2.into();
        self
    }

    pub const fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    pub fn with_normal(mut self, normal: Vec3) -> Self {
        self.normal = normal.into();
        self
    }

    pub fn with_tangent(mut self, tangent: Vec4) -> Self {
        self.tangent = tangent.into();
        self
    }

    /// Pack the SDF scale into `uv0.w`, negated when `bold` is set.
    pub fn with_sdf_scale(mut self, scale: f32, bold: bool) -> Self {
        let scale = scale.abs();
        self.uv0.w = if bold { -scale } else { scale };
        self
    }

    /// Magnitude of the SDF scale stored in `uv0.w`.
    pub fn sdf_scale(&self) -> f32 {
        self.uv0.w.abs()
    }

    /// Whether `uv0.w` carries the bold marker.
    pub fn is_bold(&self) -> bool {
        self.uv0.w < 0.0
    }

    pub fn position(&self) -> Vec3 {
        self.position.into()
    }

    pub fn uv0(&self) -> Vec4 {
        self.uv0.into()
    }

    pub fn uv2(&self) -> Vec2 {
        self.uv2.into()
    }

    pub fn normal(&self) -> Vec3 {
        self.normal.into()
    }

    pub fn tangent(&self) -> Vec4 {
        self.tangent.into()
    }

    /// Get the WGPU vertex buffer layout.
    ///
    /// Shader locations follow field order: position 0, uv0 1, uv2 2,
    /// color 3 (normalized), normal 4, tangent 5.
    #[cfg(feature = "wgpu")]
    pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
        static ATTRIBUTES: &[wgpu::VertexAttribute] = &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: 12,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x4,
            },
            wgpu::VertexAttribute {
                offset: 28,
                shader_location: 2,
                format: wgpu::VertexFormat::Float32x2,
            },
            wgpu::VertexAttribute {
                offset: 36,
                shader_location: 3,
                format: wgpu::VertexFormat::Unorm8x4,
            },
            wgpu::VertexAttribute {
                offset: 40,
                shader_location: 4,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: 52,
                shader_location: 5,
                format: wgpu::VertexFormat::Float32x4,
            },
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: ATTRIBUTES,
        }
    }
}

impl Default for TextVertex {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_offsets() {
        assert_eq!(std::mem::offset_of!(TextVertex, uv0), 12);
        assert_eq!(std::mem::offset_of!(TextVertex, uv2), 28);
        assert_eq!(std::mem::offset_of!(TextVertex, color), 36);
        assert_eq!(std::mem::offset_of!(TextVertex, normal), 40);
        assert_eq!(std::mem::offset_of!(TextVertex, tangent), 52);
    }

    #[test]
    fn test_default_values() {
        let v = TextVertex::default();
        assert_eq!(v.position(), Vec3::ZERO);
        assert_eq!(v.uv0(), Vec4::ZERO);
        assert_eq!(v.uv2(), Vec2::ZERO);
        assert_eq!(v.color, Color32::WHITE);
        assert_eq!(v.normal(), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(v.tangent(), Vec4::new(-1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_zeroed_differs_from_default() {
        let zero = TextVertex::zeroed();
        assert_eq!(zero.color, Color32::TRANSPARENT);
        assert_ne!(zero, TextVertex::DEFAULT);
    }

    #[test]
    fn test_sdf_scale_sign_encodes_bold() {
        let v = TextVertex::DEFAULT.with_sdf_scale(1.5, true);
        assert!(v.is_bold());
        assert_eq!(v.sdf_scale(), 1.5);

        let v = v.with_sdf_scale(-2.0, false);
        assert!(!v.is_bold());
        assert_eq!(v.sdf_scale(), 2.0);
    }

    #[cfg(feature = "wgpu")]
    #[test]
    fn test_vertex_layout_stride() {
        let layout = TextVertex::vertex_layout();
        assert_eq!(layout.array_stride, 68);
        assert_eq!(layout.attributes.len(), 6);
    }
}
