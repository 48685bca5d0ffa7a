//! Math types for vertex attributes.
//!
//! [`Vec2`], [`Vec3`] and [`Vec4`] are the SIMD-accelerated `glam` types used
//! for CPU-side attribute storage. The [`packed`] types have a guaranteed
//! `#[repr(C)]` layout and are what interleaved vertex records are built from.
//!
//! ```
//! use glyphmesh_core::math::{PackedVec4, Vec4};
//!
//! let tangent = Vec4::new(-1.0, 0.0, 0.0, 1.0);
//! let packed = PackedVec4::from(tangent);
//! assert_eq!(Vec4::from(packed), tangent);
//! ```

pub use glam::{Vec2, Vec3, Vec4};

/// Packed vector types that can be cast to bytes with [`bytemuck`].
///
/// Note that `glam::Vec4` is 16-byte aligned on SIMD targets, so it cannot sit
/// next to a `Vec3` in a padding-free record. These can.
pub mod packed {
    use bytemuck::{Pod, Zeroable};

    /// 8 bytes: `x`, `y`.
    #[repr(C)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
    pub struct Vec2 {
        pub x: f32,
        pub y: f32,
    }

    /// 12 bytes: `x`, `y`, `z`.
    #[repr(C)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
    pub struct Vec3 {
        pub x: f32,
        pub y: f32,
        pub z: f32,
    }

    /// 16 bytes: `x`, `y`, `z`, `w`.
    #[repr(C)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
    pub struct Vec4 {
        pub x: f32,
        pub y: f32,
        pub z: f32,
        pub w: f32,
    }

    impl Vec2 {
        pub const ZERO: Self = Self::new(0.0, 0.0);

        pub const fn new(x: f32, y: f32) -> Self {
            Self { x, y }
        }
    }

    impl Vec3 {
        pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

        pub const fn new(x: f32, y: f32, z: f32) -> Self {
            Self { x, y, z }
        }
    }

    impl Vec4 {
        pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

        pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
            Self { x, y, z, w }
        }
    }

    impl From<glam::Vec2> for Vec2 {
        fn from(v: glam::Vec2) -> Self {
            Self::new(v.x, v.y)
        }
    }

    impl From<Vec2> for glam::Vec2 {
        fn from(v: Vec2) -> Self {
            glam::Vec2::new(v.x, v.y)
        }
    }

    impl From<glam::Vec3> for Vec3 {
        fn from(v: glam::Vec3) -> Self {
            Self::new(v.x, v.y, v.z)
        }
    }

    impl From<Vec3> for glam::Vec3 {
        fn from(v: Vec3) -> Self {
            glam::Vec3::new(v.x, v.y, v.z)
        }
    }

    impl From<glam::Vec4> for Vec4 {
        fn from(v: glam::Vec4) -> Self {
            Self::new(v.x, v.y, v.z, v.w)
        }
    }

    impl From<Vec4> for glam::Vec4 {
        fn from(v: Vec4) -> Self {
            glam::Vec4::new(v.x, v.y, v.z, v.w)
        }
    }
}

pub use packed::{Vec2 as PackedVec2, Vec3 as PackedVec3, Vec4 as PackedVec4};
