//! glyphmesh - quad vertex buffers for text rendering
//!
//! This crate owns the per-character geometry of a text object:
//! - One quad (4 vertices, 6 indices) per character
//! - Two physical layouts: interleaved records or split attribute arrays
//! - Incremental resizing that keeps written quads and derives new topology
//! - Clearing the whole buffer or a stale tail without touching indices
//! - In-place quad reversal for right-to-left runs
//!
//! Shaping, atlas lookup and GPU upload happen elsewhere. A layout engine
//! writes attribute values into the buffer and a renderer reads them back out.
//!
//! ## Quick Start
//!
//! ```rust
//! use glyphmesh::{Color32, TextVertex, VertexBuffer, VertexLayout, VertexSortingOrder};
//!
//! let mut buffer = VertexBuffer::new(4, VertexLayout::SplitArrays);
//!
//! let red = [TextVertex::DEFAULT.with_color(Color32::rgb(255, 0, 0)); 4];
//! let blue = [TextVertex::DEFAULT.with_color(Color32::rgb(0, 0, 255)); 4];
//! buffer.push_quad(red).unwrap();
//! buffer.push_quad(blue).unwrap();
//!
//! buffer.sort_geometry(VertexSortingOrder::Reverse);
//! assert_eq!(buffer.quad(0)[0].color, Color32::rgb(0, 0, 255));
//!
//! // Renderer side
//! assert_eq!(buffer.vertex_count(), 8);
//! assert_eq!(buffer.live_triangles(), &[0, 1, 2, 2, 3, 0, 4, 5, 6, 6, 7, 4]);
//! ```

pub mod buffer;
pub mod color;
pub mod config;
pub mod error;
pub mod mesh_data;
pub mod storage;
pub mod topology;
pub mod vertex;

pub use buffer::{GlyphRenderMode, MaterialId, VertexBuffer, VertexSortingOrder};
pub use color::Color32;
pub use config::{BufferConfig, GrowthFill};
pub use error::{MeshError, MeshResult};
pub use mesh_data::MeshData;
pub use storage::{InterleavedStorage, QuadStorage, SplitArrays, VertexLayout, VertexStorage};
pub use topology::{INDICES_PER_QUAD, MAX_QUADS, QUAD_INDICES, VERTICES_PER_QUAD};
pub use vertex::TextVertex;

pub use glyphmesh_core::math::{Vec2, Vec3, Vec4};
