//! Attribute storage tests.
//!
//! These cover preservation across resizes, clearing to defaults and quad
//! reversal for both physical layouts.

use bytemuck::bytes_of;
use glyphmesh::{
    BufferConfig, Color32, GrowthFill, TextVertex, Vec2, Vec3, Vec4, VertexBuffer, VertexLayout,
    VertexSortingOrder,
};

const LAYOUTS: [VertexLayout; 2] = [VertexLayout::Interleaved, VertexLayout::SplitArrays];

/// A quad whose every attribute is derived from `seed`.
fn distinct_quad(seed: u32) -> [TextVertex; 4] {
    std::array::from_fn(|corner| {
        let s = (seed * 4 + corner as u32) as f32;
        TextVertex::DEFAULT
            .with_position(Vec3::new(s, s + 0.5, 0.0))
            .with_uv0(Vec4::new(s * 0.01, s * 0.02, 1.0, 0.75))
            .with_sdf_scale(0.5 + s, seed % 2 == 0)
            .with_uv2(Vec2::new(s, -s))
            .with_color(Color32::new(seed as u8, corner as u8, 0x40, 0xFF))
            .with_normal(Vec3::new(0.0, 0.0, -1.0))
            .with_tangent(Vec4::new(-1.0, 0.0, 0.0, 1.0))
    })
}

fn fill(buffer: &mut VertexBuffer, quads: usize) {
    for q in 0..quads {
        buffer.push_quad(distinct_quad(q as u32)).unwrap();
    }
}

fn snapshot(buffer: &VertexBuffer, quads: usize) -> Vec<[TextVertex; 4]> {
    (0..quads).map(|q| buffer.quad(q)).collect()
}

fn same_bits(a: &[[TextVertex; 4]], b: &[[TextVertex; 4]]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(x, y)| x.iter().zip(y).all(|(v, w)| bytes_of(v) == bytes_of(w)))
}

#[test]
fn test_split_construct_fills_defaults() {
    let buffer = VertexBuffer::new(6, VertexLayout::SplitArrays);
    for q in 0..6 {
        assert_eq!(buffer.quad(q), [TextVertex::DEFAULT; 4]);
    }
    let split = buffer.split().unwrap();
    assert!(split.colors().iter().all(|&c| c == Color32::WHITE));
    assert!(split.normals().iter().all(|&n| n == Vec3::new(0.0, 0.0, -1.0)));
    assert!(split.tangents().iter().all(|&t| t == Vec4::new(-1.0, 0.0, 0.0, 1.0)));
}

#[test]
fn test_interleaved_growth_fill() {
    let mut zeroed = VertexBuffer::new(2, VertexLayout::Interleaved);
    zeroed.resize(4);
    assert!(zeroed.vertex_bytes().unwrap().iter().all(|&b| b == 0));

    let mut defaults = VertexBuffer::with_config(
        BufferConfig::new()
            .with_layout(VertexLayout::Interleaved)
            .with_initial_quads(2)
            .with_growth_fill(GrowthFill::Defaults),
    );
    defaults.resize(4);
    for q in 0..4 {
        assert_eq!(defaults.quad(q), [TextVertex::DEFAULT; 4]);
    }
}

#[test]
fn test_split_growth_gets_defaults() {
    let mut buffer = VertexBuffer::new(2, VertexLayout::SplitArrays);
    fill(&mut buffer, 2);
    buffer.resize(5);
    for q in 2..5 {
        assert_eq!(buffer.quad(q), [TextVertex::DEFAULT; 4]);
    }
}

#[test]
fn test_grow_shrink_round_trip_preserves_bits() {
    for layout in LAYOUTS {
        let mut buffer = VertexBuffer::new(6, layout);
        fill(&mut buffer, 5);
        let original = snapshot(&buffer, 5);

        buffer.resize(40);
        assert!(same_bits(&snapshot(&buffer, 5), &original));
        buffer.resize(6);
        assert!(same_bits(&snapshot(&buffer, 5), &original));
        buffer.resize(12);
        assert!(same_bits(&snapshot(&buffer, 5), &original));
        assert_eq!(buffer.vertex_count(), 20);
    }
}

#[test]
fn test_full_clear_resets_everything() {
    for layout in LAYOUTS {
        let mut buffer = VertexBuffer::new(4, layout);
        fill(&mut buffer, 4);
        let triangles = buffer.triangles().len();

        buffer.clear(true);

        assert_eq!(buffer.vertex_count(), 0);
        assert_eq!(buffer.triangles().len(), triangles);
        for q in 0..4 {
            assert_eq!(buffer.quad(q), [TextVertex::DEFAULT; 4], "{layout:?}");
        }
    }
}

#[test]
fn test_clear_from_resets_suffix_only() {
    for layout in LAYOUTS {
        for k in [0, 5, 8, 13, 16] {
            let mut buffer = VertexBuffer::new(4, layout);
            fill(&mut buffer, 4);
            let before = snapshot(&buffer, 4);

            buffer.clear_from(k);

            assert_eq!(buffer.vertex_count(), 16);
            for i in 0..16 {
                let vertex = buffer.quad(i / 4)[i % 4];
                if i < k {
                    assert_eq!(bytes_of(&vertex), bytes_of(&before[i / 4][i % 4]));
                } else {
                    assert_eq!(vertex, TextVertex::DEFAULT);
                }
            }
        }
    }
}

#[test]
fn test_partial_clear_targets_stale_tail() {
    for layout in LAYOUTS {
        let mut buffer = VertexBuffer::new(4, layout);
        fill(&mut buffer, 4);
        let kept = snapshot(&buffer, 2);

        // Text shrank from four characters to two.
        buffer.set_vertex_count(8).unwrap();
        buffer.clear(false);

        assert_eq!(buffer.vertex_count(), 8);
        assert!(same_bits(&snapshot(&buffer, 2), &kept));
        assert_eq!(buffer.quad(2), [TextVertex::DEFAULT; 4]);
        assert_eq!(buffer.quad(3), [TextVertex::DEFAULT; 4]);
    }
}

#[test]
fn test_reverse_two_quads_leaves_dead_quads() {
    let mut buffer = VertexBuffer::new(4, VertexLayout::SplitArrays);
    let red = [TextVertex::DEFAULT.with_color(Color32::rgb(255, 0, 0)); 4];
    let green = [TextVertex::DEFAULT.with_color(Color32::rgb(0, 255, 0)); 4];
    let dead = distinct_quad(99);
    buffer.set_quad(0, red);
    buffer.set_quad(1, green);
    buffer.set_quad(2, dead);
    buffer.set_vertex_count(8).unwrap();

    buffer.sort_geometry(VertexSortingOrder::Reverse);

    assert_eq!(buffer.quad(0), green);
    assert_eq!(buffer.quad(1), red);
    assert_eq!(buffer.quad(2), dead);
    assert_eq!(buffer.quad(3), [TextVertex::DEFAULT; 4]);
}

#[test]
fn test_reverse_is_involution() {
    for layout in LAYOUTS {
        for quads in [0, 1, 2, 3, 6, 9] {
            let mut buffer = VertexBuffer::new(10, layout);
            fill(&mut buffer, quads);
            let original = snapshot(&buffer, 10);

            buffer.reverse_quad_order();
            if quads > 1 {
                assert!(!same_bits(&snapshot(&buffer, 10), &original));
            }
            buffer.reverse_quad_order();

            assert!(same_bits(&snapshot(&buffer, 10), &original), "{layout:?} {quads}");
        }
    }
}

#[test]
fn test_reverse_odd_count_keeps_middle() {
    let mut buffer = VertexBuffer::new(3, VertexLayout::Interleaved);
    fill(&mut buffer, 3);

    buffer.reverse_quad_order();

    assert_eq!(buffer.quad(0), distinct_quad(2));
    assert_eq!(buffer.quad(1), distinct_quad(1));
    assert_eq!(buffer.quad(2), distinct_quad(0));
}

#[test]
fn test_swap_quads_arbitrary_pair() {
    for layout in LAYOUTS {
        let mut buffer = VertexBuffer::new(5, layout);
        fill(&mut buffer, 5);
        buffer.swap_quads(4, 1);
        assert_eq!(buffer.quad(1), distinct_quad(4));
        assert_eq!(buffer.quad(4), distinct_quad(1));
        assert_eq!(buffer.quad(0), distinct_quad(0));
    }
}

#[test]
fn test_mesh_data_matches_live_geometry() {
    for layout in LAYOUTS {
        let mut buffer = VertexBuffer::new(8, layout);
        fill(&mut buffer, 3);

        let mesh = buffer.to_mesh_data();

        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.index_count(), 18);
        assert_eq!(mesh.triangle_count(), 6);
        assert_eq!(&mesh.vertices[4..8], &distinct_quad(1));
        assert_eq!(mesh.indices.as_slice(), buffer.live_triangles());
    }
}

#[test]
fn test_split_arrays_direct_writes() {
    let mut buffer = VertexBuffer::new(2, VertexLayout::SplitArrays);
    {
        let split = buffer.split_mut().unwrap();
        split.positions_mut()[5] = Vec3::new(3.0, 4.0, 0.0);
        split.colors_mut()[5] = Color32::BLACK;
    }
    let vertex = buffer.quad(1)[1];
    assert_eq!(vertex.position(), Vec3::new(3.0, 4.0, 0.0));
    assert_eq!(vertex.color, Color32::BLACK);
    assert_eq!(vertex.normal(), Vec3::new(0.0, 0.0, -1.0));
}

#[test]
fn test_operations_with_tracing_enabled() {
    glyphmesh_core::logging::init_with_filter("glyphmesh=trace");

    let mut buffer = VertexBuffer::new(glyphmesh::MAX_QUADS + 1, VertexLayout::SplitArrays);
    buffer.resize(2);
    fill(&mut buffer, 2);
    buffer.reverse_quad_order();
    buffer.clear(true);
    assert_eq!(buffer.vertex_count(), 0);
}

#[test]
fn test_mutable_storage_access_keeps_capacity() {
    use glyphmesh::QuadStorage;

    let mut interleaved = VertexBuffer::new(4, VertexLayout::Interleaved);
    {
        let storage = interleaved.interleaved_mut().unwrap();
        storage.vertices_mut()[0] = TextVertex::DEFAULT.with_color(Color32::BLACK);
        storage.write_quad(3, &distinct_quad(3));
        storage.swap_quads(0, 3);
    }
    assert_eq!(interleaved.storage().len(), interleaved.capacity_vertices());
    assert_eq!(interleaved.triangles().len(), 24);
    interleaved.set_vertex_count(16).unwrap();
    let mesh = interleaved.to_mesh_data();
    assert_eq!(mesh.vertex_count(), 16);
    assert_eq!(mesh.vertices[12].color, Color32::BLACK);
    assert_eq!(&mesh.vertices[..4], &distinct_quad(3));

    let mut split = VertexBuffer::new(4, VertexLayout::SplitArrays);
    {
        let arrays = split.split_mut().unwrap();
        arrays.write_quad(1, &distinct_quad(1));
        arrays.uvs2_mut()[0] = Vec2::new(1.0, 1.0);
    }
    assert_eq!(split.storage().len(), 16);
    assert_eq!(split.split().unwrap().tangents().len(), 16);
    assert_eq!(split.capacity_vertices(), 16);
    assert_eq!(split.quad(1), distinct_quad(1));
}
