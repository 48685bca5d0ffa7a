//! Simulates a layout engine reflowing a label across frames.
//!
//! Run with: `RUST_LOG=glyphmesh=trace cargo run -p glyphmesh --example reflow`

use glyphmesh::{
    Color32, GlyphRenderMode, MaterialId, TextVertex, Vec3, Vec4, VertexBuffer, VertexLayout,
    VertexSortingOrder,
};

fn layout_text(buffer: &mut VertexBuffer, text: &str, right_to_left: bool) {
    buffer.set_vertex_count(0).expect("zero is always valid");

    let mut pen_x = 0.0;
    for (i, _ch) in text.chars().enumerate() {
        let (w, h) = (9.0, 14.0);
        let page = 0.0;
        let uv = Vec4::new(i as f32 / 64.0, 0.0, page, 1.0);
        let quad = [
            TextVertex::new(Vec3::new(pen_x, 0.0, 0.0), uv),
            TextVertex::new(Vec3::new(pen_x, h, 0.0), uv),
            TextVertex::new(Vec3::new(pen_x + w, h, 0.0), uv),
            TextVertex::new(Vec3::new(pen_x + w, 0.0, 0.0), uv),
        ]
        .map(|v| v.with_color(Color32::from_hex_alpha(0xE0E0E0FF)));

        if let Err(err) = buffer.push_quad(quad) {
            tracing::warn!("dropping glyphs: {}", err);
            break;
        }
        pen_x += w;
    }

    buffer.clear_unused();
    let order = if right_to_left {
        VertexSortingOrder::Reverse
    } else {
        VertexSortingOrder::Normal
    };
    buffer.sort_geometry(order);
}

fn main() {
    glyphmesh_core::logging::init();

    let mut buffer = VertexBuffer::new(4, VertexLayout::Interleaved);
    buffer.set_material(Some(MaterialId::new(1)));
    buffer.set_glyph_render_mode(GlyphRenderMode::Sdf);

    for (frame, text) in ["Hi", "Hello, world", "Hello", "مرحبا"].iter().enumerate() {
        glyphmesh_core::profiling::new_frame();
        let rtl = frame == 3;
        layout_text(&mut buffer, text, rtl);

        let mesh = buffer.to_mesh_data();
        tracing::info!(
            frame,
            text,
            quads = buffer.quad_count(),
            capacity = buffer.capacity_quads(),
            triangles = mesh.triangle_count(),
            "frame laid out"
        );
    }
}
