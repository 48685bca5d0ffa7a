//! Benchmarks for glyph vertex buffer operations

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glyphmesh::{Color32, TextVertex, Vec3, VertexBuffer, VertexLayout, VertexSortingOrder};

const LAYOUTS: [VertexLayout; 2] = [VertexLayout::Interleaved, VertexLayout::SplitArrays];

fn glyph(index: usize) -> [TextVertex; 4] {
    let x = index as f32 * 10.0;
    [
        TextVertex::DEFAULT.with_position(Vec3::new(x, 0.0, 0.0)),
        TextVertex::DEFAULT.with_position(Vec3::new(x, 12.0, 0.0)),
        TextVertex::DEFAULT.with_position(Vec3::new(x + 8.0, 12.0, 0.0)),
        TextVertex::DEFAULT.with_position(Vec3::new(x + 8.0, 0.0, 0.0)),
    ]
    .map(|v| v.with_color(Color32::rgb(index as u8, 0, 0)))
}

fn filled(quads: usize, layout: VertexLayout) -> VertexBuffer {
    let mut buffer = VertexBuffer::new(quads, layout);
    for i in 0..quads {
        buffer.push_quad(glyph(i)).unwrap();
    }
    buffer
}

fn bench_push_quads(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_quads");

    for layout in LAYOUTS {
        for size in [64, 1024, 8192] {
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{layout:?}"), size),
                &size,
                |b, &size| {
                    b.iter(|| {
                        let mut buffer = VertexBuffer::new(1, layout);
                        for i in 0..size {
                            buffer.push_quad(black_box(glyph(i))).unwrap();
                        }
                        buffer
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize_grow_shrink");

    for layout in LAYOUTS {
        group.bench_function(format!("{layout:?}"), |b| {
            let mut buffer = filled(256, layout);
            b.iter(|| {
                buffer.resize(black_box(4096));
                buffer.resize(black_box(256));
            });
        });
    }

    group.finish();
}

fn bench_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("clear");

    for layout in LAYOUTS {
        let mut buffer = filled(4096, layout);
        group.bench_function(format!("full/{layout:?}"), |b| {
            b.iter(|| buffer.clear(black_box(true)));
        });

        let mut buffer = filled(4096, layout);
        group.bench_function(format!("tail/{layout:?}"), |b| {
            b.iter(|| buffer.clear_from(black_box(2048)));
        });
    }

    group.finish();
}

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse_quad_order");

    for layout in LAYOUTS {
        for size in [64, 1024, 8192] {
            let mut buffer = filled(size, layout);
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{layout:?}"), size),
                &size,
                |b, _| {
                    b.iter(|| buffer.sort_geometry(black_box(VertexSortingOrder::Reverse)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push_quads,
    bench_resize,
    bench_clear,
    bench_reverse
);
criterion_main!(benches);
