//! Criterion micro-benchmarks for geometry and adjacency extraction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use indexmap::IndexMap;
use segvol_adjacency::adjacency;
use segvol_bench::reference_labels;
use segvol_geometry::{segm_to_components, GeometryRecord};

fn bench_segm_to_components(c: &mut Criterion) {
    let labels = reference_labels(8, 64, 64);
    c.bench_function("segm_to_components_8x64x64", |b| {
        b.iter(|| {
            let _: IndexMap<usize, GeometryRecord<f64>> =
                segm_to_components(black_box(labels.view())).unwrap();
        });
    });
}

fn bench_adjacency(c: &mut Criterion) {
    let labels = reference_labels(8, 64, 64);
    c.bench_function("adjacency_8x64x64", |b| {
        b.iter(|| adjacency(black_box(labels.view())).unwrap());
    });
}

criterion_group!(benches, bench_segm_to_components, bench_adjacency);
criterion_main!(benches);
