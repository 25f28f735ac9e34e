//! Benchmark fixtures for the `segvol` segmentation core.
//!
//! Provides deterministic synthetic volumes shared by the benches and
//! kept out of each `benches/*.rs` file so the profiles stay consistent
//! across runs.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ndarray::{Array3, Array4};

/// A deterministic `[L, 1, H, W]` feature volume, large enough to be
/// representative of a real clip without making a benchmark iteration
/// slow. Values are a cheap hash of the voxel coordinate, not random
/// noise, so results are reproducible across machines.
pub fn reference_volume(l: usize, h: usize, w: usize) -> Array4<f64> {
    Array4::from_shape_fn((l, 1, h, w), |(z, _, y, x)| {
        ((z * 97 + y * 31 + x * 7) % 256) as f64
    })
}

/// A deterministic `[L, H, W]` label volume with many small components,
/// the shape that stresses the geometry and adjacency scans hardest.
pub fn reference_labels(l: usize, h: usize, w: usize) -> Array3<usize> {
    Array3::from_shape_fn((l, h, w), |(z, y, x)| (z * 13 + y * 5 + x) % 64)
}
