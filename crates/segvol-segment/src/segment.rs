//! `MSTSegmenter`: adaptive-threshold MST segmentation over an edge tensor
//! (`SPEC_FULL.md` §4.4).

use ndarray::{Array3, ArrayView4};
use rayon::prelude::*;
use segvol_core::{Dims, SegError, VoxelScalar};
use segvol_unionfind::DisjointSet;

use crate::edge_record::EdgeRecord;
use crate::materialize::materialize_edges;

/// Partition an edge tensor into connected components.
///
/// `k` is the merge-threshold constant (must be `> 0`); `min_size` is the
/// minimum component size enforced by the cleanup pass (any `usize`, so
/// the "`min_size < 0`" precondition from the external-interface contract
/// can never arise through this signature). `adaptive` selects whether
/// each component's threshold grows as `w + k / surface` after a merge,
/// or stays pinned at the initial `k`.
///
/// Returns the label volume (one canonical root id per voxel, in
/// `[L, H, W]` row-major layout matching the input) and the number of
/// distinct components remaining after cleanup.
pub fn segment_mst<T: VoxelScalar>(
    edges: ArrayView4<'_, T>,
    k: T,
    min_size: usize,
    adaptive: bool,
) -> Result<(Array3<usize>, usize), SegError> {
    if k <= T::zero() {
        return Err(SegError::InvalidParameter {
            name: "k",
            reason: "must be > 0".into(),
        });
    }
    let shape = edges.shape();
    if shape.len() != 4 {
        return Err(SegError::DimensionMismatch {
            expected: "4D edge tensor [L, D, H, W]".into(),
            actual: format!("{}D", shape.len()),
        });
    }
    let dims = Dims {
        length: shape[0],
        channels: shape[1],
        height: shape[2],
        width: shape[3],
    };
    dims.validate_nonempty()?;
    let (l, h, w) = (dims.length, dims.height, dims.width);
    let n = l * h * w;

    let mut records = materialize_edges(edges)?;
    // Ties broken arbitrarily; NaN weights sort as equal to their
    // neighbors rather than panicking, per §7 "NaNs propagate".
    records.sort_by(|a, b| a.w.partial_cmp(&b.w).unwrap_or(std::cmp::Ordering::Equal));

    let mut ds = DisjointSet::new(n);
    let mut tau = vec![k; n];
    adaptive_merge(&records, &mut ds, &mut tau, k, adaptive);
    cleanup_pass(&records, &mut ds, min_size);

    let flat: Vec<usize> = (0..n).into_par_iter().map(|v| ds.find_readonly(v)).collect();
    let labels = Array3::from_shape_vec((l, h, w), flat).map_err(|e| SegError::DimensionMismatch {
        expected: format!("{l}x{h}x{w} elements"),
        actual: e.to_string(),
    })?;
    Ok((labels, ds.count_roots()))
}

/// Step 3: the inherently sequential adaptive-threshold merge loop.
fn adaptive_merge<T: VoxelScalar>(
    records: &[EdgeRecord<T>],
    ds: &mut DisjointSet,
    tau: &mut [T],
    k: T,
    adaptive: bool,
) {
    for edge in records {
        let ra = ds.find(edge.a);
        let rb = ds.find(edge.b);
        if ra == rb {
            continue;
        }
        if edge.w <= tau[ra] && edge.w <= tau[rb] {
            let r = ds.union(ra, rb);
            if adaptive {
                let surface = T::from(ds.surface(r)).expect("surface fits in T");
                tau[r] = edge.w + k / surface;
            }
        }
    }
}

/// Step 4: merge any component still under `min_size` into a neighbor,
/// unconditionally and regardless of `τ`.
fn cleanup_pass<T: VoxelScalar>(records: &[EdgeRecord<T>], ds: &mut DisjointSet, min_size: usize) {
    for edge in records {
        let ra = ds.find(edge.a);
        let rb = ds.find(edge.b);
        if ra == rb {
            continue;
        }
        if ds.surface(ra) < min_size || ds.surface(rb) < min_size {
            ds.union(ra, rb);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array4;

    #[test]
    fn rejects_nonpositive_k() {
        let e = Array4::<f64>::zeros((1, 3, 2, 2));
        let err = segment_mst(e.view(), 0.0, 1, true).unwrap_err();
        assert!(matches!(err, SegError::InvalidParameter { name: "k", .. }));
    }

    #[test]
    fn uniform_volume_collapses_to_one_component() {
        // All edge weights zero: every forward edge is always below
        // threshold, so the whole volume merges into a single component.
        let e = Array4::<f64>::zeros((1, 3, 3, 3));
        let (labels, n) = segment_mst(e.view(), 1.0, 1, true).unwrap();
        assert_eq!(n, 1);
        let root = labels[[0, 0, 0]];
        assert!(labels.iter().all(|&v| v == root));
    }

    #[test]
    fn bright_center_separates_from_uniform_surround() {
        // S1: a bright center pixel in an otherwise uniform 3x3 frame.
        // Every edge touching the center carries the bright-to-dark
        // weight (both the two outgoing from the center and the two
        // incoming from its left/top neighbors); the ring of edges
        // among the 8 surrounding pixels stays zero, so two components
        // form: the center, and the ring.
        let mut e = Array4::<f64>::zeros((1, 3, 3, 3));
        e[[0, 0, 1, 0]] = 10.0; // (1,0) --x--> (1,1)
        e[[0, 0, 1, 1]] = 10.0; // (1,1) --x--> (1,2)
        e[[0, 1, 0, 1]] = 10.0; // (0,1) --y--> (1,1)
        e[[0, 1, 1, 1]] = 10.0; // (1,1) --y--> (2,1)
        let (_labels, n) = segment_mst(e.view(), 5.0, 1, true).unwrap();
        assert_eq!(n, 2);
    }

    #[test]
    fn min_size_cleanup_merges_small_components() {
        // Two isolated singleton voxels joined by one mid-weight edge;
        // with min_size above the singleton size the cleanup pass must
        // unify them even though the adaptive pass alone would not.
        let mut e = Array4::<f64>::zeros((1, 3, 1, 2));
        e[[0, 0, 0, 0]] = 1000.0;
        let (_labels, n) = segment_mst(e.view(), 0.001, 2, true).unwrap();
        assert_eq!(n, 1);
    }

    #[test]
    fn non_adaptive_threshold_stays_fixed() {
        let mut e = Array4::<f64>::zeros((1, 3, 1, 3));
        e[[0, 0, 0, 0]] = 1.0;
        e[[0, 0, 0, 1]] = 1.0;
        let (labels_adaptive, _) = segment_mst(e.view(), 2.0, 1, true).unwrap();
        let (labels_fixed, _) = segment_mst(e.view(), 2.0, 1, false).unwrap();
        assert_eq!(labels_adaptive[[0, 0, 0]], labels_adaptive[[0, 0, 2]]);
        assert_eq!(labels_fixed[[0, 0, 0]], labels_fixed[[0, 0, 2]]);
    }
}
