//! Segvol: video-volume graph segmentation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all segvol sub-crates and assembles the five external operations
//! (`SPEC_FULL.md` §6) from them. For most users, adding `segvol` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use segvol::prelude::*;
//! use ndarray::Array4;
//!
//! // A single 3x3 grayscale frame with one bright center pixel.
//! let f = Array4::from_shape_vec(
//!     (1, 1, 3, 3),
//!     vec![0.0, 0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 0.0, 0.0],
//! )
//! .unwrap();
//!
//! let edges = segvol::graph(f.view(), 6, 'e').unwrap();
//! let (output, n_components) =
//!     segvol::segment_mst(edges.view(), 5.0, 1, true, false).unwrap();
//! assert_eq!(n_components, 2);
//! let labels = output.as_labels().unwrap();
//!
//! let neighbors = segvol::adjacency(labels.view()).unwrap();
//! let geometry: indexmap::IndexMap<usize, GeometryRecord<f64>> =
//!     segvol::segm_to_components(labels.view()).unwrap();
//! assert_eq!(neighbors.len(), geometry.len());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! [`prelude`]:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `segvol-core` | `Dims`, `Metric`, `Connectivity`, `SegError`, `VoxelScalar` |
//! | [`topology`] | `segvol-topology` | distance kernel, `EdgeBuilder`, `FlowEdgeBuilder` |
//! | [`unionfind`] | `segvol-unionfind` | `DisjointSet` |
//! | [`segment`] | `segvol-segment` | `MSTSegmenter`, colorized debug render |
//! | [`geometry`] | `segvol-geometry` | `segm_to_components`, `GeometryRecord` |
//! | [`adjacency_crate`] | `segvol-adjacency` | the underlying `adjacency` operation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use ndarray::{Array4, ArrayView3, ArrayView4};
use segvol_core::{Connectivity, Metric, SegError, VoxelScalar};

/// Core types, traits, and error (`segvol-core`).
pub use segvol_core as core;

/// Distance kernel and edge-tensor construction (`segvol-topology`).
pub use segvol_topology as topology;

/// Array-backed union-find (`segvol-unionfind`).
pub use segvol_unionfind as unionfind;

/// `MSTSegmenter` and colorized debug render (`segvol-segment`).
pub use segvol_segment as segment;

/// Per-component geometry extraction (`segvol-geometry`).
pub use segvol_geometry as geometry;

/// Component adjacency extraction (`segvol-adjacency`).
pub use segvol_adjacency as adjacency_crate;

pub use segvol_geometry::GeometryRecord;
pub use segvol_segment::SegmentOutput;

/// Build the edge tensor `E[L, D, H, W]` for a feature volume
/// `F[L, C, H, W]` (`SPEC_FULL.md` §4.2).
///
/// `connectivity` is `6` or `26`; `metric` is one of `'e'`, `'m'`, `'a'`
/// for EUCLIDEAN, MAX, ANGULAR.
pub fn graph<T: VoxelScalar>(
    features: ArrayView4<'_, T>,
    connectivity: u32,
    metric: char,
) -> Result<Array4<T>, SegError> {
    let connectivity = Connectivity::try_from(connectivity)?;
    let metric = Metric::try_from(metric)?;
    segvol_topology::build_edge_tensor(features, connectivity, metric)
}

/// Build the flow-warped edge tensor for temporal frame pairs
/// (`SPEC_FULL.md` §4.3). `connectivity` must be `6`; any other value is
/// an `UnknownConnectivity` error, matching `FlowEdgeBuilder`'s narrower
/// contract.
pub fn flow_graph<T: VoxelScalar>(
    features: ArrayView4<'_, T>,
    flow: ArrayView4<'_, T>,
    connectivity: u32,
    metric: char,
) -> Result<Array4<T>, SegError> {
    if connectivity != 6 {
        return Err(SegError::UnknownConnectivity { value: connectivity });
    }
    let metric = Metric::try_from(metric)?;
    segvol_topology::build_flow_edge_tensor(features, flow, metric)
}

/// Partition an edge tensor into connected components
/// (`SPEC_FULL.md` §4.4). When `color` is set, the label volume is
/// discarded in favor of a randomly colorized RGB debug render drawn
/// from OS entropy; callers that need a reproducible render should call
/// [`segment::colorize_labels`] directly with an explicit seed.
pub fn segment_mst<T: VoxelScalar>(
    edges: ArrayView4<'_, T>,
    k: T,
    min_size: usize,
    adaptive: bool,
    color: bool,
) -> Result<(SegmentOutput, usize), SegError> {
    let (labels, n_components) = segvol_segment::segment_mst(edges, k, min_size, adaptive)?;
    let output = if color {
        SegmentOutput::Rgb(segvol_segment::colorize_labels(&labels, None))
    } else {
        SegmentOutput::Labels(labels)
    };
    Ok((output, n_components))
}

/// Build the symmetric component adjacency graph of a label volume
/// (`SPEC_FULL.md` §4.6).
pub fn adjacency(
    labels: ArrayView3<'_, usize>,
) -> Result<indexmap::IndexMap<usize, indexmap::IndexSet<usize>>, SegError> {
    segvol_adjacency::adjacency(labels)
}

/// Extract per-component geometry from a label volume
/// (`SPEC_FULL.md` §4.5).
pub fn segm_to_components<T: VoxelScalar>(
    labels: ArrayView3<'_, usize>,
) -> Result<indexmap::IndexMap<usize, GeometryRecord<T>>, SegError> {
    segvol_geometry::segm_to_components(labels)
}

/// Common imports for typical `segvol` usage.
///
/// ```rust
/// use segvol::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{adjacency, graph, segment_mst, segm_to_components, flow_graph};
    pub use segvol_core::{Connectivity, Metric, SegError, VoxelScalar};
    pub use segvol_geometry::GeometryRecord;
    pub use segvol_segment::SegmentOutput;
}
