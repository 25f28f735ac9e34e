//! Distance kernel and edge-tensor construction for the `segvol`
//! segmentation core.
//!
//! Converts a feature volume into the weighted neighborhood graph that
//! `segvol-segment`'s `MSTSegmenter` consumes, under one of three
//! topologies: 6-connectivity, 26-connectivity, or flow-warped
//! 6-connectivity (`SPEC_FULL.md` §4.1–§4.3).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod distance;
pub mod edges;
pub mod flow;

pub use distance::distance;
pub use edges::build_edge_tensor;
pub use flow::build_flow_edge_tensor;
