//! Core types and traits for the `segvol` video-volume segmentation core.
//!
//! This is the leaf crate with zero internal `segvol` dependencies. It
//! defines the fundamental abstractions used throughout the workspace:
//! voxel indexing, the metric and connectivity selectors, the generic
//! floating-point dispatch trait, and the error type surfaced at every
//! public API edge.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod connectivity;
pub mod error;
pub mod float;
pub mod metric;
pub mod voxel;

pub use connectivity::Connectivity;
pub use error::SegError;
pub use float::VoxelScalar;
pub use metric::Metric;
pub use voxel::{voxel_index, Dims};
