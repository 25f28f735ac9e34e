//! `MSTSegmenter`: adaptive-threshold MST segmentation over an edge
//! tensor, plus a colorized debug render (`SPEC_FULL.md` §4.4, §4.7,
//! §10.7).
//!
//! The five-argument external `segment_mst(E, k, min_size, adaptive,
//! color)` operation is assembled in the facade crate from the building
//! blocks here: [`segment_mst`] for the partition itself, and
//! [`colorize_labels`] for the `color` output path.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod colorize;
mod edge_record;
mod materialize;
mod output;
mod segment;

pub use colorize::colorize_labels;
pub use edge_record::EdgeRecord;
pub use materialize::materialize_edges;
pub use output::SegmentOutput;
pub use segment::segment_mst;
