//! Per-component geometry extraction from a label volume
//! (`SPEC_FULL.md` §4.5).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod accumulate;
mod record;

pub use accumulate::{segm_to_components, segm_to_components_2d_legacy};
pub use record::GeometryRecord;
