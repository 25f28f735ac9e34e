//! Component adjacency extraction from a label volume (`SPEC_FULL.md` §4.6).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod adjacency;

pub use crate::adjacency::{adjacency, adjacency_2d};
