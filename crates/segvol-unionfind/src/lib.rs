//! Array-backed union-find for the `segvol` segmentation core.
//!
//! The disjoint-set forest is an arena-plus-index structure: one flat
//! `Vec` of parent pointers and one flat `Vec` of per-root sizes, with no
//! node objects and no ownership cycles (`SPEC_FULL.md` §9 "Cyclic
//! references / mutable graph").

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod disjoint_set;

pub use disjoint_set::DisjointSet;
