//! `segment_mst`'s output-format selector (`SPEC_FULL.md` §6, `color` flag).

use ndarray::{Array3, Array4};

/// Either the plain label volume, or a randomly colorized RGB render of it.
///
/// The `color` flag on the external `segment_mst` operation is a debug
/// convenience selecting between these two, not a separate algorithm;
/// the underlying partition is identical either way.
#[derive(Clone, Debug, PartialEq)]
pub enum SegmentOutput {
    /// One canonical root id per voxel, `[L, H, W]`.
    Labels(Array3<usize>),
    /// `[L, 3, H, W]` RGB bytes, one random color per component.
    Rgb(Array4<u8>),
}

impl SegmentOutput {
    /// The label volume, if this is the [`Labels`](Self::Labels) variant.
    pub fn as_labels(&self) -> Option<&Array3<usize>> {
        match self {
            Self::Labels(labels) => Some(labels),
            Self::Rgb(_) => None,
        }
    }

    /// The RGB render, if this is the [`Rgb`](Self::Rgb) variant.
    pub fn as_rgb(&self) -> Option<&Array4<u8>> {
        match self {
            Self::Labels(_) => None,
            Self::Rgb(rgb) => Some(rgb),
        }
    }
}
