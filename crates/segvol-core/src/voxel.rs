//! Voxel addressing for the spatiotemporal grid.

use crate::error::SegError;

/// Extent of a feature volume along its four axes.
///
/// `channels` is always at least 1: a 3D input `[L,H,W]` is interpreted as
/// `channels == 1` by the caller before it reaches this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dims {
    /// Number of frames.
    pub length: usize,
    /// Number of feature channels per voxel.
    pub channels: usize,
    /// Frame height.
    pub height: usize,
    /// Frame width.
    pub width: usize,
}

impl Dims {
    /// Total number of voxels, `length * height * width` (channel-independent).
    pub fn voxel_count(&self) -> usize {
        self.length * self.height * self.width
    }

    /// Validate that none of the extents are zero.
    ///
    /// A zero extent would make `voxel_count()` zero and every index
    /// computation vacuous; callers should reject such volumes up front.
    pub fn validate_nonempty(&self) -> Result<(), SegError> {
        if self.length == 0 || self.channels == 0 || self.height == 0 || self.width == 0 {
            return Err(SegError::DimensionMismatch {
                expected: "all of length, channels, height, width >= 1".into(),
                actual: format!(
                    "length={}, channels={}, height={}, width={}",
                    self.length, self.channels, self.height, self.width
                ),
            });
        }
        Ok(())
    }
}

/// Compute the universal voxel identifier `idx(z,y,x) = (z*h + y)*w + x`.
///
/// This is the node key shared by `DisjointSet`, edge records, and label
/// volumes; every subsystem that addresses a voxel by id uses this formula.
#[inline]
pub fn voxel_index(z: usize, y: usize, x: usize, height: usize, width: usize) -> usize {
    (z * height + y) * width + x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voxel_index_is_row_major() {
        // z=0 plane, row-major within it.
        assert_eq!(voxel_index(0, 0, 0, 3, 4), 0);
        assert_eq!(voxel_index(0, 0, 1, 3, 4), 1);
        assert_eq!(voxel_index(0, 1, 0, 3, 4), 4);
        assert_eq!(voxel_index(1, 0, 0, 3, 4), 12);
    }

    #[test]
    fn voxel_index_covers_full_range_bijectively() {
        let (l, h, w) = (2, 3, 4);
        let mut seen = vec![false; l * h * w];
        for z in 0..l {
            for y in 0..h {
                for x in 0..w {
                    let i = voxel_index(z, y, x, h, w);
                    assert!(i < l * h * w);
                    assert!(!seen[i], "index {i} produced twice");
                    seen[i] = true;
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn validate_nonempty_rejects_zero_extents() {
        let dims = Dims { length: 1, channels: 1, height: 0, width: 2 };
        assert!(dims.validate_nonempty().is_err());
        let ok = Dims { length: 1, channels: 1, height: 1, width: 1 };
        assert!(ok.validate_nonempty().is_ok());
    }
}
