//! The neighborhood connectivity selector and its direction tables.

use crate::error::SegError;

/// All 13 "forward" 26-connectivity offsets, in the exact order the wire
/// contract between `EdgeBuilder` and `MSTSegmenter` requires
/// (`SPEC_FULL.md` §4.2). Each tuple is `(dx, dy, dz)`.
pub const DIRECTIONS_26: [(i32, i32, i32); 13] = [
    (1, 0, 0),
    (0, 1, 0),
    (1, 1, 0),
    (1, -1, 0),
    (0, 0, 1),
    (1, 0, 1),
    (0, 1, 1),
    (1, 1, 1),
    (1, -1, 1),
    (-1, 0, 1),
    (0, -1, 1),
    (-1, -1, 1),
    (-1, 1, 1),
];

/// The 3 forward 6-connectivity offsets, `d = 0..2`.
pub const DIRECTIONS_6: [(i32, i32, i32); 3] = [(1, 0, 0), (0, 1, 0), (0, 0, 1)];

/// Neighborhood topology selector (`SPEC_FULL.md` §4.2).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Axis-aligned 6-connectivity: `D = 3` forward directions.
    Six,
    /// Full spatiotemporal 26-connectivity: `D = 13` forward directions.
    TwentySix,
}

impl Connectivity {
    /// Number of edge directions stored per voxel in the edge tensor.
    pub fn direction_count(self) -> usize {
        match self {
            Self::Six => DIRECTIONS_6.len(),
            Self::TwentySix => DIRECTIONS_26.len(),
        }
    }

    /// The forward direction offsets for this topology, in wire order.
    pub fn directions(self) -> &'static [(i32, i32, i32)] {
        match self {
            Self::Six => &DIRECTIONS_6,
            Self::TwentySix => &DIRECTIONS_26,
        }
    }
}

impl TryFrom<u32> for Connectivity {
    type Error = SegError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            6 => Ok(Self::Six),
            26 => Ok(Self::TwentySix),
            other => Err(SegError::UnknownConnectivity { value: other }),
        }
    }
}

/// Decode an edge tensor's direction-axis length back into a `Connectivity`.
///
/// `MSTSegmenter` receives only the edge tensor, so it recovers the
/// topology from `D` rather than being told it out of band
/// (`SPEC_FULL.md` §4.4 step 1).
impl TryFrom<usize> for Connectivity {
    type Error = SegError;

    fn try_from(direction_count: usize) -> Result<Self, Self::Error> {
        match direction_count {
            3 => Ok(Self::Six),
            13 => Ok(Self::TwentySix),
            other => Err(SegError::DimensionMismatch {
                expected: "edge tensor direction axis of length 3 or 13".into(),
                actual: format!("{other}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_counts_match_tables() {
        assert_eq!(Connectivity::Six.direction_count(), 3);
        assert_eq!(Connectivity::TwentySix.direction_count(), 13);
        assert_eq!(Connectivity::Six.directions().len(), 3);
        assert_eq!(Connectivity::TwentySix.directions().len(), 13);
    }

    #[test]
    fn rejects_unknown_connectivity() {
        assert_eq!(
            Connectivity::try_from(12u32),
            Err(SegError::UnknownConnectivity { value: 12 })
        );
    }

    #[test]
    fn direction_table_26_matches_spec_order() {
        let expected = [
            (1, 0, 0),
            (0, 1, 0),
            (1, 1, 0),
            (1, -1, 0),
            (0, 0, 1),
            (1, 0, 1),
            (0, 1, 1),
            (1, 1, 1),
            (1, -1, 1),
            (-1, 0, 1),
            (0, -1, 1),
            (-1, -1, 1),
            (-1, 1, 1),
        ];
        assert_eq!(DIRECTIONS_26, expected);
    }
}
