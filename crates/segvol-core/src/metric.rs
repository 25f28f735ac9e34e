//! The distance-kernel metric selector.

use crate::error::SegError;
use std::fmt;

/// Distance metric used by the distance kernel (`SPEC_FULL.md` §4.1).
///
/// Decoded from the legacy single-character selector at the public API
/// edge (`SPEC_FULL.md` §9 "Dynamic dispatch via character metric
/// selector"); internal code always works with this tagged variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    /// `sqrt(sum((p_c - q_c)^2))`.
    Euclidean,
    /// `max(|p_c - q_c|)` (Chebyshev distance).
    Max,
    /// `acos(dot(p, q) / (|p| * |q| + eps))`.
    Angular,
}

impl Metric {
    /// The legacy single-character selector for this metric.
    pub fn as_char(self) -> char {
        match self {
            Self::Euclidean => 'e',
            Self::Max => 'm',
            Self::Angular => 'a',
        }
    }
}

impl TryFrom<char> for Metric {
    type Error = SegError;

    fn try_from(selector: char) -> Result<Self, Self::Error> {
        match selector {
            'e' => Ok(Self::Euclidean),
            'm' => Ok(Self::Max),
            'a' => Ok(Self::Angular),
            other => Err(SegError::UnknownMetric { selector: other }),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Euclidean => "euclidean",
            Self::Max => "max",
            Self::Angular => "angular",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_char() {
        for m in [Metric::Euclidean, Metric::Max, Metric::Angular] {
            assert_eq!(Metric::try_from(m.as_char()).unwrap(), m);
        }
    }

    #[test]
    fn rejects_unknown_selector() {
        assert_eq!(
            Metric::try_from('z'),
            Err(SegError::UnknownMetric { selector: 'z' })
        );
    }
}
