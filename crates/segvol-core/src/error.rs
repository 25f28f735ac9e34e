//! Error types for the `segvol` segmentation core.
//!
//! Every error is a precondition violation reported synchronously to the
//! caller (see `SPEC_FULL.md` §6–§7): there are no recoverable failures,
//! no retries, and no partial outputs.

use std::error::Error;
use std::fmt;

/// Errors surfaced at a `segvol` public API edge.
///
/// Each variant corresponds 1:1 to one of the four precondition checks
/// named in the external-interface contract.
#[derive(Clone, Debug, PartialEq)]
pub enum SegError {
    /// Rank or size of an input array violates the data model.
    DimensionMismatch {
        /// What was expected (a human-readable shape description).
        expected: String,
        /// What was actually observed.
        actual: String,
    },
    /// The metric selector character is outside `{'e', 'm', 'a'}`.
    UnknownMetric {
        /// The offending selector character.
        selector: char,
    },
    /// The connectivity value is outside the supported set for the
    /// operation (`{6, 26}` for `EdgeBuilder`, `{6}` for `FlowEdgeBuilder`).
    UnknownConnectivity {
        /// The offending connectivity value.
        value: u32,
    },
    /// A scalar parameter violates its documented range
    /// (`k <= 0`, or `min_size < 0` when passed as a signed quantity).
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Human-readable description of the violated constraint.
        reason: String,
    },
}

impl fmt::Display for SegError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            Self::UnknownMetric { selector } => {
                write!(f, "unknown metric selector '{selector}' (expected one of 'e', 'm', 'a')")
            }
            Self::UnknownConnectivity { value } => {
                write!(f, "unknown connectivity {value} (expected 6 or 26)")
            }
            Self::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter '{name}': {reason}")
            }
        }
    }
}

impl Error for SegError {}
