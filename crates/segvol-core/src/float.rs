//! Generic floating-point dispatch.
//!
//! Replaces the source's process-global numeric-type dispatch tables
//! (`SPEC_FULL.md` §9 "Global state") with an ordinary type parameter:
//! every public operation is generic over `T: VoxelScalar` and
//! monomorphizes to `f32` or `f64` at the call site.

use num_traits::Float;

/// The numeric type a feature volume, edge tensor, or threshold array may
/// be built from.
///
/// Blanket-implemented for `f32` and `f64`, the two precisions named in
/// `SPEC_FULL.md` §6. `Send + Sync` lets the edge-weight and label-emission
/// passes (`SPEC_FULL.md` §5, §10.4) run under `rayon` without extra bounds
/// at every call site.
pub trait VoxelScalar: Float + Send + Sync + std::iter::Sum + 'static {
    /// The epsilon guarding the angular metric's division, `1e-8`
    /// (`SPEC_FULL.md` §4.1).
    fn angular_epsilon() -> Self;
}

impl VoxelScalar for f32 {
    fn angular_epsilon() -> Self {
        1e-8
    }
}

impl VoxelScalar for f64 {
    fn angular_epsilon() -> Self {
        1e-8
    }
}
