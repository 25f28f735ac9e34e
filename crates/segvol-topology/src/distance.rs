//! The per-voxel distance kernel (`SPEC_FULL.md` §4.1).

use ndarray::ArrayView4;
use segvol_core::{Metric, VoxelScalar};

/// Distance between two voxels `p = (z, y, x)` and `q = (z, y, x)` under
/// `metric`, reading feature channels from `features[z, c, y, x]`.
///
/// Any channel count `C >= 1` is supported. Under `Metric::Angular`, a
/// pair of all-zero feature vectors yields `acos(0 / eps) = pi/2`, per
/// `SPEC_FULL.md` §4.1's documented edge case.
pub fn distance<T: VoxelScalar>(
    features: ArrayView4<'_, T>,
    p: (usize, usize, usize),
    q: (usize, usize, usize),
    metric: Metric,
) -> T {
    let (pz, py, px) = p;
    let (qz, qy, qx) = q;
    let channels = features.shape()[1];

    match metric {
        Metric::Euclidean => {
            let sum_sq: T = (0..channels)
                .map(|c| {
                    let d = features[[pz, c, py, px]] - features[[qz, c, qy, qx]];
                    d * d
                })
                .sum();
            sum_sq.sqrt()
        }
        Metric::Max => (0..channels)
            .map(|c| (features[[pz, c, py, px]] - features[[qz, c, qy, qx]]).abs())
            .fold(T::zero(), |acc, d| if d > acc { d } else { acc }),
        Metric::Angular => {
            let mut dot = T::zero();
            let mut norm_p = T::zero();
            let mut norm_q = T::zero();
            for c in 0..channels {
                let fp = features[[pz, c, py, px]];
                let fq = features[[qz, c, qy, qx]];
                dot = dot + fp * fq;
                norm_p = norm_p + fp * fp;
                norm_q = norm_q + fq * fq;
            }
            let denom = norm_p.sqrt() * norm_q.sqrt() + T::angular_epsilon();
            (dot / denom).acos()
        }
    }
}
