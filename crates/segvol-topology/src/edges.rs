//! `EdgeBuilder`: converts a feature volume into an edge tensor
//! (`SPEC_FULL.md` §4.2).

use ndarray::{Array4, ArrayView4};
use rayon::prelude::*;
use segvol_core::{Connectivity, Dims, Metric, SegError, VoxelScalar};

use crate::distance::distance;

/// Build the edge tensor `E[L, D, H, W]` for a feature volume `F[L, C, H, W]`.
///
/// `D` is `3` for [`Connectivity::Six`] or `13` for
/// [`Connectivity::TwentySix`]. Cells for out-of-bounds neighbors are left
/// at zero; per `SPEC_FULL.md` §3, callers must not treat a zero weight at
/// a boundary position as a real edge.
///
/// Per `SPEC_FULL.md` §5 / §10.4, frames are computed independently and in
/// parallel: each frame only reads `features` and writes its own `D*H*W`
/// slice of the output.
pub fn build_edge_tensor<T: VoxelScalar>(
    features: ArrayView4<'_, T>,
    connectivity: Connectivity,
    metric: Metric,
) -> Result<Array4<T>, SegError> {
    let shape = features.shape();
    if shape.len() != 4 {
        return Err(SegError::DimensionMismatch {
            expected: "4D feature volume [L, C, H, W]".into(),
            actual: format!("{}D", shape.len()),
        });
    }
    let dims = Dims {
        length: shape[0],
        channels: shape[1],
        height: shape[2],
        width: shape[3],
    };
    dims.validate_nonempty()?;

    let directions = connectivity.directions();
    let d = directions.len();
    let (l, h, w) = (dims.length, dims.height, dims.width);

    // One flat [D * H * W] slice per frame, computed independently.
    let frames: Vec<Vec<T>> = (0..l)
        .into_par_iter()
        .map(|z| build_frame(features, directions, metric, z, l, h, w))
        .collect();

    let flat: Vec<T> = frames.into_iter().flatten().collect();
    Array4::from_shape_vec((l, d, h, w), flat).map_err(|e| SegError::DimensionMismatch {
        expected: format!("{l}x{d}x{h}x{w} elements"),
        actual: e.to_string(),
    })
}

fn build_frame<T: VoxelScalar>(
    features: ArrayView4<'_, T>,
    directions: &[(i32, i32, i32)],
    metric: Metric,
    z: usize,
    l: usize,
    h: usize,
    w: usize,
) -> Vec<T> {
    let mut frame = vec![T::zero(); directions.len() * h * w];
    for (d_idx, &(dx, dy, dz)) in directions.iter().enumerate() {
        for y in 0..h {
            for x in 0..w {
                let Some((nx, ny, nz)) = in_bounds_neighbor(x, y, z, dx, dy, dz, w, h, l) else {
                    continue;
                };
                let w_val = distance(features, (z, y, x), (nz, ny, nx), metric);
                frame[(d_idx * h + y) * w + x] = w_val;
            }
        }
    }
    frame
}

/// Apply a direction offset and bounds-check the result, as a single
/// `i32`-domain computation (mirrors the source's per-axis guards).
fn in_bounds_neighbor(
    x: usize,
    y: usize,
    z: usize,
    dx: i32,
    dy: i32,
    dz: i32,
    w: usize,
    h: usize,
    l: usize,
) -> Option<(usize, usize, usize)> {
    let nx = x as i32 + dx;
    let ny = y as i32 + dy;
    let nz = z as i32 + dz;
    if nx < 0 || nx >= w as i32 || ny < 0 || ny >= h as i32 || nz < 0 || nz >= l as i32 {
        return None;
    }
    Some((nx as usize, ny as usize, nz as usize))
}
