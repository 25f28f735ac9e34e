//! `FlowEdgeBuilder`: 6-connectivity edge tensor with a flow-warped
//! temporal axis (`SPEC_FULL.md` §4.3).

use ndarray::{Array4, ArrayView4};
use rayon::prelude::*;
use segvol_core::{Dims, Metric, SegError, VoxelScalar};

use crate::distance::distance;

/// Build the 6-connectivity edge tensor `E[L, 3, H, W]`, warping the
/// temporal neighbor by an optical-flow field.
///
/// `flow` has shape `[L, 2, H, W]`; `flow[z, 0, y, x]` and
/// `flow[z, 1, y, x]` are the forward flow vector `(ox, oy)` mapping a
/// pixel in frame `z-1` to frame `z` (the `z=0` entry is unused). Spatial
/// edges (`d=0,1`) are identical to [`crate::edges::build_edge_tensor`]
/// with [`segvol_core::Connectivity::Six`]; the temporal edge (`d=2`) at
/// `(x,y,z)` connects `(x,y,z+1)` to its warped source
/// `(floor(x+ox+0.5), floor(y+oy+0.5), z)`, reading `ox, oy` from
/// `flow[z+1, ..]`. If the warped coordinate falls outside the frame, the
/// edge is omitted (the slot stays zero).
pub fn build_flow_edge_tensor<T: VoxelScalar>(
    features: ArrayView4<'_, T>,
    flow: ArrayView4<'_, T>,
    metric: Metric,
) -> Result<Array4<T>, SegError> {
    let fshape = features.shape();
    if fshape.len() != 4 {
        return Err(SegError::DimensionMismatch {
            expected: "4D feature volume [L, C, H, W]".into(),
            actual: format!("{}D", fshape.len()),
        });
    }
    let dims = Dims {
        length: fshape[0],
        channels: fshape[1],
        height: fshape[2],
        width: fshape[3],
    };
    dims.validate_nonempty()?;

    let fw_shape = flow.shape();
    if fw_shape != [dims.length, 2, dims.height, dims.width] {
        return Err(SegError::DimensionMismatch {
            expected: format!(
                "flow field [{}, 2, {}, {}]",
                dims.length, dims.height, dims.width
            ),
            actual: format!("{fw_shape:?}"),
        });
    }

    let (l, h, w) = (dims.length, dims.height, dims.width);
    let frames: Vec<Vec<T>> = (0..l)
        .into_par_iter()
        .map(|z| build_flow_frame(features, flow, metric, z, l, h, w))
        .collect();

    let flat: Vec<T> = frames.into_iter().flatten().collect();
    Array4::from_shape_vec((l, 3, h, w), flat).map_err(|e| SegError::DimensionMismatch {
        expected: format!("{l}x3x{h}x{w} elements"),
        actual: e.to_string(),
    })
}

fn build_flow_frame<T: VoxelScalar>(
    features: ArrayView4<'_, T>,
    flow: ArrayView4<'_, T>,
    metric: Metric,
    z: usize,
    l: usize,
    h: usize,
    w: usize,
) -> Vec<T> {
    let mut frame = vec![T::zero(); 3 * h * w];

    for y in 0..h {
        for x in 0..w {
            // d=0: spatial x-neighbor.
            if x + 1 < w {
                frame[y * w + x] = distance(features, (z, y, x), (z, y, x + 1), metric);
            }
            // d=1: spatial y-neighbor.
            if y + 1 < h {
                frame[(h + y) * w + x] = distance(features, (z, y, x), (z, y + 1, x), metric);
            }
            // d=2: flow-warped temporal neighbor.
            if z + 1 < l {
                if let Some((fx, fy)) = warp_target(flow, z, y, x, h, w) {
                    frame[(2 * h + y) * w + x] =
                        distance(features, (z, fy, fx), (z + 1, y, x), metric);
                }
            }
        }
    }
    frame
}

/// Resolve the warped source coordinate for the temporal edge ending at
/// frame `z+1`, reading the flow vector from `flow[z+1, .., y, x]`.
fn warp_target<T: VoxelScalar>(
    flow: ArrayView4<'_, T>,
    z: usize,
    y: usize,
    x: usize,
    h: usize,
    w: usize,
) -> Option<(usize, usize)> {
    let ox = flow[[z + 1, 0, y, x]];
    let oy = flow[[z + 1, 1, y, x]];
    let half = T::from(0.5).expect("0.5 representable in VoxelScalar");
    let x_t = T::from(x).expect("voxel coordinate representable in VoxelScalar");
    let y_t = T::from(y).expect("voxel coordinate representable in VoxelScalar");
    let fx = (x_t + ox + half).floor().to_isize()?;
    let fy = (y_t + oy + half).floor().to_isize()?;
    if fx < 0 || fy < 0 || fx >= w as isize || fy >= h as isize {
        return None;
    }
    Some((fx as usize, fy as usize))
}
