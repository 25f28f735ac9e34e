//! Step 1 of `MSTSegmenter`: decode the edge tensor into `(a, b, w)` records.

use ndarray::ArrayView4;
use segvol_core::{voxel_index, Connectivity, Dims, SegError, VoxelScalar};

use crate::edge_record::EdgeRecord;

/// Traverse every voxel in row-major order and decode its stored forward
/// edges into `EdgeRecord`s, recovering the topology from `D` (the edge
/// tensor's second axis length) rather than being told it out of band.
///
/// No record is emitted for a boundary cell whose direction guard fails;
/// the corresponding tensor slot is a zero placeholder, not a real edge.
pub fn materialize_edges<T: VoxelScalar>(
    edges: ArrayView4<'_, T>,
) -> Result<Vec<EdgeRecord<T>>, SegError> {
    let shape = edges.shape();
    if shape.len() != 4 {
        return Err(SegError::DimensionMismatch {
            expected: "4D edge tensor [L, D, H, W]".into(),
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
    let connectivity = Connectivity::try_from(dims.channels)?;
    let directions = connectivity.directions();
    let (l, h, w) = (dims.length, dims.height, dims.width);

    let mut records = Vec::with_capacity(l * h * w * directions.len());
    for z in 0..l {
        for y in 0..h {
            for x in 0..w {
                let a = voxel_index(z, y, x, h, w);
                for (d_idx, &(dx, dy, dz)) in directions.iter().enumerate() {
                    let Some((nx, ny, nz)) = forward_neighbor(x, y, z, dx, dy, dz, w, h, l) else {
                        continue;
                    };
                    let weight = edges[[z, d_idx, y, x]];
                    let b = voxel_index(nz, ny, nx, h, w);
                    records.push(EdgeRecord { a, b, w: weight });
                }
            }
        }
    }
    Ok(records)
}

fn forward_neighbor(
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

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array4;

    #[test]
    fn decodes_six_connectivity_edges() {
        // L=1,D=3,H=2,W=2: only the x and y directions can land in-bounds.
        let mut e = Array4::<f64>::zeros((1, 3, 2, 2));
        e[[0, 0, 0, 0]] = 1.0; // +x from (0,0,0)
        e[[0, 1, 0, 0]] = 2.0; // +y from (0,0,0)
        let records = materialize_edges(e.view()).unwrap();
        assert!(records.iter().any(|r| r.a == 0 && r.b == 1 && r.w == 1.0));
        assert!(records.iter().any(|r| r.a == 0 && r.b == 2 && r.w == 2.0));
    }

    #[test]
    fn omits_boundary_edges() {
        let e = Array4::<f64>::zeros((1, 3, 1, 1));
        let records = materialize_edges(e.view()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn rejects_unknown_direction_axis_length() {
        let e = Array4::<f64>::zeros((1, 7, 2, 2));
        let err = materialize_edges(e.view()).unwrap_err();
        assert!(matches!(err, SegError::DimensionMismatch { .. }));
    }
}
