//! `adjacency`: component neighbor-set extraction (`SPEC_FULL.md` §4.6).

use indexmap::{IndexMap, IndexSet};
use ndarray::{ArrayView2, ArrayView3};
use segvol_core::SegError;

const DIRECTIONS_3D: [(i32, i32, i32); 3] = [(1, 0, 0), (0, 1, 0), (0, 0, 1)];
const DIRECTIONS_2D: [(i32, i32); 2] = [(1, 0), (0, 1)];

fn link(map: &mut IndexMap<usize, IndexSet<usize>>, a: usize, b: usize) {
    if a == b {
        return;
    }
    map.entry(a).or_default().insert(b);
    map.entry(b).or_default().insert(a);
}

/// Build the component adjacency graph of a 3D label volume under
/// 6-connectivity: for every voxel's 3 forward neighbors, if the labels
/// differ, link them both ways.
pub fn adjacency(labels: ArrayView3<'_, usize>) -> Result<IndexMap<usize, IndexSet<usize>>, SegError> {
    let (l, h, w) = labels.dim();
    if l == 0 || h == 0 || w == 0 {
        return Err(SegError::DimensionMismatch {
            expected: "non-empty 3D label volume".into(),
            actual: format!("{l}x{h}x{w}"),
        });
    }

    let mut map = IndexMap::new();
    for z in 0..l {
        for y in 0..h {
            for x in 0..w {
                let label = labels[[z, y, x]];
                for &(dx, dy, dz) in &DIRECTIONS_3D {
                    let (nx, ny, nz) = (x as i32 + dx, y as i32 + dy, z as i32 + dz);
                    if nx < 0 || nx >= w as i32 || ny < 0 || ny >= h as i32 || nz < 0 || nz >= l as i32 {
                        continue;
                    }
                    let neighbor = labels[[nz as usize, ny as usize, nx as usize]];
                    link(&mut map, label, neighbor);
                }
            }
        }
    }
    Ok(map)
}

/// Build the component adjacency graph of a 2D label image under
/// 4-connectivity.
pub fn adjacency_2d(labels: ArrayView2<'_, usize>) -> Result<IndexMap<usize, IndexSet<usize>>, SegError> {
    let (h, w) = labels.dim();
    if h == 0 || w == 0 {
        return Err(SegError::DimensionMismatch {
            expected: "non-empty 2D label image".into(),
            actual: format!("{h}x{w}"),
        });
    }

    let mut map = IndexMap::new();
    for y in 0..h {
        for x in 0..w {
            let label = labels[[y, x]];
            for &(dx, dy) in &DIRECTIONS_2D {
                let (nx, ny) = (x as i32 + dx, y as i32 + dy);
                if nx < 0 || nx >= w as i32 || ny < 0 || ny >= h as i32 {
                    continue;
                }
                let neighbor = labels[[ny as usize, nx as usize]];
                link(&mut map, label, neighbor);
            }
        }
    }
    Ok(map)
}
