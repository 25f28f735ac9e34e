//! Single-pass accumulation and finalization (`SPEC_FULL.md` §4.5).

use indexmap::IndexMap;
use ndarray::{ArrayView2, ArrayView3};
use segvol_core::{Dims, SegError, VoxelScalar};

use crate::record::GeometryRecord;

struct Accumulator<T> {
    sum_x: T,
    sum_y: T,
    sum_z: T,
    size: usize,
    x_lo: usize,
    x_hi: usize,
    y_lo: usize,
    y_hi: usize,
    z_lo: usize,
    z_hi: usize,
}

impl<T: VoxelScalar> Accumulator<T> {
    fn new(x1: usize, y1: usize, z1: usize) -> Self {
        Self {
            sum_x: T::zero(),
            sum_y: T::zero(),
            sum_z: T::zero(),
            size: 0,
            x_lo: x1,
            x_hi: x1,
            y_lo: y1,
            y_hi: y1,
            z_lo: z1,
            z_hi: z1,
        }
    }

    fn accumulate(&mut self, x1: usize, y1: usize, z1: usize) {
        self.sum_x = self.sum_x + T::from(x1).expect("1-based coordinate fits in T");
        self.sum_y = self.sum_y + T::from(y1).expect("1-based coordinate fits in T");
        self.sum_z = self.sum_z + T::from(z1).expect("1-based coordinate fits in T");
        self.size += 1;
        self.x_lo = self.x_lo.min(x1);
        self.x_hi = self.x_hi.max(x1);
        self.y_lo = self.y_lo.min(y1);
        self.y_hi = self.y_hi.max(y1);
        self.z_lo = self.z_lo.min(z1);
        self.z_hi = self.z_hi.max(z1);
    }

    /// `y_divisor` is `2` everywhere except the 2D legacy entry point,
    /// which preserves a known bug of dividing the y-box-center by `1`
    /// (`SPEC_FULL.md` §9, §10.9).
    fn finalize(self, id: usize, y_divisor: T) -> GeometryRecord<T> {
        let size_t = T::from(self.size).expect("component size fits in T");
        let two = T::from(2usize).expect("two fits in T");
        let dx = self.x_hi - self.x_lo + 1;
        let dy = self.y_hi - self.y_lo + 1;
        let dz = self.z_hi - self.z_lo + 1;
        let sum_xhi_xlo = T::from(self.x_hi + self.x_lo).expect("bounding sum fits in T");
        let sum_yhi_ylo = T::from(self.y_hi + self.y_lo).expect("bounding sum fits in T");
        let sum_zhi_zlo = T::from(self.z_hi + self.z_lo).expect("bounding sum fits in T");
        GeometryRecord {
            cx: self.sum_x / size_t,
            cy: self.sum_y / size_t,
            cz: self.sum_z / size_t,
            size: self.size,
            class: 0,
            id,
            x_lo: self.x_lo,
            x_hi: self.x_hi,
            y_lo: self.y_lo,
            y_hi: self.y_hi,
            z_lo: self.z_lo,
            z_hi: self.z_hi,
            dx,
            dy,
            dz,
            bx: sum_xhi_xlo / two,
            by: sum_yhi_ylo / y_divisor,
            bz: sum_zhi_zlo / two,
        }
    }
}

/// Extract per-component geometry from a 3D label volume.
///
/// Single pass: for each `(z,y,x)` accumulate the 1-based coordinates
/// into the owning component's running sums, then finalize every
/// component's centroid and bounding box.
pub fn segm_to_components<T: VoxelScalar>(
    labels: ArrayView3<'_, usize>,
) -> Result<IndexMap<usize, GeometryRecord<T>>, SegError> {
    let shape = labels.shape();
    let dims = Dims {
        length: shape[0],
        channels: 1,
        height: shape[1],
        width: shape[2],
    };
    dims.validate_nonempty()?;

    let mut accumulators: IndexMap<usize, Accumulator<T>> = IndexMap::new();
    for z in 0..dims.length {
        for y in 0..dims.height {
            for x in 0..dims.width {
                let label = labels[[z, y, x]];
                let (x1, y1, z1) = (x + 1, y + 1, z + 1);
                accumulators
                    .entry(label)
                    .or_insert_with(|| Accumulator::new(x1, y1, z1))
                    .accumulate(x1, y1, z1);
            }
        }
    }

    let two = T::from(2usize).expect("two fits in T");
    Ok(accumulators
        .into_iter()
        .map(|(id, acc)| (id, acc.finalize(id, two)))
        .collect())
}

/// 2D legacy entry point (`SPEC_FULL.md` §9, §10.9): preserved
/// bug-for-bug with the divide-by-one y-box-center. `z_lo`, `z_hi`,
/// `dz`, `cz`, and `bz` are all pinned to the single implicit frame.
pub fn segm_to_components_2d_legacy<T: VoxelScalar>(
    labels: ArrayView2<'_, usize>,
) -> Result<IndexMap<usize, GeometryRecord<T>>, SegError> {
    let shape = labels.shape();
    let dims = Dims {
        length: 1,
        channels: 1,
        height: shape[0],
        width: shape[1],
    };
    dims.validate_nonempty()?;

    let mut accumulators: IndexMap<usize, Accumulator<T>> = IndexMap::new();
    for y in 0..dims.height {
        for x in 0..dims.width {
            let label = labels[[y, x]];
            let (x1, y1, z1) = (x + 1, y + 1, 1);
            accumulators
                .entry(label)
                .or_insert_with(|| Accumulator::new(x1, y1, z1))
                .accumulate(x1, y1, z1);
        }
    }

    let one = T::from(1usize).expect("one fits in T");
    Ok(accumulators
        .into_iter()
        .map(|(id, acc)| (id, acc.finalize(id, one)))
        .collect())
}
