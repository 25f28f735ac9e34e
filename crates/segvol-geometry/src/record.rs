//! `GeometryRecord`: the 18-field per-component geometry entry.

/// Per-component geometry, in the field order the wire contract fixes
/// (`SPEC_FULL.md` §10.9): centroid, size, class, id, bounding box,
/// extents, bounding-box center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryRecord<T> {
    /// Centroid x, 1-based.
    pub cx: T,
    /// Centroid y, 1-based.
    pub cy: T,
    /// Centroid z, 1-based.
    pub cz: T,
    /// Voxel count.
    pub size: usize,
    /// Reserved class slot; always `0` for a freshly extracted component.
    pub class: i32,
    /// Component id (the label value this record was accumulated under).
    pub id: usize,
    /// Tight bounding box, 1-based inclusive coordinates.
    pub x_lo: usize,
    /// See [`x_lo`](Self::x_lo).
    pub x_hi: usize,
    /// See [`x_lo`](Self::x_lo).
    pub y_lo: usize,
    /// See [`x_lo`](Self::x_lo).
    pub y_hi: usize,
    /// See [`x_lo`](Self::x_lo).
    pub z_lo: usize,
    /// See [`x_lo`](Self::x_lo).
    pub z_hi: usize,
    /// Bounding-box extent along x, `x_hi - x_lo + 1`.
    pub dx: usize,
    /// Bounding-box extent along y.
    pub dy: usize,
    /// Bounding-box extent along z.
    pub dz: usize,
    /// Bounding-box center along x, `(x_hi + x_lo) / 2`.
    pub bx: T,
    /// Bounding-box center along y.
    pub by: T,
    /// Bounding-box center along z.
    pub bz: T,
}
