//! `(a, b, w)` edge records materialized from the edge tensor.

/// One decoded edge: endpoints are voxel ids (`SPEC_FULL.md` §3 "voxel
/// identifier"), `weight` is the stored edge-tensor value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeRecord<T> {
    /// Source voxel id, `idx(z, y, x)`.
    pub a: usize,
    /// Neighbor voxel id reached by one of the topology's forward directions.
    pub b: usize,
    /// Edge weight.
    pub w: T,
}
