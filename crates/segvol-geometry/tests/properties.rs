use indexmap::IndexMap;
use ndarray::Array3;
use proptest::prelude::*;
use segvol_geometry::{segm_to_components, GeometryRecord};

fn label_volume_strategy() -> impl Strategy<Value = (usize, usize, usize, Vec<usize>)> {
    (1usize..3, 1usize..4, 1usize..4).prop_flat_map(|(l, h, w)| {
        let n = l * h * w;
        prop::collection::vec(0usize..4, n).prop_map(move |labels| (l, h, w, labels))
    })
}

proptest! {
    /// For every component, its reported `size` equals the voxel count
    /// in `Λ` carrying that label, and its centroid lies within its
    /// bounding box (`SPEC_FULL.md` §8, property 4).
    #[test]
    fn geometry_is_consistent_with_the_label_volume((l, h, w, labels) in label_volume_strategy()) {
        let volume = Array3::from_shape_vec((l, h, w), labels.clone()).unwrap();
        let components: IndexMap<usize, GeometryRecord<f64>> =
            segm_to_components(volume.view()).unwrap();

        for (&id, g) in &components {
            let actual_size = labels.iter().filter(|&&v| v == id).count();
            prop_assert_eq!(g.size, actual_size);

            prop_assert!(g.cx >= g.x_lo as f64 && g.cx <= g.x_hi as f64);
            prop_assert!(g.cy >= g.y_lo as f64 && g.cy <= g.y_hi as f64);
            prop_assert!(g.cz >= g.z_lo as f64 && g.cz <= g.z_hi as f64);

            prop_assert_eq!(g.dx, g.x_hi - g.x_lo + 1);
            prop_assert_eq!(g.dy, g.y_hi - g.y_lo + 1);
            prop_assert_eq!(g.dz, g.z_hi - g.z_lo + 1);
        }
    }
}
