use ndarray::Array3;
use proptest::prelude::*;
use segvol_adjacency::adjacency;

fn label_volume_strategy() -> impl Strategy<Value = (usize, usize, usize, Vec<usize>)> {
    (1usize..3, 1usize..4, 1usize..4).prop_flat_map(|(l, h, w)| {
        let n = l * h * w;
        prop::collection::vec(0usize..4, n).prop_map(move |labels| (l, h, w, labels))
    })
}

proptest! {
    /// The adjacency map is symmetric and has no self-loops
    /// (`SPEC_FULL.md` §8, property 3).
    #[test]
    fn adjacency_is_symmetric_and_loop_free((l, h, w, labels) in label_volume_strategy()) {
        let volume = Array3::from_shape_vec((l, h, w), labels).unwrap();
        let map = adjacency(volume.view()).unwrap();

        for (&a, neighbors) in &map {
            for &b in neighbors {
                prop_assert_ne!(a, b);
                prop_assert!(map[&b].contains(&a), "missing reverse edge for ({}, {})", a, b);
            }
        }
    }
}
