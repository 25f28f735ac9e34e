//! Randomly colorized debug render of a label volume (`SPEC_FULL.md` §10.7).

use ndarray::{Array3, Array4};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// Assign each distinct label in `labels` an independent random RGB color
/// and expand the label volume into an `[L, 3, H, W]` byte tensor.
///
/// `None` draws from OS entropy (`rand::thread_rng()`); `Some(seed)` uses
/// a seeded `ChaCha8Rng` so tests and debug tooling can reproduce a render.
/// This is a debug convenience, not part of `segment_mst`'s algorithmic
/// contract, so it is its own function rather than a flag threaded
/// through the merge loop.
pub fn colorize_labels(labels: &Array3<usize>, seed: Option<u64>) -> Array4<u8> {
    let (l, h, w) = labels.dim();
    let mut colors: HashMap<usize, [u8; 3]> = HashMap::new();
    let mut out = Array4::<u8>::zeros((l, 3, h, w));

    match seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            fill(labels, &mut out, &mut colors, &mut rng);
        }
        None => {
            let mut rng = rand::thread_rng();
            fill(labels, &mut out, &mut colors, &mut rng);
        }
    }
    out
}

fn fill<R: Rng>(
    labels: &Array3<usize>,
    out: &mut Array4<u8>,
    colors: &mut HashMap<usize, [u8; 3]>,
    rng: &mut R,
) {
    let (l, h, w) = labels.dim();
    for z in 0..l {
        for y in 0..h {
            for x in 0..w {
                let label = labels[[z, y, x]];
                let color = *colors
                    .entry(label)
                    .or_insert_with(|| [rng.gen(), rng.gen(), rng.gen()]);
                for (c, value) in color.iter().enumerate() {
                    out[[z, c, y, x]] = *value;
                }
            }
        }
    }
}
