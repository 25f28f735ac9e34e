//! The `DisjointSet` forest (`SPEC_FULL.md` §4.7).

/// Array-backed union-find over `N` voxel slots.
///
/// Every slot starts as its own singleton root with `surface = 1`. `find`
/// applies path halving so repeated lookups flatten the tree toward
/// inverse-Ackermann amortized cost; `union` merges two **already
/// canonical** roots by size, folding the smaller tree under the larger
/// one so the forest stays shallow.
///
/// `union`'s contract is deliberately narrow (`SPEC_FULL.md` §4.7): callers
/// must pass the results of their own `find` calls, never arbitrary voxel
/// ids. This matches the single call site in `MSTSegmenter`'s merge loop,
/// which always resolves roots immediately before merging.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    /// `parent[v] == v` iff `v` is currently a root.
    parent: Vec<usize>,
    /// Meaningful only at roots: the number of voxels in that component.
    /// The name is historical (`SPEC_FULL.md` glossary, "Surface").
    surface: Vec<usize>,
}

impl DisjointSet {
    /// Create `n` singleton components, each with `surface == 1`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            surface: vec![1; n],
        }
    }

    /// Total number of slots this forest was built over.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// `true` if this forest has no slots.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Resolve `v` to its canonical root, halving the path as it walks up.
    ///
    /// Path halving makes every other node on the search path point to
    /// its grandparent, which is cheaper than full compression (no second
    /// pass) while giving the same amortized complexity bound.
    pub fn find(&mut self, v: usize) -> usize {
        let mut cur = v;
        while self.parent[cur] != cur {
            let grandparent = self.parent[self.parent[cur]];
            self.parent[cur] = grandparent;
            cur = grandparent;
        }
        cur
    }

    /// Merge two **canonical roots**, returning the surviving root.
    ///
    /// The smaller tree (by `surface`) is grafted onto the larger one;
    /// the surviving root's `surface` becomes the sum of both. Ties graft
    /// `r2` onto `r1`.
    ///
    /// # Panics
    ///
    /// Debug builds assert that both arguments are currently roots — the
    /// narrow contract callers must uphold.
    pub fn union(&mut self, r1: usize, r2: usize) -> usize {
        debug_assert_eq!(self.parent[r1], r1, "union() requires a canonical root");
        debug_assert_eq!(self.parent[r2], r2, "union() requires a canonical root");
        if r1 == r2 {
            return r1;
        }
        let (big, small) = if self.surface[r1] >= self.surface[r2] {
            (r1, r2)
        } else {
            (r2, r1)
        };
        self.parent[small] = big;
        self.surface[big] += self.surface[small];
        big
    }

    /// Resolve `v` to its canonical root without mutating the forest.
    ///
    /// Safe to call concurrently from multiple threads on a shared `&self`
    /// (e.g. during the final label-emission scan, `SPEC_FULL.md` §5): it
    /// only chases parent pointers, it never compresses the path. Prefer
    /// [`find`](Self::find) when you hold `&mut self` and will call it
    /// more than once, since it keeps the forest shallow for later calls.
    pub fn find_readonly(&self, v: usize) -> usize {
        let mut cur = v;
        while self.parent[cur] != cur {
            cur = self.parent[cur];
        }
        cur
    }

    /// The voxel count of the component rooted at `root`.
    ///
    /// Meaningful only when `root` is currently canonical; the idiomatic
    /// way to obtain a fresh root is `find()` immediately before calling
    /// this.
    pub fn surface(&self, root: usize) -> usize {
        self.surface[root]
    }

    /// Number of distinct components currently in the forest.
    pub fn count_roots(&self) -> usize {
        (0..self.parent.len())
            .filter(|&v| self.parent[v] == v)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_set_has_n_singleton_roots() {
        let ds = DisjointSet::new(5);
        assert_eq!(ds.count_roots(), 5);
        assert_eq!(ds.len(), 5);
    }

    #[test]
    fn find_is_idempotent() {
        let mut ds = DisjointSet::new(4);
        let r01 = {
            let a = ds.find(0);
            let b = ds.find(1);
            ds.union(a, b)
        };
        for v in 0..4 {
            let root = ds.find(v);
            assert_eq!(ds.find(root), root);
        }
        assert_eq!(ds.find(0), r01);
        assert_eq!(ds.find(1), r01);
    }

    #[test]
    fn union_merges_surfaces() {
        let mut ds = DisjointSet::new(4);
        let a = ds.find(0);
        let b = ds.find(1);
        let root = ds.union(a, b);
        assert_eq!(ds.surface(root), 2);
        assert_eq!(ds.count_roots(), 3);

        let c = ds.find(root);
        let d = ds.find(2);
        let root2 = ds.union(c, d);
        assert_eq!(ds.surface(root2), 3);
        assert_eq!(ds.count_roots(), 2);
    }

    #[test]
    fn union_by_size_grafts_smaller_onto_larger() {
        let mut ds = DisjointSet::new(5);
        // Build a component of size 3 rooted wherever union lands it.
        let r01 = ds.union(ds.find(0), ds.find(1));
        let big = ds.union(ds.find(r01), ds.find(2));
        // Merge the size-3 component with a singleton; the singleton
        // must be grafted onto `big`, not the other way around.
        let merged = ds.union(ds.find(big), ds.find(3));
        assert_eq!(merged, big);
        assert_eq!(ds.surface(merged), 4);
    }

    #[test]
    fn unrelated_voxels_have_distinct_roots() {
        let mut ds = DisjointSet::new(3);
        assert_ne!(ds.find(0), ds.find(1));
        assert_ne!(ds.find(1), ds.find(2));
    }

    #[test]
    fn find_readonly_agrees_with_find_after_unions() {
        let mut ds = DisjointSet::new(6);
        let a = ds.find(0);
        let b = ds.find(1);
        let r = ds.union(a, b);
        let c = ds.find(r);
        let d = ds.find(2);
        ds.union(c, d);
        for v in 0..6 {
            assert_eq!(ds.find_readonly(v), ds.find(v));
        }
    }

    #[test]
    fn count_roots_decreases_by_one_per_union() {
        let mut ds = DisjointSet::new(10);
        assert_eq!(ds.count_roots(), 10);
        for i in 0..9 {
            let a = ds.find(i);
            let b = ds.find(i + 1);
            if a != b {
                ds.union(a, b);
            }
        }
        assert_eq!(ds.count_roots(), 1);
    }
}
