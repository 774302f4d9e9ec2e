//! Disjoint-set (union-find) over node indices, used by Kruskal's cycle check

/// Union-find with union by rank.
///
/// `find` follows parent links without compressing them, so lookups never
/// need `&mut self`. A `None` parent marks a root.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<Option<usize>>,
    rank: Vec<u32>,
}

impl DisjointSet {
    /// Create `n` singleton sets `{0}, {1}, ..., {n-1}`
    pub fn new(n: usize) -> Self {
        Self {
            parent: vec![None; n],
            rank: vec![0; n],
        }
    }

    /// Representative root of the set containing `x`
    pub fn find(&self, mut x: usize) -> usize {
        while let Some(parent) = self.parent[x] {
            x = parent;
        }
        x
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// The lower-rank root goes under the higher-rank root; on a tie `x`'s
    /// root wins and its rank grows by one. Returns `false` (and changes
    /// nothing) when both are already in the same set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let x_root = self.find(x);
        let y_root = self.find(y);

        if x_root == y_root {
            return false;
        }

        match self.rank[x_root].cmp(&self.rank[y_root]) {
            std::cmp::Ordering::Less => self.parent[x_root] = Some(y_root),
            std::cmp::Ordering::Greater => self.parent[y_root] = Some(x_root),
            std::cmp::Ordering::Equal => {
                self.parent[y_root] = Some(x_root);
                self.rank[x_root] += 1;
            }
        }

        true
    }
}
