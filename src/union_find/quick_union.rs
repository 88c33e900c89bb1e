use std::cell::Cell;

use super::UnionFind;

/// A forest of parent links, always hanging the smaller tree under the root
/// of the larger one so no tree grows deeper than log2(n).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedQuickUnion {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl WeightedQuickUnion {
    /// `count` singleton components
    pub fn new(count: usize) -> Self {
        let mut uf = Self::default();
        uf.initialize(count);
        uf
    }
}

impl UnionFind for WeightedQuickUnion {
    fn initialize(&mut self, count: usize) {
        self.parent = (0..count).collect();
        self.size = vec![1; count];
        self.components = count;
    }

    fn union(&mut self, a: usize, b: usize) {
        let mut a = self.find(a);
        let mut b = self.find(b);
        if a == b {
            return;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        self.components -= 1;
    }

    fn find(&self, a: usize) -> usize {
        let mut root = a;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        root
    }

    fn components(&self) -> usize {
        self.components
    }

    fn len(&self) -> usize {
        self.parent.len()
    }
}

/// [`WeightedQuickUnion`] plus path compression: every `find` repoints the
/// nodes it walked straight at the root.
///
/// Parent links live in [`Cell`]s so that compression can happen behind the
/// shared borrow that [`UnionFind::find`] and [`UnionFind::connected`] take.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompressedQuickUnion {
    parent: Vec<Cell<usize>>,
    size: Vec<usize>,
    components: usize,
}

impl CompressedQuickUnion {
    /// `count` singleton components
    pub fn new(count: usize) -> Self {
        let mut uf = Self::default();
        uf.initialize(count);
        uf
    }
}

impl UnionFind for CompressedQuickUnion {
    fn initialize(&mut self, count: usize) {
        self.parent = (0..count).map(Cell::new).collect();
        self.size = vec![1; count];
        self.components = count;
    }

    fn union(&mut self, a: usize, b: usize) {
        let mut a = self.find(a);
        let mut b = self.find(b);
        if a == b {
            return;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b].set(a);
        self.size[a] += self.size[b];
        self.components -= 1;
    }

    fn find(&self, a: usize) -> usize {
        let mut root = a;
        while self.parent[root].get() != root {
            root = self.parent[root].get();
        }

        let mut node = a;
        while node != root {
            let next = self.parent[node].replace(root);
            node = next;
        }

        root
    }

    fn components(&self) -> usize {
        self.components
    }

    fn len(&self) -> usize {
        self.parent.len()
    }
}
