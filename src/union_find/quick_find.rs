use super::UnionFind;

/// Every element stores its component id directly. `find` is a lookup, but
/// `union` relabels a whole component, so it is linear in the element count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickFind {
    ids: Vec<usize>,
    components: usize,
}

impl QuickFind {
    /// `count` singleton components
    pub fn new(count: usize) -> Self {
        let mut uf = Self::default();
        uf.initialize(count);
        uf
    }
}

impl UnionFind for QuickFind {
    fn initialize(&mut self, count: usize) {
        self.ids = (0..count).collect();
        self.components = count;
    }

    fn union(&mut self, a: usize, b: usize) {
        let from = self.ids[a];
        let to = self.ids[b];
        if from == to {
            return;
        }
        for id in self.ids.iter_mut().filter(|id| **id == from) {
            *id = to;
        }
        self.components -= 1;
    }

    fn find(&self, a: usize) -> usize {
        self.ids[a]
    }

    fn components(&self) -> usize {
        self.components
    }

    fn len(&self) -> usize {
        self.ids.len()
    }
}
