//! traits and structs for disjoint-set (union-find) connectivity
//!
//! [`UnionFindPercolation`](crate::percolation_uf::UnionFindPercolation) only
//! talks to the [`UnionFind`] trait, so any of the implementations here (or a
//! caller's own) can be dropped in without touching the percolation logic.
mod quick_find;
mod quick_union;

use std::fmt::Debug;

pub use quick_find::QuickFind;
pub use quick_union::{CompressedQuickUnion, WeightedQuickUnion};

/// A partition of the elements `0..count` into disjoint components.
///
/// Element ids past the `count` given to [`initialize`](UnionFind::initialize)
/// are a programmer error and panic, like slice indexing.
pub trait UnionFind: Debug {
    /// Reset to `count` singleton components, discarding any earlier unions
    fn initialize(&mut self, count: usize);

    /// merge the components containing `a` and `b`
    fn union(&mut self, a: usize, b: usize);

    /// an id for the component containing `a`, equal for all of its members
    fn find(&self, a: usize) -> usize;

    /// are `a` and `b` in the same component?
    fn connected(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// the number of disjoint components
    fn components(&self) -> usize;

    /// the number of elements
    fn len(&self) -> usize;

    #[allow(missing_docs)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn implementations() -> Vec<Box<dyn UnionFind>> {
        let quick_find: Box<dyn UnionFind> = Box::new(QuickFind::default());
        let weighted: Box<dyn UnionFind> = Box::new(WeightedQuickUnion::default());
        let compressed: Box<dyn UnionFind> = Box::new(CompressedQuickUnion::default());
        vec![quick_find, weighted, compressed]
    }

    #[test]
    fn test_starts_as_singletons() {
        for mut uf in implementations() {
            assert!(uf.is_empty());
            uf.initialize(5);
            assert_eq!(uf.len(), 5);
            assert_eq!(uf.components(), 5);
            for a in 0..5 {
                for b in 0..5 {
                    assert_eq!(uf.connected(a, b), a == b, "{:?}", uf);
                }
            }
        }
    }

    #[test]
    fn test_union_is_transitive() {
        for mut uf in implementations() {
            uf.initialize(6);
            uf.union(0, 1);
            uf.union(2, 3);
            assert!(!uf.connected(0, 3), "{:?}", uf);
            uf.union(1, 2);
            assert!(uf.connected(0, 3), "{:?}", uf);
            assert!(uf.connected(3, 0), "{:?}", uf);
            assert!(!uf.connected(0, 4), "{:?}", uf);
            assert_eq!(uf.find(0), uf.find(3));
            assert_eq!(uf.components(), 3, "{:?}", uf);
        }
    }

    #[test]
    fn test_repeated_union_does_not_change_components() {
        for mut uf in implementations() {
            uf.initialize(4);
            uf.union(0, 1);
            uf.union(1, 0);
            uf.union(0, 0);
            assert_eq!(uf.components(), 3, "{:?}", uf);
        }
    }

    #[test]
    fn test_initialize_resets() {
        for mut uf in implementations() {
            uf.initialize(3);
            uf.union(0, 2);
            uf.initialize(4);
            assert_eq!(uf.components(), 4);
            assert!(!uf.connected(0, 2), "{:?}", uf);
        }
    }

    #[test]
    fn test_long_chain() {
        for mut uf in implementations() {
            uf.initialize(64);
            for a in 1..64 {
                uf.union(a - 1, a);
            }
            assert_eq!(uf.components(), 1);
            assert!(uf.connected(0, 63), "{:?}", uf);
        }
    }
}
