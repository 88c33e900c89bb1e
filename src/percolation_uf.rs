//! Percolation maintained incrementally with a disjoint-set structure.
//!
//! Each site is an element of a [`UnionFind`], with two extra virtual elements
//! standing for the top and bottom boundaries. Opening a site unions it with
//! its open neighbours and, on a boundary row, with the matching virtual site;
//! the grid percolates once the two virtual sites share a component.
//!
//! A single structure holding both virtual sites cannot answer fullness on its
//! own. Once the grid percolates, every site joined to the bottom boundary is
//! also joined to the top one through the bottom virtual site, including sites
//! with no open path to the top ("backwash"). Fullness is therefore read from a
//! second structure that only ever sees the top virtual site.
use tracing::{debug, trace};

use crate::grid::{Grid, SiteIndex};
use crate::types::{
    FullQueryableGrid, OpenCountableGrid, OpenQueryableGrid, OpenableGrid, OutOfBounds,
    PercolationDeterminableGrid, SizeDeterminableGrid,
};
use crate::union_find::UnionFind;

/// Percolation backed by an injected [`UnionFind`] implementation
#[derive(Debug, Clone)]
pub struct UnionFindPercolation<U: UnionFind> {
    grid: Grid<bool>,
    // n*n + 2 elements: every site plus the top and bottom virtual sites
    finder: U,
    // n*n + 1 elements: every site plus the top virtual site only
    top_finder: U,
    top: SiteIndex,
    bottom: SiteIndex,
}

impl<U: UnionFind + Clone> UnionFindPercolation<U> {
    /// A `size`×`size` grid with every site blocked.
    ///
    /// `finder` is re-initialized to hold `size * size + 2` elements, and a
    /// clone of it, sized `size * size + 1`, tracks connectivity to the top.
    pub fn new(size: u32, mut finder: U) -> Self {
        let sites = size as usize * size as usize;
        finder.initialize(sites + 2);
        let mut top_finder = finder.clone();
        top_finder.initialize(sites + 1);

        UnionFindPercolation {
            grid: Grid::new(size),
            finder,
            top_finder,
            top: SiteIndex::top(size),
            bottom: SiteIndex::bottom(size),
        }
    }
}

impl<U: UnionFind + Clone + Default> UnionFindPercolation<U> {
    /// A `size`×`size` grid over a default-constructed `U`
    pub fn with_size(size: u32) -> Self {
        Self::new(size, U::default())
    }
}

impl<U: UnionFind> UnionFindPercolation<U> {
    /// the connectivity structure holding both virtual sites
    pub fn finder(&self) -> &U {
        &self.finder
    }

    fn union(&mut self, a: SiteIndex, b: SiteIndex) {
        self.finder.union(a.as_usize(), b.as_usize());
        if b != self.bottom {
            self.top_finder.union(a.as_usize(), b.as_usize());
        }
    }
}

impl<U: UnionFind> SizeDeterminableGrid for UnionFindPercolation<U> {
    fn size(&self) -> u32 {
        self.grid.size()
    }
}

impl<U: UnionFind> OpenableGrid for UnionFindPercolation<U> {
    fn open(&mut self, row: i32, col: i32) -> Result<(), OutOfBounds> {
        let idx = self.grid.index_of(row, col)?;
        if !self.grid.open(idx) {
            return Ok(());
        }
        trace!(row, col, open_sites = self.grid.open_count(), "opened site");

        let percolated = self.percolates();
        let neighbors = self.grid.open_neighbors(idx).collect::<Vec<_>>();
        for neighbor in neighbors {
            self.union(idx, neighbor);
        }
        if self.grid.is_top_row(idx) {
            self.union(idx, self.top);
        }
        if self.grid.is_bottom_row(idx) {
            self.union(idx, self.bottom);
        }

        if !percolated && self.percolates() {
            debug!(open_sites = self.grid.open_count(), "grid percolates");
        }
        Ok(())
    }
}

impl<U: UnionFind> OpenQueryableGrid for UnionFindPercolation<U> {
    fn is_open(&self, row: i32, col: i32) -> Result<bool, OutOfBounds> {
        let idx = self.grid.index_of(row, col)?;
        Ok(self.grid.is_open(idx))
    }
}

impl<U: UnionFind> FullQueryableGrid for UnionFindPercolation<U> {
    fn is_full(&self, row: i32, col: i32) -> Result<bool, OutOfBounds> {
        let idx = self.grid.index_of(row, col)?;
        Ok(self.grid.is_open(idx)
            && self
                .top_finder
                .connected(idx.as_usize(), self.top.as_usize()))
    }
}

impl<U: UnionFind> PercolationDeterminableGrid for UnionFindPercolation<U> {
    fn percolates(&self) -> bool {
        self.finder
            .connected(self.top.as_usize(), self.bottom.as_usize())
    }
}

impl<U: UnionFind> OpenCountableGrid for UnionFindPercolation<U> {
    fn number_of_open_sites(&self) -> usize {
        self.grid.open_count()
    }
}
