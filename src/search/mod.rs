//! Flood-fill percolation.
//!
//! [`SearchPercolation`] stores a tri-state grid and marks sites
//! [`SiteState::Full`] by walking open sites outward from the top row. One
//! driver serves both traversal orders; the [`Frontier`] type parameter decides
//! whether discovered sites are expanded newest-first ([`DfsPercolation`]) or
//! oldest-first ([`BfsPercolation`]). Both orders reach exactly the same set of
//! sites.
mod frontier;

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::grid::{Grid, SiteCell, SiteIndex};
use crate::types::{
    FullQueryableGrid, OpenCountableGrid, OpenQueryableGrid, OpenableGrid, OutOfBounds,
    PercolationDeterminableGrid, SizeDeterminableGrid,
};

pub use frontier::{FifoFrontier, Frontier, LifoFrontier};

/// Per-site state. Sites only ever move forward: blocked, then open, then full.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteState {
    /// not yet opened
    Blocked,
    /// opened, with no proven path to the top row
    Open,
    /// opened and reached by a fill from the top row
    Full,
}

impl Default for SiteState {
    fn default() -> Self {
        SiteState::Blocked
    }
}

impl SiteCell for SiteState {
    fn is_open(&self) -> bool {
        *self != SiteState::Blocked
    }

    fn opened() -> Self {
        SiteState::Open
    }
}

/// When a [`SearchPercolation`] runs its fill after a site opens
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillPolicy {
    /// Fill outward from the new site only, and only when it sits on the top
    /// row or next to a site that is already full. Each site is filled at most
    /// once over the life of the grid.
    Incremental,
    /// Re-walk everything reachable from the top row on every open. Costs a
    /// full traversal per open.
    Rescan,
}

impl Default for FillPolicy {
    fn default() -> Self {
        FillPolicy::Incremental
    }
}

/// Percolation computed by flood fill, generic over the fill order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPercolation<F: Frontier> {
    grid: Grid<SiteState>,
    policy: FillPolicy,
    frontier: PhantomData<F>,
}

/// depth-first flood fill
pub type DfsPercolation = SearchPercolation<LifoFrontier>;

/// breadth-first flood fill
pub type BfsPercolation = SearchPercolation<FifoFrontier>;

impl<F: Frontier> SearchPercolation<F> {
    /// A `size`×`size` grid with every site blocked, filling incrementally
    pub fn new(size: u32) -> Self {
        Self::with_policy(size, FillPolicy::default())
    }

    #[allow(missing_docs)]
    pub fn with_policy(size: u32, policy: FillPolicy) -> Self {
        SearchPercolation {
            grid: Grid::new(size),
            policy,
            frontier: PhantomData,
        }
    }

    #[allow(missing_docs)]
    pub fn policy(&self) -> FillPolicy {
        self.policy
    }

    /// the stored state of a single site
    pub fn state(&self, row: i32, col: i32) -> Result<SiteState, OutOfBounds> {
        let idx = self.grid.index_of(row, col)?;
        Ok(self.grid.get(idx))
    }

    /// Walk everything reachable from the open sites of the top row, visiting
    /// each reachable site exactly once, and mark it full. Returns how many
    /// sites were newly marked full; sites already full stay full.
    #[instrument(level = "trace", skip_all)]
    pub fn refill(&mut self) -> usize {
        let mut visited = vec![false; self.grid.site_count()];
        let mut frontier = F::default();
        let mut filled = 0;

        let seeds = self
            .grid
            .top_row()
            .filter(|idx| self.grid.is_open(*idx))
            .collect::<Vec<_>>();
        for idx in seeds.iter().copied() {
            visited[idx.as_usize()] = true;
            filled += self.mark_full(idx);
            frontier.add(idx);
        }

        while let Some(idx) = frontier.take() {
            for next in self.grid.neighbors(idx) {
                if !visited[next.as_usize()] && self.grid.is_open(next) {
                    visited[next.as_usize()] = true;
                    filled += self.mark_full(next);
                    frontier.add(next);
                }
            }
        }

        debug!(seeds = seeds.len(), filled, "rescanned from top row");
        filled
    }

    fn mark_full(&mut self, idx: SiteIndex) -> usize {
        if self.grid.get(idx) == SiteState::Full {
            0
        } else {
            self.grid.set(idx, SiteState::Full);
            1
        }
    }

    fn touches_full(&self, idx: SiteIndex) -> bool {
        self.grid
            .neighbors(idx)
            .any(|n| self.grid.get(n) == SiteState::Full)
    }

    /// Fill outward from a newly opened site. Open, not-yet-full neighbours are
    /// marked full as they are discovered, so nothing enters the frontier twice.
    #[instrument(level = "trace", skip_all)]
    fn fill_from(&mut self, seed: SiteIndex) -> usize {
        let mut frontier = F::default();
        self.grid.set(seed, SiteState::Full);
        frontier.add(seed);
        let mut filled = 1;

        while let Some(idx) = frontier.take() {
            for next in self.grid.neighbors(idx) {
                if self.grid.get(next) == SiteState::Open {
                    self.grid.set(next, SiteState::Full);
                    frontier.add(next);
                    filled += 1;
                }
            }
        }

        debug!(seed = seed.as_usize(), filled, "filled from opened site");
        filled
    }

    fn fill_after_open(&mut self, idx: SiteIndex) {
        match self.policy {
            FillPolicy::Incremental => {
                if self.grid.is_top_row(idx) || self.touches_full(idx) {
                    self.fill_from(idx);
                }
            }
            FillPolicy::Rescan => {
                self.refill();
            }
        }
    }
}

impl<F: Frontier> SizeDeterminableGrid for SearchPercolation<F> {
    fn size(&self) -> u32 {
        self.grid.size()
    }
}

impl<F: Frontier> OpenableGrid for SearchPercolation<F> {
    fn open(&mut self, row: i32, col: i32) -> Result<(), OutOfBounds> {
        let idx = self.grid.index_of(row, col)?;
        if !self.grid.open(idx) {
            return Ok(());
        }
        trace!(row, col, open_sites = self.grid.open_count(), "opened site");

        let percolated = self.percolates();
        self.fill_after_open(idx);
        if !percolated && self.percolates() {
            debug!(
                open_sites = self.grid.open_count(),
                "grid percolates"
            );
        }
        Ok(())
    }
}

impl<F: Frontier> OpenQueryableGrid for SearchPercolation<F> {
    fn is_open(&self, row: i32, col: i32) -> Result<bool, OutOfBounds> {
        Ok(self.state(row, col)?.is_open())
    }
}

impl<F: Frontier> FullQueryableGrid for SearchPercolation<F> {
    fn is_full(&self, row: i32, col: i32) -> Result<bool, OutOfBounds> {
        Ok(self.state(row, col)? == SiteState::Full)
    }
}

impl<F: Frontier> PercolationDeterminableGrid for SearchPercolation<F> {
    fn percolates(&self) -> bool {
        self.grid
            .bottom_row()
            .any(|idx| self.grid.get(idx) == SiteState::Full)
    }
}

impl<F: Frontier> OpenCountableGrid for SearchPercolation<F> {
    fn number_of_open_sites(&self) -> usize {
        self.grid.open_count()
    }
}

#[cfg(test)]
mod tests {
    use itertools::iproduct;

    use super::*;
    use crate::sequence_fixture;

    fn states<F: Frontier>(p: &SearchPercolation<F>) -> Vec<SiteState> {
        let size = p.size() as i32;
        iproduct!(0..size, 0..size)
            .map(|(row, col)| p.state(row, col).unwrap())
            .collect()
    }

    #[test]
    fn test_site_states_move_forward() {
        let mut p = DfsPercolation::new(3);
        assert_eq!(p.state(1, 0).unwrap(), SiteState::Blocked);
        p.open(1, 0).unwrap();
        assert_eq!(p.state(1, 0).unwrap(), SiteState::Open);
        p.open(0, 0).unwrap();
        assert_eq!(p.state(0, 0).unwrap(), SiteState::Full);
        assert_eq!(p.state(1, 0).unwrap(), SiteState::Full);
        p.open(1, 0).unwrap();
        assert_eq!(p.state(1, 0).unwrap(), SiteState::Full);
    }

    #[test]
    fn test_fill_reaches_region_opened_before_its_link() {
        // the winding region below row 0 is opened first, then joined to the top
        let mut p = BfsPercolation::new(4);
        for (row, col) in [(1, 1), (2, 1), (2, 2), (2, 3), (3, 3)] {
            p.open(row, col).unwrap();
        }
        assert!(!p.percolates());
        assert!(!p.is_full(3, 3).unwrap());
        p.open(0, 1).unwrap();
        assert!(p.percolates());
        for (row, col) in [(0, 1), (1, 1), (2, 1), (2, 2), (2, 3), (3, 3)] {
            assert!(p.is_full(row, col).unwrap(), "{:?}", (row, col));
        }
    }

    #[test]
    fn test_diagonals_do_not_connect() {
        let mut p = DfsPercolation::new(2);
        p.open(0, 0).unwrap();
        p.open(1, 1).unwrap();
        assert!(!p.percolates());
        assert!(!p.is_full(1, 1).unwrap());
    }

    #[test]
    fn test_dfs_and_bfs_fill_the_same_sites() {
        let sequence = sequence_fixture(include_str!("../../fixtures/serpentine_7x7.json"));
        let mut dfs = DfsPercolation::new(sequence.size);
        let mut bfs = BfsPercolation::new(sequence.size);
        for site in sequence.sites.iter() {
            dfs.open(site.row, site.col).unwrap();
            bfs.open(site.row, site.col).unwrap();
            assert_eq!(states(&dfs), states(&bfs));
        }
        assert!(dfs.percolates());
    }

    #[test]
    fn test_policies_agree() {
        let sequence = sequence_fixture(include_str!("../../fixtures/serpentine_7x7.json"));
        let mut incremental = DfsPercolation::new(sequence.size);
        let mut rescan = DfsPercolation::with_policy(sequence.size, FillPolicy::Rescan);
        assert_eq!(rescan.policy(), FillPolicy::Rescan);
        for site in sequence.sites.iter() {
            incremental.open(site.row, site.col).unwrap();
            rescan.open(site.row, site.col).unwrap();
            assert_eq!(states(&incremental), states(&rescan));
        }
    }

    #[test]
    fn test_refill_is_a_no_op_on_a_consistent_grid() {
        let mut p = BfsPercolation::new(3);
        for row in 0..3 {
            p.open(row, 1).unwrap();
        }
        p.open(2, 0).unwrap();
        let before = states(&p);
        assert_eq!(p.refill(), 0);
        assert_eq!(states(&p), before);
    }

    #[test]
    fn test_refill_on_empty_grid() {
        let mut p = DfsPercolation::new(0);
        assert_eq!(p.refill(), 0);
        assert!(!p.percolates());
    }

    #[test]
    fn test_state_out_of_bounds() {
        let p = BfsPercolation::new(2);
        assert_eq!(
            p.state(0, 2),
            Err(OutOfBounds {
                row: 0,
                col: 2,
                size: 2
            })
        );
    }
}
