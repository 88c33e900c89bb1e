//! The N×N site grid shared by every percolation core.
//!
//! A [`Grid`] owns one cell per site plus the running open-site count, and is
//! the only place bounds are checked. Cores choose what a cell stores through
//! [`SiteCell`]: the union-find core keeps a plain `bool`, the search core a
//! tri-state [`SiteState`](crate::search::SiteState).
mod site_index;

use std::fmt::Debug;

use crate::types::{Direction, OutOfBounds};

pub use site_index::SiteIndex;

/// Per-site state stored by a [`Grid`]
pub trait SiteCell: Debug + Copy + Clone + PartialEq + Eq + Default + 'static {
    /// has this site been opened?
    fn is_open(&self) -> bool;
    /// the state a blocked site moves to when it is opened
    fn opened() -> Self;
}

impl SiteCell for bool {
    fn is_open(&self) -> bool {
        *self
    }

    fn opened() -> Self {
        true
    }
}

fn in_bounds(size: u32, row: i32, col: i32) -> bool {
    row >= 0 && col >= 0 && (row as u32) < size && (col as u32) < size
}

/// A square grid of sites, all blocked at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<C: SiteCell> {
    size: u32,
    cells: Vec<C>,
    open_count: usize,
}

impl<C: SiteCell> Grid<C> {
    /// allocate a `size`×`size` grid of blocked sites
    pub fn new(size: u32) -> Self {
        let n = size as usize;
        Grid {
            size,
            cells: vec![C::default(); n * n],
            open_count: 0,
        }
    }

    /// the side length of this grid
    pub fn size(&self) -> u32 {
        self.size
    }

    /// number of real sites, excluding any virtual ones
    pub fn site_count(&self) -> usize {
        self.cells.len()
    }

    /// the number of sites that have transitioned from blocked to open
    pub fn open_count(&self) -> usize {
        self.open_count
    }

    #[allow(missing_docs)]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        in_bounds(self.size, row, col)
    }

    /// Resolve coordinates to an index, or report them as out of bounds
    pub fn index_of(&self, row: i32, col: i32) -> Result<SiteIndex, OutOfBounds> {
        if self.in_bounds(row, col) {
            Ok(SiteIndex::new(row as u32, col as u32, self.size))
        } else {
            Err(OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    #[allow(missing_docs)]
    pub fn get(&self, idx: SiteIndex) -> C {
        self.cells[idx.as_usize()]
    }

    #[allow(missing_docs)]
    pub fn set(&mut self, idx: SiteIndex, cell: C) {
        self.cells[idx.as_usize()] = cell;
    }

    #[allow(missing_docs)]
    pub fn is_open(&self, idx: SiteIndex) -> bool {
        self.get(idx).is_open()
    }

    /// Open a site. Returns false, and changes nothing, if it was already open.
    pub fn open(&mut self, idx: SiteIndex) -> bool {
        if self.is_open(idx) {
            return false;
        }
        self.set(idx, C::opened());
        self.open_count += 1;
        true
    }

    /// The in-bounds sites sharing an edge with `idx`. The iterator holds no
    /// borrow of the grid, so cells can be updated while walking it.
    pub fn neighbors(&self, idx: SiteIndex) -> impl Iterator<Item = SiteIndex> {
        let size = self.size;
        let site = idx.into_site(size);
        let directions: &'static [Direction] = &Direction::ALL;
        directions
            .iter()
            .map(move |d| site.step(*d))
            .filter(move |s| in_bounds(size, s.row, s.col))
            .map(move |s| SiteIndex::new(s.row as u32, s.col as u32, size))
    }

    /// the neighbours of `idx` that are already open
    pub fn open_neighbors(&self, idx: SiteIndex) -> impl Iterator<Item = SiteIndex> + '_ {
        self.neighbors(idx).filter(move |n| self.is_open(*n))
    }

    #[allow(missing_docs)]
    pub fn is_top_row(&self, idx: SiteIndex) -> bool {
        idx.row(self.size) == 0
    }

    #[allow(missing_docs)]
    pub fn is_bottom_row(&self, idx: SiteIndex) -> bool {
        idx.row(self.size) + 1 == self.size
    }

    /// indices of row 0, left to right
    pub fn top_row(&self) -> impl Iterator<Item = SiteIndex> {
        let size = self.size;
        (0..size).map(move |col| SiteIndex::new(0, col, size))
    }

    /// indices of the last row, left to right; empty for a zero sized grid
    pub fn bottom_row(&self) -> impl Iterator<Item = SiteIndex> {
        let size = self.size;
        let last = size.saturating_sub(1);
        (0..size).map(move |col| SiteIndex::new(last, col, size))
    }
}
