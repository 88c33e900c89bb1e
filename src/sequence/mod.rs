//! Recorded sequences of opened sites, in a JSON friendly shape.
//!
//! ```
//! # use percolation_grid::search::BfsPercolation;
//! # use percolation_grid::sequence::OpenSequence;
//! let sequence: OpenSequence = serde_json::from_str(
//!     r#"{"size":2,"sites":[{"row":0,"col":1},{"row":1,"col":1}]}"#,
//! ).unwrap();
//! let mut grid = BfsPercolation::new(sequence.size);
//! assert_eq!(sequence.opens_until_percolation(&mut grid), Ok(Some(2)));
//! ```
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{OutOfBounds, Percolator, RandomOpenableGrid, Site};

/// A grid size plus the sites opened on it, in order
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OpenSequence {
    /// side length of the grid the sequence was recorded on
    pub size: u32,
    /// sites in the order they were opened. May repeat, and may name sites
    /// outside the grid; replaying those fails with [`OutOfBounds`].
    pub sites: Vec<Site>,
}

impl OpenSequence {
    /// an empty sequence for a `size`×`size` grid
    pub fn new(size: u32) -> Self {
        OpenSequence {
            size,
            sites: vec![],
        }
    }

    #[allow(missing_docs)]
    pub fn push(&mut self, row: i32, col: i32) {
        self.sites.push(Site { row, col });
    }

    /// Open every site on `grid` in order, stopping at the first site that is
    /// out of bounds. Sites before it stay open.
    pub fn replay<P: Percolator + ?Sized>(&self, grid: &mut P) -> Result<(), OutOfBounds> {
        for site in self.sites.iter() {
            grid.open(site.row, site.col)?;
        }
        Ok(())
    }

    /// Replay until `grid` percolates and report how many opens that took,
    /// counting repeats. `None` if it never percolates. A grid that already
    /// percolates reports `Some(0)`.
    pub fn opens_until_percolation<P: Percolator + ?Sized>(
        &self,
        grid: &mut P,
    ) -> Result<Option<usize>, OutOfBounds> {
        if grid.percolates() {
            return Ok(Some(0));
        }
        for (i, site) in self.sites.iter().enumerate() {
            grid.open(site.row, site.col)?;
            if grid.percolates() {
                return Ok(Some(i + 1));
            }
        }
        Ok(None)
    }

    /// Open uniformly random blocked sites on `grid` until it percolates,
    /// recording each one. Stops early only if every site is open.
    pub fn record_until_percolation<P: RandomOpenableGrid, R: Rng + ?Sized>(
        grid: &mut P,
        rng: &mut R,
    ) -> Self {
        let mut sequence = OpenSequence::new(grid.size());
        while !grid.percolates() {
            match grid.open_random(rng) {
                Some(site) => sequence.sites.push(site),
                None => break,
            }
        }
        debug!(
            size = sequence.size,
            opened = sequence.sites.len(),
            "recorded sequence"
        );
        sequence
    }
}
