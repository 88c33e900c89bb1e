#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Types for modelling [site percolation](https://en.wikipedia.org/wiki/Percolation_theory)
//! on an N×N grid.
//!
//! Every site starts blocked. Opening sites and tracking which open sites are
//! connected to the top row answers the question of whether the grid
//! "percolates", i.e. whether a chain of open, 4-neighbour adjacent sites joins
//! the top row to the bottom row.
//!
//! Two interchangeable cores implement the [`types::Percolator`] contract:
//!
//! * [`search::SearchPercolation`] stores a tri-state grid and flood-fills
//!   "full" status out from the top row. It is generic over a
//!   [`search::Frontier`], so [`search::DfsPercolation`] and
//!   [`search::BfsPercolation`] share one driver.
//! * [`percolation_uf::UnionFindPercolation`] keeps an injected
//!   [`union_find::UnionFind`] up to date as sites open, with two virtual sites
//!   standing in for the top and bottom boundaries.
//!
//! ```
//! use percolation_grid::percolation_uf::UnionFindPercolation;
//! use percolation_grid::types::{
//!     FullQueryableGrid, OpenableGrid, PercolationDeterminableGrid,
//! };
//! use percolation_grid::union_find::CompressedQuickUnion;
//!
//! let mut grid = UnionFindPercolation::<CompressedQuickUnion>::with_size(3);
//! for row in 0..3 {
//!     grid.open(row, 1).unwrap();
//! }
//! assert!(grid.percolates());
//! assert!(grid.is_full(2, 1).unwrap());
//! assert!(grid.open(3, 1).is_err());
//! ```

use sequence::OpenSequence;

pub mod grid;
pub mod percolation_uf;
pub mod search;
pub mod sequence;
pub mod types;
pub mod union_find;

/// Loads an open sequence fixture from a given string
pub fn sequence_fixture(sequence_fixture: &str) -> OpenSequence {
    let s: Result<OpenSequence, _> = serde_json::from_str(sequence_fixture);
    s.expect("the json literal is valid")
}
