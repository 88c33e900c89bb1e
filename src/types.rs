//! various types that are useful for working with percolation grids
use itertools::iproduct;
use rand::seq::IteratorRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{self, Debug};

/// A (row, col) coordinate on a grid. Row 0 is the top boundary.
///
/// Coordinates are signed so that callers can name sites off the edge of the
/// grid and get an [`OutOfBounds`] back instead of a wrapped index.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    /// row, counted down from the top boundary
    pub row: i32,
    /// column, counted right from the left edge
    pub col: i32,
}

impl Site {
    /// the site one step away in `direction`, which may be out of bounds
    pub fn step(&self, direction: Direction) -> Site {
        let (d_row, d_col) = direction.to_offset();
        Site {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One of the four directions in which two sites count as adjacent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[allow(missing_docs)]
    Up,
    #[allow(missing_docs)]
    Down,
    #[allow(missing_docs)]
    Left,
    #[allow(missing_docs)]
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

impl Direction {
    /// all four directions, no diagonals
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// convert this direction to a (row, col) offset. Up moves towards row 0.
    pub fn to_offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Raised when a row or column falls outside `[0, size)`.
///
/// This is the only error any grid operation produces, and it is always
/// returned before anything is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfBounds {
    /// the requested row
    pub row: i32,
    /// the requested column
    pub col: i32,
    /// the side length of the grid that rejected the request
    pub size: u32,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{}) not in bounds for a {}x{} grid",
            self.row, self.col, self.size, self.size
        )
    }
}

impl Error for OutOfBounds {}

/// a grid for which the side length can be determined
pub trait SizeDeterminableGrid {
    /// the side length N of this N×N grid
    fn size(&self) -> u32;
}

/// A grid whose sites can be opened
pub trait OpenableGrid {
    /// Open the site at (row, col). Opening a site that is already open is a no-op.
    fn open(&mut self, row: i32, col: i32) -> Result<(), OutOfBounds>;
}

/// A grid which can be asked whether a site has been opened
pub trait OpenQueryableGrid {
    /// has this site ever been opened?
    fn is_open(&self, row: i32, col: i32) -> Result<bool, OutOfBounds>;
}

/// A grid which can be asked whether a site is full
pub trait FullQueryableGrid {
    /// Is this site open and reachable from the top row through open sites only?
    fn is_full(&self, row: i32, col: i32) -> Result<bool, OutOfBounds>;
}

/// A grid for which percolation can be determined
pub trait PercolationDeterminableGrid {
    /// does an open path join the top row to the bottom row?
    fn percolates(&self) -> bool;
}

/// A grid that counts its open sites
pub trait OpenCountableGrid {
    /// the number of distinct sites that have been opened
    fn number_of_open_sites(&self) -> usize;
}

/// The full percolation contract. Anything implementing all of the capability
/// traits gets this for free, so cores can be swapped behind `P: Percolator`
/// or `Box<dyn Percolator>`.
pub trait Percolator:
    SizeDeterminableGrid
    + OpenableGrid
    + OpenQueryableGrid
    + FullQueryableGrid
    + PercolationDeterminableGrid
    + OpenCountableGrid
    + Debug
{
}

impl<T> Percolator for T where
    T: SizeDeterminableGrid
        + OpenableGrid
        + OpenQueryableGrid
        + FullQueryableGrid
        + PercolationDeterminableGrid
        + OpenCountableGrid
        + Debug
{
}

/// a grid on which a uniformly random blocked site can be opened
pub trait RandomOpenableGrid: Percolator {
    /// Open one blocked site chosen uniformly at random and return it.
    /// Returns `None` once every site is open.
    fn open_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Site>;
}

impl<T: Percolator> RandomOpenableGrid for T {
    fn open_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Site> {
        let size = self.size() as i32;
        let (row, col) = iproduct!(0..size, 0..size)
            .filter(|&(row, col)| matches!(self.is_open(row, col), Ok(false)))
            .choose(rng)?;
        self.open(row, col).ok()?;
        Some(Site { row, col })
    }
}
