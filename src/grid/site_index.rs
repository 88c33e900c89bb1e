use crate::types::Site;

/// wrapper type for a linear index in to the grid, `row * size + col`.
///
/// The two indices just past the grid, `size * size` and `size * size + 1`,
/// are reserved for the virtual top and bottom sites and have no coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct SiteIndex(pub usize);

impl SiteIndex {
    /// makes a new site index from an in-bounds row and column
    pub fn new(row: u32, col: u32, size: u32) -> Self {
        Self(row as usize * size as usize + col as usize)
    }

    /// the virtual site standing for the whole top boundary
    pub fn top(size: u32) -> Self {
        Self(size as usize * size as usize)
    }

    /// the virtual site standing for the whole bottom boundary
    pub fn bottom(size: u32) -> Self {
        Self(size as usize * size as usize + 1)
    }

    /// get a usize from a SiteIndex
    pub fn as_usize(&self) -> usize {
        self.0
    }

    /// true for the reserved top and bottom indices
    pub fn is_virtual(&self, size: u32) -> bool {
        self.0 >= size as usize * size as usize
    }

    /// converts a site index back to its coordinates
    pub fn into_site(self, size: u32) -> Site {
        debug_assert!(!self.is_virtual(size));
        let width = size as usize;
        Site {
            row: (self.0 / width) as i32,
            col: (self.0 % width) as i32,
        }
    }

    /// the row this index lies on
    pub fn row(&self, size: u32) -> u32 {
        (self.0 / size as usize) as u32
    }
}
