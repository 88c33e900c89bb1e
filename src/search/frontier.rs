use std::collections::VecDeque;
use std::fmt::Debug;

use crate::grid::SiteIndex;

/// The set of discovered-but-unexpanded sites a flood fill works through.
///
/// The fill driver only ever adds candidates and takes the next one; the order
/// in which `take` hands them back is what separates a depth-first fill from a
/// breadth-first one.
pub trait Frontier: Debug + Default {
    /// push a newly discovered site
    fn add(&mut self, site: SiteIndex);

    /// pop the next site to expand, or `None` once the fill is exhausted
    fn take(&mut self) -> Option<SiteIndex>;

    #[allow(missing_docs)]
    fn len(&self) -> usize;

    #[allow(missing_docs)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// last in, first out: depth-first fills
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LifoFrontier {
    stack: Vec<SiteIndex>,
}

impl Frontier for LifoFrontier {
    fn add(&mut self, site: SiteIndex) {
        self.stack.push(site);
    }

    fn take(&mut self) -> Option<SiteIndex> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// first in, first out: breadth-first fills
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FifoFrontier {
    queue: VecDeque<SiteIndex>,
}

impl Frontier for FifoFrontier {
    fn add(&mut self, site: SiteIndex) {
        self.queue.push_back(site);
    }

    fn take(&mut self) -> Option<SiteIndex> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
