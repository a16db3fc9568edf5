//! Colored universe elements.

use std::fmt;

use hashbrown::{HashMap, HashSet};

use crate::error::{Error, Result};

/// An item of a universe: its identifier and the color (group) it belongs to.
///
/// Ids are unique within a universe. Colors are only read by fairness-aware
/// consumers; the oracle layer never looks at them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Element {
    pub id: u32,
    pub color: u32,
}

impl Element {
    pub fn new(id: u32, color: u32) -> Self {
        Self { id, color }
    }
}

impl From<(u32, u32)> for Element {
    fn from((id, color): (u32, u32)) -> Self {
        Self::new(id, color)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.color)
    }
}

/// Checks that no id appears twice in `universe`.
pub(crate) fn check_distinct_ids(universe: &[Element]) -> Result<()> {
    let mut seen = HashSet::with_capacity(universe.len());
    for e in universe {
        if !seen.insert(e.id) {
            return Err(Error::DuplicateElement(e.id));
        }
    }
    Ok(())
}

/// Number of distinct colors in the universe. Colors need not be dense.
pub fn ncolors(universe: &[Element]) -> usize {
    universe.iter().map(|e| e.color).collect::<HashSet<_>>().len()
}

/// Elements per color, sorted by color. Only colors that occur are listed.
pub fn color_counts(universe: &[Element]) -> Vec<(u32, usize)> {
    let mut counts: HashMap<u32, usize> = HashMap::new();
    for e in universe {
        *counts.entry(e.color).or_insert(0) += 1;
    }
    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_unstable();
    counts
}
