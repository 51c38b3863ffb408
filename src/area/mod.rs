//! Deterministic set algebra over coordinate offsets.
//!
//! An area is a reusable pattern: a set of offsets describing a movement
//! range or skill footprint independent of any board. Translated around
//! an anchor it becomes absolute positions, which the board then filters
//! down to tiles that actually exist.

pub mod catalog;

use std::collections::BTreeSet;

use crate::board::Pos;

/// A set of positions used as a reusable pattern.
///
/// Membership is set-like (no duplicates, order-independent) but
/// enumeration is always sorted ascending by `(x, y)`, so every consumer
/// sees the same tile order on every run. All combinators return new
/// areas; a shared catalogue pattern can never be mutated through them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Area {
    poses: BTreeSet<Pos>,
}

impl Area {
    /// Builds an area from the given offsets. Duplicates collapse.
    pub fn new<I>(offsets: I) -> Area
    where
        I: IntoIterator<Item = Pos>,
    {
        Area {
            poses: offsets.into_iter().collect(),
        }
    }

    /// Returns a copy with the given offsets added.
    ///
    /// Idempotent: adding a member the area already holds changes
    /// nothing. `&Area` iterates, so whole patterns compose directly:
    /// `axis.add(&axis2)`.
    pub fn add<I>(&self, offsets: I) -> Area
    where
        I: IntoIterator<Item = Pos>,
    {
        let mut poses = self.poses.clone();
        poses.extend(offsets);
        Area { poses }
    }

    /// Returns a copy with the given offsets removed.
    ///
    /// Removing an absent offset is a no-op. Note that `add` then `sub`
    /// of the same offsets does not restore the original area when they
    /// overlapped it; that is expected set behavior, not a defect.
    pub fn sub<I>(&self, offsets: I) -> Area
    where
        I: IntoIterator<Item = Pos>,
    {
        let mut poses = self.poses.clone();
        for pos in offsets {
            poses.remove(&pos);
        }
        Area { poses }
    }

    /// All member positions, sorted ascending by `(x, y)`.
    pub fn poses(&self) -> Vec<Pos> {
        self.poses.iter().copied().collect()
    }

    /// Iterates members in the same sorted order as `poses`.
    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.poses.iter().copied()
    }

    /// Maps this pattern onto absolute coordinates around an anchor.
    pub fn translated_around(&self, anchor: Pos) -> Area {
        Area {
            poses: self.poses.iter().map(|p| *p + anchor).collect(),
        }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.poses.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}

impl FromIterator<Pos> for Area {
    fn from_iter<I: IntoIterator<Item = Pos>>(iter: I) -> Area {
        Area::new(iter)
    }
}

impl<'a> IntoIterator for &'a Area {
    type Item = Pos;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, Pos>>;

    fn into_iter(self) -> Self::IntoIter {
        self.poses.iter().copied()
    }
}
