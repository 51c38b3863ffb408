//! Integer 2D coordinates.
//!
//! `Pos` is the atomic unit of every position and offset in the crate.
//! The derived `Ord` compares `x` before `y`, which is exactly the
//! lexicographic order the area algebra promises its consumers, so a
//! sorted collection of positions needs no custom comparator.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// An ordered pair of integers locating a tile on a board.
///
/// Equality is by value and `Pos` is usable as a map key. Arithmetic is
/// component-wise and unbounded; staying inside a board is the board's
/// concern, not the coordinate's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

/// An offset between positions.
///
/// Same shape as `Pos` but semantically never board-anchored: a `Dir` is
/// what you add to a position, not a place on the board.
pub type Dir = Pos;

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Pos { x, y }
    }

    /// Manhattan distance to another position.
    pub fn manhattan(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The unit-or-zero step that moves this position one cell further
    /// from `from`, computed per axis.
    ///
    /// `Pos::new(3, 1).step_away(Pos::new(1, 1))` is `(1, 0)`; a position
    /// asked to step away from itself yields `(0, 0)`.
    pub fn step_away(self, from: Pos) -> Dir {
        Dir::new((self.x - from.x).signum(), (self.y - from.y).signum())
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        Pos::new(self.x + dir.x, self.y + dir.y)
    }
}

impl AddAssign<Dir> for Pos {
    fn add_assign(&mut self, dir: Dir) {
        self.x += dir.x;
        self.y += dir.y;
    }
}

impl Sub for Pos {
    type Output = Dir;

    fn sub(self, other: Pos) -> Dir {
        Dir::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
