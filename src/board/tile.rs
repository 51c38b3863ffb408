//! Tiles and their outgoing ways.
//!
//! A tile's ways reference their endpoints by arena id rather than by
//! pointer, so the board stays the sole owner of the whole graph and no
//! reference cycles exist.

use serde::{Deserialize, Serialize};

use super::heading::Heading;
use super::pos::Pos;

/// Arena index of a tile within its board.
///
/// Only meaningful for the board that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(pub(crate) u32);

impl TileId {
    /// The raw arena index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Opaque handle to a game-level entity standing on a tile.
///
/// The board never owns the entity; it only records the handle. Minting
/// and interpreting handles is the host game's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OccupantId(pub u32);

/// A directed edge to an adjacent tile.
///
/// Generators emit ways in reciprocal pairs with equal cost, but nothing
/// in the model forbids a one-way or asymmetric link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Way {
    pub heading: Heading,
    pub from: TileId,
    pub to: TileId,
    /// Traversal cost. 1 for all built-in topologies; higher values model
    /// difficult terrain.
    pub cost: u32,
}

/// A node of the board graph, fixed at its position for life.
#[derive(Debug, Clone)]
pub struct Tile {
    pos: Pos,
    occupier: Option<OccupantId>,
    ways: Vec<Way>,
}

impl Tile {
    pub(crate) fn new(pos: Pos) -> Self {
        Tile {
            pos,
            occupier: None,
            ways: Vec::new(),
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// The occupant standing here, if any. Mutation goes through the
    /// board's occupancy API.
    pub fn occupier(&self) -> Option<OccupantId> {
        self.occupier
    }

    pub(crate) fn set_occupier(&mut self, occupier: Option<OccupantId>) {
        self.occupier = occupier;
    }

    /// All outgoing ways, in the order the generator created them.
    pub fn ways(&self) -> &[Way] {
        &self.ways
    }

    pub(crate) fn push_way(&mut self, way: Way) {
        self.ways.push(way);
    }

    /// The outgoing way with the given heading, if the tile has one.
    ///
    /// Boundary tiles lack some headings; absence is the expected answer,
    /// not a failure.
    pub fn way(&self, heading: Heading) -> Option<&Way> {
        self.ways.iter().find(|w| w.heading == heading)
    }
}
