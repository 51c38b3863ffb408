//! The board graph: sole owner of every tile and way.
//!
//! Tiles live in an arena indexed by `TileId`, with a position index on
//! top. After generation the graph is structurally immutable; occupancy
//! is the only field that changes during play.

use std::collections::HashMap;

use thiserror::Error;

use super::heading::Heading;
use super::pos::Pos;
use super::tile::{OccupantId, Tile, TileId, Way};

/// Structural violations raised while assembling a board.
///
/// These indicate a generator bug, never a gameplay condition. Lookups
/// that can legitimately miss return `Option` instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("two tiles share position {0}")]
    DuplicateTile(Pos),

    #[error("tile {at} already has a way headed {heading}")]
    DuplicateWay { at: Pos, heading: Heading },

    #[error("no tile at {0}")]
    UnknownTile(Pos),

    #[error("heading {0} is not in this board's catalogue")]
    ForeignHeading(Heading),
}

/// The complete tile graph for one topology instance.
#[derive(Debug, Clone)]
pub struct Board {
    width: i32,
    height: i32,
    catalogue: &'static [Heading],
    tiles: Vec<Tile>,
    index: HashMap<Pos, TileId>,
}

impl Board {
    /// Creates an empty board with the given direction catalogue.
    ///
    /// Non-positive dimensions are promoted to 1: invalid input is
    /// corrected, not rejected.
    pub fn new(width: i32, height: i32, catalogue: &'static [Heading]) -> Self {
        Board {
            width: width.max(1),
            height: height.max(1),
            catalogue,
            tiles: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Logical width of the board's extent.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Logical height of the board's extent.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The direction labels valid for this board's topology.
    pub fn headings(&self) -> &'static [Heading] {
        self.catalogue
    }

    /// Number of tiles on the board.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Total number of ways across all tiles.
    pub fn way_count(&self) -> usize {
        self.tiles.iter().map(|t| t.ways().len()).sum()
    }

    /// Adds a tile at `pos`, failing loudly if the position is taken.
    pub fn insert_tile(&mut self, pos: Pos) -> Result<TileId, BoardError> {
        if self.index.contains_key(&pos) {
            return Err(BoardError::DuplicateTile(pos));
        }
        let id = TileId(self.tiles.len() as u32);
        self.tiles.push(Tile::new(pos));
        self.index.insert(pos, id);
        Ok(id)
    }

    /// Adds a directed way between two existing tiles.
    ///
    /// The heading must come from the board's catalogue, both endpoints
    /// must exist, and `from` must not already have a way with this
    /// heading. No reciprocal way is created; callers wanting two-way
    /// links connect both directions themselves.
    pub fn connect(
        &mut self,
        from: Pos,
        heading: Heading,
        to: Pos,
        cost: u32,
    ) -> Result<(), BoardError> {
        if !self.catalogue.contains(&heading) {
            return Err(BoardError::ForeignHeading(heading));
        }
        let from_id = self.id_at(from).ok_or(BoardError::UnknownTile(from))?;
        let to_id = self.id_at(to).ok_or(BoardError::UnknownTile(to))?;
        if self.tiles[from_id.index()].way(heading).is_some() {
            return Err(BoardError::DuplicateWay { at: from, heading });
        }
        self.tiles[from_id.index()].push_way(Way {
            heading,
            from: from_id,
            to: to_id,
            cost,
        });
        Ok(())
    }

    /// The id of the tile at `pos`, if one exists there.
    pub fn id_at(&self, pos: Pos) -> Option<TileId> {
        self.index.get(&pos).copied()
    }

    /// The tile at `pos`, if one exists there. Out-of-range positions
    /// are an expected miss, not an error.
    pub fn tile_at(&self, pos: Pos) -> Option<&Tile> {
        self.id_at(pos).map(|id| &self.tiles[id.index()])
    }

    /// The tile with the given id. Ids come from this board, so the
    /// lookup is infallible.
    pub fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id.index()]
    }

    /// Iterates all tiles in arena order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Follows the way with the given heading, if the tile has one.
    pub fn neighbor(&self, id: TileId, heading: Heading) -> Option<TileId> {
        self.tiles[id.index()].way(heading).map(|w| w.to)
    }

    /// Places an occupant on the tile at `pos`.
    ///
    /// Returns false when the position has no tile or the tile is taken:
    /// at most one occupant stands on a tile, and that policy lives in
    /// this API rather than in `Tile`.
    pub fn place_occupant(&mut self, pos: Pos, occupant: OccupantId) -> bool {
        let Some(id) = self.id_at(pos) else {
            return false;
        };
        let tile = &mut self.tiles[id.index()];
        if tile.occupier().is_some() {
            return false;
        }
        tile.set_occupier(Some(occupant));
        true
    }

    /// Removes and returns the occupant at `pos`, if any.
    pub fn clear_occupant(&mut self, pos: Pos) -> Option<OccupantId> {
        let id = self.id_at(pos)?;
        let tile = &mut self.tiles[id.index()];
        let evicted = tile.occupier();
        tile.set_occupier(None);
        evicted
    }

    /// The occupant standing at `pos`, if any.
    pub fn occupant_at(&self, pos: Pos) -> Option<OccupantId> {
        self.tile_at(pos).and_then(|t| t.occupier())
    }

    /// The tile an occupant stands on. Linear scan, the same discipline
    /// as `Tile::way`.
    pub fn occupant_tile(&self, occupant: OccupantId) -> Option<TileId> {
        self.tiles
            .iter()
            .position(|t| t.occupier() == Some(occupant))
            .map(|i| TileId(i as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOGUE: &[Heading] = &[Heading::N, Heading::S, Heading::E, Heading::W];

    fn two_tile_board() -> Board {
        let mut board = Board::new(2, 1, CATALOGUE);
        board.insert_tile(Pos::new(0, 0)).unwrap();
        board.insert_tile(Pos::new(1, 0)).unwrap();
        board
    }

    #[test]
    fn dimensions_are_clamped_to_one() {
        let board = Board::new(0, -3, CATALOGUE);
        assert_eq!(board.width(), 1);
        assert_eq!(board.height(), 1);
    }

    #[test]
    fn duplicate_tile_is_rejected() {
        let mut board = two_tile_board();
        assert_eq!(
            board.insert_tile(Pos::new(0, 0)),
            Err(BoardError::DuplicateTile(Pos::new(0, 0)))
        );
    }

    #[test]
    fn connect_links_one_direction_only() {
        let mut board = two_tile_board();
        board
            .connect(Pos::new(0, 0), Heading::E, Pos::new(1, 0), 1)
            .unwrap();

        let from = board.tile_at(Pos::new(0, 0)).unwrap();
        assert!(from.way(Heading::E).is_some());
        let to = board.tile_at(Pos::new(1, 0)).unwrap();
        assert!(to.way(Heading::W).is_none());
    }

    #[test]
    fn connect_rejects_duplicate_heading() {
        let mut board = two_tile_board();
        board
            .connect(Pos::new(0, 0), Heading::E, Pos::new(1, 0), 1)
            .unwrap();
        assert_eq!(
            board.connect(Pos::new(0, 0), Heading::E, Pos::new(1, 0), 2),
            Err(BoardError::DuplicateWay {
                at: Pos::new(0, 0),
                heading: Heading::E,
            })
        );
    }

    #[test]
    fn connect_rejects_missing_endpoint() {
        let mut board = two_tile_board();
        assert_eq!(
            board.connect(Pos::new(0, 0), Heading::N, Pos::new(0, 1), 1),
            Err(BoardError::UnknownTile(Pos::new(0, 1)))
        );
    }

    #[test]
    fn connect_rejects_foreign_heading() {
        let mut board = two_tile_board();
        assert_eq!(
            board.connect(Pos::new(0, 0), Heading::NE, Pos::new(1, 0), 1),
            Err(BoardError::ForeignHeading(Heading::NE))
        );
    }

    #[test]
    fn tile_at_misses_outside_the_board() {
        let board = two_tile_board();
        assert!(board.tile_at(Pos::new(5, 5)).is_none());
        assert!(board.id_at(Pos::new(-1, 0)).is_none());
    }

    #[test]
    fn occupancy_is_exclusive() {
        let mut board = two_tile_board();
        let pos = Pos::new(0, 0);
        assert!(board.place_occupant(pos, OccupantId(7)));
        assert!(!board.place_occupant(pos, OccupantId(8)));
        assert_eq!(board.occupant_at(pos), Some(OccupantId(7)));
    }

    #[test]
    fn place_occupant_misses_off_board() {
        let mut board = two_tile_board();
        assert!(!board.place_occupant(Pos::new(9, 9), OccupantId(1)));
    }

    #[test]
    fn clear_occupant_returns_the_evicted_handle() {
        let mut board = two_tile_board();
        let pos = Pos::new(1, 0);
        board.place_occupant(pos, OccupantId(3));
        assert_eq!(board.clear_occupant(pos), Some(OccupantId(3)));
        assert_eq!(board.clear_occupant(pos), None);
        assert!(board.occupant_at(pos).is_none());
    }

    #[test]
    fn occupant_tile_finds_the_handle() {
        let mut board = two_tile_board();
        board.place_occupant(Pos::new(1, 0), OccupantId(42));
        let id = board.occupant_tile(OccupantId(42)).unwrap();
        assert_eq!(board.tile(id).pos(), Pos::new(1, 0));
        assert!(board.occupant_tile(OccupantId(99)).is_none());
    }
}
