//! Skill targeting: which tiles a game action touches.
//!
//! The division of labor is strict. An `Area` answers "what shape", the
//! board answers "what exists at those coordinates", and a `Skill` only
//! ever deals with concrete, already-resolved tiles. Combat consequences
//! are expressed as declarative `Effect` records; applying them (stats,
//! damage formulas, death) belongs to the host game.

pub mod arsenal;

use serde::{Deserialize, Serialize};

use crate::area::Area;
use crate::board::{Board, Dir, Pos, TileId};

/// A game action polymorphic over the four targeting capabilities.
pub trait Skill {
    /// The anchor tile targeting is computed from.
    ///
    /// Commonly the caster's own tile regardless of the cursor, but the
    /// signature allows cursor-relative origins. `None` when the anchor
    /// cannot be resolved (a caster no longer on the board); absence,
    /// not an error.
    fn origin(&self, board: &Board, cursor: TileId) -> Option<TileId>;

    /// The offset pattern the player may pick a target within.
    fn selectable_area(&self) -> Area;

    /// The pattern actually affected once the offset `selected` is
    /// chosen. May differ from a single cell; splash patterns return
    /// several offsets.
    fn cast_area(&self, selected: Pos) -> Area;

    /// Produces the effects of casting on already-resolved tiles.
    ///
    /// Implementations must not re-derive tiles; the pipeline hands them
    /// the final, bounds-checked list.
    fn cast(&self, board: &Board, tiles: &[TileId]) -> Vec<Effect>;
}

/// A declarative consequence of a cast, for the combat layer to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// A direct hit on the occupant of `at`.
    Strike { at: Pos },
    /// Push the occupant of `at` one step along `toward`.
    Shove { at: Pos, toward: Dir },
}

/// Tiles the player may currently select, in area enumeration order.
///
/// Empty when the skill's origin cannot be resolved. Cells of the
/// pattern that fall outside the board are dropped silently.
pub fn selectable_tiles(board: &Board, skill: &dyn Skill, cursor: TileId) -> Vec<TileId> {
    let Some(origin) = skill.origin(board, cursor) else {
        return Vec::new();
    };
    collect(board, &skill.selectable_area(), board.tile(origin).pos())
}

/// Resolves the tiles a cast at the offset `selected` would affect.
///
/// Empty when the origin is gone or `selected` is not in the skill's
/// selectable area. Otherwise the cast pattern is translated around the
/// origin and intersected with the board, in area enumeration order.
pub fn resolve_cast(
    board: &Board,
    skill: &dyn Skill,
    cursor: TileId,
    selected: Pos,
) -> Vec<TileId> {
    let Some(origin) = skill.origin(board, cursor) else {
        return Vec::new();
    };
    if !skill.selectable_area().contains(selected) {
        return Vec::new();
    }
    collect(board, &skill.cast_area(selected), board.tile(origin).pos())
}

/// Resolves targets and casts in one step.
pub fn perform(board: &Board, skill: &dyn Skill, cursor: TileId, selected: Pos) -> Vec<Effect> {
    let tiles = resolve_cast(board, skill, cursor, selected);
    skill.cast(board, &tiles)
}

fn collect(board: &Board, area: &Area, anchor: Pos) -> Vec<TileId> {
    area.translated_around(anchor)
        .iter()
        .filter_map(|pos| board.id_at(pos))
        .collect()
}
