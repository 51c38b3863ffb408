//! Stock skills and class rosters.
//!
//! Every skill here supplies geometry plus declarative effects. None of
//! them touch hit points or stats; a host game maps `Effect` records to
//! its own combat rules.

use std::collections::HashMap;

use crate::area::catalog::{AROUND, AXIS, AXIS2};
use crate::area::Area;
use crate::board::{Board, OccupantId, Pos, TileId};

use super::{Effect, Skill};

/// Emits a strike for every resolved tile occupied by someone other
/// than the caster.
fn strikes(board: &Board, caster: OccupantId, tiles: &[TileId]) -> Vec<Effect> {
    tiles
        .iter()
        .map(|id| board.tile(*id))
        .filter(|tile| tile.occupier().is_some_and(|o| o != caster))
        .map(|tile| Effect::Strike { at: tile.pos() })
        .collect()
}

/// Single-cell melee hit on an adjacent tile.
pub struct SwordAttack {
    pub caster: OccupantId,
}

impl Skill for SwordAttack {
    fn origin(&self, board: &Board, _cursor: TileId) -> Option<TileId> {
        board.occupant_tile(self.caster)
    }

    fn selectable_area(&self) -> Area {
        AXIS.clone()
    }

    fn cast_area(&self, selected: Pos) -> Area {
        Area::new([selected])
    }

    fn cast(&self, board: &Board, tiles: &[TileId]) -> Vec<Effect> {
        strikes(board, self.caster, tiles)
    }
}

/// Like the sword, but also reaches the cardinals at range 2.
pub struct SpearAttack {
    pub caster: OccupantId,
}

impl Skill for SpearAttack {
    fn origin(&self, board: &Board, _cursor: TileId) -> Option<TileId> {
        board.occupant_tile(self.caster)
    }

    fn selectable_area(&self) -> Area {
        AXIS.add(&*AXIS2)
    }

    fn cast_area(&self, selected: Pos) -> Area {
        Area::new([selected])
    }

    fn cast(&self, board: &Board, tiles: &[TileId]) -> Vec<Effect> {
        strikes(board, self.caster, tiles)
    }
}

/// Pushes an adjacent occupant one step away from the caster.
pub struct Knockback {
    pub caster: OccupantId,
}

impl Skill for Knockback {
    fn origin(&self, board: &Board, _cursor: TileId) -> Option<TileId> {
        board.occupant_tile(self.caster)
    }

    fn selectable_area(&self) -> Area {
        AXIS.clone()
    }

    fn cast_area(&self, selected: Pos) -> Area {
        Area::new([selected])
    }

    fn cast(&self, board: &Board, tiles: &[TileId]) -> Vec<Effect> {
        let Some(origin) = board.occupant_tile(self.caster) else {
            return Vec::new();
        };
        let origin_pos = board.tile(origin).pos();
        tiles
            .iter()
            .map(|id| board.tile(*id))
            .filter(|tile| tile.occupier().is_some_and(|o| o != self.caster))
            .map(|tile| Effect::Shove {
                at: tile.pos(),
                toward: tile.pos().step_away(origin_pos),
            })
            .collect()
    }
}

/// Slams an adjacent cell and everything around it.
pub struct Shockwave {
    pub caster: OccupantId,
}

impl Skill for Shockwave {
    fn origin(&self, board: &Board, _cursor: TileId) -> Option<TileId> {
        board.occupant_tile(self.caster)
    }

    fn selectable_area(&self) -> Area {
        AXIS.clone()
    }

    fn cast_area(&self, selected: Pos) -> Area {
        AROUND.translated_around(selected).add([selected])
    }

    fn cast(&self, board: &Board, tiles: &[TileId]) -> Vec<Effect> {
        strikes(board, self.caster, tiles)
    }
}

/// A character class: a named bundle of skills keyed by action name.
pub struct Class {
    pub name: &'static str,
    skills: HashMap<&'static str, Box<dyn Skill>>,
}

impl Class {
    /// The skill bound to an action name, if the class has one.
    pub fn skill(&self, name: &str) -> Option<&dyn Skill> {
        self.skills.get(name).map(|s| s.as_ref())
    }

    /// Action names in sorted order.
    pub fn skill_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.skills.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// Frontline fighter: melee attack plus knockback.
pub fn swordsman(caster: OccupantId) -> Class {
    let mut skills: HashMap<&'static str, Box<dyn Skill>> = HashMap::new();
    skills.insert("attack", Box::new(SwordAttack { caster }));
    skills.insert("knockback", Box::new(Knockback { caster }));
    Class {
        name: "swordsman",
        skills,
    }
}

/// Reach fighter: spear attack plus knockback.
pub fn spearman(caster: OccupantId) -> Class {
    let mut skills: HashMap<&'static str, Box<dyn Skill>> = HashMap::new();
    skills.insert("attack", Box::new(SpearAttack { caster }));
    skills.insert("knockback", Box::new(Knockback { caster }));
    Class {
        name: "spearman",
        skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Dir;
    use crate::skill::{perform, resolve_cast, selectable_tiles};
    use crate::topology::build_classic_board;

    const CASTER: OccupantId = OccupantId(1);
    const TARGET: OccupantId = OccupantId(2);

    fn board_with_caster_at_center() -> (Board, TileId) {
        let mut board = build_classic_board(3, 3);
        assert!(board.place_occupant(Pos::new(1, 1), CASTER));
        let tile = board.occupant_tile(CASTER).unwrap();
        (board, tile)
    }

    #[test]
    fn sword_strikes_the_selected_neighbor() {
        let (mut board, cursor) = board_with_caster_at_center();
        assert!(board.place_occupant(Pos::new(1, 0), TARGET));

        let sword = SwordAttack { caster: CASTER };
        let effects = perform(&board, &sword, cursor, Pos::new(0, -1));
        assert_eq!(effects, vec![Effect::Strike { at: Pos::new(1, 0) }]);
    }

    #[test]
    fn sword_never_strikes_an_empty_tile() {
        let (board, cursor) = board_with_caster_at_center();
        let sword = SwordAttack { caster: CASTER };
        assert!(perform(&board, &sword, cursor, Pos::new(0, 1)).is_empty());
    }

    #[test]
    fn sword_origin_is_the_caster_not_the_cursor() {
        let (board, _) = board_with_caster_at_center();
        let sword = SwordAttack { caster: CASTER };
        let corner = board.id_at(Pos::new(2, 2)).unwrap();
        let tiles = resolve_cast(&board, &sword, corner, Pos::new(0, -1));
        assert_eq!(board.tile(tiles[0]).pos(), Pos::new(1, 0));
    }

    #[test]
    fn spear_reaches_range_two() {
        let (mut board, cursor) = board_with_caster_at_center();
        assert!(board.place_occupant(Pos::new(1, 2), TARGET));

        let spear = SpearAttack { caster: CASTER };
        let selectable = selectable_tiles(&board, &spear, cursor);
        let poses: Vec<Pos> = selectable.iter().map(|id| board.tile(*id).pos()).collect();
        // Eight pattern cells, minus (1, 3) and (1, -1) and (3, 1) and (-1, 1)
        // which are off the 3x3 board.
        assert!(poses.contains(&Pos::new(1, 0)));
        assert!(!poses.contains(&Pos::new(1, 3)));

        let effects = perform(&board, &spear, cursor, Pos::new(0, 1));
        assert_eq!(effects, vec![Effect::Strike { at: Pos::new(1, 2) }]);
    }

    #[test]
    fn knockback_shoves_away_from_the_caster() {
        let (mut board, cursor) = board_with_caster_at_center();
        assert!(board.place_occupant(Pos::new(2, 1), TARGET));

        let shove = Knockback { caster: CASTER };
        let effects = perform(&board, &shove, cursor, Pos::new(1, 0));
        assert_eq!(
            effects,
            vec![Effect::Shove {
                at: Pos::new(2, 1),
                toward: Dir::new(1, 0),
            }]
        );
    }

    #[test]
    fn shockwave_splashes_around_the_selected_cell() {
        let (mut board, cursor) = board_with_caster_at_center();
        assert!(board.place_occupant(Pos::new(2, 0), TARGET));

        // Select (1, 0): the splash covers (2, 0)'s occupant even though
        // the selected cell itself is empty.
        let wave = Shockwave { caster: CASTER };
        let effects = perform(&board, &wave, cursor, Pos::new(1, 0));
        assert_eq!(effects, vec![Effect::Strike { at: Pos::new(2, 0) }]);
    }

    #[test]
    fn shockwave_splash_never_hits_the_caster() {
        let (mut board, cursor) = board_with_caster_at_center();
        assert!(board.place_occupant(Pos::new(2, 0), TARGET));

        // The splash around the cell east of the caster covers the
        // caster's own tile; the caster must not strike itself.
        let wave = Shockwave { caster: CASTER };
        let effects = perform(&board, &wave, cursor, Pos::new(1, 0));
        assert!(!effects.contains(&Effect::Strike { at: Pos::new(1, 1) }));
    }

    #[test]
    fn skills_resolve_nothing_once_the_caster_leaves_the_board() {
        let (mut board, cursor) = board_with_caster_at_center();
        board.clear_occupant(Pos::new(1, 1));

        let sword = SwordAttack { caster: CASTER };
        assert!(selectable_tiles(&board, &sword, cursor).is_empty());
        assert!(perform(&board, &sword, cursor, Pos::new(0, 1)).is_empty());
    }

    #[test]
    fn class_rosters_expose_their_skills() {
        let class = swordsman(CASTER);
        assert_eq!(class.name, "swordsman");
        assert_eq!(class.skill_names(), vec!["attack", "knockback"]);
        assert!(class.skill("attack").is_some());
        assert!(class.skill("fireball").is_none());

        let spear = spearman(CASTER);
        assert_eq!(spear.name, "spearman");
        assert!(spear.skill("attack").is_some());
    }
}
