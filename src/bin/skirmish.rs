//! Scripted skirmish on a generated board.
//!
//! Builds a classic board, scatters two parties of occupants, and walks
//! every fighter's skills through the targeting pipeline, printing one
//! JSON record per cast that lands. A minimal stand-in for the game
//! loop that would sit on top of the engine.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use phalanx::board::{Board, OccupantId, Pos};
use phalanx::reach::reach_area;
use phalanx::skill::arsenal::{spearman, swordsman, Class};
use phalanx::skill::{perform, Effect};
use phalanx::topology::build_classic_board;

const BOARD_SIZE: i32 = 8;
const PARTY_SIZE: u32 = 4;
const MOVE_BUDGET: u32 = 3;

/// One cast that produced at least one effect.
#[derive(Serialize)]
struct CastRecord {
    actor: u32,
    class: &'static str,
    skill: &'static str,
    selected: Pos,
    effects: Vec<Effect>,
}

fn main() {
    env_logger::init();

    let mut rng = SmallRng::seed_from_u64(0x5eed);
    let mut board = build_classic_board(BOARD_SIZE, BOARD_SIZE);

    // West side fields swordsmen, east side spearmen.
    let mut roster: Vec<(OccupantId, Class)> = Vec::new();
    for id in place_party(&mut board, &mut rng, 0, 0..BOARD_SIZE / 2) {
        roster.push((id, swordsman(id)));
    }
    for id in place_party(&mut board, &mut rng, PARTY_SIZE, BOARD_SIZE / 2..BOARD_SIZE) {
        roster.push((id, spearman(id)));
    }

    for (actor, class) in &roster {
        let Some(tile) = board.occupant_tile(*actor) else {
            continue;
        };
        let range = reach_area(&board, tile, MOVE_BUDGET);
        eprintln!(
            "{} {} at {} can move across {} tiles",
            class.name,
            actor.0,
            board.tile(tile).pos(),
            range.len()
        );

        for name in class.skill_names() {
            let skill = class.skill(name).expect("roster names its own skills");
            for selected in skill.selectable_area().iter() {
                let effects = perform(&board, skill, tile, selected);
                if effects.is_empty() {
                    continue;
                }
                let record = CastRecord {
                    actor: actor.0,
                    class: class.name,
                    skill: name,
                    selected,
                    effects,
                };
                println!(
                    "{}",
                    serde_json::to_string(&record).expect("record serializes")
                );
            }
        }
    }
}

/// Drops `PARTY_SIZE` occupants onto free tiles within an x range.
fn place_party(
    board: &mut Board,
    rng: &mut SmallRng,
    first_id: u32,
    x_range: std::ops::Range<i32>,
) -> Vec<OccupantId> {
    let mut placed = Vec::new();
    while placed.len() < PARTY_SIZE as usize {
        let pos = Pos::new(
            rng.gen_range(x_range.clone()),
            rng.gen_range(0..board.height()),
        );
        let id = OccupantId(first_id + placed.len() as u32);
        if board.place_occupant(pos, id) {
            placed.push(id);
        }
    }
    placed
}
