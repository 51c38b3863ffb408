//! Four-neighbor square grid built from an offset table.
//!
//! Behaviorally equivalent to the classic generator for rectangular
//! boards: same tiles, same ways, same costs. The difference is the
//! construction strategy. Each tile looks its neighbors up in an
//! explicit heading-to-offset table and links whatever exists, which is
//! the shape to extend if per-tile adjacency overrides ever land.

use log::debug;

use crate::board::{Board, Dir, Heading, Pos};

use super::classic::SQUARE_HEADINGS;

/// Heading-to-offset table for the square adjacency rule.
const SQUARE_OFFSETS: [(Heading, Dir); 4] = [
    (Heading::N, Pos::new(0, 1)),
    (Heading::S, Pos::new(0, -1)),
    (Heading::E, Pos::new(1, 0)),
    (Heading::W, Pos::new(-1, 0)),
];

/// Builds a `width x height` four-neighbor board via table lookup.
///
/// Dimensions below 1 are promoted to 1. All ways cost 1.
pub fn build_quad_board(width: i32, height: i32) -> Board {
    let width = width.max(1);
    let height = height.max(1);

    let mut board = Board::new(width, height, SQUARE_HEADINGS);
    for y in 0..height {
        for x in 0..width {
            board
                .insert_tile(Pos::new(x, y))
                .expect("rectangle positions are distinct");
        }
    }

    for y in 0..height {
        for x in 0..width {
            let pos = Pos::new(x, y);
            for (heading, dir) in SQUARE_OFFSETS {
                let at = pos + dir;
                if board.tile_at(at).is_some() {
                    board
                        .connect(pos, heading, at, 1)
                        .expect("existing neighbors are linked once");
                }
            }
        }
    }

    debug!(
        "built quad board {}x{}: {} tiles, {} ways",
        width,
        height,
        board.len(),
        board.way_count()
    );
    board
}
