//! Six-neighbor hex grid on squeezed integer coordinates.
//!
//! Hex tiles do not sit on unit coordinates. Logical column `c` of row
//! `r` occupies `Pos(2c + (r & 1), r)`: the x-coordinate advances by 2
//! per column and odd rows shift right by one, so every tile satisfies
//! `(x + y) % 2 == 0` and all six neighbor offsets stay integral. The
//! six neighbor distances are not equal: the board is slightly squeezed
//! in exchange for integer positions, and that approximation is
//! deliberate.

use log::debug;

use crate::board::{Board, Dir, Heading, Pos};

/// Direction catalogue for the hex topology, clockwise from north.
pub const HEX_HEADINGS: &[Heading] = &[
    Heading::N,
    Heading::NE,
    Heading::SE,
    Heading::S,
    Heading::SW,
    Heading::NW,
];

/// Heading-to-offset table for the squeezed hex adjacency rule.
const HEX_OFFSETS: [(Heading, Dir); 6] = [
    (Heading::N, Pos::new(0, 2)),
    (Heading::NE, Pos::new(1, 1)),
    (Heading::SE, Pos::new(1, -1)),
    (Heading::S, Pos::new(0, -2)),
    (Heading::SW, Pos::new(-1, -1)),
    (Heading::NW, Pos::new(-1, 1)),
];

/// The squeezed integer position of logical column `col`, row `row`.
pub const fn hex_pos(col: i32, row: i32) -> Pos {
    Pos::new(2 * col + (row & 1), row)
}

/// Builds a hex board with `width` logical columns and `height` rows.
///
/// Dimensions below 1 are promoted to 1. Tiles exist only at positions
/// the column/row mask derives from `width`/`height`; the six offsets
/// preserve the mask's parity invariant, so neighbor existence is purely
/// a bounds question. All ways cost 1.
pub fn build_hex_board(width: i32, height: i32) -> Board {
    let width = width.max(1);
    let height = height.max(1);

    let mut board = Board::new(width, height, HEX_HEADINGS);
    for row in 0..height {
        for col in 0..width {
            board
                .insert_tile(hex_pos(col, row))
                .expect("mask positions are distinct");
        }
    }

    for row in 0..height {
        for col in 0..width {
            let pos = hex_pos(col, row);
            for (heading, dir) in HEX_OFFSETS {
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
        "built hex board {}x{}: {} tiles, {} ways",
        width,
        height,
        board.len(),
        board.way_count()
    );
    board
}
