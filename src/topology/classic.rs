//! Four-neighbor square grid built by boundary arithmetic.
//!
//! Every tile of the `width x height` rectangle is linked to its four
//! axis neighbors; edges and corners simply receive fewer ways. Each
//! boundary check is spelled out against the rectangle's extent, which
//! keeps the generator free of any offset table.

use log::debug;

use crate::board::{Board, Heading, Pos};

/// Direction catalogue shared by the square topologies.
pub const SQUARE_HEADINGS: &[Heading] = &[Heading::N, Heading::S, Heading::E, Heading::W];

/// Builds a `width x height` four-neighbor board.
///
/// Dimensions below 1 are promoted to 1. All ways cost 1.
pub fn build_classic_board(width: i32, height: i32) -> Board {
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
            if x != 0 {
                link(&mut board, pos, Heading::W, Pos::new(x - 1, y));
            }
            if x != width - 1 {
                link(&mut board, pos, Heading::E, Pos::new(x + 1, y));
            }
            if y != 0 {
                link(&mut board, pos, Heading::S, Pos::new(x, y - 1));
            }
            if y != height - 1 {
                link(&mut board, pos, Heading::N, Pos::new(x, y + 1));
            }
        }
    }

    debug!(
        "built classic board {}x{}: {} tiles, {} ways",
        width,
        height,
        board.len(),
        board.way_count()
    );
    board
}

fn link(board: &mut Board, from: Pos, heading: Heading, to: Pos) {
    board
        .connect(from, heading, to, 1)
        .expect("in-bounds neighbors exist and are linked once");
}
