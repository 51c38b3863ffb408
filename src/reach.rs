//! Cost-bounded reachability over board ways.
//!
//! Sums way costs against a movement budget and reports every tile whose
//! cheapest path fits. This is the groundwork movement ranges are built
//! on: feed the result to a renderer as an area, or walk the entries for
//! the per-tile cost.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::area::Area;
use crate::board::{Board, TileId};

/// A tile reachable within budget, with its cheapest path cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReachEntry {
    pub tile: TileId,
    pub cost: u32,
}

/// Every tile reachable from `from` spending at most `budget` way cost.
///
/// The start tile is included at cost 0. Entries are sorted by tile
/// position, x before y, so callers see a reproducible order no matter
/// how the search visited the graph.
pub fn reachable(board: &Board, from: TileId, budget: u32) -> Vec<ReachEntry> {
    let mut best = vec![u32::MAX; board.len()];
    let mut frontier = BinaryHeap::new();

    best[from.index()] = 0;
    frontier.push(Reverse((0u32, from)));

    while let Some(Reverse((cost, id))) = frontier.pop() {
        if cost > best[id.index()] {
            continue;
        }
        for way in board.tile(id).ways() {
            let next = cost.saturating_add(way.cost);
            if next > budget || next >= best[way.to.index()] {
                continue;
            }
            best[way.to.index()] = next;
            frontier.push(Reverse((next, way.to)));
        }
    }

    let mut entries: Vec<ReachEntry> = best
        .iter()
        .enumerate()
        .filter(|(_, cost)| **cost != u32::MAX)
        .map(|(index, cost)| ReachEntry {
            tile: TileId(index as u32),
            cost: *cost,
        })
        .collect();
    entries.sort_by_key(|entry| board.tile(entry.tile).pos());
    entries
}

/// The reachable set as absolute positions, ready for area consumers.
pub fn reach_area(board: &Board, from: TileId, budget: u32) -> Area {
    reachable(board, from, budget)
        .into_iter()
        .map(|entry| board.tile(entry.tile).pos())
        .collect()
}
