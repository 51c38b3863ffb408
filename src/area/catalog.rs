//! Stock patterns shared across topologies.
//!
//! The offset tables are the data of record; the lazily-built areas are
//! constructed from them once and never mutated afterwards. Because the
//! area combinators are functional, handing one of these to a consumer
//! can never corrupt the catalogue.

use std::sync::LazyLock;

use crate::board::Pos;

use super::Area;

/// The four cardinal unit offsets.
pub const AXIS_OFFSETS: [Pos; 4] = [
    Pos::new(0, 1),
    Pos::new(1, 0),
    Pos::new(0, -1),
    Pos::new(-1, 0),
];

/// The four cardinal offsets at range 2.
pub const AXIS2_OFFSETS: [Pos; 4] = [
    Pos::new(0, 2),
    Pos::new(2, 0),
    Pos::new(0, -2),
    Pos::new(-2, 0),
];

/// The four diagonal unit offsets.
pub const DIAG_OFFSETS: [Pos; 4] = [
    Pos::new(1, 1),
    Pos::new(1, -1),
    Pos::new(-1, -1),
    Pos::new(-1, 1),
];

/// The four diagonal offsets at range 2.
pub const DIAG2_OFFSETS: [Pos; 4] = [
    Pos::new(2, 2),
    Pos::new(2, -2),
    Pos::new(-2, -2),
    Pos::new(-2, 2),
];

/// The full 8-cell neighborhood, clockwise from north.
pub const AROUND_OFFSETS: [Pos; 8] = [
    Pos::new(0, 1),
    Pos::new(1, 1),
    Pos::new(1, 0),
    Pos::new(1, -1),
    Pos::new(0, -1),
    Pos::new(-1, -1),
    Pos::new(-1, 0),
    Pos::new(-1, 1),
];

/// The 16-cell ring at range 2, clockwise from north.
pub const AROUND2_OFFSETS: [Pos; 16] = [
    Pos::new(0, 2),
    Pos::new(1, 2),
    Pos::new(2, 2),
    Pos::new(2, 1),
    Pos::new(2, 0),
    Pos::new(2, -1),
    Pos::new(2, -2),
    Pos::new(1, -2),
    Pos::new(0, -2),
    Pos::new(-1, -2),
    Pos::new(-2, -2),
    Pos::new(-2, -1),
    Pos::new(-2, 0),
    Pos::new(-2, 1),
    Pos::new(-2, 2),
    Pos::new(-1, 2),
];

/// The six squeezed hex offsets, clockwise from north.
pub const HEX_AROUND_OFFSETS: [Pos; 6] = [
    Pos::new(0, 2),
    Pos::new(1, 1),
    Pos::new(1, -1),
    Pos::new(0, -2),
    Pos::new(-1, -1),
    Pos::new(-1, 1),
];

/// Axis neighbors: the four cardinal cells.
pub static AXIS: LazyLock<Area> = LazyLock::new(|| Area::new(AXIS_OFFSETS));

/// Axis cells at range 2.
pub static AXIS2: LazyLock<Area> = LazyLock::new(|| Area::new(AXIS2_OFFSETS));

/// Diagonal neighbors.
pub static DIAG: LazyLock<Area> = LazyLock::new(|| Area::new(DIAG_OFFSETS));

/// Diagonal cells at range 2.
pub static DIAG2: LazyLock<Area> = LazyLock::new(|| Area::new(DIAG2_OFFSETS));

/// The 8-neighborhood.
pub static AROUND: LazyLock<Area> = LazyLock::new(|| Area::new(AROUND_OFFSETS));

/// The ring of 16 cells at range 2.
pub static AROUND2: LazyLock<Area> = LazyLock::new(|| Area::new(AROUND2_OFFSETS));

/// The six hex neighbors on squeezed coordinates.
pub static HEX_AROUND: LazyLock<Area> = LazyLock::new(|| Area::new(HEX_AROUND_OFFSETS));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_sizes() {
        assert_eq!(AXIS.len(), 4);
        assert_eq!(AXIS2.len(), 4);
        assert_eq!(DIAG.len(), 4);
        assert_eq!(DIAG2.len(), 4);
        assert_eq!(AROUND.len(), 8);
        assert_eq!(AROUND2.len(), 16);
        assert_eq!(HEX_AROUND.len(), 6);
    }

    #[test]
    fn around_is_axis_plus_diag() {
        assert_eq!(AXIS.add(&*DIAG), *AROUND);
    }

    #[test]
    fn no_pattern_contains_its_own_anchor() {
        for area in [&*AXIS, &*AXIS2, &*DIAG, &*DIAG2, &*AROUND, &*AROUND2, &*HEX_AROUND] {
            assert!(!area.contains(Pos::new(0, 0)));
        }
    }

    #[test]
    fn around2_is_the_full_range_2_ring() {
        for pos in &AROUND2_OFFSETS {
            assert_eq!(pos.x.abs().max(pos.y.abs()), 2, "{pos}");
        }
        assert!(AROUND2.contains(Pos::new(2, -1)));
        assert!(!AROUND2.contains(Pos::new(1, 1)));
    }

    #[test]
    fn hex_around_matches_the_squeezed_adjacency() {
        for pos in &HEX_AROUND_OFFSETS {
            assert_eq!((pos.x + pos.y).rem_euclid(2), 0, "{pos}");
        }
        assert!(HEX_AROUND.contains(Pos::new(0, 2)));
        assert!(!HEX_AROUND.contains(Pos::new(1, 0)));
    }
}
