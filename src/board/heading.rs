//! Direction labels for board edges.
//!
//! Every way carries a `Heading` drawn from its board's catalogue. The
//! square topologies use the four cardinal labels; the hex topology uses
//! the six labels without `E`/`W`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named direction an outgoing way can point in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// All heading labels, clockwise from north.
pub const ALL_HEADINGS: [Heading; 8] = [
    Heading::N,
    Heading::NE,
    Heading::E,
    Heading::SE,
    Heading::S,
    Heading::SW,
    Heading::W,
    Heading::NW,
];

impl Heading {
    /// Returns the compass abbreviation for this heading.
    pub const fn abbr(self) -> &'static str {
        match self {
            Heading::N => "N",
            Heading::NE => "NE",
            Heading::E => "E",
            Heading::SE => "SE",
            Heading::S => "S",
            Heading::SW => "SW",
            Heading::W => "W",
            Heading::NW => "NW",
        }
    }

    /// Parses a heading from its compass abbreviation.
    pub fn from_abbr(s: &str) -> Option<Heading> {
        match s {
            "N" => Some(Heading::N),
            "NE" => Some(Heading::NE),
            "E" => Some(Heading::E),
            "SE" => Some(Heading::SE),
            "S" => Some(Heading::S),
            "SW" => Some(Heading::SW),
            "W" => Some(Heading::W),
            "NW" => Some(Heading::NW),
            _ => None,
        }
    }

    /// The reciprocal label: the heading the return way carries when two
    /// tiles are linked in both directions.
    pub const fn reverse(self) -> Heading {
        match self {
            Heading::N => Heading::S,
            Heading::NE => Heading::SW,
            Heading::E => Heading::W,
            Heading::SE => Heading::NW,
            Heading::S => Heading::N,
            Heading::SW => Heading::NE,
            Heading::W => Heading::E,
            Heading::NW => Heading::SE,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbr())
    }
}
