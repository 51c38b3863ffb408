//! Phalanx board engine library.
//!
//! A topology-agnostic tile graph for tactics games: boards are graphs
//! of tiles joined by named, weighted, directed ways. Generators build
//! square, quad, and hex boards; the area algebra turns offset patterns
//! into movement ranges and skill footprints; the skill module resolves
//! which tiles a game action touches.

pub mod area;
pub mod board;
pub mod reach;
pub mod skill;
pub mod topology;
