//! Deterministic course generation and shot rules for a grid mini-golf game.
//!
//! A hole is generated from a [`Seed`] into a [`CourseLayout`], then played through a
//! [`PlayEngine`] one shot at a time. Course and hole records live in a [`CourseBook`].

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use course::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use seed::*;
pub use store::*;
pub use types::*;

mod cell;
mod course;
mod engine;
mod error;
mod generator;
mod grid;
pub mod rng;
mod seed;
mod store;
mod types;

pub const WIDTH: Coord = 14;
pub const HEIGHT: Coord = 20;

/// Smallest grid the start and hole placement rules can fill.
pub const MIN_SIZE: Coord2 = (7, 16);

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseConfig {
    pub size: Coord2,
    /// Percent chance an untouched cell becomes a tree.
    pub tree_chance: u8,
    /// Percent chance a fairway edge cell grows a flower.
    pub flower_chance: u8,
    /// Bunker placement attempts around the green.
    pub bunkers: u8,
}

impl CourseConfig {
    pub const fn new_unchecked(size: Coord2, tree_chance: u8, flower_chance: u8, bunkers: u8) -> Self {
        Self {
            size,
            tree_chance,
            flower_chance,
            bunkers,
        }
    }

    pub fn new((width, height): Coord2, tree_chance: u8, flower_chance: u8, bunkers: u8) -> Self {
        let width = width.clamp(MIN_SIZE.0, Coord::MAX);
        let height = height.clamp(MIN_SIZE.1, Coord::MAX);
        Self::new_unchecked(
            (width, height),
            tree_chance.min(100),
            flower_chance.min(100),
            bunkers,
        )
    }
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self::new_unchecked((WIDTH, HEIGHT), 70, 15, 3)
    }
}

/// Result of asking the engine to play a shot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The hole is already finished.
    Ignored,
    /// Landing cell is off the grid or a tree.
    Blocked,
    Moved,
    /// Landed on the hole, the attempt is over.
    Holed,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            Ignored => false,
            Blocked => false,
            Moved => true,
            Holed => true,
        }
    }
}
