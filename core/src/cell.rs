use serde::{Deserialize, Serialize};

/// Terrain held by a single grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Fairway,
    Green,
    Tree,
    Player,
    Hole,
    Flower,
    Bunker,
}

impl Cell {
    /// Trees are the only terrain a shot cannot land on.
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Tree)
    }

    /// Whether a fairway next to this cell counts as the fairway's edge.
    pub const fn is_rough(self) -> bool {
        matches!(self, Self::Empty | Self::Tree)
    }

    /// Single character used by the text rendering of a grid.
    pub const fn glyph(self) -> char {
        use Cell::*;
        match self {
            Empty => '.',
            Fairway => ',',
            Green => '"',
            Tree => 'T',
            Player => '@',
            Hole => 'O',
            Flower => '*',
            Bunker => '_',
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}
