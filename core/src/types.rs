use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u8;

/// Two-dimensional coordinates `(x, y)`, `y` grows downward.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

/// Grids are stored row-major, so the array index is `[y, x]`.
impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

/// One of the eight compass directions a shot can travel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    pub const fn delta(self) -> (i8, i8) {
        use Direction::*;
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
            UpLeft => (-1, -1),
            UpRight => (1, -1),
            DownLeft => (-1, 1),
            DownRight => (1, 1),
        }
    }
}

/// Fixed shot strength, the number of cells travelled on each moving axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Power {
    One = 1,
    Three = 3,
    Six = 6,
}

impl Power {
    pub const ALL: [Power; 3] = [Power::One, Power::Three, Power::Six];

    pub const fn cells(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Power {
    type Error = crate::GameError;

    fn try_from(value: u8) -> crate::Result<Self> {
        match value {
            1 => Ok(Power::One),
            3 => Ok(Power::Three),
            6 => Ok(Power::Six),
            other => Err(crate::GameError::InvalidPower(other)),
        }
    }
}

impl From<Power> for u8 {
    fn from(power: Power) -> Self {
        power.cells()
    }
}

/// Moves `coords` by `delta * scale`, returning a value only when it stays inside `bounds`.
pub fn offset(coords: Coord2, delta: (i8, i8), scale: u8, bounds: Coord2) -> Option<Coord2> {
    let step = |from: Coord, d: i8, max: Coord| -> Option<Coord> {
        let d = d.checked_mul(i8::try_from(scale).ok()?)?;
        from.checked_add_signed(d).filter(|&next| next < max)
    };

    Some((
        step(coords.0, delta.0, bounds.0)?,
        step(coords.1, delta.1, bounds.1)?,
    ))
}

/// Iterates the in-bounds cells surrounding a center, never the center itself.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: usize,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(direction) = Direction::ALL.get(self.index) {
            self.index += 1;
            if let Some(coords) = offset(self.center, direction.delta(), 1, self.bounds) {
                return Some(coords);
            }
        }
        None
    }
}
