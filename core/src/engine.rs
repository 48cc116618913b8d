use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Completed,
}

impl EngineState {
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

/// One attempt at a hole: the terrain, where the ball is, and how many strokes it took.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    seed: Seed,
    grid: Grid,
    player: Coord2,
    hole: Coord2,
    strokes: u32,
    state: EngineState,
}

impl PlayEngine {
    pub fn new(seed: Seed) -> Self {
        Self::from_layout(seed, generate_course(seed))
    }

    pub fn from_layout(seed: Seed, layout: CourseLayout) -> Self {
        let CourseLayout { grid, start, hole } = layout;
        Self {
            seed,
            grid,
            player: start,
            hole,
            strokes: 0,
            state: Default::default(),
        }
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid[coords]
    }

    pub fn player(&self) -> Coord2 {
        self.player
    }

    pub fn hole(&self) -> Coord2 {
        self.hole
    }

    pub fn strokes(&self) -> u32 {
        self.strokes
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state.is_completed()
    }

    /// Stroke count of a finished hole, the score to record.
    pub fn final_score(&self) -> Option<u32> {
        self.is_completed().then_some(self.strokes)
    }

    /// Where a shot would land, `None` when it leaves the grid or hits a tree.
    pub fn destination(&self, direction: Direction, power: Power) -> Option<Coord2> {
        offset(self.player, direction.delta(), power.cells(), self.grid.size())
            .filter(|&pos| self.grid[pos].is_walkable())
    }

    /// Every landing cell reachable with `power` from the current position.
    pub fn valid_moves(&self, power: Power) -> SmallVec<[(Direction, Coord2); 8]> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| Some((direction, self.destination(direction, power)?)))
            .collect()
    }

    pub fn apply_move(&mut self, direction: Direction, power: Power) -> MoveOutcome {
        if self.is_completed() {
            return MoveOutcome::Ignored;
        }

        let Some(target) = self.destination(direction, power) else {
            log::trace!(
                "blocked shot {:?} x{} from {:?}",
                direction,
                power.cells(),
                self.player
            );
            return MoveOutcome::Blocked;
        };

        let left_behind = self.terrain_left_behind();
        self.grid[self.player] = left_behind;
        self.grid[target] = Cell::Player;
        self.player = target;
        self.strokes += 1;
        log::debug!(
            "stroke {}: {:?} x{} to {:?}",
            self.strokes,
            direction,
            power.cells(),
            target
        );

        if target == self.hole {
            self.state = EngineState::Completed;
            log::debug!("hole completed in {} strokes", self.strokes);
            MoveOutcome::Holed
        } else {
            MoveOutcome::Moved
        }
    }

    /// Terrain the current cell reverts to once the ball leaves it, read before anything moves.
    fn terrain_left_behind(&self) -> Cell {
        // only reachable for a layout that starts on its own hole
        if self.player == self.hole {
            return Cell::Hole;
        }

        let (green, fairway) =
            self.grid
                .iter_neighbor_cells(self.player)
                .fold((0, 0), |(green, fairway), cell| match cell {
                    Cell::Green => (green + 1, fairway),
                    Cell::Fairway => (green, fairway + 1),
                    _ => (green, fairway),
                });

        if green > fairway {
            Cell::Green
        } else {
            Cell::Fairway
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_42() -> PlayEngine {
        PlayEngine::new(Seed::new(42))
    }

    fn open_layout(start: Coord2, hole: Coord2) -> CourseLayout {
        let mut grid = Grid::new((14, 20));
        grid.stamp((0, 0), 20, Cell::Fairway);
        grid[start] = Cell::Player;
        grid[hole] = Cell::Hole;
        CourseLayout { grid, start, hole }
    }

    #[test]
    fn plays_seed_42_to_completion() {
        use Direction::*;
        let mut engine = engine_42();

        assert_eq!(engine.apply_move(Up, Power::Six), MoveOutcome::Moved);
        assert_eq!(engine.cell_at((4, 14)), Cell::Fairway);
        assert_eq!(engine.apply_move(Up, Power::Six), MoveOutcome::Moved);
        assert_eq!(engine.player(), (4, 2));
        assert_eq!(engine.apply_move(Left, Power::One), MoveOutcome::Moved);
        assert_eq!(engine.cell_at((4, 2)), Cell::Green);
        assert_eq!(engine.final_score(), None);

        assert_eq!(engine.apply_move(Left, Power::One), MoveOutcome::Holed);
        assert_eq!(engine.state(), EngineState::Completed);
        assert_eq!(engine.final_score(), Some(4));
        assert_eq!(engine.cell_at((2, 2)), Cell::Player);
        assert_eq!(engine.grid().count(Cell::Hole), 0);
    }

    #[test]
    fn out_of_bounds_shot_is_rejected_without_a_stroke() {
        let mut engine = engine_42();
        let before = engine.clone();

        assert_eq!(engine.apply_move(Direction::Left, Power::Six), MoveOutcome::Blocked);
        assert_eq!(engine.apply_move(Direction::Down, Power::Six), MoveOutcome::Blocked);
        assert_eq!(engine, before);
    }

    #[test]
    fn tree_blocks_the_landing_cell() {
        let mut engine = engine_42();
        assert_eq!(engine.cell_at((10, 14)), Cell::Tree);

        assert_eq!(engine.apply_move(Direction::Right, Power::Six), MoveOutcome::Blocked);
        assert_eq!(engine.player(), (4, 14));
        assert_eq!(engine.strokes(), 0);
    }

    #[test]
    fn completed_engine_ignores_moves() {
        let mut engine = PlayEngine::from_layout(Seed::new(0), open_layout((5, 10), (5, 9)));

        assert_eq!(engine.apply_move(Direction::Up, Power::One), MoveOutcome::Holed);
        let finished = engine.clone();
        for direction in Direction::ALL {
            assert_eq!(engine.apply_move(direction, Power::One), MoveOutcome::Ignored);
        }
        assert_eq!(engine, finished);
    }

    #[test]
    fn vacated_cell_follows_dominant_neighbor_terrain() {
        let mut layout = open_layout((5, 10), (5, 2));
        layout.grid.stamp((5, 11), 1, Cell::Green);
        layout.grid[(5, 10)] = Cell::Player;
        let mut engine = PlayEngine::from_layout(Seed::new(0), layout);

        engine.apply_move(Direction::Up, Power::One);
        assert_eq!(engine.cell_at((5, 10)), Cell::Green);

        // tie goes to fairway
        let mut layout = open_layout((5, 10), (5, 2));
        for x in 4..=6 {
            layout.grid[(x, 11)] = Cell::Green;
        }
        layout.grid[(4, 10)] = Cell::Green;
        let mut engine = PlayEngine::from_layout(Seed::new(0), layout);

        engine.apply_move(Direction::Up, Power::Three);
        assert_eq!(engine.cell_at((5, 10)), Cell::Fairway);
    }

    #[test]
    fn shot_overwrites_decorations() {
        let mut layout = open_layout((5, 10), (5, 2));
        layout.grid[(8, 10)] = Cell::Flower;
        let mut engine = PlayEngine::from_layout(Seed::new(0), layout);

        assert_eq!(engine.apply_move(Direction::Right, Power::Three), MoveOutcome::Moved);
        assert_eq!(engine.cell_at((8, 10)), Cell::Player);
    }

    #[test]
    fn valid_moves_match_destinations() {
        let engine = engine_42();

        assert_eq!(engine.valid_moves(Power::Six).as_slice(), &[(Direction::Up, (4, 8))]);
        let directions: Vec<_> = engine
            .valid_moves(Power::Three)
            .iter()
            .map(|&(direction, _)| direction)
            .collect();
        assert_eq!(
            directions,
            vec![
                Direction::Up,
                Direction::Left,
                Direction::Right,
                Direction::UpLeft,
                Direction::UpRight
            ]
        );
        assert_eq!(engine.valid_moves(Power::One).len(), 8);

        for (direction, target) in engine.valid_moves(Power::One) {
            assert_eq!(engine.destination(direction, Power::One), Some(target));
        }
    }

    #[test]
    fn vacating_the_hole_restores_it() {
        let layout = open_layout((5, 9), (5, 9));
        let mut engine = PlayEngine::from_layout(Seed::new(0), layout);

        engine.apply_move(Direction::Down, Power::One);
        assert_eq!(engine.cell_at((5, 9)), Cell::Hole);
    }
}
