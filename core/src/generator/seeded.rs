use super::path::carve_path;
use super::*;
use crate::rng::SeedCursor;

/// Deterministic strategy, the same seed always yields the same layout.
#[derive(Clone, Debug, PartialEq)]
pub struct SeededCourseGenerator {
    seed: Seed,
}

impl SeededCourseGenerator {
    pub fn new(seed: Seed) -> Self {
        Self { seed }
    }
}

impl CourseGenerator for SeededCourseGenerator {
    fn generate(self, config: CourseConfig) -> CourseLayout {
        let seed = self.seed.value();
        let (width, height) = config.size;
        let (w, h) = (i64::from(width), i64::from(height));
        let mut grid = Grid::new(config.size);

        // every phase restarts its own cursor from the seed
        let mut cursor = SeedCursor::new(seed);
        let start_y = cursor.next(h - 5, h * 2 / 3);
        let start_x = cursor.next(w - 4, 2);
        let hole_y = cursor.next(h / 3 - 2, 2);
        let hole_x = cursor.next(w - 4, 2);
        let start = (start_x as Coord, start_y as Coord);
        let hole = (hole_x as Coord, hole_y as Coord);

        grid.stamp(start, 1, Cell::Fairway);
        grid.stamp(hole, 1, Cell::Green);

        carve_path(&mut grid, &mut SeedCursor::new(seed), &config, start, hole);
        plant_trees(&mut grid, &mut SeedCursor::new(seed), config.tree_chance);
        plant_flowers(&mut grid, &mut SeedCursor::new(seed), config.flower_chance);

        grid[start] = Cell::Player;
        grid[hole] = Cell::Hole;

        log::debug!(
            "generated course for seed {}: start {:?}, hole {:?}, {} trees",
            self.seed,
            start,
            hole,
            grid.count(Cell::Tree)
        );
        log::trace!("course layout:\n{grid}");

        CourseLayout { grid, start, hole }
    }
}

fn plant_trees(grid: &mut Grid, cursor: &mut SeedCursor, tree_chance: u8) {
    for pos in grid.positions() {
        if grid[pos] == Cell::Empty && cursor.chance(tree_chance) {
            grid[pos] = Cell::Tree;
        }
    }
}

/// Flowers only grow on fairway cells bordering the rough. The scan sees cells already turned
/// into flowers earlier in the same pass.
fn plant_flowers(grid: &mut Grid, cursor: &mut SeedCursor, flower_chance: u8) {
    for pos in grid.positions() {
        if grid[pos] != Cell::Fairway {
            continue;
        }
        let is_edge = grid.iter_neighbor_cells(pos).any(Cell::is_rough);
        if is_edge && cursor.chance(flower_chance) {
            grid[pos] = Cell::Flower;
        }
    }
}
