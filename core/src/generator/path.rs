use crate::rng::SeedCursor;
use crate::*;

/// Carves a meandering fairway from `start` through a few random waypoints to `hole`, then lays
/// the green and its bunkers.
pub(super) fn carve_path(
    grid: &mut Grid,
    cursor: &mut SeedCursor,
    config: &CourseConfig,
    start: Coord2,
    hole: Coord2,
) {
    let (width, height) = config.size;
    let (width, height) = (i64::from(width), i64::from(height));

    let waypoint_count = cursor.next(3, 1);
    let mut waypoints: Vec<(i64, i64)> = (0..waypoint_count)
        .map(|_| {
            let x = cursor.next(width - 4, 2);
            let y = cursor.next(height - 4, 2);
            (x, y)
        })
        .collect();
    waypoints.push((hole.0.into(), hole.1.into()));
    log::trace!("path waypoints: {waypoints:?}");

    let (mut x, mut y) = (i64::from(start.0), i64::from(start.1));
    for (target_x, target_y) in waypoints {
        while (x - target_x).abs() > 1 || (y - target_y).abs() > 1 {
            let mut step_x = (target_x - x).signum();
            let mut step_y = (target_y - y).signum();

            // meander instead of always cutting diagonally
            if cursor.below(3) == 0 {
                if cursor.below(2) == 0 {
                    step_x = 0;
                } else {
                    step_y = 0;
                }
            }

            x = (x + step_x).clamp(0, width - 1);
            y = (y + step_y).clamp(0, height - 1);
            grid.stamp((x as Coord, y as Coord), 1, Cell::Fairway);
        }
    }

    grid.stamp(hole, 2, Cell::Green);
    place_bunkers(grid, cursor, config, hole);
}

fn place_bunkers(grid: &mut Grid, cursor: &mut SeedCursor, config: &CourseConfig, hole: Coord2) {
    for _ in 0..config.bunkers {
        let angle = (cursor.below(360) as f64).to_radians();
        // bounds are reversed, draws land in 2..=4
        let distance = cursor.next(2, 4) as f64;
        let x = round_half_up(f64::from(hole.0) + angle.cos() * distance);
        let y = round_half_up(f64::from(hole.1) + angle.sin() * distance);

        let (Ok(x), Ok(y)) = (Coord::try_from(x), Coord::try_from(y)) else {
            continue;
        };
        if !grid.contains((x, y)) {
            continue;
        }
        if !matches!(grid[(x, y)], Cell::Green | Cell::Hole) {
            grid[(x, y)] = Cell::Bunker;
        }
    }
}

/// Rounds halves toward positive infinity, so `-2.5` becomes `-2`.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_up_matches_expected_ties() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-0.4), 0);
    }

    #[test]
    fn carved_path_leaves_start_and_greens_the_hole() {
        let config = CourseConfig::default();
        let mut grid = Grid::new(config.size);
        let mut cursor = SeedCursor::new(9);
        let (start, hole) = ((4, 15), (8, 3));

        carve_path(&mut grid, &mut cursor, &config, start, hole);

        assert_eq!(grid[start], Cell::Fairway);
        assert_eq!(grid[hole], Cell::Green);
        assert_eq!(grid.count(Cell::Green), 25);
    }
}
