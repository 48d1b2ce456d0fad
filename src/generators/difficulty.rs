use rand::{Rng, rngs::StdRng};

use crate::maze::{Difficulty, Direction, Maze};

/// Fraction of `rows * columns` extra walls opened for Easy difficulty.
const EASY_SHORTCUT_RATIO: f64 = 0.15;

/// Post-processes a freshly generated spanning structure according to the
/// maze's difficulty. Easy opens extra walls to create shortcuts; Medium and
/// Hard keep the maze as generated.
pub(crate) fn apply_difficulty(maze: &mut Maze, rng: &mut StdRng) {
    match maze.difficulty() {
        Difficulty::Easy => {
            let walls_to_remove =
                (maze.rows() as f64 * maze.columns() as f64 * EASY_SHORTCUT_RATIO) as usize;
            remove_random_walls(maze, walls_to_remove, rng);
        }
        // Reserved for future complexity tuning
        Difficulty::Medium | Difficulty::Hard => {}
    }
}

/// Opens up to `walls_to_remove` random closed walls, bounded by three times
/// that many attempts. An attempt draws a cell and a side; it is consumed
/// without opening a wall when the cell is inactive, start, or end, when the
/// side has no neighbor, or when the wall is already open.
fn remove_random_walls(maze: &mut Maze, walls_to_remove: usize, rng: &mut StdRng) {
    let max_attempts = walls_to_remove * 3;
    let mut removed = 0;
    let mut attempts = 0;

    while removed < walls_to_remove && attempts < max_attempts {
        attempts += 1;

        let position = (
            rng.random_range(0..maze.rows()),
            rng.random_range(0..maze.columns()),
        );
        let cell = &maze[position];
        if cell.is_start() || cell.is_end() || !cell.is_active() {
            continue;
        }

        let direction = Direction::ALL[rng.random_range(0..4)];
        let Some(neighbor) = maze.neighbor_position(position, direction) else {
            continue;
        };
        if maze[position].has_wall(direction) {
            maze.remove_wall_between(position, neighbor);
            removed += 1;
        }
    }

    tracing::trace!(removed, attempts, "opened shortcut walls");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;
    use crate::maze::ShapeType;

    #[test]
    fn medium_and_hard_are_no_ops() {
        for difficulty in [Difficulty::Medium, Difficulty::Hard] {
            let mut maze = Maze::new(10, 10, difficulty).unwrap();
            let mut rng = get_rng(Some(1));
            apply_difficulty(&mut maze, &mut rng);
            assert_eq!(maze.open_wall_count(), 0);
        }
    }

    #[test]
    fn easy_opens_extra_walls() {
        let mut maze = Maze::new(10, 10, Difficulty::Easy).unwrap();
        let mut rng = get_rng(Some(1));
        apply_difficulty(&mut maze, &mut rng);
        let opened = maze.open_wall_count();
        assert!(opened > 0);
        // Target is 0.15 * 100 = 15 walls
        assert!(opened <= 15);
    }

    #[test]
    fn easy_leaves_inactive_cells_walled() {
        let mut maze = Maze::with_shape(20, 20, Difficulty::Easy, ShapeType::Circle).unwrap();
        let mut rng = get_rng(Some(3));
        apply_difficulty(&mut maze, &mut rng);
        assert!(maze[(0, 0)].has_wall(Direction::Right));
        assert!(maze[(0, 0)].has_wall(Direction::Bottom));
    }
}
