use rand::{Rng, rngs::StdRng};

use crate::error::MazeError;
use crate::generators::{Progress, apply_difficulty};
use crate::maze::{Difficulty, Maze, ShapeType};

/// Randomized Prim's algorithm: grows the maze from the start cell by
/// repeatedly pulling a random frontier entry. Produces shorter, more
/// branching passages than backtracking. Walks only through active cells.
pub(crate) fn generate(
    rows: usize,
    columns: usize,
    difficulty: Difficulty,
    shape: ShapeType,
    progress: &mut Progress<'_>,
    rng: &mut StdRng,
) -> Result<Maze, MazeError> {
    let mut maze = Maze::with_shape(rows, columns, difficulty, shape)?;

    let total_cells = rows * columns;
    let mut visited_cells = 1usize;

    // Frontier entries pair a candidate cell with the in-maze neighbor it
    // was queued from; a cell may be queued once at most
    let mut frontier: Vec<((usize, usize), (usize, usize))> = Vec::new();

    let start = maze.start();
    maze.cell_mut(start).visited = true;
    add_frontier_cells(&maze, start, &mut frontier);

    progress.report(visited_cells as f64 / total_cells as f64);

    while !frontier.is_empty() {
        let index = rng.random_range(0..frontier.len());
        let (candidate, neighbor) = frontier.remove(index);

        // A cell can be queued through several neighbors before the first
        // entry is drawn; later entries are stale
        if maze[candidate].is_visited() {
            continue;
        }

        maze.cell_mut(candidate).visited = true;
        visited_cells += 1;
        maze.remove_wall_between(candidate, neighbor);
        add_frontier_cells(&maze, candidate, &mut frontier);

        if visited_cells % 10 == 0 {
            progress.report(visited_cells as f64 / total_cells as f64);
        }
    }

    apply_difficulty(&mut maze, rng);
    maze.reset_visited();
    progress.report(1.0);

    Ok(maze)
}

/// Queues the unvisited active neighbors of `cell`, skipping any cell
/// already present as a frontier candidate to bound frontier growth.
fn add_frontier_cells(
    maze: &Maze,
    cell: (usize, usize),
    frontier: &mut Vec<((usize, usize), (usize, usize))>,
) {
    for neighbor in maze.unvisited_neighbors(cell) {
        if !frontier.iter().any(|&(candidate, _)| candidate == neighbor) {
            frontier.push((neighbor, cell));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn connects_every_cell_of_a_rectangle() {
        let mut rng = get_rng(Some(5));
        let maze = generate(
            10,
            10,
            Difficulty::Medium,
            ShapeType::Rectangle,
            &mut Progress::new(None),
            &mut rng,
        )
        .unwrap();
        assert_eq!(maze.reachable_from_start().len(), 100);
        assert_eq!(maze.open_wall_count(), 99);
    }

    #[test]
    fn stays_inside_the_shape_mask() {
        let mut rng = get_rng(Some(5));
        let maze = generate(
            20,
            20,
            Difficulty::Medium,
            ShapeType::Diamond,
            &mut Progress::new(None),
            &mut rng,
        )
        .unwrap();
        // Inactive cells keep all four walls
        for row in 0..20 {
            for col in 0..20 {
                let cell = &maze[(row, col)];
                if !cell.is_active() {
                    for direction in crate::maze::Direction::ALL {
                        assert!(cell.has_wall(direction));
                    }
                }
            }
        }
        assert_eq!(maze.reachable_from_start().len(), maze.active_cell_count());
    }
}
