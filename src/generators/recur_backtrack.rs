use rand::{Rng, rngs::StdRng};

use crate::error::MazeError;
use crate::generators::{Progress, apply_difficulty};
use crate::maze::{Difficulty, Maze, ShapeType};

/// Recursive Backtracking (depth-first search with an explicit stack).
/// Carves long, winding corridors with few branch points. Walks only
/// through active cells.
pub(crate) fn generate(
    rows: usize,
    columns: usize,
    difficulty: Difficulty,
    shape: ShapeType,
    progress: &mut Progress<'_>,
    rng: &mut StdRng,
) -> Result<Maze, MazeError> {
    let mut maze = Maze::with_shape(rows, columns, difficulty, shape)?;

    let total_cells = maze.active_cell_count();
    let mut visited_cells = 1usize;

    // The stack keeps the trail back to the start for backtracking
    let mut stack: Vec<(usize, usize)> = Vec::new();
    let mut current = maze.start();
    maze.cell_mut(current).visited = true;

    progress.report(visited_cells as f64 / total_cells as f64);

    loop {
        let neighbors = maze.unvisited_neighbors(current);

        if !neighbors.is_empty() {
            let next = neighbors[rng.random_range(0..neighbors.len())];
            stack.push(current);
            maze.remove_wall_between(current, next);
            current = next;
            maze.cell_mut(current).visited = true;
            visited_cells += 1;

            // Coalesce progress updates
            if visited_cells % 10 == 0 {
                progress.report(visited_cells as f64 / total_cells as f64);
            }
        } else if let Some(previous) = stack.pop() {
            current = previous;
        } else {
            // Stack empty and no unvisited neighbors left: done
            break;
        }
    }

    apply_difficulty(&mut maze, rng);
    maze.reset_visited();
    progress.report(1.0);

    Ok(maze)
}
