use std::collections::HashMap;

use rand::{Rng, rngs::StdRng};

use crate::error::MazeError;
use crate::generators::{Progress, apply_difficulty};
use crate::maze::{Difficulty, Maze, ShapeType};

/// Wilson's algorithm: loop-erased random walks from cells outside the maze
/// until they hit it, producing an unbiased uniform spanning tree. The
/// slowest of the four; a walk's length is unbounded in the worst case.
/// Walks over the full rectangular grid, ignoring the shape mask.
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

    let mut in_maze = vec![false; total_cells];
    // Maps each walked coordinate to the coordinate walked to next;
    // revisiting a coordinate overwrites its entry, erasing the loop
    let mut path: HashMap<(usize, usize), (usize, usize)> = HashMap::new();

    // Seed the maze with one random cell
    let seed = (rng.random_range(0..rows), rng.random_range(0..columns));
    in_maze[seed.0 * columns + seed.1] = true;

    progress.report(visited_cells as f64 / total_cells as f64);

    let mut remaining: Vec<(usize, usize)> = (0..rows)
        .flat_map(|row| (0..columns).map(move |col| (row, col)))
        .filter(|&cell| cell != seed)
        .collect();

    while !remaining.is_empty() {
        let walk_start = remaining[rng.random_range(0..remaining.len())];

        // Random walk until it reaches a cell already in the maze
        path.clear();
        let mut current = walk_start;
        while !in_maze[current.0 * columns + current.1] {
            let neighbors = grid_neighbors(current, rows, columns);
            let next = neighbors[rng.random_range(0..neighbors.len())];
            path.insert(current, next);
            current = next;
        }

        // Replay the loop-erased path, carving it into the maze
        current = walk_start;
        while !in_maze[current.0 * columns + current.1] {
            in_maze[current.0 * columns + current.1] = true;
            visited_cells += 1;

            let next = path[&current];
            maze.remove_wall_between(current, next);
            current = next;

            if visited_cells % 10 == 0 {
                progress.report(visited_cells as f64 / total_cells as f64);
            }
        }

        remaining.retain(|&(row, col)| !in_maze[row * columns + col]);
    }

    apply_difficulty(&mut maze, rng);
    progress.report(1.0);

    Ok(maze)
}

/// Grid-adjacent positions in top, right, bottom, left order, bounds-checked
/// against the full grid only.
fn grid_neighbors(cell: (usize, usize), rows: usize, columns: usize) -> Vec<(usize, usize)> {
    let (row, col) = cell;
    let mut neighbors = Vec::with_capacity(4);
    if row > 0 {
        neighbors.push((row - 1, col));
    }
    if col + 1 < columns {
        neighbors.push((row, col + 1));
    }
    if row + 1 < rows {
        neighbors.push((row + 1, col));
    }
    if col > 0 {
        neighbors.push((row, col - 1));
    }
    neighbors
}
