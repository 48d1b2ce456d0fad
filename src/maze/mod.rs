pub mod cell;
pub mod shape;

use std::collections::{HashSet, VecDeque};

pub use cell::{Cell, Direction};
pub use shape::{MazeShape, ShapeType};

use crate::error::MazeError;

/// Difficulty levels for maze generation. Easy relaxes the finished spanning
/// tree by opening extra walls; Medium and Hard keep it as generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// A rectangular grid of cells with a shape mask, a start cell, and an end
/// cell. Start is the first active cell in row-major order, end is the last.
#[derive(Debug)]
pub struct Maze {
    rows: usize,
    columns: usize,
    grid: Vec<Cell>,
    shape: MazeShape,
    start: (usize, usize),
    end: (usize, usize),
    difficulty: Difficulty,
}

impl Maze {
    /// Minimum supported rows and columns.
    pub const MIN_DIMENSION: usize = 5;

    /// Creates a fully rectangular maze (all cells active) with every wall up.
    pub fn new(rows: usize, columns: usize, difficulty: Difficulty) -> Result<Self, MazeError> {
        Self::with_shape(rows, columns, difficulty, ShapeType::Rectangle)
    }

    /// Creates a maze restricted to the given shape, with every wall up.
    ///
    /// Fails with [`MazeError::InvalidDimensions`] when either dimension is
    /// below [`Maze::MIN_DIMENSION`], and with [`MazeError::InvalidShape`]
    /// when the mask leaves fewer than 2 active cells.
    pub fn with_shape(
        rows: usize,
        columns: usize,
        difficulty: Difficulty,
        shape_type: ShapeType,
    ) -> Result<Self, MazeError> {
        if rows < Self::MIN_DIMENSION || columns < Self::MIN_DIMENSION {
            return Err(MazeError::InvalidDimensions { rows, columns });
        }
        Self::build(
            rows,
            columns,
            difficulty,
            MazeShape::from_type(shape_type, rows, columns),
        )
    }

    fn build(
        rows: usize,
        columns: usize,
        difficulty: Difficulty,
        shape: MazeShape,
    ) -> Result<Self, MazeError> {
        let mut grid = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for col in 0..columns {
                grid.push(Cell::new(row, col, shape.is_active(row, col)));
            }
        }

        let mut active = grid.iter().filter(|cell| cell.is_active());
        let (Some(first), Some(last)) = (active.next(), active.next_back()) else {
            // Zero or one active cell: nothing to connect
            return Err(MazeError::InvalidShape {
                shape: shape.shape_type(),
                rows,
                columns,
                active: shape.active_cell_count(),
            });
        };
        let start = first.position();
        let end = last.position();

        let mut maze = Maze {
            rows,
            columns,
            grid,
            shape,
            start,
            end,
            difficulty,
        };
        maze.cell_mut(start).is_start = true;
        maze.cell_mut(end).is_end = true;
        Ok(maze)
    }

    /// Number of rows in the maze.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the maze.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The difficulty the maze was requested with.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The shape mask applied at construction.
    pub fn shape(&self) -> &MazeShape {
        &self.shape
    }

    /// Position of the start cell (first active cell in row-major order).
    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    /// Position of the end cell (last active cell in row-major order).
    pub fn end(&self) -> (usize, usize) {
        self.end
    }

    /// The start cell.
    pub fn start_cell(&self) -> &Cell {
        &self[self.start]
    }

    /// The end cell.
    pub fn end_cell(&self) -> &Cell {
        &self[self.end]
    }

    /// Number of cells included by the shape mask.
    pub fn active_cell_count(&self) -> usize {
        self.shape.active_cell_count()
    }

    /// The cell at the given position, or `None` if it lies outside the
    /// grid. Inactive cells still return `Some`; only grid bounds apply.
    pub fn get_cell(&self, row: usize, column: usize) -> Option<&Cell> {
        (row < self.rows && column < self.columns).then(|| &self.grid[row * self.columns + column])
    }

    /// The position one step from `position` toward `direction`, if it
    /// stays inside the grid.
    pub fn neighbor_position(
        &self,
        position: (usize, usize),
        direction: Direction,
    ) -> Option<(usize, usize)> {
        let (row_delta, col_delta) = direction.offset();
        let row = position.0.checked_add_signed(row_delta)?;
        let col = position.1.checked_add_signed(col_delta)?;
        (row < self.rows && col < self.columns).then_some((row, col))
    }

    /// Grid-adjacent cells of `position` that are both unvisited and active,
    /// in top, right, bottom, left order.
    pub fn unvisited_neighbors(&self, position: (usize, usize)) -> Vec<(usize, usize)> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| self.neighbor_position(position, direction))
            .filter(|&neighbor| {
                let cell = &self[neighbor];
                !cell.is_visited() && cell.is_active()
            })
            .collect()
    }

    /// Opens the wall between two grid-adjacent cells, clearing the matching
    /// flag on both sides in one operation so walls stay symmetric. A pair
    /// that is not 4-adjacent is ignored.
    pub fn remove_wall_between(&mut self, a: (usize, usize), b: (usize, usize)) {
        let Some(direction) = Direction::between(a, b) else {
            tracing::trace!(?a, ?b, "ignoring wall removal between non-adjacent cells");
            return;
        };
        if !self.in_bounds(a) || !self.in_bounds(b) {
            return;
        }
        self.cell_mut(a).set_wall(direction, false);
        self.cell_mut(b).set_wall(direction.opposite(), false);
    }

    /// Clears the transient `visited` flag on every cell, so a later
    /// traversal (e.g. pathfinding) can reuse it.
    pub fn reset_visited(&mut self) {
        for cell in &mut self.grid {
            cell.visited = false;
        }
    }

    /// Number of open interior walls, counting each neighbor pair once.
    /// A spanning tree over `n` active cells has exactly `n - 1`.
    pub fn open_wall_count(&self) -> usize {
        let mut count = 0;
        for row in 0..self.rows {
            for col in 0..self.columns {
                let cell = &self[(row, col)];
                if col + 1 < self.columns && !cell.has_wall(Direction::Right) {
                    count += 1;
                }
                if row + 1 < self.rows && !cell.has_wall(Direction::Bottom) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Positions reachable from the start cell through open walls, restricted
    /// to active cells (breadth-first).
    pub fn reachable_from_start(&self) -> HashSet<(usize, usize)> {
        let mut reached = HashSet::from([self.start]);
        let mut queue = VecDeque::from([self.start]);
        while let Some(position) = queue.pop_front() {
            for direction in Direction::ALL {
                if self[position].has_wall(direction) {
                    continue;
                }
                if let Some(neighbor) = self.neighbor_position(position, direction) {
                    if self[neighbor].is_active() && reached.insert(neighbor) {
                        queue.push_back(neighbor);
                    }
                }
            }
        }
        reached
    }

    fn in_bounds(&self, position: (usize, usize)) -> bool {
        position.0 < self.rows && position.1 < self.columns
    }

    pub(crate) fn cell_mut(&mut self, position: (usize, usize)) -> &mut Cell {
        debug_assert!(self.in_bounds(position));
        &mut self.grid[position.0 * self.columns + position.1]
    }
}

impl std::ops::Index<(usize, usize)> for Maze {
    type Output = Cell;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        debug_assert!(self.in_bounds(index));
        &self.grid[index.0 * self.columns + index.1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_dimensions_below_minimum() {
        assert_eq!(
            Maze::new(4, 10, Difficulty::Medium).unwrap_err(),
            MazeError::InvalidDimensions {
                rows: 4,
                columns: 10
            }
        );
        assert_eq!(
            Maze::new(10, 4, Difficulty::Medium).unwrap_err(),
            MazeError::InvalidDimensions {
                rows: 10,
                columns: 4
            }
        );
        assert!(Maze::new(5, 5, Difficulty::Medium).is_ok());
    }

    #[test]
    fn rejects_shapes_with_fewer_than_two_active_cells() {
        let mut mask = vec![false; 25];
        mask[12] = true;
        let shape = MazeShape::new(ShapeType::Circle, 5, 5, mask);
        assert_eq!(
            Maze::build(5, 5, Difficulty::Medium, shape).unwrap_err(),
            MazeError::InvalidShape {
                shape: ShapeType::Circle,
                rows: 5,
                columns: 5,
                active: 1,
            }
        );
    }

    #[test]
    fn start_and_end_are_first_and_last_active_cells() {
        let maze = Maze::new(5, 7, Difficulty::Medium).unwrap();
        assert_eq!(maze.start(), (0, 0));
        assert_eq!(maze.end(), (4, 6));
        assert!(maze.start_cell().is_start());
        assert!(maze.end_cell().is_end());

        // A circle pushes the first active cell off the corner
        let maze = Maze::with_shape(20, 20, Difficulty::Medium, ShapeType::Circle).unwrap();
        assert!(maze.start_cell().is_active());
        assert!(maze.end_cell().is_active());
        assert_ne!(maze.start(), (0, 0));
        assert_ne!(maze.end(), (19, 19));
    }

    #[test]
    fn get_cell_checks_grid_bounds_not_shape() {
        let maze = Maze::with_shape(20, 20, Difficulty::Medium, ShapeType::Circle).unwrap();
        // Inactive corner still returns a cell
        let corner = maze.get_cell(0, 0).unwrap();
        assert!(!corner.is_active());
        assert!(maze.get_cell(20, 0).is_none());
        assert!(maze.get_cell(0, 20).is_none());
    }

    #[test]
    fn remove_wall_between_is_symmetric() {
        let mut maze = Maze::new(5, 5, Difficulty::Medium).unwrap();
        maze.remove_wall_between((1, 1), (1, 2));
        assert!(!maze[(1, 1)].has_wall(Direction::Right));
        assert!(!maze[(1, 2)].has_wall(Direction::Left));

        maze.remove_wall_between((3, 2), (2, 2));
        assert!(!maze[(3, 2)].has_wall(Direction::Top));
        assert!(!maze[(2, 2)].has_wall(Direction::Bottom));
    }

    #[test]
    fn remove_wall_between_ignores_non_adjacent_pairs() {
        let mut maze = Maze::new(5, 5, Difficulty::Medium).unwrap();
        maze.remove_wall_between((0, 0), (2, 0));
        maze.remove_wall_between((0, 0), (1, 1));
        assert_eq!(maze.open_wall_count(), 0);
    }

    #[test]
    fn unvisited_neighbors_order_and_filtering() {
        let mut maze = Maze::new(5, 5, Difficulty::Medium).unwrap();
        assert_eq!(
            maze.unvisited_neighbors((2, 2)),
            vec![(1, 2), (2, 3), (3, 2), (2, 1)]
        );
        // Corner cell has only right and bottom neighbors
        assert_eq!(maze.unvisited_neighbors((0, 0)), vec![(0, 1), (1, 0)]);

        maze.cell_mut((1, 2)).visited = true;
        maze.cell_mut((2, 1)).visited = true;
        assert_eq!(maze.unvisited_neighbors((2, 2)), vec![(2, 3), (3, 2)]);
    }

    #[test]
    fn unvisited_neighbors_excludes_inactive_cells() {
        let maze = Maze::with_shape(20, 20, Difficulty::Medium, ShapeType::Circle).unwrap();
        for row in 0..20 {
            for col in 0..20 {
                for neighbor in maze.unvisited_neighbors((row, col)) {
                    assert!(maze[neighbor].is_active());
                }
            }
        }
    }

    #[test]
    fn reset_visited_clears_every_cell() {
        let mut maze = Maze::new(5, 5, Difficulty::Medium).unwrap();
        maze.cell_mut((0, 0)).visited = true;
        maze.cell_mut((4, 4)).visited = true;
        maze.reset_visited();
        for row in 0..5 {
            for col in 0..5 {
                assert!(!maze[(row, col)].is_visited());
            }
        }
    }
}
