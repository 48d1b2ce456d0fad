/// Cardinal directions in the fixed neighbor-scan order: top, right,
/// bottom, left. Callers that pick "the first" neighbor rely on this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// All directions in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// The direction pointing back at the caller, used to keep wall removal
    /// symmetric across a cell pair.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    /// The (row, column) delta of one step in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Top => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Bottom => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// The direction from `from` to a grid-adjacent `to`, or `None` if the
    /// two positions are not 4-adjacent.
    pub(crate) fn between(from: (usize, usize), to: (usize, usize)) -> Option<Direction> {
        let row_diff = to.0 as isize - from.0 as isize;
        let col_diff = to.1 as isize - from.1 as isize;
        match (row_diff, col_diff) {
            (-1, 0) => Some(Direction::Top),
            (0, 1) => Some(Direction::Right),
            (1, 0) => Some(Direction::Bottom),
            (0, -1) => Some(Direction::Left),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Direction::Top => 0,
            Direction::Right => 1,
            Direction::Bottom => 2,
            Direction::Left => 3,
        }
    }
}

/// A single cell in the maze grid. Cells start with all four walls up and
/// are owned exclusively by the maze's grid; wall state is only mutated
/// through [`crate::maze::Maze::remove_wall_between`] so that walls stay
/// symmetric between neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    column: usize,
    walls: [bool; 4],
    /// Transient traversal flag, cleared before the maze is handed back.
    pub(crate) visited: bool,
    pub(crate) is_start: bool,
    pub(crate) is_end: bool,
    is_active: bool,
}

impl Cell {
    pub(crate) fn new(row: usize, column: usize, is_active: bool) -> Self {
        Cell {
            row,
            column,
            walls: [true; 4],
            visited: false,
            is_start: false,
            is_end: false,
            is_active,
        }
    }

    /// Row position in the grid (0-based).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column position in the grid (0-based).
    pub fn column(&self) -> usize {
        self.column
    }

    /// Position as a (row, column) pair.
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    /// Whether the boundary wall toward `direction` is present.
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    pub(crate) fn set_wall(&mut self, direction: Direction, present: bool) {
        self.walls[direction.index()] = present;
    }

    /// Whether the cell was visited during the current generation pass.
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Whether this is the maze's start cell.
    pub fn is_start(&self) -> bool {
        self.is_start
    }

    /// Whether this is the maze's end cell.
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    /// Whether the cell is included by the shape mask. Inactive cells exist
    /// in the grid but are excluded from generation and traversal.
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}
