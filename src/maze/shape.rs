/// The predefined maze shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeType {
    /// Standard rectangular maze, every cell active.
    #[default]
    Rectangle,
    /// Circular (elliptical on non-square grids) maze.
    Circle,
    /// Diamond-shaped maze.
    Diamond,
    /// Heart-shaped maze.
    Heart,
}

impl ShapeType {
    /// All shape types, for UI enumeration.
    pub const ALL: [ShapeType; 4] = [
        ShapeType::Rectangle,
        ShapeType::Circle,
        ShapeType::Diamond,
        ShapeType::Heart,
    ];
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeType::Rectangle => write!(f, "Rectangle"),
            ShapeType::Circle => write!(f, "Circle"),
            ShapeType::Diamond => write!(f, "Diamond"),
            ShapeType::Heart => write!(f, "Heart"),
        }
    }
}

/// An immutable rows x columns boolean mask selecting the cells that take
/// part in the maze. Built once at maze construction and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeShape {
    shape_type: ShapeType,
    rows: usize,
    columns: usize,
    mask: Vec<bool>,
}

impl MazeShape {
    pub(crate) fn new(shape_type: ShapeType, rows: usize, columns: usize, mask: Vec<bool>) -> Self {
        debug_assert_eq!(mask.len(), rows * columns);
        MazeShape {
            shape_type,
            rows,
            columns,
            mask,
        }
    }

    /// Builds the mask for the given shape type and dimensions.
    pub fn from_type(shape_type: ShapeType, rows: usize, columns: usize) -> Self {
        match shape_type {
            ShapeType::Rectangle => Self::rectangle(rows, columns),
            ShapeType::Circle => Self::circle(rows, columns),
            ShapeType::Diamond => Self::diamond(rows, columns),
            ShapeType::Heart => Self::heart(rows, columns),
        }
    }

    /// A full rectangle: every cell active.
    pub fn rectangle(rows: usize, columns: usize) -> Self {
        MazeShape::new(
            ShapeType::Rectangle,
            rows,
            columns,
            vec![true; rows * columns],
        )
    }

    /// An ellipse inscribed in the grid: a cell is active when its
    /// normalized distance from the center is at most 1.
    pub fn circle(rows: usize, columns: usize) -> Self {
        let center_row = rows as f64 / 2.0;
        let center_col = columns as f64 / 2.0;
        let mask = Self::build_mask(rows, columns, |row, col| {
            let normalized_row = (row as f64 - center_row) / center_row;
            let normalized_col = (col as f64 - center_col) / center_col;
            normalized_row * normalized_row + normalized_col * normalized_col <= 1.0
        });
        MazeShape::new(ShapeType::Circle, rows, columns, mask)
    }

    /// A diamond: a cell is active when its normalized Manhattan distance
    /// from the center is at most 1.
    pub fn diamond(rows: usize, columns: usize) -> Self {
        let center_row = rows as f64 / 2.0;
        let center_col = columns as f64 / 2.0;
        let mask = Self::build_mask(rows, columns, |row, col| {
            (row as f64 - center_row).abs() / center_row
                + (col as f64 - center_col).abs() / center_col
                <= 1.0
        });
        MazeShape::new(ShapeType::Diamond, rows, columns, mask)
    }

    /// A heart, from the implicit curve `(x^2 + y^2 - 0.8)^3 - 0.5*x^2*y^3 <= 0`
    /// over coordinates normalized to [-1, 1] with y pointing up.
    pub fn heart(rows: usize, columns: usize) -> Self {
        let center_row = rows as f64 / 2.0;
        let center_col = columns as f64 / 2.0;
        let mask = Self::build_mask(rows, columns, |row, col| {
            let x = (col as f64 - center_col) / center_col;
            // Flip y for standard orientation
            let y = -(row as f64 - center_row) / center_row;
            let heart = (x * x + y * y - 0.8).powi(3) - x * x * y * y * y * 0.5;
            heart <= 0.0
        });
        MazeShape::new(ShapeType::Heart, rows, columns, mask)
    }

    fn build_mask(
        rows: usize,
        columns: usize,
        mut inside: impl FnMut(usize, usize) -> bool,
    ) -> Vec<bool> {
        let mut mask = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for col in 0..columns {
                mask.push(inside(row, col));
            }
        }
        mask
    }

    /// The shape discriminator.
    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    /// Number of rows in the mask.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the mask.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Whether the cell at the given position takes part in the maze.
    /// Out-of-bounds positions are never active.
    pub fn is_active(&self, row: usize, column: usize) -> bool {
        if row >= self.rows || column >= self.columns {
            return false;
        }
        self.mask[row * self.columns + column]
    }

    /// Number of active cells in the mask.
    pub fn active_cell_count(&self) -> usize {
        self.mask.iter().filter(|&&active| active).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_all_cells_active() {
        let shape = MazeShape::rectangle(10, 10);
        assert_eq!(shape.shape_type(), ShapeType::Rectangle);
        for row in 0..10 {
            for col in 0..10 {
                assert!(shape.is_active(row, col), "({row}, {col}) should be active");
            }
        }
        assert_eq!(shape.active_cell_count(), 100);
    }

    #[test]
    fn circle_center_active_corners_inactive() {
        let shape = MazeShape::circle(20, 20);
        assert!(shape.is_active(10, 10));
        assert!(!shape.is_active(0, 0));
        assert!(!shape.is_active(0, 19));
        assert!(!shape.is_active(19, 0));
        assert!(!shape.is_active(19, 19));
    }

    #[test]
    fn diamond_center_and_edge_midpoints_active() {
        let shape = MazeShape::diamond(20, 20);
        assert!(shape.is_active(10, 10));
        assert!(shape.is_active(0, 10));
        assert!(shape.is_active(19, 10));
        assert!(shape.is_active(10, 0));
        assert!(shape.is_active(10, 19));
        assert!(!shape.is_active(0, 0));
    }

    #[test]
    fn heart_center_active_bottom_corners_inactive() {
        let shape = MazeShape::heart(20, 20);
        assert!(shape.is_active(10, 10));
        assert!(!shape.is_active(19, 0));
        assert!(!shape.is_active(19, 19));
    }

    #[test]
    fn out_of_bounds_is_inactive() {
        let shape = MazeShape::rectangle(5, 5);
        assert!(!shape.is_active(5, 0));
        assert!(!shape.is_active(0, 5));
        assert!(!shape.is_active(100, 100));
    }
}
