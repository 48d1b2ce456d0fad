use thiserror::Error;

use crate::maze::ShapeType;

/// Errors raised while constructing a maze. Both variants are caller-input
/// errors surfaced before any generation algorithm runs; generation itself
/// has no failure paths once construction succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Rows or columns below the supported minimum of 5.
    #[error("maze must be at least 5x5 cells, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    /// The shape mask leaves fewer than 2 active cells, so there is nothing
    /// to connect and no distinct start/end pair.
    #[error(
        "{shape:?} shape leaves only {active} active cell(s) on a {rows}x{columns} grid, need at least 2"
    )]
    InvalidShape {
        shape: ShapeType,
        rows: usize,
        columns: usize,
        active: usize,
    },
}
