//! Shaped maze generation.
//!
//! Builds rectangular-grid mazes whose active area can be restricted by a
//! shape mask (rectangle, circle, diamond, heart), using one of four
//! randomized spanning-tree algorithms. The crate owns only the data model
//! and the generation engine; rendering and play logic live with the caller.

pub mod error;
pub mod generators;
pub mod maze;

pub use error::MazeError;
pub use generators::{Algorithm, MazeGenerator};
pub use maze::{Cell, Difficulty, Direction, Maze, MazeShape, ShapeType};
