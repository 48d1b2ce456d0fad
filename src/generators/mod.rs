use rand::{SeedableRng, rngs::StdRng};

mod difficulty;
mod kruskal;
mod prim;
mod recur_backtrack;
mod wilson;

pub(crate) use difficulty::apply_difficulty;

use crate::error::MazeError;
use crate::maze::{Difficulty, Maze, ShapeType};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// The available maze generation algorithms. All four produce a spanning
/// structure over the grid; they differ in texture and in shape handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    RecursiveBacktracking,
    Prims,
    Kruskals,
    Wilsons,
}

impl Algorithm {
    /// All algorithms, for UI enumeration.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::RecursiveBacktracking,
        Algorithm::Prims,
        Algorithm::Kruskals,
        Algorithm::Wilsons,
    ];

    /// Human-readable algorithm name, also the identifier accepted by
    /// [`Algorithm::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::RecursiveBacktracking => "Recursive Backtracking",
            Algorithm::Prims => "Prim's Algorithm",
            Algorithm::Kruskals => "Kruskal's Algorithm",
            Algorithm::Wilsons => "Wilson's Algorithm",
        }
    }

    /// Short description of the algorithm's character, for UI presentation.
    pub fn description(self) -> &'static str {
        match self {
            Algorithm::RecursiveBacktracking => {
                "Creates perfect mazes with long, winding corridors using depth-first search. \
                 Fast and memory efficient."
            }
            Algorithm::Prims => {
                "Creates perfect mazes with more branching and shorter passages. Grows the maze \
                 from a single cell by adding random frontier cells."
            }
            Algorithm::Kruskals => {
                "Creates perfect mazes by treating it as a minimum spanning tree problem. Good \
                 balance of characteristics with moderate branching."
            }
            Algorithm::Wilsons => {
                "Creates perfectly unbiased mazes using loop-erased random walks. Slower but \
                 produces the most random-looking mazes."
            }
        }
    }

    /// Looks up an algorithm by name, falling back to Recursive Backtracking
    /// for unrecognized identifiers. An unknown name is not an error.
    pub fn from_name(name: &str) -> Algorithm {
        match Algorithm::ALL.iter().find(|a| a.name() == name) {
            Some(&algorithm) => algorithm,
            None => {
                tracing::debug!(name, "unknown algorithm identifier, using default");
                Algorithm::default()
            }
        }
    }

    /// Whether the algorithm carves only inside the shape mask.
    ///
    /// Recursive Backtracking and Prim's walk via the active-filtered
    /// neighbor scan; Kruskal's and Wilson's operate on the full rectangular
    /// grid and may open walls touching inactive cells. Callers that need a
    /// non-rectangular shape honored should pick a shape-aware algorithm.
    pub fn respects_shape(self) -> bool {
        match self {
            Algorithm::RecursiveBacktracking | Algorithm::Prims => true,
            Algorithm::Kruskals | Algorithm::Wilsons => false,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Coalesced progress reporting toward an optional caller-supplied sink.
/// Fractions are in [0, 1], non-decreasing, ending at exactly 1.0.
pub(crate) struct Progress<'a> {
    sink: Option<&'a mut (dyn FnMut(f64) + 'a)>,
}

impl<'a> Progress<'a> {
    pub(crate) fn new(sink: Option<&'a mut (dyn FnMut(f64) + 'a)>) -> Self {
        Progress { sink }
    }

    pub(crate) fn report(&mut self, fraction: f64) {
        if let Some(sink) = self.sink.as_mut() {
            sink(fraction);
        }
    }
}

/// Boxed progress callback for the asynchronous entry point.
pub type ProgressSink = Box<dyn FnMut(f64) + Send>;

/// Generates mazes with one shared random source, optionally seeded for
/// reproducibility. Requests sharing one generator are serialized; the
/// sequence of random draws, not just the seed, determines the output.
pub struct MazeGenerator {
    rng: StdRng,
}

impl Default for MazeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MazeGenerator {
    /// A generator seeded from the operating system.
    pub fn new() -> Self {
        MazeGenerator { rng: get_rng(None) }
    }

    /// A generator with a fixed seed. Two generators with the same seed,
    /// invoked with the same algorithm, dimensions, difficulty, and shape,
    /// produce cell-by-cell identical mazes.
    pub fn with_seed(seed: u64) -> Self {
        MazeGenerator {
            rng: get_rng(Some(seed)),
        }
    }

    /// Generates a maze synchronously.
    pub fn generate(
        &mut self,
        algorithm: Algorithm,
        rows: usize,
        columns: usize,
        difficulty: Difficulty,
        shape: ShapeType,
    ) -> Result<Maze, MazeError> {
        self.run(
            algorithm,
            rows,
            columns,
            difficulty,
            shape,
            Progress::new(None),
        )
    }

    /// Generates a maze synchronously, reporting progress as a fraction in
    /// [0, 1]. The callback runs on the generation thread and must not
    /// block; reports are non-decreasing and finish at exactly 1.0.
    pub fn generate_with_progress(
        &mut self,
        algorithm: Algorithm,
        rows: usize,
        columns: usize,
        difficulty: Difficulty,
        shape: ShapeType,
        progress: &mut dyn FnMut(f64),
    ) -> Result<Maze, MazeError> {
        self.run(
            algorithm,
            rows,
            columns,
            difficulty,
            shape,
            Progress::new(Some(progress)),
        )
    }

    /// Runs the blocking generation on a new thread and returns its join
    /// handle. A pure offload: identical semantics and output as the
    /// synchronous calls for identical inputs, with no cancellation support.
    /// Consumes the generator so the random source stays exclusive to the
    /// running request.
    pub fn generate_async(
        mut self,
        algorithm: Algorithm,
        rows: usize,
        columns: usize,
        difficulty: Difficulty,
        shape: ShapeType,
        progress: Option<ProgressSink>,
    ) -> std::thread::JoinHandle<Result<Maze, MazeError>> {
        std::thread::spawn(move || match progress {
            Some(mut sink) => self.run(
                algorithm,
                rows,
                columns,
                difficulty,
                shape,
                Progress::new(Some(&mut *sink)),
            ),
            None => self.run(
                algorithm,
                rows,
                columns,
                difficulty,
                shape,
                Progress::new(None),
            ),
        })
    }

    fn run(
        &mut self,
        algorithm: Algorithm,
        rows: usize,
        columns: usize,
        difficulty: Difficulty,
        shape: ShapeType,
        mut progress: Progress<'_>,
    ) -> Result<Maze, MazeError> {
        tracing::debug!(%algorithm, rows, columns, %difficulty, %shape, "generating maze");
        let maze = match algorithm {
            Algorithm::RecursiveBacktracking => recur_backtrack::generate(
                rows,
                columns,
                difficulty,
                shape,
                &mut progress,
                &mut self.rng,
            ),
            Algorithm::Prims => {
                prim::generate(rows, columns, difficulty, shape, &mut progress, &mut self.rng)
            }
            Algorithm::Kruskals => kruskal::generate(
                rows,
                columns,
                difficulty,
                shape,
                &mut progress,
                &mut self.rng,
            ),
            Algorithm::Wilsons => wilson::generate(
                rows,
                columns,
                difficulty,
                shape,
                &mut progress,
                &mut self.rng,
            ),
        }?;
        tracing::debug!(
            %algorithm,
            open_walls = maze.open_wall_count(),
            active_cells = maze.active_cell_count(),
            "maze generated"
        );
        Ok(maze)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_resolves_known_algorithms() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(algorithm.name()), algorithm);
        }
    }

    #[test]
    fn from_name_falls_back_to_default() {
        assert_eq!(
            Algorithm::from_name("Aldous-Broder"),
            Algorithm::RecursiveBacktracking
        );
        assert_eq!(Algorithm::from_name(""), Algorithm::RecursiveBacktracking);
    }

    #[test]
    fn shape_awareness_flags() {
        assert!(Algorithm::RecursiveBacktracking.respects_shape());
        assert!(Algorithm::Prims.respects_shape());
        assert!(!Algorithm::Kruskals.respects_shape());
        assert!(!Algorithm::Wilsons.respects_shape());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Algorithm::Kruskals.to_string(), "Kruskal's Algorithm");
    }

    #[test]
    fn construction_errors_surface_before_generation() {
        let mut generator = MazeGenerator::with_seed(7);
        let result = generator.generate(
            Algorithm::Prims,
            3,
            10,
            Difficulty::Medium,
            ShapeType::Rectangle,
        );
        assert_eq!(
            result.unwrap_err(),
            crate::MazeError::InvalidDimensions {
                rows: 3,
                columns: 10
            }
        );
    }
}
