use rand::{rngs::StdRng, seq::SliceRandom};

use crate::error::MazeError;
use crate::generators::{Progress, apply_difficulty};
use crate::maze::{Difficulty, Maze, ShapeType};

/// Disjoint-set structure over the flat cell indices of one Kruskal run.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    /// Root of the set containing `x`, with path compression.
    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    /// Unites the sets containing `x` and `y` by rank. Returns `false` when
    /// they were already in the same set.
    fn unite(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }
}

/// Wall edge between two adjacent cells, tagged with their flat indices.
#[derive(Clone, Copy)]
struct Edge {
    cell1: (usize, usize),
    cell2: (usize, usize),
    index1: usize,
    index2: usize,
}

/// Randomized Kruskal's algorithm: shuffles the complete edge list and opens
/// every edge whose endpoints are in different union-find sets. Enumerates
/// edges over the full rectangular grid, ignoring the shape mask. Never sets
/// the `visited` flag, so no reset pass is needed.
pub(crate) fn generate(
    rows: usize,
    columns: usize,
    difficulty: Difficulty,
    shape: ShapeType,
    progress: &mut Progress<'_>,
    rng: &mut StdRng,
) -> Result<Maze, MazeError> {
    let mut maze = Maze::with_shape(rows, columns, difficulty, shape)?;

    let total_walls = (rows - 1) * columns + rows * (columns - 1);
    let mut uf = UnionFind::new(rows * columns);

    // All rightward and downward adjacencies
    let mut edges: Vec<Edge> = Vec::with_capacity(total_walls);
    for row in 0..rows {
        for col in 0..columns {
            let index = row * columns + col;
            if col + 1 < columns {
                edges.push(Edge {
                    cell1: (row, col),
                    cell2: (row, col + 1),
                    index1: index,
                    index2: index + 1,
                });
            }
            if row + 1 < rows {
                edges.push(Edge {
                    cell1: (row, col),
                    cell2: (row + 1, col),
                    index1: index,
                    index2: index + columns,
                });
            }
        }
    }

    // Fisher-Yates pass driven by the shared rng
    edges.shuffle(rng);

    progress.report(0.0);

    let mut processed_walls = 0usize;
    for edge in edges {
        processed_walls += 1;

        // Endpoints in the same set would form a cycle
        if uf.find(edge.index1) != uf.find(edge.index2) {
            maze.remove_wall_between(edge.cell1, edge.cell2);
            uf.unite(edge.index1, edge.index2);
        }

        if processed_walls % 20 == 0 {
            progress.report(processed_walls as f64 / total_walls as f64);
        }
    }

    apply_difficulty(&mut maze, rng);
    progress.report(1.0);

    Ok(maze)
}
