use rand::SeedableRng;
use thiserror::Error;

use crate::{
    dims::Dims,
    maze::algorithms::{DepthFirstSearch, GenError, Random},
    maze::grid::Grid,
    maze::solve::solve,
    render::{NoopRenderer, RenderError, Renderer},
};

/// Seed used when the caller does not supply one, so unseeded mazes are
/// reproducible. Callers needing true randomness pass an entropy-derived
/// seed themselves.
pub const DEFAULT_SEED: u64 = 0;

/// Construction inputs for a [`Maze`].
///
/// `origin` and `cell_size` are drawing-space values, opaque to the
/// algorithms; they only feed [`Maze::cell_rect`].
#[derive(Debug, Clone, Copy)]
pub struct MazeSpec {
    pub origin: Dims,
    /// Grid dimensions as `(columns, rows)`, both positive.
    pub size: Dims,
    /// Per-cell `(width, height)` in drawing units, both positive.
    pub cell_size: Dims,
    /// Generation seed; `None` falls back to [`DEFAULT_SEED`].
    pub seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("invalid grid size: {0:?}")]
    InvalidSize(Dims),
    #[error("invalid cell size: {0:?}")]
    InvalidCellSize(Dims),
    #[error("renderer error: {0}")]
    Render(#[from] RenderError),
}

impl From<GenError> for MazeError {
    fn from(err: GenError) -> Self {
        match err {
            GenError::InvalidSize(size) => MazeError::InvalidSize(size),
            GenError::Render(err) => MazeError::Render(err),
        }
    }
}

/// A generated maze plus its drawing geometry and attached renderer.
///
/// Generation runs exactly once, inside the constructor. [`Maze::solve`]
/// may run any number of times afterwards; each run resets the visited
/// flags first.
pub struct Maze {
    grid: Grid,
    origin: Dims,
    cell_size: Dims,
    renderer: Box<dyn Renderer>,
}

impl Maze {
    /// Builds and generates a maze with no renderer attached.
    pub fn new(spec: MazeSpec) -> Result<Self, MazeError> {
        Self::with_renderer(spec, Box::new(NoopRenderer))
    }

    /// Builds and generates a maze, notifying `renderer` per carve step.
    ///
    /// Fails fast on a non-positive grid or cell size, before any grid is
    /// allocated.
    pub fn with_renderer(
        spec: MazeSpec,
        mut renderer: Box<dyn Renderer>,
    ) -> Result<Self, MazeError> {
        if !spec.size.all_positive() {
            return Err(MazeError::InvalidSize(spec.size));
        }
        if !spec.cell_size.all_positive() {
            return Err(MazeError::InvalidCellSize(spec.cell_size));
        }

        let mut rng = Random::seed_from_u64(spec.seed.unwrap_or(DEFAULT_SEED));
        let grid = DepthFirstSearch::generate(spec.size, &mut rng, renderer.as_mut())?;

        Ok(Maze {
            grid,
            origin: spec.origin,
            cell_size: spec.cell_size,
            renderer,
        })
    }

    /// Finds a path from entrance to exit, or reports `None` if there is
    /// none. See [`solve`] for the full contract.
    pub fn solve(&mut self) -> Result<Option<Vec<Dims>>, RenderError> {
        solve(&mut self.grid, self.renderer.as_mut())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Drawing-space rectangle of a cell as `(top_left, size)`.
    pub fn cell_rect(&self, pos: Dims) -> (Dims, Dims) {
        (self.origin + pos * self.cell_size, self.cell_size)
    }
}
