use thiserror::Error;

use crate::{dims::Dims, maze::Cell};

/// Failure raised by a [`Renderer`] callback.
///
/// The algorithms never inspect or rewrap the inner error; it is carried
/// upward unmodified so a renderer failure cannot silently corrupt a run.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct RenderError(#[from] Box<dyn std::error::Error + Send + Sync>);

impl RenderError {
    pub fn new<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        RenderError(Box::new(source))
    }
}

/// Observer capability for maze generation and solving.
///
/// Callbacks are invoked synchronously from within the algorithm's mutation
/// steps and must not block indefinitely. A renderer observes only; it is
/// never handed mutable access to the grid.
pub trait Renderer {
    /// Wall or visited state of `pos` changed; `cell` is the new state.
    fn on_cell_updated(&mut self, pos: Dims, cell: Cell) -> Result<(), RenderError> {
        let _ = (pos, cell);
        Ok(())
    }

    /// The solver stepped from `from` to `to`; `undo` marks a backtrack.
    fn on_move(&mut self, from: Dims, to: Dims, undo: bool) -> Result<(), RenderError> {
        let _ = (from, to, undo);
        Ok(())
    }

    /// One algorithm step completed. Frame-pacing hook.
    fn on_tick(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Default renderer doing nothing, for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {}
