pub mod cell;
pub use cell::{Cell, CellWall};

pub mod grid;
pub use grid::Grid;

pub mod algorithms;

pub mod solve;
pub use solve::solve;

#[allow(clippy::module_inception)]
pub mod maze;
pub use maze::{Maze, MazeError, MazeSpec, DEFAULT_SEED};
