use log::debug;
use rand::seq::SliceRandom;

use super::{GenError, Random};
use crate::{
    dims::Dims,
    maze::cell::CellWall,
    maze::grid::Grid,
    render::Renderer,
};

/// Randomized recursive backtracker, run on an explicit heap stack so deep
/// mazes cannot exhaust the call stack.
pub struct DepthFirstSearch;

impl DepthFirstSearch {
    /// Carves a perfect maze into a fully walled grid of `size` cells.
    ///
    /// The resulting wall-free adjacency graph is a spanning tree; on top of
    /// that the entrance (0,0) has its top and left walls opened and the
    /// exit (size - 1) its bottom and right walls. All visited flags are
    /// cleared before returning.
    pub fn generate(
        size: Dims,
        rng: &mut Random,
        renderer: &mut dyn Renderer,
    ) -> Result<Grid, GenError> {
        let mut grid = Grid::new(size).ok_or(GenError::InvalidSize(size))?;
        let cell_count = size.product() as usize;

        debug!("generating {}x{} maze", size.0, size.1);

        let mut stack = Vec::with_capacity(cell_count);

        let start = grid.entrance();
        grid.get_cell_mut(start)
            .expect("entrance is in bounds")
            .set_visited(true);
        stack.push(start);

        while let Some(current) = stack.pop() {
            let unvisited_neighbors = grid
                .neighbor_positions(current)
                .into_iter()
                .filter(|&pos| !grid.cells[pos].is_visited())
                .collect::<Vec<_>>();

            if !unvisited_neighbors.is_empty() {
                stack.push(current);
                let chosen = *unvisited_neighbors
                    .choose(rng)
                    .expect("non-empty candidate set");
                let chosen_wall =
                    Grid::which_wall_between(current, chosen).expect("neighbors are adjacent");

                grid.remove_wall(current, chosen_wall);
                grid.cells[chosen].set_visited(true);

                renderer.on_cell_updated(current, grid.cells[current])?;
                renderer.on_cell_updated(chosen, grid.cells[chosen])?;
                renderer.on_tick()?;

                stack.push(chosen);
            }
        }

        Self::open_endpoints(&mut grid, renderer)?;
        grid.reset_visited();

        debug!("maze generated, {} cells", cell_count);

        Ok(grid)
    }

    /// One-sided boundary openings; the tree-derived walls on these sides
    /// are overridden regardless of what carving produced.
    fn open_endpoints(grid: &mut Grid, renderer: &mut dyn Renderer) -> Result<(), GenError> {
        let entrance = grid.entrance();
        let exit = grid.exit();

        grid.open_wall(entrance, CellWall::Top);
        grid.open_wall(entrance, CellWall::Left);
        renderer.on_cell_updated(entrance, grid.cells[entrance])?;

        grid.open_wall(exit, CellWall::Bottom);
        grid.open_wall(exit, CellWall::Right);
        renderer.on_cell_updated(exit, grid.cells[exit])?;

        renderer.on_tick()?;

        Ok(())
    }
}
