use self::CellWall::*;
use crate::array::Array2D;
use crate::dims::Dims;
use crate::maze::cell::{Cell, CellWall};

/// Rectangular field of cells. Exclusive owner of its [`Cell`]s; all wall
/// edits go through it so the two facing flags of a shared edge stay
/// consistent.
#[derive(Debug, Clone)]
pub struct Grid {
    pub(crate) cells: Array2D<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Fully walled grid, or `None` if either dimension is non-positive.
    pub fn new(size: Dims) -> Option<Self> {
        let cells = Array2D::new_dims(Cell::new(), size)?;
        Some(Grid {
            cells,
            width: size.0 as usize,
            height: size.1 as usize,
        })
    }

    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    /// Start cell of every maze.
    pub fn entrance(&self) -> Dims {
        Dims::ZERO
    }

    /// Target cell of every maze.
    pub fn exit(&self) -> Dims {
        self.size() - Dims::ONE
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        0 <= pos.0 && pos.0 < self.width as i32 && 0 <= pos.1 && pos.1 < self.height as i32
    }

    pub fn is_valid_neighbor(&self, cell: Dims, off: Dims) -> bool {
        off.0.abs() + off.1.abs() == 1
            && self.is_in_bounds(cell)
            && self.is_in_bounds(cell + off)
    }

    /// The wall of `cell` that faces `cell2`, or `None` if not adjacent.
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        match (cell.0 - cell2.0, cell.1 - cell2.1) {
            (-1, 0) => Some(Right),
            (1, 0) => Some(Left),
            (0, -1) => Some(Bottom),
            (0, 1) => Some(Top),
            _ => None,
        }
    }

    /// In-bounds orthogonal neighbors of `cell`, in ring order.
    pub fn neighbor_positions(&self, cell: Dims) -> Vec<Dims> {
        CellWall::get_in_order()
            .into_iter()
            .map(|wall| wall.to_coord())
            .filter(|off| self.is_valid_neighbor(cell, *off))
            .map(|off| cell + off)
            .collect()
    }

    /// Carves a passage between `cell` and its neighbor behind `wall`,
    /// clearing both facing flags in the same logical step. Ignores walls
    /// with no neighbor behind them.
    pub fn remove_wall(&mut self, cell: Dims, wall: CellWall) {
        if !self.is_valid_neighbor(cell, wall.to_coord()) {
            return;
        }

        self.cells[cell].remove_wall(wall);
        self.cells[cell + wall.to_coord()].remove_wall(wall.reverse_wall());
    }

    /// Removes the wall on one side only. For boundary openings (entrance
    /// and exit); carving the wall towards an in-bounds neighbor through
    /// here leaves the grid in an asymmetric state.
    pub fn open_wall(&mut self, cell: Dims, wall: CellWall) {
        if let Some(cell) = self.cells.get_mut(cell) {
            cell.remove_wall(wall);
        }
    }

    /// Whether the edge behind `wall` is traversable: the neighbor must be
    /// in bounds and *neither* facing wall flag may be set.
    pub fn has_passage(&self, cell: Dims, wall: CellWall) -> bool {
        let neighbor = cell + wall.to_coord();
        match (self.get_cell(cell), self.get_cell(neighbor)) {
            (Some(from), Some(to)) => {
                !from.has_wall(wall) && !to.has_wall(wall.reverse_wall())
            }
            _ => false,
        }
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn get_cell_mut(&mut self, pos: Dims) -> Option<&mut Cell> {
        self.cells.get_mut(pos)
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        self.cells.iter_pos()
    }

    /// Clears every cell's visited flag. Runs between the generation and
    /// solve phases and before each solve.
    pub fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.set_visited(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CellWall, Dims, Grid};

    #[test]
    fn remove_wall_clears_both_sides() {
        let mut grid = Grid::new(Dims(3, 3)).unwrap();
        grid.remove_wall(Dims(1, 1), CellWall::Right);

        assert!(!grid.get_cell(Dims(1, 1)).unwrap().has_wall(CellWall::Right));
        assert!(!grid.get_cell(Dims(2, 1)).unwrap().has_wall(CellWall::Left));
        assert!(grid.has_passage(Dims(1, 1), CellWall::Right));
        assert!(grid.has_passage(Dims(2, 1), CellWall::Left));
    }

    #[test]
    fn remove_wall_on_boundary_is_ignored() {
        let mut grid = Grid::new(Dims(2, 2)).unwrap();
        grid.remove_wall(Dims(0, 0), CellWall::Top);

        assert!(grid.get_cell(Dims(0, 0)).unwrap().has_wall(CellWall::Top));
    }

    #[test]
    fn one_sided_opening_is_not_a_passage() {
        let mut grid = Grid::new(Dims(2, 1)).unwrap();
        grid.open_wall(Dims(0, 0), CellWall::Right);

        assert!(!grid.has_passage(Dims(0, 0), CellWall::Right));
        assert!(!grid.has_passage(Dims(1, 0), CellWall::Left));
    }

    #[test]
    fn which_wall_between_adjacent_cells() {
        assert_eq!(
            Grid::which_wall_between(Dims(1, 1), Dims(2, 1)),
            Some(CellWall::Right)
        );
        assert_eq!(
            Grid::which_wall_between(Dims(1, 1), Dims(1, 0)),
            Some(CellWall::Top)
        );
        assert_eq!(Grid::which_wall_between(Dims(1, 1), Dims(2, 2)), None);
        assert_eq!(Grid::which_wall_between(Dims(1, 1), Dims(1, 1)), None);
    }

    #[test]
    fn corner_cells_have_two_neighbors() {
        let grid = Grid::new(Dims(3, 3)).unwrap();

        assert_eq!(grid.neighbor_positions(Dims(0, 0)).len(), 2);
        assert_eq!(grid.neighbor_positions(Dims(2, 2)).len(), 2);
        assert_eq!(grid.neighbor_positions(Dims(1, 0)).len(), 3);
        assert_eq!(grid.neighbor_positions(Dims(1, 1)).len(), 4);
    }

    #[test]
    fn reset_visited_clears_all() {
        let mut grid = Grid::new(Dims(4, 2)).unwrap();
        for pos in [Dims(0, 0), Dims(3, 1)] {
            grid.get_cell_mut(pos).unwrap().set_visited(true);
        }

        grid.reset_visited();

        assert!(grid.iter_pos().all(|p| !grid.get_cell(p).unwrap().is_visited()));
    }
}
