use crate::dims::Dims;

/// Single maze cell: one wall flag per side (`true` = wall present) plus a
/// visitation flag shared by the generation and solve phases.
///
/// A cell does not know its own coordinate; identity is positional and
/// adjacency is always computed from coordinates plus grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    top: bool,
    right: bool,
    bottom: bool,
    left: bool,
    visited: bool,
}

impl Cell {
    /// A fully walled, unvisited cell.
    pub fn new() -> Cell {
        Cell {
            top: true,
            right: true,
            bottom: true,
            left: true,
            visited: false,
        }
    }

    pub fn has_wall(&self, wall: CellWall) -> bool {
        match wall {
            CellWall::Top => self.top,
            CellWall::Right => self.right,
            CellWall::Bottom => self.bottom,
            CellWall::Left => self.left,
        }
    }

    pub fn remove_wall(&mut self, wall: CellWall) {
        match wall {
            CellWall::Top => self.top = false,
            CellWall::Right => self.right = false,
            CellWall::Bottom => self.bottom = false,
            CellWall::Left => self.left = false,
        }
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellWall {
    Top,
    Right,
    Bottom,
    Left,
}

impl CellWall {
    /// Offset to the neighbor behind this wall. Row 0 is the top row.
    pub fn to_coord(self) -> Dims {
        match self {
            Self::Top => Dims(0, -1),
            Self::Right => Dims(1, 0),
            Self::Bottom => Dims(0, 1),
            Self::Left => Dims(-1, 0),
        }
    }

    /// The same wall as seen from the neighboring cell.
    pub fn reverse_wall(self) -> CellWall {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Fixed clockwise ring, used wherever a stable direction order matters.
    pub fn get_in_order() -> [CellWall; 4] {
        [Self::Top, Self::Right, Self::Bottom, Self::Left]
    }
}
