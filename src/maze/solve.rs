use log::debug;

use crate::{
    dims::Dims,
    maze::cell::CellWall,
    maze::grid::Grid,
    render::{RenderError, Renderer},
};

/// One backtracking frame: a cell plus its remaining direction tries.
struct Frame {
    pos: Dims,
    order: [CellWall; 4],
    next: usize,
}

impl Frame {
    fn new(pos: Dims, size: Dims) -> Self {
        Frame {
            pos,
            order: direction_order(pos, size),
            next: 0,
        }
    }
}

/// Direction try-order for the cell at `pos` on a grid of `size`.
///
/// The primary direction comes from comparing the remaining horizontal and
/// vertical distance ratios `w/(x+1)` and `h/(y+1)`, cross-multiplied in
/// i64 so the comparison is exact. Horizontal preference starts at Right
/// and walks the ring forwards; vertical starts at Bottom and walks it
/// backwards. Either way all four directions appear exactly once. This is a
/// traversal-order bias towards the exit's quadrant, not a shortest-path
/// heuristic.
fn direction_order(pos: Dims, size: Dims) -> [CellWall; 4] {
    let ring = CellWall::get_in_order();
    let horizontal =
        size.0 as i64 * (pos.1 as i64 + 1) >= size.1 as i64 * (pos.0 as i64 + 1);
    let (start, step) = if horizontal { (1i32, 1i32) } else { (2, -1) };

    let mut order = ring;
    for (i, way) in order.iter_mut().enumerate() {
        *way = ring[(start + step * i as i32).rem_euclid(4) as usize];
    }
    order
}

/// Depth-first search for a simple path from the grid's entrance to its
/// exit, using an explicit frame stack instead of native recursion.
///
/// Returns the ordered entrance-to-exit coordinates, or `None` when the
/// exit is unreachable. A grid that was never generated (still fully
/// walled) or whose wall state was corrupted into asymmetry falls under a
/// relaxed contract: such grids report `None`, but that behavior is not a
/// guarantee. Finds *a* path, not necessarily the shortest one.
///
/// Visited flags are reset first and never cleared on backtrack, so a
/// failed branch is never retried; on the spanning trees produced by
/// generation this is exact, since only one simple path exists.
pub fn solve(
    grid: &mut Grid,
    renderer: &mut dyn Renderer,
) -> Result<Option<Vec<Dims>>, RenderError> {
    let size = grid.size();
    let target = grid.exit();

    grid.reset_visited();

    let start = grid.entrance();
    grid.cells[start].set_visited(true);
    renderer.on_cell_updated(start, grid.cells[start])?;

    let mut stack = vec![Frame::new(start, size)];

    while !stack.is_empty() {
        let top = stack.len() - 1;
        let from = stack[top].pos;

        if from == target {
            let path: Vec<_> = stack.iter().map(|frame| frame.pos).collect();
            debug!("solved, path of {} cells", path.len());
            return Ok(Some(path));
        }

        let mut advance = None;
        while stack[top].next < 4 {
            let way = stack[top].order[stack[top].next];
            stack[top].next += 1;

            let to = from + way.to_coord();
            let viable = grid.has_passage(from, way)
                && grid.get_cell(to).is_some_and(|cell| !cell.is_visited());
            if viable {
                advance = Some(to);
                break;
            }
        }

        match advance {
            Some(to) => {
                grid.cells[to].set_visited(true);
                renderer.on_cell_updated(to, grid.cells[to])?;
                renderer.on_move(from, to, false)?;
                renderer.on_tick()?;

                stack.push(Frame::new(to, size));
            }
            None => {
                // dead end for this search, unwind one level
                stack.pop();
                if let Some(parent) = stack.last() {
                    renderer.on_move(from, parent.pos, true)?;
                }
                renderer.on_tick()?;
            }
        }
    }

    debug!("no path from entrance to exit");
    Ok(None)
}
