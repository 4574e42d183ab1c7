use rand::{seq::SliceRandom, Rng};

use super::{Cell, Grid, Pos};

/// Offsets to the rooms two cells away in each direction
const ROOM_OFFSETS: [(isize, isize); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

/// Carve a perfect maze with a randomized depth-first backtracker
///
/// Rooms live on even coordinates. From the room on top of the stack the four
/// rooms two cells away are tried in a freshly shuffled order, and the first
/// one that is in bounds and unvisited is opened together with the passage
/// leading to it. A room with no such neighbor is popped. The carved cells form
/// a spanning tree over the rooms, so exactly one path joins any two of them.
///
/// The entrance and the goal are forced open afterwards. On sizes where the
/// center is not a room this can add a second local passage.
///
/// Dimensions are meant to be odd and at least 3; other sizes produce a
/// degenerate but valid grid.
pub fn generate<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Grid {
    let mut grid = Grid::new(width, height);
    let start = grid.start();
    if !grid.in_bounds(start) {
        return grid;
    }

    let index = |(x, y): Pos| y * width + x;
    let mut visited = vec![false; width * height];
    let mut stack = vec![start];
    visited[index(start)] = true;
    grid.set(start, Cell::Open);

    while let Some(&(x, y)) = stack.last() {
        let mut offsets = ROOM_OFFSETS;
        offsets.shuffle(rng);

        let next = offsets.iter().find_map(|&(dx, dy)| {
            let pos = (x.checked_add_signed(dx)?, y.checked_add_signed(dy)?);
            (grid.in_bounds(pos) && !visited[index(pos)]).then_some(pos)
        });

        match next {
            Some((nx, ny)) => {
                visited[index((nx, ny))] = true;
                grid.set((nx, ny), Cell::Open);
                grid.set(((x + nx) / 2, (y + ny) / 2), Cell::Open);
                stack.push((nx, ny));
            }
            None => {
                stack.pop();
            }
        }
    }

    grid.set(start, Cell::Open);
    grid.set(grid.goal(), Cell::Open);

    log::debug!(
        "generated {width}x{height} maze with {} open cells",
        grid.open_cells().count()
    );

    grid
}
