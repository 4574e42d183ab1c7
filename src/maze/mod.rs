use std::{fmt, ops::Index, str::FromStr};

use thiserror::Error;

mod generate;

pub use generate::generate;

/// Column and row of a cell, `(x, y)`, with the origin in the top left corner
pub type Pos = (usize, usize);

/// The two states a cell of the maze can be in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Wall,
    Open,
}

impl Cell {
    const WALL_CHAR: char = '#';
    const OPEN_CHAR: char = '.';

    pub fn is_open(self) -> bool {
        self == Cell::Open
    }
}

/// A rectangular occupancy grid
///
/// Rooms sit on even coordinates and the odd coordinates between them are
/// either walls or carved passages. The entrance is fixed at `(0, 0)` and the
/// goal at the center, `(width / 2, height / 2)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// A grid of the given size made entirely of walls
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Wall; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The entrance, always `(0, 0)`
    pub fn start(&self) -> Pos {
        (0, 0)
    }

    /// The center cell
    pub fn goal(&self) -> Pos {
        (self.width / 2, self.height / 2)
    }

    pub fn in_bounds(&self, (x, y): Pos) -> bool {
        x < self.width && y < self.height
    }

    /// The cell at `pos`, or `None` if it lies outside the grid
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.in_bounds(pos)
            .then(|| self.cells[pos.1 * self.width + pos.0])
    }

    pub fn is_open(&self, pos: Pos) -> bool {
        self.get(pos).is_some_and(Cell::is_open)
    }

    /// Positions of every open cell in row-major order
    pub fn open_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_open())
            .map(|(i, _)| (i % self.width, i / self.width))
    }

    /// Overwrite the cell at `pos`
    ///
    /// **Panics** if `pos` is out of bounds
    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) {
        assert!(self.in_bounds(pos), "{pos:?} is outside the grid");
        self.cells[pos.1 * self.width + pos.0] = cell;
    }

    /// Rows of the grid from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }
}

impl Index<Pos> for Grid {
    type Output = Cell;

    fn index(&self, (x, y): Pos) -> &Self::Output {
        assert!(self.in_bounds((x, y)), "{:?} is outside the grid", (x, y));
        &self.cells[y * self.width + x]
    }
}

impl fmt::Display for Grid {
    /// `#` for walls and `.` for open cells, one line per row
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                let c = match cell {
                    Cell::Wall => Cell::WALL_CHAR,
                    Cell::Open => Cell::OPEN_CHAR,
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Why a textual grid could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridParseError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected character {found:?} at ({x}, {y})")]
    UnknownCell { found: char, x: usize, y: usize },
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parse the same `#`/`.` form that [`Display`](fmt::Display) writes
    ///
    /// Blank lines and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>();

        let width = lines.first().ok_or(GridParseError::Empty)?.chars().count();
        let mut cells = Vec::with_capacity(width * lines.len());

        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridParseError::Ragged {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, c) in line.chars().enumerate() {
                cells.push(match c {
                    Cell::WALL_CHAR => Cell::Wall,
                    Cell::OPEN_CHAR => Cell::Open,
                    found => return Err(GridParseError::UnknownCell { found, x, y }),
                });
            }
        }

        Ok(Self {
            width,
            height: lines.len(),
            cells,
        })
    }
}
