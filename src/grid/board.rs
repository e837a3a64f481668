//! Rectangular boards and single-step movement on them.

use serde::Serialize;

use crate::types::{GraphError, GraphResult};

/// Board cell that cannot be entered.
pub const BLOCKED_CELL: char = 'X';

/// A `(row, column)` location on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The position one `direction` step away, or `None` if it would leave
    /// the non-negative quadrant.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let row = self.row.checked_add_signed(direction.d_row)?;
        let col = self.col.checked_add_signed(direction.d_col)?;
        Some(Position { row, col })
    }
}

/// A `(row, column)` offset describing one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: isize,
    pub d_col: isize,
}

impl Direction {
    pub const RIGHT: Direction = Direction::new(0, 1);
    pub const LEFT: Direction = Direction::new(0, -1);
    pub const UP: Direction = Direction::new(-1, 0);
    pub const DOWN: Direction = Direction::new(1, 0);

    pub const fn new(d_row: isize, d_col: isize) -> Self {
        Self { d_row, d_col }
    }

    /// Parse `"row,col"`, e.g. `"-1,0"`.
    pub fn parse(text: &str) -> GraphResult<Self> {
        let invalid = || GraphError::InvalidArgument(format!("direction '{}'", text));
        let (row, col) = text.split_once(',').ok_or_else(invalid)?;
        let d_row = row.trim().parse().map_err(|_| invalid())?;
        let d_col = col.trim().parse().map_err(|_| invalid())?;
        Ok(Self { d_row, d_col })
    }
}

/// A rectangular grid of cells; `'X'` cells are impassable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<char>>,
    width: usize,
}

impl Board {
    /// Build a board from text rows, one `char` per cell.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> GraphResult<Self> {
        let cells: Vec<Vec<char>> = rows.iter().map(|r| r.as_ref().chars().collect()).collect();
        Self::from_cells(cells)
    }

    /// Build a board from a grid of cells. All rows must share one width.
    pub fn from_cells(cells: Vec<Vec<char>>) -> GraphResult<Self> {
        let width = cells.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(GraphError::EmptyBoard);
        }
        for (row, line) in cells.iter().enumerate() {
            if line.len() != width {
                return Err(GraphError::RaggedBoard {
                    row,
                    expected: width,
                    got: line.len(),
                });
            }
        }
        Ok(Self { cells, width })
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// The cell at `pos`, or `None` off the board.
    pub fn cell(&self, pos: Position) -> Option<char> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Whether `pos` is on the board and not blocked.
    pub fn is_open(&self, pos: Position) -> bool {
        matches!(self.cell(pos), Some(c) if c != BLOCKED_CELL)
    }

    /// Rows as strings, for documents.
    pub fn rows(&self) -> Vec<String> {
        self.cells.iter().map(|r| r.iter().collect()).collect()
    }
}

/// Every position one step from `current` that stays on the board and is not blocked.
///
/// Results follow the order of `directions`.
pub fn next_moves(board: &Board, current: Position, directions: &[Direction]) -> Vec<Position> {
    directions
        .iter()
        .filter_map(|&d| current.step(d))
        .filter(|&pos| board.is_open(pos))
        .collect()
}
