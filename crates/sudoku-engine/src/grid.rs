use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Side length of the grid
pub const GRID_SIZE: usize = 9;
/// Side length of one 3x3 box
pub const BOX_SIZE: usize = 3;
/// Total number of cells
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A cell coordinate on the 9x9 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside [0,8].
    pub fn new(row: usize, col: usize) -> Self {
        assert!(
            row < GRID_SIZE && col < GRID_SIZE,
            "position ({}, {}) is outside the 9x9 grid",
            row,
            col
        );
        Self { row, col }
    }

    /// Checked constructor for untrusted indices
    pub fn try_new(row: usize, col: usize) -> Result<Self, EngineError> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Ok(Self { row, col })
        } else {
            Err(EngineError::InvalidIndex { row, col })
        }
    }

    /// All 81 positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(|i| Position {
            row: i / GRID_SIZE,
            col: i % GRID_SIZE,
        })
    }

    /// Top-left corner of the 3x3 box containing this position
    pub fn box_origin(&self) -> (usize, usize) {
        (
            self.row / BOX_SIZE * BOX_SIZE,
            self.col / BOX_SIZE * BOX_SIZE,
        )
    }
}

/// A 9x9 Sudoku grid. `None` is an empty cell; `Some(v)` holds a value in 1..=9.
///
/// The grid is a plain value with no identity beyond its contents: copying it
/// gives an independent board, and none of the query methods touch hidden
/// state, so repeated calls on an unmodified grid always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Option<u8>; GRID_SIZE]; GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// Create an empty grid
    pub fn empty() -> Self {
        Self {
            cells: [[None; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Get the value at a position
    pub fn get(&self, pos: Position) -> Option<u8> {
        self.cells[pos.row][pos.col]
    }

    /// Place a value at a position without legality checking.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside [1,9].
    pub fn set(&mut self, pos: Position, value: u8) {
        assert!(
            (1..=9).contains(&value),
            "cell value {} is outside 1..=9",
            value
        );
        self.cells[pos.row][pos.col] = Some(value);
    }

    /// Checked variant of [`Grid::set`]
    pub fn try_set(&mut self, pos: Position, value: u8) -> Result<(), EngineError> {
        if !(1..=9).contains(&value) {
            return Err(EngineError::InvalidValue(value));
        }
        self.cells[pos.row][pos.col] = Some(value);
        Ok(())
    }

    /// Empty a cell
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = None;
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        Position::all().filter(|&pos| self.get(pos).is_some()).count()
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        CELL_COUNT - self.filled_count()
    }

    /// Whether `value` could legally sit at `pos`: false iff the value already
    /// occurs anywhere in the row, the column, or the containing 3x3 box.
    ///
    /// The cell's own current value takes part in the scan. A caller
    /// re-validating an already-placed value must clear the cell first.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside [1,9].
    pub fn is_legal_placement(&self, pos: Position, value: u8) -> bool {
        assert!(
            (1..=9).contains(&value),
            "cell value {} is outside 1..=9",
            value
        );
        for i in 0..GRID_SIZE {
            if self.cells[pos.row][i] == Some(value) {
                return false;
            }
            if self.cells[i][pos.col] == Some(value) {
                return false;
            }
        }
        let (box_row, box_col) = pos.box_origin();
        for row in box_row..box_row + BOX_SIZE {
            for col in box_col..box_col + BOX_SIZE {
                if self.cells[row][col] == Some(value) {
                    return false;
                }
            }
        }
        true
    }

    /// Legal values for an empty cell, in ascending order. An occupied cell
    /// has no candidates.
    pub fn candidates(&self, pos: Position) -> Vec<u8> {
        if self.get(pos).is_some() {
            return Vec::new();
        }
        (1..=9)
            .filter(|&value| self.is_legal_placement(pos, value))
            .collect()
    }

    /// Whether no value repeats within any row, column, or box. Empty cells
    /// never conflict, so an empty grid is valid.
    pub fn is_valid(&self) -> bool {
        for i in 0..GRID_SIZE {
            let mut row_seen: u16 = 0;
            let mut col_seen: u16 = 0;
            for j in 0..GRID_SIZE {
                if let Some(value) = self.cells[i][j] {
                    let bit = 1 << value;
                    if row_seen & bit != 0 {
                        return false;
                    }
                    row_seen |= bit;
                }
                if let Some(value) = self.cells[j][i] {
                    let bit = 1 << value;
                    if col_seen & bit != 0 {
                        return false;
                    }
                    col_seen |= bit;
                }
            }
        }
        for box_row in (0..GRID_SIZE).step_by(BOX_SIZE) {
            for box_col in (0..GRID_SIZE).step_by(BOX_SIZE) {
                let mut seen: u16 = 0;
                for row in box_row..box_row + BOX_SIZE {
                    for col in box_col..box_col + BOX_SIZE {
                        if let Some(value) = self.cells[row][col] {
                            let bit = 1 << value;
                            if seen & bit != 0 {
                                return false;
                            }
                            seen |= bit;
                        }
                    }
                }
            }
        }
        true
    }

    /// Whether every cell is filled and no conflicts exist anywhere. A full
    /// grid containing a duplicate is not complete.
    pub fn is_complete(&self) -> bool {
        self.empty_count() == 0 && self.is_valid()
    }

    /// Parse an 81-character puzzle string. `'1'..='9'` fill cells; `'0'` and
    /// `'.'` leave them empty. Whitespace is ignored. Returns `None` on any
    /// other character or a wrong cell count.
    pub fn from_string(puzzle: &str) -> Option<Self> {
        let mut grid = Self::empty();
        let mut index = 0;
        for ch in puzzle.chars() {
            if ch.is_whitespace() {
                continue;
            }
            if index >= CELL_COUNT {
                return None;
            }
            match ch {
                '0' | '.' => {}
                '1'..='9' => {
                    grid.cells[index / GRID_SIZE][index % GRID_SIZE] = Some(ch as u8 - b'0');
                }
                _ => return None,
            }
            index += 1;
        }
        if index == CELL_COUNT {
            Some(grid)
        } else {
            None
        }
    }

    /// Compact 81-character form with `'0'` for empty cells; the inverse of
    /// [`Grid::from_string`].
    pub fn to_line_string(&self) -> String {
        Position::all()
            .map(|pos| match self.get(pos) {
                Some(value) => (b'0' + value) as char,
                None => '0',
            })
            .collect()
    }

    /// Comma-separated rows with a space marker for empty cells, the form the
    /// board is quoted in when handed to a language model as prompt context.
    pub fn to_board_rows(&self) -> String {
        let rows: Vec<String> = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Some(value) => value.to_string(),
                        None => " ".to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();
        rows.join("\n")
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..GRID_SIZE {
            if row % BOX_SIZE == 0 {
                writeln!(f, "+-------+-------+-------+")?;
            }
            for col in 0..GRID_SIZE {
                if col % BOX_SIZE == 0 {
                    write!(f, "| ")?;
                }
                match self.cells[row][col] {
                    Some(value) => write!(f, "{} ", value)?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "+-------+-------+-------+")
    }
}
