//! Core Sudoku engine.
//!
//! Provides the 9x9 [`Grid`] data model with row/column/block legality
//! checking, a backtracking [`Solver`] that doubles as a solution counter
//! for uniqueness checks, and a shuffle-and-carve [`Generator`] that only
//! emits puzzles with exactly one solution.

mod generator;
mod solver;

pub use generator::{Generator, GeneratorConfig};
pub use solver::{SolveResult, Solver, SOLUTION_CAP};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate on the 9x9 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < Grid::SIZE && col < Grid::SIZE);
        Self { row, col }
    }

    /// Index of the 3x3 block containing this position, 0..9 in row-major
    /// block order.
    pub fn block_index(&self) -> usize {
        (self.row / Grid::BLOCK_SIZE) * Grid::BLOCK_SIZE + self.col / Grid::BLOCK_SIZE
    }

    /// Iterate every position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..Grid::SIZE).flat_map(|row| (0..Grid::SIZE).map(move |col| Position { row, col }))
    }
}

/// A 9x9 Sudoku grid. Cells hold 0 for empty or a digit 1-9.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; Grid::SIZE]; Grid::SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Side length of the grid.
    pub const SIZE: usize = 9;
    /// Side length of one block; `BLOCK_SIZE * BLOCK_SIZE == SIZE`.
    pub const BLOCK_SIZE: usize = 3;

    /// Create an empty grid.
    pub fn new() -> Self {
        Self {
            cells: [[0; Grid::SIZE]; Grid::SIZE],
        }
    }

    /// Parse a grid from an 81-character string in row-major order.
    /// `0` and `.` denote empty cells. Returns `None` on any other
    /// character or a wrong length.
    pub fn from_string(s: &str) -> Option<Self> {
        let mut grid = Self::new();
        let mut positions = Position::all();
        for ch in s.chars() {
            let pos = positions.next()?;
            match ch {
                '0' | '.' => {}
                '1'..='9' => grid.cells[pos.row][pos.col] = ch as u8 - b'0',
                _ => return None,
            }
        }
        // Reject short strings too.
        if positions.next().is_some() {
            return None;
        }
        Some(grid)
    }

    /// Compact 81-character form, `0` for empty cells.
    pub fn to_line(&self) -> String {
        Position::all()
            .map(|pos| (b'0' + self.cells[pos.row][pos.col]) as char)
            .collect()
    }

    /// Value at `pos`; 0 means empty.
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Set `pos` to `value` (0 clears the cell).
    pub fn set(&mut self, pos: Position, value: u8) {
        debug_assert!(value as usize <= Grid::SIZE);
        self.cells[pos.row][pos.col] = value;
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.cells[pos.row][pos.col] == 0
    }

    /// Number of filled (non-zero) cells.
    pub fn filled_count(&self) -> usize {
        Position::all().filter(|&pos| !self.is_empty(pos)).count()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        Grid::SIZE * Grid::SIZE - self.filled_count()
    }

    /// Check whether placing `digit` at `pos` respects the row, column and
    /// block constraints. The cell at `pos` itself is ignored, so a solved
    /// grid's own digit checks clean against the rest of its units.
    pub fn is_legal(&self, pos: Position, digit: u8) -> bool {
        debug_assert!((1..=Grid::SIZE as u8).contains(&digit));

        for col in 0..Grid::SIZE {
            if col != pos.col && self.cells[pos.row][col] == digit {
                return false;
            }
        }
        for row in 0..Grid::SIZE {
            if row != pos.row && self.cells[row][pos.col] == digit {
                return false;
            }
        }
        let block_row = pos.row / Grid::BLOCK_SIZE * Grid::BLOCK_SIZE;
        let block_col = pos.col / Grid::BLOCK_SIZE * Grid::BLOCK_SIZE;
        for row in block_row..block_row + Grid::BLOCK_SIZE {
            for col in block_col..block_col + Grid::BLOCK_SIZE {
                if (row, col) != (pos.row, pos.col) && self.cells[row][col] == digit {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..Grid::SIZE {
            if row % Grid::BLOCK_SIZE == 0 && row != 0 {
                writeln!(f, "------+-------+------")?;
            }
            for col in 0..Grid::SIZE {
                if col % Grid::BLOCK_SIZE == 0 && col != 0 {
                    write!(f, "| ")?;
                }
                match self.cells[row][col] {
                    0 => write!(f, ". ")?,
                    v => write!(f, "{} ", v)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A valid solved grid: each row is a cyclic shift of 1..=9.
    pub(crate) fn cyclic_solved_grid() -> Grid {
        let mut grid = Grid::new();
        for pos in Position::all() {
            let shift = pos.row * 3 + pos.row / 3;
            grid.set(pos, ((shift + pos.col) % 9) as u8 + 1);
        }
        grid
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new();
        assert_eq!(grid.filled_count(), 0);
        assert_eq!(grid.empty_count(), 81);
    }

    #[test]
    fn block_index_partitions_cells() {
        assert_eq!(Position::new(0, 0).block_index(), 0);
        assert_eq!(Position::new(2, 8).block_index(), 2);
        assert_eq!(Position::new(4, 4).block_index(), 4);
        assert_eq!(Position::new(8, 0).block_index(), 6);

        let mut counts = [0usize; 9];
        for pos in Position::all() {
            counts[pos.block_index()] += 1;
        }
        assert!(counts.iter().all(|&c| c == 9));
    }

    #[test]
    fn parse_round_trip() {
        let grid = cyclic_solved_grid();
        let line = grid.to_line();
        assert_eq!(line.len(), 81);
        assert_eq!(Grid::from_string(&line), Some(grid));
    }

    #[test]
    fn parse_accepts_dots_for_blanks() {
        let mut line = cyclic_solved_grid().to_line();
        line.replace_range(0..1, ".");
        let grid = Grid::from_string(&line).unwrap();
        assert!(grid.is_empty(Position::new(0, 0)));
        assert_eq!(grid.filled_count(), 80);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(Grid::from_string("12345"), None);
        assert_eq!(Grid::from_string(&"x".repeat(81)), None);
        assert_eq!(Grid::from_string(&"1".repeat(82)), None);
    }

    #[test]
    fn solved_grid_digits_check_clean_against_their_own_units() {
        let grid = cyclic_solved_grid();
        for pos in Position::all() {
            assert!(grid.is_legal(pos, grid.get(pos)), "conflict at {:?}", pos);
        }
    }

    #[test]
    fn row_duplicate_is_illegal() {
        let mut grid = Grid::new();
        grid.set(Position::new(4, 2), 7);
        // Same row, any other column.
        assert!(!grid.is_legal(Position::new(4, 8), 7));
        // Same column.
        assert!(!grid.is_legal(Position::new(0, 2), 7));
        // Same block.
        assert!(!grid.is_legal(Position::new(5, 1), 7));
        // Unrelated cell.
        assert!(grid.is_legal(Position::new(0, 8), 7));
        // A different digit next to the 7 is fine.
        assert!(grid.is_legal(Position::new(4, 3), 3));
    }

    #[test]
    fn display_has_block_separators() {
        let text = cyclic_solved_grid().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[3].starts_with("------+"));
        assert!(lines[7].starts_with("------+"));
        assert!(lines[0].contains('|'));
    }

    #[test]
    fn grid_serializes() {
        let grid = cyclic_solved_grid();
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }
}
