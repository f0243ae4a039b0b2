//! Backtracking solver and solution counter.
//!
//! The search visits cells in row-major order and tries digits in ascending
//! order, so results are deterministic for a given input grid. Counting is
//! capped: once the cap is reached every remaining branch is abandoned,
//! which makes uniqueness checks cheap on wildly ambiguous grids.

use crate::{Grid, Position};
use std::time::{Duration, Instant};

/// Default cap on counted solutions. Exact counts for 0 and 1; anything
/// ambiguous is reported as 2.
pub const SOLUTION_CAP: usize = 2;

/// Outcome of one [`Solver::solve`] call.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// First solution found in visitation order, `None` when `count == 0`.
    pub solution: Option<Grid>,
    /// Number of solutions found, capped at [`SOLUTION_CAP`].
    pub count: usize,
    /// Wall-clock duration of the search.
    pub elapsed: Duration,
}

impl SolveResult {
    pub fn is_unique(&self) -> bool {
        self.count == 1
    }
}

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle, reporting the first solution found, the capped
    /// solution count and the search duration. The input grid is left
    /// untouched; the search runs on a working copy.
    pub fn solve(&self, grid: &Grid) -> SolveResult {
        let start = Instant::now();
        let mut working = grid.clone();
        let mut count = 0;
        let mut solution = None;
        search(&mut working, 0, 0, &mut count, &mut solution, SOLUTION_CAP);
        SolveResult {
            solution,
            count,
            elapsed: start.elapsed(),
        }
    }

    /// Count solutions up to `limit`.
    pub fn count_solutions(&self, grid: &Grid, limit: usize) -> usize {
        let mut working = grid.clone();
        let mut count = 0;
        let mut solution = None;
        search(&mut working, 0, 0, &mut count, &mut solution, limit);
        count
    }

    /// Check if the puzzle has exactly one solution.
    pub fn has_unique_solution(&self, grid: &Grid) -> bool {
        self.count_solutions(grid, SOLUTION_CAP) == 1
    }
}

/// Recursive backtracking over cells in row-major order.
///
/// Every speculative assignment is cleared again before returning, so the
/// working grid comes back in its pre-call state on every path, including
/// early exits once `limit` is reached. Pre-filled cells are skipped without
/// validation; a conflicting given surfaces as count 0.
fn search(
    grid: &mut Grid,
    row: usize,
    col: usize,
    count: &mut usize,
    solution: &mut Option<Grid>,
    limit: usize,
) {
    if row == Grid::SIZE {
        *count += 1;
        if solution.is_none() {
            *solution = Some(grid.clone());
        }
        return;
    }
    if *count >= limit {
        return;
    }

    let (next_row, next_col) = if col == Grid::SIZE - 1 {
        (row + 1, 0)
    } else {
        (row, col + 1)
    };

    let pos = Position::new(row, col);
    if !grid.is_empty(pos) {
        search(grid, next_row, next_col, count, solution, limit);
        return;
    }

    for digit in 1..=Grid::SIZE as u8 {
        if grid.is_legal(pos, digit) {
            grid.set(pos, digit);
            search(grid, next_row, next_col, count, solution, limit);
            grid.set(pos, 0);
        }
    }
}
