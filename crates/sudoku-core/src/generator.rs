//! Puzzle generation.
//!
//! A candidate is built by shuffling a row-wise 1..=9 substrate (rows, then
//! columns, then 3x3 blocks) and carving random holes into it. The shuffle
//! stages do not preserve the Sudoku constraints on their own; candidates
//! that end up unsolvable or ambiguous are rejected by a uniqueness check
//! and the whole pipeline reruns from scratch.

use crate::{Grid, Position, Solver};

/// Configuration for puzzle generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of random removal draws when carving holes. Draws may hit the
    /// same cell twice, so the puzzle keeps at least `81 - removals` givens.
    pub removals: usize,
    /// Optional cap on generation attempts. `None` retries until a uniquely
    /// solvable puzzle comes out.
    pub max_attempts: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            removals: 50,
            max_attempts: None,
        }
    }
}

/// Sudoku puzzle generator.
pub struct Generator {
    config: GeneratorConfig,
    rng: SimpleRng,
    solution: Option<Grid>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: SimpleRng::new(),
            solution: None,
        }
    }

    /// Create a generator with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config_and_seed(GeneratorConfig::default(), seed)
    }

    /// Create a seeded generator with custom configuration.
    pub fn with_config_and_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: SimpleRng::with_seed(seed),
            solution: None,
        }
    }

    /// Generate a puzzle with exactly one solution.
    ///
    /// Retries the full shuffle-carve-validate pipeline until the
    /// uniqueness check passes. With a `max_attempts` cap the last
    /// candidate is returned as-is once the cap is exhausted.
    pub fn generate(&mut self) -> Grid {
        let solver = Solver::new();
        let mut attempts = 0;

        loop {
            let mut grid = self.shuffled_grid();
            self.carve_holes(&mut grid);

            let result = solver.solve(&grid);
            attempts += 1;
            let capped = self.config.max_attempts.is_some_and(|max| attempts >= max);
            if result.is_unique() || capped {
                // The validation solve of the accepted puzzle doubles as
                // its canonical solution.
                self.solution = result.solution;
                return grid;
            }
        }
    }

    /// Solution of the last accepted puzzle, recorded during its
    /// validation solve. `None` before the first [`Generator::generate`]
    /// call, or when a capped run handed back an unsolvable candidate.
    pub fn solution(&self) -> Option<&Grid> {
        self.solution.as_ref()
    }

    /// Build the shuffling substrate (every row 1..=9 in order) and run
    /// the three shuffle stages. The result is usually not a valid solved
    /// grid; the caller's uniqueness check sorts that out.
    fn shuffled_grid(&mut self) -> Grid {
        let mut grid = Grid::new();
        for pos in Position::all() {
            grid.set(pos, pos.col as u8 + 1);
        }

        for row in 0..Grid::SIZE {
            let cells: Vec<Position> = (0..Grid::SIZE).map(|col| Position::new(row, col)).collect();
            self.shuffle_cells(&mut grid, &cells);
        }
        for col in 0..Grid::SIZE {
            let cells: Vec<Position> = (0..Grid::SIZE).map(|row| Position::new(row, col)).collect();
            self.shuffle_cells(&mut grid, &cells);
        }
        for block in 0..Grid::SIZE {
            let base_row = block / Grid::BLOCK_SIZE * Grid::BLOCK_SIZE;
            let base_col = block % Grid::BLOCK_SIZE * Grid::BLOCK_SIZE;
            let cells: Vec<Position> = (0..Grid::SIZE)
                .map(|i| {
                    Position::new(
                        base_row + i / Grid::BLOCK_SIZE,
                        base_col + i % Grid::BLOCK_SIZE,
                    )
                })
                .collect();
            self.shuffle_cells(&mut grid, &cells);
        }
        grid
    }

    /// Permute the values held by `cells` in place.
    fn shuffle_cells(&mut self, grid: &mut Grid, cells: &[Position]) {
        let mut values: Vec<u8> = cells.iter().map(|&pos| grid.get(pos)).collect();
        self.shuffle(&mut values);
        for (&pos, &value) in cells.iter().zip(values.iter()) {
            grid.set(pos, value);
        }
    }

    /// Clear `removals` uniformly drawn cells. Repeated hits on the same
    /// cell are allowed; the draw count is fixed, the blank count is not.
    fn carve_holes(&mut self, grid: &mut Grid) {
        for _ in 0..self.config.removals {
            let row = self.rng.next_usize(Grid::SIZE);
            let col = self.rng.next_usize(Grid::SIZE);
            grid.set(Position::new(row, col), 0);
        }
    }

    /// Shuffle a slice using Fisher-Yates.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.rng.next_usize(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Simple PRNG, seeded from OS entropy unless a seed is given.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        // getrandom keeps seeding portable (including wasm targets).
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // PCG-like PRNG
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}
