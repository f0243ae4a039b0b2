use clap::Parser;
use std::process::ExitCode;
use sudoku_core::{Generator, GeneratorConfig, Grid, SolveResult, Solver};

/// Generate and solve 9x9 Sudoku puzzles.
#[derive(Debug, Parser)]
#[command(name = "sudoku", version, about)]
struct Cli {
    /// Solve this puzzle instead of generating one: 81 cells in row-major
    /// order, `0` or `.` for blanks
    #[arg(long, value_name = "CELLS")]
    puzzle: Option<String>,

    /// Seed the generator for reproducible puzzles
    #[arg(long)]
    seed: Option<u64>,

    /// Number of random removal draws when blanking cells
    #[arg(long, default_value_t = 50)]
    removals: usize,

    /// Cap generation attempts instead of retrying until unique
    #[arg(long, value_name = "N")]
    max_attempts: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let solver = Solver::new();

    let puzzle = match &cli.puzzle {
        Some(cells) => match Grid::from_string(cells) {
            Some(grid) => grid,
            None => {
                eprintln!("error: puzzle must be 81 characters of 1-9, 0 or '.'");
                return ExitCode::from(2);
            }
        },
        None => {
            let config = GeneratorConfig {
                removals: cli.removals,
                max_attempts: cli.max_attempts,
            };
            let mut generator = match cli.seed {
                Some(seed) => Generator::with_config_and_seed(config, seed),
                None => Generator::with_config(config),
            };
            generator.generate()
        }
    };

    println!("Puzzle ({} givens):", puzzle.filled_count());
    println!("{}", puzzle);

    let result = solver.solve(&puzzle);
    report(&result);
    ExitCode::SUCCESS
}

fn report(result: &SolveResult) {
    match result.count {
        0 => println!("No solution."),
        1 => {
            println!("Unique solution:");
            println!("{}", result.solution.as_ref().expect("count 1 has a solution"));
        }
        _ => {
            println!("Ambiguous puzzle: more than one solution. First found:");
            println!("{}", result.solution.as_ref().expect("count >1 has a solution"));
        }
    }
    println!("Search time: {:?}", result.elapsed);
}
