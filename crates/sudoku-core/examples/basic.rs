//! Basic example of using the Sudoku engine

use sudoku_core::{Generator, Grid, Solver};

fn main() {
    // Generate a puzzle
    println!("Generating a puzzle...\n");
    let mut generator = Generator::new();
    let puzzle = generator.generate();

    println!("Generated puzzle:");
    println!("{}", puzzle);

    // Show some stats
    println!("Given cells: {}", puzzle.filled_count());
    println!("Empty cells: {}\n", puzzle.empty_count());

    // Solve it
    let solver = Solver::new();
    let result = solver.solve(&puzzle);
    match &result.solution {
        Some(solution) => {
            println!("Solution:");
            println!("{}", solution);
        }
        None => println!("No solution found (this shouldn't happen for a generated puzzle!)"),
    }
    println!("Solutions found: {}", result.count);
    println!("Search time: {:?}\n", result.elapsed);

    // Parse a puzzle from a string
    println!("--- Parsing a puzzle from string ---\n");
    let puzzle_string = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    if let Some(grid) = Grid::from_string(puzzle_string) {
        println!("Parsed puzzle:");
        println!("{}", grid);

        // Check uniqueness
        let solutions = solver.count_solutions(&grid, 2);
        println!("Number of solutions (up to 2): {}", solutions);
    }
}
