//! Basic example of using the Sudoku engine

use sudoku_engine::{Difficulty, Generator, Grid, Position};

fn main() {
    // Generate a puzzle
    println!("Generating a Medium difficulty puzzle...\n");
    let mut generator = Generator::new();
    let (puzzle, solution) = generator.generate_with_solution(Difficulty::Medium);

    println!("Generated puzzle:");
    println!("{}", puzzle);

    // Show some stats
    println!("Given cells: {}", puzzle.filled_count());
    println!("Empty cells: {}", puzzle.empty_count());

    // Candidates for the first empty cell
    if let Some(pos) = Position::all().find(|&p| puzzle.get(p).is_none()) {
        println!(
            "Candidates for r{}c{}: {:?}",
            pos.row + 1,
            pos.col + 1,
            puzzle.candidates(pos)
        );
    }

    println!("\nSolution:");
    println!("{}", solution);
    assert!(solution.is_complete());

    // Parse a puzzle from a string
    println!("\n--- Parsing a puzzle from string ---\n");
    let puzzle_string = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    if let Some(grid) = Grid::from_string(puzzle_string) {
        println!("Parsed puzzle:");
        println!("{}", grid);

        // The row text a caller would quote into an LLM prompt
        println!("Board as prompt context:");
        println!("{}", grid.to_board_rows());
    }
}
