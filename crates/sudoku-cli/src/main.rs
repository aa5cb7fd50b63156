use clap::Parser;
use serde::Serialize;
use sudoku_engine::{Difficulty, Generator};

/// Generate Sudoku puzzles from the command line
#[derive(Parser)]
#[command(name = "sudoku-gen", version, about)]
struct Args {
    /// Target difficulty: easy, medium, or hard
    #[arg(short, long, default_value = "medium")]
    difficulty: Difficulty,

    /// Seed for reproducible generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of puzzles to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Also print the solved grid each puzzle was derived from
    #[arg(long)]
    solution: bool,

    /// Emit one JSON object per puzzle instead of rendered boards
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct PuzzleRecord {
    difficulty: Difficulty,
    puzzle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<String>,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> serde_json::Result<()> {
    let mut generator = match args.seed {
        Some(seed) => Generator::with_seed(seed),
        None => Generator::new(),
    };

    for i in 0..args.count {
        let (puzzle, solved) = generator.generate_with_solution(args.difficulty);

        if args.json {
            let record = PuzzleRecord {
                difficulty: args.difficulty,
                puzzle: puzzle.to_line_string(),
                solution: args.solution.then(|| solved.to_line_string()),
            };
            println!("{}", serde_json::to_string(&record)?);
            continue;
        }

        if args.count > 1 {
            println!("Puzzle {} ({})", i + 1, args.difficulty);
        } else {
            println!("Puzzle ({})", args.difficulty);
        }
        println!("{}", puzzle);
        println!(
            "Given cells: {}, empty cells: {}",
            puzzle.filled_count(),
            puzzle.empty_count()
        );
        if args.solution {
            println!("\nSolution:");
            println!("{}", solved);
        }
        if i + 1 < args.count {
            println!();
        }
    }

    Ok(())
}
