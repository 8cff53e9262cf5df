use clap::Parser;
use statespace::search::{
    heuristics::{ManhattanDistance, MisplacedTiles},
    problems::{Puzzle, SlidingTiles},
    Heuristic,
};
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(help = "The puzzle, row by row with 0 for the blank")]
    puzzle: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let puzzle: Puzzle = match args.puzzle.parse() {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("invalid puzzle: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("{}", puzzle);
    println!("Solvable: {}", SlidingTiles::is_solvable(&puzzle));

    let problem = match Puzzle::solved(puzzle.width())
        .and_then(|goal| SlidingTiles::new(puzzle.clone(), goal))
    {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let heuristics: [(&str, Box<dyn Heuristic<SlidingTiles>>); 2] = [
        ("Misplaced tiles", Box::new(MisplacedTiles::new())),
        ("Manhattan distance", Box::new(ManhattanDistance::new())),
    ];
    for (name, mut heuristic) in heuristics {
        match heuristic.evaluate(&puzzle, &problem) {
            Ok(value) => println!("{}: {}", name, value),
            Err(e) => eprintln!("{}: {}", name, e),
        }
    }
    ExitCode::SUCCESS
}
