use clap::Parser;
use itertools::Itertools;
use rand::{rngs::SmallRng, SeedableRng};
use statespace::search::problems::Puzzle;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version)]
/// Print random solvable sliding tiles puzzles, one per line.
struct Cli {
    #[arg(
        help = "The board width",
        short = 'n',
        long = "size",
        default_value_t = 3
    )]
    size: usize,
    #[arg(
        help = "The number of puzzles to print",
        short = 'k',
        long = "count",
        default_value_t = 1
    )]
    count: usize,
    #[arg(help = "The seed of the random generator", short = 's', long = "seed")]
    seed: Option<u64>,
    #[arg(help = "Print every puzzle as a grid", long = "grid")]
    grid: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.size < 2 {
        eprintln!("the board width must be at least 2");
        return ExitCode::FAILURE;
    }

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    for _ in 0..cli.count {
        let puzzle = match Puzzle::random_solvable(cli.size, &mut rng) {
            Ok(puzzle) => puzzle,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        };
        if cli.grid {
            println!("{}\n", puzzle);
        } else {
            println!("{}", puzzle.tiles().iter().join(" "));
        }
    }
    ExitCode::SUCCESS
}
