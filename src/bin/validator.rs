use clap::Parser;
use statespace::search::{
    problems::{Move, Puzzle, SlidingTiles},
    validate, Plan, Verbosity,
};
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Check that a puzzle is a valid, solvable board and optionally that a
/// sequence of moves solves it.
struct Cli {
    #[arg(help = "The puzzle, row by row with 0 for the blank")]
    puzzle: String,
    #[arg(
        help = "The moves of the blank to validate, for example \"RRU\" or \"up, left\"",
        short = 'p',
        long = "plan",
        id = "PLAN"
    )]
    plan: Option<String>,
    #[arg(
        help = "The goal board, the solved board of the same size if omitted",
        short = 'g',
        long = "goal",
        id = "GOAL"
    )]
    goal: Option<String>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let puzzle: Puzzle = match cli.puzzle.parse() {
        Ok(puzzle) => puzzle,
        Err(e) => {
            error!("invalid puzzle: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let goal = match &cli.goal {
        Some(text) => match text.parse() {
            Ok(goal) => goal,
            Err(e) => {
                error!("invalid goal: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => match Puzzle::solved(puzzle.width()) {
            Ok(goal) => goal,
            Err(e) => {
                error!("invalid goal: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };
    let problem = match SlidingTiles::new(puzzle.clone(), goal) {
        Ok(problem) => problem,
        Err(e) => {
            error!("invalid problem: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("puzzle is valid");

    println!("{}", puzzle);
    let solvable = SlidingTiles::is_solvable(&puzzle);
    println!("Solvable: {}", solvable);

    let Some(plan) = &cli.plan else {
        return if solvable {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    };
    let plan: Plan<Move> = match plan.parse() {
        Ok(plan) => plan,
        Err(e) => {
            error!("invalid plan: {}", e);
            return ExitCode::FAILURE;
        }
    };
    match validate(&plan, &problem) {
        Ok(cost) => {
            println!("Plan is valid, cost {}", cost);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Plan is invalid: {}", e);
            ExitCode::FAILURE
        }
    }
}
