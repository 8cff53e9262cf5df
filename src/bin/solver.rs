use clap::Parser;
use itertools::Itertools;
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;
use statespace::search::{
    heuristics::HeuristicName,
    problems::{Puzzle, SlidingTiles},
    search_engines::{SearchEngineName, SearchResult},
    validate, ExpansionListener, SolverConfig, Verbosity,
};
use std::{cell::RefCell, path::PathBuf, process::ExitCode, rc::Rc};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Solve a sliding tiles puzzle.
struct Cli {
    #[arg(help = "The puzzle to solve, row by row with 0 for the blank, for \
        example 123456078 or \"1 2 3 4 5 6 0 7 8\". A random solvable puzzle is \
        used if omitted.")]
    puzzle: Option<String>,
    #[arg(
        help = "The board width of the random puzzle",
        short = 'n',
        long = "size",
        default_value_t = 3
    )]
    size: usize,
    #[arg(help = "The seed for the random puzzle", long = "seed")]
    seed: Option<u64>,
    #[arg(
        help = "A TOML config file, flags given on the command line override it",
        short = 'f',
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search engine to use [default: astar]",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    search_engine_name: Option<SearchEngineName>,
    #[arg(
        value_enum,
        help = "The heuristic to use [default: manhattan]",
        long = "heuristic",
        id = "HEURISTIC"
    )]
    heuristic_name: Option<HeuristicName>,
    #[arg(help = "Run a tree search, expanding repeated states again", long = "tree-search")]
    tree_search: bool,
    #[arg(help = "The time limit, for example \"30s\" or \"5m\"", long = "time-limit")]
    time_limit: Option<String>,
    #[arg(help = "The maximum number of nodes to expand", long = "expansion-limit")]
    expansion_limit: Option<usize>,
    #[arg(help = "The memory limit in MB", long = "memory-limit")]
    memory_limit_mb: Option<usize>,
    #[arg(
        value_enum,
        help = "The verbosity level [default: normal]",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY"
    )]
    verbosity: Option<Verbosity>,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
    #[arg(help = "Print the result as JSON", long = "json")]
    json: bool,
}

#[derive(Serialize)]
struct SolverOutput {
    puzzle: Puzzle,
    engine: SearchEngineName,
    heuristic: HeuristicName,
    result: &'static str,
    cost: Option<f64>,
    moves: Option<String>,
    expanded_nodes: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match SolverConfig::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => SolverConfig::default(),
    };
    apply_overrides(&cli, &mut config);

    let level: tracing::Level = config.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let puzzle = match &cli.puzzle {
        Some(text) => match Puzzle::parse_solvable(text) {
            Ok(puzzle) => puzzle,
            Err(e) => {
                error!("invalid puzzle: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None if cli.size < 2 => {
            error!("a random puzzle needs a board width of at least 2");
            return ExitCode::FAILURE;
        }
        None => {
            let mut rng = match cli.seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_entropy(),
            };
            match Puzzle::random_solvable(cli.size, &mut rng) {
                Ok(puzzle) => puzzle,
                Err(e) => {
                    error!("unable to generate a puzzle: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    };
    info!(puzzle = %puzzle.tiles().iter().join(","));

    let problem = match Puzzle::solved(puzzle.width())
        .and_then(|goal| SlidingTiles::new(puzzle.clone(), goal))
    {
        Ok(problem) => problem,
        Err(e) => {
            error!("invalid puzzle: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut engine = match config.create_engine() {
        Ok(engine) => engine,
        Err(e) => {
            error!("invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let counter = Rc::new(RefCell::new(ExpansionListener::new()));
    engine.add_listener(counter.clone());

    let result = match engine.find_solution(&problem) {
        Ok(result) => result,
        Err(e) => {
            error!("search failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let expanded_nodes = counter.borrow().get_count();

    let mut output = SolverOutput {
        puzzle,
        engine: config.engine,
        heuristic: config.heuristic,
        result: result_name(&result),
        cost: None,
        moves: None,
        expanded_nodes,
    };

    let exit_code = match result.into_solution() {
        Some(solution) => {
            let plan = solution.action_sequence();
            info!("validating plan");
            match validate(&plan, &problem) {
                Ok(cost) => info!(plan_cost = cost.into_inner(), "plan is valid"),
                Err(e) => {
                    error!("plan is invalid: {}", e);
                    return ExitCode::FAILURE;
                }
            }
            output.cost = Some(solution.get_path_cost().into_inner());
            output.moves = Some(plan.to_string());
            ExitCode::SUCCESS
        }
        None => {
            info!("no plan found");
            ExitCode::FAILURE
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("unable to serialise result: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", output.puzzle);
        println!("Result: {}", output.result);
        if let (Some(cost), Some(moves)) = (&output.cost, &output.moves) {
            println!("Moves: {}", moves);
            println!("Cost: {}", cost);
        }
        println!("Expanded nodes: {}", output.expanded_nodes);
    }

    exit_code
}

fn apply_overrides(cli: &Cli, config: &mut SolverConfig) {
    if let Some(search_engine_name) = cli.search_engine_name {
        config.engine = search_engine_name;
    }
    if let Some(heuristic_name) = cli.heuristic_name {
        config.heuristic = heuristic_name;
    }
    if cli.tree_search {
        config.graph_search = false;
    }
    if let Some(time_limit) = &cli.time_limit {
        config.time_limit = Some(time_limit.clone());
    }
    if let Some(expansion_limit) = cli.expansion_limit {
        config.expansion_limit = Some(expansion_limit);
    }
    if let Some(memory_limit_mb) = cli.memory_limit_mb {
        config.memory_limit_mb = Some(memory_limit_mb);
    }
    if let Some(verbosity) = cli.verbosity {
        config.verbosity = verbosity;
    }
}

fn result_name<S, A>(result: &SearchResult<S, A>) -> &'static str {
    match result {
        SearchResult::Success(_) => "success",
        SearchResult::NoSolution => "no-solution",
        SearchResult::TimeLimitExceeded => "time-limit-exceeded",
        SearchResult::ExpansionLimitExceeded => "expansion-limit-exceeded",
        SearchResult::MemoryLimitExceeded => "memory-limit-exceeded",
    }
}
