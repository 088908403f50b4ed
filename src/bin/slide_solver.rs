use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use slide_solver::engine::Board;
use slide_solver::heuristics::HeuristicKind;
use slide_solver::logging::init_tracing;
use slide_solver::solver::{solve_with_strategy, Outcome, Strategy};
use slide_solver::utils::board_from_str_lines;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Breadth-first search
    Bfs,
    /// Depth-first search
    Dfs,
    /// A* search with the chosen heuristic
    Astar,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum HeuristicArg {
    Manhattan,
    Misplaced,
}

impl From<HeuristicArg> for HeuristicKind {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Manhattan => HeuristicKind::Manhattan,
            HeuristicArg::Misplaced => HeuristicKind::Misplaced,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Search strategy
    #[clap(short, long, value_enum, default_value_t = StrategyArg::Astar)]
    strategy: StrategyArg,

    /// Heuristic used by A*
    #[clap(long, value_enum, default_value_t = HeuristicArg::Manhattan)]
    heuristic: HeuristicArg,

    /// Reject boards with the wrong permutation parity before searching
    #[clap(long)]
    check_solvable: bool,

    /// Print every board along the solution
    #[clap(long)]
    show_boards: bool,

    /// Enable debug logging
    #[clap(short, long)]
    verbose: bool,

    /// Log filter, e.g. `trace` or `slide_solver=debug`
    #[clap(long)]
    log_level: Option<String>,

    /// Path to the puzzle file: one row per line, numbers separated by spaces, `.` for the gap
    puzzle_file: PathBuf,
}

impl Args {
    fn strategy(&self) -> Strategy {
        match self.strategy {
            StrategyArg::Bfs => Strategy::Bfs,
            StrategyArg::Dfs => Strategy::Dfs,
            StrategyArg::Astar => Strategy::AStar(self.heuristic.into()),
        }
    }
}

fn read_board_file(path: &Path) -> Result<Board> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read puzzle file {}", path.display()))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    board_from_str_lines(&lines)
        .with_context(|| format!("invalid puzzle in {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Err(e) = init_tracing(args.verbose, args.log_level.as_deref()) {
        eprintln!("Warning: could not initialise logging: {}", e);
    }

    let board = read_board_file(&args.puzzle_file)?;
    println!("Loaded puzzle from {}\n", args.puzzle_file.display());
    println!("{}\n", board);

    if args.check_solvable && !board.is_solvable() {
        println!("Puzzle cannot be solved.");
        return Ok(());
    }

    let strategy = args.strategy();
    if board.side() > 3 && strategy != Strategy::AStar(HeuristicKind::Manhattan) {
        tracing::warn!(%strategy, side = board.side(), "state space may be too large to search exhaustively");
    }

    println!("Searching with {}...", strategy);
    let start = Instant::now();
    let report = solve_with_strategy(&board, strategy);
    let elapsed = start.elapsed();

    match &report.outcome {
        Outcome::Solved(moves) => {
            let move_string = report.outcome.move_string().unwrap_or_default();
            println!(
                "Puzzle can be solved in {} moves: {}",
                moves.len(),
                move_string
            );
            if args.show_boards {
                let Some(boards) = board.apply_moves(moves.iter().copied()) else {
                    bail!("solver returned an illegal move sequence");
                };
                for (i, (direction, step)) in moves.iter().zip(&boards).enumerate() {
                    println!("\nMove {}: {}\n{}", i + 1, direction, step);
                }
            }
        }
        Outcome::Unsolvable => println!("Puzzle cannot be solved."),
    }
    println!(
        "States expanded: {} (largest frontier {}, {:.2?})",
        report.states_expanded, report.max_frontier_len, elapsed
    );

    Ok(())
}
