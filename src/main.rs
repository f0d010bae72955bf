//! Twister Puzzle Solver
//!
//! Finds a way to fold a chain of 27 twistable cubes into a 3x3x3 cube,
//! prints the fold and the moves to make it by hand, and can show the result
//! in an interactive 3D viewer.

mod visualization;

use clap::{Args, Parser, Subcommand};

use twister::{report, solver, SearchOutcome, Solution};

/// Solves the twister chain puzzle and prints or visualizes the solution.
#[derive(Parser)]
#[command(name = "twister")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the puzzle and print the full report.
    Solve(SolveArgs),
    /// Print only the moves for folding the chain by hand.
    Moves,
    /// Show the solution in an interactive 3D viewer.
    Display,
}

#[derive(Args, Default)]
struct SolveArgs {
    /// Search the starting placements concurrently.
    #[arg(long)]
    parallel: bool,
    /// Print search statistics.
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve(args)) => run_solve(&args),
        Some(Command::Moves) => run_moves(),
        Some(Command::Display) => run_display(),
        // default: solve sequentially and print the report
        None => run_solve(&SolveArgs::default()),
    }
}

/// Runs the search, reporting on stderr when nothing folds.
fn search(parallel: bool) -> Option<Solution> {
    let outcome = if parallel {
        solver::solve_parallel()
    } else {
        solver::solve()
    };

    match outcome {
        SearchOutcome::Solved(solution) => Some(solution),
        SearchOutcome::Exhausted(stats) => {
            eprintln!("No solution found ({stats})");
            None
        }
    }
}

/// Solves the puzzle and prints every view of the solution.
fn run_solve(args: &SolveArgs) {
    let Some(solution) = search(args.parallel) else {
        return;
    };

    if let Err(e) = solution.verify() {
        eprintln!("Search produced an invalid fold: {}", e);
        return;
    }

    let start = solver::starting_placements()[solution.start_index()];
    println!("Found a solution starting at {}", start.location);
    println!();
    print!("{}", report::format_solution(&solution));

    if args.stats {
        println!();
        println!("Search: {}", solution.stats());
    }
}

/// Prints the folding moves only.
fn run_moves() {
    if let Some(solution) = search(false) {
        print!("{}", report::format_moves(&solution));
    }
}

/// Solves the puzzle and opens the viewer.
fn run_display() {
    if let Some(solution) = search(false) {
        println!("Controls: Up/Down add/remove cubes, Left/Right explode, R reset");
        visualization::display(solution);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_report() {
        let solution = solver::solve().into_solution().unwrap();
        insta::assert_snapshot!(report::format_solution(&solution));
    }

    #[test]
    fn test_cli_parses_solve_flags() {
        let cli = Cli::parse_from(["twister", "solve", "--parallel", "--stats"]);
        match cli.command {
            Some(Command::Solve(args)) => {
                assert!(args.parallel);
                assert!(args.stats);
            }
            _ => panic!("expected the solve subcommand"),
        }
        assert!(Cli::parse_from(["twister"]).command.is_none());
    }
}
