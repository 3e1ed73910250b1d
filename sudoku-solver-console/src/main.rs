use clap::{Parser, Subcommand};
use colored::Colorize;
use std::sync::Arc;
use std::time::Instant;

use standard_constraints::chess_constraint::ChessConstraint;
use standard_constraints::non_repeat_constraint::NonRepeatConstraint;
use sudoku_solver_lib::prelude::*;

#[derive(Debug, Parser)]
#[clap(name = "Sudoku Solver")]
#[clap(about = "Sudoku variant solver utility.")]
#[clap(author, version, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Command,

    /// Board size (9 for a standard puzzle).
    #[clap(long, global = true, default_value_t = 9)]
    size: usize,

    /// Givens in row-major order, 0 or any non-digit for an empty cell.
    #[clap(long, global = true)]
    givens: Option<String>,

    /// Treat the board as anti-king: no two cells a king's move apart may repeat.
    #[clap(long, global = true, action = clap::ArgAction::SetTrue)]
    anti_king: bool,

    /// Treat the board as anti-knight: no two cells a knight's move apart may repeat.
    #[clap(long, global = true, action = clap::ArgAction::SetTrue)]
    anti_knight: bool,

    /// Add the two main diagonals as non-repeating houses (Sudoku X).
    #[clap(long, global = true, action = clap::ArgAction::SetTrue)]
    diagonals: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the logical solver and print the steps it took.
    Logical,
    /// Find a single solution via brute force.
    Solve,
    /// Count solutions, optionally capped.
    Count {
        /// Stop once this many solutions are found (0 means uncapped).
        #[clap(long, default_value_t = 2)]
        max: usize,
    },
    /// Compute the true candidates: the union of values appearing in any solution.
    Candidates,
}

fn build_solver(args: &Args) -> Result<Solver, SolverError> {
    let mut builder = SolverBuilder::new(args.size);

    if args.diagonals {
        builder = builder.with_constraint(Arc::new(NonRepeatConstraint::from_diagonalp(args.size)));
        builder = builder.with_constraint(Arc::new(NonRepeatConstraint::from_diagonaln(args.size)));
    }
    if args.anti_king {
        builder = builder.with_constraint(Arc::new(ChessConstraint::anti_king()));
    }
    if args.anti_knight {
        builder = builder.with_constraint(Arc::new(ChessConstraint::anti_knight()));
    }

    if let Some(givens) = &args.givens {
        builder = builder.with_givens_string(givens);
    }

    builder.build()
}

fn print_banner() {
    const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("{} {}", "Sudoku Solver".to_owned().green(), VERSION);
    println!("{AUTHOR}");
    println!("Sudoku variant solver utility.");
    println!();
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    print_banner();

    let solver = match build_solver(&args) {
        Ok(solver) => solver,
        Err(err) => {
            eprintln!("{} {}", "Error:".red(), err);
            std::process::exit(1);
        }
    };

    match args.command {
        Command::Logical => {
            let mut solver = solver;
            let start = Instant::now();
            let result = solver.run_logical_solve();
            log::info!("logical solve finished in {:?}", start.elapsed());
            println!("{}", result);
            println!();
            println!("{}", solver.board());
        }
        Command::Solve => {
            let start = Instant::now();
            let result = solver.find_first_solution();
            log::info!("brute-force solve finished in {:?}", start.elapsed());
            if result.is_solved() {
                println!("{}", result);
            } else {
                println!("{}", "No solution".red());
            }
        }
        Command::Count { max } => {
            let start = Instant::now();
            let result = solver.find_solution_count(max, None, None);
            log::info!("solution count finished in {:?}", start.elapsed());
            match result.count() {
                Some(count) if result.is_exact_count() => println!("Exact solution count: {}", count),
                Some(count) => println!("At least {} solutions", count),
                None => println!("{}", "No solutions".red()),
            }
        }
        Command::Candidates => {
            let start = Instant::now();
            let result = solver.find_true_candidates();
            log::info!("true candidates finished in {:?}", start.elapsed());
            if result.is_solved() {
                println!("{}", result);
            } else {
                println!("{}", "No solutions".red());
            }
        }
    }
}
