//! Example that solves a board given on the command line.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_board -- \
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//! ```
//!
//! Print every decision the search makes along the way:
//!
//! ```sh
//! cargo run --example solve_board -- --trace \
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//! ```
//!
//! Cells are read in row-major order; `.`, `_`, or `0` mark empty cells
//! and whitespace is ignored.

use std::process;

use clap::Parser;
use shufoku_core::Board;
use shufoku_solver::{solve, solve_trace};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The board to solve, 81 cells in row-major order.
    #[arg(value_name = "BOARD")]
    board: String,

    /// Print each placement and retraction as the search makes it.
    #[arg(long)]
    trace: bool,
}

fn main() {
    let args = Args::parse();

    let mut board: Board = match args.board.parse() {
        Ok(board) => board,
        Err(err) => {
            eprintln!("Invalid board: {err}");
            process::exit(2);
        }
    };

    println!("Problem:");
    println!("  {board}");
    println!();

    let solved = if args.trace {
        run_traced(&mut board)
    } else {
        solve(&mut board)
    };

    if !solved {
        eprintln!("No solution exists for this board.");
        process::exit(1);
    }

    println!("Solution:");
    println!("  {board}");
}

fn run_traced(board: &mut Board) -> bool {
    let mut trace = solve_trace(board);
    for (i, step) in trace.by_ref().enumerate() {
        println!("{:>6}: {step}", i + 1);
    }
    let solved = trace.outcome() == Some(true);
    println!();
    solved
}
