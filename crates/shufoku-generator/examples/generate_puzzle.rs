//! Example demonstrating Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` backed by the bundled seed corpus
//! - Generate a puzzle at a chosen difficulty
//! - Display the puzzle, solution, and seed
//! - Reproduce a puzzle from its seed or from a phrase
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty (easy, medium, or hard):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Reproduce a puzzle from a previously printed seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64 hex digits>
//! ```
//!
//! Derive the seed from a memorable phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase "daily puzzle 2024-06-01"
//! ```
//!
//! Generate a batch of puzzles in parallel and list their seeds:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 100
//! ```
//!
//! Load seed boards from a file instead of the bundled corpus:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seeds path/to/boards.txt
//! ```
//!
//! Set `RUST_LOG=debug` to log the individual generation steps.

use std::{
    path::{Path, PathBuf},
    process,
    str::FromStr as _,
};

use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use shufoku_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed, SeedCorpus};
use shufoku_solver::is_complete_and_valid;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(value: DifficultyArg) -> Self {
        match value {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Hard => Self::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty of the generated puzzles.
    #[arg(long, value_name = "DIFFICULTY", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Seed to reproduce a previous puzzle (64 hexadecimal digits).
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<String>,

    /// Phrase to derive the seed from.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,

    /// Seed board file to use instead of the bundled corpus.
    #[arg(long, value_name = "PATH")]
    seeds: Option<PathBuf>,

    /// Number of shuffle operations applied to the seed board.
    #[arg(long, value_name = "COUNT")]
    shuffle_ops: Option<usize>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let difficulty = Difficulty::from(args.difficulty);

    let corpus = load_corpus(args.seeds.as_deref());
    let generator = match args.shuffle_ops {
        Some(count) => PuzzleGenerator::new(&corpus).with_shuffle_ops(count),
        None => PuzzleGenerator::new(&corpus),
    };

    if args.count == 0 {
        eprintln!("--count must be at least 1.");
        process::exit(1);
    }

    if args.count == 1 {
        let seed = explicit_seed(&args).unwrap_or_else(PuzzleSeed::random);
        let puzzle = match generator.generate_with_seed(difficulty, seed) {
            Ok(puzzle) => puzzle,
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        };
        verify(&puzzle);
        print_puzzle(&puzzle);
        return;
    }

    if explicit_seed(&args).is_some() {
        eprintln!("--seed and --phrase reproduce a single puzzle; drop them or use --count 1.");
        process::exit(2);
    }

    let puzzles = (0..args.count)
        .into_par_iter()
        .map(|_| generator.generate(difficulty))
        .collect::<Result<Vec<_>, _>>();
    let puzzles = match puzzles {
        Ok(puzzles) => puzzles,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    println!("Generated {} {difficulty} puzzles:", puzzles.len());
    for puzzle in &puzzles {
        verify(puzzle);
        println!("  {}", puzzle.seed);
    }
}

fn load_corpus(path: Option<&Path>) -> SeedCorpus {
    match path {
        Some(path) => match SeedCorpus::from_file(path) {
            Ok(corpus) => corpus,
            Err(err) => {
                eprintln!("Failed to load seed boards from {}: {err}", path.display());
                process::exit(2);
            }
        },
        None => SeedCorpus::bundled(),
    }
}

fn explicit_seed(args: &Args) -> Option<PuzzleSeed> {
    if let Some(hex) = &args.seed {
        match PuzzleSeed::from_str(hex) {
            Ok(seed) => Some(seed),
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        }
    } else {
        args.phrase.as_deref().map(PuzzleSeed::from_phrase)
    }
}

fn verify(puzzle: &GeneratedPuzzle) {
    assert!(is_complete_and_valid(&puzzle.solution));
    assert!(puzzle.problem.is_sub_assignment_of(&puzzle.solution));
    assert_eq!(
        puzzle.problem.count_empty(),
        puzzle.difficulty.blank_cells()
    );
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Difficulty:");
    println!("  {}", puzzle.difficulty);
    println!();
    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
}
