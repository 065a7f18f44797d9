//! CLI entry point for the puzzle solver.
//!
//! Usage:
//!   puzzle-solver solve <puzzle.json> [options]
//!   puzzle-solver solve --stdin [options]
//!
//! Options:
//!   --method <dfs|bfs>   Search strategy (default: bfs)
//!
//! The puzzle JSON is a tagged object, e.g.:
//!   {"type": "word_chain", "start": "on", "target": "no",
//!    "vocabulary": ["on", "no", "oo"]}
//!   {"type": "sliding_tiles", "start": [["1", "*"], ["3", "2"]],
//!    "target": [["1", "2"], ["3", "*"]]}

mod puzzle;
mod sliding_tiles;
mod solver;
mod tree;
mod word_chain;

use std::collections::HashSet;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use puzzle::Puzzle;
use sliding_tiles::SlidingTilesPuzzle;
use solver::{breadth_first_search, depth_first_search};
use tree::SearchTree;
use word_chain::WordChainPuzzle;

#[derive(Parser)]
#[command(name = "puzzle-solver")]
#[command(about = "Depth-first and breadth-first solver for state-space puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle and print the solution path
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Search strategy
        #[arg(long, value_enum, default_value = "bfs")]
        method: Method,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Method {
    /// First solution found in enumeration order
    Dfs,
    /// Shortest solution path
    Bfs,
}

impl Method {
    fn name(self) -> &'static str {
        match self {
            Method::Dfs => "dfs",
            Method::Bfs => "bfs",
        }
    }
}

/// Puzzle description accepted on the command line
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum PuzzleInput {
    WordChain {
        start: String,
        target: String,
        vocabulary: HashSet<String>,
    },
    SlidingTiles {
        start: Vec<Vec<char>>,
        target: Vec<Vec<char>>,
    },
}

/// Output format for the solve result
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<String>>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            method,
        } => {
            // Read puzzle JSON
            let json_content = if stdin {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .expect("Failed to read from stdin");
                buffer
            } else if let Some(path) = file {
                fs::read_to_string(&path)
                    .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
            } else {
                eprintln!("Error: Must provide either a file path or --stdin");
                std::process::exit(1);
            };

            // Parse puzzle
            let input: PuzzleInput = match serde_json::from_str(&json_content) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Error parsing puzzle JSON: {}", e);
                    std::process::exit(1);
                }
            };

            // Run the chosen search
            let output = match input {
                PuzzleInput::WordChain {
                    start,
                    target,
                    vocabulary,
                } => solve(method, WordChainPuzzle::new(start, target, vocabulary)),
                PuzzleInput::SlidingTiles { start, target } => {
                    solve(method, SlidingTilesPuzzle::new(start, target))
                }
            };

            // Print JSON output
            println!("{}", serde_json::to_string_pretty(&output).unwrap());

            // Exit with appropriate code
            if output.solved {
                std::process::exit(0);
            } else {
                std::process::exit(1);
            }
        }
    }
}

fn solve<P: Puzzle>(method: Method, initial: P) -> SolveOutput {
    let result: Option<SearchTree<P>> = match method {
        Method::Dfs => depth_first_search(initial),
        Method::Bfs => breadth_first_search(initial),
    };

    match result {
        Some(tree) => {
            let path: Vec<String> = tree
                .chain()
                .into_iter()
                .map(|id| tree.state(id).signature())
                .collect();
            SolveOutput {
                solved: true,
                method: method.name().to_string(),
                moves: Some(path.len() - 1),
                path: Some(path),
            }
        }
        None => SolveOutput {
            solved: false,
            method: method.name().to_string(),
            moves: None,
            path: None,
        },
    }
}
