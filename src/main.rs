//! Cube Word Puzzle CLI
//!
//! Verifies submitted game transcripts against the puzzle they were played
//! on, scores words, and replays saved games for inspection.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cubewords::format::{format_faces, format_puzzle};
use cubewords::persistence;
use cubewords::{score, verify_with, ArchivablePuzzle, Moves, Puzzle, ScorePolicy, VerifyConfig};

/// Rules engine and transcript verifier for the cube word game.
#[derive(Parser)]
#[command(name = "cubewords")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a transcript and print the verified result as JSON.
    Verify {
        /// Archivable puzzle (JSON).
        #[arg(long)]
        puzzle: PathBuf,
        /// Move transcript (JSON array).
        #[arg(long)]
        moves: PathBuf,
        /// Word list, one word per line.
        #[arg(long)]
        words: PathBuf,
        /// Reject words whose claimed score differs from the computed score.
        #[arg(long)]
        recompute_scores: bool,
    },
    /// Print the score of each word.
    Score {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Replay a transcript without checking it and print the resulting puzzle.
    Replay {
        #[arg(long)]
        puzzle: PathBuf,
        #[arg(long)]
        moves: Option<PathBuf>,
        /// List every face with its use count and playability.
        #[arg(long)]
        faces: bool,
    },
    /// Write the built-in mock puzzle to a file.
    Mock { output: PathBuf },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Verify {
            puzzle,
            moves,
            words,
            recompute_scores,
        } => run_verify(&puzzle, &moves, &words, recompute_scores),
        Command::Score { words } => {
            for word in words {
                println!("{word}\t{}", score(&word));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Replay {
            puzzle,
            moves,
            faces,
        } => run_replay(&puzzle, moves.as_deref(), faces),
        Command::Mock { output } => {
            persistence::save_puzzle(&output, &ArchivablePuzzle::mock())?;
            info!(path = %output.display(), "wrote mock puzzle");
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Verifies a transcript; exits with failure when it is rejected.
fn run_verify(
    puzzle_path: &Path,
    moves_path: &Path,
    words_path: &Path,
    recompute_scores: bool,
) -> Result<ExitCode> {
    let puzzle = persistence::load_puzzle(puzzle_path)?;
    let moves = persistence::load_moves(moves_path)?;
    let words = persistence::load_word_list(words_path)?;
    info!(moves = moves.len(), words = words.len(), "verifying transcript");

    let config = VerifyConfig {
        score_policy: if recompute_scores {
            ScorePolicy::Recompute
        } else {
            ScorePolicy::TrustClaimed
        },
    };

    match verify_with(&moves, &puzzle, &words, &config) {
        Ok(result) => {
            let json = serde_json::to_string_pretty(&result).context("encoding result")?;
            println!("{json}");
            info!(total_score = result.total_score, "transcript verified");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            warn!(move_index = err.move_index, reason = %err.reason, "transcript rejected");
            eprintln!("rejected: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Reconstructs the live puzzle from its archived form and transcript.
fn run_replay(puzzle_path: &Path, moves_path: Option<&Path>, faces: bool) -> Result<ExitCode> {
    let archived = persistence::load_puzzle(puzzle_path)?;
    let moves = match moves_path {
        Some(path) => persistence::load_moves(path)?,
        None => Moves::new(),
    };
    let puzzle = Puzzle::reconstruct(&archived, &moves);

    print!("{}", format_puzzle(&puzzle));
    println!(
        "{} moves, {} cubes in play",
        moves.len(),
        puzzle.cubes_in_play()
    );
    if faces {
        print!("{}", format_faces(&puzzle));
    }
    Ok(ExitCode::SUCCESS)
}
