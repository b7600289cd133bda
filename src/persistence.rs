//! File I/O for puzzles, move transcripts and word lists.
//!
//! Puzzles and transcripts are stored as JSON in the canonical wire shapes
//! (see [`crate::puzzle`] and [`crate::moves`]). Word lists are plain text,
//! one word per line.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::dictionary::WordList;
use crate::moves::Moves;
use crate::puzzle::ArchivablePuzzle;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl PersistenceError {
    fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| PersistenceError::Io {
            path: path.to_owned(),
            source,
        }
    }

    fn json(path: &Path) -> impl FnOnce(serde_json::Error) -> Self + '_ {
        move |source| PersistenceError::Json {
            path: path.to_owned(),
            source,
        }
    }
}

/// Loads an archivable puzzle.
pub fn load_puzzle(path: &Path) -> Result<ArchivablePuzzle, PersistenceError> {
    load_json(path)
}

/// Loads a move transcript.
pub fn load_moves(path: &Path) -> Result<Moves, PersistenceError> {
    load_json(path)
}

pub fn save_puzzle(path: &Path, puzzle: &ArchivablePuzzle) -> Result<(), PersistenceError> {
    save_json(path, puzzle)
}

pub fn save_moves(path: &Path, moves: &Moves) -> Result<(), PersistenceError> {
    save_json(path, moves)
}

/// Loads a plain-text word list.
pub fn load_word_list(path: &Path) -> Result<WordList, PersistenceError> {
    let text = fs::read_to_string(path).map_err(PersistenceError::io(path))?;
    Ok(WordList::parse(&text))
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, PersistenceError> {
    let bytes = fs::read(path).map_err(PersistenceError::io(path))?;
    serde_json::from_slice(&bytes).map_err(PersistenceError::json(path))
}

fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistenceError> {
    let file = File::create(path).map_err(PersistenceError::io(path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(PersistenceError::json(path))?;
    writer.flush().map_err(PersistenceError::io(path))
}
