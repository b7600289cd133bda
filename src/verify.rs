//! Replay-based transcript verification.
//!
//! A transcript is replayed move by move against a fresh copy of the puzzle it
//! was played on. Every move is checked against the state left by the moves
//! before it. The first illegal move rejects the whole transcript; there is no
//! partial credit.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::dictionary::Dictionary;
use crate::geometry::IndexedCubeFace;
use crate::lattice::LatticePoint;
use crate::moves::{Move, MoveType, Moves};
use crate::puzzle::{ArchivablePuzzle, Puzzle};
use crate::scoring::score;

/// Words shorter than this are never accepted.
pub const MIN_WORD_LENGTH: usize = 3;

/// How the score claimed on a played word is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScorePolicy {
    /// Credit the claimed score once the word itself is legal. Existing
    /// records were accepted this way.
    #[default]
    TrustClaimed,
    /// Reject a played word whose claimed score differs from [`score`].
    Recompute,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerifyConfig {
    pub score_policy: ScorePolicy,
}

/// Outcome of one accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VerifiedMove {
    PlayedWord {
        faces: Vec<IndexedCubeFace>,
        word: String,
        score: i64,
    },
    RemovedCube { point: LatticePoint },
}

impl VerifiedMove {
    pub fn score(&self) -> i64 {
        match self {
            VerifiedMove::PlayedWord { score, .. } => *score,
            VerifiedMove::RemovedCube { .. } => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedResult {
    pub total_score: i64,
    pub verified_moves: Vec<VerifiedMove>,
}

/// Why a single move was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("face {face} is selected more than once")]
    DuplicateFace { face: IndexedCubeFace },
    #[error("word {word:?} is shorter than {} letters", MIN_WORD_LENGTH)]
    WordTooShort { word: String },
    #[error("faces {first} and {second} do not touch")]
    NotTouching {
        first: IndexedCubeFace,
        second: IndexedCubeFace,
    },
    #[error("face {face} is not playable")]
    FaceNotPlayable { face: IndexedCubeFace },
    #[error("cube {point} is not in play")]
    CubeNotInPlay { point: LatticePoint },
    #[error("{word:?} is not in the dictionary")]
    NotAWord { word: String },
    #[error("{word:?} claims {claimed} points but scores {expected}")]
    ScoreMismatch {
        word: String,
        claimed: i64,
        expected: i64,
    },
}

/// A rejected transcript, naming the first illegal move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("move {move_index} rejected: {reason}")]
pub struct VerificationError {
    pub move_index: usize,
    pub reason: MoveRejection,
}

/// Replays `moves` on `played_on` and returns the verified total, or `None`
/// if any move is illegal. Claimed word scores are trusted.
pub fn verify(
    moves: &Moves,
    played_on: &ArchivablePuzzle,
    is_valid_word: &impl Dictionary,
) -> Option<VerifiedResult> {
    verify_with(moves, played_on, is_valid_word, &VerifyConfig::default()).ok()
}

/// Like [`verify`], but reports which move failed and why.
pub fn verify_with(
    moves: &Moves,
    played_on: &ArchivablePuzzle,
    is_valid_word: &impl Dictionary,
    config: &VerifyConfig,
) -> Result<VerifiedResult, VerificationError> {
    let mut puzzle = Puzzle::from(played_on);
    let mut total_score = 0i64;
    let mut verified_moves = Vec::with_capacity(moves.len());
    let mut previous: Option<&Move> = None;

    for (move_index, mv) in moves.iter().enumerate() {
        let verified = check_move(&puzzle, mv, previous, is_valid_word, config).map_err(
            |reason| {
                debug!(move_index, %reason, "transcript rejected");
                VerificationError { move_index, reason }
            },
        )?;
        debug!(move_index, score = verified.score(), "move verified");

        puzzle.apply(mv);
        total_score = total_score.saturating_add(verified.score());
        verified_moves.push(verified);
        previous = Some(mv);
    }

    debug!(total_score, moves = verified_moves.len(), "transcript verified");
    Ok(VerifiedResult {
        total_score,
        verified_moves,
    })
}

/// Checks one move against the current state without applying it.
fn check_move(
    puzzle: &Puzzle,
    mv: &Move,
    previous: Option<&Move>,
    dictionary: &impl Dictionary,
    config: &VerifyConfig,
) -> Result<VerifiedMove, MoveRejection> {
    match &mv.kind {
        MoveType::PlayedWord(faces) => {
            let word = check_word(puzzle, faces, dictionary)?;
            if config.score_policy == ScorePolicy::Recompute {
                let expected = score(&word);
                if expected != mv.score {
                    return Err(MoveRejection::ScoreMismatch {
                        word,
                        claimed: mv.score,
                        expected,
                    });
                }
            }
            Ok(VerifiedMove::PlayedWord {
                faces: faces.clone(),
                word,
                score: mv.score,
            })
        }
        MoveType::RemovedCube(point) => {
            // the same removal submitted twice in a row is tolerated
            let repeated = previous.is_some_and(|prev| prev.kind == mv.kind);
            if puzzle[*point].is_in_play() || repeated {
                Ok(VerifiedMove::RemovedCube { point: *point })
            } else {
                Err(MoveRejection::CubeNotInPlay { point: *point })
            }
        }
    }
}

/// Validates a face path and returns the word it spells.
fn check_word(
    puzzle: &Puzzle,
    faces: &[IndexedCubeFace],
    dictionary: &impl Dictionary,
) -> Result<String, MoveRejection> {
    // one bit per face slot (81 < 128)
    let mut seen = 0u128;
    for &face in faces {
        let bit = 1u128 << face.slot();
        if seen & bit != 0 {
            return Err(MoveRejection::DuplicateFace { face });
        }
        seen |= bit;
    }

    let word: String = faces.iter().map(|&face| puzzle.letter(face)).collect();
    if word.chars().count() < MIN_WORD_LENGTH {
        return Err(MoveRejection::WordTooShort { word });
    }

    if let Some(pair) = faces.windows(2).find(|pair| !pair[0].is_touching(&pair[1])) {
        return Err(MoveRejection::NotTouching {
            first: pair[0],
            second: pair[1],
        });
    }

    if let Some(&face) = faces.iter().find(|&&face| !puzzle.is_face_playable(face)) {
        return Err(MoveRejection::FaceNotPlayable { face });
    }

    if let Some(face) = faces.iter().find(|face| !puzzle[face.index].is_in_play()) {
        return Err(MoveRejection::CubeNotInPlay { point: face.index });
    }

    if !dictionary.contains(&word) {
        return Err(MoveRejection::NotAWord { word });
    }

    Ok(word)
}
