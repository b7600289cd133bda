//! Cube Word Puzzle Engine
//!
//! Rules for a word game played on a 3x3x3 stack of letter cubes: face
//! adjacency, progressive reveal of inner cubes, scoring, and replay-based
//! verification of a submitted move transcript. The same code runs on a game
//! client and on the server that decides whether a submitted score counts.

pub mod dictionary;
pub mod format;
pub mod geometry;
pub mod lattice;
pub mod moves;
mod occlusion;
pub mod persistence;
pub mod puzzle;
pub mod scoring;
pub mod verify;

pub use dictionary::{Dictionary, WordList};
pub use geometry::{CubeFaceSide, IndexedCubeFace};
pub use lattice::{Index, LatticePoint};
pub use moves::{Move, MoveType, Moves, PlayerIndex, Reaction};
pub use puzzle::{
    ArchivableCube, ArchivableCubeFace, ArchivablePuzzle, Cube, CubeFace, Puzzle, UseCount,
};
pub use scoring::score;
pub use verify::{
    verify, verify_with, MoveRejection, ScorePolicy, VerificationError, VerifiedMove,
    VerifiedResult, VerifyConfig,
};
