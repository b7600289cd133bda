//! Moves and the single state transition.
//!
//! [`Puzzle::apply`] is the only way play state changes. Live play, save-game
//! resume and server verification all go through it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geometry::IndexedCubeFace;
use crate::lattice::LatticePoint;
use crate::puzzle::Puzzle;

/// Seat of a player in a multiplayer game.
pub type PlayerIndex = u8;

/// An opaque reaction code attached to a move by another player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reaction(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveType {
    /// Faces in selection order; the letters spell the word.
    PlayedWord(Vec<IndexedCubeFace>),
    RemovedCube(LatticePoint),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    /// Timestamp as recorded by the client.
    pub played_at: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_index: Option<PlayerIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactions: Option<BTreeMap<PlayerIndex, Reaction>>,
    /// Score claimed for this move; zero for removals.
    pub score: i64,
    #[serde(rename = "type")]
    pub kind: MoveType,
}

impl Move {
    pub fn played_word(played_at: f64, faces: Vec<IndexedCubeFace>, score: i64) -> Self {
        Self {
            played_at,
            player_index: None,
            reactions: None,
            score,
            kind: MoveType::PlayedWord(faces),
        }
    }

    pub fn removed_cube(played_at: f64, point: LatticePoint) -> Self {
        Self {
            played_at,
            player_index: None,
            reactions: None,
            score: 0,
            kind: MoveType::RemovedCube(point),
        }
    }

    /// Records `player`'s reaction. Has no effect on scoring or legality.
    pub fn react(&mut self, player: PlayerIndex, reaction: Reaction) {
        self.reactions
            .get_or_insert_with(BTreeMap::new)
            .insert(player, reaction);
    }
}

/// An ordered, append-only move transcript.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Moves(Vec<Move>);

impl Moves {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mv: Move) {
        self.0.push(mv);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Move>> for Moves {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Move> for Moves {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Puzzle {
    /// Applies one move without checking legality.
    ///
    /// Each listed face gains one use. Counts stop at [`UseCount::MAX`]: a
    /// word replayed over an exhausted face (only possible in an unverified
    /// transcript) leaves its count at 3 rather than going higher.
    ///
    /// [`UseCount::MAX`]: crate::puzzle::UseCount::MAX
    pub fn apply(&mut self, mv: &Move) {
        match &mv.kind {
            MoveType::PlayedWord(faces) => {
                for face in faces {
                    let cube_face = self[face.index].face_mut(face.side);
                    cube_face.use_count = cube_face.use_count.incremented();
                }
            }
            MoveType::RemovedCube(point) => {
                self[*point].was_removed = true;
            }
        }
    }

    /// Applies every move in transcript order.
    pub fn apply_all(&mut self, moves: &Moves) {
        for mv in moves {
            self.apply(mv);
        }
    }
}
