//! Cube and puzzle model.
//!
//! A [`Puzzle`] holds 27 cubes with their live play state (face use counts and
//! the removal flag). The [`ArchivablePuzzle`] is the durable form: letters and
//! sides only. Play state is never stored; it is re-derived by replaying moves
//! (see [`Puzzle::reconstruct`]).

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{CubeFaceSide, IndexedCubeFace};
use crate::lattice::{Lattice, LatticePoint};
use crate::moves::Moves;

/// A face is exhausted once it has been played this many times.
pub const MAX_USE_COUNT: u8 = 3;

/// How often a face has been played, bounded to `0..=MAX_USE_COUNT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct UseCount(u8);

/// A use count above [`MAX_USE_COUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("use count {0} exceeds {}", MAX_USE_COUNT)]
pub struct UseCountError(pub u8);

impl UseCount {
    pub const ZERO: UseCount = UseCount(0);
    pub const MAX: UseCount = UseCount(MAX_USE_COUNT);

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// One more use, saturating at [`UseCount::MAX`].
    #[inline]
    pub fn incremented(self) -> Self {
        Self(self.0.saturating_add(1).min(MAX_USE_COUNT))
    }

    #[inline]
    pub fn is_max(self) -> bool {
        self == Self::MAX
    }
}

impl TryFrom<u8> for UseCount {
    type Error = UseCountError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= MAX_USE_COUNT {
            Ok(Self(value))
        } else {
            Err(UseCountError(value))
        }
    }
}

impl From<UseCount> for u8 {
    fn from(count: UseCount) -> Self {
        count.0
    }
}

impl fmt::Display for UseCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A face with its live use count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CubeFace {
    /// One or more characters, e.g. `"QU"`.
    pub letter: String,
    pub side: CubeFaceSide,
    pub use_count: UseCount,
}

impl CubeFace {
    pub fn new(letter: impl Into<String>, side: CubeFaceSide) -> Self {
        Self {
            letter: letter.into(),
            side,
            use_count: UseCount::ZERO,
        }
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.use_count.is_max()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cube {
    pub left: CubeFace,
    pub right: CubeFace,
    pub top: CubeFace,
    pub was_removed: bool,
}

impl Cube {
    /// Not removed and no face used up.
    pub fn is_in_play(&self) -> bool {
        !self.was_removed
            && !self.left.is_exhausted()
            && !self.right.is_exhausted()
            && !self.top.is_exhausted()
    }

    pub fn face(&self, side: CubeFaceSide) -> &CubeFace {
        match side {
            CubeFaceSide::Top => &self.top,
            CubeFaceSide::Left => &self.left,
            CubeFaceSide::Right => &self.right,
        }
    }

    pub fn face_mut(&mut self, side: CubeFaceSide) -> &mut CubeFace {
        match side {
            CubeFaceSide::Top => &mut self.top,
            CubeFaceSide::Left => &mut self.left,
            CubeFaceSide::Right => &mut self.right,
        }
    }
}

/// Live puzzle state, serialized as nested `[x][y][z]` arrays of cubes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Puzzle {
    cubes: Lattice<Cube>,
}

impl Puzzle {
    /// Rebuilds live state from the durable form by replaying `moves` from a
    /// fresh puzzle. This is the only way play state is derived from storage.
    pub fn reconstruct(archived: &ArchivablePuzzle, moves: &Moves) -> Self {
        let mut puzzle = Puzzle::from(archived);
        puzzle.apply_all(moves);
        puzzle
    }

    pub fn cubes(&self) -> impl Iterator<Item = (LatticePoint, &Cube)> + '_ {
        self.cubes.iter()
    }

    /// The letter shown on `face`.
    pub fn letter(&self, face: IndexedCubeFace) -> &str {
        &self[face.index].face(face.side).letter
    }

    pub fn cubes_in_play(&self) -> usize {
        self.cubes().filter(|(_, cube)| cube.is_in_play()).count()
    }

    /// Every cube has been removed or used up.
    pub fn is_cleared(&self) -> bool {
        self.cubes_in_play() == 0
    }
}

impl std::ops::Index<LatticePoint> for Puzzle {
    type Output = Cube;

    fn index(&self, point: LatticePoint) -> &Cube {
        &self.cubes[point]
    }
}

impl std::ops::IndexMut<LatticePoint> for Puzzle {
    fn index_mut(&mut self, point: LatticePoint) -> &mut Cube {
        &mut self.cubes[point]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivableCubeFace {
    pub letter: String,
    pub side: CubeFaceSide,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivableCube {
    pub left: ArchivableCubeFace,
    pub right: ArchivableCubeFace,
    pub top: ArchivableCubeFace,
}

impl ArchivableCube {
    /// A cube from its left, right and top letters.
    pub fn new(left: &str, right: &str, top: &str) -> Self {
        Self {
            left: ArchivableCubeFace {
                letter: left.to_owned(),
                side: CubeFaceSide::Left,
            },
            right: ArchivableCubeFace {
                letter: right.to_owned(),
                side: CubeFaceSide::Right,
            },
            top: ArchivableCubeFace {
                letter: top.to_owned(),
                side: CubeFaceSide::Top,
            },
        }
    }
}

/// Durable puzzle: letters and sides only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArchivablePuzzle {
    cubes: Lattice<ArchivableCube>,
}

impl ArchivablePuzzle {
    pub fn from_fn(cube: impl FnMut(LatticePoint) -> ArchivableCube) -> Self {
        Self {
            cubes: Lattice::from_fn(cube),
        }
    }

    /// Every cube reads `C`/`A`/`B` on its left/right/top faces.
    pub fn mock() -> Self {
        Self::from_fn(|_| ArchivableCube::new("C", "A", "B"))
    }
}

impl std::ops::Index<LatticePoint> for ArchivablePuzzle {
    type Output = ArchivableCube;

    fn index(&self, point: LatticePoint) -> &ArchivableCube {
        &self.cubes[point]
    }
}

impl From<&ArchivableCubeFace> for CubeFace {
    fn from(face: &ArchivableCubeFace) -> Self {
        CubeFace::new(face.letter.clone(), face.side)
    }
}

impl From<&CubeFace> for ArchivableCubeFace {
    fn from(face: &CubeFace) -> Self {
        Self {
            letter: face.letter.clone(),
            side: face.side,
        }
    }
}

impl From<&ArchivablePuzzle> for Puzzle {
    /// Fresh play state: no face used, nothing removed.
    fn from(archived: &ArchivablePuzzle) -> Self {
        Self {
            cubes: archived.cubes.map(|cube| Cube {
                left: CubeFace::from(&cube.left),
                right: CubeFace::from(&cube.right),
                top: CubeFace::from(&cube.top),
                was_removed: false,
            }),
        }
    }
}

impl From<&Puzzle> for ArchivablePuzzle {
    fn from(puzzle: &Puzzle) -> Self {
        Self {
            cubes: puzzle.cubes.map(|cube| ArchivableCube {
                left: ArchivableCubeFace::from(&cube.left),
                right: ArchivableCubeFace::from(&cube.right),
                top: ArchivableCubeFace::from(&cube.top),
            }),
        }
    }
}
