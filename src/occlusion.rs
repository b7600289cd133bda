//! Progressive-reveal playability.
//!
//! The puzzle is seen along the `(1,1,1)` diagonal. A face is covered when a
//! cube still in play sits in front of it on that line of sight: either on the
//! ray through the face's outward neighbour, on the ray through the diagonal
//! neighbour, or on both of the two rays that each cover half of the face.
//! All rays step by `(1,1,1)` and stop at the grid boundary.

use std::iter;

use crate::geometry::{CubeFaceSide, IndexedCubeFace};
use crate::lattice::{Index, LatticePoint};
use crate::puzzle::Puzzle;

/// Step along the viewing diagonal.
const DIAGONAL: LatticePoint = step(1, 1, 1);

/// Starting offsets of the rays that can cover one side.
struct Rays {
    /// Any in-play cube on either ray covers the whole face.
    primary: [LatticePoint; 2],
    /// Each ray covers half the face; both must hit at the same step.
    shared: [LatticePoint; 2],
}

const fn step(x: u8, y: u8, z: u8) -> LatticePoint {
    const fn axis(value: u8) -> Index {
        if value == 0 {
            Index::Zero
        } else {
            Index::One
        }
    }
    LatticePoint::new(axis(x), axis(y), axis(z))
}

impl CubeFaceSide {
    const fn occluding_rays(self) -> Rays {
        match self {
            CubeFaceSide::Top => Rays {
                primary: [step(0, 1, 0), DIAGONAL],
                shared: [step(0, 1, 1), step(1, 1, 0)],
            },
            CubeFaceSide::Left => Rays {
                primary: [step(0, 0, 1), DIAGONAL],
                shared: [step(0, 1, 1), step(1, 0, 1)],
            },
            CubeFaceSide::Right => Rays {
                primary: [step(1, 0, 0), DIAGONAL],
                shared: [step(1, 1, 0), step(1, 0, 1)],
            },
        }
    }
}

/// Points from `origin + start` outwards along the diagonal, inside the grid.
fn ray(origin: LatticePoint, start: LatticePoint) -> impl Iterator<Item = LatticePoint> {
    iter::successors(origin.checked_add(start), |point| point.checked_add(DIAGONAL))
}

impl Puzzle {
    /// Whether the `side` face of the cube at `index` can currently be selected.
    pub fn is_playable(&self, side: CubeFaceSide, index: LatticePoint) -> bool {
        if !self[index].is_in_play() {
            return false;
        }

        let in_play = |point: LatticePoint| self[point].is_in_play();
        let rays = side.occluding_rays();

        if rays
            .primary
            .iter()
            .any(|&start| ray(index, start).any(in_play))
        {
            return false;
        }

        let [first, second] = rays.shared;
        !ray(index, first)
            .zip(ray(index, second))
            .any(|(a, b)| in_play(a) && in_play(b))
    }

    pub fn is_face_playable(&self, face: IndexedCubeFace) -> bool {
        self.is_playable(face.side, face.index)
    }

    /// Every face that can currently be selected.
    pub fn playable_faces(&self) -> Vec<IndexedCubeFace> {
        IndexedCubeFace::all()
            .filter(|&face| self.is_face_playable(face))
            .collect()
    }
}
