//! Face geometry and adjacency.
//!
//! Each cube exposes three faces towards the viewer: the `+y` face (top), the
//! `+z` face (left) and the `+x` face (right). A face is described by the four
//! corners of its quadrilateral in the cube's local unit frame; translating by
//! the owning lattice point gives integer world coordinates in `0..=3`.
//!
//! Adjacency is recomputed per pair from those corners. There is no cached
//! adjacency graph.

use std::array;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lattice::LatticePoint;

/// A corner in integer world (or local) coordinates.
pub type Vertex = (u8, u8, u8);

/// An edge between two consecutive corners of a face.
type Edge = (Vertex, Vertex);

/// One of the three playable sides of a cube.
///
/// The integer discriminants are the wire encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CubeFaceSide {
    Top = 0,
    Left = 1,
    Right = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cube face side {0} is not one of 0 (top), 1 (left), 2 (right)")]
pub struct SideError(pub u8);

impl CubeFaceSide {
    pub const ALL: [CubeFaceSide; 3] = [CubeFaceSide::Top, CubeFaceSide::Left, CubeFaceSide::Right];

    /// The face's quadrilateral in the cube's local 0/1 frame, in winding order.
    pub const fn corners(self) -> [Vertex; 4] {
        match self {
            // y = 1
            CubeFaceSide::Top => [(0, 1, 0), (1, 1, 0), (1, 1, 1), (0, 1, 1)],
            // z = 1
            CubeFaceSide::Left => [(0, 0, 1), (1, 0, 1), (1, 1, 1), (0, 1, 1)],
            // x = 1
            CubeFaceSide::Right => [(1, 0, 0), (1, 1, 0), (1, 1, 1), (1, 0, 1)],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CubeFaceSide::Top => "top",
            CubeFaceSide::Left => "left",
            CubeFaceSide::Right => "right",
        }
    }
}

impl TryFrom<u8> for CubeFaceSide {
    type Error = SideError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CubeFaceSide::Top),
            1 => Ok(CubeFaceSide::Left),
            2 => Ok(CubeFaceSide::Right),
            _ => Err(SideError(value)),
        }
    }
}

impl From<CubeFaceSide> for u8 {
    fn from(side: CubeFaceSide) -> Self {
        side as u8
    }
}

impl fmt::Display for CubeFaceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A single playable face, addressed by its cube and side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IndexedCubeFace {
    pub index: LatticePoint,
    pub side: CubeFaceSide,
}

impl IndexedCubeFace {
    pub const fn new(index: LatticePoint, side: CubeFaceSide) -> Self {
        Self { index, side }
    }

    /// Every face of the puzzle, x-major and then top/left/right.
    pub fn all() -> impl Iterator<Item = IndexedCubeFace> {
        LatticePoint::ALL.into_iter().flat_map(|index| {
            CubeFaceSide::ALL
                .into_iter()
                .map(move |side| IndexedCubeFace::new(index, side))
        })
    }

    /// Position of this face among the 81 faces of the puzzle.
    ///
    /// Used as a bit position for duplicate detection.
    #[inline]
    pub const fn slot(self) -> usize {
        self.index.to_linear() * 3 + self.side as usize
    }

    /// Corners translated into world coordinates.
    fn world_corners(&self) -> [Vertex; 4] {
        let (x, y, z) = (
            self.index.x.value(),
            self.index.y.value(),
            self.index.z.value(),
        );
        self.side
            .corners()
            .map(|(cx, cy, cz)| (x + cx, y + cy, z + cz))
    }

    /// The four edges of the face, wrapping from the last corner to the first.
    fn edges(&self) -> [Edge; 4] {
        let corners = self.world_corners();
        array::from_fn(|i| (corners[i], corners[(i + 1) % 4]))
    }

    /// Whether two faces share a corner in world space.
    ///
    /// Irreflexive and symmetric.
    pub fn is_touching(&self, other: &IndexedCubeFace) -> bool {
        if self == other {
            return false;
        }
        let other_edges = other.edges();
        self.edges().iter().any(|&(start, end)| {
            other_edges.iter().any(|&(other_start, other_end)| {
                start == other_start
                    || start == other_end
                    || end == other_start
                    || end == other_end
            })
        })
    }

    /// All faces of the puzzle touching this one, regardless of play state.
    pub fn neighbors(&self) -> impl Iterator<Item = IndexedCubeFace> + '_ {
        IndexedCubeFace::all().filter(move |candidate| self.is_touching(candidate))
    }
}

impl fmt::Display for IndexedCubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.index, self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::Index;

    fn face(x: u8, y: u8, z: u8, side: CubeFaceSide) -> IndexedCubeFace {
        let point = LatticePoint::new(
            Index::try_from(x).unwrap(),
            Index::try_from(y).unwrap(),
            Index::try_from(z).unwrap(),
        );
        IndexedCubeFace::new(point, side)
    }

    #[test]
    fn test_touching_is_irreflexive_and_symmetric() {
        let faces: Vec<_> = IndexedCubeFace::all().collect();
        assert_eq!(faces.len(), 81);
        for a in &faces {
            assert!(!a.is_touching(a), "{a} touches itself");
            for b in &faces {
                assert_eq!(
                    a.is_touching(b),
                    b.is_touching(a),
                    "touching is asymmetric for {a} and {b}"
                );
            }
        }
    }

    #[test]
    fn test_faces_of_one_cube_touch_each_other() {
        use CubeFaceSide::*;
        for (a, b) in [(Top, Left), (Left, Right), (Right, Top)] {
            assert!(face(2, 2, 2, a).is_touching(&face(2, 2, 2, b)));
            assert!(face(0, 0, 0, a).is_touching(&face(0, 0, 0, b)));
        }
    }

    #[test]
    fn test_neighboring_cubes_touch_across_the_seam() {
        // right face of (2,2,2) and left face of (2,2,1) meet along x = 3
        assert!(face(2, 2, 2, CubeFaceSide::Right).is_touching(&face(2, 2, 1, CubeFaceSide::Left)));
        // tops of cubes side by side
        assert!(face(2, 2, 2, CubeFaceSide::Top).is_touching(&face(1, 2, 2, CubeFaceSide::Top)));
    }

    #[test]
    fn test_distant_faces_do_not_touch() {
        assert!(!face(2, 2, 2, CubeFaceSide::Top).is_touching(&face(0, 2, 2, CubeFaceSide::Top)));
        assert!(!face(0, 0, 0, CubeFaceSide::Left).is_touching(&face(2, 2, 2, CubeFaceSide::Left)));
    }

    #[test]
    fn test_neighbors_agree_with_is_touching() {
        let center = face(1, 1, 1, CubeFaceSide::Top);
        let neighbors: Vec<_> = center.neighbors().collect();
        assert!(!neighbors.contains(&center));
        for other in IndexedCubeFace::all() {
            assert_eq!(neighbors.contains(&other), center.is_touching(&other));
        }
    }

    #[test]
    fn test_slots_are_unique() {
        let mut slots: Vec<_> = IndexedCubeFace::all().map(IndexedCubeFace::slot).collect();
        slots.sort_unstable();
        slots.dedup();
        assert_eq!(slots, (0..81).collect::<Vec<_>>());
    }

    #[test]
    fn test_face_wire_format() {
        let json = serde_json::to_string(&face(2, 0, 1, CubeFaceSide::Right)).unwrap();
        assert_eq!(json, r#"{"index":{"x":2,"y":0,"z":1},"side":2}"#);
        assert!(serde_json::from_str::<IndexedCubeFace>(
            r#"{"index":{"x":2,"y":0,"z":1},"side":3}"#
        )
        .is_err());
    }
}
