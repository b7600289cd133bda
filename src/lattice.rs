//! Bounded 3x3x3 lattice coordinates.
//!
//! Every axis is an [`Index`] in `{0, 1, 2}`, so a [`LatticePoint`] can never
//! name a cell outside the puzzle. Arithmetic that could leave the grid is
//! checked and yields `None` instead.

use std::array;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cells per axis.
pub const DIM: usize = 3;

/// Total number of cubes in the puzzle (`DIM^3`).
pub const CUBE_COUNT: usize = DIM * DIM * DIM;

/// One axis value of a lattice point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Index {
    Zero = 0,
    One = 1,
    Two = 2,
}

/// An axis value outside `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("lattice index {0} is out of range 0..=2")]
pub struct IndexError(pub i16);

impl Index {
    pub const ALL: [Index; DIM] = [Index::Zero, Index::One, Index::Two];

    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Checked addition of two axis values.
    #[inline]
    pub const fn checked_add(self, other: Index) -> Option<Index> {
        match self.value() + other.value() {
            0 => Some(Index::Zero),
            1 => Some(Index::One),
            2 => Some(Index::Two),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Index {
    type Error = IndexError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Index::Zero),
            1 => Ok(Index::One),
            2 => Ok(Index::Two),
            _ => Err(IndexError(value.into())),
        }
    }
}

impl From<Index> for u8 {
    fn from(index: Index) -> Self {
        index.value()
    }
}

/// A cell of the 3x3x3 puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LatticePoint {
    pub x: Index,
    pub y: Index,
    pub z: Index,
}

impl LatticePoint {
    /// All 27 points in x-major order (`LatticePoint::ALL[p.to_linear()] == p`).
    pub const ALL: [LatticePoint; CUBE_COUNT] = build_all_points();

    pub const fn new(x: Index, y: Index, z: Index) -> Self {
        Self { x, y, z }
    }

    /// Componentwise addition; `None` if any axis leaves `0..=2`.
    #[inline]
    pub const fn checked_add(self, other: LatticePoint) -> Option<LatticePoint> {
        let Some(x) = self.x.checked_add(other.x) else {
            return None;
        };
        let Some(y) = self.y.checked_add(other.y) else {
            return None;
        };
        let Some(z) = self.z.checked_add(other.z) else {
            return None;
        };
        Some(LatticePoint::new(x, y, z))
    }

    /// Linear cell index, x-major: `idx = x * 9 + y * 3 + z`.
    #[inline(always)]
    pub const fn to_linear(self) -> usize {
        (self.x as usize) * DIM * DIM + (self.y as usize) * DIM + (self.z as usize)
    }
}

const fn build_all_points() -> [LatticePoint; CUBE_COUNT] {
    let mut points = [LatticePoint::new(Index::Zero, Index::Zero, Index::Zero); CUBE_COUNT];
    let mut cell = 0;
    while cell < CUBE_COUNT {
        points[cell] = LatticePoint::new(
            Index::ALL[cell / (DIM * DIM)],
            Index::ALL[(cell / DIM) % DIM],
            Index::ALL[cell % DIM],
        );
        cell += 1;
    }
    points
}

impl fmt::Display for LatticePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x.value(), self.y.value(), self.z.value())
    }
}

/// Failure to parse an `x,y,z` triple.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePointError {
    #[error("expected three comma-separated axes, got {0:?}")]
    Shape(String),
    #[error("axis {0:?} is not an integer")]
    NotANumber(String),
    #[error(transparent)]
    OutOfRange(#[from] IndexError),
}

impl FromStr for LatticePoint {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let axes: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        let &[x, y, z] = axes.as_slice() else {
            return Err(ParsePointError::Shape(s.to_owned()));
        };
        let parse_axis = |axis: &str| -> Result<Index, ParsePointError> {
            let value: i16 = axis
                .parse()
                .map_err(|_| ParsePointError::NotANumber(axis.to_owned()))?;
            let value = u8::try_from(value).map_err(|_| IndexError(value))?;
            Ok(Index::try_from(value)?)
        };
        Ok(LatticePoint::new(parse_axis(x)?, parse_axis(y)?, parse_axis(z)?))
    }
}

/// A value for every cell of the puzzle, stored as nested `[x][y][z]` arrays.
///
/// Serializes as three levels of three-element arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lattice<T>([[[T; DIM]; DIM]; DIM]);

impl<T> Lattice<T> {
    /// Builds a lattice by evaluating `cell` at every point.
    pub fn from_fn(mut cell: impl FnMut(LatticePoint) -> T) -> Self {
        Self(array::from_fn(|x| {
            array::from_fn(|y| {
                array::from_fn(|z| {
                    cell(LatticePoint::new(Index::ALL[x], Index::ALL[y], Index::ALL[z]))
                })
            })
        }))
    }

    /// Iterates every cell in x-major order.
    pub fn iter(&self) -> impl Iterator<Item = (LatticePoint, &T)> + '_ {
        LatticePoint::ALL.into_iter().map(move |point| (point, &self[point]))
    }

    /// Maps every cell into a new lattice.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Lattice<U> {
        Lattice::from_fn(|point| f(&self[point]))
    }
}

impl<T> std::ops::Index<LatticePoint> for Lattice<T> {
    type Output = T;

    #[inline]
    fn index(&self, point: LatticePoint) -> &T {
        &self.0[point.x as usize][point.y as usize][point.z as usize]
    }
}

impl<T> std::ops::IndexMut<LatticePoint> for Lattice<T> {
    #[inline]
    fn index_mut(&mut self, point: LatticePoint) -> &mut T {
        &mut self.0[point.x as usize][point.y as usize][point.z as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: u8, y: u8, z: u8) -> LatticePoint {
        LatticePoint::new(
            Index::try_from(x).unwrap(),
            Index::try_from(y).unwrap(),
            Index::try_from(z).unwrap(),
        )
    }

    #[test]
    fn test_all_points_are_distinct_and_in_linear_order() {
        for (cell, p) in LatticePoint::ALL.iter().enumerate() {
            assert_eq!(p.to_linear(), cell, "ALL[{cell}] = {p} is out of order");
        }
        let mut sorted = LatticePoint::ALL.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), CUBE_COUNT);
    }

    #[test]
    fn test_checked_add_stays_in_bounds() {
        assert_eq!(point(1, 0, 2).checked_add(point(1, 1, 0)), Some(point(2, 1, 2)));
        assert_eq!(point(2, 2, 2).checked_add(point(0, 0, 0)), Some(point(2, 2, 2)));
    }

    #[test]
    fn test_checked_add_out_of_bounds_on_any_axis() {
        assert_eq!(point(2, 0, 0).checked_add(point(1, 0, 0)), None);
        assert_eq!(point(0, 2, 0).checked_add(point(0, 1, 0)), None);
        assert_eq!(point(0, 0, 1).checked_add(point(0, 0, 2)), None);
    }

    #[test]
    fn test_index_rejects_out_of_range() {
        assert_eq!(Index::try_from(3u8), Err(IndexError(3)));
        assert_eq!(Index::try_from(2u8), Ok(Index::Two));
    }

    #[test]
    fn test_parse_point() {
        assert_eq!("2,1,0".parse::<LatticePoint>(), Ok(point(2, 1, 0)));
        assert_eq!("(0, 2, 2)".parse::<LatticePoint>(), Ok(point(0, 2, 2)));
        assert!(matches!(
            "1,2".parse::<LatticePoint>(),
            Err(ParsePointError::Shape(_))
        ));
        assert!(matches!(
            "1,2,3".parse::<LatticePoint>(),
            Err(ParsePointError::OutOfRange(IndexError(3)))
        ));
        assert!(matches!(
            "1,-1,0".parse::<LatticePoint>(),
            Err(ParsePointError::OutOfRange(IndexError(-1)))
        ));
    }

    #[test]
    fn test_point_serializes_as_xyz_object() {
        let json = serde_json::to_string(&point(0, 1, 2)).unwrap();
        assert_eq!(json, r#"{"x":0,"y":1,"z":2}"#);
        let err = serde_json::from_str::<LatticePoint>(r#"{"x":0,"y":3,"z":2}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_lattice_indexing_matches_from_fn() {
        let lattice = Lattice::from_fn(|p| p.to_linear());
        for (p, &cell) in lattice.iter() {
            assert_eq!(cell, p.to_linear());
        }
        let json = serde_json::to_value(&lattice).unwrap();
        assert_eq!(json[2][1][0], 21);
    }
}
