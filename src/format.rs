//! Plain-text rendering of a puzzle.

use crate::geometry::CubeFaceSide;
use crate::lattice::{Index, LatticePoint, DIM};
use crate::puzzle::Puzzle;

/// Width of one rendered cell; wide enough for two-character letters like `QU`.
const CELL_WIDTH: usize = 2;

/// Formats a puzzle as a human-readable string.
///
/// Displays the three z-slices side by side, rows from top (y=2) to bottom
/// (y=0), x increasing to the right. Each cube shows its top letter; cubes
/// out of play show as `.`.
pub fn format_puzzle(puzzle: &Puzzle) -> String {
    let slice_width = DIM * CELL_WIDTH;

    let mut lines = Vec::with_capacity(DIM + 1);
    let header: Vec<String> = (0..DIM)
        .map(|z| format!("{:<slice_width$}", format!("z={z}")))
        .collect();
    lines.push(header.join("  "));

    for y in Index::ALL.into_iter().rev() {
        let slices: Vec<String> = Index::ALL
            .into_iter()
            .map(|z| {
                Index::ALL
                    .into_iter()
                    .map(|x| {
                        let cube = &puzzle[LatticePoint::new(x, y, z)];
                        let shown = if cube.is_in_play() {
                            cube.top.letter.as_str()
                        } else {
                            "."
                        };
                        format!("{shown:<width$}", width = CELL_WIDTH)
                    })
                    .collect::<String>()
            })
            .collect();
        lines.push(slices.join("  "));
    }

    let mut output = String::new();
    for line in lines {
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

/// One line per face with its letter, use count and playability.
pub fn format_faces(puzzle: &Puzzle) -> String {
    let mut output = String::new();
    for (point, cube) in puzzle.cubes() {
        for side in CubeFaceSide::ALL {
            let face = cube.face(side);
            let state = if puzzle.is_playable(side, point) {
                "playable"
            } else if cube.is_in_play() {
                "covered"
            } else {
                "out"
            };
            output.push_str(&format!(
                "{point} {side:<5} {:<2} used {} {state}\n",
                face.letter, face.use_count
            ));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{ArchivableCube, ArchivablePuzzle};

    #[test]
    fn test_format_mock_after_removing_corner() {
        let mut puzzle = Puzzle::from(&ArchivablePuzzle::mock());
        puzzle[LatticePoint::new(Index::Two, Index::Two, Index::Two)].was_removed = true;

        insta::assert_snapshot!(format_puzzle(&puzzle), @r"
        z=0     z=1     z=2
        B B B   B B B   B B .
        B B B   B B B   B B B
        B B B   B B B   B B B
        ");
    }

    #[test]
    fn test_format_wide_letters() {
        let archived = ArchivablePuzzle::from_fn(|p| {
            let top = if p.y == Index::Zero { "QU" } else { "E" };
            ArchivableCube::new("C", "A", top)
        });
        let rendered = format_puzzle(&Puzzle::from(&archived));
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], "E E E   E E E   E E E");
        assert_eq!(rows[3], "QUQUQU  QUQUQU  QUQUQU");
    }

    #[test]
    fn test_format_faces_marks_state() {
        let puzzle = Puzzle::from(&ArchivablePuzzle::mock());
        let listing = format_faces(&puzzle);
        assert_eq!(listing.lines().count(), 81);
        assert!(listing.contains("(2,2,2) right A  used 0 playable"));
        assert!(listing.contains("(1,2,2) right A  used 0 covered"));
    }
}
