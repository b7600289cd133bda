//! Property tests for transcript replay.
//!
//! Random games are generated by a driver that only ever makes legal moves
//! (words along touching playable faces, removals of cubes in play). Every
//! such transcript must verify, and replaying it from the archived puzzle must
//! land on exactly the state the live game reached.

use proptest::prelude::*;

use cubewords::{
    score, verify, verify_with, ArchivableCube, ArchivablePuzzle, CubeFaceSide, IndexedCubeFace,
    Move, MoveType, Moves, Puzzle, ScorePolicy, VerifyConfig,
};

fn lettered_puzzle(shift: usize) -> ArchivablePuzzle {
    let letter = |n: usize| {
        let offset = ((n * 7 + shift) % 26) as u8;
        char::from(b'A' + offset).to_string()
    };
    ArchivablePuzzle::from_fn(|p| {
        let cell = p.to_linear() * 3;
        ArchivableCube::new(&letter(cell), &letter(cell + 1), &letter(cell + 2))
    })
}

fn accept_all(_: &str) -> bool {
    true
}

/// First three-face path starting at `start` through touching playable faces.
fn find_path(playable: &[IndexedCubeFace], start: IndexedCubeFace) -> Option<Vec<IndexedCubeFace>> {
    for &second in playable.iter().filter(|f| start.is_touching(f)) {
        for &third in playable.iter().filter(|f| second.is_touching(f)) {
            if third != start {
                return Some(vec![start, second, third]);
            }
        }
    }
    None
}

/// Plays a legal game on `live`, returning the transcript.
fn play_game(live: &mut Puzzle, actions: &[(bool, prop::sample::Index)]) -> Moves {
    let mut moves = Moves::new();
    for (turn, (wants_word, pick)) in actions.iter().enumerate() {
        let playable = live.playable_faces();
        if playable.is_empty() {
            break;
        }
        let start = playable[pick.index(playable.len())];
        let played_at = turn as f64;

        let mv = match find_path(&playable, start).filter(|_| *wants_word) {
            Some(faces) => {
                let word: String = faces.iter().map(|&f| live.letter(f)).collect();
                Move::played_word(played_at, faces, score(&word))
            }
            None => Move::removed_cube(played_at, start.index),
        };
        live.apply(&mv);
        moves.push(mv);
    }
    moves
}

proptest! {
    #[test]
    fn legal_games_verify_and_replay_to_the_same_state(
        shift in 0usize..26,
        actions in prop::collection::vec((any::<bool>(), any::<prop::sample::Index>()), 0..60),
    ) {
        let archived = lettered_puzzle(shift);
        let mut live = Puzzle::from(&archived);
        let moves = play_game(&mut live, &actions);

        let result = verify(&moves, &archived, &accept_all);
        prop_assert!(result.is_some(), "legal transcript rejected");
        let result = result.unwrap();
        let claimed: i64 = moves.iter().map(|mv| mv.score).sum();
        prop_assert_eq!(result.total_score, claimed);
        prop_assert_eq!(result.verified_moves.len(), moves.len());

        let strict = VerifyConfig { score_policy: ScorePolicy::Recompute };
        prop_assert!(verify_with(&moves, &archived, &accept_all, &strict).is_ok());

        let replayed = Puzzle::reconstruct(&archived, &moves);
        prop_assert_eq!(&replayed, &live);

        for (point, cube) in replayed.cubes() {
            if cube.was_removed {
                for side in CubeFaceSide::ALL {
                    prop_assert!(!replayed.is_playable(side, point));
                }
            }
        }
    }

    #[test]
    fn duplicating_a_face_voids_the_transcript(
        actions in prop::collection::vec((Just(true), any::<prop::sample::Index>()), 1..20),
    ) {
        let archived = lettered_puzzle(0);
        let mut live = Puzzle::from(&archived);
        let moves = play_game(&mut live, &actions);

        let tampered: Moves = moves
            .iter()
            .cloned()
            .map(|mut mv| {
                if let MoveType::PlayedWord(faces) = &mut mv.kind {
                    let first = faces[0];
                    faces.push(first);
                }
                mv
            })
            .collect();

        let has_word = moves
            .iter()
            .any(|mv| matches!(mv.kind, MoveType::PlayedWord(_)));
        let result = verify(&tampered, &archived, &accept_all);
        prop_assert_eq!(result.is_none(), has_word);
    }
}
