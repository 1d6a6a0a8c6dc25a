//! Property tests over random legal play for every variant.

use gridplay::engine::Variant;
use gridplay::game::Game;
use gridplay::snapshot;
use proptest::prelude::*;

/// Play up to `picks.len()` turns, choosing among legal moves by index.
/// Passes when the variant allows it and nothing else is legal.
/// Returns the number of actions that went onto the undo stack.
fn play_out(game: &mut Game, picks: &[usize]) -> usize {
    let mut actions = 0;
    for &pick in picks {
        let moves = game.valid_moves();
        if moves.is_empty() {
            if game.pass_turn().is_err() {
                break;
            }
        } else {
            game.make_move(moves[pick % moves.len()]).unwrap();
        }
        actions += 1;
    }
    actions
}

fn variant() -> impl Strategy<Value = Variant> {
    prop_oneof![
        Just(Variant::FiveInRow),
        Just(Variant::CaptureLiberty),
        Just(Variant::LineFlip),
    ]
}

proptest! {
    #[test]
    fn prop_undo_restores_initial_game(
        variant in variant(),
        size in 8usize..=11,
        picks in prop::collection::vec(any::<usize>(), 0..40),
    ) {
        let initial = Game::new(variant, size).unwrap();
        let mut game = initial.clone();
        let actions = play_out(&mut game, &picks);
        prop_assert_eq!(game.history_len(), actions);
        for _ in 0..actions {
            game.undo().unwrap();
        }
        prop_assert_eq!(&game, &initial);
        prop_assert!(game.undo().is_err());
    }

    #[test]
    fn prop_rejected_moves_change_nothing(
        variant in variant(),
        picks in prop::collection::vec(any::<usize>(), 0..30),
        attempts in prop::collection::vec((0usize..10, 0usize..10), 1..30),
    ) {
        let mut game = Game::new(variant, 8).unwrap();
        play_out(&mut game, &picks);
        let player = game.current_player();
        for pt in attempts {
            let legal = game.check_rules(pt, player).is_ok();
            let before = game.clone();
            match game.make_move(pt) {
                Ok(()) => {
                    prop_assert!(legal, "{:?} accepted but check_rules rejects it", pt);
                    game = before;
                }
                Err(_) => {
                    prop_assert!(!legal, "{:?} rejected but check_rules accepts it", pt);
                    prop_assert_eq!(&game, &before);
                }
            }
        }
    }

    #[test]
    fn prop_valid_moves_match_check_rules(
        variant in variant(),
        picks in prop::collection::vec(any::<usize>(), 0..30),
    ) {
        let mut game = Game::new(variant, 9).unwrap();
        play_out(&mut game, &picks);
        let player = game.current_player();
        let moves = game.valid_moves();
        for pt in game.board().points() {
            prop_assert_eq!(
                moves.contains(&pt),
                game.check_rules(pt, player).is_ok(),
                "disagreement at {:?}",
                pt
            );
        }
    }

    #[test]
    fn prop_snapshot_roundtrip(
        variant in variant(),
        picks in prop::collection::vec(any::<usize>(), 0..30),
    ) {
        let mut game = Game::new(variant, 10).unwrap();
        play_out(&mut game, &picks);
        let restored = snapshot::from_json(&snapshot::to_json(&game).unwrap()).unwrap();
        prop_assert_eq!(restored.valid_moves(), game.valid_moves());
        prop_assert_eq!(restored.check_winner(), game.check_winner());
        prop_assert_eq!(&restored, &game);
    }
}
