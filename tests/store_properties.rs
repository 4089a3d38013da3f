use proptest::prelude::*;

use prest_board::storage::{decode, encode};
use prest_board::{
    GameState, PlayerColor, Store, StoreCommand, StoreConfig, MAX_SCORE, PLAYER_COUNT,
};

fn color() -> impl Strategy<Value = PlayerColor> {
    prop::sample::select(PlayerColor::ALL.to_vec())
}

fn command() -> impl Strategy<Value = StoreCommand> {
    // Indices go one past the board so invalid ones are exercised too.
    let index = 0..=PLAYER_COUNT;
    prop_oneof![
        (index.clone(), 0..=150u32)
            .prop_map(|(player_index, score)| StoreCommand::SetScore { player_index, score }),
        index.clone().prop_map(|index| StoreCommand::SetCurrentPlayer { index }),
        Just(StoreCommand::Undo),
        Just(StoreCommand::ResetGame),
        (index.clone(), "[a-zA-Z ]{0,8}")
            .prop_map(|(player_index, name)| StoreCommand::SetPlayerName { player_index, name }),
        (index.clone(), color())
            .prop_map(|(player_index, color)| StoreCommand::SetPlayerColor { player_index, color }),
        index.prop_map(|player_index| StoreCommand::TogglePlayerEnabled { player_index }),
        Just(StoreCommand::ToggleSettings),
    ]
}

fn play(commands: &[StoreCommand]) -> Store {
    let mut store = Store::default();
    for command in commands {
        let _ = store.dispatch(command.clone());
    }
    store
}

fn assert_invariants(state: &GameState) {
    assert!(state.enabled_count() >= 1, "nobody enabled: {state:?}");
    assert!(
        state.players[state.current_player_index].enabled,
        "current player disabled: {state:?}"
    );
}

proptest! {
    #[test]
    fn every_reachable_state_keeps_invariants(commands in prop::collection::vec(command(), 0..60)) {
        let mut store = Store::default();
        for command in commands {
            let _ = store.dispatch(command);
            assert_invariants(store.state());
        }
    }

    #[test]
    fn set_score_then_undo_restores_state(
        commands in prop::collection::vec(command(), 0..40),
        index in 0..PLAYER_COUNT,
        score in 0..=MAX_SCORE,
    ) {
        let mut store = play(&commands);
        let before = store.snapshot();

        store.set_score(index, score).unwrap();
        prop_assert!(store.undo());

        prop_assert_eq!(store.state(), &*before);
    }

    #[test]
    fn reset_is_idempotent(commands in prop::collection::vec(command(), 0..40)) {
        let mut store = play(&commands);
        store.reset_game();
        let once = store.snapshot();
        store.reset_game();

        prop_assert_eq!(store.state(), &*once);
        prop_assert!(once.players.iter().all(|p| p.score == 0));
        prop_assert!(once.undo_stack.is_empty());
    }

    #[test]
    fn reloaded_board_keeps_invariants_through_undo(
        before_save in prop::collection::vec(command(), 0..40),
        after_load in prop::collection::vec(command(), 0..40),
    ) {
        let saved = play(&before_save).snapshot();
        let loaded = decode(&encode(&saved).unwrap()).unwrap();

        prop_assert_eq!(&loaded.players, &saved.players);
        prop_assert_eq!(loaded.current_player_index, saved.current_player_index);
        prop_assert_eq!(&loaded.undo_stack, &saved.undo_stack);
        prop_assert!(!loaded.is_settings_open);

        let depth = loaded.undo_stack.len();
        let mut store = Store::new(loaded, StoreConfig::default());
        for command in after_load {
            let _ = store.dispatch(command);
            assert_invariants(store.state());
        }

        // Drain whatever history is left, reloaded snapshots included.
        for _ in 0..depth + 40 {
            if !store.undo() {
                break;
            }
            assert_invariants(store.state());
        }
    }

    #[test]
    fn invalid_indices_never_change_state(
        commands in prop::collection::vec(command(), 0..20),
        index in PLAYER_COUNT..100usize,
    ) {
        let mut store = play(&commands);
        let before = store.snapshot();

        prop_assert!(store.set_score(index, 1).is_err());
        prop_assert!(store.toggle_player_enabled(index).is_err());
        prop_assert!(store.set_current_player(index).is_err());
        prop_assert_eq!(store.state(), &*before);
    }
}

#[test]
fn undo_walks_back_one_score_at_a_time() {
    let mut store = Store::default();
    store.set_score(0, 5).unwrap();
    store.set_score(1, 10).unwrap();
    store.undo();

    assert_eq!(store.state().players[1].score, 0);
    assert_eq!(store.state().players[0].score, 5);
    assert_eq!(store.state().undo_stack.len(), 1);

    store.undo();
    assert_eq!(*store.state(), GameState::default());
}

#[test]
fn disabled_player_drops_out_of_enabled_players() {
    let mut store = Store::default();
    store.set_current_player(1).unwrap();
    store.toggle_player_enabled(1).unwrap();

    let state = store.state();
    assert_eq!(state.current_player_index, 0);
    let enabled: Vec<usize> = state.enabled_players().map(|(i, _)| i).collect();
    assert_eq!(enabled, vec![0, 2]);
}

#[test]
fn sole_enabled_player_stays_enabled() {
    let mut store = Store::default();
    store.toggle_player_enabled(1).unwrap();
    store.toggle_player_enabled(2).unwrap();
    let before = store.snapshot();

    assert_eq!(store.toggle_player_enabled(0), Ok(false));
    assert_eq!(store.state(), &*before);
    assert!(store.state().players[0].enabled);
}
