use serde::{Deserialize, Serialize};

use crate::model::player::Player;

/// Score that wins the game.
pub const MAX_SCORE: u32 = 121;

/// Seats on the board. The index of a seat is its identifier.
pub const PLAYER_COUNT: usize = 3;

pub type Players = [Player; PLAYER_COUNT];

/// Copy of the board taken right before a score change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UndoSnapshot {
    pub players: Players,
    pub current_player_index: usize,
}

/// The whole board as the store sees it.
///
/// READ-ONLY outside the store; mutations go through `Store`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub players: Players,
    pub current_player_index: usize,
    pub undo_stack: Vec<UndoSnapshot>,

    /// Transient window flag, never persisted.
    pub is_settings_open: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            players: std::array::from_fn(Player::new),
            current_player_index: 0,
            undo_stack: Vec::new(),
            is_settings_open: false,
        }
    }
}

impl GameState {
    pub fn enabled_players(&self) -> impl Iterator<Item = (usize, &Player)> {
        self.players.iter().enumerate().filter(|(_, p)| p.enabled)
    }

    pub fn enabled_count(&self) -> usize {
        self.players.iter().filter(|p| p.enabled).count()
    }

    pub fn first_enabled(&self) -> Option<usize> {
        self.players.iter().position(|p| p.enabled)
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// First enabled player at or past the target.
    pub fn winner(&self) -> Option<&Player> {
        self.enabled_players()
            .map(|(_, p)| p)
            .find(|p| p.score >= MAX_SCORE)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn snapshot(&self) -> UndoSnapshot {
        UndoSnapshot {
            players: self.players.clone(),
            current_player_index: self.current_player_index,
        }
    }

    /// Checks the invariants every reachable state holds, including every
    /// undo snapshot, since undo puts a snapshot back as the live board.
    /// Returns the first violation found.
    pub fn check_invariants(&self) -> Result<(), &'static str> {
        check_board(&self.players, self.current_player_index)?;
        for snapshot in &self.undo_stack {
            check_board(&snapshot.players, snapshot.current_player_index)
                .map_err(|_| "undo snapshot breaks board invariants")?;
        }
        Ok(())
    }
}

fn check_board(players: &Players, current_player_index: usize) -> Result<(), &'static str> {
    if !players.iter().any(|p| p.enabled) {
        return Err("no enabled player");
    }
    match players.get(current_player_index) {
        None => Err("current player index out of range"),
        Some(p) if !p.enabled => Err("current player is disabled"),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_has_three_enabled_players() {
        let state = GameState::default();
        assert_eq!(state.enabled_count(), 3);
        assert_eq!(state.current_player_index, 0);
        assert!(!state.can_undo());
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn winner_ignores_disabled_players() {
        let mut state = GameState::default();
        state.players[0].score = MAX_SCORE;
        state.players[0].enabled = false;
        state.current_player_index = 1;
        assert!(state.winner().is_none());

        state.players[2].score = 130;
        assert_eq!(state.winner().map(|p| p.name.as_str()), Some("Player 3"));
    }

    #[test]
    fn invariant_check_flags_disabled_current_player() {
        let mut state = GameState::default();
        state.players[0].enabled = false;
        assert_eq!(state.check_invariants(), Err("current player is disabled"));
    }

    #[test]
    fn invariant_check_covers_undo_snapshots() {
        let mut state = GameState::default();
        let mut snapshot = state.snapshot();
        for p in snapshot.players.iter_mut() {
            p.enabled = false;
        }
        state.undo_stack.push(snapshot);
        assert_eq!(
            state.check_invariants(),
            Err("undo snapshot breaks board invariants")
        );

        let mut snapshot = GameState::default().snapshot();
        snapshot.players[2].enabled = false;
        snapshot.current_player_index = 2;
        state.undo_stack = vec![snapshot];
        assert!(state.check_invariants().is_err());

        let second_seat = GameState {
            current_player_index: 1,
            ..GameState::default()
        };
        state.undo_stack = vec![second_seat.snapshot()];
        assert!(state.check_invariants().is_ok());
    }
}
