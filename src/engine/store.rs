use std::sync::Arc;

use tracing::debug;

use crate::engine::error::StoreError;
use crate::engine::protocol::StoreCommand;
use crate::model::game_state::{GameState, PLAYER_COUNT};
use crate::model::player::PlayerColor;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Oldest undo snapshots are dropped past this many. `None` keeps them all.
    pub undo_limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&GameState)>;

/// Owns the board and is the only thing allowed to change it.
///
/// Every mutation builds the next state from a copy and swaps it in whole,
/// then runs the listeners once. Calls that change nothing notify nobody.
pub struct Store {
    state: Arc<GameState>,
    config: StoreConfig,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(GameState::default(), StoreConfig::default())
    }
}

impl Store {
    pub fn new(state: GameState, config: StoreConfig) -> Self {
        Self {
            state: Arc::new(state),
            config,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Cheap handle on the current state that stays valid after later mutations.
    pub fn snapshot(&self) -> Arc<GameState> {
        Arc::clone(&self.state)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&GameState) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the listener was already gone.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        self.listeners.len() != before
    }

    pub fn dispatch(&mut self, command: StoreCommand) -> Result<(), StoreError> {
        debug!(command = command.short_name(), "dispatch");
        match command {
            StoreCommand::SetScore { player_index, score } => self.set_score(player_index, score),
            StoreCommand::SetCurrentPlayer { index } => self.set_current_player(index),
            StoreCommand::Undo => {
                self.undo();
                Ok(())
            }
            StoreCommand::ResetGame => {
                self.reset_game();
                Ok(())
            }
            StoreCommand::SetPlayerName { player_index, name } => {
                self.set_player_name(player_index, name)
            }
            StoreCommand::SetPlayerColor { player_index, color } => {
                self.set_player_color(player_index, color)
            }
            StoreCommand::TogglePlayerEnabled { player_index } => {
                self.toggle_player_enabled(player_index).map(|_| ())
            }
            StoreCommand::ToggleSettings => {
                self.toggle_settings();
                Ok(())
            }
        }
    }

    /// Records an undo snapshot, then stores `score` as given.
    ///
    /// The store does not clamp; callers keep scores within `0..=MAX_SCORE`.
    pub fn set_score(&mut self, player_index: usize, score: u32) -> Result<(), StoreError> {
        check_index(player_index)?;

        let mut next = (*self.state).clone();
        next.undo_stack.push(self.state.snapshot());
        if let Some(limit) = self.config.undo_limit {
            let excess = next.undo_stack.len().saturating_sub(limit);
            next.undo_stack.drain(..excess);
        }
        next.players[player_index].score = score;

        debug!(player = player_index, score, depth = next.undo_stack.len(), "score set");
        self.commit(next);
        Ok(())
    }

    /// Makes `index` current, or the first enabled player if `index` is disabled.
    pub fn set_current_player(&mut self, index: usize) -> Result<(), StoreError> {
        check_index(index)?;

        let target = if self.state.players[index].enabled {
            Some(index)
        } else {
            self.state.first_enabled()
        };

        match target {
            Some(target) if target != self.state.current_player_index => {
                let mut next = (*self.state).clone();
                next.current_player_index = target;
                self.commit(next);
            }
            _ => {}
        }
        Ok(())
    }

    /// Steps back one score change. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let mut next = (*self.state).clone();
        let Some(previous) = next.undo_stack.pop() else {
            return false;
        };
        next.players = previous.players;
        next.current_player_index = previous.current_player_index;

        debug!(depth = next.undo_stack.len(), "undo");
        self.commit(next);
        true
    }

    /// Zeroes every score and forgets the undo history. Names, colors and
    /// enabled flags stay as they are.
    pub fn reset_game(&mut self) {
        let mut next = (*self.state).clone();
        for player in next.players.iter_mut() {
            player.score = 0;
        }
        next.undo_stack.clear();
        // Seat 0 may be disabled; the current player must stay enabled.
        next.current_player_index = next.first_enabled().unwrap_or(0);

        if next != *self.state {
            debug!("game reset");
            self.commit(next);
        }
    }

    pub fn set_player_name(
        &mut self,
        player_index: usize,
        name: impl Into<String>,
    ) -> Result<(), StoreError> {
        check_index(player_index)?;
        let name = name.into();
        if self.state.players[player_index].name == name {
            return Ok(());
        }

        let mut next = (*self.state).clone();
        next.players[player_index].name = name;
        self.commit(next);
        Ok(())
    }

    pub fn set_player_color(
        &mut self,
        player_index: usize,
        color: PlayerColor,
    ) -> Result<(), StoreError> {
        check_index(player_index)?;
        if self.state.players[player_index].color == color {
            return Ok(());
        }

        let mut next = (*self.state).clone();
        next.players[player_index].color = color;
        self.commit(next);
        Ok(())
    }

    /// Flips a player's enabled flag. Refuses, returning `Ok(false)`, when that
    /// would leave nobody enabled.
    pub fn toggle_player_enabled(&mut self, player_index: usize) -> Result<bool, StoreError> {
        check_index(player_index)?;

        let player = &self.state.players[player_index];
        if player.enabled && self.state.enabled_count() <= 1 {
            debug!(player = player_index, "refusing to disable the last enabled player");
            return Ok(false);
        }

        let mut next = (*self.state).clone();
        next.players[player_index].enabled = !player.enabled;

        if player_index == next.current_player_index && !next.players[player_index].enabled {
            if let Some(other) = next
                .players
                .iter()
                .enumerate()
                .position(|(i, p)| p.enabled && i != player_index)
            {
                next.current_player_index = other;
            }
        }

        debug!(
            player = player_index,
            enabled = next.players[player_index].enabled,
            current = next.current_player_index,
            "player toggled"
        );
        self.commit(next);
        Ok(true)
    }

    pub fn toggle_settings(&mut self) {
        let mut next = (*self.state).clone();
        next.is_settings_open = !next.is_settings_open;
        self.commit(next);
    }

    fn commit(&mut self, next: GameState) {
        debug_assert!(next.check_invariants().is_ok(), "{:?}", next.check_invariants());
        self.state = Arc::new(next);

        let state = Arc::clone(&self.state);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&state);
        }
    }
}

fn check_index(index: usize) -> Result<(), StoreError> {
    if index < PLAYER_COUNT {
        Ok(())
    } else {
        Err(StoreError::InvalidIndex {
            index,
            len: PLAYER_COUNT,
        })
    }
}
