use serde::{Deserialize, Serialize};

use crate::model::game_state::{GameState, Players, UndoSnapshot};

/// Schema version written next to the saved board. Bump on breaking changes.
pub const SAVE_VERSION: u32 = 1;

/// What lands in storage: `{ "state": { ... }, "version": 1 }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSave {
    pub state: SavedBoard,
    pub version: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedBoard {
    pub players: Players,
    pub current_player_index: usize,
    pub undo_stack: Vec<UndoSnapshot>,
}

/// Only the version, read before trusting the rest of the blob.
#[derive(Debug, Deserialize)]
pub struct SaveVersion {
    pub version: u32,
}

impl From<&GameState> for GameSave {
    fn from(state: &GameState) -> Self {
        GameSave {
            state: SavedBoard {
                players: state.players.clone(),
                current_player_index: state.current_player_index,
                undo_stack: state.undo_stack.clone(),
            },
            version: SAVE_VERSION,
        }
    }
}

impl From<SavedBoard> for GameState {
    fn from(board: SavedBoard) -> Self {
        GameState {
            players: board.players,
            current_player_index: board.current_player_index,
            undo_stack: board.undo_stack,
            is_settings_open: false,
        }
    }
}
