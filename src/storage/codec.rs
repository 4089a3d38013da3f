use tracing::{info, warn};

use crate::model::game_save::{GameSave, SaveVersion, SAVE_VERSION};
use crate::model::game_state::GameState;
use crate::storage::backend::KeyValueStorage;
use crate::storage::error::{LoadError, StorageError};

/// Storage key the board is saved under.
pub const STORAGE_KEY: &str = "game-score-storage";

/// Serializes the board, leaving out the settings-window flag.
pub fn encode(state: &GameState) -> Result<String, serde_json::Error> {
    serde_json::to_string(&GameSave::from(state))
}

/// Parses a saved board. The version is checked before the body so an older
/// or newer schema is reported as such rather than as garbage.
pub fn decode(raw: &str) -> Result<GameState, LoadError> {
    let SaveVersion { version } = serde_json::from_str(raw)?;
    if version != SAVE_VERSION {
        return Err(LoadError::VersionMismatch {
            found: version,
            expected: SAVE_VERSION,
        });
    }

    let save: GameSave = serde_json::from_str(raw)?;
    let state = GameState::from(save.state);
    state.check_invariants().map_err(LoadError::Invalid)?;
    Ok(state)
}

/// Loads the saved board, or a fresh one if there is nothing usable.
pub fn hydrate(storage: &dyn KeyValueStorage, key: &str) -> GameState {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!(key, "no saved board, starting fresh");
            return GameState::default();
        }
        Err(e) => {
            warn!(key, error = %e, "could not read saved board, starting fresh");
            return GameState::default();
        }
    };

    match decode(&raw) {
        Ok(state) => {
            info!(key, undo_depth = state.undo_stack.len(), "restored saved board");
            state
        }
        Err(e) => {
            warn!(key, error = %e, "discarding saved board");
            GameState::default()
        }
    }
}

pub fn clear(storage: &dyn KeyValueStorage, key: &str) -> Result<(), StorageError> {
    storage.remove_item(key)
}
