//! Score board for a counting game played to 121.
//!
//! [`engine::store::Store`] owns the board and enforces its rules,
//! [`storage`] saves and restores it, and [`engine::gesture`] turns drags on a
//! player's button into score changes.

pub mod engine;
pub mod model;
pub mod storage;

pub use engine::error::StoreError;
pub use engine::protocol::StoreCommand;
pub use engine::store::{ListenerId, Store, StoreConfig};
pub use model::game_state::{GameState, UndoSnapshot, MAX_SCORE, PLAYER_COUNT};
pub use model::player::{Player, PlayerColor};
