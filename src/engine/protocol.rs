use crate::model::player::PlayerColor;

/// Everything the presentation layer can ask the store to do.
///
/// Gestures are turned into commands, commands are dispatched in order, and
/// the next frame renders whatever state the store ends up with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCommand {
    SetScore { player_index: usize, score: u32 },
    SetCurrentPlayer { index: usize },
    Undo,
    ResetGame,
    SetPlayerName { player_index: usize, name: String },
    SetPlayerColor { player_index: usize, color: PlayerColor },
    TogglePlayerEnabled { player_index: usize },
    ToggleSettings,
}

impl StoreCommand {
    pub fn short_name(&self) -> &'static str {
        match self {
            StoreCommand::SetScore { .. } => "SetScore",
            StoreCommand::SetCurrentPlayer { .. } => "SetCurrentPlayer",
            StoreCommand::Undo => "Undo",
            StoreCommand::ResetGame => "ResetGame",
            StoreCommand::SetPlayerName { .. } => "SetPlayerName",
            StoreCommand::SetPlayerColor { .. } => "SetPlayerColor",
            StoreCommand::TogglePlayerEnabled { .. } => "TogglePlayerEnabled",
            StoreCommand::ToggleSettings => "ToggleSettings",
        }
    }
}
