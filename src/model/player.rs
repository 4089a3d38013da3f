use serde::{Deserialize, Serialize};

/// The fixed palette a player can pick from.
///
/// Serialized by its storage value (`bg-red-500`, ...) so saved boards keep
/// loading if the display names change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    #[serde(rename = "bg-red-500")]
    Red,
    #[serde(rename = "bg-blue-500")]
    Blue,
    #[serde(rename = "bg-green-500")]
    Green,
    #[serde(rename = "bg-purple-500")]
    Purple,
    #[serde(rename = "bg-yellow-500")]
    Yellow,
    #[serde(rename = "bg-pink-500")]
    Pink,
    #[serde(rename = "bg-orange-500")]
    Orange,
    #[serde(rename = "bg-teal-500")]
    Teal,
}

impl PlayerColor {
    pub const ALL: [PlayerColor; 8] = [
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Green,
        PlayerColor::Purple,
        PlayerColor::Yellow,
        PlayerColor::Pink,
        PlayerColor::Orange,
        PlayerColor::Teal,
    ];

    /// Default color for the player at `index`, wrapping around the palette.
    pub fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            PlayerColor::Red => "Red",
            PlayerColor::Blue => "Blue",
            PlayerColor::Green => "Green",
            PlayerColor::Purple => "Purple",
            PlayerColor::Yellow => "Yellow",
            PlayerColor::Pink => "Pink",
            PlayerColor::Orange => "Orange",
            PlayerColor::Teal => "Teal",
        }
    }

    /// Swatch used when drawing tracks and buttons.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            PlayerColor::Red => [0xef, 0x44, 0x44],
            PlayerColor::Blue => [0x3b, 0x82, 0xf6],
            PlayerColor::Green => [0x22, 0xc5, 0x5e],
            PlayerColor::Purple => [0xa8, 0x55, 0xf7],
            PlayerColor::Yellow => [0xea, 0xb3, 0x08],
            PlayerColor::Pink => [0xec, 0x48, 0x99],
            PlayerColor::Orange => [0xf9, 0x73, 0x16],
            PlayerColor::Teal => [0x14, 0xb8, 0xa6],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub score: u32,
    pub color: PlayerColor,
    pub enabled: bool,
}

impl Player {
    /// Fresh player for seat `index`: "Player N", zero score, palette color, enabled.
    pub fn new(index: usize) -> Self {
        Self {
            name: format!("Player {}", index + 1),
            score: 0,
            color: PlayerColor::for_index(index),
            enabled: true,
        }
    }
}
