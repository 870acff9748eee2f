//! Read-only snapshots handed to the view by the game layer.

use serde::{Deserialize, Serialize};

/// One leaderboard row.
///
/// The view only formats these; it never keeps or mutates them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatEntry {
    /// Display name.
    pub name: String,
    /// CSS color of the player's snake.
    pub color: String,
    /// Current length-based score.
    pub score: u32,
    /// Best score this session.
    pub high_score: u32,
    /// Kills this session.
    pub kills: u32,
    /// Deaths this session.
    pub deaths: u32,
    /// Avatar as an image URL or `data:` URI.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A player involved in a mutual kill.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictimSummary {
    /// Display name.
    pub name: String,
    /// CSS color, if known.
    #[serde(default)]
    pub color: Option<String>,
}

impl VictimSummary {
    /// Creates a summary.
    #[must_use]
    pub fn new(name: impl Into<String>, color: Option<&str>) -> Self {
        Self {
            name: name.into(),
            color: color.map(str::to_owned),
        }
    }
}
