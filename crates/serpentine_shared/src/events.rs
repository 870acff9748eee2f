//! Events flowing from the game/network layer into the client view.
//!
//! These are one-way: the view never answers them. They are what the
//! network layer pushes on the event bus in the `serpentine` crate.

use serde::{Deserialize, Serialize};

use crate::stats::{PlayerStatEntry, VictimSummary};

/// Game-side happenings the view turns into transient feedback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// One player killed another.
    Killed {
        /// Killer's name.
        killer_name: String,
        /// Killer's color.
        killer_color: Option<String>,
        /// Victim's name.
        victim_name: String,
        /// Victim's color.
        victim_color: Option<String>,
        /// Length the killer gained.
        victim_length: u32,
    },

    /// Several players died in the same collision.
    KilledEachOther {
        /// Everyone involved.
        victims: Vec<VictimSummary>,
    },

    /// A player hit the arena wall.
    RanIntoWall {
        /// Player's name.
        player_name: String,
        /// Player's color.
        player_color: Option<String>,
    },

    /// A player ran into themselves.
    Suicide {
        /// Player's name.
        victim_name: String,
        /// Player's color.
        victim_color: Option<String>,
    },

    /// Free-form server notification (joins, leaves, renames).
    Notification {
        /// Message text.
        text: String,
        /// Color of the player it concerns.
        color: Option<String>,
    },

    /// Fresh leaderboard snapshot.
    PlayerStats {
        /// Rows in display order.
        entries: Vec<PlayerStatEntry>,
    },

    /// The server confirmed (or assigned) the local player's name.
    PlayerNameChanged {
        /// Name to show in the name field.
        name: String,
        /// Player color, if assigned.
        color: Option<String>,
    },

    /// The game finished loading; reveal the interface.
    Ready,
}

impl GameEvent {
    /// Returns true for events that write the kill feed.
    #[must_use]
    pub const fn is_kill_feed(&self) -> bool {
        matches!(
            self,
            Self::Killed { .. }
                | Self::KilledEachOther { .. }
                | Self::RanIntoWall { .. }
                | Self::Suicide { .. }
        )
    }
}
