//! Play/Watch button.
//!
//! The label on the button is the state; nothing else is stored.

use crate::hooks::GameHooks;
use crate::surface::DisplaySurface;

/// Label shown while spectating; pressing it joins the game.
pub const PLAY_LABEL: &str = "Play";

/// Label shown while playing; pressing it switches to spectating.
pub const WATCH_LABEL: &str = "Watch";

/// Stateless driver for the play/watch button.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayToggle;

impl PlayToggle {
    /// Flips the label and fires the matching hook.
    ///
    /// Any label other than [`PLAY_LABEL`] is treated as [`WATCH_LABEL`], so
    /// the button always ends up showing one of the two.
    pub fn activate<S, H>(self, surface: &mut S, hooks: &mut H)
    where
        S: DisplaySurface + ?Sized,
        H: GameHooks + ?Sized,
    {
        if surface.play_button_label() == PLAY_LABEL {
            surface.set_play_button_label(WATCH_LABEL);
            tracing::info!("Joining game");
            hooks.on_join_game();
        } else {
            surface.set_play_button_label(PLAY_LABEL);
            tracing::info!("Spectating game");
            hooks.on_spectate_game();
        }
    }
}
