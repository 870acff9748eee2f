//! # Game Hooks
//!
//! Capabilities the rest of the client hands to the view.
//!
//! ```text
//! View calls:            Client implements:
//! ┌──────────────────┐   ┌──────────────────┐
//! │ trait GameHooks  │ ←─│ impl GameHooks   │
//! └──────────────────┘   └──────────────────┘
//! ```
//!
//! Every method is fire-and-forget; the view never waits on a result.

use std::sync::Arc;

use image::DynamicImage;
use parking_lot::Mutex;

/// Callbacks into movement, network and audio layers.
pub trait GameHooks {
    /// A background image finished decoding.
    fn on_background_image_uploaded(&mut self, image: DynamicImage, mime_type: &str);

    /// A player image finished decoding.
    fn on_image_uploaded(&mut self, image: DynamicImage, mime_type: &str);

    /// The player pressed "Play".
    fn on_join_game(&mut self);

    /// The player pressed "Watch".
    fn on_spectate_game(&mut self);

    /// A movement/action key reached the game.
    fn on_key_command(&mut self, code: u32);

    /// The mute control was activated.
    fn on_mute_audio_toggled(&mut self);

    /// A new player name was accepted.
    fn on_player_name_updated(&mut self, name: &str);
}

/// Shared hooks: the view owns one handle, the client keeps another.
impl<H: GameHooks + ?Sized> GameHooks for Arc<Mutex<H>> {
    fn on_background_image_uploaded(&mut self, image: DynamicImage, mime_type: &str) {
        self.lock().on_background_image_uploaded(image, mime_type);
    }

    fn on_image_uploaded(&mut self, image: DynamicImage, mime_type: &str) {
        self.lock().on_image_uploaded(image, mime_type);
    }

    fn on_join_game(&mut self) {
        self.lock().on_join_game();
    }

    fn on_spectate_game(&mut self) {
        self.lock().on_spectate_game();
    }

    fn on_key_command(&mut self, code: u32) {
        self.lock().on_key_command(code);
    }

    fn on_mute_audio_toggled(&mut self) {
        self.lock().on_mute_audio_toggled();
    }

    fn on_player_name_updated(&mut self, name: &str) {
        self.lock().on_player_name_updated(name);
    }
}
