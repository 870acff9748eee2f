//! # Display Surface
//!
//! The view never owns widgets. It drives whatever the host renders
//! through this capability, naming elements by role rather than by id.

mod memory;

pub use memory::{ElementFlags, MemorySurface};

/// Text regions the view writes markup into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Kill feed (single transient message).
    KillFeed,
    /// Notification log.
    Notifications,
    /// Leaderboard panel.
    Leaderboard,
}

/// One of the two independent upload inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadSlot {
    /// Arena background image.
    Background,
    /// Player (snake head) image.
    Player,
}

/// A file picked in an upload input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// Raw file contents.
    pub bytes: Vec<u8>,
    /// MIME type the file declared (`image/png`, ...).
    pub mime_type: String,
}

impl UploadRequest {
    /// Creates an upload request.
    #[must_use]
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }
}

/// Primitive operations on the host's UI.
///
/// Implementations must be cheap: every method is called on the UI thread
/// inside an input handler.
pub trait DisplaySurface {
    /// Current markup of a region.
    fn region_markup(&self, region: Region) -> String;

    /// Replaces the markup of a region.
    fn set_region_markup(&mut self, region: Region, markup: &str);

    /// Current value of the name field.
    fn name_field_value(&self) -> String;

    /// Replaces the value of the name field.
    fn set_name_field_value(&mut self, value: &str);

    /// Sets the text color of the name field.
    fn set_name_field_color(&mut self, color: &str);

    /// Returns true if the name field rejects typing.
    fn is_name_field_read_only(&self) -> bool;

    /// Makes the name field read-only or writable.
    fn set_name_field_read_only(&mut self, read_only: bool);

    /// Moves focus into the name field and selects its contents.
    fn focus_name_field(&mut self);

    /// Removes focus from whatever element holds it.
    fn blur_active_element(&mut self);

    /// Returns true if the invalid-name warning is shown.
    fn is_name_warning_visible(&self) -> bool;

    /// Shows or hides the invalid-name warning.
    fn set_name_warning_visible(&mut self, visible: bool);

    /// Current label of the play/watch button.
    fn play_button_label(&self) -> String;

    /// Replaces the label of the play/watch button.
    fn set_play_button_label(&mut self, label: &str);

    /// File currently selected in an upload input, if any.
    fn selected_file(&self, slot: UploadSlot) -> Option<UploadRequest>;

    /// Enters or leaves full-screen mode.
    fn toggle_full_screen(&mut self);

    /// Reveals the primary content once the game is ready.
    fn show_all_content(&mut self);
}
