//! # Name Edit State Machine
//!
//! ## States
//!
//! - **Viewing**: the name field is read-only; keys drive the snake.
//! - **EditingName**: the name field is writable and focused; keys type.
//!
//! `begin_edit` and `commit` are the only transitions, and this machine is
//! the only writer of [`Mode`].

use crate::error::NameError;
use crate::hooks::GameHooks;
use crate::surface::DisplaySurface;

/// How keyboard input is currently interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Keys are game commands.
    #[default]
    Viewing,
    /// Keys go to the name field.
    EditingName,
}

/// Checks a candidate name.
///
/// Emptiness is judged on the trimmed value; length on the raw value.
///
/// # Errors
///
/// [`NameError::Empty`] if nothing but whitespace remains,
/// [`NameError::TooLong`] if the raw value exceeds `max_length` characters.
pub fn validate_name(candidate: &str, max_length: usize) -> Result<(), NameError> {
    if candidate.trim().is_empty() {
        return Err(NameError::Empty);
    }
    let length = candidate.chars().count();
    if length > max_length {
        return Err(NameError::TooLong {
            length,
            max: max_length,
        });
    }
    Ok(())
}

/// Owner of the input [`Mode`].
#[derive(Debug, Clone)]
pub struct NameEditor {
    mode: Mode,
    max_length: usize,
}

impl NameEditor {
    /// Creates an editor in [`Mode::Viewing`].
    #[must_use]
    pub const fn new(max_length: usize) -> Self {
        Self {
            mode: Mode::Viewing,
            max_length,
        }
    }

    /// Current mode.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns true while the name field is being edited.
    #[inline]
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.mode == Mode::EditingName
    }

    /// Viewing → EditingName: unlocks the field, focuses it and selects
    /// its contents. Does nothing if already editing.
    pub fn begin_edit<S: DisplaySurface + ?Sized>(&mut self, surface: &mut S) {
        if self.is_editing() {
            return;
        }
        surface.set_name_field_read_only(false);
        surface.focus_name_field();
        self.mode = Mode::EditingName;
        tracing::debug!("Mode transition: Viewing -> EditingName");
    }

    /// EditingName → Viewing, if the field holds a valid name.
    ///
    /// On success the raw field value goes to
    /// [`GameHooks::on_player_name_updated`], the field locks and the
    /// warning hides. On failure the warning shows and editing continues.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; the surface already reflects it.
    pub fn commit<S, H>(&mut self, surface: &mut S, hooks: &mut H) -> Result<(), NameError>
    where
        S: DisplaySurface + ?Sized,
        H: GameHooks + ?Sized,
    {
        let candidate = surface.name_field_value();
        if let Err(err) = validate_name(&candidate, self.max_length) {
            surface.set_name_warning_visible(true);
            tracing::debug!("Rejected player name: {}", err);
            return Err(err);
        }

        hooks.on_player_name_updated(&candidate);
        surface.set_name_field_read_only(true);
        self.mode = Mode::Viewing;
        surface.set_name_warning_visible(false);
        tracing::debug!("Mode transition: EditingName -> Viewing");
        Ok(())
    }

    /// Change-name control: enters edit mode, or commits if editing.
    ///
    /// # Errors
    ///
    /// Same as [`Self::commit`] when a commit is attempted.
    pub fn toggle<S, H>(&mut self, surface: &mut S, hooks: &mut H) -> Result<(), NameError>
    where
        S: DisplaySurface + ?Sized,
        H: GameHooks + ?Sized,
    {
        if self.is_editing() {
            self.commit(surface, hooks)
        } else {
            self.begin_edit(surface);
            Ok(())
        }
    }

    /// The name field lost focus. Commits only while editing.
    ///
    /// # Errors
    ///
    /// Same as [`Self::commit`].
    pub fn on_blur<S, H>(&mut self, surface: &mut S, hooks: &mut H) -> Result<(), NameError>
    where
        S: DisplaySurface + ?Sized,
        H: GameHooks + ?Sized,
    {
        if self.is_editing() {
            self.commit(surface, hooks)
        } else {
            Ok(())
        }
    }
}
