//! # Input Router
//!
//! Single entry point for every key press, physical or synthetic.
//!
//! ## Key algorithm
//!
//! 1. Up/Down, or Space aimed at the page root: suppress page scrolling.
//! 2. Enter while editing the name: commit, blur, stop.
//! 3. Viewing: forward the raw code to the movement layer.
//! 4. Editing and not Enter: absorbed by the text field.
//!
//! On-screen arrows build a [`KeyEvent`] and re-enter step 1, so there is
//! exactly one place that decides what a direction means.

use crate::hooks::GameHooks;
use crate::input::{Control, Direction, EventOrigin, KeyCode, KeyEvent};
use crate::name_edit::{Mode, NameEditor};
use crate::play_toggle::PlayToggle;
use crate::surface::DisplaySurface;

/// What the host should do with the native key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyDisposition {
    /// Suppress the host's default action (page scroll).
    pub prevent_default: bool,
    /// The router acted on the key.
    pub consumed: bool,
}

/// Central input dispatcher. Owns the [`NameEditor`], and with it the mode.
#[derive(Debug, Clone)]
pub struct InputRouter {
    editor: NameEditor,
}

impl InputRouter {
    /// Creates a router in [`Mode::Viewing`].
    #[must_use]
    pub const fn new(max_name_length: usize) -> Self {
        Self {
            editor: NameEditor::new(max_name_length),
        }
    }

    /// Current input mode.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.editor.mode()
    }

    /// Handles one key press.
    pub fn handle_key<S, H>(&mut self, event: KeyEvent, surface: &mut S, hooks: &mut H) -> KeyDisposition
    where
        S: DisplaySurface + ?Sized,
        H: GameHooks + ?Sized,
    {
        let prevent_default = event.code.is_vertical_scroll()
            || (event.code == KeyCode::SPACE && event.origin == EventOrigin::PageRoot);

        if self.editor.is_editing() {
            if event.code != KeyCode::ENTER {
                return KeyDisposition {
                    prevent_default,
                    consumed: false,
                };
            }
            if let Err(err) = self.editor.commit(surface, hooks) {
                tracing::debug!("Enter kept the name field in edit mode: {}", err);
            }
            surface.blur_active_element();
            return KeyDisposition {
                prevent_default,
                consumed: true,
            };
        }

        self.route_command(event.code, hooks);
        KeyDisposition {
            prevent_default,
            consumed: true,
        }
    }

    /// The command bus: every movement/action code reaches the game here.
    pub fn route_command<H: GameHooks + ?Sized>(&self, code: KeyCode, hooks: &mut H) {
        hooks.on_key_command(code.raw());
    }

    /// An on-screen arrow was pressed.
    pub fn activate_direction<S, H>(&mut self, direction: Direction, surface: &mut S, hooks: &mut H) -> KeyDisposition
    where
        S: DisplaySurface + ?Sized,
        H: GameHooks + ?Sized,
    {
        self.handle_key(KeyEvent::synthetic(direction), surface, hooks)
    }

    /// An on-screen control was pressed.
    pub fn activate<S, H>(&mut self, control: Control, surface: &mut S, hooks: &mut H)
    where
        S: DisplaySurface + ?Sized,
        H: GameHooks + ?Sized,
    {
        match control {
            Control::Arrow(direction) => {
                self.activate_direction(direction, surface, hooks);
            }
            Control::ChangeName => {
                if let Err(err) = self.editor.toggle(surface, hooks) {
                    tracing::debug!("Change-name control kept edit mode: {}", err);
                }
            }
            Control::PlayOrWatch => PlayToggle.activate(surface, hooks),
            Control::Mute => hooks.on_mute_audio_toggled(),
            Control::FullScreen => surface.toggle_full_screen(),
        }
    }

    /// The name field lost focus.
    pub fn on_name_blur<S, H>(&mut self, surface: &mut S, hooks: &mut H)
    where
        S: DisplaySurface + ?Sized,
        H: GameHooks + ?Sized,
    {
        if let Err(err) = self.editor.on_blur(surface, hooks) {
            tracing::debug!("Name field blurred with an invalid name: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Modifiers;
    use crate::name_edit::tests::Recorder;
    use crate::surface::MemorySurface;

    fn setup() -> (InputRouter, MemorySurface, Recorder) {
        (InputRouter::new(10), MemorySurface::new(), Recorder::default())
    }

    #[test]
    fn test_viewing_forwards_raw_codes() {
        let (mut router, mut surface, mut hooks) = setup();

        for code in [37, 38, 39, 40, 87, 32] {
            let disposition = router.handle_key(KeyEvent::pressed(KeyCode(code)), &mut surface, &mut hooks);
            assert!(disposition.consumed);
        }
        assert_eq!(hooks.commands, [37, 38, 39, 40, 87, 32]);
    }

    #[test]
    fn test_scroll_suppression() {
        let (mut router, mut surface, mut hooks) = setup();

        let up = router.handle_key(KeyEvent::pressed(KeyCode::UP), &mut surface, &mut hooks);
        let down = router.handle_key(KeyEvent::pressed(KeyCode::DOWN), &mut surface, &mut hooks);
        let left = router.handle_key(KeyEvent::pressed(KeyCode::LEFT), &mut surface, &mut hooks);
        let space_root = router.handle_key(KeyEvent::pressed(KeyCode::SPACE), &mut surface, &mut hooks);
        let space_field = router.handle_key(
            KeyEvent::new(KeyCode::SPACE, Modifiers::NONE, EventOrigin::Element),
            &mut surface,
            &mut hooks,
        );

        assert!(up.prevent_default);
        assert!(down.prevent_default);
        assert!(!left.prevent_default);
        assert!(space_root.prevent_default);
        assert!(!space_field.prevent_default);
    }

    #[test]
    fn test_synthetic_arrows_match_physical_keys() {
        let (mut router, mut surface, mut hooks) = setup();
        for direction in Direction::ALL {
            router.activate(Control::Arrow(direction), &mut surface, &mut hooks);
        }
        let (mut router2, mut surface2, mut physical) = setup();
        for direction in Direction::ALL {
            router2.handle_key(KeyEvent::pressed(direction.key_code()), &mut surface2, &mut physical);
        }

        assert_eq!(hooks.commands, [38, 40, 37, 39]);
        assert_eq!(hooks.commands, physical.commands);
    }

    #[test]
    fn test_editing_absorbs_keys() {
        let (mut router, mut surface, mut hooks) = setup();
        router.activate(Control::ChangeName, &mut surface, &mut hooks);
        assert_eq!(router.mode(), Mode::EditingName);

        for code in [37, 38, 65, 32] {
            let disposition = router.handle_key(
                KeyEvent::new(KeyCode(code), Modifiers::NONE, EventOrigin::Element),
                &mut surface,
                &mut hooks,
            );
            assert!(!disposition.consumed);
        }
        router.activate_direction(Direction::Left, &mut surface, &mut hooks);
        assert!(hooks.commands.is_empty());
    }

    #[test]
    fn test_enter_commits_and_blurs() {
        let (mut router, mut surface, mut hooks) = setup();
        router.activate(Control::ChangeName, &mut surface, &mut hooks);
        surface.set_name_field_value("python");

        let disposition = router.handle_key(
            KeyEvent::new(KeyCode::ENTER, Modifiers::NONE, EventOrigin::Element),
            &mut surface,
            &mut hooks,
        );

        assert!(disposition.consumed);
        assert_eq!(router.mode(), Mode::Viewing);
        assert!(!surface.name_field_focused());
        assert!(surface.is_name_field_read_only());
        assert_eq!(hooks.names, ["python"]);
        assert!(hooks.commands.is_empty());

        // The host reports the blur; it must not commit a second time.
        router.on_name_blur(&mut surface, &mut hooks);
        assert_eq!(hooks.names.len(), 1);
    }

    #[test]
    fn test_enter_with_invalid_name_stays_in_edit_mode() {
        let (mut router, mut surface, mut hooks) = setup();
        router.activate(Control::ChangeName, &mut surface, &mut hooks);
        surface.set_name_field_value("");

        let disposition = router.handle_key(KeyEvent::pressed(KeyCode::ENTER), &mut surface, &mut hooks);

        assert!(disposition.consumed);
        assert_eq!(router.mode(), Mode::EditingName);
        assert!(!surface.name_field_focused());
        assert!(!surface.is_name_field_read_only());
        assert!(surface.is_name_warning_visible());
        assert!(hooks.names.is_empty());

        // The blur that follows retries the commit and fails the same way.
        router.on_name_blur(&mut surface, &mut hooks);
        assert_eq!(router.mode(), Mode::EditingName);
        assert!(hooks.names.is_empty());
    }

    #[test]
    fn test_enter_with_blank_name_removes_focus() {
        let (mut router, mut surface, mut hooks) = setup();
        router.activate(Control::ChangeName, &mut surface, &mut hooks);
        surface.set_name_field_value("   ");

        router.handle_key(
            KeyEvent::new(KeyCode::ENTER, Modifiers::NONE, EventOrigin::Element),
            &mut surface,
            &mut hooks,
        );

        assert_eq!(router.mode(), Mode::EditingName);
        assert!(!surface.name_field_focused());
        assert!(surface.is_name_warning_visible());
        assert!(hooks.commands.is_empty());
    }

    #[test]
    fn test_change_name_with_invalid_name_keeps_editing() {
        let (mut router, mut surface, mut hooks) = setup();
        router.activate(Control::ChangeName, &mut surface, &mut hooks);
        surface.set_name_field_value("");

        router.activate(Control::ChangeName, &mut surface, &mut hooks);

        assert_eq!(router.mode(), Mode::EditingName);
        assert!(surface.is_name_warning_visible());
        assert!(hooks.names.is_empty());
    }

    #[test]
    fn test_enter_while_viewing_is_a_command() {
        let (mut router, mut surface, mut hooks) = setup();
        router.handle_key(KeyEvent::pressed(KeyCode::ENTER), &mut surface, &mut hooks);
        assert_eq!(hooks.commands, [13]);
    }

    #[test]
    fn test_other_controls() {
        let (mut router, mut surface, mut hooks) = setup();

        router.activate(Control::Mute, &mut surface, &mut hooks);
        router.activate(Control::FullScreen, &mut surface, &mut hooks);
        router.activate(Control::PlayOrWatch, &mut surface, &mut hooks);

        assert_eq!(hooks.mutes, 1);
        assert!(surface.is_full_screen());
        assert_eq!(hooks.joins, 1);
    }
}
