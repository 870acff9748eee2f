//! Keyboard events and on-screen controls.
//!
//! Physical keys and on-screen buttons both end up as a [`KeyEvent`];
//! the router never needs to know which one it got.

use serpentine_shared::constants::{
    DOWN_ARROW_KEYCODE, ENTER_KEYCODE, LEFT_ARROW_KEYCODE, RIGHT_ARROW_KEYCODE,
    SPACE_BAR_KEYCODE, UP_ARROW_KEYCODE,
};

/// Raw key code as delivered by the host.
///
/// Codes the router does not recognise are passed to the movement layer
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u32);

impl KeyCode {
    /// Enter/Return key.
    pub const ENTER: Self = Self(ENTER_KEYCODE);
    /// Space bar.
    pub const SPACE: Self = Self(SPACE_BAR_KEYCODE);
    /// Arrow left.
    pub const LEFT: Self = Self(LEFT_ARROW_KEYCODE);
    /// Arrow up.
    pub const UP: Self = Self(UP_ARROW_KEYCODE);
    /// Arrow right.
    pub const RIGHT: Self = Self(RIGHT_ARROW_KEYCODE);
    /// Arrow down.
    pub const DOWN: Self = Self(DOWN_ARROW_KEYCODE);

    /// Returns the raw code.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns true for the keys that scroll the page vertically.
    #[must_use]
    pub const fn is_vertical_scroll(self) -> bool {
        self.0 == UP_ARROW_KEYCODE || self.0 == DOWN_ARROW_KEYCODE
    }
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Alt key is held.
    pub alt: bool,
    /// Control key is held.
    pub ctrl: bool,
    /// Shift key is held.
    pub shift: bool,
    /// Meta/Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// No modifier held.
    pub const NONE: Self = Self {
        alt: false,
        ctrl: false,
        shift: false,
        meta: false,
    };
}

/// Where the key event was targeted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventOrigin {
    /// The page root (nothing focused).
    #[default]
    PageRoot,
    /// A focused element such as the name field.
    Element,
}

/// A key press, physical or synthetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key code.
    pub code: KeyCode,
    /// Modifier state at press time.
    pub modifiers: Modifiers,
    /// Event target.
    pub origin: EventOrigin,
}

impl KeyEvent {
    /// Creates a key event.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: Modifiers, origin: EventOrigin) -> Self {
        Self {
            code,
            modifiers,
            origin,
        }
    }

    /// Creates an unmodified key press aimed at the page root.
    #[must_use]
    pub const fn pressed(code: KeyCode) -> Self {
        Self::new(code, Modifiers::NONE, EventOrigin::PageRoot)
    }

    /// Builds the event an on-screen arrow button emits.
    ///
    /// All modifier flags are cleared.
    #[must_use]
    pub const fn synthetic(direction: Direction) -> Self {
        Self::pressed(direction.key_code())
    }
}

/// One of the four movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up.
    Up,
    /// Down.
    Down,
    /// Left.
    Left,
    /// Right.
    Right,
}

impl Direction {
    /// All directions, in on-screen order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Key code this direction is indistinguishable from.
    #[must_use]
    pub const fn key_code(self) -> KeyCode {
        match self {
            Self::Up => KeyCode::UP,
            Self::Down => KeyCode::DOWN,
            Self::Left => KeyCode::LEFT,
            Self::Right => KeyCode::RIGHT,
        }
    }
}

/// Clickable on-screen controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// One of the four arrow buttons.
    Arrow(Direction),
    /// Change-name button (enter edit mode / commit).
    ChangeName,
    /// Play/Watch toggle.
    PlayOrWatch,
    /// Mute toggle.
    Mute,
    /// Full-screen toggle.
    FullScreen,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_event_shape() {
        for direction in Direction::ALL {
            let event = KeyEvent::synthetic(direction);
            assert_eq!(event.modifiers, Modifiers::NONE);
            assert_eq!(event.origin, EventOrigin::PageRoot);
            assert_eq!(event, KeyEvent::pressed(direction.key_code()));
        }
    }

    #[test]
    fn test_direction_codes() {
        assert_eq!(Direction::Up.key_code().raw(), 38);
        assert_eq!(Direction::Down.key_code().raw(), 40);
        assert_eq!(Direction::Left.key_code().raw(), 37);
        assert_eq!(Direction::Right.key_code().raw(), 39);
    }

    #[test]
    fn test_vertical_scroll_keys() {
        assert!(KeyCode::UP.is_vertical_scroll());
        assert!(KeyCode::DOWN.is_vertical_scroll());
        assert!(!KeyCode::LEFT.is_vertical_scroll());
        assert!(!KeyCode::SPACE.is_vertical_scroll());
    }
}
