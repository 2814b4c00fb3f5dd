//! Desktop key bindings for the watch buttons.
//!
//! | Key                  | Button            |
//! |----------------------|-------------------|
//! | Arrow Up / Down      | [`Button::Up`] / [`Button::Down`] |
//! | Return               | [`Button::Select`] |
//! | Backspace / Escape   | [`Button::Back`]  |
//!
//! The mapping is pure so it is testable without an SDL window; the
//! simulator binary converts SDL keycodes with [`EmulatedKey::from_keycode`].

pub use platform::{Button, InputEvent};

/// Host keyboard key that stands in for a watch button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmulatedKey {
    /// Up arrow → [`Button::Up`].
    ArrowUp,
    /// Down arrow → [`Button::Down`].
    ArrowDown,
    /// Return → [`Button::Select`].
    Enter,
    /// Backspace → [`Button::Back`].
    Backspace,
    /// Escape → [`Button::Back`].
    Escape,
}

impl EmulatedKey {
    /// Every bound key.
    pub const ALL: [EmulatedKey; 5] = [
        EmulatedKey::ArrowUp,
        EmulatedKey::ArrowDown,
        EmulatedKey::Enter,
        EmulatedKey::Backspace,
        EmulatedKey::Escape,
    ];

    /// Watch button this key presses.
    pub const fn button(self) -> Button {
        match self {
            Self::ArrowUp => Button::Up,
            Self::ArrowDown => Button::Down,
            Self::Enter => Button::Select,
            Self::Backspace | Self::Escape => Button::Back,
        }
    }

    /// Press event for this key.
    pub const fn press(self) -> InputEvent {
        InputEvent::ButtonPress(self.button())
    }

    /// Bound key for an SDL keycode, if any.
    #[cfg(feature = "simulator")]
    pub fn from_keycode(keycode: embedded_graphics_simulator::sdl2::Keycode) -> Option<Self> {
        use embedded_graphics_simulator::sdl2::Keycode;
        match keycode {
            Keycode::Up => Some(Self::ArrowUp),
            Keycode::Down => Some(Self::ArrowDown),
            Keycode::Return => Some(Self::Enter),
            Keycode::Backspace => Some(Self::Backspace),
            Keycode::Escape => Some(Self::Escape),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn arrows_move_the_menu() {
        assert_eq!(EmulatedKey::ArrowUp.press(), InputEvent::ButtonPress(Button::Up));
        assert_eq!(EmulatedKey::ArrowDown.press(), InputEvent::ButtonPress(Button::Down));
    }

    #[test]
    fn return_selects() {
        assert_eq!(EmulatedKey::Enter.button(), Button::Select);
    }

    #[test]
    fn backspace_and_escape_both_go_back() {
        assert_eq!(EmulatedKey::Backspace.button(), Button::Back);
        assert_eq!(EmulatedKey::Escape.button(), Button::Back);
    }
}
