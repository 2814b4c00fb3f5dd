//! Navigation state machine: a bounded stack of [`Screen`]s.
//!
//! The stack is capped at 8 entries (embedded-safe, no heap). Unlike a
//! silent bounded buffer, a refused push is reported so the caller can
//! leave the current screen in place and log it.

use heapless::Vec;

use crate::screen::Screen;

/// Maximum stack depth.
pub const MAX_DEPTH: usize = 8;

/// Navigation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavigationError {
    /// The stack already holds [`MAX_DEPTH`] screens.
    StackFull,
}

impl core::fmt::Display for NavigationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::StackFull => write!(f, "Navigation stack is full"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NavigationError {}

/// Result of a successful push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Screen now on top.
    pub entering: Screen,
    /// Screen it covers, if any.
    pub covered: Option<Screen>,
    /// Whether the host should animate the change.
    pub animated: bool,
}

/// Navigation stack bounded at [`MAX_DEPTH`] entries.
pub struct Navigator {
    stack: Vec<Screen, MAX_DEPTH>,
}

impl Navigator {
    /// Create an empty navigator.
    pub const fn new() -> Self {
        Navigator { stack: Vec::new() }
    }

    /// Return the screen currently at the top of the stack.
    #[must_use]
    pub fn current(&self) -> Option<Screen> {
        self.stack.last().copied()
    }

    /// Push a new screen on top.
    pub fn push(&mut self, screen: Screen, animated: bool) -> Result<Transition, NavigationError> {
        let covered = self.current();
        self.stack
            .push(screen)
            .map_err(|_| NavigationError::StackFull)?;
        Ok(Transition {
            entering: screen,
            covered,
            animated,
        })
    }

    /// Pop the top screen, returning it. Popping the last screen empties
    /// the stack; the app treats that as a request to exit.
    pub fn pop(&mut self) -> Option<Screen> {
        self.stack.pop()
    }

    /// Undo `transition` if its screen is still on top.
    pub fn cancel(&mut self, transition: &Transition) -> bool {
        if self.current() == Some(transition.entering) {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Whether `screen` appears anywhere on the stack.
    #[must_use]
    pub fn contains(&self, screen: Screen) -> bool {
        self.stack.contains(&screen)
    }

    /// Whether any directions screen is on the stack.
    #[must_use]
    pub fn contains_directions(&self) -> bool {
        self.stack
            .iter()
            .any(|s| matches!(s, Screen::Directions(_)))
    }

    /// Return the number of entries currently on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::{NavigationError, Navigator, MAX_DEPTH};
    use crate::screen::Screen;
    use crate::transit_mode::TransitMode;

    #[test]
    fn test_nav_starts_empty() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), None);
        assert!(nav.is_empty());
    }

    #[test]
    fn test_nav_push_reports_covered_screen() {
        let mut nav = Navigator::new();
        let first = nav.push(Screen::TransitSelect, true).unwrap();
        assert_eq!(first.covered, None);
        assert!(first.animated);

        let second = nav.push(Screen::Directions(TransitMode::Car), false).unwrap();
        assert_eq!(second.covered, Some(Screen::TransitSelect));
        assert_eq!(nav.current(), Some(Screen::Directions(TransitMode::Car)));
    }

    #[test]
    fn test_nav_pop_returns_top() {
        let mut nav = Navigator::new();
        nav.push(Screen::TransitSelect, true).unwrap();
        nav.push(Screen::Directions(TransitMode::Train), true).unwrap();
        assert_eq!(nav.pop(), Some(Screen::Directions(TransitMode::Train)));
        assert_eq!(nav.current(), Some(Screen::TransitSelect));
        assert_eq!(nav.pop(), Some(Screen::TransitSelect));
        assert_eq!(nav.pop(), None);
    }

    #[test]
    fn test_nav_stack_max_depth() {
        let mut nav = Navigator::new();
        for _ in 0..MAX_DEPTH {
            nav.push(Screen::TransitSelect, true).unwrap();
        }
        assert_eq!(
            nav.push(Screen::TransitSelect, true),
            Err(NavigationError::StackFull)
        );
        assert_eq!(nav.depth(), MAX_DEPTH);
    }

    #[test]
    fn test_nav_cancel_only_removes_matching_top() {
        let mut nav = Navigator::new();
        let t = nav.push(Screen::TransitSelect, true).unwrap();
        nav.push(Screen::Directions(TransitMode::Walk), true).unwrap();
        assert!(!nav.cancel(&t));
        assert_eq!(nav.depth(), 2);
        nav.pop();
        assert!(nav.cancel(&t));
        assert!(nav.is_empty());
    }

    #[test]
    fn test_nav_contains() {
        let mut nav = Navigator::new();
        nav.push(Screen::TransitSelect, true).unwrap();
        assert!(nav.contains(Screen::TransitSelect));
        assert!(!nav.contains_directions());
        nav.push(Screen::Directions(TransitMode::Bike), true).unwrap();
        assert!(nav.contains_directions());
    }
}
