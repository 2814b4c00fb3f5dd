//! Top-level app: owns the navigator and both screens, routes input to the
//! screen on top, and fires each screen's visible/hidden hooks as the stack
//! changes.
//!
//! A screen is hidden only once it has left the stack entirely. Pushing
//! directions over the picker leaves the picker loaded, so going back shows
//! it again without reloading its icons.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use platform::{AssetStore, Button, DisplayCapabilities, InputEvent};

use crate::directions::DirectionsScreen;
use crate::error::ScreenConstructionError;
use crate::navigation::{NavigationError, Navigator};
use crate::screen::Screen;
use crate::transit_mode::TransitMode;
use crate::transit_select::{SelectorOutcome, TransitModeSelector};

/// What the host should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppEvent {
    /// Nothing changed
    Idle,
    /// The top screen changed its content; redraw
    Redraw,
    /// A mode was chosen and directions pushed; redraw
    ModeChosen(TransitMode),
    /// The last screen was popped; the app should exit
    ExitRequested,
}

/// Failures surfaced by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppError {
    /// A screen could not build its visible state
    Construction(ScreenConstructionError),
    /// The navigation stack refused a push
    Navigation(NavigationError),
}

impl From<ScreenConstructionError> for AppError {
    fn from(e: ScreenConstructionError) -> Self {
        Self::Construction(e)
    }
}

impl From<NavigationError> for AppError {
    fn from(e: NavigationError) -> Self {
        Self::Navigation(e)
    }
}

impl core::fmt::Display for AppError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Construction(e) => write!(f, "Screen construction failed: {e}"),
            Self::Navigation(e) => write!(f, "Navigation failed: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AppError {}

/// The watch app.
pub struct WatchApp<S: AssetStore> {
    assets: S,
    nav: Navigator,
    selector: TransitModeSelector,
    directions: DirectionsScreen,
}

impl<S: AssetStore> WatchApp<S> {
    /// Build the app for a panel with `caps` and `size`, reading icons from
    /// `assets`. Nothing is on screen until [`start`](Self::start).
    pub fn new(caps: DisplayCapabilities, size: Size, assets: S) -> Self {
        Self {
            assets,
            nav: Navigator::new(),
            selector: TransitModeSelector::new(caps, size),
            directions: DirectionsScreen::new(caps, size),
        }
    }

    /// Show the picker.
    ///
    /// If the picker cannot build its content the push is undone and the
    /// stack is left as it was.
    pub fn start(&mut self) -> Result<(), AppError> {
        let transition = self.selector.show(&mut self.nav)?;
        if let Err(e) = self.selector.on_visible(&self.assets) {
            self.nav.cancel(&transition);
            #[cfg(feature = "tracing")]
            tracing::error!(error = %e, "transit picker failed to load");
            #[cfg(feature = "defmt")]
            defmt::error!("transit picker failed to load: {}", e);
            return Err(e.into());
        }
        #[cfg(feature = "tracing")]
        tracing::info!(depth = self.nav.depth(), "app started");
        Ok(())
    }

    /// Route `event` to the screen on top of the stack.
    pub fn handle_input(&mut self, event: InputEvent) -> Result<AppEvent, AppError> {
        #[cfg(feature = "tracing")]
        if let InputEvent::ButtonPress(button) = event {
            tracing::trace!(button = button.name(), screen = ?self.nav.current(), "button press");
        }
        match self.nav.current() {
            None => Ok(AppEvent::Idle),
            Some(Screen::TransitSelect) => match self.selector.handle_input(event) {
                SelectorOutcome::Ignored => Ok(AppEvent::Idle),
                SelectorOutcome::Moved => Ok(AppEvent::Redraw),
                SelectorOutcome::Chosen(mode) => {
                    self.directions.push(&mut self.nav, mode)?;
                    self.directions.on_visible();
                    Ok(AppEvent::ModeChosen(mode))
                }
                SelectorOutcome::Back => Ok(self.go_back()),
            },
            Some(Screen::Directions(_)) => {
                if event == InputEvent::ButtonPress(Button::Back) {
                    Ok(self.go_back())
                } else {
                    Ok(AppEvent::Idle)
                }
            }
        }
    }

    fn go_back(&mut self) -> AppEvent {
        let Some(popped) = self.nav.pop() else {
            return AppEvent::ExitRequested;
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(screen = popped.name(), depth = self.nav.depth(), "pop");

        match popped {
            Screen::TransitSelect if !self.nav.contains(Screen::TransitSelect) => {
                self.selector.on_hidden();
            }
            Screen::Directions(_) if !self.nav.contains_directions() => {
                self.directions.on_hidden();
            }
            _ => {}
        }

        if self.nav.is_empty() {
            #[cfg(feature = "defmt")]
            defmt::info!("stack empty, exit requested");
            AppEvent::ExitRequested
        } else {
            AppEvent::Redraw
        }
    }

    /// Draw the screen on top of the stack.
    pub fn render<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        match self.nav.current() {
            Some(Screen::TransitSelect) => self.selector.draw(display),
            Some(Screen::Directions(_)) => self.directions.draw(display),
            None => Ok(()),
        }
    }

    /// Navigation stack.
    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    /// The picker screen.
    pub fn selector(&self) -> &TransitModeSelector {
        &self.selector
    }

    /// The directions screen.
    pub fn directions(&self) -> &DirectionsScreen {
        &self.directions
    }

    /// Asset store the app reads icons from.
    pub fn assets(&self) -> &S {
        &self.assets
    }
}
