//! Directions screen: receives the mode chosen in the picker.
//!
//! Only the hand-off is modelled here: the screen records the mode it was
//! pushed with and draws a header bar in that mode's accent colour with the
//! mode label underneath.

use embedded_graphics::mono_font::{
    ascii::{FONT_6X10, FONT_9X18_BOLD},
    MonoTextStyle,
};
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use platform::config::{ANIMATE_TRANSITIONS, COLOR_TEXT, ROW_HEIGHT};
use platform::DisplayCapabilities;

use crate::navigation::{NavigationError, Navigator, Transition};
use crate::screen::Screen;
use crate::transit_mode::TransitMode;
use crate::window::Window;

const HEADER_TITLE: &str = "Directions";

/// Screen showing directions for one transit mode.
#[derive(Debug)]
pub struct DirectionsScreen {
    caps: DisplayCapabilities,
    panel: Size,
    window: Option<Window>,
    mode: Option<TransitMode>,
}

impl DirectionsScreen {
    /// Create the screen for a panel of `panel` size. No window exists yet.
    pub fn new(caps: DisplayCapabilities, panel: Size) -> Self {
        Self {
            caps,
            panel,
            window: None,
            mode: None,
        }
    }

    /// Record `mode` and push the screen.
    pub fn push(&mut self, nav: &mut Navigator, mode: TransitMode) -> Result<Transition, NavigationError> {
        self.mode = Some(mode);
        if self.window.is_none() {
            self.window = Some(Window::new(self.panel));
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(mode = mode.label(), "directions: push");
        nav.push(Screen::Directions(mode), ANIMATE_TRANSITIONS)
    }

    /// Mode the screen was last pushed with.
    pub fn mode(&self) -> Option<TransitMode> {
        self.mode
    }

    /// Whether the screen's content is built.
    pub fn is_visible(&self) -> bool {
        self.window.as_ref().is_some_and(Window::is_loaded)
    }

    /// The window shell, once created.
    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    /// Attach the header and label layers.
    pub fn on_visible(&mut self) {
        if let Some(window) = self.window.as_mut() {
            if !window.is_loaded() {
                window.add_child_layer();
                window.add_child_layer();
                window.mark_loaded();
            }
        }
    }

    /// Detach all layers; keep the window.
    pub fn on_hidden(&mut self) {
        if let Some(window) = self.window.as_mut() {
            window.mark_unloaded();
        }
    }

    /// Header fill for the current mode: the accent colour on colour panels,
    /// black otherwise.
    pub fn header_color(&self) -> Rgb565 {
        match self.mode {
            Some(mode) if self.caps.supports_color => mode.descriptor().accent,
            _ => Rgb565::BLACK,
        }
    }

    /// Draw the header bar and the mode label.
    #[allow(clippy::cast_possible_wrap, clippy::arithmetic_side_effects)] // panel is at most a few hundred px
    pub fn draw<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let (Some(window), Some(mode)) = (self.window.as_ref(), self.mode) else {
            return Ok(());
        };
        window.clear(display)?;

        let bounds = window.root_bounds();
        let header = Rectangle::new(bounds.top_left, Size::new(bounds.size.width, u32::from(ROW_HEIGHT)));
        header
            .into_styled(PrimitiveStyle::with_fill(self.header_color()))
            .draw(display)?;

        let centered = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        Text::with_text_style(
            HEADER_TITLE,
            header.center(),
            MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE),
            centered,
        )
        .draw(display)?;

        let body_center = Point::new(
            bounds.center().x,
            header.bottom_right().map_or(0, |p| p.y) + (bounds.size.height as i32 - i32::from(ROW_HEIGHT)) / 2,
        );
        Text::with_text_style(
            mode.label(),
            body_center,
            MonoTextStyle::new(&FONT_9X18_BOLD, COLOR_TEXT),
            centered,
        )
        .draw(display)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use platform::mocks::MockDisplay;

    fn screen(caps: DisplayCapabilities) -> DirectionsScreen {
        DirectionsScreen::new(caps, Size::new(144, 168))
    }

    #[test]
    fn push_records_mode() {
        let mut nav = Navigator::new();
        let mut d = screen(DisplayCapabilities::COLOR_RECT);
        let t = d.push(&mut nav, TransitMode::Bike).unwrap();
        assert_eq!(t.entering, Screen::Directions(TransitMode::Bike));
        assert_eq!(d.mode(), Some(TransitMode::Bike));
        assert!(!d.is_visible());
    }

    #[test]
    fn visible_and_hidden_toggle_layers() {
        let mut nav = Navigator::new();
        let mut d = screen(DisplayCapabilities::COLOR_RECT);
        d.push(&mut nav, TransitMode::Walk).unwrap();
        d.on_visible();
        d.on_visible();
        assert!(d.is_visible());
        assert_eq!(d.window().unwrap().child_layers(), 2);
        d.on_hidden();
        assert!(!d.is_visible());
        assert_eq!(d.window().unwrap().child_layers(), 0);
    }

    #[test]
    fn header_uses_accent_on_colour_panels() {
        let mut nav = Navigator::new();
        let mut colour = screen(DisplayCapabilities::COLOR_RECT);
        colour.push(&mut nav, TransitMode::Train).unwrap();
        assert_eq!(colour.header_color(), TransitMode::Train.descriptor().accent);

        let mut mono = screen(DisplayCapabilities::MONO_RECT);
        mono.push(&mut nav, TransitMode::Train).unwrap();
        assert_eq!(mono.header_color(), Rgb565::BLACK);
    }

    #[test]
    fn draw_fills_header() {
        let mut nav = Navigator::new();
        let mut d = screen(DisplayCapabilities::COLOR_RECT);
        d.push(&mut nav, TransitMode::Car).unwrap();
        d.on_visible();
        let mut display = MockDisplay::new(144, 168);
        d.draw(&mut display).unwrap();
        assert_eq!(display.pixel_at(0, 0), Some(TransitMode::Car.descriptor().accent));
        assert_eq!(display.pixel_at(0, 167), Some(platform::config::COLOR_BACKGROUND));
    }

    #[test]
    fn draw_before_push_is_blank() {
        let d = screen(DisplayCapabilities::COLOR_RECT);
        let mut display = MockDisplay::new(144, 168);
        d.draw(&mut display).unwrap();
        assert_eq!(display.pixels_drawn(), 0);
    }
}
