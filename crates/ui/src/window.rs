//! Window shell: the full-screen surface a screen draws into.
//!
//! A window outlives the content it hosts: screens build their layers when
//! the window is loaded and drop them when it is unloaded, but keep the
//! window itself for the next push.
//!
//! The window tracks how many layers are attached but does not own them;
//! each screen keeps and draws its own layers.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use platform::config::COLOR_BACKGROUND;

/// Whether the window's content currently exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WindowState {
    /// Created, content not built (initial state, and after unload)
    Unloaded,
    /// Content built and attached
    Loaded,
}

/// A screen shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    size: Size,
    background: Rgb565,
    state: WindowState,
    routes_clicks: bool,
    child_layers: u8,
    loads: u32,
}

impl Window {
    /// Create an unloaded window covering a panel of `size`.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            background: COLOR_BACKGROUND,
            state: WindowState::Unloaded,
            routes_clicks: false,
            child_layers: 0,
            loads: 0,
        }
    }

    /// Bounds of the root layer, in window coordinates.
    pub fn root_bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.size)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> WindowState {
        self.state
    }

    /// `true` while content is built.
    pub fn is_loaded(&self) -> bool {
        self.state == WindowState::Loaded
    }

    /// How many times the window has been loaded since creation.
    pub fn load_count(&self) -> u32 {
        self.loads
    }

    /// Record that content has been built.
    pub fn mark_loaded(&mut self) {
        self.state = WindowState::Loaded;
        self.loads = self.loads.saturating_add(1);
    }

    /// Record that content has been dropped; detaches layers and input.
    pub fn mark_unloaded(&mut self) {
        self.state = WindowState::Unloaded;
        self.routes_clicks = false;
        self.child_layers = 0;
    }

    /// Hand the window's button clicks to its menu layer.
    pub fn route_clicks_to_menu(&mut self) {
        self.routes_clicks = true;
    }

    /// Whether button clicks are routed to a menu layer.
    pub fn routes_clicks(&self) -> bool {
        self.routes_clicks
    }

    /// Count a layer as attached to the root layer. The layer itself stays
    /// with the screen that built it.
    pub fn add_child_layer(&mut self) {
        self.child_layers = self.child_layers.saturating_add(1);
    }

    /// Number of layers attached to the root layer. Tracked, not owned.
    pub fn child_layers(&self) -> u8 {
        self.child_layers
    }

    /// Fill the root layer with the window background.
    pub fn clear<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.root_bounds()
            .into_styled(PrimitiveStyle::with_fill(self.background))
            .draw(display)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn new_window_is_unloaded() {
        let w = Window::new(Size::new(144, 168));
        assert_eq!(w.state(), WindowState::Unloaded);
        assert_eq!(w.root_bounds(), Rectangle::new(Point::zero(), Size::new(144, 168)));
        assert_eq!(w.load_count(), 0);
    }

    #[test]
    fn unload_detaches_layers_and_input() {
        let mut w = Window::new(Size::new(144, 168));
        w.mark_loaded();
        w.route_clicks_to_menu();
        w.add_child_layer();
        assert!(w.is_loaded());
        assert!(w.routes_clicks());
        assert_eq!(w.child_layers(), 1);

        w.mark_unloaded();
        assert!(!w.is_loaded());
        assert!(!w.routes_clicks());
        assert_eq!(w.child_layers(), 0);
        assert_eq!(w.load_count(), 1);
    }

    #[test]
    fn attached_layers_are_counted_not_drawn() {
        use platform::mocks::MockDisplay;

        let mut w = Window::new(Size::new(4, 4));
        w.add_child_layer();
        w.add_child_layer();
        assert_eq!(w.child_layers(), 2);

        let mut display = MockDisplay::new(4, 4);
        w.clear(&mut display).unwrap();
        assert_eq!(display.pixels_drawn(), 16, "clear paints the background only");
    }
}
