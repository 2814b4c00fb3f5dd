//! Transit-mode picker: four fixed rows (Driving, Cycling, Transit, Walk).
//!
//! Lifecycle per instance:
//!
//! ```text
//! Unconstructed ──show()──▶ Hidden ──on_visible()──▶ Visible
//!                             ▲                        │
//!                             └──────on_hidden()───────┘
//! ```
//!
//! The window shell is created on the first [`TransitModeSelector::show`]
//! and reused forever after. The menu layer and the eight tinted icons exist
//! only while the screen is visible.
//!
//! Row mapping, labels, icons and accent colours all come from
//! [`TRANSIT_MODES`]; panel shape and colour support come from the
//! [`DisplayCapabilities`] given at construction.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;
use platform::config::{ANIMATE_TRANSITIONS, ROW_HEIGHT, ROW_HEIGHT_SELECTED_ROUND};
use platform::{AssetKey, AssetStore, DisplayCapabilities, InputEvent};

use crate::bitmap::IconBitmap;
use crate::cell::CellContent;
use crate::error::ScreenConstructionError;
use crate::menu::{HighlightColors, MenuAction, MenuCallbacks, MenuLayer};
use crate::navigation::{NavigationError, Navigator, Transition};
use crate::screen::Screen;
use crate::transit_mode::{descriptor, TransitMode, TransitModeDescriptor, NUM_TRANSIT_MODES, TRANSIT_MODES};
use crate::window::Window;

/// Where the picker is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SelectorState {
    /// `show()` has never been called
    Unconstructed,
    /// Shell exists, no menu or icons
    Hidden,
    /// Menu and icons are live
    Visible,
}

/// Result of routing one input event to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorOutcome {
    /// Nothing for the caller to do
    Ignored,
    /// Focus moved to another row; redraw
    Moved,
    /// A row was activated; push directions for this mode
    Chosen(TransitMode),
    /// Back pressed while the picker had focus
    Back,
}

/// Row height for the given panel and focus state.
pub fn row_height(caps: DisplayCapabilities, selected: bool) -> u16 {
    if caps.is_round && selected {
        ROW_HEIGHT_SELECTED_ROUND
    } else {
        ROW_HEIGHT
    }
}

/// Label and icon resource drawn for `row`; `None` past the last row.
pub fn row_content(row: u16, highlighted: bool) -> Option<(&'static str, AssetKey)> {
    descriptor(row).map(|d| {
        let icon = if highlighted {
            d.icon_highlighted
        } else {
            d.icon_normal
        };
        (d.label, icon)
    })
}

/// Highlight colours for `row` gaining focus; `None` on black-and-white
/// panels, which keep the menu defaults.
pub fn highlight_for(caps: DisplayCapabilities, row: u16) -> Option<HighlightColors> {
    if !caps.supports_color {
        return None;
    }
    descriptor(row).map(|d| HighlightColors {
        background: d.accent,
        foreground: Rgb565::WHITE,
    })
}

/// Both tints of one mode's glyph.
#[derive(Debug)]
struct IconPair {
    highlighted: IconBitmap,
    normal: IconBitmap,
}

impl IconPair {
    fn load<S: AssetStore>(
        store: &S,
        descriptor: &TransitModeDescriptor,
    ) -> Result<Self, ScreenConstructionError> {
        Ok(Self {
            highlighted: IconBitmap::load(store, descriptor.icon_highlighted)?,
            normal: IconBitmap::load(store, descriptor.icon_normal)?,
        })
    }
}

type IconSet = Vec<IconPair, { TRANSIT_MODES.len() }>;

/// Content that exists only while the picker is visible.
#[derive(Debug)]
struct VisibleParts {
    menu: MenuLayer,
    icons: IconSet,
}

/// Cell for `row`: the table label plus the icon in the matching tint.
fn icon_cell(icons: &[IconPair], row: u16, highlighted: bool) -> Option<CellContent<'_>> {
    let (title, _) = row_content(row, highlighted)?;
    let pair = icons.get(usize::from(row))?;
    let icon = if highlighted {
        &pair.highlighted
    } else {
        &pair.normal
    };
    Some(CellContent {
        title,
        subtitle: None,
        icon: Some(icon),
    })
}

/// Menu callbacks over the mode table and the loaded icons.
struct TransitRows<'a> {
    caps: DisplayCapabilities,
    icons: &'a [IconPair],
    activated: Option<TransitMode>,
}

impl<'a> TransitRows<'a> {
    fn new(caps: DisplayCapabilities, icons: &'a [IconPair]) -> Self {
        Self {
            caps,
            icons,
            activated: None,
        }
    }
}

impl MenuCallbacks for TransitRows<'_> {
    fn num_rows(&self) -> u16 {
        NUM_TRANSIT_MODES
    }

    fn cell_height(&self, _row: u16, selected: bool) -> u16 {
        row_height(self.caps, selected)
    }

    fn draw_row(&self, row: u16, highlighted: bool) -> Option<CellContent<'_>> {
        icon_cell(self.icons, row, highlighted)
    }

    fn selection_will_change(&mut self, highlight: &mut HighlightColors, new_row: u16, _old_row: u16) {
        if let Some(colors) = highlight_for(self.caps, new_row) {
            *highlight = colors;
        }
    }

    fn select_click(&mut self, row: u16) {
        self.activated = TransitMode::from_row(row);
    }
}

/// The transit-mode picker screen.
#[derive(Debug)]
pub struct TransitModeSelector {
    caps: DisplayCapabilities,
    panel: Size,
    window: Option<Window>,
    visible: Option<VisibleParts>,
    last_selection: Option<TransitMode>,
}

impl TransitModeSelector {
    /// Create the picker for a panel of `panel` size. No window exists yet.
    pub fn new(caps: DisplayCapabilities, panel: Size) -> Self {
        Self {
            caps,
            panel,
            window: None,
            visible: None,
            last_selection: None,
        }
    }

    /// Rows in the picker's single section.
    pub const fn num_rows(&self) -> u16 {
        NUM_TRANSIT_MODES
    }

    /// Lifecycle state.
    pub fn state(&self) -> SelectorState {
        match (&self.window, &self.visible) {
            (None, _) => SelectorState::Unconstructed,
            (Some(_), None) => SelectorState::Hidden,
            (Some(_), Some(_)) => SelectorState::Visible,
        }
    }

    /// Panel capabilities the picker was built for.
    pub fn capabilities(&self) -> DisplayCapabilities {
        self.caps
    }

    /// The window shell, once created.
    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    /// The menu layer, while visible.
    pub fn menu(&self) -> Option<&MenuLayer> {
        self.visible.as_ref().map(|v| &v.menu)
    }

    /// Number of live icon bitmaps: 8 while visible, otherwise 0.
    pub fn icons_loaded(&self) -> usize {
        self.visible
            .as_ref()
            .map_or(0, |v| v.icons.len().saturating_mul(2))
    }

    /// Mode chosen by the most recent activation, if any.
    pub fn last_selection(&self) -> Option<TransitMode> {
        self.last_selection
    }

    /// Create the shell on first use, then push it with a transition.
    ///
    /// Pushing while already on the stack pushes it again; the navigator
    /// decides what that means.
    pub fn show(&mut self, nav: &mut Navigator) -> Result<Transition, NavigationError> {
        if self.window.is_none() {
            #[cfg(feature = "tracing")]
            tracing::debug!(width = self.panel.width, height = self.panel.height, "transit picker: creating window");
            self.window = Some(Window::new(self.panel));
        }
        nav.push(Screen::TransitSelect, ANIMATE_TRANSITIONS)
    }

    /// Build the menu and load the icons.
    ///
    /// All-or-nothing: on error nothing is attached to the window and the
    /// picker stays hidden. Calling this while already visible, or before
    /// `show()`, does nothing.
    pub fn on_visible<S: AssetStore>(&mut self, store: &S) -> Result<(), ScreenConstructionError> {
        let Some(window) = self.window.as_mut() else {
            return Ok(());
        };
        if self.visible.is_some() {
            return Ok(());
        }

        let mut menu = MenuLayer::new(window.root_bounds());
        menu.set_center_focused(self.caps.is_round);
        if let Some(colors) = highlight_for(self.caps, 0) {
            menu.set_highlight_colors(colors.background, colors.foreground);
        }

        let mut icons = IconSet::new();
        for descriptor in &TRANSIT_MODES {
            let pair = match IconPair::load(store, descriptor) {
                Ok(pair) => pair,
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(asset = e.asset().resource_name(), "transit picker: icon load failed");
                    #[cfg(feature = "defmt")]
                    defmt::warn!("transit picker: icon {=str} failed to load", e.asset().resource_name());
                    return Err(e);
                }
            };
            // Capacity is TRANSIT_MODES.len()
            icons.push(pair).ok();
        }

        window.route_clicks_to_menu();
        window.add_child_layer();
        window.mark_loaded();
        self.visible = Some(VisibleParts { menu, icons });

        #[cfg(feature = "tracing")]
        tracing::debug!(icons = self.icons_loaded(), "transit picker: visible");
        #[cfg(feature = "defmt")]
        defmt::debug!("transit picker: visible");
        Ok(())
    }

    /// Drop the menu and all icons; keep the window.
    #[cfg_attr(not(any(feature = "tracing", feature = "defmt")), allow(unused_variables))]
    pub fn on_hidden(&mut self) {
        let released = self.icons_loaded();
        self.visible = None;
        if let Some(window) = self.window.as_mut() {
            window.mark_unloaded();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(released, "transit picker: hidden");
        #[cfg(feature = "defmt")]
        defmt::debug!("transit picker: hidden, released {=usize} icons", released);
    }

    /// What the row-draw callback hands the cell renderer for `row`.
    pub fn cell(&self, row: u16, highlighted: bool) -> Option<CellContent<'_>> {
        let parts = self.visible.as_ref()?;
        icon_cell(&parts.icons, row, highlighted)
    }

    /// On-screen rectangle of `row` after scrolling, while visible.
    pub fn row_bounds(&self, row: u16) -> Option<Rectangle> {
        let parts = self.visible.as_ref()?;
        Some(parts.menu.row_bounds(row, &TransitRows::new(self.caps, &parts.icons)))
    }

    /// Route one input event through the menu.
    pub fn handle_input(&mut self, event: InputEvent) -> SelectorOutcome {
        let routed = self.window.as_ref().is_some_and(Window::routes_clicks);
        let Some(parts) = self.visible.as_mut() else {
            return SelectorOutcome::Ignored;
        };
        if !routed {
            return SelectorOutcome::Ignored;
        }

        let mut rows = TransitRows::new(self.caps, &parts.icons);
        let action = parts.menu.handle_input(event, &mut rows);
        let chosen = rows.activated;

        match action {
            MenuAction::Activated(_) => match chosen {
                Some(mode) => {
                    #[cfg(feature = "tracing")]
                    tracing::info!(mode = mode.label(), "transit mode chosen");
                    #[cfg(feature = "defmt")]
                    defmt::info!("transit mode chosen: {=str}", mode.label());
                    self.last_selection = Some(mode);
                    SelectorOutcome::Chosen(mode)
                }
                None => SelectorOutcome::Ignored,
            },
            MenuAction::Moved { .. } => SelectorOutcome::Moved,
            MenuAction::Back => SelectorOutcome::Back,
            MenuAction::None => SelectorOutcome::Ignored,
        }
    }

    /// Draw the window and, while visible, the menu.
    pub fn draw<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(window) = self.window.as_ref() else {
            return Ok(());
        };
        window.clear(display)?;
        if let Some(parts) = self.visible.as_ref() {
            parts
                .menu
                .draw(display, &TransitRows::new(self.caps, &parts.icons))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use platform::mocks::CountingAssetStore;
    use platform::{Button, BundledAssets};

    fn panel() -> Size {
        Size::new(144, 168)
    }

    fn visible(caps: DisplayCapabilities) -> (TransitModeSelector, Navigator) {
        let mut nav = Navigator::new();
        let mut s = TransitModeSelector::new(caps, panel());
        s.show(&mut nav).unwrap();
        s.on_visible(&BundledAssets::new()).unwrap();
        (s, nav)
    }

    fn press(button: Button) -> InputEvent {
        InputEvent::ButtonPress(button)
    }

    #[test]
    fn starts_unconstructed() {
        let s = TransitModeSelector::new(DisplayCapabilities::COLOR_RECT, panel());
        assert_eq!(s.state(), SelectorState::Unconstructed);
        assert!(s.window().is_none());
        assert_eq!(s.icons_loaded(), 0);
        assert_eq!(s.last_selection(), None);
    }

    #[test]
    fn show_creates_shell_and_pushes() {
        let mut nav = Navigator::new();
        let mut s = TransitModeSelector::new(DisplayCapabilities::COLOR_RECT, panel());
        let t = s.show(&mut nav).unwrap();
        assert_eq!(t.entering, Screen::TransitSelect);
        assert_eq!(t.animated, ANIMATE_TRANSITIONS);
        assert_eq!(s.state(), SelectorState::Hidden);
        assert_eq!(nav.current(), Some(Screen::TransitSelect));
    }

    #[test]
    fn on_visible_before_show_is_a_no_op() {
        let mut s = TransitModeSelector::new(DisplayCapabilities::COLOR_RECT, panel());
        s.on_visible(&BundledAssets::new()).unwrap();
        assert_eq!(s.state(), SelectorState::Unconstructed);
    }

    #[test]
    fn visible_builds_menu_icons_and_routing() {
        let (s, _) = visible(DisplayCapabilities::COLOR_RECT);
        assert_eq!(s.state(), SelectorState::Visible);
        assert_eq!(s.icons_loaded(), 8);
        let window = s.window().unwrap();
        assert!(window.routes_clicks());
        assert_eq!(window.child_layers(), 1);
        assert_eq!(s.menu().unwrap().bounds(), window.root_bounds());
    }

    #[test]
    fn colour_panel_starts_with_car_accent() {
        let (s, _) = visible(DisplayCapabilities::COLOR_RECT);
        let colors = s.menu().unwrap().highlight_colors();
        assert_eq!(colors.background, TRANSIT_MODES[0].accent);
        assert_eq!(colors.foreground, Rgb565::WHITE);
    }

    #[test]
    fn mono_panel_keeps_default_highlight() {
        let (mut s, _) = visible(DisplayCapabilities::MONO_RECT);
        assert_eq!(s.menu().unwrap().highlight_colors(), HighlightColors::default());
        s.handle_input(press(Button::Down));
        assert_eq!(s.menu().unwrap().highlight_colors(), HighlightColors::default());
    }

    #[test]
    fn moving_focus_recolours_highlight() {
        let (mut s, _) = visible(DisplayCapabilities::COLOR_RECT);
        assert_eq!(s.handle_input(press(Button::Down)), SelectorOutcome::Moved);
        assert_eq!(s.menu().unwrap().highlight_colors().background, TRANSIT_MODES[1].accent);
    }

    #[test]
    fn select_reports_mode() {
        let (mut s, _) = visible(DisplayCapabilities::COLOR_RECT);
        s.handle_input(press(Button::Down));
        s.handle_input(press(Button::Down));
        assert_eq!(
            s.handle_input(press(Button::Select)),
            SelectorOutcome::Chosen(TransitMode::Train)
        );
        assert_eq!(s.last_selection(), Some(TransitMode::Train));
    }

    #[test]
    fn hidden_picker_ignores_input() {
        let (mut s, _) = visible(DisplayCapabilities::COLOR_RECT);
        s.on_hidden();
        assert_eq!(s.handle_input(press(Button::Select)), SelectorOutcome::Ignored);
    }

    #[test]
    fn hidden_releases_icons_keeps_window() {
        let (mut s, _) = visible(DisplayCapabilities::COLOR_ROUND);
        s.on_hidden();
        assert_eq!(s.state(), SelectorState::Hidden);
        assert_eq!(s.icons_loaded(), 0);
        assert!(s.menu().is_none());
        assert!(!s.window().unwrap().is_loaded());
    }

    #[test]
    fn failed_icon_leaves_picker_hidden() {
        let mut nav = Navigator::new();
        let mut s = TransitModeSelector::new(DisplayCapabilities::COLOR_RECT, panel());
        s.show(&mut nav).unwrap();
        let store = CountingAssetStore::new().with_missing(AssetKey::IconWalkBlack);
        assert_eq!(
            s.on_visible(&store),
            Err(ScreenConstructionError::MissingAsset(AssetKey::IconWalkBlack))
        );
        assert_eq!(s.state(), SelectorState::Hidden);
        assert_eq!(s.icons_loaded(), 0);
        assert!(!s.window().unwrap().routes_clicks());
        assert_eq!(s.window().unwrap().child_layers(), 0);
    }

    #[test]
    fn always_four_rows() {
        let (s, _) = visible(DisplayCapabilities::MONO_RECT);
        assert_eq!(s.num_rows(), 4);
        assert!(s.cell(3, false).is_some());
    }

    #[test]
    fn round_selected_row_is_taller() {
        assert_eq!(row_height(DisplayCapabilities::COLOR_ROUND, true), 69);
        assert_eq!(row_height(DisplayCapabilities::COLOR_ROUND, false), 44);
        assert_eq!(row_height(DisplayCapabilities::COLOR_RECT, true), 44);
        assert_eq!(row_height(DisplayCapabilities::MONO_RECT, false), 44);
    }

    #[test]
    fn cell_for_highlighted_train() {
        let (s, _) = visible(DisplayCapabilities::COLOR_RECT);
        let cell = s.cell(2, true).unwrap();
        assert_eq!(cell.title, "Transit");
        assert_eq!(cell.subtitle, None);
        assert_eq!(cell.icon.and_then(IconBitmap::key), Some(AssetKey::IconTrainWhite));
        assert!(s.cell(4, true).is_none());
    }

    #[test]
    fn cell_matches_what_the_menu_draws() {
        let (s, _) = visible(DisplayCapabilities::COLOR_ROUND);
        let parts = s.visible.as_ref().unwrap();
        let rows = TransitRows::new(s.capabilities(), &parts.icons);
        for row in 0..=s.num_rows() {
            for highlighted in [false, true] {
                let from_menu = rows.draw_row(row, highlighted);
                let from_screen = s.cell(row, highlighted);
                assert_eq!(from_menu.is_some(), from_screen.is_some(), "row {row}");
                if let (Some(a), Some(b)) = (from_menu, from_screen) {
                    assert_eq!(a.title, b.title);
                    assert_eq!(a.icon.and_then(IconBitmap::key), b.icon.and_then(IconBitmap::key));
                }
            }
        }
    }

    #[test]
    fn every_reload_fills_all_icon_pairs() {
        let (mut s, _) = visible(DisplayCapabilities::COLOR_RECT);
        for _ in 0..3 {
            s.on_hidden();
            s.on_visible(&BundledAssets::new()).unwrap();
            assert_eq!(s.icons_loaded(), 8);
            assert!(s.cell(s.num_rows() - 1, true).is_some());
        }
    }
}
