//! Menu layer: a single-section scrollable list of rows.
//!
//! The layer owns only selection, highlight colours and geometry. Row count,
//! row height, row content and the reaction to selection changes all come
//! from a [`MenuCallbacks`] implementation supplied on every call, so the
//! screen that owns the data never has to be borrowed by the widget.
//!
//! Input contract:
//!
//! | Event | Effect |
//! |---|---|
//! | `Up` / `Down` press | move one row, clamped, no wrap |
//! | crown rotation `n` | move `n` rows, clamped |
//! | `Select` press | `select_click(row)`, returns [`MenuAction::Activated`] |
//! | `Back` press | returns [`MenuAction::Back`] |
//!
//! `selection_will_change` fires before the selection moves and only when it
//! actually moves.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use platform::{Button, InputEvent};

use crate::cell::{draw_basic_cell, CellContent};

/// Background and text colour of the highlighted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightColors {
    /// Row fill
    pub background: Rgb565,
    /// Text colour
    pub foreground: Rgb565,
}

impl Default for HighlightColors {
    fn default() -> Self {
        Self {
            background: Rgb565::BLACK,
            foreground: Rgb565::WHITE,
        }
    }
}

/// Data source and event sink for a [`MenuLayer`].
pub trait MenuCallbacks {
    /// Number of rows in the single section.
    fn num_rows(&self) -> u16;

    /// Height of `row` in pixels; `selected` is true for the focused row.
    fn cell_height(&self, row: u16, selected: bool) -> u16;

    /// Content of `row`; `None` leaves the row blank.
    fn draw_row(&self, row: u16, highlighted: bool) -> Option<CellContent<'_>>;

    /// Called before the selection moves from `old_row` to `new_row`.
    fn selection_will_change(
        &mut self,
        _highlight: &mut HighlightColors,
        _new_row: u16,
        _old_row: u16,
    ) {
    }

    /// Called when `row` is activated with the select button.
    fn select_click(&mut self, _row: u16) {}
}

/// Outcome of feeding one input event to a [`MenuLayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Event ignored or selection already at the limit
    None,
    /// Selection moved
    Moved {
        /// Previous row
        from: u16,
        /// New row
        to: u16,
    },
    /// Row activated
    Activated(u16),
    /// User asked to leave the menu
    Back,
}

/// A single-section list widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLayer {
    bounds: Rectangle,
    selected: u16,
    highlight: HighlightColors,
    normal: HighlightColors,
    center_focused: bool,
}

impl MenuLayer {
    /// Create a menu filling `bounds`, row 0 selected.
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            selected: 0,
            highlight: HighlightColors::default(),
            normal: HighlightColors {
                background: Rgb565::WHITE,
                foreground: Rgb565::BLACK,
            },
            center_focused: false,
        }
    }

    /// Area the menu draws into.
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Currently focused row.
    pub fn selected_row(&self) -> u16 {
        self.selected
    }

    /// Whether `row` is the focused row.
    pub fn is_index_selected(&self, row: u16) -> bool {
        self.selected == row
    }

    /// Colours of the focused row.
    pub fn highlight_colors(&self) -> HighlightColors {
        self.highlight
    }

    /// Set the colours of the focused row.
    pub fn set_highlight_colors(&mut self, background: Rgb565, foreground: Rgb565) {
        self.highlight = HighlightColors {
            background,
            foreground,
        };
    }

    /// Keep the focused row vertically centred (round panels) instead of
    /// scrolling only as far as needed.
    pub fn set_center_focused(&mut self, center: bool) {
        self.center_focused = center;
    }

    /// Feed one input event through the menu.
    pub fn handle_input<C: MenuCallbacks>(
        &mut self,
        event: InputEvent,
        callbacks: &mut C,
    ) -> MenuAction {
        if event == InputEvent::ButtonPress(Button::Back) {
            return MenuAction::Back;
        }
        let rows = callbacks.num_rows();
        if rows == 0 {
            return MenuAction::None;
        }
        self.selected = self.selected.min(rows.saturating_sub(1));

        match event {
            InputEvent::ButtonPress(Button::Up) => self.move_by(-1, rows, callbacks),
            InputEvent::ButtonPress(Button::Down) => self.move_by(1, rows, callbacks),
            InputEvent::RotaryIncrement(delta) => self.move_by(delta, rows, callbacks),
            InputEvent::ButtonPress(Button::Select) => {
                callbacks.select_click(self.selected);
                MenuAction::Activated(self.selected)
            }
            _ => MenuAction::None,
        }
    }

    fn move_by<C: MenuCallbacks>(&mut self, delta: i32, rows: u16, callbacks: &mut C) -> MenuAction {
        let last = i32::from(rows.saturating_sub(1));
        let target = i32::from(self.selected).saturating_add(delta).clamp(0, last);
        let Ok(target) = u16::try_from(target) else {
            return MenuAction::None;
        };
        if target == self.selected {
            return MenuAction::None;
        }
        let from = self.selected;
        callbacks.selection_will_change(&mut self.highlight, target, from);
        self.selected = target;
        MenuAction::Moved { from, to: target }
    }

    /// Offset of `row`'s top edge from the top of the list, before scrolling.
    fn row_top<C: MenuCallbacks>(&self, row: u16, callbacks: &C) -> i32 {
        (0..row)
            .map(|r| i32::from(callbacks.cell_height(r, r == self.selected)))
            .fold(0_i32, i32::saturating_add)
    }

    /// How far the list is scrolled up so the focused row is visible.
    #[allow(clippy::cast_possible_wrap, clippy::arithmetic_side_effects)] // panel height fits i32
    pub fn scroll_offset<C: MenuCallbacks>(&self, callbacks: &C) -> i32 {
        let visible = self.bounds.size.height as i32;
        let top = self.row_top(self.selected, callbacks);
        let height = i32::from(callbacks.cell_height(self.selected, true));
        if self.center_focused {
            top + height / 2 - visible / 2
        } else {
            (top + height - visible).max(0)
        }
    }

    /// On-screen rectangle of `row` after scrolling.
    #[allow(clippy::arithmetic_side_effects)] // bounded by row count × row height
    pub fn row_bounds<C: MenuCallbacks>(&self, row: u16, callbacks: &C) -> Rectangle {
        let y = self.bounds.top_left.y + self.row_top(row, callbacks) - self.scroll_offset(callbacks);
        let height = callbacks.cell_height(row, row == self.selected);
        Rectangle::new(
            Point::new(self.bounds.top_left.x, y),
            Size::new(self.bounds.size.width, u32::from(height)),
        )
    }

    /// Draw every row that intersects the menu bounds.
    pub fn draw<D, C>(&self, display: &mut D, callbacks: &C) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
        C: MenuCallbacks,
    {
        let mut clipped = display.clipped(&self.bounds);
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(self.normal.background))
            .draw(&mut clipped)?;

        for row in 0..callbacks.num_rows() {
            let cell = self.row_bounds(row, callbacks);
            let overlap = cell.intersection(&self.bounds);
            if overlap.size.width == 0 || overlap.size.height == 0 {
                continue;
            }
            let highlighted = row == self.selected;
            let colors = if highlighted { self.highlight } else { self.normal };
            if highlighted {
                cell.into_styled(PrimitiveStyle::with_fill(colors.background))
                    .draw(&mut clipped)?;
            }
            if let Some(content) = callbacks.draw_row(row, highlighted) {
                draw_basic_cell(&mut clipped, cell, &content, colors.foreground)?;
            }
        }

        Ok(())
    }
}
