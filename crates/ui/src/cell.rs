//! Basic two-element menu cell: an icon followed by a title.
//!
//! Screens supply only the content; placement, fonts and vertical centring
//! are decided here so every list in the app looks the same.

use embedded_graphics::mono_font::{
    ascii::{FONT_6X10, FONT_9X18_BOLD},
    MonoTextStyle,
};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use platform::config::CELL_PADDING;

use crate::bitmap::IconBitmap;

/// What a menu row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellContent<'a> {
    /// Primary text
    pub title: &'static str,
    /// Secondary text under the title, skipped when `None`
    pub subtitle: Option<&'static str>,
    /// Leading icon, skipped when `None`
    pub icon: Option<&'a IconBitmap>,
}

/// Draw `content` inside `bounds` with text in `foreground`.
///
/// The caller has already filled the cell background.
#[allow(clippy::cast_possible_wrap, clippy::arithmetic_side_effects)] // cell geometry is at most a few hundred px
pub fn draw_basic_cell<D>(
    display: &mut D,
    bounds: Rectangle,
    content: &CellContent<'_>,
    foreground: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let center_y = bounds.center().y;
    let mut text_x = bounds.top_left.x + CELL_PADDING as i32;

    if let Some(icon) = content.icon {
        let icon_size = icon.size();
        let icon_origin = Point::new(text_x, center_y - (icon_size.height / 2) as i32);
        icon.draw(display, icon_origin)?;
        text_x += (icon_size.width + CELL_PADDING) as i32;
    }

    let title_style = MonoTextStyle::new(&FONT_9X18_BOLD, foreground);
    match content.subtitle {
        None => {
            Text::with_baseline(
                content.title,
                Point::new(text_x, center_y),
                title_style,
                Baseline::Middle,
            )
            .draw(display)?;
        }
        Some(subtitle) => {
            Text::with_baseline(
                content.title,
                Point::new(text_x, center_y),
                title_style,
                Baseline::Bottom,
            )
            .draw(display)?;
            Text::with_baseline(
                subtitle,
                Point::new(text_x, center_y + 2),
                MonoTextStyle::new(&FONT_6X10, foreground),
                Baseline::Top,
            )
            .draw(display)?;
        }
    }

    Ok(())
}
