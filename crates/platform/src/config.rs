//! Application configuration and constants
//!
//! This module defines central configuration values used across the application.
//! Layout metrics and the accent palette live here so that screens never
//! hardcode them.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// The application name
pub const APP_NAME: &str = "Transit Watch";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Development mode banner
pub const fn dev_banner() -> &'static str {
    "Transit Watch - Simulator"
}

// ── Menu layout ──────────────────────────────────────────────────────────────

/// Height of a menu row on rectangular panels, and of unselected rows on
/// round panels.
pub const ROW_HEIGHT: u16 = 44;

/// Height of the selected row on round panels. Taller so the focused row
/// stays readable in the unclipped middle band.
pub const ROW_HEIGHT_SELECTED_ROUND: u16 = 69;

/// Horizontal padding inside a basic menu cell.
pub const CELL_PADDING: u32 = 5;

/// Push screens with a slide transition.
pub const ANIMATE_TRANSITIONS: bool = true;

// ── Palette ──────────────────────────────────────────────────────────────────

/// Accent for the driving row.
pub const COLOR_CAR: Rgb565 = Rgb565::new(31, 21, 0);
/// Accent for the cycling row.
pub const COLOR_BIKE: Rgb565 = Rgb565::new(0, 42, 10);
/// Accent for the public-transit row.
pub const COLOR_TRAIN: Rgb565 = Rgb565::new(0, 21, 31);
/// Accent for the walking row.
pub const COLOR_WALK: Rgb565 = Rgb565::new(21, 0, 21);

/// Window background.
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::WHITE;
/// Default text colour.
pub const COLOR_TEXT: Rgb565 = Rgb565::BLACK;
