//! Mock implementations for testing
//!
//! This module provides mock implementations of the platform traits
//! for use in unit and integration tests.

use core::cell::Cell;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};

use crate::asset_store::{AssetError, AssetKey, AssetStore};
use crate::resources::BundledAssets;

/// Asset store that serves the bundled icons while counting loads and
/// optionally simulating a missing or corrupt entry.
#[derive(Debug, Default)]
pub struct CountingAssetStore {
    inner: BundledAssets,
    reads: Cell<usize>,
    missing: Option<AssetKey>,
    corrupt: Option<AssetKey>,
}

impl CountingAssetStore {
    /// Store backed by the bundled pack, nothing missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend `key` is absent from the bundle.
    #[must_use]
    pub fn with_missing(mut self, key: AssetKey) -> Self {
        self.missing = Some(key);
        self
    }

    /// Serve a truncated blob for `key`.
    #[must_use]
    pub fn with_corrupt(mut self, key: AssetKey) -> Self {
        self.corrupt = Some(key);
        self
    }

    /// Number of completed `read_asset` calls.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl AssetStore for CountingAssetStore {
    type Error = AssetError;

    fn read_asset(
        &self,
        key: AssetKey,
        offset: usize,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        if self.missing == Some(key) {
            return Err(AssetError::NotFound);
        }
        let n = self.inner.read_asset(key, offset, buf)?;
        self.reads.set(self.reads.get().saturating_add(1));
        if self.corrupt == Some(key) {
            return Ok(n.min(5));
        }
        Ok(n)
    }

    fn asset_size(&self, key: AssetKey) -> Result<usize, Self::Error> {
        if self.missing == Some(key) {
            return Err(AssetError::NotFound);
        }
        if self.corrupt == Some(key) {
            return Ok(self.inner.asset_size(key)?.min(5));
        }
        self.inner.asset_size(key)
    }

    fn asset_exists(&self, key: AssetKey) -> bool {
        self.missing != Some(key)
    }
}

/// In-memory RGB565 framebuffer implementing [`DrawTarget`].
///
/// Out-of-bounds pixels are dropped, like a clipped hardware framebuffer.
pub struct MockDisplay {
    size: Size,
    pixels: Vec<Rgb565>,
    drawn: usize,
}

impl MockDisplay {
    /// Create a white framebuffer of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        let len = usize::try_from(width.saturating_mul(height)).unwrap_or(0);
        Self {
            size: Size::new(width, height),
            pixels: vec![Rgb565::WHITE; len],
            drawn: 0,
        }
    }

    /// Create a framebuffer matching `size`.
    pub fn with_size(size: Size) -> Self {
        Self::new(size.width, size.height)
    }

    fn index(&self, point: Point) -> Option<usize> {
        let x = u32::try_from(point.x).ok()?;
        let y = u32::try_from(point.y).ok()?;
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        usize::try_from(y.checked_mul(self.size.width)?.checked_add(x)?).ok()
    }

    /// Colour at `(x, y)`, or `None` outside the framebuffer.
    pub fn pixel_at(&self, x: i32, y: i32) -> Option<Rgb565> {
        self.index(Point::new(x, y))
            .and_then(|i| self.pixels.get(i).copied())
    }

    /// Number of pixels currently holding `color`.
    pub fn count_color(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|c| **c == color).count()
    }

    /// `true` if any pixel inside `area` holds `color`.
    pub fn region_has_color(&self, area: Rectangle, color: Rgb565) -> bool {
        area.points().any(|p| self.pixel_at(p.x, p.y) == Some(color))
    }

    /// Total pixels written, including overdraw.
    pub fn pixels_drawn(&self) -> usize {
        self.drawn
    }
}

impl DrawTarget for MockDisplay {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(slot) = self.index(point).and_then(|i| self.pixels.get_mut(i)) {
                *slot = color;
                self.drawn = self.drawn.saturating_add(1);
            }
        }
        Ok(())
    }
}

impl OriginDimensions for MockDisplay {
    fn size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::PrimitiveStyle;

    #[test]
    fn counting_store_counts_reads() {
        let store = CountingAssetStore::new();
        let mut buf = [0u8; 8];
        store.read_asset(AssetKey::IconCarWhite, 0, &mut buf).unwrap();
        store.read_asset(AssetKey::IconCarBlack, 0, &mut buf).unwrap();
        assert_eq!(store.reads(), 2);
    }

    #[test]
    fn missing_key_is_reported() {
        let store = CountingAssetStore::new().with_missing(AssetKey::IconBikeBlack);
        assert!(!store.asset_exists(AssetKey::IconBikeBlack));
        assert_eq!(
            store.asset_size(AssetKey::IconBikeBlack),
            Err(AssetError::NotFound)
        );
        assert!(store.asset_exists(AssetKey::IconBikeWhite));
    }

    #[test]
    fn corrupt_key_is_truncated() {
        let store = CountingAssetStore::new().with_corrupt(AssetKey::IconWalkWhite);
        assert_eq!(store.asset_size(AssetKey::IconWalkWhite), Ok(5));
    }

    #[test]
    fn mock_display_records_pixels_and_clips() {
        let mut display = MockDisplay::new(10, 10);
        Rectangle::new(Point::new(8, 8), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
            .draw(&mut display)
            .unwrap();
        assert_eq!(display.count_color(Rgb565::RED), 4);
        assert_eq!(display.pixel_at(9, 9), Some(Rgb565::RED));
        assert_eq!(display.pixel_at(10, 10), None);
    }
}
