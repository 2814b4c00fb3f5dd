//! Tinted 1bpp icon bitmaps.
//!
//! Icons arrive from the resource bundle as packed blobs (3-byte header,
//! then MSB-first rows padded to whole bytes). Decoding copies the rows into
//! a fixed-capacity buffer owned by the bitmap, so dropping an
//! [`IconBitmap`] releases it.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::*;
use heapless::Vec;
use platform::{AssetKey, AssetStore};

use crate::error::ScreenConstructionError;

/// Largest supported edge length in pixels.
pub const MAX_ICON_DIM: u8 = 32;

/// Largest row payload: 32 rows of 4 bytes.
pub const MAX_ICON_BYTES: usize = 128;

const HEADER_LEN: usize = 3;

/// Ink colour of an icon's set pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tint {
    /// Drawn on light backgrounds
    Black,
    /// Drawn on the highlight colour
    White,
}

impl Tint {
    /// Colour used for set pixels.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Black => Rgb565::BLACK,
            Self::White => Rgb565::WHITE,
        }
    }
}

/// Reasons a packed icon blob is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitmapError {
    /// Blob is shorter than the header
    TooShort,
    /// Width or height is zero or above [`MAX_ICON_DIM`]
    BadDimensions {
        /// Declared width
        width: u8,
        /// Declared height
        height: u8,
    },
    /// Tint byte is neither 0 nor 1
    BadTint(u8),
    /// Payload length does not match the declared dimensions
    LengthMismatch {
        /// Bytes required by the header
        expected: usize,
        /// Bytes present
        actual: usize,
    },
}

impl core::fmt::Display for BitmapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooShort => write!(f, "icon blob shorter than its header"),
            Self::BadDimensions { width, height } => {
                write!(f, "icon size {width}x{height} outside 1..={MAX_ICON_DIM}")
            }
            Self::BadTint(t) => write!(f, "unknown tint byte {t}"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} payload bytes, found {actual}")
            }
        }
    }
}

/// A decoded, tinted icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconBitmap {
    width: u8,
    height: u8,
    stride: u8,
    tint: Tint,
    rows: Vec<u8, MAX_ICON_BYTES>,
    key: Option<AssetKey>,
}

impl IconBitmap {
    /// Decode a packed icon blob.
    pub fn decode(blob: &[u8]) -> Result<Self, BitmapError> {
        let (Some(&[width, height, tint]), Some(payload)) =
            (blob.get(..HEADER_LEN), blob.get(HEADER_LEN..))
        else {
            return Err(BitmapError::TooShort);
        };
        if width == 0 || height == 0 || width > MAX_ICON_DIM || height > MAX_ICON_DIM {
            return Err(BitmapError::BadDimensions { width, height });
        }
        let tint = match tint {
            0 => Tint::Black,
            1 => Tint::White,
            other => return Err(BitmapError::BadTint(other)),
        };
        let stride = width.div_ceil(8);
        let expected = usize::from(stride)
            .checked_mul(usize::from(height))
            .ok_or(BitmapError::BadDimensions { width, height })?;
        if payload.len() != expected {
            return Err(BitmapError::LengthMismatch {
                expected,
                actual: payload.len(),
            });
        }
        let rows = Vec::from_slice(payload).map_err(|_| BitmapError::LengthMismatch {
            expected,
            actual: payload.len(),
        })?;
        Ok(Self {
            width,
            height,
            stride,
            tint,
            rows,
            key: None,
        })
    }

    /// Read and decode `key` from `store`.
    pub fn load<S: AssetStore>(store: &S, key: AssetKey) -> Result<Self, ScreenConstructionError> {
        if !store.asset_exists(key) {
            return Err(ScreenConstructionError::MissingAsset(key));
        }
        let size = store
            .asset_size(key)
            .map_err(|_| ScreenConstructionError::AssetRead(key))?;

        let mut buf = [0u8; HEADER_LEN + MAX_ICON_BYTES];
        let dst = buf.get_mut(..size).ok_or(ScreenConstructionError::MalformedBitmap(
            key,
            BitmapError::LengthMismatch {
                expected: MAX_ICON_BYTES,
                actual: size.saturating_sub(HEADER_LEN),
            },
        ))?;
        let n = store
            .read_asset(key, 0, dst)
            .map_err(|_| ScreenConstructionError::AssetRead(key))?;
        if n != size {
            return Err(ScreenConstructionError::AssetRead(key));
        }

        let mut icon = Self::decode(dst.get(..n).unwrap_or_default())
            .map_err(|e| ScreenConstructionError::MalformedBitmap(key, e))?;
        icon.key = Some(key);
        Ok(icon)
    }

    /// Resource the icon was loaded from, if any.
    pub fn key(&self) -> Option<AssetKey> {
        self.key
    }

    /// Icon size in pixels.
    pub fn size(&self) -> Size {
        Size::new(u32::from(self.width), u32::from(self.height))
    }

    /// Ink colour.
    pub fn tint(&self) -> Tint {
        self.tint
    }

    /// Whether the pixel at `(x, y)` is inked.
    pub fn is_set(&self, x: u8, y: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = usize::from(y)
            .checked_mul(usize::from(self.stride))
            .and_then(|row| row.checked_add(usize::from(x / 8)));
        index
            .and_then(|i| self.rows.get(i))
            .zip(0x80u8.checked_shr(u32::from(x % 8)))
            .is_some_and(|(byte, mask)| byte & mask != 0)
    }

    /// Number of inked pixels.
    pub fn ink_count(&self) -> usize {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.is_set(x, y))
            .count()
    }

    /// Blit the inked pixels with the icon's tint, top-left at `origin`.
    ///
    /// Pixels whose position would overflow `i32` are skipped.
    pub fn draw<D>(&self, display: &mut D, origin: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let color = self.tint.color();
        let pixels = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.is_set(x, y))
            .filter_map(|(x, y)| {
                let px = origin.x.checked_add(i32::from(x))?;
                let py = origin.y.checked_add(i32::from(y))?;
                Some(Pixel(Point::new(px, py), color))
            });
        display.draw_iter(pixels)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use platform::mocks::{CountingAssetStore, MockDisplay};
    use platform::BundledAssets;

    fn blob(width: u8, height: u8, tint: u8, payload: &[u8]) -> std::vec::Vec<u8> {
        let mut v = std::vec![width, height, tint];
        v.extend_from_slice(payload);
        v
    }

    #[test]
    fn decodes_a_small_icon() {
        let icon = IconBitmap::decode(&blob(3, 2, 1, &[0b1010_0000, 0b0100_0000])).unwrap();
        assert_eq!(icon.size(), Size::new(3, 2));
        assert_eq!(icon.tint(), Tint::White);
        assert!(icon.is_set(0, 0));
        assert!(!icon.is_set(1, 0));
        assert!(icon.is_set(2, 0));
        assert!(icon.is_set(1, 1));
        assert!(!icon.is_set(3, 0), "outside width");
        assert_eq!(icon.ink_count(), 3);
    }

    #[test]
    fn rejects_short_blob() {
        assert_eq!(IconBitmap::decode(&[16, 16]), Err(BitmapError::TooShort));
    }

    #[test]
    fn rejects_zero_and_oversized_dimensions() {
        assert_eq!(
            IconBitmap::decode(&blob(0, 4, 0, &[])),
            Err(BitmapError::BadDimensions { width: 0, height: 4 })
        );
        assert!(matches!(
            IconBitmap::decode(&blob(33, 1, 0, &[0; 5])),
            Err(BitmapError::BadDimensions { .. })
        ));
    }

    #[test]
    fn rejects_unknown_tint() {
        assert_eq!(
            IconBitmap::decode(&blob(8, 1, 7, &[0xFF])),
            Err(BitmapError::BadTint(7))
        );
    }

    #[test]
    fn rejects_wrong_payload_length() {
        assert_eq!(
            IconBitmap::decode(&blob(9, 2, 0, &[0; 3])),
            Err(BitmapError::LengthMismatch { expected: 4, actual: 3 })
        );
    }

    #[test]
    fn load_records_key_and_tint() {
        let icon = IconBitmap::load(&BundledAssets::new(), AssetKey::IconTrainWhite).unwrap();
        assert_eq!(icon.key(), Some(AssetKey::IconTrainWhite));
        assert_eq!(icon.tint(), Tint::White);
        assert_eq!(icon.size(), Size::new(16, 16));
        assert!(icon.ink_count() > 0);
    }

    #[test]
    fn load_reports_missing_asset() {
        let store = CountingAssetStore::new().with_missing(AssetKey::IconCarBlack);
        assert_eq!(
            IconBitmap::load(&store, AssetKey::IconCarBlack),
            Err(ScreenConstructionError::MissingAsset(AssetKey::IconCarBlack))
        );
    }

    #[test]
    fn load_reports_corrupt_asset() {
        let store = CountingAssetStore::new().with_corrupt(AssetKey::IconWalkBlack);
        let err = IconBitmap::load(&store, AssetKey::IconWalkBlack).unwrap_err();
        assert!(matches!(
            err,
            ScreenConstructionError::MalformedBitmap(AssetKey::IconWalkBlack, BitmapError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn draw_inks_only_set_pixels() {
        let icon = IconBitmap::decode(&blob(2, 2, 0, &[0b1000_0000, 0b0100_0000])).unwrap();
        let mut display = MockDisplay::new(4, 4);
        icon.draw(&mut display, Point::new(1, 1)).unwrap();
        assert_eq!(display.pixel_at(1, 1), Some(Rgb565::BLACK));
        assert_eq!(display.pixel_at(2, 2), Some(Rgb565::BLACK));
        assert_eq!(display.pixel_at(2, 1), Some(Rgb565::WHITE));
        assert_eq!(display.count_color(Rgb565::BLACK), 2);
    }

    #[test]
    fn largest_icon_decodes_and_reads_every_pixel() {
        let side = MAX_ICON_DIM;
        let payload = [0xFFu8; MAX_ICON_BYTES];
        let icon = IconBitmap::decode(&blob(side, side, 1, &payload)).unwrap();
        assert_eq!(icon.ink_count(), usize::from(side) * usize::from(side));
        assert!(icon.is_set(side - 1, side - 1));
        assert!(!icon.is_set(u8::MAX, u8::MAX));
    }

    #[test]
    fn draw_near_coordinate_limit_skips_overflowing_pixels() {
        let icon = IconBitmap::decode(&blob(2, 2, 0, &[0b1100_0000, 0b1100_0000])).unwrap();
        let mut display = MockDisplay::new(4, 4);
        icon.draw(&mut display, Point::new(i32::MAX, i32::MAX)).unwrap();
        assert_eq!(display.pixels_drawn(), 0);
    }
}
