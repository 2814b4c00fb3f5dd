//! Icon resource pack compiled into the app image.
//!
//! Each blob uses the packed icon format understood by the UI layer:
//!
//! ```text
//! byte 0      width  (px)
//! byte 1      height (px)
//! byte 2      tint   (0 = black, 1 = white)
//! byte 3..    rows, MSB-first, each row padded to whole bytes
//! ```
//!
//! Glyphs are 16×16 so every row is exactly two bytes.

use crate::asset_store::{AssetError, AssetKey, AssetStore};

/// Glyph edge length in pixels.
pub const ICON_SIZE: usize = 16;

/// Header length of a packed icon blob.
pub const ICON_HEADER_LEN: usize = 3;

/// Total length of one packed 16×16 blob.
pub const ICON_BLOB_LEN: usize = ICON_HEADER_LEN + ICON_SIZE * 2;

/// Tint byte for black glyphs.
pub const TINT_BLACK: u8 = 0;
/// Tint byte for white glyphs.
pub const TINT_WHITE: u8 = 1;

const CAR_GLYPH: [u16; ICON_SIZE] = [
    0b0000_0000_0000_0000,
    0b0000_0000_0000_0000,
    0b0000_0000_0000_0000,
    0b0000_1111_1111_0000,
    0b0001_1000_0001_1000,
    0b0011_0000_0000_1100,
    0b0111_1111_1111_1110,
    0b1111_1111_1111_1111,
    0b1001_1111_1111_1001,
    0b1111_1111_1111_1111,
    0b1111_1111_1111_1111,
    0b0110_0000_0000_0110,
    0b0110_0000_0000_0110,
    0b0000_0000_0000_0000,
    0b0000_0000_0000_0000,
    0b0000_0000_0000_0000,
];

const BIKE_GLYPH: [u16; ICON_SIZE] = [
    0b0000_0000_0000_0000,
    0b0000_0000_0110_0000,
    0b0000_0000_0010_0000,
    0b0000_1111_1100_0000,
    0b0000_0100_1100_0000,
    0b0000_0101_0110_0000,
    0b0011_1001_0011_1100,
    0b0100_1110_0010_0010,
    0b1000_0101_0100_0001,
    0b1000_0101_1000_0001,
    0b1000_0001_0000_0001,
    0b0100_0010_0000_0010,
    0b0011_1100_0011_1100,
    0b0000_0000_0000_0000,
    0b0000_0000_0000_0000,
    0b0000_0000_0000_0000,
];

const TRAIN_GLYPH: [u16; ICON_SIZE] = [
    0b0000_0000_0000_0000,
    0b0001_1111_1111_1000,
    0b0011_1111_1111_1100,
    0b0011_0000_0000_1100,
    0b0011_0000_0000_1100,
    0b0011_0000_0000_1100,
    0b0011_1111_1111_1100,
    0b0011_1111_1111_1100,
    0b0011_0011_1100_1100,
    0b0011_0011_1100_1100,
    0b0011_1111_1111_1100,
    0b0001_1111_1111_1000,
    0b0000_1100_0011_0000,
    0b0001_1000_0001_1000,
    0b0011_0000_0000_1100,
    0b0000_0000_0000_0000,
];

const WALK_GLYPH: [u16; ICON_SIZE] = [
    0b0000_0001_1000_0000,
    0b0000_0001_1000_0000,
    0b0000_0000_0000_0000,
    0b0000_0011_1100_0000,
    0b0000_0111_1110_0000,
    0b0000_1101_1011_0000,
    0b0001_1001_1001_1000,
    0b0000_0001_1000_0000,
    0b0000_0011_1100_0000,
    0b0000_0110_0110_0000,
    0b0000_1100_0011_0000,
    0b0000_1100_0011_0000,
    0b0001_1000_0001_1000,
    0b0001_1000_0001_1000,
    0b0011_0000_0000_1100,
    0b0000_0000_0000_0000,
];

#[allow(clippy::indexing_slicing, clippy::arithmetic_side_effects)] // const fn; bounds fixed by ICON_SIZE
#[allow(clippy::cast_possible_truncation)] // splitting u16 rows into bytes
const fn pack(glyph: &[u16; ICON_SIZE], tint: u8) -> [u8; ICON_BLOB_LEN] {
    let mut out = [0u8; ICON_BLOB_LEN];
    out[0] = ICON_SIZE as u8;
    out[1] = ICON_SIZE as u8;
    out[2] = tint;
    let mut row = 0;
    while row < ICON_SIZE {
        out[ICON_HEADER_LEN + row * 2] = (glyph[row] >> 8) as u8;
        out[ICON_HEADER_LEN + row * 2 + 1] = glyph[row] as u8;
        row += 1;
    }
    out
}

static ICON_CAR_WHITE: [u8; ICON_BLOB_LEN] = pack(&CAR_GLYPH, TINT_WHITE);
static ICON_CAR_BLACK: [u8; ICON_BLOB_LEN] = pack(&CAR_GLYPH, TINT_BLACK);
static ICON_BIKE_WHITE: [u8; ICON_BLOB_LEN] = pack(&BIKE_GLYPH, TINT_WHITE);
static ICON_BIKE_BLACK: [u8; ICON_BLOB_LEN] = pack(&BIKE_GLYPH, TINT_BLACK);
static ICON_TRAIN_WHITE: [u8; ICON_BLOB_LEN] = pack(&TRAIN_GLYPH, TINT_WHITE);
static ICON_TRAIN_BLACK: [u8; ICON_BLOB_LEN] = pack(&TRAIN_GLYPH, TINT_BLACK);
static ICON_WALK_WHITE: [u8; ICON_BLOB_LEN] = pack(&WALK_GLYPH, TINT_WHITE);
static ICON_WALK_BLACK: [u8; ICON_BLOB_LEN] = pack(&WALK_GLYPH, TINT_BLACK);

/// Raw packed bytes for `key`.
pub fn icon_blob(key: AssetKey) -> &'static [u8] {
    match key {
        AssetKey::IconCarWhite => &ICON_CAR_WHITE,
        AssetKey::IconCarBlack => &ICON_CAR_BLACK,
        AssetKey::IconBikeWhite => &ICON_BIKE_WHITE,
        AssetKey::IconBikeBlack => &ICON_BIKE_BLACK,
        AssetKey::IconTrainWhite => &ICON_TRAIN_WHITE,
        AssetKey::IconTrainBlack => &ICON_TRAIN_BLACK,
        AssetKey::IconWalkWhite => &ICON_WALK_WHITE,
        AssetKey::IconWalkBlack => &ICON_WALK_BLACK,
    }
}

/// [`AssetStore`] over the compiled-in icon pack.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledAssets;

impl BundledAssets {
    /// Create a handle to the bundled resources.
    pub const fn new() -> Self {
        Self
    }
}

impl AssetStore for BundledAssets {
    type Error = AssetError;

    fn read_asset(
        &self,
        key: AssetKey,
        offset: usize,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        let blob = icon_blob(key);
        let tail = blob.get(offset..).ok_or(AssetError::OutOfRange)?;
        let n = tail.len().min(buf.len());
        if let (Some(dst), Some(src)) = (buf.get_mut(..n), tail.get(..n)) {
            dst.copy_from_slice(src);
        }
        Ok(n)
    }

    fn asset_size(&self, key: AssetKey) -> Result<usize, Self::Error> {
        Ok(icon_blob(key).len())
    }

    fn asset_exists(&self, _key: AssetKey) -> bool {
        true
    }
}
