//! Screen construction errors.

use platform::AssetKey;

use crate::bitmap::BitmapError;

/// A screen could not build its visible state.
///
/// Returned from a screen's on-visible step. Everything allocated before the
/// failure has already been released; the screen stays hidden and the
/// previous screen keeps the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenConstructionError {
    /// The resource bundle does not contain the asset
    MissingAsset(AssetKey),
    /// The asset exists but could not be read completely
    AssetRead(AssetKey),
    /// The asset bytes are not a valid packed icon
    MalformedBitmap(AssetKey, BitmapError),
}

impl ScreenConstructionError {
    /// Asset that caused the failure.
    pub fn asset(&self) -> AssetKey {
        match self {
            Self::MissingAsset(key) | Self::AssetRead(key) | Self::MalformedBitmap(key, _) => *key,
        }
    }
}

impl core::fmt::Display for ScreenConstructionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingAsset(key) => write!(f, "Resource {key} is missing"),
            Self::AssetRead(key) => write!(f, "Resource {key} could not be read"),
            Self::MalformedBitmap(key, err) => write!(f, "Resource {key} is malformed: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScreenConstructionError {}
