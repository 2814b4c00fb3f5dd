//! Resource bundle abstraction
//!
//! Read-only access to the static assets packed into the app image. On the
//! watch the bundle lives in the resource partition of flash and is addressed
//! by stable identifier; on the desktop the same bytes are compiled into the
//! binary (see [`crate::resources`]).
//!
//! Only the icon resources used by the transit-mode picker are catalogued.
//! Every icon exists in two tints so that the highlighted row can draw a
//! white glyph on an accent background and the other rows a black glyph on
//! white.

/// Read-only asset store.
///
/// On hardware, reads go directly through the memory-mapped resource
/// partition (zero-copy). In tests, a mock implementation counts loads and
/// can simulate missing or corrupt entries.
pub trait AssetStore {
    /// Error type
    type Error: core::fmt::Debug;

    /// Read up to `buf.len()` bytes of `key` into `buf`, starting at
    /// `offset` within the asset.
    ///
    /// Returns the number of bytes actually read (may be less than
    /// `buf.len()` if `offset + buf.len() > asset_size(key)`).
    fn read_asset(
        &self,
        key: AssetKey,
        offset: usize,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error>;

    /// Return the size in bytes of `key`, or `Err` if the key is absent.
    fn asset_size(&self, key: AssetKey) -> Result<usize, Self::Error>;

    /// Return `true` if `key` is present in the store.
    fn asset_exists(&self, key: AssetKey) -> bool;
}

/// Catalogue of resource identifiers bundled with the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssetKey {
    // ── Car ──────────────────────────────────────────────────────────────────
    /// Car glyph, white tint (highlighted row)
    IconCarWhite,
    /// Car glyph, black tint
    IconCarBlack,

    // ── Bike ─────────────────────────────────────────────────────────────────
    /// Bicycle glyph, white tint (highlighted row)
    IconBikeWhite,
    /// Bicycle glyph, black tint
    IconBikeBlack,

    // ── Train ────────────────────────────────────────────────────────────────
    /// Train glyph, white tint (highlighted row)
    IconTrainWhite,
    /// Train glyph, black tint
    IconTrainBlack,

    // ── Walk ─────────────────────────────────────────────────────────────────
    /// Pedestrian glyph, white tint (highlighted row)
    IconWalkWhite,
    /// Pedestrian glyph, black tint
    IconWalkBlack,
}

impl AssetKey {
    /// Every catalogued key, in resource-table order.
    pub const ALL: [AssetKey; 8] = [
        AssetKey::IconCarWhite,
        AssetKey::IconCarBlack,
        AssetKey::IconBikeWhite,
        AssetKey::IconBikeBlack,
        AssetKey::IconTrainWhite,
        AssetKey::IconTrainBlack,
        AssetKey::IconWalkWhite,
        AssetKey::IconWalkBlack,
    ];

    /// Stable resource identifier as it appears in the bundle manifest.
    pub const fn resource_name(self) -> &'static str {
        match self {
            Self::IconCarWhite => "ICON_CAR_WHITE",
            Self::IconCarBlack => "ICON_CAR_BLACK",
            Self::IconBikeWhite => "ICON_BIKE_WHITE",
            Self::IconBikeBlack => "ICON_BIKE_BLACK",
            Self::IconTrainWhite => "ICON_TRAIN_WHITE",
            Self::IconTrainBlack => "ICON_TRAIN_BLACK",
            Self::IconWalkWhite => "ICON_WALK_WHITE",
            Self::IconWalkBlack => "ICON_WALK_BLACK",
        }
    }

    /// Look up a key by its manifest identifier.
    pub fn from_resource_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.resource_name() == name)
    }

    /// `true` for the white-tinted variant of a glyph.
    pub const fn is_white(self) -> bool {
        matches!(
            self,
            Self::IconCarWhite | Self::IconBikeWhite | Self::IconTrainWhite | Self::IconWalkWhite
        )
    }
}

impl core::fmt::Display for AssetKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.resource_name())
    }
}

/// Errors returned by the bundled asset stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssetError {
    /// The key is not present in the bundle
    NotFound,
    /// The requested offset lies beyond the end of the asset
    OutOfRange,
}

impl core::fmt::Display for AssetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Asset not found"),
            Self::OutOfRange => write!(f, "Asset offset out of range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AssetError {}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn resource_names_are_unique() {
        for (i, a) in AssetKey::ALL.iter().enumerate() {
            for b in AssetKey::ALL.iter().skip(i + 1) {
                assert_ne!(a.resource_name(), b.resource_name());
            }
        }
    }

    #[test]
    fn resource_name_round_trips_through_lookup() {
        assert_eq!(
            AssetKey::from_resource_name("ICON_TRAIN_WHITE"),
            Some(AssetKey::IconTrainWhite)
        );
        assert_eq!(AssetKey::from_resource_name("ICON_BUS_WHITE"), None);
    }

    #[test]
    fn half_the_catalogue_is_white() {
        let white = AssetKey::ALL.iter().filter(|k| k.is_white()).count();
        assert_eq!(white, 4);
        assert!(!AssetKey::IconWalkBlack.is_white());
    }
}
