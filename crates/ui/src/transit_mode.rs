//! Transit modes and the row table that drives the picker.
//!
//! Row index, label, icon pair and accent colour all come from one ordered
//! table so the picker never maps rows with parallel `match` statements.

use embedded_graphics::pixelcolor::Rgb565;
use platform::config::{COLOR_BIKE, COLOR_CAR, COLOR_TRAIN, COLOR_WALK};
use platform::AssetKey;

/// How the user wants to travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitMode {
    /// Driving
    Car,
    /// Cycling
    Bike,
    /// Public transit
    Train,
    /// On foot
    Walk,
}

/// Everything the picker needs to present one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitModeDescriptor {
    /// Mode selected by this row
    pub mode: TransitMode,
    /// Row title
    pub label: &'static str,
    /// Icon drawn while the row is highlighted
    pub icon_highlighted: AssetKey,
    /// Icon drawn otherwise
    pub icon_normal: AssetKey,
    /// Highlight background on colour panels
    pub accent: Rgb565,
}

/// Picker rows, in display order.
pub const TRANSIT_MODES: [TransitModeDescriptor; 4] = [
    TransitModeDescriptor {
        mode: TransitMode::Car,
        label: "Driving",
        icon_highlighted: AssetKey::IconCarWhite,
        icon_normal: AssetKey::IconCarBlack,
        accent: COLOR_CAR,
    },
    TransitModeDescriptor {
        mode: TransitMode::Bike,
        label: "Cycling",
        icon_highlighted: AssetKey::IconBikeWhite,
        icon_normal: AssetKey::IconBikeBlack,
        accent: COLOR_BIKE,
    },
    TransitModeDescriptor {
        mode: TransitMode::Train,
        label: "Transit",
        icon_highlighted: AssetKey::IconTrainWhite,
        icon_normal: AssetKey::IconTrainBlack,
        accent: COLOR_TRAIN,
    },
    TransitModeDescriptor {
        mode: TransitMode::Walk,
        label: "Walk",
        icon_highlighted: AssetKey::IconWalkWhite,
        icon_normal: AssetKey::IconWalkBlack,
        accent: COLOR_WALK,
    },
];

/// Number of picker rows.
#[allow(clippy::cast_possible_truncation)] // table length is 4
pub const NUM_TRANSIT_MODES: u16 = TRANSIT_MODES.len() as u16;

/// Descriptor for `row`, or `None` past the end of the table.
pub fn descriptor(row: u16) -> Option<&'static TransitModeDescriptor> {
    TRANSIT_MODES.get(usize::from(row))
}

impl TransitMode {
    /// Every mode, in row order.
    pub const ALL: [TransitMode; 4] = [
        TransitMode::Car,
        TransitMode::Bike,
        TransitMode::Train,
        TransitMode::Walk,
    ];

    /// Mode shown on `row`.
    pub fn from_row(row: u16) -> Option<Self> {
        descriptor(row).map(|d| d.mode)
    }

    /// Row this mode occupies in the picker.
    pub const fn row(self) -> u16 {
        match self {
            Self::Car => 0,
            Self::Bike => 1,
            Self::Train => 2,
            Self::Walk => 3,
        }
    }

    /// This mode's table entry.
    #[allow(clippy::indexing_slicing)] // row() is always < TRANSIT_MODES.len()
    pub fn descriptor(self) -> &'static TransitModeDescriptor {
        &TRANSIT_MODES[usize::from(self.row())]
    }

    /// Row title.
    pub fn label(self) -> &'static str {
        self.descriptor().label
    }
}

impl core::fmt::Display for TransitMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
