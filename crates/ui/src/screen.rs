//! Screen identifier enum: every screen the navigator can hold.

use crate::transit_mode::TransitMode;

/// Every top-level screen the navigator can push onto its stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Transit-mode picker.
    TransitSelect,
    /// Directions for the chosen mode.
    Directions(TransitMode),
}

impl Screen {
    /// Short name for log lines.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TransitSelect => "transit-select",
            Self::Directions(_) => "directions",
        }
    }
}
