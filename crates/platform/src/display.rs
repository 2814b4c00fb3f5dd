//! Display profiles and the capability descriptor handed to screens.
//!
//! Screens never branch on the concrete device. The host picks a
//! [`DisplayProfile`] once at boot and passes its [`DisplayCapabilities`]
//! into every screen it constructs.

use embedded_graphics::prelude::Size;

/// Physical outline of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum DisplayShape {
    /// Rectangular panel, content is never clipped at the corners
    Rectangular,
    /// Circular panel, content near the top and bottom edges is clipped
    Round,
}

/// What a screen may assume about the panel it draws on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DisplayCapabilities {
    /// Panel renders colour (otherwise black and white only)
    pub supports_color: bool,
    /// Panel is circular
    pub is_round: bool,
}

impl DisplayCapabilities {
    /// Black-and-white rectangular panel.
    pub const MONO_RECT: Self = Self {
        supports_color: false,
        is_round: false,
    };

    /// Colour rectangular panel.
    pub const COLOR_RECT: Self = Self {
        supports_color: true,
        is_round: false,
    };

    /// Colour circular panel.
    pub const COLOR_ROUND: Self = Self {
        supports_color: true,
        is_round: true,
    };
}

/// Complete description of a supported watch panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayProfile {
    /// Profile identifier, used by the simulator's `WATCH_PROFILE` variable
    pub name: &'static str,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Panel outline
    pub shape: DisplayShape,
    /// Panel renders colour
    pub color: bool,
}

impl DisplayProfile {
    /// Capability descriptor for screens built on this panel.
    pub const fn capabilities(&self) -> DisplayCapabilities {
        DisplayCapabilities {
            supports_color: self.color,
            is_round: matches!(self.shape, DisplayShape::Round),
        }
    }

    /// Panel size.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Look up one of the built-in profiles by name.
    pub fn from_name(name: &str) -> Option<&'static DisplayProfile> {
        PROFILES.iter().copied().find(|p| p.name == name)
    }
}

/// 144×168 black-and-white rectangular panel.
pub const RECT_MONO: DisplayProfile = DisplayProfile {
    name: "rect-mono",
    width: 144,
    height: 168,
    shape: DisplayShape::Rectangular,
    color: false,
};

/// 144×168 colour rectangular panel.
pub const RECT_COLOR: DisplayProfile = DisplayProfile {
    name: "rect-color",
    width: 144,
    height: 168,
    shape: DisplayShape::Rectangular,
    color: true,
};

/// 180×180 colour circular panel.
pub const ROUND_COLOR: DisplayProfile = DisplayProfile {
    name: "round-color",
    width: 180,
    height: 180,
    shape: DisplayShape::Round,
    color: true,
};

/// All built-in profiles.
pub const PROFILES: [&DisplayProfile; 3] = [&RECT_MONO, &RECT_COLOR, &ROUND_COLOR];
