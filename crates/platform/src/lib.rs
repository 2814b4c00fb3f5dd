//! Hardware Abstraction Layer (HAL) for the Transit Watch app
//!
//! This crate provides the device-facing abstractions the UI layer is written
//! against, enabling development and testing without a physical watch.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (firmware crate: simulator / device entry point)
//!         ↓
//! Feature Layer (ui: screens, menu widget, navigation)
//!         ↓
//! Platform HAL (this crate - display profiles, assets, input)
//! ```
//!
//! # Modules
//!
//! - [`display`] - Display shape/colour profiles and the capability descriptor
//! - [`asset_store`] - Read-only resource bundle access
//! - [`resources`] - The icon pack compiled into the binary
//! - [`input`] - Button events
//! - [`config`] - Application constants, layout metrics and palette
//!
//! # Features
//!
//! - `std`: Enable standard library support (mocks, `std::error::Error`)
//! - `defmt`: Enable defmt logging derives
//! - `serde`: Serialize display capability descriptors
//!
//! # Example
//!
//! ```
//! use platform::{AssetKey, AssetStore, BundledAssets};
//!
//! let assets = BundledAssets::new();
//! assert!(assets.asset_exists(AssetKey::IconCarWhite));
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::must_use_candidate)] // plain accessors - callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod asset_store;
pub mod config;
pub mod display;
pub mod input;
pub mod resources;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

pub use asset_store::{AssetError, AssetKey, AssetStore};
pub use display::{DisplayCapabilities, DisplayProfile, DisplayShape};
pub use input::{Button, InputEvent};
pub use resources::BundledAssets;
