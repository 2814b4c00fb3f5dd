//! Application UI layer: screens, the menu list widget, navigation state.
//!
//! This crate is `no_std` by default; it only uses `core`, `heapless` and
//! `embedded-graphics`.
//!
//! # Modules
//!
//! - [`transit_mode`] - `TransitMode` and the per-row descriptor table
//! - [`transit_select`] - the transit-mode picker screen
//! - [`directions`] - the screen that receives the chosen mode
//! - [`menu`] / [`cell`] - list widget and its basic cell renderer
//! - [`window`] / [`navigation`] / [`screen`] - screen shells and the stack
//! - [`app`] - input routing and lifecycle driving for the whole app

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod app;
pub mod bitmap;
pub mod cell;
pub mod directions;
pub mod error;
pub mod menu;
pub mod navigation;
pub mod screen;
pub mod transit_mode;
pub mod transit_select;
pub mod window;

pub use app::{AppError, AppEvent, WatchApp};
pub use directions::DirectionsScreen;
pub use error::ScreenConstructionError;
pub use transit_mode::{TransitMode, TransitModeDescriptor, TRANSIT_MODES};
pub use transit_select::{SelectorOutcome, SelectorState, TransitModeSelector};
