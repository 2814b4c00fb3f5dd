//! Transit Watch desktop host
//!
//! Wires a display profile, the bundled icon pack and the `ui` crate's
//! `WatchApp` together, and maps desktop keys to watch buttons.
//!
//! # Features
//!
//! - `simulator` - SDL window via `embedded-graphics-simulator` (`transit-watch` binary)
//!
//! # Examples
//!
//! ```bash
//! WATCH_PROFILE=round-color RUST_LOG=debug cargo run -p firmware --features simulator
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)] // prefer tracing over println! in lib code
#![warn(clippy::dbg_macro)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod boot;
pub mod input;

pub use boot::{boot, init_tracing, profile_from_env, select_profile, window_title};
pub use input::EmulatedKey;
