//! Desktop boot sequence for the transit watch app.
//!
//! Initialization order:
//!   1. Logging: install the `tracing` subscriber (filtered by `RUST_LOG`)
//!   2. Profile: resolve `WATCH_PROFILE` to a built-in display profile
//!   3. App: build `WatchApp` over the bundled icon pack
//!   4. Start: push the transit picker and load its icons
//!
//! Steps 2 to 4 are pure and host-testable; only step 1 touches global state.

use anyhow::{anyhow, Context, Result};
use platform::config::{APP_NAME, APP_VERSION};
use platform::display::{PROFILES, RECT_COLOR};
use platform::{BundledAssets, DisplayProfile};
use tracing_subscriber::EnvFilter;
use ui::WatchApp;

/// Ordered list of boot steps, for logging and tests.
pub const BOOT_SEQUENCE_STEPS: &[&str] = &[
    "1. Logging: install tracing subscriber",
    "2. Profile: resolve WATCH_PROFILE",
    "3. App: build WatchApp over bundled assets",
    "4. Start: show transit picker",
];

/// Environment variable naming the display profile.
pub const PROFILE_ENV: &str = "WATCH_PROFILE";

/// Profile used when `WATCH_PROFILE` is unset.
pub const DEFAULT_PROFILE: &DisplayProfile = &RECT_COLOR;

/// Simulator window title: app name and crate version.
pub fn window_title() -> String {
    format!("{APP_NAME} v{APP_VERSION}")
}

/// Resolve a profile name; `None` picks [`DEFAULT_PROFILE`].
pub fn select_profile(name: Option<&str>) -> Result<&'static DisplayProfile> {
    let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
        return Ok(DEFAULT_PROFILE);
    };
    DisplayProfile::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = PROFILES.iter().map(|p| p.name).collect();
        anyhow!("unknown {PROFILE_ENV} {name:?}; expected one of {}", known.join(", "))
    })
}

/// Read [`PROFILE_ENV`] from the environment and resolve it.
pub fn profile_from_env() -> Result<&'static DisplayProfile> {
    select_profile(std::env::var(PROFILE_ENV).ok().as_deref())
}

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))
}

/// Build and start the app for `profile`.
pub fn boot(profile: &DisplayProfile) -> Result<WatchApp<BundledAssets>> {
    tracing::info!(
        version = APP_VERSION,
        profile = profile.name,
        width = profile.width,
        height = profile.height,
        "booting"
    );
    let mut app = WatchApp::new(profile.capabilities(), profile.size(), BundledAssets::new());
    app.start().context("starting transit picker")?;
    Ok(app)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use platform::display::{RECT_MONO, ROUND_COLOR};

    #[test]
    fn unset_profile_is_rect_color() {
        assert_eq!(select_profile(None).unwrap(), &RECT_COLOR);
        assert_eq!(select_profile(Some("  ")).unwrap(), &RECT_COLOR);
    }

    #[test]
    fn named_profiles_resolve() {
        assert_eq!(select_profile(Some("rect-mono")).unwrap(), &RECT_MONO);
        assert_eq!(select_profile(Some("round-color")).unwrap(), &ROUND_COLOR);
    }

    #[test]
    fn unknown_profile_lists_choices() {
        let err = select_profile(Some("hexagon")).unwrap_err().to_string();
        assert!(err.contains("hexagon"));
        assert!(err.contains("round-color"));
    }

    #[test]
    fn boot_steps_end_with_start() {
        assert_eq!(BOOT_SEQUENCE_STEPS.len(), 4);
        assert!(BOOT_SEQUENCE_STEPS.last().unwrap().contains("Start"));
    }

    #[test]
    fn window_title_carries_version() {
        let title = window_title();
        assert!(title.starts_with(APP_NAME));
        assert!(title.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
