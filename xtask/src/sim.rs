//! xtask sim - run the desktop simulator for one display profile.

use anyhow::{Context, Result};
use colored::Colorize;
use platform::config;
use platform::display::PROFILES;
use platform::DisplayProfile;
use std::process::Command;

pub fn run(profile: Option<&str>, log: &str) -> Result<()> {
    let profile = resolve(profile)?;
    print_banner(profile);

    let status = Command::new("cargo")
        .args(["run", "-p", "firmware", "--features", "simulator"])
        .env("WATCH_PROFILE", profile.name)
        .env("RUST_LOG", log)
        .status()
        .context("Failed to start simulator")?;

    if !status.success() {
        anyhow::bail!("Simulator exited with {status}");
    }
    Ok(())
}

/// Validate the profile here so a typo fails before cargo builds anything.
fn resolve(name: Option<&str>) -> Result<&'static DisplayProfile> {
    let name = name.unwrap_or("rect-color");
    DisplayProfile::from_name(name).with_context(|| {
        let known: Vec<&str> = PROFILES.iter().map(|p| p.name).collect();
        format!("Unknown profile {name:?}; expected one of {}", known.join(", "))
    })
}

fn banner_title() -> String {
    format!("{} v{}", config::dev_banner(), config::APP_VERSION)
}

fn print_banner(profile: &DisplayProfile) {
    println!();
    println!("{}", banner_title().cyan().bold());
    println!(
        "{}",
        format!(
            "Profile: {} ({}×{}, {:?}, {})",
            profile.name,
            profile.width,
            profile.height,
            profile.shape,
            if profile.color { "colour" } else { "mono" }
        )
        .dimmed()
    );
    println!("{}", "Keys: ↑/↓ move, Return select, Backspace/Esc back".dimmed());
    println!();
}
