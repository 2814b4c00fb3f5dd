//! Transit Watch desktop simulator
//!
//! Run with: cargo run -p firmware --features simulator
//!
//! `WATCH_PROFILE` picks the panel (`rect-mono`, `rect-color`, `round-color`).

use anyhow::{anyhow, Result};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use firmware::EmulatedKey;
use platform::config;
use ui::AppEvent;

fn main() -> Result<()> {
    firmware::init_tracing()?;
    tracing::info!("{}", config::dev_banner());

    let profile = firmware::profile_from_env()?;
    let mut app = firmware::boot(profile)?;

    let mut display = SimulatorDisplay::<Rgb565>::new(profile.size());
    let settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new(&firmware::window_title(), &settings);

    app.render(&mut display)
        .map_err(|e| anyhow!("render failed: {e:?}"))?;

    'running: loop {
        window.update(&display);

        for event in window.events() {
            let key = match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat: false, .. } => {
                    EmulatedKey::from_keycode(keycode)
                }
                _ => None,
            };
            let Some(key) = key else { continue };

            match app.handle_input(key.press()) {
                Ok(AppEvent::Idle) => {}
                Ok(AppEvent::ExitRequested) => {
                    tracing::info!("exit requested");
                    break 'running;
                }
                Ok(AppEvent::ModeChosen(mode)) => {
                    tracing::info!(mode = mode.label(), "directions requested");
                    app.render(&mut display)
                        .map_err(|e| anyhow!("render failed: {e:?}"))?;
                }
                Ok(AppEvent::Redraw) => {
                    app.render(&mut display)
                        .map_err(|e| anyhow!("render failed: {e:?}"))?;
                }
                Err(e) => tracing::warn!(error = %e, "input dropped"),
            }
        }
    }

    Ok(())
}
