//! xtask doc - document the watch crates as they build for the watch, then
//! the whole host workspace.

use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::check::{run_step, Step, WATCH_TARGET};

/// Crates whose watch-target docs are built first.
const WATCH_CRATES: &[&str] = &["platform", "ui"];

const STEPS: &[Step] = &[
    Step {
        label: "watch crates (no_std)",
        args: &[
            "doc",
            "-p",
            "platform",
            "-p",
            "ui",
            "--no-deps",
            "--target",
            WATCH_TARGET,
            "--no-default-features",
        ],
        fatal: false,
    },
    Step {
        label: "host workspace",
        args: &[
            "doc",
            "--workspace",
            "--no-deps",
            "--exclude",
            "xtask",
            "--document-private-items",
        ],
        fatal: true,
    },
];

pub fn run(open: bool) -> Result<()> {
    println!();
    println!("{}", "📚 Building documentation...".cyan().bold());
    println!();

    let start = Instant::now();

    if let Some((host, watch)) = STEPS.split_last() {
        for step in watch {
            run_step(step, "Documenting", &[])?;
        }
        // Only the host build opens a browser.
        let extra: &[&str] = if open { &["--open"] } else { &[] };
        run_step(host, "Documenting", extra)?;
    }

    println!(
        "{}",
        format!("✓ Documentation built in {:.2}s", start.elapsed().as_secs_f64()).green()
    );

    if !open {
        println!();
        println!("   {}", format!("Host:  {}", doc_index(None, "firmware")).dimmed());
        for krate in WATCH_CRATES {
            println!(
                "   {}",
                format!("Watch: {}", doc_index(Some(WATCH_TARGET), krate)).dimmed()
            );
        }
        println!("   {}", "Or run 'cargo xtask doc --open'".dimmed());
    }
    println!();

    Ok(())
}

/// Where rustdoc writes `krate`'s index page for `target` (host if `None`).
fn doc_index(target: Option<&str>, krate: &str) -> String {
    match target {
        Some(target) => format!("target/{target}/doc/{krate}/index.html"),
        None => format!("target/doc/{krate}/index.html"),
    }
}
