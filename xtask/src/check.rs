use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

/// Watch target used to prove the UI stack stays `no_std`.
pub(crate) const WATCH_TARGET: &str = "thumbv7em-none-eabihf";

/// One `cargo` invocation in a check or doc run.
pub(crate) struct Step {
    pub(crate) label: &'static str,
    pub(crate) args: &'static [&'static str],
    /// Failure aborts the run; otherwise it is reported as a warning.
    pub(crate) fatal: bool,
}

const STEPS: &[Step] = &[
    Step {
        label: "platform crate (no_std)",
        args: &["check", "-p", "platform", "--target", WATCH_TARGET, "--no-default-features"],
        fatal: true,
    },
    Step {
        label: "ui crate (no_std)",
        args: &["check", "-p", "ui", "--target", WATCH_TARGET, "--no-default-features"],
        fatal: true,
    },
    Step {
        label: "ui crate with defmt",
        args: &["check", "-p", "ui", "--target", WATCH_TARGET, "--features", "defmt"],
        fatal: true,
    },
    Step {
        label: "firmware host library",
        args: &["check", "-p", "firmware"],
        fatal: true,
    },
    Step {
        label: "simulator binary",
        args: &["check", "-p", "firmware", "--features", "simulator"],
        fatal: false,
    },
    Step {
        label: "clippy lints",
        args: &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        fatal: false,
    },
    Step {
        label: "code formatting",
        args: &["fmt", "--all", "--check"],
        fatal: false,
    },
];

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking workspace...".cyan().bold());
    println!();

    let total_start = Instant::now();

    for step in STEPS {
        run_step(step, "Checking", &[])?;
    }

    println!(
        "{}",
        format!(
            "✓ All checks completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}

/// Run `cargo <step.args> <extra>`, reporting under `verb`.
pub(crate) fn run_step(step: &Step, verb: &str, extra: &[&str]) -> Result<()> {
    println!("{}", format!("  {verb} {}...", step.label).cyan());
    let start = Instant::now();

    let output = Command::new("cargo")
        .args(step.args)
        .args(extra)
        .output()
        .with_context(|| format!("Failed to run cargo {}", step.args.join(" ")))?;

    if output.status.success() {
        println!(
            "{}",
            format!(
                "  ✓ {} passed in {:.2}s",
                step.label,
                start.elapsed().as_secs_f64()
            )
            .green()
        );
    } else if step.fatal {
        eprintln!("{}", format!("  ✗ {} failed", step.label).red().bold());
        eprintln!();
        eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        anyhow::bail!("{} failed", step.label);
    } else {
        eprintln!("{}", format!("  ⚠ {} reported problems", step.label).yellow().bold());
        eprintln!();
        eprintln!("{}", String::from_utf8_lossy(&output.stderr));
    }
    println!();

    Ok(())
}
