//! Speedometer - gauge readout from the command line.
//!
//! Maps each value onto the dial and prints its readout, progress and needle
//! angle. Values come from the arguments or, when none are given, from stdin.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use speedometer_core::{ValueMapper, init_tracing};

use speedometer::{AppConfig, Args, Speedometer};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    // Initialize logging with optional CLI override
    let mut logging = config.logging.clone();
    if let Some(level) = &args.log_level {
        logging.level = level.clone();
    }
    init_tracing(&logging)?;

    tracing::info!(
        config = ?args.config,
        max_value = config.gauge.max_value,
        marks = config.gauge.scale_marks.len(),
        "Starting speedometer"
    );

    let format = args.format.unwrap_or(config.output.format);
    let mut app = Speedometer::new(ValueMapper::new(config.gauge.clone()), format);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stderr = io::stderr();
    let mut err = stderr.lock();

    if args.ticks {
        app.write_ticks(&mut out)?;
        return Ok(());
    }

    if let Some(value) = config.startup_value {
        app.show(value);
        app.write_current(&mut out)?;
    }

    let summary = if args.values.is_empty() {
        app.run(io::stdin().lock(), &mut out, &mut err)?
    } else {
        for value in &args.values {
            app.submit_and_write(value.trim(), &mut out, &mut err)?;
        }
        app.summary()
    };
    out.flush()?;

    tracing::info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        "Input processed"
    );

    if summary.rejected > 0 {
        anyhow::bail!("{} input value(s) rejected", summary.rejected);
    }

    Ok(())
}
