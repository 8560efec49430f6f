//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::readout::OutputFormat;

/// Map values onto the speedometer dial.
///
/// Values are taken from the command line, or read one per line from stdin
/// when none are given.
#[derive(Parser, Debug, Clone)]
#[command(name = "speedometer", about = "Speedometer gauge readout")]
pub struct Args {
    /// Values to map. Reads stdin when empty.
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Path to configuration file (JSON5).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Readout format. Overrides the configured one.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print the dial's scale ticks and exit.
    #[arg(long)]
    pub ticks: bool,
}
