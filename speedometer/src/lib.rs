//! Speedometer - command-line front end for the gauge mapper.
//!
//! This library exposes the front-end components for testing.

pub mod app;
pub mod args;
pub mod config;
pub mod readout;

// Re-export commonly used types
pub use app::{Speedometer, Summary, Update};
pub use args::Args;
pub use config::AppConfig;
pub use readout::OutputFormat;
