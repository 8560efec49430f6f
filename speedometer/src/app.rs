//! Update loop connecting text input to the gauge.

use std::io::{self, BufRead, Write};

use speedometer_core::{InputError, MappedValue, ValueMapper, parse_input};
use tracing::{debug, warn};

use crate::readout::{OutputFormat, render, render_tick};

/// Result of submitting one piece of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// The input was a valid value and the gauge moved to it.
    Accepted(MappedValue),
    /// The input was rejected; the gauge keeps its previous value.
    Rejected { input: String, error: InputError },
}

/// Counts of processed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub accepted: usize,
    pub rejected: usize,
}

/// The speedometer front end.
pub struct Speedometer {
    mapper: ValueMapper,
    format: OutputFormat,
    current: Option<MappedValue>,
    summary: Summary,
}

impl Speedometer {
    /// Create a front end drawing onto `mapper`'s dial.
    pub fn new(mapper: ValueMapper, format: OutputFormat) -> Self {
        Self {
            mapper,
            format,
            current: None,
            summary: Summary::default(),
        }
    }

    /// The value the gauge currently shows.
    pub fn current(&self) -> Option<&MappedValue> {
        self.current.as_ref()
    }

    /// Counts of accepted and rejected input so far.
    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Validate `input` and move the gauge to it.
    pub fn submit(&mut self, input: &str) -> Update {
        match parse_input(input) {
            Ok(value) => {
                self.summary.accepted += 1;
                Update::Accepted(self.show(value))
            }
            Err(error) => {
                warn!(input = %input, error = %error, "Rejected input");
                self.summary.rejected += 1;
                Update::Rejected {
                    input: input.to_string(),
                    error,
                }
            }
        }
    }

    /// Move the gauge to an already validated value.
    ///
    /// Unlike [`submit`](Self::submit), this does not count as input.
    pub fn show(&mut self, value: f64) -> MappedValue {
        let mapped = self.mapper.map(value);
        debug!(
            value,
            display = mapped.display_text(),
            progress = mapped.progress(),
            "Gauge updated"
        );
        self.current = Some(mapped.clone());
        mapped
    }

    /// Submit `input` and write the outcome.
    ///
    /// Readouts go to `out`, rejection messages to `err`.
    pub fn submit_and_write<W: Write, E: Write>(
        &mut self,
        input: &str,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<Update> {
        let update = self.submit(input);
        match &update {
            Update::Accepted(mapped) => write_line(out, render(mapped, self.format))?,
            Update::Rejected { input, error } => {
                writeln!(err, "invalid input {:?}: {}", input, error)?
            }
        }
        Ok(update)
    }

    /// Write the current value, if any.
    pub fn write_current<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(mapped) = &self.current {
            write_line(out, render(mapped, self.format))?;
        }
        Ok(())
    }

    /// Process one value per line until `reader` is exhausted.
    ///
    /// Lines are trimmed and blank lines skipped.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        reader: R,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<Summary> {
        for line in reader.lines() {
            let line = line?;
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            self.submit_and_write(input, out, err)?;
            out.flush()?;
        }
        Ok(self.summary)
    }

    /// Write one line per scale tick.
    pub fn write_ticks<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for tick in self.mapper.scale_ticks() {
            write_line(out, render_tick(&tick, self.format))?;
        }
        Ok(())
    }
}

/// Write a rendered line, surfacing serialization failures as IO errors.
fn write_line<W: Write>(out: &mut W, line: serde_json::Result<String>) -> io::Result<()> {
    let line = line.map_err(io::Error::other)?;
    writeln!(out, "{}", line)
}
