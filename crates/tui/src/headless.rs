//! Plain-text reporter for running without a terminal UI.

use buffon_core::{PiEstimate, SimulationState, TrialObserver, TrialReport};
use std::io::{self, Write};

/// Prints a progress line every `every` trials and a summary at the end.
///
/// Write failures stop further output; the first one is returned by
/// [`HeadlessReporter::finish`].
pub struct HeadlessReporter<W: Write> {
    out: W,
    every: u64,
    last: Option<TrialReport>,
    error: Option<io::Error>,
}

impl<W: Write> HeadlessReporter<W> {
    pub fn new(out: W, every: u64) -> Self {
        Self {
            out,
            every: every.max(1),
            last: None,
            error: None,
        }
    }

    fn write_line(&mut self, line: String) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{}", line) {
            self.error = Some(e);
        }
    }

    /// Flush and hand back the writer, or the first write error
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

/// One progress line
pub fn progress_line(report: &TrialReport) -> String {
    format!(
        "Needles: {}  Crossings: {}  π ≈ {:.5}",
        report.trials_completed, report.crossings, report.estimate
    )
}

impl<W: Write> TrialObserver for HeadlessReporter<W> {
    fn on_trial(&mut self, report: &TrialReport) {
        self.last = Some(*report);
        if report.trials_completed % self.every == 0 {
            self.write_line(progress_line(report));
        }
    }

    fn on_finish(&mut self, state: SimulationState) {
        let estimate = match self.last {
            Some(report) => report.estimate,
            None => PiEstimate::Undefined,
        };
        let error = match estimate.relative_error() {
            Some(e) => format!(" (error {:.3}%)", e * 100.0),
            None => String::new(),
        };
        self.write_line(format!(
            "Final: {} needles, {} crossings, π ≈ {:.5}{}",
            state.trials_completed(),
            state.crossings(),
            estimate,
            error
        ));
    }
}
