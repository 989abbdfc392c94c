//! Startup banner and trial-count prompt.

use buffon_core::{TrialCount, resolve_trials};
use std::io::{self, BufRead, Write};

pub const WELCOME: &str = "Welcome to Buffon's Needle Monte Carlo Simulator!";
pub const WELCOME_DETAIL: &str = "Each run will be random and yield a different π estimate.";
pub const PROMPT: &str = "How many needles should be dropped? ";

/// Print the welcome banner
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", WELCOME)?;
    writeln!(out, "{}", WELCOME_DETAIL)?;
    writeln!(out)
}

/// Diagnostic printed when the default replaces the input
pub fn fallback_notice(trials: u64) -> String {
    format!("Invalid input. Using default N={}.", trials)
}

/// Turn already-supplied text into a trial count, printing the fallback
/// notice if it was unusable
pub fn resolve_with_notice<W: Write>(
    input: &str,
    default: u64,
    out: &mut W,
) -> io::Result<TrialCount> {
    let count = resolve_trials(input, default);
    if count.is_fallback() {
        writeln!(out, "{}\n", fallback_notice(count.get()))?;
    }
    Ok(count)
}

/// Ask for the number of needles. End of input counts as invalid input.
pub fn prompt_trials<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    default: u64,
) -> io::Result<TrialCount> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    resolve_with_notice(&line, default, out)
}
