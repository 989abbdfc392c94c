//! buffon - Buffon's needle Monte Carlo simulator
//!
//! Drops needles on a ruled plane and estimates π from how many cross a
//! line, drawing each drop live in the terminal.
//!
//! Usage:
//!   buffon                          # Prompt for the number of needles
//!   buffon --trials 5000            # Skip the prompt
//!   buffon --headless --seed 42     # Print progress instead of drawing
//!   buffon --config buffon.toml     # Override geometry, bounds, speed
//!
//! Keys:
//!   space                           # Pause / resume
//!   + / -                           # Faster / slower
//!   r                               # Restart the run
//!   q, Esc, Ctrl+C                  # Quit

use buffon_core::{Simulation, SimulationConfig, TrialCount};
use buffon_tui::headless::HeadlessReporter;
use buffon_tui::logging::{self, LogTarget};
use buffon_tui::prompt;
use clap::Parser as ClapParser;
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(ClapParser)]
#[command(name = "buffon")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Estimate π by dropping Buffon's needles", long_about = None)]
struct Args {
    /// Number of needles to drop (prompts if not given)
    #[arg(long, short = 'n')]
    trials: Option<String>,

    /// TOML file overriding geometry, bounds, interval and seed
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(long, short = 's')]
    seed: Option<u64>,

    /// Delay between needle drops in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Print progress as text instead of drawing
    #[arg(long)]
    headless: bool,

    /// Trials between progress lines in headless mode
    #[arg(long, default_value_t = 100)]
    report_every: u64,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init(LogTarget::select(args.log_file.as_deref(), args.headless)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Build the config from file and flags, validated before any prompting
fn load_config(args: &Args) -> Result<SimulationConfig, String> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path).map_err(|e| e.to_string())?,
        None => SimulationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(ms) = args.interval_ms {
        config = config.with_interval_ms(ms);
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn read_trials(args: &Args, config: &SimulationConfig) -> io::Result<TrialCount> {
    let mut out = io::stdout();
    match &args.trials {
        Some(text) => prompt::resolve_with_notice(text, config.default_trials, &mut out),
        None => {
            prompt::print_banner(&mut out)?;
            let stdin = io::stdin();
            prompt::prompt_trials(&mut stdin.lock(), &mut out, config.default_trials)
        }
    }
}

fn run(args: Args) -> Result<(), String> {
    let config = load_config(&args)?;
    let trials = read_trials(&args, &config)
        .map_err(|e| format!("Failed to read trial count: {}", e))?
        .get();

    let mut simulation = Simulation::new(&config, trials).map_err(|e| e.to_string())?;

    if args.headless {
        let mut reporter = HeadlessReporter::new(io::stdout(), args.report_every);
        simulation.run(&mut reporter);
        reporter
            .finish()
            .map_err(|e| format!("Failed to write output: {}", e))?;
        return Ok(());
    }

    info!(trials, interval_ms = config.interval_ms, "opening live view");
    buffon_tui::run(simulation, config.interval())
}
