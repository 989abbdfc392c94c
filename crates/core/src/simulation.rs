//! Simulation driver
//!
//! `Simulation` owns the generator and the running counts for one run of N
//! trials. Each `step` drops one needle, folds it into the state, and hands
//! back a `TrialReport` for whatever is displaying the run.

use crate::config::SimulationConfig;
use crate::error::ConfigError;
use crate::estimate::{PiEstimate, estimate_pi};
use crate::geometry::{Bounds, Geometry};
use crate::needle::{Needle, Sampler};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

/// Running counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationState {
    trials_completed: u64,
    crossings: u64,
}

impl SimulationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trials_completed(&self) -> u64 {
        self.trials_completed
    }

    pub fn crossings(&self) -> u64 {
        self.crossings
    }

    /// The state after one more trial
    #[must_use]
    pub fn record(self, crossed: bool) -> Self {
        Self {
            trials_completed: self.trials_completed + 1,
            crossings: self.crossings + u64::from(crossed),
        }
    }

    pub fn estimate(&self, geometry: &Geometry) -> PiEstimate {
        estimate_pi(
            self.crossings,
            self.trials_completed,
            geometry.needle_length,
            geometry.line_spacing,
        )
    }
}

/// Everything the display needs after a single trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialReport {
    pub needle: Needle,
    pub estimate: PiEstimate,
    pub trials_completed: u64,
    pub crossings: u64,
}

/// Receives trial reports from [`Simulation::run`].
pub trait TrialObserver {
    fn on_trial(&mut self, report: &TrialReport);

    /// Called once after the last trial
    fn on_finish(&mut self, _state: SimulationState) {}
}

impl<F: FnMut(&TrialReport)> TrialObserver for F {
    fn on_trial(&mut self, report: &TrialReport) {
        self(report)
    }
}

/// One run of a fixed number of needle drops.
#[derive(Debug, Clone)]
pub struct Simulation {
    sampler: Sampler,
    bounds: Bounds,
    state: SimulationState,
    target: u64,
    seed: Option<u64>,
    rng: StdRng,
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl Simulation {
    /// Set up a run of `trials` needles.
    ///
    /// Fails with a configuration error before any needle is dropped.
    pub fn new(config: &SimulationConfig, trials: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let sampler = Sampler::new(config.geometry, config.bounds)?;
        info!(
            trials,
            needle_length = config.geometry.needle_length,
            line_spacing = config.geometry.line_spacing,
            seed = ?config.seed,
            "starting simulation"
        );
        Ok(Self {
            sampler,
            bounds: config.bounds,
            state: SimulationState::new(),
            target: trials,
            seed: config.seed,
            rng: make_rng(config.seed),
        })
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn geometry(&self) -> &Geometry {
        self.sampler.geometry()
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Number of trials this run performs
    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn remaining(&self) -> u64 {
        self.target - self.state.trials_completed()
    }

    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }

    /// Current estimate from the counts so far
    pub fn estimate(&self) -> PiEstimate {
        self.state.estimate(self.geometry())
    }

    /// Drop the next needle, or `None` once all trials are done
    pub fn step(&mut self) -> Option<TrialReport> {
        if self.is_finished() {
            return None;
        }
        let needle = self.sampler.sample(&mut self.rng);
        self.state = self.state.record(needle.crosses);
        let report = TrialReport {
            needle,
            estimate: self.estimate(),
            trials_completed: self.state.trials_completed(),
            crossings: self.state.crossings(),
        };
        trace!(
            trial = report.trials_completed,
            x = needle.x,
            y = needle.y,
            theta = needle.theta,
            crosses = needle.crosses,
            "dropped needle"
        );
        Some(report)
    }

    /// Drive every remaining trial through `observer`
    pub fn run<O: TrialObserver + ?Sized>(&mut self, observer: &mut O) -> SimulationState {
        while let Some(report) = self.step() {
            observer.on_trial(&report);
        }
        observer.on_finish(self.state);
        info!(
            trials = self.state.trials_completed(),
            crossings = self.state.crossings(),
            estimate = %self.estimate(),
            "simulation finished"
        );
        self.state
    }

    /// Start a new run with the same trial count.
    ///
    /// Counters return to zero. A seeded run replays the same sequence;
    /// an unseeded one draws fresh entropy.
    pub fn restart(&mut self) {
        debug!(
            completed = self.state.trials_completed(),
            target = self.target,
            "restarting simulation"
        );
        self.state = SimulationState::new();
        self.rng = make_rng(self.seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64, trials: u64) -> Simulation {
        Simulation::new(&SimulationConfig::new().with_seed(seed), trials).unwrap()
    }

    #[test]
    fn test_state_record() {
        let state = SimulationState::new().record(true).record(false).record(true);
        assert_eq!(state.trials_completed(), 3);
        assert_eq!(state.crossings(), 2);
    }

    #[test]
    fn test_long_needle_fails_before_any_trial() {
        let config = SimulationConfig::new().with_geometry(Geometry {
            needle_length: 2.0,
            line_spacing: 1.0,
        });
        let err = Simulation::new(&config, 100).unwrap_err();
        assert!(matches!(err, ConfigError::NeedleTooLong { .. }));
    }

    #[test]
    fn test_counters_are_monotonic() {
        let mut sim = seeded(1, 500);
        let mut previous = sim.state();
        while let Some(report) = sim.step() {
            let state = sim.state();
            assert_eq!(state.trials_completed(), previous.trials_completed() + 1);
            let gained = state.crossings() - previous.crossings();
            assert!(gained <= 1);
            assert_eq!(gained == 1, report.needle.crosses);
            assert!(state.crossings() <= state.trials_completed());
            assert_eq!(report.trials_completed, state.trials_completed());
            assert_eq!(report.crossings, state.crossings());
            previous = state;
        }
        assert_eq!(previous.trials_completed(), 500);
    }

    #[test]
    fn test_runs_exactly_target_trials() {
        let mut sim = seeded(2, 25);
        let mut seen = 0;
        let state = sim.run(&mut |_: &TrialReport| seen += 1);
        assert_eq!(seen, 25);
        assert_eq!(state.trials_completed(), 25);
        assert!(sim.is_finished());
        assert_eq!(sim.step(), None);
    }

    #[test]
    fn test_estimate_converges_toward_pi() {
        let mut sim = seeded(2024, 10_000);
        sim.run(&mut |_: &TrialReport| {});
        let estimate = sim.estimate().value().expect("10,000 drops must cross");
        assert!(
            (2.8..=3.5).contains(&estimate),
            "estimate {} outside [2.8, 3.5]",
            estimate
        );
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let mut a = seeded(99, 1000);
        let mut b = seeded(99, 1000);
        let mut reports_a = Vec::new();
        let mut reports_b = Vec::new();
        a.run(&mut |r: &TrialReport| reports_a.push(*r));
        b.run(&mut |r: &TrialReport| reports_b.push(*r));
        assert_eq!(reports_a, reports_b);
        assert_eq!(a.estimate(), b.estimate());
    }

    #[test]
    fn test_restart_resets_counts() {
        let mut sim = seeded(5, 50);
        let first = sim.run(&mut |_: &TrialReport| {});
        sim.restart();
        assert_eq!(sim.state(), SimulationState::new());
        assert_eq!(sim.remaining(), 50);
        assert_eq!(sim.estimate(), PiEstimate::Undefined);
        let second = sim.run(&mut |_: &TrialReport| {});
        assert_eq!(first, second);
    }

    struct Recorder {
        trials: u64,
        finished: Option<SimulationState>,
    }

    impl TrialObserver for Recorder {
        fn on_trial(&mut self, _report: &TrialReport) {
            self.trials += 1;
        }

        fn on_finish(&mut self, state: SimulationState) {
            self.finished = Some(state);
        }
    }

    #[test]
    fn test_observer_sees_finish() {
        let mut sim = seeded(3, 10);
        let mut recorder = Recorder {
            trials: 0,
            finished: None,
        };
        let state = sim.run(&mut recorder);
        assert_eq!(recorder.trials, 10);
        assert_eq!(recorder.finished, Some(state));
    }

    #[test]
    fn test_zero_trials_run_is_finished() {
        let mut sim = seeded(4, 0);
        assert!(sim.is_finished());
        assert_eq!(sim.step(), None);
        assert_eq!(sim.estimate(), PiEstimate::Undefined);
    }
}
