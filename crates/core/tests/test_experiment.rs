//! End-to-end runs of the needle experiment
//!
//! These tests drive whole simulations through the public API, the way a
//! display layer does, and check the statistical behavior of the estimate.

use buffon_core::{
    Bounds, ConfigError, Geometry, PiEstimate, Simulation, SimulationConfig, TrialReport,
    crosses_line, resolve_trials,
};

fn run_all(config: &SimulationConfig, trials: u64) -> Vec<TrialReport> {
    let mut sim = Simulation::new(config, trials).expect("valid config");
    let mut reports = Vec::new();
    sim.run(&mut |r: &TrialReport| reports.push(*r));
    reports
}

#[test]
fn test_ten_thousand_unit_needles_approach_pi() {
    let config = SimulationConfig::new().with_seed(314);
    let reports = run_all(&config, 10_000);
    assert_eq!(reports.len(), 10_000);

    let last = reports.last().expect("at least one report");
    let estimate = last.estimate.value().expect("some needles cross");
    assert!(
        (2.8..=3.5).contains(&estimate),
        "estimate {} outside [2.8, 3.5]",
        estimate
    );
}

#[test]
fn test_short_needle_also_estimates_pi() {
    let config = SimulationConfig::new()
        .with_seed(17)
        .with_geometry(Geometry::new(0.5, 1.0).expect("valid geometry"));
    let reports = run_all(&config, 20_000);
    let estimate = reports
        .last()
        .and_then(|r| r.estimate.value())
        .expect("some needles cross");
    assert!((2.8..=3.5).contains(&estimate), "estimate {}", estimate);
}

#[test]
fn test_every_report_is_consistent() {
    let config = SimulationConfig::new().with_seed(1);
    let geometry = config.geometry;
    let reports = run_all(&config, 2_000);

    let mut crossings = 0;
    for (i, report) in reports.iter().enumerate() {
        if report.needle.crosses {
            crossings += 1;
        }
        assert_eq!(report.trials_completed, i as u64 + 1);
        assert_eq!(report.crossings, crossings);
        assert_eq!(
            report.needle.crosses,
            crosses_line(report.needle.y, report.needle.theta, &geometry)
        );
        let expected = if crossings == 0 {
            PiEstimate::Undefined
        } else {
            PiEstimate::Value(2.0 * (i as f64 + 1.0) / crossings as f64)
        };
        assert_eq!(report.estimate, expected);
    }
}

#[test]
fn test_same_seed_same_run() {
    let config = SimulationConfig::new().with_seed(2718);
    assert_eq!(run_all(&config, 500), run_all(&config, 500));
}

#[test]
fn test_long_needle_rejected_up_front() {
    let config = SimulationConfig::new().with_geometry(Geometry {
        needle_length: 2.0,
        line_spacing: 1.0,
    });
    match Simulation::new(&config, 10) {
        Err(ConfigError::NeedleTooLong { length, spacing }) => {
            assert_eq!(length, 2.0);
            assert_eq!(spacing, 1.0);
        }
        other => panic!("Expected NeedleTooLong, got {:?}", other.map(|s| s.state())),
    }
}

#[test]
fn test_wide_bounds_keep_needles_inside() {
    let bounds = Bounds::new(-10.0, 10.0, -5.0, 5.0);
    let config = SimulationConfig::new().with_seed(9).with_bounds(bounds);
    for report in run_all(&config, 1_000) {
        let ((x0, y0), (x1, y1)) = report.needle.endpoints(config.geometry.needle_length);
        for x in [x0, x1] {
            assert!((bounds.x_min..=bounds.x_max).contains(&x));
        }
        for y in [y0, y1] {
            assert!((bounds.y_min..=bounds.y_max).contains(&y));
        }
    }
}

#[test]
fn test_bad_input_runs_default_trials() {
    let config = SimulationConfig::new().with_seed(6);
    let trials = resolve_trials("not a number", config.default_trials).get();
    assert_eq!(run_all(&config, trials).len(), 300);
}
