//! Simulation integration tests.

#![allow(clippy::float_cmp)]

use deckhand::{Category, Simulation, SimulationOptions};

#[test]
fn options_builder_sets_fields() {
    let options = SimulationOptions::default()
        .with_category(Category::TwoPair)
        .with_target_matches(7)
        .with_stop_after_first(true)
        .with_max_trials(Some(99));

    assert_eq!(options.category, Category::TwoPair);
    assert_eq!(options.target_matches, 7);
    assert!(options.stop_after_first);
    assert_eq!(options.max_trials, Some(99));
}

#[test]
fn defaults_count_straights() {
    let options = SimulationOptions::default();
    assert_eq!(options.category, Category::Straight);
    assert_eq!(options.target_matches, 10_000);
    assert!(!options.stop_after_first);
    assert_eq!(options.max_trials, None);
}

#[test]
fn runs_until_target_reached() {
    let options = SimulationOptions::default()
        .with_category(Category::Pair)
        .with_target_matches(25);
    let report = Simulation::new(options, 5).run().unwrap();

    assert_eq!(report.matches, 25);
    assert!(report.trials >= 25);
    assert!(report.first_match.as_ref().is_some_and(|h| h.is_pair()));
}

#[test]
fn stop_after_first_overrides_target() {
    let options = SimulationOptions::default().with_stop_after_first(true);
    let report = Simulation::new(options, 11).run().unwrap();

    assert_eq!(report.matches, 1);
    assert!(report.probability_percent() > 0.0);
    let hand = report.first_match.as_ref().unwrap();
    assert!(hand.is_straight());
    assert_eq!(
        report.probability_percent(),
        100.0 / report.trials as f64
    );
}

#[test]
fn max_trials_bounds_the_run() {
    let options = SimulationOptions::default()
        .with_category(Category::Quads)
        .with_max_trials(Some(10));
    let report = Simulation::new(options, 3).run().unwrap();

    assert_eq!(report.trials, 10);
    assert!(report.matches <= 10);
}

#[test]
fn zero_trials_report_zero_probability() {
    let options = SimulationOptions::default().with_max_trials(Some(0));
    let report = Simulation::new(options, 3).run().unwrap();

    assert_eq!(report.trials, 0);
    assert_eq!(report.first_match, None);
    assert_eq!(report.probability_percent(), 0.0);
}

#[test]
fn same_seed_same_report() {
    let options = SimulationOptions::default()
        .with_category(Category::Flush)
        .with_target_matches(3);

    let a = Simulation::new(options, 2024).run().unwrap();
    let b = Simulation::new(options, 2024).run().unwrap();

    assert_eq!(a, b);
    assert_eq!(
        a.first_match.map(|h| h.to_string()),
        b.first_match.map(|h| h.to_string())
    );
}

#[test]
fn pair_frequency_is_plausible() {
    let options = SimulationOptions::default()
        .with_category(Category::Pair)
        .with_target_matches(u64::MAX)
        .with_max_trials(Some(20_000));
    let report = Simulation::new(options, 8).run().unwrap();

    // One pair turns up in about 42.3% of hands.
    let p = report.probability_percent();
    assert!((38.0..47.0).contains(&p), "{p}");
}
