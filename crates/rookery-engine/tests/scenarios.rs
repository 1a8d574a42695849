//! Integration test: reference scenarios end to end.
//!
//! Drives full runs through the public API and checks the closing numbers
//! against hand-computed values of the damped update.

use rookery_core::{fixed_point, RoundId};
use rookery_engine::{EvolutionRun, RunConfig, RunError};
use rookery_test_utils::{assert_close, canonical, cold_start, saturated};

#[test]
fn canonical_run_reaches_rest_point() {
    let mut run = EvolutionRun::new(canonical()).unwrap();
    let summary = run.run_to_end();

    assert_eq!(summary.rounds, 30);
    assert_close(summary.final_proportion, 0.66298, 1e-3);
    assert_close(summary.final_proportion, fixed_point(3.0), 1e-3);
    assert!(summary.converged(1e-3));
    assert_eq!(run.trajectory().len(), 31);
    assert_eq!(run.trajectory().initial(), 0.3);
}

#[test]
fn canonical_run_rises_monotonically() {
    let mut run = EvolutionRun::new(canonical()).unwrap();
    run.run_to_end();
    assert!(run.trajectory().deltas().all(|d| d >= 0.0));
    assert!(run.trajectory().approaches(run.target()));
}

#[test]
fn cold_start_single_round() {
    let mut run = EvolutionRun::new(cold_start()).unwrap();
    let outcome = run.step().unwrap();
    assert_close(outcome.proportion, 0.140625, 1e-12);
    assert_eq!(run.step(), Err(RunError::Completed { rounds: 1 }));
}

#[test]
fn saturated_run_holds_at_one() {
    let mut run = EvolutionRun::new(saturated()).unwrap();
    let summary = run.run_to_end();
    assert_close(summary.rest_point, 15.0 / 12.2, 1e-12);
    assert_eq!(summary.target, 1.0);
    assert_eq!(summary.final_proportion, 1.0);
    assert!(run.trajectory().as_slice().iter().all(|&x| x == 1.0));
}

#[test]
fn descending_run_from_full_colony() {
    let mut run = EvolutionRun::new(RunConfig::new(1.0, 0.0, 60)).unwrap();
    let summary = run.run_to_end();
    assert!(run.trajectory().deltas().all(|d| d <= 0.0));
    assert_close(summary.final_proportion, 0.375, 1e-3);
}

#[test]
fn stepping_and_running_agree() {
    let mut stepped = EvolutionRun::new(canonical()).unwrap();
    while stepped.step().is_ok() {}

    let mut driven = EvolutionRun::new(canonical()).unwrap();
    driven.run_to_end();

    assert_eq!(stepped.trajectory(), driven.trajectory());
    assert_eq!(stepped.current_round(), RoundId(30));
}

#[test]
fn independent_runs_do_not_interact() {
    let mut a = EvolutionRun::new(canonical()).unwrap();
    let mut b = EvolutionRun::new(RunConfig::new(0.9, 0.0, 30)).unwrap();
    a.step().unwrap();
    b.run_to_end();
    a.run_to_end();

    let mut fresh = EvolutionRun::new(canonical()).unwrap();
    fresh.run_to_end();
    assert_eq!(a.trajectory(), fresh.trajectory());
}

#[test]
fn summary_and_trajectory_export_to_json() {
    let mut run = EvolutionRun::new(cold_start()).unwrap();
    let summary = run.run_to_end();

    let trajectory = serde_json::to_value(run.trajectory()).unwrap();
    let points = trajectory.as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0], 0.0);
    assert_close(points[1].as_f64().unwrap(), 0.140625, 1e-12);

    let summary = serde_json::to_value(&summary).unwrap();
    assert_eq!(summary["rest_point"], 0.375);
    assert_eq!(summary["target"], 0.375);
}

#[test]
fn maximal_round_budget_is_accepted() {
    let cfg = RunConfig::new(0.3, 3.0, u32::MAX);
    assert!(cfg.validate().is_ok());

    let mut run = EvolutionRun::new(cfg).unwrap();
    assert_eq!(run.remaining_rounds(), u32::MAX);
    for _ in 0..100 {
        run.step().unwrap();
    }
    assert_eq!(run.current_round(), RoundId(100));
    assert_eq!(run.trajectory().len(), 101);
    assert_close(run.proportion(), fixed_point(3.0), 1e-3);
    assert!(!run.is_complete());
}
