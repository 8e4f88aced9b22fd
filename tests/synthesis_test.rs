// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end synthesis scenarios driven through the public API.

mod common;

use common::assert_plan_invariants;
use splitter_synth::synth::{synthesize, Counters, Synthesizer};
use splitter_synth::{Fraction, SynthesisError};

fn ints(a: i64, b: i64) -> (Fraction, Fraction) {
    (Fraction::from_integer(a), Fraction::from_integer(b))
}

#[test]
fn test_even_split_single_binary_level() {
    let (a, b) = ints(1, 1);
    let plan = synthesize(a, b).unwrap();

    assert_eq!(plan.ratio_a, Fraction::new(1, 2).unwrap());
    assert_eq!(plan.ratio_b, Fraction::new(1, 2).unwrap());
    assert_eq!(plan.denominator, 2);
    assert_eq!(plan.capacity, 2);
    assert_eq!(plan.factors.to_string(), "[2]");
    assert!(!plan.needs_feedback());
    assert_plan_invariants(&plan);
}

#[test]
fn test_one_to_two_single_ternary_level() {
    let (a, b) = ints(1, 2);
    let plan = synthesize(a, b).unwrap();

    assert_eq!(plan.ratio_a, Fraction::new(1, 3).unwrap());
    assert_eq!(plan.ratio_b, Fraction::new(2, 3).unwrap());
    assert_eq!(plan.capacity, 3);
    assert_eq!(plan.factors.to_string(), "[3]");
    assert!(!plan.needs_feedback());
    assert_plan_invariants(&plan);
}

#[test]
fn test_two_to_three_needs_feedback() {
    let (a, b) = ints(2, 3);
    let plan = synthesize(a, b).unwrap();

    assert_eq!(plan.denominator, 5);
    assert_eq!(plan.capacity, 6);
    assert_eq!(plan.factors.to_string(), "[3,2]");
    assert!(plan.needs_feedback());
    assert_eq!(plan.feedback(), 1);

    // Exact digit decomposition of targets (2, 3, 1) on weights (2, 1).
    assert_eq!(plan.assignments[0].digits(), &[1, 0]);
    assert_eq!(plan.assignments[1].digits(), &[1, 1]);
    assert_eq!(plan.assignments[2].digits(), &[0, 1]);

    // Per-level usage totals are exactly (2, 2).
    for level in 0..2 {
        let usage: i64 = plan.assignments.iter().map(|a| a.digit(level)).sum();
        assert_eq!(usage, 2);
    }
    assert_plan_invariants(&plan);
}

#[test]
fn test_fractional_quantities() {
    // 1/2 : 1/3 resolves to 3/5 : 2/5 and reuses the denominator-5 shape.
    let a = Fraction::new(1, 2).unwrap();
    let b = Fraction::new(1, 3).unwrap();
    let plan = synthesize(a, b).unwrap();

    assert_eq!(plan.ratio_a, Fraction::new(3, 5).unwrap());
    assert_eq!(plan.ratio_b, Fraction::new(2, 5).unwrap());
    assert_eq!(plan.capacity, 6);
    assert_plan_invariants(&plan);
}

#[test]
fn test_deeper_networks() {
    for (a, b) in [(7, 5), (5, 11), (9, 23), (1, 3)] {
        let (a, b) = ints(a, b);
        let plan = synthesize(a, b).unwrap();
        assert!(!plan.needs_feedback(), "{}:{} has a 3-smooth total", a, b);
        assert_plan_invariants(&plan);
    }
}

#[test]
fn test_invalid_rational_input() {
    assert_eq!(Fraction::new(1, 0), Err(SynthesisError::ZeroDenominator));
}

#[test]
fn test_zero_total_rejected() {
    let (a, b) = ints(0, 0);
    assert!(matches!(
        synthesize(a, b),
        Err(SynthesisError::NonPositiveTotal { .. })
    ));
}

#[test]
fn test_no_feasible_topology() {
    // Denominator 10 under capacity 12 strands the feedback target; the
    // factor sequence ends in 2 so no fallback is attempted.
    let (a, b) = ints(3, 7);
    assert_eq!(
        synthesize(a, b),
        Err(SynthesisError::NoFeasibleTopology {
            denominator: 10,
            capacity: 12,
        })
    );

    // Infeasible on a purely binary sequence (denominator 13, capacity 16).
    let (a, b) = ints(2, 11);
    assert!(matches!(
        synthesize(a, b),
        Err(SynthesisError::NoFeasibleTopology { denominator: 13, .. })
    ));
}

#[test]
fn test_determinism_across_calls() {
    let (a, b) = ints(9, 23);
    assert_eq!(synthesize(a, b).unwrap(), synthesize(a, b).unwrap());
}

#[test]
fn test_search_limit_surfaces_as_error() {
    let (a, b) = ints(2, 3);
    let mut synthesizer = Synthesizer::with_search_limit(1);
    assert_eq!(
        synthesizer.synthesize(a, b),
        Err(SynthesisError::SearchLimitExceeded { start: 5, limit: 1 })
    );
}

#[test]
fn test_statistics_track_the_pipeline() {
    let mut synthesizer = Synthesizer::new();
    let (a, b) = ints(2, 3);
    synthesizer.synthesize(a, b).unwrap();

    assert_eq!(synthesizer.statistics().get(Counters::PlansSynthesized), 1);
    assert_eq!(synthesizer.statistics().get(Counters::FactorCandidates), 2);
}
