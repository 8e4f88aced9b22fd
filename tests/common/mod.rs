// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use splitter_synth::synth::LevelPlan;
use splitter_synth::BalancerPlan;

/// Assert the structural invariants every accepted plan must satisfy:
/// digits reconstruct each target numerator against the level weights,
/// and every level's total usage lies in [1, capacity].
pub fn assert_plan_invariants(plan: &BalancerPlan) {
    let level_plan = LevelPlan::from_factors(&plan.factors);

    let mut targets = vec![plan.ratio_a.numerator(), plan.ratio_b.numerator()];
    if plan.needs_feedback() {
        targets.push(plan.feedback());
    }
    assert_eq!(plan.assignments.len(), targets.len());

    for (assignment, target) in plan.assignments.iter().zip(&targets) {
        assert_eq!(
            assignment.value(&level_plan),
            *target,
            "digits do not reconstruct target {} in plan {:?}",
            target,
            plan
        );
    }

    for level in 0..level_plan.depth() {
        let usage: i64 = plan.assignments.iter().map(|a| a.digit(level)).sum();
        assert!(
            usage >= 1 && usage <= level_plan.capacity(level),
            "level {} usage {} outside [1, {}] in plan {:?}",
            level,
            usage,
            level_plan.capacity(level),
            plan
        );
    }
}
