// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Post-assignment validation.
//!
//! Re-derives each level's capacity from the final factor sequence and
//! checks the summed usage across all assignments independently of the
//! greedy pass. The greedy pass is supposed to make violations
//! impossible; a failure here is a defect signal, never a user-input
//! problem, and is reported as its own error variant.

use crate::errors::SynthesisError;
use crate::synth::assign::{Assignment, LevelPlan};
use crate::synth::factors::FactorSequence;

/// Check that every level's total usage lies in `[1, capacity]`.
///
/// Usage below one would mean a splitter level with nothing wired to it;
/// usage above capacity would starve the feed to the next level.
pub fn validate_usage(
    factors: &FactorSequence,
    assignments: &[Assignment],
) -> Result<(), SynthesisError> {
    let plan = LevelPlan::from_factors(factors);

    for level in 0..plan.depth() {
        let usage: i64 = assignments.iter().map(|a| a.digit(level)).sum();
        let capacity = plan.capacity(level);
        if usage < 1 || usage > capacity {
            return Err(SynthesisError::InvariantViolation {
                level,
                usage,
                capacity,
            });
        }
    }
    Ok(())
}
