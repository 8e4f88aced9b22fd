// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Greedy digit assignment.
//!
//! The factor sequence defines a mixed-radix positional system: one unit
//! routed out at level i is worth the product of all deeper branching
//! factors (its [weight](LevelPlan::weight)). Decomposing a target
//! numerator into per-level "digits" is therefore a change of base,
//! constrained by how many outputs each level can spare.
//!
//! # Capacities
//!
//! Every internal level reserves exactly one output to feed the next
//! level, so only `factor - 1` of its outputs may be routed to targets.
//! The deepest level feeds nothing and offers all `factor` outputs:
//!
//! - level i < n-1: capacity = factor\[i\] - 1
//! - level n-1:     capacity = factor\[n-1\]
//!
//! # Allocation order
//!
//! Targets are processed strictly in the order supplied (output A, then
//! output B, then the feedback target), and each target consumes levels
//! from the shallowest (largest weight) down. Earlier targets get first
//! claim on every level's remaining capacity, so feasibility is order
//! dependent. That ordering is part of the observable behavior and must
//! not be changed.

use crate::synth::factors::FactorSequence;

/// Per-level weights and capacities derived from a factor sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelPlan {
    weights: Vec<i64>,
    capacities: Vec<i64>,
}

impl LevelPlan {
    /// Derive weights and capacities from the factor sequence.
    ///
    /// `weight[n-1] = 1` and `weight[i] = weight[i+1] * factor[i+1]`,
    /// so `weight[i]` counts the leaf slots one unit at level i stands for.
    pub fn from_factors(factors: &FactorSequence) -> Self {
        let n = factors.len();

        let mut weights = vec![1i64; n];
        for i in (0..n.saturating_sub(1)).rev() {
            weights[i] = weights[i + 1] * factors.arity(i + 1).value();
        }

        let capacities = (0..n)
            .map(|i| {
                if i == n - 1 {
                    factors.arity(i).value()
                } else {
                    factors.arity(i).value() - 1
                }
            })
            .collect();

        Self {
            weights,
            capacities,
        }
    }

    pub fn depth(&self) -> usize {
        self.weights.len()
    }

    /// Leaf slots represented by one unit routed out at `level`.
    pub fn weight(&self, level: usize) -> i64 {
        self.weights[level]
    }

    /// Maximum outputs at `level` that may be routed to targets in total.
    pub fn capacity(&self, level: usize) -> i64 {
        self.capacities[level]
    }
}

/// One target's per-level output counts.
///
/// Invariant (checked by the validation pass, not here): summed across
/// all targets, each level's digits lie in `[1, capacity]`; per target,
/// `sum(digit[i] * weight[i])` reconstructs the target numerator exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    digits: Vec<i64>,
}

impl Assignment {
    pub fn digits(&self) -> &[i64] {
        &self.digits
    }

    pub fn digit(&self, level: usize) -> i64 {
        self.digits[level]
    }

    pub fn depth(&self) -> usize {
        self.digits.len()
    }

    /// Reconstruct the value this assignment represents.
    pub fn value(&self, plan: &LevelPlan) -> i64 {
        self.digits
            .iter()
            .enumerate()
            .map(|(i, d)| d * plan.weight(i))
            .sum()
    }
}

/// Greedily decompose each target into per-level digits.
///
/// For each target in order, takes at every level the most units the
/// level can still spare without overshooting the remaining value. A
/// target left with a non-zero remainder after the deepest level makes
/// the whole attempt infeasible (`None`) — capacity already granted to
/// earlier targets is not revisited.
pub fn assign_digits(targets: &[i64], factors: &FactorSequence) -> Option<Vec<Assignment>> {
    let plan = LevelPlan::from_factors(factors);
    let depth = plan.depth();

    let mut available: Vec<i64> = (0..depth).map(|i| plan.capacity(i)).collect();
    let mut assignments = Vec::with_capacity(targets.len());

    for &target in targets {
        let mut remaining = target;
        let mut digits = vec![0i64; depth];

        for level in 0..depth {
            let weight = plan.weight(level);
            let take = available[level].min(remaining / weight);
            digits[level] = take;
            available[level] -= take;
            remaining -= take * weight;
        }

        if remaining != 0 {
            return None;
        }
        assignments.push(Assignment { digits });
    }

    Some(assignments)
}
