// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Network topology synthesis.
//!
//! [`Synthesizer`] wires the pipeline together: ratio resolution, the
//! 3-smooth factor search, greedy digit assignment with the single
//! trailing-3 fallback, and the final capacity validation. The result is
//! a [`BalancerPlan`] describing the full network, or a
//! [`SynthesisError`] classifying why none exists.
//!
//! Each call is a pure function of its inputs; the only state on the
//! synthesizer is its configured search limit and accumulated
//! [`Statistics`].

pub mod assign;
pub mod factors;
pub mod statistics;
pub mod validate;

pub use assign::{Assignment, LevelPlan};
pub use factors::{Arity, FactorSequence, DEFAULT_SEARCH_LIMIT};
pub use statistics::{Counters, Statistics};

use crate::arith::{resolve_ratios, Fraction};
use crate::errors::SynthesisError;
use crate::layout;

/// A complete synthesized splitter network.
///
/// Assignments appear in target order: output A, output B, then the
/// feedback branch when one exists (`capacity > denominator`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancerPlan {
    /// Share of the input routed to output A; `ratio_a + ratio_b = 1`.
    pub ratio_a: Fraction,

    /// Share of the input routed to output B.
    pub ratio_b: Fraction,

    /// The shared denominator D of the two ratios.
    pub denominator: i64,

    /// The accepted 3-smooth leaf-slot count N >= D.
    pub capacity: i64,

    /// Branching factors, one per level, input side first.
    pub factors: FactorSequence,

    /// Per-target digit sequences, in target order.
    pub assignments: Vec<Assignment>,

    /// Whether the trailing-3 fallback shape was used.
    pub fallback_used: bool,
}

impl BalancerPlan {
    /// Network depth in levels.
    pub fn depth(&self) -> usize {
        self.factors.len()
    }

    /// Whether a feedback branch absorbs slack between N and D.
    pub fn needs_feedback(&self) -> bool {
        self.capacity > self.denominator
    }

    /// Throughput absorbed by the feedback branch, in D-ths of the input.
    pub fn feedback(&self) -> i64 {
        self.capacity - self.denominator
    }

    /// Render the three-row wiring diagram for this plan.
    pub fn diagram(&self) -> String {
        layout::render(&self.assignments)
    }
}

/// Synthesizes splitter networks for exact ratios.
///
/// # Example
///
/// ```
/// use splitter_synth::{Fraction, Synthesizer};
///
/// let mut synthesizer = Synthesizer::new();
/// let plan = synthesizer
///     .synthesize(Fraction::from_integer(1), Fraction::from_integer(2))
///     .unwrap();
///
/// assert_eq!(plan.ratio_a, Fraction::new(1, 3).unwrap());
/// assert_eq!(plan.ratio_b, Fraction::new(2, 3).unwrap());
/// assert!(!plan.needs_feedback());
/// ```
#[derive(Debug)]
pub struct Synthesizer {
    search_limit: u64,
    statistics: Statistics,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Synthesizer {
    pub fn new() -> Self {
        Self {
            search_limit: DEFAULT_SEARCH_LIMIT,
            statistics: Statistics::new(),
        }
    }

    /// Override the factor-search candidate bound.
    pub fn with_search_limit(search_limit: u64) -> Self {
        Self {
            search_limit,
            statistics: Statistics::new(),
        }
    }

    /// Counters accumulated across all requests on this synthesizer.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Synthesize a network dividing one stream in the ratio `a : b`.
    ///
    /// The targets are committed in a fixed order (A, then B, then
    /// feedback); swapping A and B can change feasibility, which is
    /// inherent to the greedy allocation.
    pub fn synthesize(&mut self, a: Fraction, b: Fraction) -> Result<BalancerPlan, SynthesisError> {
        let (ratio_a, ratio_b) = resolve_ratios(a, b)?;
        let denominator = ratio_a.denominator();

        let search = factors::find_smooth(denominator, self.search_limit)?;
        self.statistics
            .add(Counters::FactorCandidates, search.candidates_tried);
        let capacity = search.capacity;

        let mut targets = vec![ratio_a.numerator(), ratio_b.numerator()];
        if capacity > denominator {
            targets.push(capacity - denominator);
        }

        let (factors, assignments, fallback_used) =
            match assign::assign_digits(&targets, &search.factors) {
                Some(assignments) => (search.factors, assignments, false),
                None => {
                    let retried = search.factors.split_trailing_three().and_then(|adjusted| {
                        self.statistics.add(Counters::FallbackRetries, 1);
                        assign::assign_digits(&targets, &adjusted)
                            .map(|assignments| (adjusted, assignments))
                    });
                    match retried {
                        Some((adjusted, assignments)) => (adjusted, assignments, true),
                        None => {
                            self.statistics.add(Counters::InfeasibleRequests, 1);
                            return Err(SynthesisError::NoFeasibleTopology {
                                denominator,
                                capacity,
                            });
                        }
                    }
                }
            };

        validate::validate_usage(&factors, &assignments)?;
        self.statistics.add(Counters::PlansSynthesized, 1);

        Ok(BalancerPlan {
            ratio_a,
            ratio_b,
            denominator,
            capacity,
            factors,
            assignments,
            fallback_used,
        })
    }
}

/// One-shot convenience wrapper around [`Synthesizer::synthesize`].
pub fn synthesize(a: Fraction, b: Fraction) -> Result<BalancerPlan, SynthesisError> {
    Synthesizer::new().synthesize(a, b)
}
