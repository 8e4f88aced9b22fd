// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters accumulated across synthesis requests, stored on the
//! [`Synthesizer`](crate::synth::Synthesizer) and incremented as the
//! pipeline runs.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Candidates examined by the 3-smooth factor search.
    FactorCandidates,
    /// Times the trailing-3 fallback substitution was attempted.
    FallbackRetries,
    /// Requests that produced a validated plan.
    PlansSynthesized,
    /// Requests rejected as having no feasible topology.
    InfeasibleRequests,
}

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by `amount`.
    pub(crate) fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
