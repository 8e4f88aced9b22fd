// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for ratio resolution and network synthesis.

use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// Errors that can occur while resolving ratios or synthesizing a network.
///
/// The first two variants are input problems, `NoFeasibleTopology` and
/// `SearchLimitExceeded` are expected recoverable outcomes, and
/// `InvariantViolation` signals an internal defect: the greedy assignment
/// reported success but the validation pass found a level used outside
/// its capacity bounds.
#[derive(Debug, Clone, PartialEq, Eq, EnumCountMacro)]
pub enum SynthesisError {
    /// A rational number was constructed with a zero denominator.
    ZeroDenominator,

    /// The two input quantities sum to a non-positive total, so no ratio
    /// of the total can be formed.
    NonPositiveTotal { numerator: i64, denominator: i64 },

    /// Greedy digit assignment failed for the searched factor sequence,
    /// even after the single trailing-3 fallback substitution.
    NoFeasibleTopology { denominator: i64, capacity: i64 },

    /// Validation found a level whose total usage is outside [1, capacity]
    /// despite assignment reporting success. This indicates a logic defect,
    /// not bad input.
    InvariantViolation {
        level: usize,
        usage: i64,
        capacity: i64,
    },

    /// The 3-smooth factor search gave up after examining `limit`
    /// candidates starting at `start` (denominator with a large prime
    /// factor far from the next 3-smooth number).
    SearchLimitExceeded { start: i64, limit: u64 },
}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthesisError::ZeroDenominator => {
                write!(f, "Denominator cannot be zero")
            }
            SynthesisError::NonPositiveTotal {
                numerator,
                denominator,
            } => {
                write!(
                    f,
                    "Quantities sum to {}/{}; a positive total is required",
                    numerator, denominator
                )
            }
            SynthesisError::NoFeasibleTopology {
                denominator,
                capacity,
            } => {
                write!(
                    f,
                    "No feasible splitter layout for denominator {} (capacity {}); \
                     the balancer can't be created using the generic blueprint",
                    denominator, capacity
                )
            }
            SynthesisError::InvariantViolation {
                level,
                usage,
                capacity,
            } => {
                write!(
                    f,
                    "Level {} uses {} outputs but capacity is {} (internal defect)",
                    level, usage, capacity
                )
            }
            SynthesisError::SearchLimitExceeded { start, limit } => {
                write!(
                    f,
                    "No 3-smooth number found within {} candidates of {}; \
                     try a smaller or more 3-smooth denominator",
                    limit, start
                )
            }
        }
    }
}

impl std::error::Error for SynthesisError {}
