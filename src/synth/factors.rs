// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! 3-smooth factor search.
//!
//! A network level is one rank of identical splitters, so the total
//! number of leaf slots is the product of the per-level branching
//! factors. Only 2-way and 3-way splitters exist, which restricts the
//! reachable slot counts to 3-smooth numbers. This module finds the
//! smallest 3-smooth N at or above the required denominator, together
//! with its ordered factorization.

use crate::errors::SynthesisError;
use std::fmt;

/// Default bound on the incremental candidate scan in [`find_smooth`].
///
/// The gap to the next 3-smooth number is unbounded in principle, so the
/// scan is capped rather than allowed to run away on a denominator with
/// a huge prime factor. A million candidates is far beyond any realistic
/// input and still terminates in milliseconds.
pub const DEFAULT_SEARCH_LIMIT: u64 = 1_000_000;

/// Branching factor of one network level: a 2-way or 3-way splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    Two,
    Three,
}

impl Arity {
    /// The branching factor as an integer.
    pub fn value(self) -> i64 {
        match self {
            Arity::Two => 2,
            Arity::Three => 3,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Ordered branching factors, level 0 (at the input) first.
///
/// Invariant: every entry is 2 or 3, enforced by construction through
/// [`Arity`]. The empty sequence is only produced for the degenerate
/// denominator 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorSequence {
    arities: Vec<Arity>,
}

impl FactorSequence {
    pub fn new(arities: Vec<Arity>) -> Self {
        Self { arities }
    }

    /// Network depth: the number of levels.
    pub fn len(&self) -> usize {
        self.arities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arities.is_empty()
    }

    /// The branching factor at `level`.
    pub fn arity(&self, level: usize) -> Arity {
        self.arities[level]
    }

    pub fn iter(&self) -> impl Iterator<Item = Arity> + '_ {
        self.arities.iter().copied()
    }

    /// Product of all branching factors: the total leaf-slot count N.
    pub fn product(&self) -> i64 {
        self.arities.iter().map(|a| a.value()).product()
    }

    /// The single structural fallback: when the deepest level is ternary,
    /// replace it with two binary levels. Returns `None` when the
    /// sequence is empty or ends in a 2.
    ///
    /// Note this grows the leaf-slot count by a factor of 4/3; the
    /// already-committed targets (including any feedback target) are
    /// retried against the new level shape unchanged.
    pub fn split_trailing_three(&self) -> Option<FactorSequence> {
        match self.arities.last() {
            Some(Arity::Three) => {
                let mut arities = self.arities.clone();
                arities.pop();
                arities.push(Arity::Two);
                arities.push(Arity::Two);
                Some(FactorSequence::new(arities))
            }
            _ => None,
        }
    }
}

impl fmt::Display for FactorSequence {
    /// Renders as e.g. `[3,2,2]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, arity) in self.arities.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", arity)?;
        }
        write!(f, "]")
    }
}

/// Result of a successful 3-smooth search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmoothSearch {
    /// The accepted 3-smooth number N >= target.
    pub capacity: i64,

    /// The factorization of `capacity`, 3s first, then 2s, in extraction
    /// order.
    pub factors: FactorSequence,

    /// How many candidates were examined, including the accepted one.
    pub candidates_tried: u64,
}

/// Find the smallest integer `>= target` that factors purely into 2s and 3s.
///
/// Each candidate is fully divided by 3 and then by 2; a remainder of 1
/// accepts it, anything else moves on to the next integer. The scan is
/// deterministic: a given target always yields the same capacity and the
/// same factor order.
///
/// Fails with [`SynthesisError::SearchLimitExceeded`] after `limit`
/// candidates without a hit.
pub fn find_smooth(target: i64, limit: u64) -> Result<SmoothSearch, SynthesisError> {
    debug_assert!(target >= 1, "denominators are positive by construction");

    let mut candidate = target;
    for step in 1..=limit {
        let mut n = candidate;
        let mut arities = Vec::new();

        while n % 3 == 0 {
            arities.push(Arity::Three);
            n /= 3;
        }
        while n % 2 == 0 {
            arities.push(Arity::Two);
            n /= 2;
        }

        if n == 1 {
            return Ok(SmoothSearch {
                capacity: candidate,
                factors: FactorSequence::new(arities),
                candidates_tried: step,
            });
        }
        candidate += 1;
    }

    Err(SynthesisError::SearchLimitExceeded {
        start: target,
        limit,
    })
}
