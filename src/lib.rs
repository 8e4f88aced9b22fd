// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact-ratio splitter network synthesis.
//!
//! Given two quantities A and B, this crate designs a splitter/merger
//! network that divides one input stream into two output streams in the
//! exact ratio A : B, using only binary (2-way) and ternary (3-way)
//! splitters arranged in levels, with at most one feedback branch to
//! absorb rounding slack.
//!
//! # Architecture
//!
//! The synthesis pipeline runs in five phases:
//!
//! 1. **Ratio resolution** ([`arith`]): reduce A and B against their sum
//!    so that `ratio_a + ratio_b = 1` with one shared denominator D.
//! 2. **Factor search** ([`synth::factors`]): find the smallest 3-smooth
//!    integer N >= D and its factorization into 3s and 2s. Each factor
//!    becomes one level of the network.
//! 3. **Digit assignment** ([`synth::assign`]): greedily decompose each
//!    target numerator into per-level output counts, treating the levels
//!    as a mixed-radix positional system. When N > D an extra feedback
//!    target of N - D is decomposed alongside the two outputs.
//! 4. **Fallback** ([`synth`]): if assignment fails and the deepest level
//!    is ternary, substitute two binary levels for it and retry once.
//! 5. **Validation** ([`synth::validate`]): independently re-check that
//!    every level's total usage fits within its capacity.
//!
//! The accepted plan is rendered as a fixed-width three-row ASCII wiring
//! diagram by [`layout`].
//!
//! # Example
//!
//! ```
//! use splitter_synth::{Fraction, Synthesizer};
//!
//! let a = Fraction::new(2, 1).unwrap();
//! let b = Fraction::new(3, 1).unwrap();
//! let plan = Synthesizer::new().synthesize(a, b).unwrap();
//!
//! assert_eq!(plan.denominator, 5);
//! assert_eq!(plan.capacity, 6); // 5 is not 3-smooth, next is 6
//! assert!(plan.needs_feedback());
//! ```

pub mod arith;
pub mod errors;
pub mod layout;
pub mod parse;
pub mod report;
pub mod synth;

// Re-export commonly used types
pub use arith::{resolve_ratios, Fraction};
pub use errors::SynthesisError;
pub use synth::{BalancerPlan, Synthesizer};
