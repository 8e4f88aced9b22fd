// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact rational arithmetic.
//!
//! [`Fraction`] is the leaf type every other module depends on: an exact
//! numerator/denominator pair, always stored reduced with a positive
//! denominator. [`resolve_ratios`] turns two raw quantities A and B into
//! the pair of reduced fractions A/(A+B) and B/(A+B) sharing one
//! denominator, which is what the synthesizer consumes.

pub mod fraction;
pub mod ratio;

pub use fraction::Fraction;
pub use ratio::resolve_ratios;
