// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact fraction type.
//!
//! A [`Fraction`] is always held in canonical form: reduced to lowest
//! terms with the sign folded into the numerator and the denominator
//! strictly positive. Because every value is canonical, derived equality
//! is exact value equality.

use crate::errors::SynthesisError;
use num_rational::Ratio;
use std::fmt;
use std::ops::{Add, Mul};

/// An exact rational number in lowest terms.
///
/// This is a newtype over [`num_rational::Ratio`] so that construction
/// from a zero denominator is an error rather than a panic, and so the
/// rest of the crate never handles an unreduced value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fraction(Ratio<i64>);

impl Fraction {
    /// Create a fraction, reducing it and normalizing the sign.
    ///
    /// Returns [`SynthesisError::ZeroDenominator`] when `denominator == 0`.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, SynthesisError> {
        if denominator == 0 {
            return Err(SynthesisError::ZeroDenominator);
        }
        Ok(Self(Ratio::new(numerator, denominator)))
    }

    /// Create a whole-number fraction `value/1`.
    pub fn from_integer(value: i64) -> Self {
        Self(Ratio::from_integer(value))
    }

    /// The reduced numerator. Carries the sign of the value.
    pub fn numerator(self) -> i64 {
        *self.0.numer()
    }

    /// The reduced denominator. Always positive.
    pub fn denominator(self) -> i64 {
        *self.0.denom()
    }

    /// Whether the value is strictly greater than zero.
    pub fn is_positive(self) -> bool {
        self.numerator() > 0
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, other: Fraction) -> Fraction {
        Fraction(self.0 + other.0)
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, other: Fraction) -> Fraction {
        Fraction(self.0 * other.0)
    }
}

impl fmt::Display for Fraction {
    /// Canonical text form: `"n"` when the denominator is 1, else `"n/d"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator() == 1 {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}
