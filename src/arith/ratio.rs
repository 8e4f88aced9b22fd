// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ratio resolution.
//!
//! Given two raw quantities A and B, produce the reduced pair
//! (A/(A+B), B/(A+B)). The two results always sum to one and share a
//! single denominator D, which is the denominator the synthesizer
//! searches against.

use crate::arith::Fraction;
use crate::errors::SynthesisError;
use num_integer::lcm;

/// Resolve two quantities into ratios of their total.
///
/// Each ratio is computed by cross-multiplication against `a + b` and
/// reduced independently. If the two reduced results do not share a
/// denominator they are rescaled to the least common denominator.
/// (Two reduced fractions summing to one always share a denominator, so
/// the first branch is the one taken in practice.)
///
/// Fails with [`SynthesisError::NonPositiveTotal`] unless `a + b > 0`.
pub fn resolve_ratios(a: Fraction, b: Fraction) -> Result<(Fraction, Fraction), SynthesisError> {
    let total = a + b;
    if !total.is_positive() {
        return Err(SynthesisError::NonPositiveTotal {
            numerator: total.numerator(),
            denominator: total.denominator(),
        });
    }

    // Cross-multiplied division a/total and b/total, each reduced on
    // construction.
    let raw_a = Fraction::new(
        a.numerator() * total.denominator(),
        a.denominator() * total.numerator(),
    )?;
    let raw_b = Fraction::new(
        b.numerator() * total.denominator(),
        b.denominator() * total.numerator(),
    )?;

    if raw_a.denominator() == raw_b.denominator() {
        return Ok((raw_a, raw_b));
    }

    // Rescale both to the least common denominator.
    let common = lcm(raw_a.denominator(), raw_b.denominator());
    let scaled_a = Fraction::new(raw_a.numerator() * (common / raw_a.denominator()), common)?;
    let scaled_b = Fraction::new(raw_b.numerator() * (common / raw_b.denominator()), common)?;
    Ok((scaled_a, scaled_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_equal_quantities_halve() {
        let (ra, rb) = resolve_ratios(frac(1, 1), frac(1, 1)).unwrap();
        assert_eq!(ra, frac(1, 2));
        assert_eq!(rb, frac(1, 2));
    }

    #[test]
    fn test_one_to_two() {
        let (ra, rb) = resolve_ratios(frac(1, 1), frac(2, 1)).unwrap();
        assert_eq!(ra, frac(1, 3));
        assert_eq!(rb, frac(2, 3));
    }

    #[test]
    fn test_fractional_inputs() {
        // 1/2 : 1/3 of a total of 5/6 is 3/5 : 2/5.
        let (ra, rb) = resolve_ratios(frac(1, 2), frac(1, 3)).unwrap();
        assert_eq!(ra, frac(3, 5));
        assert_eq!(rb, frac(2, 5));
    }

    #[test]
    fn test_ratios_sum_to_one_with_shared_denominator() {
        for (an, ad, bn, bd) in [(2, 1, 3, 1), (7, 3, 5, 4), (1, 6, 1, 10), (9, 1, 23, 1)] {
            let (ra, rb) = resolve_ratios(frac(an, ad), frac(bn, bd)).unwrap();
            assert_eq!(ra + rb, Fraction::from_integer(1));
            assert_eq!(ra.denominator(), rb.denominator());
        }
    }

    #[test]
    fn test_zero_total_is_error() {
        let err = resolve_ratios(Fraction::from_integer(0), Fraction::from_integer(0));
        assert!(matches!(
            err,
            Err(SynthesisError::NonPositiveTotal { numerator: 0, .. })
        ));
    }

    #[test]
    fn test_unreduced_inputs() {
        let (ra, rb) = resolve_ratios(frac(4, 2), frac(6, 2)).unwrap();
        assert_eq!(ra, frac(2, 5));
        assert_eq!(rb, frac(3, 5));
    }
}
