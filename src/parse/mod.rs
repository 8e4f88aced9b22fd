// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Free-form quantity parsing.
//!
//! Accepts the four input shapes the balancer understands, digits only:
//!
//! - whole number: `"7"`
//! - proper fraction: `"3/4"`
//! - mixed number: `"1 3/4"` or `"1+3/4"`
//! - decimal: `"2.5"`
//!
//! Anything else is an [`UnrecognizedFormat`](ParseError::UnrecognizedFormat)
//! error. This is a collaborator of the synthesis core, not part of it:
//! the core only ever sees the resulting [`Fraction`].

use crate::arith::Fraction;
use crate::errors::SynthesisError;
use std::fmt;

/// Errors from parsing a quantity string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input matches none of the accepted shapes.
    UnrecognizedFormat { input: String },

    /// The input parsed but produced an invalid fraction, e.g. `"1/0"`.
    InvalidFraction(SynthesisError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnrecognizedFormat { input } => {
                write!(f, "Unrecognized quantity format: {:?}", input)
            }
            ParseError::InvalidFraction(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<SynthesisError> for ParseError {
    fn from(err: SynthesisError) -> Self {
        ParseError::InvalidFraction(err)
    }
}

/// Parse an unsigned decimal integer, rejecting empty and non-digit input.
fn parse_digits(text: &str, input: &str) -> Result<i64, ParseError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::UnrecognizedFormat {
            input: input.to_string(),
        });
    }
    text.parse().map_err(|_| ParseError::UnrecognizedFormat {
        input: input.to_string(),
    })
}

/// Parse a quantity in any of the accepted shapes.
pub fn parse_quantity(input: &str) -> Result<Fraction, ParseError> {
    let text = input.trim();

    if let Some((lead, denominator)) = text.split_once('/') {
        let denominator = parse_digits(denominator, input)?;
        // The part before the slash is either a bare numerator or a
        // whole number and a numerator joined by a space or plus sign.
        return if let Some((whole, numerator)) = lead.split_once([' ', '+']) {
            let whole = parse_digits(whole, input)?;
            let numerator = parse_digits(numerator, input)?;
            Ok(Fraction::new(whole * denominator + numerator, denominator)?)
        } else {
            Ok(Fraction::new(parse_digits(lead, input)?, denominator)?)
        };
    }

    if let Some((whole, places)) = text.split_once('.') {
        // 10^18 is the largest power of ten that fits in i64.
        if places.len() > 18 {
            return Err(ParseError::UnrecognizedFormat {
                input: input.to_string(),
            });
        }
        let whole = parse_digits(whole, input)?;
        let scale = 10i64.pow(places.len() as u32);
        let places = parse_digits(places, input)?;
        return Ok(Fraction::new(whole * scale + places, scale)?);
    }

    Ok(Fraction::from_integer(parse_digits(text, input)?))
}
