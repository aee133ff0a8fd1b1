//! Ratio token parser.
//!
//! Accepts the fraction form `W:H` and the decimal form `R`. Every failure
//! collapses to `NaN`, which callers treat as "no ratio".

use core::str::FromStr;

use num_traits::Float;

use crate::ratio::{RatioError, RatioForm};

/// Parse an aspect ratio token into an `f32`.
///
/// Returns [`f32::NAN`] when the input is absent, empty, malformed, or
/// not strictly positive.
///
/// ```
/// use ratioparse::parse_ratio;
///
/// assert_eq!(parse_ratio(Some("4")), 4.0);
/// assert_eq!(parse_ratio(Some("1.25:0.5")), 2.5);
/// assert!(parse_ratio(Some("-1.78")).is_nan());
/// assert!(parse_ratio(Some(":9")).is_nan());
/// ```
pub fn parse_ratio(input: Option<&str>) -> f32 {
    parse_ratio_as(input)
}

/// [`parse_ratio`] for any float type, e.g. `f64`.
///
/// Both sides of a fraction are parsed and divided in `T`, so
/// `parse_ratio_as::<f64>(Some("16:9"))` is exactly `16.0f64 / 9.0`.
pub fn parse_ratio_as<T: Float + FromStr>(input: Option<&str>) -> T {
    let Some(text) = input else {
        return T::nan();
    };
    match parse_components::<T>(text) {
        Ok((value, _)) => value,
        Err(reason) => {
            log::trace!("aspect ratio {text:?} rejected: {reason}");
            T::nan()
        }
    }
}

/// Split and parse a ratio token.
///
/// Only the first `:` separates numerator from denominator. The quotient is
/// returned as computed; it can be infinite, or zero on underflow.
pub(crate) fn parse_components<T: Float + FromStr>(
    text: &str,
) -> Result<(T, RatioForm), RatioError> {
    match text.split_once(':') {
        Some((numerator, denominator)) => {
            if numerator.is_empty() {
                return Err(RatioError::EmptyNumerator);
            }
            if denominator.is_empty() {
                return Err(RatioError::EmptyDenominator);
            }
            // Both sides must parse before either is checked for sign.
            let n: T = parse_float(numerator)?;
            let d: T = parse_float(denominator)?;
            if n > T::zero() && d > T::zero() {
                Ok((n / d, RatioForm::Fraction))
            } else {
                Err(RatioError::NotPositive)
            }
        }
        None if text.is_empty() => Err(RatioError::Empty),
        None => {
            let value: T = parse_float(text)?;
            if value > T::zero() {
                Ok((value, RatioForm::Decimal))
            } else {
                Err(RatioError::NotPositive)
            }
        }
    }
}

/// Trims characters up to and including `' '` only; other Unicode whitespace
/// such as NBSP stays and fails the parse.
fn parse_float<T: FromStr>(s: &str) -> Result<T, RatioError> {
    s.trim_matches(|c: char| c <= ' ')
        .parse::<T>()
        .map_err(|_| RatioError::InvalidNumber)
}
