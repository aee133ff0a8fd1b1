//! Typed aspect ratio and parse errors.

use core::fmt;
use core::str::FromStr;

use crate::parse::parse_components;

/// Width-to-height proportion of a rectangle, always strictly positive.
///
/// Never NaN. May be infinite when the source text overflows `f32`.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct AspectRatio(f32);

impl AspectRatio {
    /// 1:1.
    pub const SQUARE: Self = Self(1.0);

    /// Wrap a ratio value. `None` unless `value > 0`.
    pub fn new(value: f32) -> Option<Self> {
        if value > 0.0 { Some(Self(value)) } else { None }
    }

    /// Ratio of `width` to `height`. `None` unless both are positive and
    /// the quotient does not underflow to zero.
    pub fn from_fraction(width: f32, height: f32) -> Option<Self> {
        if width > 0.0 && height > 0.0 {
            Self::new(width / height)
        } else {
            None
        }
    }

    /// Parse `W:H` or `R`.
    ///
    /// Accepts exactly what [`parse_ratio`](crate::parse_ratio) accepts,
    /// except a fraction whose quotient underflows to zero, which is
    /// rejected as [`RatioError::NotPositive`].
    pub fn parse(text: &str) -> Result<Self, RatioError> {
        Self::parse_with_form(text).map(|(ratio, _)| ratio)
    }

    /// Parse an optional token, reporting absence as [`RatioError::Missing`].
    pub fn parse_optional(text: Option<&str>) -> Result<Self, RatioError> {
        text.ok_or(RatioError::Missing).and_then(Self::parse)
    }

    /// Like [`parse`](Self::parse), also reporting which form was written.
    pub fn parse_with_form(text: &str) -> Result<(Self, RatioForm), RatioError> {
        let (value, form) = parse_components::<f32>(text)?;
        let ratio = Self::new(value).ok_or(RatioError::NotPositive)?;
        Ok((ratio, form))
    }

    /// The ratio as width / height.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::SQUARE
    }
}

impl From<AspectRatio> for f32 {
    fn from(ratio: AspectRatio) -> Self {
        ratio.0
    }
}

impl FromStr for AspectRatio {
    type Err = RatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Surface form of a ratio token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RatioForm {
    /// `W:H`.
    Fraction,
    /// A single number equal to `W / H`.
    Decimal,
}

/// Why a ratio token was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RatioError {
    /// No token was provided.
    Missing,
    /// Token is the empty string.
    Empty,
    /// Nothing before the colon, e.g. `":9"`.
    EmptyNumerator,
    /// Nothing after the colon, e.g. `"16:"`.
    EmptyDenominator,
    /// A number could not be parsed as a float.
    InvalidNumber,
    /// A number (or the resulting quotient) is zero, negative, or NaN.
    NotPositive,
}

impl fmt::Display for RatioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Missing => "no aspect ratio given",
            Self::Empty => "aspect ratio is empty",
            Self::EmptyNumerator => "missing width before ':'",
            Self::EmptyDenominator => "missing height after ':'",
            Self::InvalidNumber => "not a number",
            Self::NotPositive => "aspect ratio must be greater than zero",
        })
    }
}

impl core::error::Error for RatioError {}
