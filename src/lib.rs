//! Aspect ratio parsing for ratio-constrained image views.
//!
//! Pure parsing — no layout, no allocations, `no_std` compatible.
//!
//! A ratio is written either as a fraction `W:H` (width over height) or as a
//! single decimal `R` equal to `W / H`. Anything else disables the ratio.
//!
//! # Modules
//!
//! - [`parse`] — Sentinel API: [`parse_ratio`] returns `NaN` for anything invalid
//! - [`ratio`] — Typed API: [`AspectRatio`] with a [`RatioError`] explaining rejections
//!
//! # Example
//!
//! ```
//! use ratioparse::{AspectRatio, RatioError, parse_ratio};
//!
//! assert_eq!(parse_ratio(Some("16:9")), 16.0 / 9.0);
//! assert_eq!(parse_ratio(Some("1.78")), 1.78);
//! assert!(parse_ratio(Some("16:")).is_nan());
//! assert!(parse_ratio(None).is_nan());
//!
//! let ratio: AspectRatio = "1.25:0.5".parse().expect("valid ratio");
//! assert_eq!(ratio.value(), 2.5);
//! assert_eq!("-4".parse::<AspectRatio>(), Err(RatioError::NotPositive));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod parse;
pub mod ratio;

pub use parse::{parse_ratio, parse_ratio_as};
pub use ratio::{AspectRatio, RatioError, RatioForm};
