//! Core curve types and traits.
//!
//! This module provides the fundamental abstractions used throughout the
//! library, including:
//! - `Sample` trait for every curve and transformation
//! - `Identity` and `FnCurve` base curves
//! - Curve combinators for composing curves, chained through `SampleExt`
//! - `Curve`, the shared, chainable curve handle

pub mod combinators;
mod curve;
mod sample;

pub use combinators::{
    Bounce, Ease, MapRange, Multiply, Offset, Repeat, Reverse, SampleExt, Shrink,
};
pub use curve::Curve;
pub use sample::{FnCurve, Identity, Sample};
