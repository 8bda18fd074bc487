//! Motion Curves - composable animation timing curves for Rust
//!
//! This library builds normalized, time-parameterized curves (easing,
//! looping, bouncing, noise-based wiggle, range remapping, multiplication)
//! that an animation player samples once per property per frame.

pub mod core;
pub mod easing;
pub mod error;
pub mod noise;
pub mod recipe;

// Re-export commonly used types at the crate root
pub use self::core::{
    Bounce, Curve, Ease, FnCurve, Identity, MapRange, Multiply, Offset, Repeat, Reverse, Sample,
    SampleExt, Shrink,
};
pub use easing::Easing;
pub use error::CurveError;
pub use noise::Wiggle;
pub use recipe::{CurveRecipe, Step};

#[cfg(feature = "macros")]
pub use motion_curves_macros::curve;
