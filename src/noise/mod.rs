//! Noise-based curves.
//!
//! This module contains curves whose shape is drawn from a random source at
//! construction time.

mod wiggle;

pub use wiggle::Wiggle;
