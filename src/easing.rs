//! Easing functions for shaping normalized progress.
//!
//! Easings remap linear progress in `[0, 1]` to perceptually smoother
//! progress. The formulas follow the usual easings.net definitions.

use std::f64::consts::PI;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Easing function applied by [`Curve::ease_with`](crate::Curve::ease_with).
///
/// All easings map `0` to `0` and `1` to `1`. Inputs outside `[0, 1]` are not
/// clamped; each formula is simply evaluated there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    /// No remapping.
    #[default]
    Linear,

    /// Sine ease-in-out: `-(cos(πt) - 1) / 2`.
    SineInOut,

    /// Exponential ease-out: `1 - 2^(-10t)`, exactly `1` at `t = 1`.
    OutExpo,

    /// Quadratic ease-out: `1 - (1 - t)²`.
    OutQuad,

    /// Exponential ease-in: `2^(10t - 10)`, exactly `0` at `t = 0`.
    InExpo,

    /// Cubic smoothstep: `t²(3 - 2t)`.
    Smoothstep,
}

impl Easing {
    /// Every easing, in declaration order.
    pub const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::SineInOut,
        Easing::OutExpo,
        Easing::OutQuad,
        Easing::InExpo,
        Easing::Smoothstep,
    ];

    /// Apply the easing to a normalized value.
    ///
    /// # Examples
    ///
    /// ```
    /// use motion_curves::Easing;
    ///
    /// assert_eq!(Easing::OutQuad.apply(0.5), 0.75);
    /// assert_eq!(Easing::OutExpo.apply(1.0), 1.0);
    /// assert_eq!(Easing::InExpo.apply(0.0), 0.0);
    /// ```
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::OutExpo => {
                // 1 - 2^-10 is not 1.0
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Easing::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::InExpo => {
                if t == 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * t - 10.0)
                }
            }
            Easing::Smoothstep => t * t * (3.0 - 2.0 * t),
        }
    }

    /// Short snake_case name, matching the recipe step that applies it.
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::SineInOut => "ease",
            Easing::OutExpo => "ease_out_expo",
            Easing::OutQuad => "ease_out_quad",
            Easing::InExpo => "ease_in_expo",
            Easing::Smoothstep => "smoothstep",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
