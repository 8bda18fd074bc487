//! A single transformation step of a recipe.

use std::fmt;

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Curve, CurveError, Easing};

#[cfg(feature = "serde")]
fn half() -> f64 {
    0.5
}

#[cfg(feature = "serde")]
fn one() -> f64 {
    1.0
}

/// One transformation in a [`CurveRecipe`](crate::CurveRecipe).
///
/// Each variant mirrors a method on [`Curve`]; omitted parameters take the
/// same defaults as the short-form methods. With the `serde` feature, steps
/// serialize as objects tagged by `op`, e.g.
/// `{"op": "map_range", "to_min": 0.0, "to_max": 100.0}`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "snake_case"))]
pub enum Step {
    /// [`Curve::bounce_with`].
    Bounce {
        #[cfg_attr(feature = "serde", serde(default = "half"))]
        start: f64,
        #[cfg_attr(feature = "serde", serde(default = "half"))]
        end: f64,
    },
    /// [`Curve::wiggle_between`]. Replaces the curve built so far.
    Wiggle {
        freq: usize,
        #[cfg_attr(feature = "serde", serde(default = "half"))]
        start: f64,
        #[cfg_attr(feature = "serde", serde(default = "half"))]
        end: f64,
    },
    /// [`Curve::ease`].
    Ease,
    /// [`Curve::ease_out_expo`].
    EaseOutExpo,
    /// [`Curve::ease_out_quad`].
    EaseOutQuad,
    /// [`Curve::ease_in_expo`].
    EaseInExpo,
    /// [`Curve::ease_with`] using [`Easing::Smoothstep`].
    Smoothstep,
    /// [`Curve::repeat`].
    Loop { period: f64 },
    /// [`Curve::offset`].
    Offset { offset: f64 },
    /// [`Curve::shrink_to`].
    Shrink {
        length: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        to: f64,
    },
    /// [`Curve::reverse`].
    Reverse,
    /// [`Curve::map_range_from`].
    MapRange {
        to_min: f64,
        to_max: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        from_min: f64,
        #[cfg_attr(feature = "serde", serde(default = "one"))]
        from_max: f64,
    },
}

impl Step {
    /// The step's name in the text form.
    pub fn name(&self) -> &'static str {
        match self {
            Step::Bounce { .. } => "bounce",
            Step::Wiggle { .. } => "wiggle",
            Step::Ease => Easing::SineInOut.name(),
            Step::EaseOutExpo => Easing::OutExpo.name(),
            Step::EaseOutQuad => Easing::OutQuad.name(),
            Step::EaseInExpo => Easing::InExpo.name(),
            Step::Smoothstep => Easing::Smoothstep.name(),
            Step::Loop { .. } => "loop",
            Step::Offset { .. } => "offset",
            Step::Shrink { .. } => "shrink",
            Step::Reverse => "reverse",
            Step::MapRange { .. } => "map_range",
        }
    }

    /// Applies this step to `curve` through the validated constructors.
    ///
    /// `rng` is only drawn from by wiggle steps.
    pub fn apply<R: Rng + ?Sized>(&self, curve: &Curve, rng: &mut R) -> Result<Curve, CurveError> {
        match *self {
            Step::Bounce { start, end } => curve.try_bounce(start, end),
            Step::Wiggle { freq, start, end } => Curve::try_wiggle(freq, start, end, rng),
            Step::Ease => Ok(curve.ease()),
            Step::EaseOutExpo => Ok(curve.ease_out_expo()),
            Step::EaseOutQuad => Ok(curve.ease_out_quad()),
            Step::EaseInExpo => Ok(curve.ease_in_expo()),
            Step::Smoothstep => Ok(curve.ease_with(Easing::Smoothstep)),
            Step::Loop { period } => curve.try_repeat(period),
            Step::Offset { offset } => {
                if offset.is_finite() {
                    Ok(curve.offset(offset))
                } else {
                    Err(CurveError::invalid("offset", "offset", offset, "must be finite"))
                }
            }
            Step::Shrink { length, to } => curve.try_shrink(length, to),
            Step::Reverse => Ok(curve.reverse()),
            Step::MapRange {
                to_min,
                to_max,
                from_min,
                from_max,
            } => curve.try_map_range(to_min, to_max, from_min, from_max),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        match *self {
            Step::Bounce { start, end } => write!(f, "{name}({start}, {end})"),
            Step::Wiggle { freq, start, end } => write!(f, "{name}({freq}, {start}, {end})"),
            Step::Loop { period } => write!(f, "{name}({period})"),
            Step::Offset { offset } => write!(f, "{name}({offset})"),
            Step::Shrink { length, to } => write!(f, "{name}({length}, {to})"),
            Step::MapRange {
                to_min,
                to_max,
                from_min,
                from_max,
            } => write!(f, "{name}({to_min}, {to_max}, {from_min}, {from_max})"),
            Step::Ease
            | Step::EaseOutExpo
            | Step::EaseOutQuad
            | Step::EaseInExpo
            | Step::Smoothstep
            | Step::Reverse => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_display() {
        assert_eq!(Step::Ease.to_string(), "ease");
        assert_eq!(Step::Loop { period: 2.0 }.to_string(), "loop(2)");
        assert_eq!(
            Step::MapRange {
                to_min: 0.0,
                to_max: 100.0,
                from_min: 0.0,
                from_max: 1.0
            }
            .to_string(),
            "map_range(0, 100, 0, 1)"
        );
        assert_eq!(
            Step::Wiggle {
                freq: 3,
                start: 0.5,
                end: 0.25
            }
            .to_string(),
            "wiggle(3, 0.5, 0.25)"
        );
    }

    #[test]
    fn test_apply_matches_chain_method() {
        let mut rng = StdRng::seed_from_u64(0);
        let base = Curve::new();
        let stepped = Step::Shrink {
            length: 0.5,
            to: 2.0,
        }
        .apply(&base, &mut rng)
        .unwrap();
        let chained = base.shrink_to(0.5, 2.0);
        for t in [0.0, 0.2, 0.49, 0.5, 0.9] {
            assert_eq!(stepped.sample(t), chained.sample(t));
        }
    }

    #[test]
    fn test_apply_validates() {
        let mut rng = StdRng::seed_from_u64(0);
        let base = Curve::new();
        assert!(Step::Loop { period: 0.0 }.apply(&base, &mut rng).is_err());
        assert!(
            Step::Offset {
                offset: f64::NAN
            }
            .apply(&base, &mut rng)
            .is_err()
        );
    }

    #[test]
    fn test_wiggle_replaces_curve() {
        let mut rng = StdRng::seed_from_u64(9);
        let base = Curve::constant(42.0);
        let wiggle = Step::Wiggle {
            freq: 2,
            start: 0.1,
            end: 0.9,
        }
        .apply(&base, &mut rng)
        .unwrap();
        assert_eq!(wiggle.sample(0.0), 0.1);
    }

    #[test]
    fn test_apply_rejects_oversized_wiggle() {
        let mut rng = StdRng::seed_from_u64(0);
        let step = Step::Wiggle {
            freq: usize::MAX,
            start: 0.5,
            end: 0.5,
        };
        assert!(matches!(
            step.apply(&Curve::new(), &mut rng),
            Err(CurveError::InvalidParameter { name: "freq", .. })
        ));
    }
}
