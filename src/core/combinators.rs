//! Curve combinators for composing and transforming curves.
//!
//! Each combinator owns its source curve and evaluates a transformed
//! version of it. They nest freely, so a chain of transformations is just a
//! nested value built once and sampled many times. [`Curve`](crate::Curve)
//! wraps these behind shared ownership for the chaining API; use them
//! directly when the whole chain is known at compile time.
//!
//! None of the combinators validate their parameters. Degenerate inputs such
//! as a zero-length shrink produce NaN or infinite samples.

use crate::Easing;
use crate::core::{FnCurve, Identity, Sample};

/// Splits the unit interval into a rise, a plateau and a fall.
///
/// For `t < start` the source is played forward over `[0, start)`. Between
/// `start` and `1 - end` the output is the constant `1`. From `1 - end` on
/// the source is played backward, reaching `source(0)` at `t = 1`.
///
/// # Examples
///
/// ```
/// use motion_curves::{Bounce, Identity, Sample};
///
/// let bounce = Bounce::new(Identity, 0.2, 0.2);
/// assert_eq!(bounce.sample(0.1), 0.5);
/// assert_eq!(bounce.sample(0.5), 1.0);
/// assert_eq!(bounce.sample(1.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounce<S: Sample> {
    source: S,
    start: f64,
    end: f64,
}

impl<S: Sample> Bounce<S> {
    /// Creates a new Bounce combinator.
    pub fn new(source: S, start: f64, end: f64) -> Self {
        Self { source, start, end }
    }
}

impl<S: Sample> Sample for Bounce<S> {
    fn sample(&self, t: f64) -> f64 {
        if t < self.start {
            self.source.sample(t / self.start)
        } else if t < 1.0 - self.end {
            // Plateau is a literal 1, not source(1)
            1.0
        } else {
            self.source.sample((1.0 - t) / self.end)
        }
    }
}

/// Remaps time through an [`Easing`] before sampling the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ease<S: Sample> {
    source: S,
    easing: Easing,
}

impl<S: Sample> Ease<S> {
    /// Creates a new Ease combinator.
    pub fn new(source: S, easing: Easing) -> Self {
        Self { source, easing }
    }

    /// The easing applied to `t`.
    pub fn easing(&self) -> Easing {
        self.easing
    }
}

impl<S: Sample> Sample for Ease<S> {
    fn sample(&self, t: f64) -> f64 {
        self.source.sample(self.easing.apply(t))
    }
}

/// Plays the source `period` times over the unit interval.
///
/// Time is wrapped with the floating-point remainder, so negative `t`
/// produces negative phases rather than wrapping to `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repeat<S: Sample> {
    source: S,
    period: f64,
}

impl<S: Sample> Repeat<S> {
    /// Creates a new Repeat combinator.
    pub fn new(source: S, period: f64) -> Self {
        Self { source, period }
    }
}

impl<S: Sample> Sample for Repeat<S> {
    fn sample(&self, t: f64) -> f64 {
        self.source.sample((t * self.period) % 1.0)
    }
}

/// Shifts the phase of the source, wrapping around the unit interval.
///
/// At `t = offset` the source is sampled at `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset<S: Sample> {
    source: S,
    offset: f64,
}

impl<S: Sample> Offset<S> {
    /// Creates a new Offset combinator.
    pub fn new(source: S, offset: f64) -> Self {
        Self { source, offset }
    }
}

impl<S: Sample> Sample for Offset<S> {
    fn sample(&self, t: f64) -> f64 {
        self.source.sample((t + 1.0 - self.offset) % 1.0)
    }
}

/// Compresses the source into `[0, length)` and holds `to` afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shrink<S: Sample> {
    source: S,
    length: f64,
    to: f64,
}

impl<S: Sample> Shrink<S> {
    /// Creates a new Shrink combinator.
    pub fn new(source: S, length: f64, to: f64) -> Self {
        Self { source, length, to }
    }
}

impl<S: Sample> Sample for Shrink<S> {
    fn sample(&self, t: f64) -> f64 {
        if t < self.length {
            self.source.sample(t / self.length)
        } else {
            self.to
        }
    }
}

/// Plays the source backwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reverse<S: Sample> {
    source: S,
}

impl<S: Sample> Reverse<S> {
    /// Creates a new Reverse combinator.
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: Sample> Sample for Reverse<S> {
    fn sample(&self, t: f64) -> f64 {
        self.source.sample(1.0 - t)
    }
}

/// Linearly rescales the source's output from one range to another.
///
/// # Examples
///
/// ```
/// use motion_curves::{Identity, MapRange, Sample};
///
/// // [0, 1] -> [10, 20]
/// let mapped = MapRange::new(Identity, 10.0, 20.0, 0.0, 1.0);
/// assert_eq!(mapped.sample(0.5), 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRange<S: Sample> {
    source: S,
    to_min: f64,
    to_max: f64,
    from_min: f64,
    from_max: f64,
}

impl<S: Sample> MapRange<S> {
    /// Creates a new MapRange combinator.
    pub fn new(source: S, to_min: f64, to_max: f64, from_min: f64, from_max: f64) -> Self {
        Self {
            source,
            to_min,
            to_max,
            from_min,
            from_max,
        }
    }
}

impl<S: Sample> Sample for MapRange<S> {
    fn sample(&self, t: f64) -> f64 {
        let normalized = (self.source.sample(t) - self.from_min) / (self.from_max - self.from_min);
        normalized * (self.to_max - self.to_min) + self.to_min
    }
}

/// Multiplies two curves sampled at the same time.
///
/// # Examples
///
/// ```
/// use motion_curves::{Identity, Multiply, Sample};
///
/// let squared = Multiply::new(Identity, Identity);
/// assert_eq!(squared.sample(0.5), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multiply<A: Sample, B: Sample> {
    a: A,
    b: B,
}

impl<A: Sample, B: Sample> Multiply<A, B> {
    /// Creates a new Multiply combinator.
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A: Sample, B: Sample> Sample for Multiply<A, B> {
    fn sample(&self, t: f64) -> f64 {
        self.a.sample(t) * self.b.sample(t)
    }
}

/// Extension trait for chaining combinators on statically known curves.
///
/// Each method consumes the curve and wraps it in the matching combinator,
/// so a chain builds a nested value with no allocation or dynamic dispatch.
/// The method names and defaults mirror [`Curve`](crate::Curve).
///
/// The trait is implemented for the crate's own samplers but not for
/// [`Curve`](crate::Curve), whose `&self` methods already chain and return
/// another `Curve`. Implement it for your own [`Sample`] types with an empty
/// `impl SampleExt for MyCurve {}`.
///
/// # Examples
///
/// ```
/// use motion_curves::{Identity, Sample, SampleExt};
///
/// let fade = Identity.ease().map_range(0.0, 100.0);
/// assert!((fade.sample(0.5) - 50.0).abs() < 1e-9);
/// ```
pub trait SampleExt: Sample + Sized {
    /// Rise over `[0, 0.5)`, fall over `[0.5, 1]`.
    fn bounce(self) -> Bounce<Self> {
        self.bounce_with(0.5, 0.5)
    }

    /// Rise over `[0, start)`, plateau at `1`, fall over the last `end`.
    fn bounce_with(self, start: f64, end: f64) -> Bounce<Self> {
        Bounce::new(self, start, end)
    }

    /// Sine ease-in-out.
    fn ease(self) -> Ease<Self> {
        self.ease_with(Easing::SineInOut)
    }

    /// Remaps time through `easing`.
    fn ease_with(self, easing: Easing) -> Ease<Self> {
        Ease::new(self, easing)
    }

    /// Plays the curve `period` times over the unit interval.
    fn repeat(self, period: f64) -> Repeat<Self> {
        Repeat::new(self, period)
    }

    /// Shifts the phase by `offset`, wrapping around.
    fn offset(self, offset: f64) -> Offset<Self> {
        Offset::new(self, offset)
    }

    /// Compresses the curve into `[0, length)` and holds `0` afterwards.
    fn shrink(self, length: f64) -> Shrink<Self> {
        self.shrink_to(length, 0.0)
    }

    /// Compresses the curve into `[0, length)` and holds `to` afterwards.
    fn shrink_to(self, length: f64, to: f64) -> Shrink<Self> {
        Shrink::new(self, length, to)
    }

    /// Plays the curve backwards.
    fn reverse(self) -> Reverse<Self> {
        Reverse::new(self)
    }

    /// Rescales output from `[0, 1]` to `[to_min, to_max]`.
    fn map_range(self, to_min: f64, to_max: f64) -> MapRange<Self> {
        self.map_range_from(to_min, to_max, 0.0, 1.0)
    }

    /// Rescales output from `[from_min, from_max]` to `[to_min, to_max]`.
    fn map_range_from(
        self,
        to_min: f64,
        to_max: f64,
        from_min: f64,
        from_max: f64,
    ) -> MapRange<Self> {
        MapRange::new(self, to_min, to_max, from_min, from_max)
    }

    /// Multiplies this curve with `other`.
    fn multiply<S: Sample>(self, other: S) -> Multiply<Self, S> {
        Multiply::new(self, other)
    }
}

impl SampleExt for f64 {}
impl SampleExt for Identity {}
impl<F> SampleExt for FnCurve<F> where F: Fn(f64) -> f64 {}
impl<S: Sample> SampleExt for Bounce<S> {}
impl<S: Sample> SampleExt for Ease<S> {}
impl<S: Sample> SampleExt for Repeat<S> {}
impl<S: Sample> SampleExt for Offset<S> {}
impl<S: Sample> SampleExt for Shrink<S> {}
impl<S: Sample> SampleExt for Reverse<S> {}
impl<S: Sample> SampleExt for MapRange<S> {}
impl<A: Sample, B: Sample> SampleExt for Multiply<A, B> {}
