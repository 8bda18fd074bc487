//! Shared, chainable curve handle.

use std::fmt;
use std::sync::Arc;

use rand::Rng;

use crate::core::combinators::{Bounce, Ease, MapRange, Multiply, Offset, Repeat, Reverse, Shrink};
use crate::core::{FnCurve, Identity, Sample};
use crate::noise::Wiggle;
use crate::{CurveError, Easing};

/// A motion curve over normalized time.
///
/// `Curve` holds its sampler behind an `Arc`, so cloning is cheap and every
/// transformation borrows `self` and returns a new, independent curve. The
/// original stays valid and can be branched into any number of derived
/// curves. Curves are `Send + Sync` and can be sampled from several threads.
///
/// The chaining methods do not validate their parameters: degenerate values
/// (a zero-length `shrink`, equal `map_range` bounds, ...) show up as NaN or
/// infinite samples. The `try_*` variants check their inputs and return a
/// [`CurveError`] instead.
///
/// # Examples
///
/// ```
/// use motion_curves::Curve;
///
/// let fade = Curve::new().ease().map_range(0.0, 100.0);
/// assert!((fade.sample(0.5) - 50.0).abs() < 1e-9);
///
/// let blink = Curve::new().bounce_with(0.2, 0.2);
/// assert_eq!(blink.sample(0.5), 1.0);
/// ```
#[derive(Clone)]
pub struct Curve {
    inner: Arc<dyn Sample + Send + Sync>,
}

impl Curve {
    /// Creates the identity curve `t ↦ t`.
    pub fn new() -> Self {
        Self::from_sampler(Identity)
    }

    /// Creates a curve that evaluates `func`.
    ///
    /// # Examples
    ///
    /// ```
    /// use motion_curves::Curve;
    ///
    /// let squared = Curve::from_fn(|t| t * t);
    /// assert_eq!(squared.sample(0.5), 0.25);
    /// ```
    pub fn from_fn<F>(func: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::from_sampler(FnCurve::new(func))
    }

    /// Wraps any sampler, such as a statically composed combinator chain.
    pub fn from_sampler<S>(sampler: S) -> Self
    where
        S: Sample + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(sampler),
        }
    }

    /// Creates a curve that returns `value` everywhere.
    pub fn constant(value: f64) -> Self {
        Self::from_sampler(value)
    }

    /// Evaluates the curve at `t`.
    pub fn sample(&self, t: f64) -> f64 {
        self.inner.sample(t)
    }

    /// Samples the curve at `n` evenly spaced times covering `[0, 1]`.
    ///
    /// The first sample is taken at `t = 0` and the last at exactly `t = 1`.
    /// A single sample is taken at `t = 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use motion_curves::Curve;
    ///
    /// let frames = Curve::new().reverse().bake(5);
    /// assert_eq!(frames, vec![1.0, 0.75, 0.5, 0.25, 0.0]);
    /// ```
    pub fn bake(&self, n: usize) -> Vec<f64> {
        let ts: Vec<f64> = match n {
            0 => Vec::new(),
            1 => vec![0.0],
            _ => {
                let last = (n - 1) as f64;
                (0..n).map(|i| i as f64 / last).collect()
            }
        };
        let mut out = vec![0.0; ts.len()];
        self.inner.sample_into(&ts, &mut out);
        out
    }

    /// Rise over the first half, fall over the second (`bounce_with(0.5, 0.5)`).
    pub fn bounce(&self) -> Self {
        self.bounce_with(0.5, 0.5)
    }

    /// Plays the curve over `[0, start)`, holds `1` until `1 - end`, then
    /// plays it backwards over the remaining `end`.
    pub fn bounce_with(&self, start: f64, end: f64) -> Self {
        Self::from_sampler(Bounce::new(self.clone(), start, end))
    }

    /// Validated [`bounce_with`](Self::bounce_with).
    ///
    /// `start` and `end` must be positive and finite with `start + end <= 1`.
    pub fn try_bounce(&self, start: f64, end: f64) -> Result<Self, CurveError> {
        positive("bounce", "start", start)?;
        positive("bounce", "end", end)?;
        if start + end > 1.0 {
            return Err(CurveError::invalid(
                "bounce",
                "end",
                end,
                "start + end must not exceed 1",
            ));
        }
        Ok(self.bounce_with(start, end))
    }

    /// Random wiggle with `freq` interior points, starting and ending at 0.5.
    ///
    /// Wiggle is a source, not a transformation: it does not read any
    /// existing curve.
    pub fn wiggle(freq: usize) -> Self {
        Self::wiggle_between(freq, 0.5, 0.5)
    }

    /// Random wiggle starting at `start` and heading to `end`.
    ///
    /// See [`Wiggle`] for the sampling rules.
    pub fn wiggle_between(freq: usize, start: f64, end: f64) -> Self {
        Self::from_sampler(Wiggle::new(freq, start, end))
    }

    /// Wiggle drawing its control values from `rng`.
    pub fn wiggle_with_rng<R: Rng + ?Sized>(freq: usize, start: f64, end: f64, rng: &mut R) -> Self {
        Self::from_sampler(Wiggle::with_rng(freq, start, end, rng))
    }

    /// Replaces this curve with a random wiggle, for use mid-chain.
    ///
    /// The receiver is not read: `curve.ease().then_wiggle(4)` samples the
    /// same as `Curve::wiggle(4)`, just as a wiggle step in a recipe discards
    /// the steps before it.
    pub fn then_wiggle(&self, freq: usize) -> Self {
        Self::wiggle(freq)
    }

    /// [`then_wiggle`](Self::then_wiggle) with explicit endpoints and `rng`.
    pub fn then_wiggle_with_rng<R: Rng + ?Sized>(
        &self,
        freq: usize,
        start: f64,
        end: f64,
        rng: &mut R,
    ) -> Self {
        Self::wiggle_with_rng(freq, start, end, rng)
    }

    /// Validated [`wiggle_with_rng`](Self::wiggle_with_rng): `freq` must not
    /// exceed [`Wiggle::MAX_FREQ`] and `start` and `end` must be finite.
    pub fn try_wiggle<R: Rng + ?Sized>(
        freq: usize,
        start: f64,
        end: f64,
        rng: &mut R,
    ) -> Result<Self, CurveError> {
        if freq > Wiggle::MAX_FREQ {
            return Err(CurveError::invalid(
                "wiggle",
                "freq",
                freq as f64,
                "too many control points",
            ));
        }
        finite("wiggle", "start", start)?;
        finite("wiggle", "end", end)?;
        Ok(Self::wiggle_with_rng(freq, start, end, rng))
    }

    /// Remaps time through `easing` before sampling this curve.
    pub fn ease_with(&self, easing: Easing) -> Self {
        Self::from_sampler(Ease::new(self.clone(), easing))
    }

    /// Sine ease-in-out.
    pub fn ease(&self) -> Self {
        self.ease_with(Easing::SineInOut)
    }

    /// Exponential ease-out.
    pub fn ease_out_expo(&self) -> Self {
        self.ease_with(Easing::OutExpo)
    }

    /// Quadratic ease-out.
    pub fn ease_out_quad(&self) -> Self {
        self.ease_with(Easing::OutQuad)
    }

    /// Exponential ease-in.
    pub fn ease_in_expo(&self) -> Self {
        self.ease_with(Easing::InExpo)
    }

    /// Plays the curve `period` times over the unit interval.
    pub fn repeat(&self, period: f64) -> Self {
        Self::from_sampler(Repeat::new(self.clone(), period))
    }

    /// Validated [`repeat`](Self::repeat): `period` must be positive and finite.
    pub fn try_repeat(&self, period: f64) -> Result<Self, CurveError> {
        positive("loop", "period", period)?;
        Ok(self.repeat(period))
    }

    /// Shifts the curve's phase so that `t = offset` samples it at `0`.
    pub fn offset(&self, offset: f64) -> Self {
        Self::from_sampler(Offset::new(self.clone(), offset))
    }

    /// Plays the curve over `[0, length)` and holds `0` afterwards.
    pub fn shrink(&self, length: f64) -> Self {
        self.shrink_to(length, 0.0)
    }

    /// Plays the curve over `[0, length)` and holds `to` afterwards.
    pub fn shrink_to(&self, length: f64, to: f64) -> Self {
        Self::from_sampler(Shrink::new(self.clone(), length, to))
    }

    /// Validated [`shrink_to`](Self::shrink_to): `length` must lie in
    /// `(0, 1]` and `to` must be finite.
    pub fn try_shrink(&self, length: f64, to: f64) -> Result<Self, CurveError> {
        positive("shrink", "length", length)?;
        if length > 1.0 {
            return Err(CurveError::invalid(
                "shrink",
                "length",
                length,
                "must be in (0, 1]",
            ));
        }
        finite("shrink", "to", to)?;
        Ok(self.shrink_to(length, to))
    }

    /// Plays the curve backwards.
    pub fn reverse(&self) -> Self {
        Self::from_sampler(Reverse::new(self.clone()))
    }

    /// Rescales output from `[0, 1]` to `[to_min, to_max]`.
    pub fn map_range(&self, to_min: f64, to_max: f64) -> Self {
        self.map_range_from(to_min, to_max, 0.0, 1.0)
    }

    /// Rescales output from `[from_min, from_max]` to `[to_min, to_max]`.
    pub fn map_range_from(&self, to_min: f64, to_max: f64, from_min: f64, from_max: f64) -> Self {
        Self::from_sampler(MapRange::new(
            self.clone(),
            to_min,
            to_max,
            from_min,
            from_max,
        ))
    }

    /// Validated [`map_range_from`](Self::map_range_from): all bounds must be
    /// finite and `from_min != from_max`.
    pub fn try_map_range(
        &self,
        to_min: f64,
        to_max: f64,
        from_min: f64,
        from_max: f64,
    ) -> Result<Self, CurveError> {
        finite("map_range", "to_min", to_min)?;
        finite("map_range", "to_max", to_max)?;
        finite("map_range", "from_min", from_min)?;
        finite("map_range", "from_max", from_max)?;
        if from_min == from_max {
            return Err(CurveError::invalid(
                "map_range",
                "from_max",
                from_max,
                "must differ from from_min",
            ));
        }
        Ok(self.map_range_from(to_min, to_max, from_min, from_max))
    }

    /// Multiplies this curve by `other`, both sampled at the same `t`.
    pub fn multiply(&self, other: &Curve) -> Self {
        Self::from_sampler(Multiply::new(self.clone(), other.clone()))
    }
}

fn finite(op: &'static str, name: &'static str, value: f64) -> Result<f64, CurveError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CurveError::invalid(op, name, value, "must be finite"))
    }
}

fn positive(op: &'static str, name: &'static str, value: f64) -> Result<f64, CurveError> {
    if finite(op, name, value)? > 0.0 {
        Ok(value)
    } else {
        Err(CurveError::invalid(op, name, value, "must be positive"))
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::new()
    }
}

impl Sample for Curve {
    fn sample(&self, t: f64) -> f64 {
        self.inner.sample(t)
    }

    fn sample_into(&self, ts: &[f64], out: &mut [f64]) {
        self.inner.sample_into(ts, out);
    }
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve").finish_non_exhaustive()
    }
}

impl From<f64> for Curve {
    fn from(value: f64) -> Self {
        Curve::constant(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn grid() -> impl Iterator<Item = f64> {
        (0..=40).map(|i| i as f64 / 40.0)
    }

    #[test]
    fn test_default_is_identity() {
        let curve = Curve::default();
        for t in grid() {
            assert_eq!(curve.sample(t), t);
        }
    }

    #[test]
    fn test_derived_curves_leave_original_untouched() {
        let base = Curve::from_fn(|t| t * t);
        let before: Vec<f64> = grid().map(|t| base.sample(t)).collect();

        let _a = base.reverse();
        let _b = base.ease().map_range(-1.0, 1.0);
        let _c = base.shrink_to(0.3, 9.0).repeat(3.0);

        let after: Vec<f64> = grid().map(|t| base.sample(t)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_branches_are_independent() {
        let base = Curve::new().ease();
        let up = base.map_range(0.0, 10.0);
        let down = base.map_range(10.0, 0.0);
        assert!(approx_eq(up.sample(1.0), 10.0));
        assert!(approx_eq(down.sample(1.0), 0.0));
        assert!(approx_eq(base.sample(1.0), 1.0));
    }

    #[test]
    fn test_reverse_is_involution() {
        let base = Curve::from_fn(|t| (t * 3.0).sin());
        let twice = base.reverse().reverse();
        for t in grid() {
            assert!(approx_eq(twice.sample(t), base.sample(t)));
        }
    }

    #[test]
    fn test_ease_fixed_points() {
        let ease = Curve::new().ease();
        assert_eq!(ease.sample(0.0), 0.0);
        assert_eq!(ease.sample(1.0), 1.0);
        assert!(approx_eq(ease.sample(0.5), 0.5));
    }

    #[test]
    fn test_expo_exact_endpoints() {
        assert_eq!(Curve::new().ease_out_expo().sample(1.0), 1.0);
        assert_eq!(Curve::new().ease_in_expo().sample(0.0), 0.0);
    }

    #[test]
    fn test_ease_out_quad() {
        assert_eq!(Curve::new().ease_out_quad().sample(0.5), 0.75);
    }

    #[test]
    fn test_repeat_one_is_identity_on_unit_interval() {
        let base = Curve::from_fn(|t| t * t + 0.1);
        let looped = base.repeat(1.0);
        for t in grid().filter(|&t| t < 1.0) {
            assert_eq!(looped.sample(t), base.sample(t));
        }
    }

    #[test]
    fn test_shrink_defaults_to_zero() {
        let shrunk = Curve::new().shrink(0.5);
        assert_eq!(shrunk.sample(0.25), 0.5);
        assert_eq!(shrunk.sample(0.75), 0.0);
    }

    #[test]
    fn test_multiply_commutes_in_value() {
        let a = Curve::new().ease();
        let b = Curve::from_fn(|t| 2.0 - t);
        let ab = a.multiply(&b);
        let ba = b.multiply(&a);
        for t in grid() {
            assert_eq!(ab.sample(t), ba.sample(t));
        }
    }

    #[test]
    fn test_scenarios() {
        assert!(approx_eq(Curve::new().ease().map_range(0.0, 100.0).sample(0.5), 50.0));
        assert_eq!(Curve::new().bounce_with(0.2, 0.2).sample(0.5), 1.0);
    }

    #[test]
    fn test_default_bounce() {
        let bounce = Curve::new().bounce();
        assert_eq!(bounce.sample(0.25), 0.5);
        assert_eq!(bounce.sample(0.5), 1.0);
        assert_eq!(bounce.sample(0.75), 0.5);
    }

    #[test]
    fn test_offset_wraps_phase() {
        let shifted = Curve::new().offset(0.5);
        assert_eq!(shifted.sample(0.5), 0.0);
        assert_eq!(shifted.sample(0.0), 0.5);
        assert_eq!(shifted.sample(0.75), 0.25);
    }

    #[test]
    fn test_wiggle_endpoints() {
        let mut rng = StdRng::seed_from_u64(3);
        let wiggle = Curve::wiggle_with_rng(4, 0.25, 0.75, &mut rng);
        assert_eq!(wiggle.sample(0.0), 0.25);
        assert_eq!(wiggle.sample(1.0), 0.0);
    }

    #[test]
    fn test_wiggle_default_start() {
        assert_eq!(Curve::wiggle(3).sample(0.0), 0.5);
        assert_eq!(Curve::wiggle_between(3, 0.1, 0.9).sample(0.0), 0.1);
    }

    #[test]
    fn test_degenerate_parameters_propagate() {
        assert!(!Curve::new().shrink(0.0).sample(-0.5).is_finite());
        assert!(!Curve::new().map_range_from(0.0, 1.0, 0.5, 0.5).sample(0.2).is_finite());
        assert!(Curve::new().repeat(f64::INFINITY).sample(0.5).is_nan());
    }

    #[test]
    fn test_try_variants_accept_valid_input() {
        let base = Curve::new();
        assert!(base.try_bounce(0.25, 0.75).is_ok());
        assert!(base.try_repeat(2.0).is_ok());
        assert!(base.try_shrink(1.0, 0.0).is_ok());
        assert!(base.try_map_range(0.0, 1.0, -1.0, 1.0).is_ok());
        assert!(Curve::try_wiggle(2, 0.0, 1.0, &mut StdRng::seed_from_u64(0)).is_ok());
    }

    #[test]
    fn test_try_variants_reject_degenerate_input() {
        let base = Curve::new();
        assert!(matches!(
            base.try_bounce(0.0, 0.5),
            Err(CurveError::InvalidParameter { name: "start", .. })
        ));
        assert!(matches!(
            base.try_bounce(0.6, 0.6),
            Err(CurveError::InvalidParameter { name: "end", .. })
        ));
        assert!(base.try_repeat(0.0).is_err());
        assert!(base.try_repeat(f64::NAN).is_err());
        assert!(base.try_shrink(0.0, 0.0).is_err());
        assert!(base.try_shrink(1.5, 0.0).is_err());
        assert!(base.try_shrink(0.5, f64::INFINITY).is_err());
        assert!(matches!(
            base.try_map_range(0.0, 1.0, 2.0, 2.0),
            Err(CurveError::InvalidParameter { op: "map_range", .. })
        ));
        assert!(Curve::try_wiggle(2, f64::NAN, 1.0, &mut StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn test_try_wiggle_bounds_freq() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(Curve::try_wiggle(Wiggle::MAX_FREQ, 0.5, 0.5, &mut rng).is_ok());
        assert!(matches!(
            Curve::try_wiggle(Wiggle::MAX_FREQ + 1, 0.5, 0.5, &mut rng),
            Err(CurveError::InvalidParameter { op: "wiggle", name: "freq", .. })
        ));
        assert!(matches!(
            Curve::try_wiggle(usize::MAX, 0.5, 0.5, &mut rng),
            Err(CurveError::InvalidParameter { name: "freq", .. })
        ));
    }

    #[test]
    fn test_wiggle_samples_huge_time_as_nan() {
        let wiggle = Curve::wiggle(3);
        assert!(wiggle.sample(1e30).is_nan());
        assert!(wiggle.sample(f64::INFINITY).is_nan());
    }

    #[test]
    fn test_then_wiggle_ignores_receiver() {
        let eased = Curve::new().ease().map_range(5.0, 6.0);
        let wiggle = eased.then_wiggle_with_rng(4, 0.25, 0.75, &mut StdRng::seed_from_u64(3));
        let direct = Curve::wiggle_with_rng(4, 0.25, 0.75, &mut StdRng::seed_from_u64(3));
        assert_eq!(wiggle.bake(20), direct.bake(20));
        assert_eq!(wiggle.sample(0.0), 0.25);
        // The receiver is untouched
        assert_eq!(eased.sample(0.0), 5.0);
    }

    #[test]
    fn test_bake() {
        assert!(Curve::new().bake(0).is_empty());
        assert_eq!(Curve::constant(4.0).bake(1), vec![4.0]);
        let frames = Curve::new().bake(3);
        assert_eq!(frames, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_bake_includes_wiggle_quirk_at_one() {
        let frames = Curve::wiggle_between(2, 0.4, 0.6).bake(11);
        assert_eq!(frames[0], 0.4);
        assert_eq!(frames[10], 0.0);
    }

    #[test]
    fn test_from_sampler_accepts_static_chain() {
        let chain = Reverse::new(Shrink::new(Identity, 0.5, 0.0));
        let curve = Curve::from_sampler(chain);
        assert_eq!(curve.sample(0.75), 0.5);
    }

    #[test]
    fn test_constant_and_from() {
        let curve: Curve = 0.7.into();
        assert_eq!(curve.sample(0.1), 0.7);
        assert_eq!(curve.multiply(&Curve::new()).sample(0.5), 0.35);
    }

    #[test]
    fn test_send_sync_and_threaded_sampling() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Curve>();

        let curve = Curve::wiggle(8).ease().map_range(0.0, 2.0);
        let expected = curve.bake(64);
        std::thread::scope(|scope| {
            for _ in 0..4 {
                let curve = &curve;
                let expected = &expected;
                scope.spawn(move || {
                    assert_eq!(&curve.bake(64), expected);
                });
            }
        });
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Curve::new()), "Curve { .. }");
    }
}
