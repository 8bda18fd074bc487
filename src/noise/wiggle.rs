//! Smoothstep value-noise curve.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::CurveError;
use crate::core::{Sample, SampleExt};

/// A wiggle curve.
///
/// A wiggle is value noise over the unit interval: `freq + 2` control values
/// (`start`, `freq` random values in `[0, 1)`, `end`) are spread evenly over
/// `[0, 1]` and neighbouring values are blended with a smoothstep. The random
/// values are drawn once, at construction, so sampling is deterministic for
/// the life of the curve.
///
/// Sampling at exactly `t = 1` returns `0`, not `end`. Sampling outside
/// `[0, 1]` returns NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct Wiggle {
    /// Control values, including the fixed start and end
    points: Arc<[f64]>,
}

impl Wiggle {
    /// Largest `freq` accepted by the validated constructors.
    pub const MAX_FREQ: usize = 1 << 16;

    /// Creates a new wiggle drawing from the thread-local RNG.
    ///
    /// # Arguments
    ///
    /// * `freq` - Number of random control values between `start` and `end`
    /// * `start` - Value at `t = 0`
    /// * `end` - Value approached as `t` nears `1`
    ///
    /// # Examples
    ///
    /// ```
    /// use motion_curves::{Sample, Wiggle};
    ///
    /// let wiggle = Wiggle::new(4, 0.5, 0.5);
    /// assert_eq!(wiggle.sample(0.0), 0.5);
    /// assert_eq!(wiggle.sample(1.0), 0.0);
    /// ```
    pub fn new(freq: usize, start: f64, end: f64) -> Self {
        Self::with_rng(freq, start, end, &mut rand::thread_rng())
    }

    /// Creates a new wiggle drawing its control values from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use motion_curves::{Sample, Wiggle};
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let wiggle = Wiggle::with_rng(3, 0.0, 1.0, &mut rng);
    /// assert_eq!(wiggle.control_points().len(), 5);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `freq + 2` control values cannot be allocated. Use
    /// [`Curve::try_wiggle`](crate::Curve::try_wiggle) to reject a `freq`
    /// above [`MAX_FREQ`](Self::MAX_FREQ) instead.
    pub fn with_rng<R: Rng + ?Sized>(freq: usize, start: f64, end: f64, rng: &mut R) -> Self {
        let mut points = Vec::with_capacity(freq.saturating_add(2));
        points.push(start);
        points.extend((0..freq).map(|_| rng.gen_range(0.0..1.0)));
        points.push(end);

        log::trace!("wiggle control points: {points:?}");

        Self {
            points: points.into(),
        }
    }

    /// Creates a new wiggle from a seed, for reproducible playback.
    ///
    /// Two wiggles built with the same arguments and seed sample identically.
    pub fn seeded(freq: usize, start: f64, end: f64, seed: u64) -> Self {
        Self::with_rng(freq, start, end, &mut StdRng::seed_from_u64(seed))
    }

    /// Creates a wiggle from explicit control values.
    ///
    /// The first and last values play the role of `start` and `end`.
    /// Returns an error if fewer than two values are given or any value is
    /// not finite.
    pub fn from_control_points(points: Vec<f64>) -> Result<Self, CurveError> {
        if points.len() < 2 {
            return Err(CurveError::invalid(
                "wiggle",
                "points",
                points.len() as f64,
                "at least two control points are required",
            ));
        }
        if let Some(&bad) = points.iter().find(|p| !p.is_finite()) {
            return Err(CurveError::invalid(
                "wiggle",
                "points",
                bad,
                "control points must be finite",
            ));
        }

        Ok(Self {
            points: points.into(),
        })
    }

    /// The control values, in order, including start and end.
    pub fn control_points(&self) -> &[f64] {
        &self.points
    }

    /// Number of random control values between start and end.
    pub fn freq(&self) -> usize {
        self.points.len() - 2
    }
}

impl Sample for Wiggle {
    fn sample(&self, t: f64) -> f64 {
        if t == 1.0 {
            return 0.0;
        }

        let segments = (self.points.len() - 1) as f64;
        let x = t * segments;
        let xi = x.floor();
        let xf = x - xi;
        // Also rejects NaN and infinities before the cast
        if !(xi >= 0.0 && xi < segments) {
            return f64::NAN;
        }

        let i = xi as usize;
        match (self.points.get(i), self.points.get(i + 1)) {
            (Some(&g0), Some(&g1)) => g0 + xf * xf * (3.0 - 2.0 * xf) * (g1 - g0),
            _ => f64::NAN,
        }
    }
}

impl SampleExt for Wiggle {}
