//! Core sampling trait.
//!
//! This module provides the fundamental `Sample` trait that represents
//! anything that maps a normalized time parameter to a value.

use std::fmt;
use std::sync::Arc;

/// Common interface for all curves and curve transformations.
///
/// A sampler is a pure function of `t`: sampling the same value twice gives
/// the same result, and sampling never changes the sampler. `t` is normally
/// the normalized progress of an animation in `[0, 1]`.
///
/// The trait provides two operations:
/// - Single evaluation via `sample()`
/// - Batch evaluation via `sample_into()`
pub trait Sample {
    /// Evaluates the curve at `t`.
    fn sample(&self, t: f64) -> f64;

    /// Evaluates the curve at every time in `ts`, writing into `out`.
    ///
    /// Only the first `min(ts.len(), out.len())` entries are written.
    /// Implementors may override this for more efficient batch evaluation.
    ///
    /// # Examples
    ///
    /// ```
    /// use motion_curves::Sample;
    ///
    /// let constant = 0.5_f64;
    /// let mut out = [0.0; 3];
    /// constant.sample_into(&[0.0, 0.5, 1.0], &mut out);
    /// assert_eq!(out, [0.5, 0.5, 0.5]);
    /// ```
    fn sample_into(&self, ts: &[f64], out: &mut [f64]) {
        for (value, &t) in out.iter_mut().zip(ts) {
            *value = self.sample(t);
        }
    }
}

/// A constant curve: every `t` maps to the same value.
impl Sample for f64 {
    fn sample(&self, _t: f64) -> f64 {
        *self
    }

    fn sample_into(&self, ts: &[f64], out: &mut [f64]) {
        let n = ts.len().min(out.len());
        out[..n].fill(*self);
    }
}

impl<S: Sample + ?Sized> Sample for Arc<S> {
    fn sample(&self, t: f64) -> f64 {
        (**self).sample(t)
    }
}

impl<S: Sample + ?Sized> Sample for Box<S> {
    fn sample(&self, t: f64) -> f64 {
        (**self).sample(t)
    }
}

/// The identity curve `t ↦ t`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Identity;

impl Sample for Identity {
    fn sample(&self, t: f64) -> f64 {
        t
    }
}

/// Adapts a plain function or closure into a curve.
///
/// # Examples
///
/// ```
/// use motion_curves::{FnCurve, Sample};
///
/// let squared = FnCurve::new(|t: f64| t * t);
/// assert_eq!(squared.sample(0.5), 0.25);
/// ```
#[derive(Clone, Copy)]
pub struct FnCurve<F>
where
    F: Fn(f64) -> f64,
{
    func: F,
}

impl<F> FnCurve<F>
where
    F: Fn(f64) -> f64,
{
    /// Wraps `func` as a curve.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> Sample for FnCurve<F>
where
    F: Fn(f64) -> f64,
{
    fn sample(&self, t: f64) -> f64 {
        (self.func)(t)
    }
}

impl<F> fmt::Debug for FnCurve<F>
where
    F: Fn(f64) -> f64,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCurve").finish_non_exhaustive()
    }
}
