//! Declarative curve definitions.
//!
//! A recipe is an ordered list of [`Step`]s that builds a [`Curve`] from the
//! identity curve. Recipes are how animation definitions store curves as
//! static configuration: they parse from and print to a compact text form,
//! and with the `serde` feature they (de)serialize as a list of tagged steps.
//!
//! Recipes always go through the validated constructors, so a recipe with
//! degenerate parameters fails to build instead of producing NaN samples.

mod parse;
mod step;

pub use step::Step;

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Curve, CurveError};

/// An ordered list of curve transformations.
///
/// # Examples
///
/// ```
/// use motion_curves::CurveRecipe;
///
/// let recipe: CurveRecipe = "ease | map_range(0, 100)".parse()?;
/// let curve = recipe.build()?;
/// assert!((curve.sample(0.5) - 50.0).abs() < 1e-9);
/// # Ok::<(), motion_curves::CurveError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurveRecipe {
    /// Steps applied in order, starting from the identity curve.
    pub steps: Vec<Step>,
}

impl CurveRecipe {
    /// Creates an empty recipe, which builds the identity curve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step.
    pub fn then(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Returns true if the recipe contains a wiggle step.
    pub fn is_random(&self) -> bool {
        self.steps.iter().any(|s| matches!(s, Step::Wiggle { .. }))
    }

    /// Builds the curve, drawing wiggle control values from the
    /// thread-local RNG.
    pub fn build(&self) -> Result<Curve, CurveError> {
        self.build_with_rng(&mut rand::thread_rng())
    }

    /// Builds the curve with wiggle control values drawn from `rng`.
    pub fn build_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Curve, CurveError> {
        self.steps
            .iter()
            .try_fold(Curve::new(), |curve, step| step.apply(&curve, &mut *rng))
    }

    /// Builds the curve from a seed, so wiggles are reproducible.
    pub fn build_seeded(&self, seed: u64) -> Result<Curve, CurveError> {
        self.build_with_rng(&mut StdRng::seed_from_u64(seed))
    }
}

impl From<Vec<Step>> for CurveRecipe {
    fn from(steps: Vec<Step>) -> Self {
        Self { steps }
    }
}

impl FromStr for CurveRecipe {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse::parse_steps(s) {
            Ok(steps) => Ok(Self { steps }),
            Err(err) => {
                log::debug!("failed to parse curve recipe {s:?}: {err}");
                Err(err)
            }
        }
    }
}

impl fmt::Display for CurveRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_empty_recipe_is_identity() {
        let curve = CurveRecipe::new().build().unwrap();
        assert_eq!(curve.sample(0.3), 0.3);
        assert_eq!(CurveRecipe::new().to_string(), "");
    }

    #[test]
    fn test_builder_matches_chain() {
        let recipe = CurveRecipe::new()
            .then(Step::Ease)
            .then(Step::Loop { period: 2.0 })
            .then(Step::Reverse);
        let built = recipe.build().unwrap();
        let chained = Curve::new().ease().repeat(2.0).reverse();
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            assert_eq!(built.sample(t), chained.sample(t));
        }
    }

    #[test]
    fn test_display_round_trip() {
        let text = "bounce(0.2, 0.3) | ease_out_quad | shrink(0.75, -1) | offset(0.125)";
        let recipe: CurveRecipe = text.parse().unwrap();
        assert_eq!(recipe.to_string(), text);
        let reparsed: CurveRecipe = recipe.to_string().parse().unwrap();
        assert_eq!(reparsed, recipe);
    }

    #[test]
    fn test_build_rejects_degenerate_step() {
        let recipe: CurveRecipe = "ease | shrink(0)".parse().unwrap();
        assert!(matches!(
            recipe.build(),
            Err(CurveError::InvalidParameter { op: "shrink", .. })
        ));
    }

    #[test]
    fn test_seeded_wiggle_recipe_is_reproducible() {
        let recipe: CurveRecipe = "wiggle(6, 0.5, 0.5) | map_range(-10, 10)".parse().unwrap();
        assert!(recipe.is_random());
        let a = recipe.build_seeded(11).unwrap();
        let b = recipe.build_seeded(11).unwrap();
        assert_eq!(a.bake(32), b.bake(32));
        assert!((a.sample(0.0) - 0.0).abs() < EPSILON);
    }

    #[test]
    fn test_wiggle_discards_earlier_steps() {
        let recipe: CurveRecipe = "map_range(5, 6) | wiggle(2, 0.25, 0.75)".parse().unwrap();
        let curve = recipe.build_seeded(1).unwrap();
        assert_eq!(curve.sample(0.0), 0.25);
    }

    #[test]
    fn test_parse_error_propagates() {
        let result: Result<CurveRecipe, _> = "ease | ?".parse();
        assert!(matches!(result, Err(CurveError::Syntax { .. })));
    }
}
