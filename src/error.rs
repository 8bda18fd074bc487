//! Error types for curve construction and recipe parsing.

use thiserror::Error;

/// Errors reported by the validated curve constructors and the recipe parser.
///
/// The plain chaining methods on [`Curve`](crate::Curve) never return these:
/// they accept any parameters and let degenerate ones surface as NaN or
/// infinite samples. The `try_*` constructors and recipes check their
/// inputs up front and report the first problem found.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// A numeric parameter would make the curve produce non-finite samples.
    #[error("invalid parameter `{name}` = {value} for `{op}`: {reason}")]
    InvalidParameter {
        /// Name of the transformation that rejected the value.
        op: &'static str,
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// What the parameter must satisfy.
        reason: &'static str,
    },

    /// A recipe named a step that does not exist.
    #[error("unknown curve step `{0}`")]
    UnknownStep(String),

    /// A recipe step was given the wrong number or kind of arguments.
    #[error("bad arguments for `{step}`: {reason}")]
    BadArguments {
        /// The step as written in the recipe.
        step: String,
        /// Description of the problem.
        reason: String,
    },

    /// The recipe text could not be tokenized.
    #[error("syntax error at byte {position}: {message}")]
    Syntax {
        /// Byte offset into the recipe text.
        position: usize,
        /// Description of the problem.
        message: String,
    },
}

impl CurveError {
    pub(crate) fn invalid(
        op: &'static str,
        name: &'static str,
        value: f64,
        reason: &'static str,
    ) -> Self {
        log::debug!("rejecting {op}: {name} = {value} ({reason})");
        CurveError::InvalidParameter {
            op,
            name,
            value,
            reason,
        }
    }
}
