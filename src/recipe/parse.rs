//! Text form of recipes: `step ( "|" step )*`.
//!
//! A step is a name, optionally followed by a parenthesised, comma-separated
//! list of numbers, e.g. `ease | loop(2) | map_range(0, 100)`. Trailing
//! arguments may be left out to take their defaults.

use super::Step;
use crate::{CurveError, Wiggle};

pub(crate) fn parse_steps(text: &str) -> Result<Vec<Step>, CurveError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut steps = Vec::new();
    let mut offset = 0;
    for segment in text.split('|') {
        let leading = segment.len() - segment.trim_start().len();
        steps.push(parse_step(segment.trim(), offset + leading)?);
        offset += segment.len() + 1;
    }
    Ok(steps)
}

fn parse_step(raw: &str, position: usize) -> Result<Step, CurveError> {
    if raw.is_empty() {
        return Err(syntax(position, "empty step"));
    }

    let (name, args) = match raw.find('(') {
        Some(open) => {
            let Some(inner) = raw[open + 1..].strip_suffix(')') else {
                return Err(syntax(position + raw.len(), "expected `)` at end of step"));
            };
            let args = parse_args(raw, inner, position + open + 1)?;
            (raw[..open].trim_end(), args)
        }
        None => (raw, Vec::new()),
    };

    if !is_identifier(name) {
        return Err(syntax(position, "expected a step name"));
    }

    build_step(name, &args, raw)
}

fn parse_args(raw: &str, inner: &str, position: usize) -> Result<Vec<f64>, CurveError> {
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut args = Vec::new();
    let mut offset = 0;
    for piece in inner.split(',') {
        let value = piece.trim();
        match value.parse::<f64>() {
            Ok(number) => args.push(number),
            Err(_) if value.is_empty() => {
                return Err(syntax(position + offset, "empty argument"));
            }
            Err(_) => {
                return Err(CurveError::BadArguments {
                    step: raw.to_string(),
                    reason: format!("`{value}` is not a number"),
                });
            }
        }
        offset += piece.len() + 1;
    }
    Ok(args)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn build_step(name: &str, args: &[f64], raw: &str) -> Result<Step, CurveError> {
    let step = match name {
        "bounce" => {
            arity(raw, args, 0, 2)?;
            Step::Bounce {
                start: arg(args, 0, 0.5),
                end: arg(args, 1, 0.5),
            }
        }
        "wiggle" => {
            arity(raw, args, 1, 3)?;
            Step::Wiggle {
                freq: count(raw, args[0])?,
                start: arg(args, 1, 0.5),
                end: arg(args, 2, 0.5),
            }
        }
        "ease" => {
            arity(raw, args, 0, 0)?;
            Step::Ease
        }
        "ease_out_expo" | "easeOutExpo" => {
            arity(raw, args, 0, 0)?;
            Step::EaseOutExpo
        }
        "ease_out_quad" | "easeOutQuad" => {
            arity(raw, args, 0, 0)?;
            Step::EaseOutQuad
        }
        "ease_in_expo" | "easeInExpo" => {
            arity(raw, args, 0, 0)?;
            Step::EaseInExpo
        }
        "smoothstep" => {
            arity(raw, args, 0, 0)?;
            Step::Smoothstep
        }
        "loop" | "repeat" => {
            arity(raw, args, 1, 1)?;
            Step::Loop { period: args[0] }
        }
        "offset" => {
            arity(raw, args, 1, 1)?;
            Step::Offset { offset: args[0] }
        }
        "shrink" => {
            arity(raw, args, 1, 2)?;
            Step::Shrink {
                length: args[0],
                to: arg(args, 1, 0.0),
            }
        }
        "reverse" => {
            arity(raw, args, 0, 0)?;
            Step::Reverse
        }
        "map_range" | "mapRange" => {
            arity(raw, args, 2, 4)?;
            Step::MapRange {
                to_min: args[0],
                to_max: args[1],
                from_min: arg(args, 2, 0.0),
                from_max: arg(args, 3, 1.0),
            }
        }
        _ => return Err(CurveError::UnknownStep(name.to_string())),
    };
    Ok(step)
}

fn arity(raw: &str, args: &[f64], min: usize, max: usize) -> Result<(), CurveError> {
    if (min..=max).contains(&args.len()) {
        return Ok(());
    }
    let expected = match (min, max) {
        (0, 0) => "no arguments".to_string(),
        (min, max) if min == max => format!("{min} argument(s)"),
        (min, max) => format!("{min} to {max} arguments"),
    };
    Err(CurveError::BadArguments {
        step: raw.to_string(),
        reason: format!("expected {expected}, got {}", args.len()),
    })
}

fn arg(args: &[f64], index: usize, default: f64) -> f64 {
    args.get(index).copied().unwrap_or(default)
}

fn count(raw: &str, value: f64) -> Result<usize, CurveError> {
    if !(value >= 0.0 && value.fract() == 0.0) {
        return Err(CurveError::BadArguments {
            step: raw.to_string(),
            reason: format!("`{value}` is not a non-negative integer"),
        });
    }
    if value > Wiggle::MAX_FREQ as f64 {
        return Err(CurveError::BadArguments {
            step: raw.to_string(),
            reason: format!("`{value}` exceeds the limit of {}", Wiggle::MAX_FREQ),
        });
    }
    Ok(value as usize)
}

fn syntax(position: usize, message: &str) -> CurveError {
    CurveError::Syntax {
        position,
        message: message.to_string(),
    }
}
