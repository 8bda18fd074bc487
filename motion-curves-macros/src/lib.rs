use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{LitStr, parse_macro_input};

/// Builds a `Curve` at compile time from a pipeline string.
///
/// The pipeline is parsed while compiling and expanded into the equivalent
/// chain of `Curve` method calls, so a typo is a compile error instead of a
/// runtime one. Parameters are checked the same way the validated
/// constructors check them.
///
/// # Format
///
/// Steps are separated by `|`. Each step is a name, optionally followed by
/// numeric arguments in parentheses; trailing arguments may be omitted:
/// - `bounce(start = 0.5, end = 0.5)`
/// - `ease`, `ease_out_expo`, `ease_out_quad`, `ease_in_expo`, `smoothstep`
/// - `loop(period)`
/// - `offset(offset)`
/// - `shrink(length, to = 0)`
/// - `reverse`
/// - `map_range(to_min, to_max, from_min = 0, from_max = 1)`
///
/// `wiggle` is not accepted: its control points are random and belong to the
/// runtime API.
///
/// # Examples
///
/// ```ignore
/// use motion_curves::curve;
///
/// let fade = curve!("ease | map_range(0, 100)");
/// let blink = curve!("bounce(0.2, 0.2)");
/// ```
#[proc_macro]
pub fn curve(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let pipeline = input.value();

    match parse_pipeline(&pipeline) {
        Ok(ops) => {
            let calls = ops.iter().map(Op::to_tokens);
            let expanded = quote! {
                {
                    ::motion_curves::Curve::new() #( #calls )*
                }
            };
            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid curve pipeline '{}': {}", pipeline, e);
            let expanded = quote! {
                compile_error!(#error_msg)
            };
            TokenStream::from(expanded)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Op {
    Bounce(f64, f64),
    Ease,
    EaseOutExpo,
    EaseOutQuad,
    EaseInExpo,
    Smoothstep,
    Loop(f64),
    Offset(f64),
    Shrink(f64, f64),
    Reverse,
    MapRange(f64, f64, f64, f64),
}

impl Op {
    fn to_tokens(&self) -> TokenStream2 {
        match *self {
            Op::Bounce(start, end) => {
                let (start, end) = (number(start), number(end));
                quote!(.bounce_with(#start, #end))
            }
            Op::Ease => quote!(.ease()),
            Op::EaseOutExpo => quote!(.ease_out_expo()),
            Op::EaseOutQuad => quote!(.ease_out_quad()),
            Op::EaseInExpo => quote!(.ease_in_expo()),
            Op::Smoothstep => quote!(.ease_with(::motion_curves::Easing::Smoothstep)),
            Op::Loop(period) => {
                let period = number(period);
                quote!(.repeat(#period))
            }
            Op::Offset(offset) => {
                let offset = number(offset);
                quote!(.offset(#offset))
            }
            Op::Shrink(length, to) => {
                let (length, to) = (number(length), number(to));
                quote!(.shrink_to(#length, #to))
            }
            Op::Reverse => quote!(.reverse()),
            Op::MapRange(to_min, to_max, from_min, from_max) => {
                let (to_min, to_max) = (number(to_min), number(to_max));
                let (from_min, from_max) = (number(from_min), number(from_max));
                quote!(.map_range_from(#to_min, #to_max, #from_min, #from_max))
            }
        }
    }
}

// Negative literals are emitted as a unary minus on the magnitude
fn number(value: f64) -> TokenStream2 {
    let magnitude = value.abs();
    if value.is_sign_negative() {
        quote!(-#magnitude)
    } else {
        quote!(#magnitude)
    }
}

fn parse_pipeline(s: &str) -> Result<Vec<Op>, String> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split('|').map(|step| parse_op(step.trim())).collect()
}

fn parse_op(step: &str) -> Result<Op, String> {
    if step.is_empty() {
        return Err("empty step".to_string());
    }

    let (name, args) = match step.find('(') {
        Some(pos) => {
            let inner = step[pos + 1..]
                .strip_suffix(')')
                .ok_or_else(|| format!("missing ')' in '{}'", step))?;
            (step[..pos].trim_end(), parse_args(inner)?)
        }
        None => (step, Vec::new()),
    };

    let op = match name {
        "bounce" => {
            arity(name, &args, 0, 2)?;
            let (start, end) = (arg(&args, 0, 0.5), arg(&args, 1, 0.5));
            positive(name, "start", start)?;
            positive(name, "end", end)?;
            if start + end > 1.0 {
                return Err("bounce start + end must not exceed 1".to_string());
            }
            Op::Bounce(start, end)
        }
        "ease" => no_args(name, &args, Op::Ease)?,
        "ease_out_expo" | "easeOutExpo" => no_args(name, &args, Op::EaseOutExpo)?,
        "ease_out_quad" | "easeOutQuad" => no_args(name, &args, Op::EaseOutQuad)?,
        "ease_in_expo" | "easeInExpo" => no_args(name, &args, Op::EaseInExpo)?,
        "smoothstep" => no_args(name, &args, Op::Smoothstep)?,
        "loop" | "repeat" => {
            arity(name, &args, 1, 1)?;
            positive(name, "period", args[0])?;
            Op::Loop(args[0])
        }
        "offset" => {
            arity(name, &args, 1, 1)?;
            Op::Offset(args[0])
        }
        "shrink" => {
            arity(name, &args, 1, 2)?;
            positive(name, "length", args[0])?;
            if args[0] > 1.0 {
                return Err(format!("shrink length {} is greater than 1", args[0]));
            }
            Op::Shrink(args[0], arg(&args, 1, 0.0))
        }
        "reverse" => no_args(name, &args, Op::Reverse)?,
        "map_range" | "mapRange" => {
            arity(name, &args, 2, 4)?;
            let (from_min, from_max) = (arg(&args, 2, 0.0), arg(&args, 3, 1.0));
            if from_min == from_max {
                return Err(format!("map_range source bounds are both {}", from_min));
            }
            Op::MapRange(args[0], args[1], from_min, from_max)
        }
        "wiggle" => {
            return Err("wiggle is random; build it at runtime with Curve::wiggle".to_string());
        }
        _ => return Err(format!("unknown step '{}'", name)),
    };
    Ok(op)
}

fn parse_args(inner: &str) -> Result<Vec<f64>, String> {
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }
    inner
        .split(',')
        .map(|piece| {
            let piece = piece.trim();
            match piece.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(format!("invalid number '{}'", piece)),
            }
        })
        .collect()
}

fn arity(name: &str, args: &[f64], min: usize, max: usize) -> Result<(), String> {
    if (min..=max).contains(&args.len()) {
        Ok(())
    } else {
        Err(format!(
            "'{}' takes {} to {} arguments, got {}",
            name,
            min,
            max,
            args.len()
        ))
    }
}

fn no_args(name: &str, args: &[f64], op: Op) -> Result<Op, String> {
    arity(name, args, 0, 0)?;
    Ok(op)
}

fn arg(args: &[f64], index: usize, default: f64) -> f64 {
    args.get(index).copied().unwrap_or(default)
}

fn positive(name: &str, param: &str, value: f64) -> Result<(), String> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(format!("{} {} must be positive, got {}", name, param, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pipeline() {
        let ops = parse_pipeline("ease | map_range(0, 100)").unwrap();
        assert_eq!(ops, vec![Op::Ease, Op::MapRange(0.0, 100.0, 0.0, 1.0)]);

        assert!(parse_pipeline("").unwrap().is_empty());
    }

    #[test]
    fn test_defaults_and_aliases() {
        assert_eq!(parse_op("bounce").unwrap(), Op::Bounce(0.5, 0.5));
        assert_eq!(parse_op("shrink(0.5)").unwrap(), Op::Shrink(0.5, 0.0));
        assert_eq!(parse_op("easeOutExpo").unwrap(), Op::EaseOutExpo);
        assert_eq!(parse_op("repeat(2)").unwrap(), Op::Loop(2.0));
    }

    #[test]
    fn test_rejects_bad_pipelines() {
        assert!(parse_pipeline("ease ||").is_err());
        assert!(parse_op("wobble").is_err());
        assert!(parse_op("wiggle(3)").is_err());
        assert!(parse_op("loop(0)").is_err());
        assert!(parse_op("shrink(1.5)").is_err());
        assert!(parse_op("bounce(0.8, 0.8)").is_err());
        assert!(parse_op("map_range(0, 1, 2, 2)").is_err());
        assert!(parse_op("offset(inf)").is_err());
        assert!(parse_op("loop(2").is_err());
        assert!(parse_op("ease(1)").is_err());
    }

    #[test]
    fn test_negative_numbers_expand_with_minus() {
        assert!(number(-1.5).to_string().starts_with('-'));
        assert!(!number(2.0).to_string().contains('-'));
    }
}
