use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::f64_to_i64_checked,
};

/// Gets the length of a text, list, or dictionary.
pub fn length(args: &[Value], line: usize) -> EvalResult<Value> {
    let len = match &args[0] {
        Value::Str(s) => s.chars().count(),
        Value::List(elements) => elements.borrow().len(),
        Value::Dict(dict) => dict.borrow().len(),
        other => {
            return Err(RuntimeError::TypeMismatch { details: format!("a {} has no length",
                                                                     other.type_name()),
                                                    line });
        },
    };
    i64::try_from(len).map(Value::Integer)
                      .map_err(|_| RuntimeError::LiteralTooLarge { line })
}

/// Converts any value to its printed text form.
#[allow(clippy::unnecessary_wraps)]
pub fn to_text(args: &[Value], _line: usize) -> EvalResult<Value> {
    Ok(Value::Str(args[0].to_string()))
}

/// Converts text to a number. Numbers pass through unchanged.
pub fn to_number(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Integer(_) | Value::Real(_) => Ok(args[0].clone()),
        Value::Str(text) => {
            let trimmed = text.trim();
            if let Ok(n) = trimmed.parse::<i64>() {
                return Ok(Value::Integer(n));
            }
            if let Ok(r) = trimmed.parse::<f64>() {
                return Ok(Value::Real(r));
            }
            Err(RuntimeError::InvalidArgument { details: format!(
                    "cannot convert '{text}' to a number"
                ),
                                                line })
        },
        other => Err(RuntimeError::InvalidArgument { details: format!(
                         "cannot convert a {} to a number",
                         other.type_name()
                     ),
                                                     line }),
    }
}

/// Converts a value to a list: characters of a text, keys of a
/// dictionary, a copy of a list, or a one-element list for anything else.
#[allow(clippy::unnecessary_wraps)]
pub fn to_list(args: &[Value], _line: usize) -> EvalResult<Value> {
    let elements = match &args[0] {
        Value::Str(text) => text.chars().map(|c| Value::Str(c.to_string())).collect(),
        Value::List(elements) => elements.borrow().clone(),
        Value::Dict(dict) => dict.borrow().keys().cloned().map(Value::Str).collect(),
        other => vec![other.clone()],
    };
    Ok(Value::from(elements))
}

/// Builds a list of consecutive integers: `range(n)` counts from 0 up to
/// but excluding `n`, `range(a, b)` from `a` up to but excluding `b`.
pub fn range(args: &[Value], line: usize) -> EvalResult<Value> {
    let (start, end) = if args.len() == 1 {
        (0, args[0].as_integer(line)?)
    } else {
        (args[0].as_integer(line)?, args[1].as_integer(line)?)
    };
    let values: Vec<Value> = (start..end).map(Value::Integer).collect();
    Ok(Value::from(values))
}

/// Rounds a number. With one argument the result is an integer; with a
/// digit count the result stays real, rounded to that many decimals.
pub fn round(args: &[Value], line: usize) -> EvalResult<Value> {
    if args.len() == 2 {
        let digits = i32::try_from(args[1].as_integer(line)?)
            .map_err(|_| RuntimeError::LiteralTooLarge { line })?;
        let factor = 10f64.powi(digits);
        let value = args[0].as_real(line)?;
        return Ok(Value::Real((value * factor).round() / factor));
    }
    match &args[0] {
        Value::Integer(n) => Ok(Value::Integer(*n)),
        other => f64_to_i64_checked(other.as_real(line)?.round(), line).map(Value::Integer),
    }
}

/// Applies `floor` or `ceiling` to a number, producing an integer.
pub fn unary_round(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    let op = match name {
        "floor" => f64::floor,
        "ceiling" => f64::ceil,
        _ => unreachable!(),
    };
    match &args[0] {
        Value::Integer(n) => Ok(Value::Integer(*n)),
        other => f64_to_i64_checked(op(other.as_real(line)?), line).map(Value::Integer),
    }
}

/// Gets the absolute value of a number.
pub fn abs(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Integer(n) => n.checked_abs()
                              .map(Value::Integer)
                              .ok_or(RuntimeError::Overflow { line }),
        other => Ok(Value::Real(other.as_real(line)?.abs())),
    }
}

/// Gets the square root of a non-negative number.
pub fn sqrt(args: &[Value], line: usize) -> EvalResult<Value> {
    let value = args[0].as_real(line)?;
    if value < 0.0 {
        return Err(RuntimeError::InvalidArgument { details:
                                                       "square root of a negative number"
                                                           .to_string(),
                                                   line });
    }
    Ok(Value::Real(value.sqrt()))
}

/// Raises a base to an exponent.
pub fn power(args: &[Value], line: usize) -> EvalResult<Value> {
    let base = args[0].as_real(line)?;
    let exponent = args[1].as_real(line)?;
    Ok(Value::Real(base.powf(exponent)))
}

/// Gets a random real number in `[0, 1)`.
#[allow(clippy::unnecessary_wraps)]
pub fn random(_args: &[Value], _line: usize) -> EvalResult<Value> {
    Ok(Value::Real(rand::random::<f64>()))
}

/// Gets a random integer between `min` and `max`, both inclusive.
pub fn random_int(args: &[Value], line: usize) -> EvalResult<Value> {
    let min = args[0].as_integer(line)?;
    let max = args[1].as_integer(line)?;
    if min > max {
        return Err(RuntimeError::InvalidArgument { details: format!(
                       "random_int bounds are reversed: {min} > {max}"
                   ),
                                                   line });
    }
    Ok(Value::Integer(rand::random_range(min..=max)))
}
