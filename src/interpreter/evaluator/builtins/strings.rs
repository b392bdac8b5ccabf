use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Converts a value's text form to uppercase.
#[allow(clippy::unnecessary_wraps)]
pub fn upper(args: &[Value], _line: usize) -> EvalResult<Value> {
    Ok(Value::Str(args[0].to_string().to_uppercase()))
}

/// Converts a value's text form to lowercase.
#[allow(clippy::unnecessary_wraps)]
pub fn lower(args: &[Value], _line: usize) -> EvalResult<Value> {
    Ok(Value::Str(args[0].to_string().to_lowercase()))
}

/// Removes leading and trailing whitespace from a value's text form.
#[allow(clippy::unnecessary_wraps)]
pub fn trim(args: &[Value], _line: usize) -> EvalResult<Value> {
    Ok(Value::Str(args[0].to_string().trim().to_string()))
}

/// Splits text by a separator (a single space when omitted) into a list
/// of text pieces.
pub fn split(args: &[Value], line: usize) -> EvalResult<Value> {
    let text = args[0].to_string();
    let separator = match args.get(1) {
        Some(sep) => sep.as_str(line)?.to_string(),
        None => " ".to_string(),
    };
    if separator.is_empty() {
        return Err(RuntimeError::InvalidArgument { details:
                                                       "split separator must not be empty"
                                                           .to_string(),
                                                   line });
    }
    let pieces: Vec<Value> = text.split(separator.as_str())
                                 .map(|piece| Value::Str(piece.to_string()))
                                 .collect();
    Ok(Value::from(pieces))
}

/// Joins the stringified items of a list with a separator (empty when
/// omitted).
pub fn join(args: &[Value], line: usize) -> EvalResult<Value> {
    let Value::List(elements) = &args[0] else {
        return Err(RuntimeError::TypeMismatch {
            details: format!("join expects a list, got {}", args[0].type_name()),
            line,
        });
    };
    let separator = match args.get(1) {
        Some(sep) => sep.as_str(line)?.to_string(),
        None => String::new(),
    };
    let joined = elements.borrow()
                         .iter()
                         .map(ToString::to_string)
                         .collect::<Vec<_>>()
                         .join(&separator);
    Ok(Value::Str(joined))
}

/// Replaces every occurrence of `old` with `new` in a value's text form.
pub fn replace(args: &[Value], line: usize) -> EvalResult<Value> {
    let text = args[0].to_string();
    let old = args[1].as_str(line)?;
    let new = args[2].as_str(line)?;
    Ok(Value::Str(text.replace(old, new)))
}

/// Checks whether a value's text form starts with a prefix.
pub fn starts_with(args: &[Value], line: usize) -> EvalResult<Value> {
    let text = args[0].to_string();
    Ok(Value::Bool(text.starts_with(args[1].as_str(line)?)))
}

/// Checks whether a value's text form ends with a suffix.
pub fn ends_with(args: &[Value], line: usize) -> EvalResult<Value> {
    let text = args[0].to_string();
    Ok(Value::Bool(text.ends_with(args[1].as_str(line)?)))
}
