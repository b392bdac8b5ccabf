use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Adds an item to the end of a list and returns the list.
pub fn append(args: &[Value], line: usize) -> EvalResult<Value> {
    let Value::List(elements) = &args[0] else {
        return Err(RuntimeError::TypeMismatch {
            details: format!("append expects a list, got {}", args[0].type_name()),
            line,
        });
    };
    elements.borrow_mut().push(args[1].clone());
    Ok(args[0].clone())
}

/// Removes the first occurrence of an item from a list and returns the
/// list. Removing an absent item is not an error.
pub fn remove(args: &[Value], line: usize) -> EvalResult<Value> {
    let Value::List(elements) = &args[0] else {
        return Err(RuntimeError::TypeMismatch {
            details: format!("remove expects a list, got {}", args[0].type_name()),
            line,
        });
    };
    let position = elements.borrow().iter().position(|v| v.equals(&args[1]));
    if let Some(position) = position {
        elements.borrow_mut().remove(position);
    }
    Ok(args[0].clone())
}

/// Safe lookup: `get(list, index)` or `get(dict, key)`, returning an
/// optional third argument (or `null`) when the element is absent.
pub fn get(args: &[Value], line: usize) -> EvalResult<Value> {
    let fallback = args.get(2).cloned().unwrap_or(Value::Null);
    match &args[0] {
        Value::List(elements) => {
            let elements = elements.borrow();
            let index = args[1].as_integer(line)?;
            let adjusted = if index < 0 {
                index + i64::try_from(elements.len()).unwrap_or(i64::MAX)
            } else {
                index
            };
            Ok(usize::try_from(adjusted)
                .ok()
                .and_then(|i| elements.get(i).cloned())
                .unwrap_or(fallback))
        },
        Value::Dict(dict) => {
            let key = args[1].as_str(line)?;
            Ok(dict.borrow().get(key).cloned().unwrap_or(fallback))
        },
        other => Err(RuntimeError::TypeMismatch { details: format!(
                         "get expects a list or dictionary, got {}",
                         other.type_name()
                     ),
                                                  line }),
    }
}

/// Gets the keys of a dictionary as a list, in insertion order.
pub fn keys(args: &[Value], line: usize) -> EvalResult<Value> {
    let Value::Dict(dict) = &args[0] else {
        return Err(RuntimeError::TypeMismatch {
            details: format!("keys expects a dictionary, got {}", args[0].type_name()),
            line,
        });
    };
    let keys: Vec<Value> = dict.borrow().keys().cloned().map(Value::Str).collect();
    Ok(Value::from(keys))
}

/// Gets the values of a dictionary as a list, in insertion order.
pub fn values(args: &[Value], line: usize) -> EvalResult<Value> {
    let Value::Dict(dict) = &args[0] else {
        return Err(RuntimeError::TypeMismatch {
            details: format!("values expects a dictionary, got {}", args[0].type_name()),
            line,
        });
    };
    let values: Vec<Value> = dict.borrow().values().cloned().collect();
    Ok(Value::from(values))
}

/// Membership test: substring of a text, element of a list, or key of a
/// dictionary.
pub fn contains(args: &[Value], line: usize) -> EvalResult<Value> {
    let found = match &args[0] {
        Value::Str(text) => text.contains(args[1].as_str(line)?),
        Value::List(elements) => elements.borrow().iter().any(|v| v.equals(&args[1])),
        Value::Dict(dict) => dict.borrow().contains_key(args[1].as_str(line)?),
        other => {
            return Err(RuntimeError::TypeMismatch { details: format!(
                           "contains expects text, a list, or a dictionary, got {}",
                           other.type_name()
                       ),
                                                    line });
        },
    };
    Ok(Value::Bool(found))
}
