use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, dict::Dict},
    },
};

/// Parses JSON text into a language value.
pub fn parse_json(args: &[Value], line: usize) -> EvalResult<Value> {
    let text = args[0].as_str(line)?;
    let parsed: serde_json::Value =
        serde_json::from_str(text).map_err(|e| RuntimeError::Json { details:
                                                                        format!("invalid JSON: {e}"),
                                                                    line })?;
    Ok(json_to_value(&parsed))
}

/// Serializes a value to pretty-printed JSON text.
pub fn to_json(args: &[Value], line: usize) -> EvalResult<Value> {
    let json = value_to_json(&args[0], line)?;
    let text = serde_json::to_string_pretty(&json).map_err(|e| RuntimeError::Json {
                   details: format!("cannot convert to JSON: {e}"),
                   line,
               })?;
    Ok(Value::Str(text))
}

/// Converts a parsed JSON document into a language value. Objects keep
/// their key order.
pub(crate) fn json_to_value(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => n.as_i64().map_or_else(
            || n.as_f64().map_or(Value::Null, Value::Real),
            Value::Integer,
        ),
        serde_json::Value::String(s) => Value::Str(s.clone()),
        serde_json::Value::Array(items) => {
            Value::from(items.iter().map(json_to_value).collect::<Vec<_>>())
        },
        serde_json::Value::Object(object) => {
            let dict: Dict = object.iter()
                                   .map(|(key, value)| (key.clone(), json_to_value(value)))
                                   .collect();
            Value::from(dict)
        },
    }
}

/// Converts a language value into a JSON document. Functions and
/// instances have no JSON form.
pub(crate) fn value_to_json(value: &Value, line: usize) -> EvalResult<serde_json::Value> {
    match value {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
        Value::Integer(n) => Ok(serde_json::Value::from(*n)),
        Value::Real(r) => serde_json::Number::from_f64(*r).map(serde_json::Value::Number)
                                                          .ok_or_else(|| RuntimeError::Json {
                                                              details:
                                                                  "cannot represent a non-finite \
                                                                   number as JSON"
                                                                      .to_string(),
                                                              line,
                                                          }),
        Value::Str(s) => Ok(serde_json::Value::String(s.clone())),
        Value::List(elements) => {
            let mut items = Vec::with_capacity(elements.borrow().len());
            for element in elements.borrow().iter() {
                items.push(value_to_json(element, line)?);
            }
            Ok(serde_json::Value::Array(items))
        },
        Value::Dict(dict) => {
            let mut object = serde_json::Map::new();
            for (key, value) in dict.borrow().iter() {
                object.insert(key.clone(), value_to_json(value, line)?);
            }
            Ok(serde_json::Value::Object(object))
        },
        other => Err(RuntimeError::Json { details: format!("cannot convert a {} to JSON",
                                                           other.type_name()),
                                          line }),
    }
}
