use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

/// Resolves a possibly negative index against a length. Negative indices
/// count from the end, Python-style.
fn resolve_index(index: i64, len: usize, line: usize) -> EvalResult<usize> {
    let adjusted = if index < 0 {
        index + i64::try_from(len).map_err(|_| RuntimeError::LiteralTooLarge { line })?
    } else {
        index
    };
    usize::try_from(adjusted)
        .ok()
        .filter(|i| *i < len)
        .ok_or(RuntimeError::IndexOutOfBounds { index, len, line })
}

impl Interpreter {
    /// Evaluates an index access `target[index]`.
    ///
    /// Lists take 0-based integer indices (negative counts from the end),
    /// dictionaries take string keys, and strings index per character.
    pub(crate) fn eval_index(&mut self,
                             target: &Expr,
                             index: &Expr,
                             line: usize)
                             -> EvalResult<Value> {
        let target = self.eval_expr(target)?;
        let index = self.eval_expr(index)?;

        match &target {
            Value::List(elements) => {
                let elements = elements.borrow();
                let position = resolve_index(index.as_integer(line)?, elements.len(), line)?;
                Ok(elements[position].clone())
            },
            Value::Str(text) => {
                let chars: Vec<char> = text.chars().collect();
                let position = resolve_index(index.as_integer(line)?, chars.len(), line)?;
                Ok(Value::Str(chars[position].to_string()))
            },
            Value::Dict(dict) => {
                let key = index.as_str(line)?;
                dict.borrow()
                    .get(key)
                    .cloned()
                    .ok_or_else(|| RuntimeError::MissingKey { key: key.to_string(),
                                                              line })
            },
            other => Err(RuntimeError::TypeMismatch { details:
                                                          format!("cannot index into a {}",
                                                                  other.type_name()),
                                                      line }),
        }
    }

    /// Evaluates a member access `target.field`.
    ///
    /// Only instances have members; fields and methods live in the same
    /// table. Everything else is a type error (`length` and friends are
    /// functions, not properties).
    pub(crate) fn eval_member(&mut self,
                              target: &Expr,
                              field: &str,
                              line: usize)
                              -> EvalResult<Value> {
        let target = self.eval_expr(target)?;
        match &target {
            Value::Instance(instance) => {
                instance.fields
                        .borrow()
                        .get(field)
                        .cloned()
                        .ok_or_else(|| RuntimeError::UnknownMember {
                            name:  field.to_string(),
                            class: instance.class_name.clone(),
                            line,
                        })
            },
            other => Err(RuntimeError::TypeMismatch { details: format!(
                             "a {} has no fields; '{field}' is not available",
                             other.type_name()
                         ),
                                                      line }),
        }
    }
}
