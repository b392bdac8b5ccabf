use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a comparison.
    ///
    /// `equals`/`not equals` are structural and never fail. The ordered
    /// comparisons require two numbers (integers and reals mix freely)
    /// or two strings, which compare lexicographically.
    pub(crate) fn eval_comparison(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value,
                                  line: usize)
                                  -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        match op {
            Equal => return Ok(Value::Bool(left.equals(right))),
            NotEqual => return Ok(Value::Bool(!left.equals(right))),
            _ => {},
        }

        let ordering = match (left, right) {
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            _ if left.is_number() && right.is_number() => {
                let a = left.as_real(line)?;
                let b = right.as_real(line)?;
                a.partial_cmp(&b).unwrap_or(Ordering::Equal)
            },
            _ => {
                return Err(RuntimeError::TypeMismatch { details: format!(
                               "cannot compare {} and {} with '{op}'",
                               left.type_name(),
                               right.type_name()
                           ),
                                                        line });
            },
        };

        let result = match op {
            Greater => ordering == Ordering::Greater,
            GreaterEqual => ordering != Ordering::Less,
            Less => ordering == Ordering::Less,
            LessEqual => ordering != Ordering::Greater,
            _ => unreachable!(),
        };
        Ok(Value::Bool(result))
    }
}
