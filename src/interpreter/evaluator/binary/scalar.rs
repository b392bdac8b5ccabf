use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates an arithmetic operation.
    ///
    /// `+` doubles as concatenation: when either operand is text, both
    /// sides are stringified and joined. Otherwise the operands must be
    /// numbers. Two integers stay integral (with overflow checking)
    /// except under division, which always produces a real; mixed
    /// operands promote to real. Division by zero of either flavor is an
    /// error.
    pub(crate) fn eval_arithmetic(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value,
                                  line: usize)
                                  -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Integer, Real, Str};

        if matches!(op, Add) && (matches!(left, Str(_)) || matches!(right, Str(_))) {
            return Ok(Str(format!("{left}{right}")));
        }

        match (left, right) {
            (Integer(a), Integer(b)) => match op {
                Add => a.checked_add(*b)
                        .map(Integer)
                        .ok_or(RuntimeError::Overflow { line }),
                Sub => a.checked_sub(*b)
                        .map(Integer)
                        .ok_or(RuntimeError::Overflow { line }),
                Mul => a.checked_mul(*b)
                        .map(Integer)
                        .ok_or(RuntimeError::Overflow { line }),
                Div => {
                    if *b == 0 {
                        return Err(RuntimeError::DivisionByZero { line });
                    }
                    Ok(Real(left.as_real(line)? / right.as_real(line)?))
                },
                _ => unreachable!(),
            },
            (Integer(_) | Real(_), Integer(_) | Real(_)) => {
                let a = left.as_real(line)?;
                let b = right.as_real(line)?;
                Ok(Real(match op {
                            Add => a + b,
                            Sub => a - b,
                            Mul => a * b,
                            Div => {
                                if b == 0.0 {
                                    return Err(RuntimeError::DivisionByZero { line });
                                }
                                a / b
                            },
                            _ => unreachable!(),
                        }))
            },
            _ => Err(RuntimeError::TypeMismatch { details: format!(
                         "cannot use {op} on {} and {}",
                         left.type_name(),
                         right.type_name()
                     ),
                                                  line }),
        }
    }
}
