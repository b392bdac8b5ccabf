use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a unary operation.
    ///
    /// Negation requires a number; `not` maps any value through the
    /// truthiness rule and flips it.
    pub(crate) fn eval_unary_op(&mut self,
                                op: UnaryOperator,
                                expr: &Expr,
                                line: usize)
                                -> EvalResult<Value> {
        let operand = self.eval_expr(expr)?;
        match op {
            UnaryOperator::Not => Ok(Value::Bool(!operand.is_truthy())),
            UnaryOperator::Negate => match operand {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow { line }),
                Value::Real(r) => Ok(Value::Real(-r)),
                other => Err(RuntimeError::TypeMismatch { details: format!(
                                 "cannot negate a {}",
                                 other.type_name()
                             ),
                                                          line }),
            },
        }
    }
}
