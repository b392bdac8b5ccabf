use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a short-circuiting logical operation.
    ///
    /// `and` returns the left operand when it is falsy, otherwise the
    /// right operand; `or` returns the left operand when it is truthy,
    /// otherwise the right operand. The right side is only evaluated when
    /// the left side did not decide the result, so side effects there may
    /// never run.
    pub(crate) fn eval_logic(&mut self,
                             op: BinaryOperator,
                             left: &Expr,
                             right: &Expr)
                             -> EvalResult<Value> {
        let lhs = self.eval_expr(left)?;
        match op {
            BinaryOperator::And => {
                if lhs.is_truthy() {
                    self.eval_expr(right)
                } else {
                    Ok(lhs)
                }
            },
            BinaryOperator::Or => {
                if lhs.is_truthy() {
                    Ok(lhs)
                } else {
                    self.eval_expr(right)
                }
            },
            _ => unreachable!(),
        }
    }
}
