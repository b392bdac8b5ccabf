use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation.
    ///
    /// `and`/`or` are routed before operand evaluation so that they can
    /// short-circuit. Everything else evaluates the left operand, then
    /// the right, and dispatches to the arithmetic or comparison
    /// handlers.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 line: usize)
                                 -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };

        if matches!(op, And | Or) {
            return self.eval_logic(op, left, right);
        }

        let lhs = self.eval_expr(left)?;
        let rhs = self.eval_expr(right)?;

        match op {
            Add | Sub | Mul | Div => Self::eval_arithmetic(op, &lhs, &rhs, line),
            Equal | NotEqual | Greater | GreaterEqual | Less | LessEqual => {
                Self::eval_comparison(op, &lhs, &rhs, line)
            },
            And | Or => unreachable!("handled before operand evaluation"),
        }
    }
}
