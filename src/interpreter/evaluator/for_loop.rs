use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Flow, Interpreter},
            env::Environment,
        },
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a `For each` loop.
    ///
    /// Lists iterate over their elements, dictionaries over their keys in
    /// insertion order, and strings per character. The items are
    /// snapshotted before the first iteration, so mutating the collection
    /// inside the body cannot change what the loop visits. The loop
    /// variable is bound with the same rule as `Let`.
    pub(crate) fn eval_for_each(&mut self,
                                var: &str,
                                iterable: &Expr,
                                body: &[Statement],
                                line: usize)
                                -> EvalResult<Flow> {
        let iterable = self.eval_expr(iterable)?;
        let items: Vec<Value> = match &iterable {
            Value::List(elements) => elements.borrow().clone(),
            Value::Dict(dict) => dict.borrow().keys().cloned().map(Value::Str).collect(),
            Value::Str(text) => text.chars().map(|c| Value::Str(c.to_string())).collect(),
            other => {
                return Err(RuntimeError::TypeMismatch { details: format!(
                               "cannot iterate over a {}",
                               other.type_name()
                           ),
                                                        line });
            },
        };

        for item in items {
            Environment::bind(&self.env, var, item);
            match self.eval_block(body)? {
                Flow::Normal => {},
                other => return Ok(other),
            }
        }
        Ok(Flow::Normal)
    }
}
