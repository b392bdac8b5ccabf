use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Flow, Interpreter},
            env::Environment,
        },
        value::{
            core::Value,
            dict::Dict,
            function::{FunctionValue, Instance},
        },
    },
};

impl Interpreter {
    /// Evaluates a call expression: the callee first, then the arguments
    /// left to right, then the dispatch.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            arguments: &[Expr],
                            line: usize)
                            -> EvalResult<Value> {
        let callee = self.eval_expr(callee)?;
        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval_expr(argument)?);
        }
        self.call_value(&callee, args, line)
    }

    /// Dispatches an already-evaluated callee with already-evaluated
    /// arguments. Used by call expressions and by `New`.
    pub(crate) fn call_value(&mut self,
                             callee: &Value,
                             args: Vec<Value>,
                             line: usize)
                             -> EvalResult<Value> {
        match callee {
            Value::Function(function) => self.call_function(function, args, line),
            Value::Builtin(builtin) => {
                if !builtin.arity.check(args.len()) {
                    return Err(RuntimeError::ArityMismatch { name:     builtin.name.to_string(),
                                                             expected: builtin.arity.describe(),
                                                             found:    args.len(),
                                                             line });
                }
                (builtin.func)(&args, line)
            },
            other => Err(RuntimeError::NotCallable { type_name: other.type_name(),
                                                     line }),
        }
    }

    /// Calls a user-defined function.
    ///
    /// A fresh frame is pushed whose parent is the function's closure,
    /// the parameters are bound positionally, and the body runs until it
    /// returns. A `Return` supplies the result; falling off the end
    /// yields `null`.
    pub(crate) fn call_function(&mut self,
                                function: &Rc<FunctionValue>,
                                args: Vec<Value>,
                                line: usize)
                                -> EvalResult<Value> {
        if args.len() != function.params.len() {
            return Err(RuntimeError::ArityMismatch { name:     function.name.clone(),
                                                     expected: function.params.len().to_string(),
                                                     found:    args.len(),
                                                     line });
        }

        let call_env = Environment::nested(&function.closure);
        for (param, arg) in function.params.iter().zip(args) {
            call_env.borrow_mut().define(param, arg);
        }

        let saved = std::mem::replace(&mut self.env, call_env);
        let result = self.eval_block(&function.body);
        self.env = saved;

        match result? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::Null),
        }
    }

    /// Evaluates `New name with args`.
    ///
    /// Any function can act as a constructor: a fresh instance is bound
    /// to `this` in a new frame under the function's closure, the
    /// parameters are bound, and the body runs. `Let this.x be ...`
    /// populates fields; functions defined in the body become members of
    /// the instance, and their closure gives them `this`.
    pub(crate) fn eval_new(&mut self,
                           name: &str,
                           arguments: &[Expr],
                           line: usize)
                           -> EvalResult<Value> {
        let callee = self.eval_variable(name, line)?;
        let Value::Function(function) = callee else {
            return Err(RuntimeError::TypeMismatch {
                details: format!("'{name}' is not a function usable with New"),
                line,
            });
        };

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval_expr(argument)?);
        }
        if args.len() != function.params.len() {
            return Err(RuntimeError::ArityMismatch { name:     function.name.clone(),
                                                     expected: function.params.len().to_string(),
                                                     found:    args.len(),
                                                     line });
        }

        let instance = Rc::new(Instance { class_name: function.name.clone(),
                                          fields:     RefCell::new(Dict::new()), });

        let construct_env = Environment::nested(&function.closure);
        construct_env.borrow_mut()
                     .define("this", Value::Instance(Rc::clone(&instance)));
        for (param, arg) in function.params.iter().zip(args) {
            construct_env.borrow_mut().define(param, arg);
        }

        let saved = std::mem::replace(&mut self.env, Rc::clone(&construct_env));
        let result = self.eval_block(&function.body);
        self.env = saved;
        result?;

        // Locally defined functions become the instance's methods.
        for (local_name, value) in construct_env.borrow().local_entries() {
            if matches!(value, Value::Function(_))
               && !instance.fields.borrow().contains_key(&local_name)
            {
                instance.fields.borrow_mut().insert(local_name, value);
            }
        }

        Ok(Value::Instance(instance))
    }
}
