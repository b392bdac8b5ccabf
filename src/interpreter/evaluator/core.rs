use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{Expr, FunctionDef, LetTarget, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{env::Environment, modules::ModuleRegistry},
        value::{core::Value, function::FunctionValue},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. User throws and the `Stop`
/// signal travel on the error channel as well; see
/// [`RuntimeError::is_catchable`] and [`RuntimeError::is_stop`].
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// Blocks check the flow after every statement and short-circuit as soon
/// as it is not `Normal`, which is what carries `Return` out of nested
/// loops and conditionals up to the enclosing function call.
pub(crate) enum Flow {
    /// The statement completed; continue with the next one.
    Normal,
    /// A `Return` statement ran; the value belongs to the nearest
    /// enclosing function call.
    Return(Value),
}

/// The tree-walking evaluator and its runtime state.
///
/// Holds the global environment frame, the frame currently executing, the
/// module registry consulted by `Import`, and the lines printed by `Say`
/// so far. One interpreter can run many sources in sequence, which is how
/// the interactive shell keeps bindings alive between inputs.
pub struct Interpreter {
    pub(crate) globals: Rc<RefCell<Environment>>,
    pub(crate) env:     Rc<RefCell<Environment>>,
    pub(crate) modules: ModuleRegistry,
    pub(crate) output:  Vec<String>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter with an empty global environment and an
    /// empty module registry.
    #[must_use]
    pub fn new() -> Self {
        let globals = Environment::global();
        Self { globals: Rc::clone(&globals),
               env:     globals,
               modules: ModuleRegistry::new(),
               output:  Vec::new(), }
    }

    /// The lines printed by `Say` so far, oldest first.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Registers a module for `Import`. Importing the module defines
    /// every `(name, value)` pair in the global environment.
    pub fn register_module(&mut self, name: &str, bindings: Vec<(String, Value)>) {
        self.modules.register(name, bindings);
    }

    /// Runs a whole program and returns the value of the last top-level
    /// expression statement that produced one, which the interactive
    /// shell echoes back.
    ///
    /// # Errors
    /// Returns the first runtime error, uncaught throw, or `Stop` signal
    /// the program raises.
    pub fn run(&mut self, program: &[Statement]) -> EvalResult<Option<Value>> {
        let mut last = None;
        for statement in program {
            if let Statement::Expression { expr, .. } = statement {
                let value = self.eval_expr(expr)?;
                if !matches!(value, Value::Null) {
                    last = Some(value);
                }
            } else {
                match self.eval_statement(statement)? {
                    Flow::Normal => {},
                    Flow::Return(_) => {
                        unreachable!("the parser rejects 'Return' outside function bodies")
                    },
                }
            }
        }
        Ok(last)
    }

    /// Executes a sequence of statements, stopping early when one of them
    /// produces a non-normal flow.
    pub(crate) fn eval_block(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            match self.eval_statement(statement)? {
                Flow::Normal => {},
                other => return Ok(other),
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a single statement.
    pub(crate) fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Say { expr, .. } => {
                let text = self.eval_expr(expr)?.to_string();
                println!("{text}");
                self.output.push(text);
                Ok(Flow::Normal)
            },
            Statement::Let { target, value, line } => self.eval_let(target, value, *line),
            Statement::Function(def) => {
                self.eval_function_def(def);
                Ok(Flow::Normal)
            },
            Statement::If { condition,
                            then_body,
                            else_body,
                            .. } => self.eval_if(condition, then_body, else_body.as_deref()),
            Statement::While { condition, body, .. } => self.eval_while(condition, body),
            Statement::ForEach { var,
                                 iterable,
                                 body,
                                 line, } => self.eval_for_each(var, iterable, body, *line),
            Statement::Try { body,
                             catch_var,
                             catch_body,
                             .. } => self.eval_try(body, catch_var, catch_body),
            Statement::Throw { expr, line } => {
                let value = self.eval_expr(expr)?;
                Err(RuntimeError::Thrown { value, line: *line })
            },
            Statement::Return { expr, .. } => {
                let value = match expr {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::Null,
                };
                Ok(Flow::Return(value))
            },
            Statement::Import { module, line } => self.eval_import(module, *line),
            Statement::Stop { .. } => Err(RuntimeError::Stopped),
            Statement::Expression { expr, .. } => {
                self.eval_expr(expr)?;
                Ok(Flow::Normal)
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches based on the expression variant: literals,
    /// variables, unary and binary operations, collection literals,
    /// index/member access, calls, and object construction.
    pub(crate) fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, line } => self.eval_unary_op(*op, expr, *line),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line),
            Expr::ListLiteral { elements, .. } => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.eval_expr(element)?);
                }
                Ok(Value::from(values))
            },
            Expr::DictLiteral { pairs, .. } => self.eval_dict_literal(pairs),
            Expr::Index { target, index, line } => self.eval_index(target, index, *line),
            Expr::Member { target, field, line } => self.eval_member(target, field, *line),
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line),
            Expr::New { name,
                        arguments,
                        line, } => self.eval_new(name, arguments, *line),
        }
    }

    /// Resolves a name: the environment chain first, then the built-in
    /// registry, so user bindings shadow built-ins of the same name.
    pub(crate) fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        if let Some(value) = Environment::lookup(&self.env, name) {
            return Ok(value);
        }
        if let Some(builtin) = crate::interpreter::evaluator::builtins::core::lookup(name) {
            return Ok(Value::Builtin(builtin));
        }
        Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                            line })
    }

    fn eval_let(&mut self, target: &LetTarget, value: &Expr, line: usize) -> EvalResult<Flow> {
        let value = self.eval_expr(value)?;
        match target {
            LetTarget::Name(name) => Environment::bind(&self.env, name, value),
            LetTarget::Field { object, field } => {
                let receiver = self.eval_variable(object, line)?;
                let Value::Instance(instance) = receiver else {
                    return Err(RuntimeError::TypeMismatch {
                        details: format!(
                            "cannot assign field '{field}' on a {}",
                            receiver.type_name()
                        ),
                        line,
                    });
                };
                instance.fields.borrow_mut().insert(field.clone(), value);
            },
        }
        Ok(Flow::Normal)
    }

    /// Binds a function in the current frame, capturing the frame as the
    /// function's closure.
    fn eval_function_def(&mut self, def: &FunctionDef) {
        let function = FunctionValue { name:    def.name.clone(),
                                       params:  def.params.clone(),
                                       body:    Rc::new(def.body.clone()),
                                       closure: Rc::clone(&self.env), };
        self.env
            .borrow_mut()
            .define(&def.name, Value::Function(Rc::new(function)));
    }

    fn eval_if(&mut self,
               condition: &Expr,
               then_body: &[Statement],
               else_body: Option<&[Statement]>)
               -> EvalResult<Flow> {
        if self.eval_expr(condition)?.is_truthy() {
            self.eval_block(then_body)
        } else if let Some(else_body) = else_body {
            self.eval_block(else_body)
        } else {
            Ok(Flow::Normal)
        }
    }

    fn eval_while(&mut self, condition: &Expr, body: &[Statement]) -> EvalResult<Flow> {
        while self.eval_expr(condition)?.is_truthy() {
            match self.eval_block(body)? {
                Flow::Normal => {},
                other => return Ok(other),
            }
        }
        Ok(Flow::Normal)
    }

    /// Runs the try body; a catchable error binds its thrown value to the
    /// catch variable and runs the catch body. `Stop` passes through.
    fn eval_try(&mut self,
                body: &[Statement],
                catch_var: &str,
                catch_body: &[Statement])
                -> EvalResult<Flow> {
        match self.eval_block(body) {
            Ok(flow) => Ok(flow),
            Err(error) if error.is_catchable() => {
                Environment::bind(&self.env, catch_var, error.into_thrown_value());
                self.eval_block(catch_body)
            },
            Err(error) => Err(error),
        }
    }

    fn eval_dict_literal(&mut self, pairs: &[(Expr, Expr)]) -> EvalResult<Value> {
        let mut dict = crate::interpreter::value::dict::Dict::new();
        for (key_expr, value_expr) in pairs {
            let key = self.eval_expr(key_expr)?;
            let Value::Str(key) = key else {
                return Err(RuntimeError::TypeMismatch {
                    details: format!("dictionary keys must be text, got {}", key.type_name()),
                    line: key_expr.line_number(),
                });
            };
            let value = self.eval_expr(value_expr)?;
            dict.insert(key, value);
        }
        Ok(Value::from(dict))
    }

    fn eval_import(&mut self, module: &str, line: usize) -> EvalResult<Flow> {
        let Some(bindings) = self.modules.get(module) else {
            return Err(RuntimeError::UnknownModule { name: module.to_string(),
                                                     line });
        };
        let bindings = bindings.to_vec();
        for (name, value) in bindings {
            self.globals.borrow_mut().define(&name, value);
        }
        Ok(Flow::Normal)
    }
}
