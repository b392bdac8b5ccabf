use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Statement,
    interpreter::{evaluator::env::Environment, value::dict::Dict},
};

/// A user-defined function value.
///
/// Carries the parameter list, the body statements, and a live reference
/// to the environment the function was defined in. Calls push a fresh
/// frame whose parent is that closure, so inner functions see the outer
/// function's parameters and locals as they are at call time.
#[derive(Clone)]
pub struct FunctionValue {
    /// The declared function name.
    pub name:    String,
    /// The parameter names, bound positionally on call.
    pub params:  Vec<String>,
    /// The statements forming the body.
    pub body:    Rc<Vec<Statement>>,
    /// The environment the function was defined in.
    pub closure: Rc<RefCell<Environment>>,
}

impl std::fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<function {}>", self.name)
    }
}

/// An object created by `New`.
///
/// An instance is a mutable field table tagged with the name of the
/// constructor function that built it. Methods are ordinary function
/// values stored in the field table; they reach the instance through
/// `this`, which their closure captured during construction.
pub struct Instance {
    /// The name of the constructor function.
    pub class_name: String,
    /// Fields (and methods) of this instance, in definition order.
    pub fields:     RefCell<Dict>,
}

impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<instance of {}>", self.class_name)
    }
}
