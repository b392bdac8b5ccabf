use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{
        evaluator::{builtins::core::BuiltinDef, core::EvalResult},
        value::{
            dict::Dict,
            function::{FunctionValue, Instance},
        },
    },
    util::num::i64_to_f64_checked,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// bindings, function returns, and conditions. Lists and dictionaries are
/// shared mutable references, so passing them to a function or a built-in
/// lets the callee mutate the same collection the caller sees.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
    /// An immutable text value.
    Str(String),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// The absence of a value (`null`).
    Null,
    /// An ordered, mutable sequence of values.
    List(Rc<RefCell<Vec<Self>>>),
    /// An insertion-ordered, mutable mapping from string keys to values.
    Dict(Rc<RefCell<Dict>>),
    /// A user-defined function together with its closure.
    Function(Rc<FunctionValue>),
    /// A host-provided built-in function.
    Builtin(&'static BuiltinDef),
    /// An object created by `New`.
    Instance(Rc<Instance>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(RefCell::new(v)))
    }
}

impl From<Dict> for Value {
    fn from(v: Dict) -> Self {
        Self::Dict(Rc::new(RefCell::new(v)))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(n) => (*n).into(),
            LiteralValue::Real(r) => (*r).into(),
            LiteralValue::Str(s) => s.clone().into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Null => Self::Null,
        }
    }
}

impl Value {
    /// Determines whether the value counts as true in a condition.
    ///
    /// Only `null` and `false` are falsy. Every other value, including
    /// `0`, `""` and empty collections, is truthy. The same rule backs
    /// `If`, `While`, `and`, `or` and `not`.
    ///
    /// # Example
    /// ```
    /// use convo::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(Value::Str(String::new()).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(false))
    }

    /// Gets a short name for the value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) | Self::Real(_) => "number",
            Self::Str(_) => "text",
            Self::Bool(_) => "boolean",
            Self::Null => "null",
            Self::List(_) => "list",
            Self::Dict(_) => "dictionary",
            Self::Function(_) => "function",
            Self::Builtin(_) => "builtin",
            Self::Instance(_) => "instance",
        }
    }

    /// Returns `true` when the value is a number of either kind.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_))
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Integers convert only when exactly representable as `f64`.
    ///
    /// # Example
    /// ```
    /// use convo::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(1).unwrap(), 10.0);
    /// assert!(Value::Str("x".to_string()).as_real(1).is_err());
    /// ```
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => i64_to_f64_checked(*n, RuntimeError::LiteralTooLarge { line }),
            _ => Err(RuntimeError::TypeMismatch { details: format!("expected a number, got {}",
                                                                   self.type_name()),
                                                  line }),
        }
    }

    /// Converts the value to `i64`, or returns an error if not an integer.
    pub fn as_integer(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            _ => Err(RuntimeError::TypeMismatch { details: format!("expected an integer, got {}",
                                                                   self.type_name()),
                                                  line }),
        }
    }

    /// Borrows the value as a string slice, or returns an error.
    pub fn as_str(&self, line: usize) -> EvalResult<&str> {
        match self {
            Self::Str(s) => Ok(s),
            _ => Err(RuntimeError::TypeMismatch { details: format!("expected text, got {}",
                                                                   self.type_name()),
                                                  line }),
        }
    }

    /// Structural equality between two values.
    ///
    /// Numbers compare across the integer/real divide (`5 equals 5.0`).
    /// Lists compare element-wise, dictionaries key-by-key ignoring
    /// insertion order, and functions and instances compare by identity.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => a == b,
            (Self::Integer(a), Self::Real(b)) | (Self::Real(b), Self::Integer(a)) => {
                *a as f64 == *b
            },
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => {
                if Rc::ptr_eq(a, b) {
                    return true;
                }
                let (a, b) = (a.borrow(), b.borrow());
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y))
            },
            (Self::Dict(a), Self::Dict(b)) => {
                if Rc::ptr_eq(a, b) {
                    return true;
                }
                let (a, b) = (a.borrow(), b.borrow());
                a.len() == b.len()
                && a.iter()
                    .all(|(key, value)| b.get(key).is_some_and(|other| value.equals(other)))
            },
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name == b.name,
            (Self::Instance(a), Self::Instance(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::List(elements) => {
                write!(f, "[")?;
                for (index, value) in elements.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            },
            Self::Dict(dict) => {
                write!(f, "{{")?;
                for (index, (key, value)) in dict.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => write!(f, "<function {}>", function.name),
            Self::Builtin(builtin) => write!(f, "<builtin {}>", builtin.name),
            Self::Instance(instance) => write!(f, "<instance of {}>", instance.class_name),
        }
    }
}
