use crate::interpreter::value::core::Value;

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// Every variant except [`RuntimeError::Stopped`] can be intercepted by a
/// `Try`/`Catch` block, which binds the result of
/// [`RuntimeError::into_thrown_value`] to the catch variable.
pub enum RuntimeError {
    /// Tried to read a variable that is not bound anywhere.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to read a field or method that the instance does not have.
    UnknownMember {
        /// The name of the missing member.
        name:  String,
        /// The class name of the receiving instance.
        class: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `Import` named a module that is not registered.
    UnknownModule {
        /// The requested module name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator or built-in received a value of the wrong type.
    TypeMismatch {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted to call a value that is not a function.
    NotCallable {
        /// The type name of the value that was called.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A list or string index was outside the valid range.
    IndexOutOfBounds {
        /// The index that was requested.
        index: i64,
        /// The length of the indexed value.
        len:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A dictionary lookup used a key that is not present.
    MissingKey {
        /// The missing key.
        key:  String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function was called with the wrong number of arguments.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// A description of the accepted argument counts.
        expected: String,
        /// The number of arguments actually supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A number was too large to convert between integer and real form.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A file operation failed.
    Io {
        /// Details about the failure.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// JSON text could not be parsed, or a value could not be serialized.
    Json {
        /// Details about the failure.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A built-in received an argument it cannot work with.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A value raised by a `Throw` statement.
    Thrown {
        /// The thrown value.
        value: Value,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The program executed a `Stop` statement. Not a failure: the top
    /// level converts this into a successful exit, and `Try`/`Catch`
    /// lets it pass through untouched.
    Stopped,
}

impl RuntimeError {
    /// Gets the error category, matching the language's error taxonomy.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnknownVariable { .. }
            | Self::UnknownMember { .. }
            | Self::UnknownModule { .. } => "NameError",
            Self::TypeMismatch { .. } | Self::NotCallable { .. } | Self::InvalidArgument { .. } => {
                "TypeError"
            },
            Self::IndexOutOfBounds { .. } | Self::MissingKey { .. } => "IndexError",
            Self::ArityMismatch { .. } => "ArityError",
            Self::DivisionByZero { .. }
            | Self::Overflow { .. }
            | Self::LiteralTooLarge { .. }
            | Self::Io { .. }
            | Self::Json { .. }
            | Self::Thrown { .. }
            | Self::Stopped => "RuntimeError",
        }
    }

    /// Gets the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::UnknownMember { line, .. }
            | Self::UnknownModule { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::NotCallable { line, .. }
            | Self::IndexOutOfBounds { line, .. }
            | Self::MissingKey { line, .. }
            | Self::ArityMismatch { line, .. }
            | Self::DivisionByZero { line }
            | Self::Overflow { line }
            | Self::LiteralTooLarge { line }
            | Self::Io { line, .. }
            | Self::Json { line, .. }
            | Self::InvalidArgument { line, .. }
            | Self::Thrown { line, .. } => *line,
            Self::Stopped => 0,
        }
    }

    /// Returns `true` when a `Try`/`Catch` block may intercept this error.
    #[must_use]
    pub const fn is_catchable(&self) -> bool {
        !matches!(self, Self::Stopped)
    }

    /// Returns `true` when this is the `Stop` control signal.
    #[must_use]
    pub const fn is_stop(&self) -> bool {
        matches!(self, Self::Stopped)
    }

    /// Converts the error into the value bound by a `Catch` clause.
    ///
    /// A user `Throw` yields the thrown value unchanged; every other
    /// runtime error becomes a string describing what went wrong.
    #[must_use]
    pub fn into_thrown_value(self) -> Value {
        match self {
            Self::Thrown { value, .. } => value,
            other => Value::Str(other.description()),
        }
    }

    fn description(&self) -> String {
        match self {
            Self::UnknownVariable { name, .. } => format!("undefined variable '{name}'"),
            Self::UnknownMember { name, class, .. } => {
                format!("'{class}' has no field or method '{name}'")
            },
            Self::UnknownModule { name, .. } => format!("unknown module '{name}'"),
            Self::TypeMismatch { details, .. } => details.clone(),
            Self::NotCallable { type_name, .. } => {
                format!("value of type {type_name} is not callable")
            },
            Self::IndexOutOfBounds { index, len, .. } => {
                format!("index {index} is out of range for length {len}")
            },
            Self::MissingKey { key, .. } => format!("key '{key}' not found"),
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  .. } => {
                format!("'{name}' expects {expected} argument(s), got {found}")
            },
            Self::DivisionByZero { .. } => "division by zero".to_string(),
            Self::Overflow { .. } => "integer overflow".to_string(),
            Self::LiteralTooLarge { .. } => "number is too large".to_string(),
            Self::Io { details, .. } => details.clone(),
            Self::Json { details, .. } => details.clone(),
            Self::InvalidArgument { details, .. } => details.clone(),
            Self::Thrown { value, .. } => format!("uncaught throw: {value}"),
            Self::Stopped => "program stopped".to_string(),
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_stop() {
            return write!(f, "{}", self.description());
        }
        write!(f, "{}: {} (line {})", self.kind(), self.description(), self.line())
    }
}

impl std::error::Error for RuntimeError {}
