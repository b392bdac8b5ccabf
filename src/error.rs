/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing source
/// code, including unexpected tokens, unterminated strings, and broken
/// indentation. All of them render as a `SyntaxError` with a line number.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, grouped
/// into the language's error taxonomy (`NameError`, `TypeError`,
/// `IndexError`, `ArityError`, `RuntimeError`) plus user throws.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any error a Convo program can fail with, from source text to exit.
pub enum ConvoError {
    /// The source text could not be lexed or parsed.
    Parse(ParseError),
    /// Evaluation failed or a throw went uncaught.
    Runtime(RuntimeError),
}

impl From<ParseError> for ConvoError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for ConvoError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for ConvoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "{error}"),
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for ConvoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::Runtime(error) => Some(error),
        }
    }
}
