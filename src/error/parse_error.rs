#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// A description of the token encountered and what was expected.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was opened but never closed.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The lexer hit a character that is not part of the language.
    UnexpectedCharacter {
        /// The offending slice of source text.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A dedent did not line up with any enclosing indentation level.
    InconsistentIndentation {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A block header (a line ending in `:`) was not followed by an
    /// indented block.
    ExpectedBlock {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Comparison operators were chained, e.g. `a less than b less than c`.
    ComparisonChain {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `Return` statement appeared outside any function body.
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric literal was too large to be represented.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Gets the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::UnterminatedString { line }
            | Self::UnexpectedCharacter { line, .. }
            | Self::InconsistentIndentation { line }
            | Self::ExpectedBlock { line }
            | Self::ComparisonChain { line }
            | Self::ReturnOutsideFunction { line }
            | Self::LiteralTooLarge { line } => *line,
        }
    }

    fn description(&self) -> String {
        match self {
            Self::UnexpectedToken { token, .. } => format!("unexpected token: {token}"),
            Self::UnexpectedEndOfInput { .. } => "unexpected end of input".to_string(),
            Self::UnterminatedString { .. } => "unterminated string literal".to_string(),
            Self::UnexpectedCharacter { found, .. } => format!("unexpected character '{found}'"),
            Self::InconsistentIndentation { .. } => {
                "dedent does not match any enclosing indentation level".to_string()
            },
            Self::ExpectedBlock { .. } => "expected an indented block after ':'".to_string(),
            Self::ComparisonChain { .. } => "comparison operators cannot be chained".to_string(),
            Self::ReturnOutsideFunction { .. } => {
                "'Return' is only allowed inside a function body".to_string()
            },
            Self::LiteralTooLarge { .. } => "numeric literal is too large".to_string(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SyntaxError: {} (line {})", self.description(), self.line())
    }
}

impl std::error::Error for ParseError {}
