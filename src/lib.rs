//! # convo
//!
//! convo is an interpreter for Convo, a small dynamically-typed scripting
//! language whose surface syntax reads as English-like sentences
//! (`Let x be 5`, `If x greater than 3 then:`, `Define greet with name:`).
//! Source text is lexed into tokens (with indentation turned into explicit
//! block markers), parsed into an AST, and evaluated by a tree walker with
//! lexical scoping, closures, and structured error handling.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{ast::Statement, error::ParseError, interpreter::value::core::Value};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The
/// AST is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing,
/// parsing, or evaluating code, rendered as one line each:
/// `<Kind>: <description> (line <N>)`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for user feedback.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and the built-in registry to provide a complete
/// runtime for Convo programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
pub mod util;

pub use crate::{error::ConvoError, interpreter::evaluator::core::Interpreter};

/// How a program run ended, short of an error.
#[derive(Debug)]
pub enum Outcome {
    /// The program ran to completion. Carries the value of the last
    /// top-level expression statement, which the interactive shell
    /// echoes.
    Finished(Option<Value>),
    /// The program executed `Stop`; the process should exit successfully.
    Stopped,
}

/// Lexes and parses a source text into a program.
///
/// # Errors
/// Returns a [`ParseError`] when the source is not well formed; execution
/// never starts in that case.
///
/// # Examples
/// ```
/// use convo::parse_source;
///
/// assert!(parse_source("Let x be 5").is_ok());
/// assert!(parse_source("Let x be").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Vec<Statement>, ParseError> {
    let tokens = interpreter::lexer::lex(source)?;
    interpreter::parser::core::parse_program(&tokens)
}

/// Parses and runs a source text against an existing interpreter.
///
/// Bindings made by the program persist in the interpreter, so feeding
/// several sources to the same interpreter behaves like one longer
/// program; this is what the interactive shell does. A `Stop` statement
/// is reported as [`Outcome::Stopped`] rather than an error.
///
/// # Errors
/// Returns a [`ConvoError`] for syntax errors, runtime errors, and
/// uncaught throws.
///
/// # Examples
/// ```
/// use convo::{Interpreter, run_source};
///
/// let mut interpreter = Interpreter::new();
/// run_source("Say \"Hello, World!\"", &mut interpreter).unwrap();
/// assert_eq!(interpreter.output(), ["Hello, World!"]);
/// ```
pub fn run_source(source: &str, interpreter: &mut Interpreter) -> Result<Outcome, ConvoError> {
    let program = parse_source(source)?;
    match interpreter.run(&program) {
        Ok(value) => Ok(Outcome::Finished(value)),
        Err(error) if error.is_stop() => Ok(Outcome::Stopped),
        Err(error) => Err(ConvoError::Runtime(error)),
    }
}
