use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_or, statement::parse_statement, utils::skip_newlines},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Lexical context threaded through the statement parsers.
///
/// Tracks whether the parser is inside a function body, which is what
/// lets `Return` outside a function be rejected at parse time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserContext {
    /// `true` while parsing the body of a `Define`.
    pub in_function: bool,
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, logical OR, and recursively descends through
/// the precedence hierarchy.
///
/// Grammar: `expression := or`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_or(tokens)
}

/// Parses a whole token stream into a program.
///
/// Statements are separated by newlines; the stream must end with `Eof`.
///
/// # Errors
/// Returns the first syntax error encountered.
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let context = ParserContext::default();

    let mut statements = Vec::new();
    loop {
        skip_newlines(&mut iter);
        match iter.peek() {
            None | Some((Token::Eof, _)) => break,
            _ => statements.push(parse_statement(&mut iter, context)?),
        }
    }
    Ok(statements)
}

/// Consumes a single expected token, failing with a descriptive error
/// otherwise. Returns the token's line number.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          description: &str)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((token, line)) if token == expected => Ok(*line),
        Some((token, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("expected {description}, found \
                                                              {token:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
