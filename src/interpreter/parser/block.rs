use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, ParserContext},
            statement::parse_statement,
            utils::skip_newlines,
        },
    },
};

/// Parses an indented block of statements.
///
/// Called with the stream positioned right after the `:` that closed the
/// block header. Expects the header's end-of-line, then an `Indent`,
/// then one or more statements, and consumes the matching `Dedent`.
///
/// Grammar: `block := NEWLINE INDENT statement+ DEDENT`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the header's colon.
/// - `context`: Statement context carried into the nested statements.
/// - `header_line`: Line of the block header, for error reporting.
///
/// # Returns
/// The statements of the block.
///
/// # Errors
/// Returns a `ParseError` when the colon is not at the end of its line
/// or the indented block is missing.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                          context: ParserContext,
                          header_line: usize)
                          -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::NewLine, _)) => {},
        Some((token, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("expected end of line after \
                                                                     ':', found {token:?}"),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: header_line }),
    }

    match tokens.next() {
        Some((Token::Indent, _)) => {},
        Some((_, line)) => return Err(ParseError::ExpectedBlock { line: *line }),
        None => return Err(ParseError::ExpectedBlock { line: header_line }),
    }

    let mut statements = Vec::new();
    loop {
        skip_newlines(tokens);
        match tokens.peek() {
            Some((Token::Dedent, _)) => {
                tokens.next();
                break;
            },
            None | Some((Token::Eof, _)) => break,
            _ => statements.push(parse_statement(tokens, context)?),
        }
    }
    Ok(statements)
}
