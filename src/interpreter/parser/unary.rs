use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, expect_token, parse_expression},
            utils::{parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a unary expression.
///
/// Handles prefix `-` (numeric negation), which is right-associative.
/// Logical `not` binds looser and lives with the binary parsers. If no
/// operator is present, the function parses a primary expression and
/// applies any postfix operators.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary postfix*
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let expr = parse_unary(tokens)?;
        return Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                                  expr: Box::new(expr),
                                  line });
    }
    let primary = parse_primary(tokens)?;
    parse_postfix(tokens, primary)
}

/// Parses postfix operators applied to an expression.
///
/// Three postfix constructs chain freely after a primary expression:
///
/// 1. Calls: `f(a, b)`, including zero-argument `f()`
/// 2. Indexing: `xs[0]`, `d["key"]`
/// 3. Member access: `counter.count`, `counter.increment()`
///
/// Grammar:
/// ```text
///     postfix := "(" arguments ")"
///              | "[" expression "]"
///              | "." identifier
/// ```
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut node: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    loop {
        match tokens.peek() {
            Some((Token::LParen, line)) => {
                let line = *line;
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                node = Expr::Call { callee: Box::new(node),
                                    arguments,
                                    line };
            },
            Some((Token::LBracket, line)) => {
                let line = *line;
                tokens.next();
                let index = parse_expression(tokens)?;
                expect_token(tokens, &Token::RBracket, "']' after the index")?;
                node = Expr::Index { target: Box::new(node),
                                     index: Box::new(index),
                                     line };
            },
            Some((Token::Dot, line)) => {
                let line = *line;
                tokens.next();
                let field = parse_identifier(tokens)?;
                node = Expr::Member { target: Box::new(node),
                                     field,
                                     line };
            },
            _ => break,
        }
    }
    Ok(node)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - number, string, boolean and `null` literals
/// - identifiers
/// - parenthesized expressions
/// - list literals `[ ... ]` and dictionary literals `{ k: v, ... }`
/// - object construction with `New`
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Integer(..)
         | Token::Real(..)
         | Token::Str(..)
         | Token::True
         | Token::False
         | Token::Null,
         _) => parse_literal(tokens),
        (Token::Identifier(_), _) => {
            let Some((Token::Identifier(name), line)) = tokens.next() else {
                unreachable!()
            };
            Ok(Expr::Variable { name: name.clone(),
                                line: *line, })
        },
        (Token::LParen, _) => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect_token(tokens, &Token::RParen, "')' after the expression")?;
            Ok(expr)
        },
        (Token::LBracket, line) => {
            let line = *line;
            tokens.next();
            let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
            Ok(Expr::ListLiteral { elements, line })
        },
        (Token::LBrace, _) => parse_dict_literal(tokens),
        (Token::New, _) => parse_new(tokens),
        (token, line) => Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                                           line:  *line, }),
    }
}

/// Parses a literal token into a literal expression.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((token, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let value = match token {
        Token::Integer(n) => LiteralValue::Integer(*n),
        Token::Real(r) => LiteralValue::Real(*r),
        Token::Str(s) => LiteralValue::Str(s.clone()),
        Token::True => LiteralValue::Bool(true),
        Token::False => LiteralValue::Bool(false),
        Token::Null => LiteralValue::Null,
        _ => unreachable!(),
    };
    Ok(Expr::Literal { value, line: *line })
}

/// Parses a dictionary literal of the form `{ key: value, ... }`.
///
/// Keys are full expressions; the evaluator requires them to produce
/// text. An empty `{}` is accepted.
fn parse_dict_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::LBrace, "'{'")?;

    let mut pairs = Vec::new();
    if let Some((Token::RBrace, _)) = tokens.peek() {
        tokens.next();
        return Ok(Expr::DictLiteral { pairs, line });
    }
    loop {
        let key = parse_expression(tokens)?;
        expect_token(tokens, &Token::Colon, "':' between a key and its value")?;
        let value = parse_expression(tokens)?;
        pairs.push((key, value));

        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RBrace, _)) => break,
            Some((token, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("expected ',' or '}}', \
                                                                         found {token:?}"),
                                                         line:  *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }
    Ok(Expr::DictLiteral { pairs, line })
}

/// Parses object construction: `New name (with arg, ...)?`.
fn parse_new<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::New, "'New'")?;
    let name = parse_identifier(tokens)?;

    let mut arguments = Vec::new();
    if let Some((Token::With, _)) = tokens.peek() {
        tokens.next();
        loop {
            arguments.push(parse_expression(tokens)?);
            match tokens.peek() {
                Some((Token::Comma, _)) => {
                    tokens.next();
                },
                _ => break,
            }
        }
    }
    Ok(Expr::New { name, arguments, line })
}
