use std::iter::Peekable;

use crate::{
    ast::{Expr, FunctionDef, LetTarget, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, ParserContext, expect_token, parse_expression},
            utils::{expect_end_of_statement, parse_identifier},
        },
    },
};

/// Parses a single statement, dispatching on the first token of the
/// line.
///
/// Statement keywords (`Say`, `Let`, `Define`, `Call`, `If`, `While`,
/// `For each`, `Try`, `Throw`, `Return`, `Import`, `Stop`) each get
/// their own parser; any other line parses as an expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `context`: Tracks whether the statement sits inside a function
///   body.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              context: ParserContext)
                              -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Say, _)) => parse_say(tokens),
        Some((Token::Let, _)) => parse_let(tokens),
        Some((Token::Define, _)) => parse_define(tokens),
        Some((Token::Call, _)) => parse_call_statement(tokens),
        Some((Token::If, _)) => parse_if(tokens, context),
        Some((Token::While, _)) => parse_while(tokens, context),
        Some((Token::ForEach, _)) => parse_for_each(tokens, context),
        Some((Token::Try, _)) => parse_try(tokens, context),
        Some((Token::Throw, _)) => parse_throw(tokens),
        Some((Token::Return, _)) => parse_return(tokens, context),
        Some((Token::Import, _)) => parse_import(tokens),
        Some((Token::Stop, line)) => {
            let line = *line;
            tokens.next();
            expect_end_of_statement(tokens)?;
            Ok(Statement::Stop { line })
        },
        Some((_, line)) => {
            let line = *line;
            let expr = parse_expression(tokens)?;
            expect_end_of_statement(tokens)?;
            Ok(Statement::Expression { expr, line })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses `Say <expression>`.
fn parse_say<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Say, "'Say'")?;
    let expr = parse_expression(tokens)?;
    expect_end_of_statement(tokens)?;
    Ok(Statement::Say { expr, line })
}

/// Parses `Let <name> be <expression>`.
///
/// The left-hand side may also be a field, `Let this.count be 0` or
/// `Let counter.count be 0`.
fn parse_let<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Let, "'Let'")?;
    let name = parse_identifier(tokens)?;

    let target = if let Some((Token::Dot, _)) = tokens.peek() {
        tokens.next();
        let field = parse_identifier(tokens)?;
        LetTarget::Field { object: name, field }
    } else {
        LetTarget::Name(name)
    };

    expect_token(tokens, &Token::Be, "'be'")?;
    let value = parse_expression(tokens)?;
    expect_end_of_statement(tokens)?;
    Ok(Statement::Let { target, value, line })
}

/// Parses a function definition:
///
/// ```text
///     Define <name> with <param>, <param>:
///         <body>
/// ```
///
/// The `with` clause is omitted for zero-parameter functions. The body
/// parses with the function flag set, which legalizes `Return`.
fn parse_define<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Define, "'Define'")?;
    let name = parse_identifier(tokens)?;

    let mut params = Vec::new();
    if let Some((Token::With, _)) = tokens.peek() {
        tokens.next();
        loop {
            params.push(parse_identifier(tokens)?);
            match tokens.peek() {
                Some((Token::Comma, _)) => {
                    tokens.next();
                },
                _ => break,
            }
        }
    }

    let colon_line = expect_token(tokens, &Token::Colon, "':' after the function header")?;
    let body = parse_block(tokens, ParserContext { in_function: true }, colon_line)?;
    Ok(Statement::Function(FunctionDef { name,
                                         params,
                                         body,
                                         line }))
}

/// Parses `Call <name> (with <arg>, <arg>)?` into an expression-call
/// statement. The callee may be a dotted path for method calls
/// (`Call counter.increment`).
fn parse_call_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Call, "'Call'")?;
    let name = parse_identifier(tokens)?;

    let mut callee = Expr::Variable { name, line };
    while let Some((Token::Dot, member_line)) = tokens.peek() {
        let member_line = *member_line;
        tokens.next();
        let field = parse_identifier(tokens)?;
        callee = Expr::Member { target: Box::new(callee),
                                field,
                                line: member_line };
    }

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
    expect_end_of_statement(tokens)?;

    Ok(Statement::Expression { expr: Expr::Call { callee: Box::new(callee),
                                                  arguments,
                                                  line },
                               line })
}

/// Parses an `If` statement with optional `Else` and chained `Else If`:
///
/// ```text
///     If <condition> then:
///         <body>
///     Else If <condition> then:
///         <body>
///     Else:
///         <body>
/// ```
///
/// The `then` keyword is optional. A chained `Else If` parses as an
/// `Else` whose body is a single nested `If`.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, context: ParserContext) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::If, "'If'")?;
    let condition = parse_expression(tokens)?;

    if let Some((Token::Then, _)) = tokens.peek() {
        tokens.next();
    }
    let colon_line = expect_token(tokens, &Token::Colon, "':' after the condition")?;
    let then_body = parse_block(tokens, context, colon_line)?;

    let else_body = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        if let Some((Token::If, _)) = tokens.peek() {
            Some(vec![parse_if(tokens, context)?])
        } else {
            let colon_line = expect_token(tokens, &Token::Colon, "':' after 'Else'")?;
            Some(parse_block(tokens, context, colon_line)?)
        }
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_body,
                       else_body,
                       line })
}

/// Parses `While <condition> do: <body>`. The `do` keyword is optional.
fn parse_while<'a, I>(tokens: &mut Peekable<I>, context: ParserContext) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::While, "'While'")?;
    let condition = parse_expression(tokens)?;

    if let Some((Token::Do, _)) = tokens.peek() {
        tokens.next();
    }
    let colon_line = expect_token(tokens, &Token::Colon, "':' after the condition")?;
    let body = parse_block(tokens, context, colon_line)?;
    Ok(Statement::While { condition, body, line })
}

/// Parses `For each <name> in <expression> do: <body>`. The `do`
/// keyword is optional.
fn parse_for_each<'a, I>(tokens: &mut Peekable<I>, context: ParserContext) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::ForEach, "'For each'")?;
    let var = parse_identifier(tokens)?;
    expect_token(tokens, &Token::In, "'in' after the loop variable")?;
    let iterable = parse_expression(tokens)?;

    if let Some((Token::Do, _)) = tokens.peek() {
        tokens.next();
    }
    let colon_line = expect_token(tokens, &Token::Colon, "':' after the loop header")?;
    let body = parse_block(tokens, context, colon_line)?;
    Ok(Statement::ForEach { var,
                            iterable,
                            body,
                            line })
}

/// Parses `Try: <body> Catch <name>: <body>`.
fn parse_try<'a, I>(tokens: &mut Peekable<I>, context: ParserContext) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Try, "'Try'")?;
    let colon_line = expect_token(tokens, &Token::Colon, "':' after 'Try'")?;
    let body = parse_block(tokens, context, colon_line)?;

    expect_token(tokens, &Token::Catch, "'Catch' after the try block")?;
    let catch_var = parse_identifier(tokens)?;
    let colon_line = expect_token(tokens, &Token::Colon, "':' after the catch variable")?;
    let catch_body = parse_block(tokens, context, colon_line)?;

    Ok(Statement::Try { body,
                        catch_var,
                        catch_body,
                        line })
}

/// Parses `Throw <expression>`.
fn parse_throw<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Throw, "'Throw'")?;
    let expr = parse_expression(tokens)?;
    expect_end_of_statement(tokens)?;
    Ok(Statement::Throw { expr, line })
}

/// Parses `Return <expression>?`, rejecting it outside function bodies.
fn parse_return<'a, I>(tokens: &mut Peekable<I>, context: ParserContext) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Return, "'Return'")?;
    if !context.in_function {
        return Err(ParseError::ReturnOutsideFunction { line });
    }

    let expr = match tokens.peek() {
        None | Some((Token::NewLine | Token::Dedent | Token::Eof, _)) => None,
        _ => Some(parse_expression(tokens)?),
    };
    expect_end_of_statement(tokens)?;
    Ok(Statement::Return { expr, line })
}

/// Parses `Import <name>`.
fn parse_import<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::Import, "'Import'")?;
    let module = parse_identifier(tokens)?;
    expect_end_of_statement(tokens)?;
    Ok(Statement::Import { module, line })
}
