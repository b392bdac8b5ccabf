use logos::Logos;

use crate::error::ParseError;

/// Number of columns a tab character counts for when measuring
/// indentation.
pub const TAB_WIDTH: usize = 4;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Keywords match case-insensitively; identifiers are case-sensitive and
/// can never spell a keyword. The multi-word operators (`greater than`,
/// `not equals`, `For each`, ...) are recognized as single tokens, with
/// longest-match making them win over their one-word prefixes.
///
/// `Indent`, `Dedent`, `NewLine` and `Eof` carry no source text of their
/// own; they are synthesized by [`lex`] from the line structure of the
/// program.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Floating-point literal tokens, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Double-quoted string literal tokens. The callback resolves the
    /// `\\`, `\"`, `\n` and `\t` escapes; an unknown escape keeps the
    /// escaped character.
    #[regex(r#""([^"\\\n]|\\.)*""#, parse_string)]
    Str(String),
    /// `true`
    #[token("true", ignore(ascii_case))]
    True,
    /// `false`
    #[token("false", ignore(ascii_case))]
    False,
    /// `null`
    #[token("null", ignore(ascii_case))]
    Null,
    /// `Say`
    #[token("say", ignore(ascii_case))]
    Say,
    /// `Let`
    #[token("let", ignore(ascii_case))]
    Let,
    /// `be`
    #[token("be", ignore(ascii_case))]
    Be,
    /// `Define`
    #[token("define", ignore(ascii_case))]
    Define,
    /// `with`
    #[token("with", ignore(ascii_case))]
    With,
    /// `Call`
    #[token("call", ignore(ascii_case))]
    Call,
    /// `If`
    #[token("if", ignore(ascii_case))]
    If,
    /// `then`
    #[token("then", ignore(ascii_case))]
    Then,
    /// `Else`
    #[token("else", ignore(ascii_case))]
    Else,
    /// `While`
    #[token("while", ignore(ascii_case))]
    While,
    /// `do`
    #[token("do", ignore(ascii_case))]
    Do,
    /// `For each`
    #[regex(r"for[ \t]+each", ignore(ascii_case))]
    ForEach,
    /// `in`
    #[token("in", ignore(ascii_case))]
    In,
    /// `Try`
    #[token("try", ignore(ascii_case))]
    Try,
    /// `Catch`
    #[token("catch", ignore(ascii_case))]
    Catch,
    /// `Throw`
    #[token("throw", ignore(ascii_case))]
    Throw,
    /// `Return`
    #[token("return", ignore(ascii_case))]
    Return,
    /// `Import`
    #[token("import", ignore(ascii_case))]
    Import,
    /// `Stop`
    #[token("stop", ignore(ascii_case))]
    Stop,
    /// `New`
    #[token("new", ignore(ascii_case))]
    New,
    /// `and`
    #[token("and", ignore(ascii_case))]
    And,
    /// `or`
    #[token("or", ignore(ascii_case))]
    Or,
    /// `not equals`
    #[regex(r"not[ \t]+equals", ignore(ascii_case))]
    NotEquals,
    /// `not`
    #[token("not", ignore(ascii_case))]
    Not,
    /// `equals`
    #[token("equals", ignore(ascii_case))]
    Equals,
    /// `greater than`
    #[regex(r"greater[ \t]+than", ignore(ascii_case))]
    GreaterThan,
    /// `greater equal`
    #[regex(r"greater[ \t]+equal", ignore(ascii_case))]
    GreaterEqual,
    /// `less than`
    #[regex(r"less[ \t]+than", ignore(ascii_case))]
    LessThan,
    /// `less equal`
    #[regex(r"less[ \t]+equal", ignore(ascii_case))]
    LessEqual,
    /// `greater` (bare form, accepted without `than`)
    #[token("greater", ignore(ascii_case))]
    Greater,
    /// `less` (bare form, accepted without `than`)
    #[token("less", ignore(ascii_case))]
    Less,
    /// Identifier tokens; variable or function names such as `x` or
    /// `total_price`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments.`
    #[regex(r"#[^\n\r]*", logos::skip)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `.`
    #[token(".")]
    Dot,
    /// `=`
    #[token("=")]
    Assign,
    /// Spaces and tabs between tokens.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,

    /// Start of an indented block. Synthesized, never lexed.
    Indent,
    /// End of an indented block. Synthesized, never lexed.
    Dedent,
    /// End of a logical line. Synthesized, never lexed.
    NewLine,
    /// End of input. Synthesized, never lexed.
    Eof,
}

/// Parses a floating-point literal from the current token slice.
fn parse_real(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &mut logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Resolves the escape sequences of a string literal slice (quotes
/// included) into the runtime string value.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let raw = lex.slice();
    let inner = &raw[1..raw.len() - 1];

    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => value.push('\n'),
                Some('t') => value.push('\t'),
                Some('\\') => value.push('\\'),
                Some('"') => value.push('"'),
                Some(other) => value.push(other),
                None => {},
            }
        } else {
            value.push(c);
        }
    }
    value
}

/// Measures the indentation column of a line, expanding tabs to
/// [`TAB_WIDTH`] columns.
fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width += TAB_WIDTH,
            _ => break,
        }
    }
    width
}

/// Tokenizes a whole source text, translating indentation into explicit
/// `Indent`/`Dedent` tokens.
///
/// Each produced pair is `(token, line)` with 1-based line numbers. Every
/// logical line ends with a `NewLine` token; blank lines and comment-only
/// lines are dropped entirely and never affect indentation. At the end of
/// input all open blocks are closed with `Dedent` tokens and a final `Eof`
/// is appended. Line endings (`\n` or `\r\n`) are normalized away.
///
/// # Errors
/// Returns a [`ParseError`] for unterminated strings, characters outside
/// the language, oversized numeric literals, and dedents that do not match
/// any enclosing indentation level.
///
/// # Example
/// ```
/// use convo::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("Say 1").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Say, 1),
///                 (Token::Integer(1), 1),
///                 (Token::NewLine, 1),
///                 (Token::Eof, 1)]);
/// ```
pub fn lex(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut indents = vec![0usize];
    let mut last_line = 1;

    for (index, raw) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        let content = line.trim_start_matches([' ', '\t']);
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        last_line = line_no;

        let width = indent_width(line);
        if width > *indents.last().unwrap_or(&0) {
            indents.push(width);
            tokens.push((Token::Indent, line_no));
        } else {
            while width < *indents.last().unwrap_or(&0) {
                indents.pop();
                tokens.push((Token::Dedent, line_no));
            }
            if width != *indents.last().unwrap_or(&0) {
                return Err(ParseError::InconsistentIndentation { line: line_no });
            }
        }

        let mut lexer = Token::lexer(content);
        while let Some(token) = lexer.next() {
            match token {
                Ok(tok) => tokens.push((tok, line_no)),
                Err(()) => {
                    let slice = lexer.slice();
                    if slice.starts_with('"') {
                        return Err(ParseError::UnterminatedString { line: line_no });
                    }
                    if slice.starts_with(|c: char| c.is_ascii_digit()) {
                        return Err(ParseError::LiteralTooLarge { line: line_no });
                    }
                    return Err(ParseError::UnexpectedCharacter { found: slice.to_string(),
                                                                 line:  line_no, });
                },
            }
        }
        tokens.push((Token::NewLine, line_no));
    }

    while indents.len() > 1 {
        indents.pop();
        tokens.push((Token::Dedent, last_line));
    }
    tokens.push((Token::Eof, last_line));

    Ok(tokens)
}
