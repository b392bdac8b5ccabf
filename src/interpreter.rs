/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// manages the environment chain, dispatches calls, and produces values
/// and output. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, closures, instances, and control flow.
/// - Reports runtime errors such as division by zero or unknown names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each corresponding to meaningful language elements such as numbers,
/// strings, keywords, and operators. Indentation becomes explicit
/// `Indent`/`Dedent` tokens here, which is what lets the parser treat
/// blocks structurally.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Handles numeric and string literals, identifiers, and keywords.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of
/// statements and expressions, enforcing operator precedence and block
/// nesting.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and syntax, reporting errors with line numbers.
/// - Dispatches on statement keywords and parses indented blocks.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation:
/// numbers, text, booleans, null, lists, dictionaries, functions,
/// built-ins, and instances. It also fixes the truthiness rule,
/// structural equality, and the printed form of every value.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements conversion, comparison, and display behavior.
/// - Provides the insertion-ordered dictionary used by values and
///   instances.
pub mod value;
