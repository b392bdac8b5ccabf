/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly
/// in source code: numbers, strings, booleans, and `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
    /// A double-quoted string literal, with escapes already resolved.
    Str(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// The `null` literal.
    Null,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every construct that evaluates to a value, from literals
/// and variables to operator applications, collection literals, postfix
/// accesses, calls, and object construction via `New`. Each variant carries
/// the 1-based source line for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (`not x`, `-x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic, comparison, or logical).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// List literal expression, e.g. `[1, 2, 3]`.
    ListLiteral {
        /// Elements of the list.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Dictionary literal expression, e.g. `{"a": 1}`.
    DictLiteral {
        /// Key/value expression pairs, in source order.
        pairs: Vec<(Self, Self)>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Index access, e.g. `xs[0]` or `d["key"]`.
    Index {
        /// The value being indexed.
        target: Box<Self>,
        /// The index or key expression.
        index:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// Member access on an instance, e.g. `counter.count`.
    Member {
        /// The receiving expression.
        target: Box<Self>,
        /// The field or method name.
        field:  String,
        /// Line number in the source code.
        line:   usize,
    },
    /// A call expression, e.g. `fact(5)` or `counter.increment()`.
    Call {
        /// The expression evaluating to the callee.
        callee:    Box<Self>,
        /// Arguments to the call, in source order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Object construction, e.g. `New Counter with 5`.
    New {
        /// The name of the constructor function.
        name:      String,
        /// Constructor arguments, in source order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use convo::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::ListLiteral { line, .. }
            | Self::DictLiteral { line, .. }
            | Self::Index { line, .. }
            | Self::Member { line, .. }
            | Self::Call { line, .. }
            | Self::New { line, .. } => *line,
        }
    }
}

/// Represents a user-defined function declared with `Define`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names.
    pub params: Vec<String>,
    /// The statements forming the function body.
    pub body:   Vec<Statement>,
    /// Line number in the source code.
    pub line:   usize,
}

/// The left-hand side of a `Let` statement.
#[derive(Debug, Clone, PartialEq)]
pub enum LetTarget {
    /// A plain variable name.
    Name(String),
    /// A field on an instance, e.g. `this.count` or `counter.count`.
    Field {
        /// The variable holding the instance.
        object: String,
        /// The field name.
        field:  String,
    },
}

/// Represents a single statement.
///
/// Statements perform actions; compound statements carry nested statement
/// lists that the parser built from indented blocks.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `Say expr` — print the stringified value on its own line.
    Say {
        /// The expression to print.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `Let target be expr` — bind a variable or assign a field.
    Let {
        /// The binding target.
        target: LetTarget,
        /// The value expression.
        value:  Expr,
        /// Line number in the source code.
        line:   usize,
    },
    /// A function declaration via `Define`.
    Function(FunctionDef),
    /// `If cond then: ... Else: ...`
    If {
        /// The condition expression.
        condition: Expr,
        /// Statements run when the condition is truthy.
        then_body: Vec<Self>,
        /// Statements run otherwise, when present.
        else_body: Option<Vec<Self>>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `While cond do: ...`
    While {
        /// The condition expression, re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `For each item in xs do: ...`
    ForEach {
        /// The loop variable name.
        var:      String,
        /// The expression producing the iterated collection.
        iterable: Expr,
        /// The loop body.
        body:     Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// `Try: ... Catch err: ...`
    Try {
        /// Statements attempted first.
        body:       Vec<Self>,
        /// The name bound to the caught value.
        catch_var:  String,
        /// Statements run when a throw or runtime error is caught.
        catch_body: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// `Throw expr` — raise a value.
    Throw {
        /// The expression producing the thrown value.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `Return expr?` — leave the enclosing function.
    Return {
        /// The optional result expression.
        expr: Option<Expr>,
        /// Line number in the source code.
        line: usize,
    },
    /// `Import name` — merge a registered module into the globals.
    Import {
        /// The module name.
        module: String,
        /// Line number in the source code.
        line:   usize,
    },
    /// `Stop` — terminate the program with a successful exit.
    Stop {
        /// Line number in the source code.
        line: usize,
    },
    /// A standalone expression evaluated for its effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition, or string concatenation when either side is a string (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Structural equality (`equals`)
    Equal,
    /// Structural inequality (`not equals`)
    NotEqual,
    /// Greater than (`greater than`)
    Greater,
    /// Greater than or equal (`greater equal`)
    GreaterEqual,
    /// Less than (`less than`)
    Less,
    /// Less than or equal (`less equal`)
    LessEqual,
    /// Short-circuiting logical and (`and`)
    And,
    /// Short-circuiting logical or (`or`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `not x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Equal => "equals",
            NotEqual => "not equals",
            Greater => "greater than",
            GreaterEqual => "greater equal",
            Less => "less than",
            LessEqual => "less equal",
            And => "and",
            Or => "or",
        };
        write!(f, "{operator}")
    }
}
