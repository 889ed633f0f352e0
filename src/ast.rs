/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source code. The lexer decides whether a number is an integer or a real,
/// and that distinction is preserved through parsing and evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every expression form the grammar can produce: literals,
/// variable references, unary sign operators, and binary arithmetic. Each
/// variant carries the source line it started on for error reporting. Nodes
/// are immutable once constructed; precedence and associativity are frozen
/// into the tree shape at parse time.
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
    /// A unary sign operation (e.g. `-x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
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
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use basil::ast::Expr;
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
            | Self::BinaryOp { line, .. } => *line,
        }
    }
}

/// A comparison between arithmetic expressions.
///
/// Conditions appear in `IF` and `WHILE` statements. The grammar requires at
/// least one comparison operator; further `operator expr` pairs may chain
/// after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// The leftmost operand.
    pub left: Expr,
    /// Comparison operators with their right-hand operands, leftmost first.
    /// Always contains at least one entry.
    pub rest: Vec<(ComparisonOperator, Expr)>,
    /// Line number in the source code.
    pub line: usize,
}

/// The payload of an `OUTPUT` statement.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputContent {
    /// A string literal emitted verbatim.
    Text(String),
    /// An expression whose computed value is emitted.
    Expression(Expr),
}

/// An AST node representing a statement.
///
/// Statements are the units a program is built from. They produce no values:
/// their effects are environment mutations and collected output.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `START ... END` block of statements separated by `;`.
    Compound {
        /// Statements inside the block, in source order.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// A variable assignment, written `LET name = expr` or `name = expr`.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// An `OUTPUT` statement producing a string or a computed value.
    Output {
        /// What the statement emits.
        content: OutputContent,
        /// Line number in the source code.
        line:    usize,
    },
    /// An `INPUT` statement naming a variable to read into.
    Input {
        /// The name of the target variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An `IF condition THEN ... ENDIF` block.
    If {
        /// The guarding condition.
        condition: Condition,
        /// Statements in the body.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A `WHILE condition DO ... ENDWHILE` block.
    While {
        /// The loop condition.
        condition: Condition,
        /// Statements in the body.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A `GOTO label` jump.
    Goto {
        /// The label being jumped to.
        label: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `LABEL name` declaration.
    Label {
        /// The declared label name.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An empty statement with no effect.
    NoOp,
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a unary sign operator.
///
/// Sign operators are right-recursive and may chain arbitrarily, so `- - x`
/// is two nested [`Expr::UnaryOp`] nodes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Minus,
}

/// Represents a comparison operator inside a [`Condition`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mul, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ComparisonOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};
        let operator = match self {
            Equal => "==",
            NotEqual => "!=",
            Greater => ">",
            GreaterEqual => ">=",
            Less => "<",
            LessEqual => "<=",
        };
        write!(f, "{operator}")
    }
}
