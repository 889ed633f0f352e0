use crate::error::LexError;

#[derive(Debug)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// The lexer failed while the parser was pulling the next token.
    Lex(LexError),
    /// The current token's kind did not match the expected kind.
    UnexpectedToken {
        /// The kind the parser required at this point.
        expected: String,
        /// The token actually encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The token at a statement position starts no known statement form.
    InvalidStatement {
        /// The token actually encountered.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An expression was required but the current token cannot begin one.
    ExpectedExpression {
        /// The token actually encountered.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A condition is missing its comparison operator.
    ExpectedComparison {
        /// The token actually encountered.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An identifier was referenced before any statement introduced it.
    UndeclaredVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The same label was declared twice.
    DuplicateLabel {
        /// The label name.
        name: String,
        /// The source line of the second declaration.
        line: usize,
    },
    /// A `GOTO` references a label never declared in the program.
    UndefinedLabel {
        /// The label name.
        name: String,
        /// The source line of the first reference.
        line: usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(error) => write!(f, "{error}"),

            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },

            Self::InvalidStatement { found, line } => {
                write!(f, "Error on line {line}: Invalid statement at {found}.")
            },

            Self::ExpectedExpression { found, line } => {
                write!(f, "Error on line {line}: Expected an expression, found {found}.")
            },

            Self::ExpectedComparison { found, line } => write!(f,
                                                               "Error on line {line}: Expected a comparison operator, found {found}."),

            Self::UndeclaredVariable { name, line } => write!(f,
                                                              "Error on line {line}: Variable '{name}' referenced before assignment."),

            Self::DuplicateLabel { name, line } => {
                write!(f, "Error on line {line}: Label '{name}' already exists.")
            },

            Self::UndefinedLabel { name, line } => {
                write!(f, "Error on line {line}: GOTO to undeclared label '{name}'.")
            },

            Self::UnexpectedTrailingTokens { found, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after expression. Check your input: {found}"),
        }
    }
}

impl std::error::Error for ParseError {}
