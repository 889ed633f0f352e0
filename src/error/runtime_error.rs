#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable with no binding in the environment.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer was too large to be represented safely as a real.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The statement is recognized by the grammar but cannot be executed.
    UnsupportedStatement {
        /// The statement keyword, e.g. `GOTO`.
        construct: String,
        /// The source line where the error occurred.
        line:      usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },

            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),

            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),

            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },

            Self::UnsupportedStatement { construct, line } => write!(f,
                                                                     "Error on line {line}: {construct} statements are recognized but cannot be executed."),
        }
    }
}

impl std::error::Error for RuntimeError {}
