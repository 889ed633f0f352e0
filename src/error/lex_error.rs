#[derive(Debug)]
/// Represents all errors that can occur while scanning source text.
pub enum LexError {
    /// Encountered a character the language does not use.
    UnknownCharacter {
        /// The offending character.
        found: char,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A decimal point was not followed by at least one digit.
    MalformedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal does not fit into 64 bits.
    NumberTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was still open when the input ended.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal contains a character that is not allowed in strings.
    IllegalStringCharacter {
        /// The offending character.
        found: char,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A `!` was not followed by `=`.
    ExpectedNotEqual {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { found, line } => {
                write!(f, "Error on line {line}: Unknown character {found:?}.")
            },

            Self::MalformedNumber { line } => {
                write!(f, "Error on line {line}: Illegal character in number.")
            },

            Self::NumberTooLarge { line } => {
                write!(f, "Error on line {line}: Number literal is too large.")
            },

            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: String literal is never closed.")
            },

            Self::IllegalStringCharacter { found, line } => write!(f,
                                                                   "Error on line {line}: Illegal character in string literal: {found:?}."),

            Self::ExpectedNotEqual { line } => {
                write!(f, "Error on line {line}: Expected '!=' but found a lone '!'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
