/// Lexing errors.
///
/// Defines all error types that can occur while scanning source text into
/// tokens. Lex errors cover unknown characters, malformed numeric literals,
/// malformed operators, and illegal string contents.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur during parsing of the token
/// stream. Parse errors include token-kind mismatches, invalid statements,
/// undeclared variable references, and label resolution failures. A lexing
/// failure surfacing mid-parse is wrapped here as well.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown variables, division by zero, arithmetic overflow,
/// and statements that are recognized by the grammar but cannot execute.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
