/// Turns raw source text into a stream of tokens.
///
/// # Responsibilities
/// - Recognize numbers, identifiers, keywords, strings and operators.
/// - Track the current line number for error reporting.
/// - Reject characters the language does not know about.
pub mod lexer;

/// Builds an abstract syntax tree from a stream of tokens.
///
/// # Responsibilities
/// - Enforce the grammar of the language, including operator precedence.
/// - Reject references to variables that were never assigned.
/// - Resolve GOTO targets against the set of declared labels.
pub mod parser;

/// Walks an abstract syntax tree and computes its effects.
///
/// # Responsibilities
/// - Evaluate expressions to values.
/// - Execute statements against an environment of variable bindings.
/// - Collect everything the program outputs.
pub mod evaluator;

/// The tokens produced by the lexer and consumed by the parser.
pub mod token;

/// The values an expression can evaluate to.
pub mod value;
