/// The parser type and its token-consumption primitives.
///
/// Contains the [`core::Parser`] struct, the program and standalone-expression
/// entry points, and label resolution.
pub mod core;

/// Statement parsing.
///
/// Implements the statement grammar: compound blocks, assignments, `OUTPUT`,
/// `INPUT`, `IF`, `WHILE`, `GOTO`, `LABEL` and the empty statement.
pub mod statement;

/// Binary expression parsing.
///
/// Handles the left-associative precedence levels (`+`/`-` above `*`/`/`) and
/// comparison chains.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix sign operators, literals, parenthesized groupings and
/// variable references.
pub mod unary;
