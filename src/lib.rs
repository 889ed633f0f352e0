//! # basil
//!
//! basil is a tree-walking interpreter for a small BASIC-flavoured
//! imperative language. It lexes, parses, and evaluates programs built from
//! integer and real arithmetic, variable assignment, `OUTPUT`, and nested
//! `START`/`END` blocks.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::{
    evaluator::core::Context,
    lexer::Lexer,
    parser::core::Parser,
    value::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches metadata (such as source lines) to AST nodes for error
///   reporting.
/// - Enables extensible and robust handling of parsed code.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a
/// program. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source lines for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code evaluation. It exposes the
/// building blocks behind the crate-level entry points.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides the pipeline stages for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and helpers.
///
/// This module provides reusable helpers and conversion routines that are
/// used throughout the interpreter, parser, and evaluator. These include
/// safe conversions between integer and floating-point types, and any
/// general-purpose functions not specific to a single phase.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
/// - Provide general utility functions used in multiple modules.
pub mod util;

/// Runs a complete program and returns the final evaluation context.
///
/// This function lexes and parses the provided source string into a single
/// `START`/`END` program, then executes its statements against a fresh
/// evaluation context. On success the context is handed back to the caller,
/// who can inspect the variable environment and the collected `OUTPUT`
/// lines.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails. Every phase
/// reports the source line the failure occurred on.
///
/// # Examples
/// ```
/// use basil::{interpreter::value::Value, run_program};
///
/// let context = run_program("START LET x = 2 + 3; OUTPUT x END").unwrap();
///
/// assert_eq!(context.environment.get("x"), Some(&Value::Integer(5)));
/// assert_eq!(context.outputs, vec!["5"]);
///
/// // Example with an intentional error: 'x' is never assigned.
/// let res = run_program("START LET y = x + 1 END");
/// assert!(res.is_err());
/// ```
pub fn run_program(source: &str) -> Result<Context, Box<dyn std::error::Error>> {
    let parser = Parser::new(Lexer::new(source))?;
    let program = parser.parse_program()?;

    debug!("parse succeeded, evaluating program");

    let mut context = Context::new();
    context.eval_statement(&program)?;

    Ok(context)
}

/// Evaluates a single expression and returns its value.
///
/// The source must contain exactly one expression and nothing else;
/// trailing tokens are rejected. Since no program surrounds the expression,
/// no variables are in scope.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails, or if tokens
/// remain after the expression.
///
/// # Examples
/// ```
/// use basil::{eval_expression, interpreter::value::Value};
///
/// let value = eval_expression("2 + 7 * 4").unwrap();
/// assert_eq!(value, Value::Integer(30));
///
/// // Division always produces a real result.
/// let value = eval_expression("9 / 2").unwrap();
/// assert_eq!(value, Value::Real(4.5));
/// ```
pub fn eval_expression(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let parser = Parser::new(Lexer::new(source))?;
    let expr = parser.parse_single_expression()?;

    Ok(Context::new().eval(&expr)?)
}
