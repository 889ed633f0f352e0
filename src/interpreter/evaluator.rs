/// Core evaluation logic and context management.
///
/// Contains the evaluation context with its variable environment and output
/// sink, the expression walker, and statement execution.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles the execution of the four arithmetic operators, including the
/// integer/real promotion rules and overflow checking.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix sign operators.
pub mod unary;
