use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: identity; the operand is returned unchanged.
    /// - `Minus`: arithmetic negation, overflow-checked for integers.
    ///
    /// # Parameters
    /// - `op`: Unary operator to apply.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use basil::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let negated = Context::eval_unary(UnaryOperator::Minus, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(negated, Value::Integer(-5));
    ///
    /// let kept = Context::eval_unary(UnaryOperator::Plus, &Value::Real(2.5), 1).unwrap();
    /// assert_eq!(kept, Value::Real(2.5));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Plus => Ok(value.clone()),
            UnaryOperator::Minus => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow { line }),
                Value::Real(r) => Ok(Value::Real(-r)),
            },
        }
    }
}
