use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a binary arithmetic operation.
    ///
    /// Two integer operands stay in integer arithmetic, with overflow
    /// checked. Mixed operands promote the integer side to a real. Division
    /// is the exception: it always produces a real quotient, whatever the
    /// operand types, and a zero divisor of either type is an error.
    ///
    /// # Parameters
    /// - `op`: Arithmetic operator to apply.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use basil::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let x = Value::Integer(6);
    /// let y = Value::Integer(7);
    /// let line = 1;
    ///
    /// let product = Context::eval_binary(BinaryOperator::Mul, &x, &y, line).unwrap();
    /// assert_eq!(product, Value::Integer(42));
    ///
    /// let quotient = Context::eval_binary(BinaryOperator::Div, &x, &y, line).unwrap();
    /// assert_eq!(quotient, Value::Real(6.0 / 7.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Integer, Real};

        // Division never stays in integer arithmetic.
        if matches!(op, Div) {
            let left = left.as_real(line)?;
            let right = right.as_real(line)?;

            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }

            return Ok(Real(left / right));
        }

        match (left, right) {
            (Integer(a), Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    Mul => a.checked_mul(*b),
                    Div => unreachable!(),
                };

                result.map(Integer).ok_or(RuntimeError::Overflow { line })
            },
            _ => {
                let a = left.as_real(line)?;
                let b = right.as_real(line)?;

                Ok(Real(match op {
                            Add => a + b,
                            Sub => a - b,
                            Mul => a * b,
                            Div => unreachable!(),
                        }))
            },
        }
    }
}
