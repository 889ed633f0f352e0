use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{Expr, OutputContent, Statement},
    error::RuntimeError,
    interpreter::value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. Runtime errors are recoverable:
/// they travel back to the caller and never terminate the process.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state for one run: the variable
/// environment and everything the program has written with `OUTPUT`. A
/// fresh `Context` is created per run; nothing is global or shared between
/// runs.
pub struct Context {
    /// Variable bindings, name to current value.
    pub environment: HashMap<String, Value>,
    /// Everything the program has emitted with `OUTPUT`, in order.
    pub outputs:     Vec<String>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with an empty environment and no
    /// collected output.
    #[must_use]
    pub fn new() -> Self {
        Self { environment: HashMap::new(),
               outputs:     Vec::new(), }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Evaluation is a post-order walk: operands are computed before their
    /// operator is applied. Literals keep the integer/real distinction they
    /// carried in the source.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`].
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] for reads of unbound variables, division
    /// by zero, and integer overflow.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.into()),
            Expr::Variable { name, line } => {
                self.environment
                    .get(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                   line: *line, })
            },
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
        }
    }

    /// Executes a single statement.
    ///
    /// Statements produce no value; their effects are bindings in the
    /// environment and lines pushed onto [`Context::outputs`]. Compound
    /// blocks run their statements in order and stop at the first error.
    ///
    /// `IF`, `WHILE`, `GOTO` and `INPUT` parse but cannot be executed;
    /// reaching one is a recoverable
    /// [`RuntimeError::UnsupportedStatement`].
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] from any evaluated expression, or
    /// [`RuntimeError::UnsupportedStatement`] for the recognized but
    /// non-executable statement forms.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Compound { statements, .. } => {
                for statement in statements {
                    self.eval_statement(statement)?;
                }
                Ok(())
            },
            Statement::Assignment { name, value, line } => {
                let value = self.eval(value)?;
                debug!(line = *line, variable = %name, value = %value, "assignment");
                self.environment.insert(name.clone(), value);
                Ok(())
            },
            Statement::Output { content, .. } => {
                let text = match content {
                    OutputContent::Text(text) => text.clone(),
                    OutputContent::Expression(expr) => self.eval(expr)?.to_string(),
                };
                self.outputs.push(text);
                Ok(())
            },
            Statement::Label { .. } | Statement::NoOp => Ok(()),
            Statement::Input { line, .. } => Err(Self::unsupported("INPUT", *line)),
            Statement::If { line, .. } => Err(Self::unsupported("IF", *line)),
            Statement::While { line, .. } => Err(Self::unsupported("WHILE", *line)),
            Statement::Goto { line, .. } => Err(Self::unsupported("GOTO", *line)),
        }
    }

    fn unsupported(construct: &str, line: usize) -> RuntimeError {
        RuntimeError::UnsupportedStatement { construct: construct.to_string(),
                                             line }
    }
}
