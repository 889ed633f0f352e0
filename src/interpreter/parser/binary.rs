use crate::{
    ast::{BinaryOperator, ComparisonOperator, Condition, Expr},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::Token,
    },
};

impl Parser {
    /// Parses an additive expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level and recursively descends through the
    /// precedence hierarchy. Both additive and multiplicative operators are
    /// left-associative.
    ///
    /// Grammar: `expr := term (("+" | "-") term)*`
    ///
    /// # Returns
    /// The parsed expression node.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        loop {
            if let Some(op) = token_to_binary_operator(&self.cur.0)
               && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            {
                let line = self.cur.1;
                self.advance()?;
                let right = self.parse_term()?;
                left = Expr::BinaryOp { left: Box::new(left),
                                        op,
                                        right: Box::new(right),
                                        line };
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses a multiplicative expression.
    ///
    /// Grammar: `term := factor (("*" | "/") factor)*`
    ///
    /// # Returns
    /// A binary expression tree combining factor-level nodes.
    fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        loop {
            if let Some(op) = token_to_binary_operator(&self.cur.0)
               && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
            {
                let line = self.cur.1;
                self.advance()?;
                let right = self.parse_factor()?;
                left = Expr::BinaryOp { left: Box::new(left),
                                        op,
                                        right: Box::new(right),
                                        line };
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses a comparison.
    ///
    /// Grammar: `comparison := expr ((EQEQ | NOTEQ | GT | GTEQ | LT | LTEQ) expr)+`
    ///
    /// At least one comparison operator is required; further operator and
    /// operand pairs may chain after it (`0 < x == 1`) and are collected
    /// left to right.
    ///
    /// # Returns
    /// A [`Condition`] with the leftmost operand and all chained pairs.
    ///
    /// # Errors
    /// Returns [`ParseError::ExpectedComparison`] if no comparison operator
    /// follows the first expression.
    pub(crate) fn parse_comparison(&mut self) -> ParseResult<Condition> {
        let line = self.cur.1;
        let left = self.parse_expression()?;

        let mut rest = Vec::new();
        while let Some(op) = token_to_comparison_operator(&self.cur.0) {
            self.advance()?;
            rest.push((op, self.parse_expression()?));
        }

        if rest.is_empty() {
            return Err(ParseError::ExpectedComparison { found: self.cur.0.to_string(),
                                                        line:  self.cur.1, });
        }

        Ok(Condition { left, rest, line })
    }
}

/// Maps a token to its corresponding binary arithmetic operator.
///
/// Returns `None` for all tokens that are not `+`, `-`, `*` or `/`.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use basil::{
///     ast::BinaryOperator,
///     interpreter::{parser::binary::token_to_binary_operator, token::Token},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Semi), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Asterisk => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Maps a token to its corresponding comparison operator.
///
/// Returns `None` for all tokens that are not `==`, `!=`, `>`, `>=`, `<` or
/// `<=`.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(ComparisonOperator)` if the token corresponds to a comparison
/// operator, otherwise `None`.
#[must_use]
pub const fn token_to_comparison_operator(token: &Token) -> Option<ComparisonOperator> {
    match token {
        Token::EqEq => Some(ComparisonOperator::Equal),
        Token::NotEq => Some(ComparisonOperator::NotEqual),
        Token::Gt => Some(ComparisonOperator::Greater),
        Token::GtEq => Some(ComparisonOperator::GreaterEqual),
        Token::Lt => Some(ComparisonOperator::Less),
        Token::LtEq => Some(ComparisonOperator::LessEqual),
        _ => None,
    }
}
