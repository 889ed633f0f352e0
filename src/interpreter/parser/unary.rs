use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::Token,
    },
};

impl Parser {
    /// Parses a factor.
    ///
    /// Supports the prefix sign operators `+` and `-`, which are
    /// right-associative: `- - x` is parsed as `-(-x)`, one node per sign.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | NUMBER
    ///             | "(" expr ")"
    ///             | IDENT
    /// ```
    /// # Returns
    /// An [`Expr::UnaryOp`] or a primary expression.
    pub(crate) fn parse_factor(&mut self) -> ParseResult<Expr> {
        let op = match self.cur.0 {
            Token::Plus => UnaryOperator::Plus,
            Token::Minus => UnaryOperator::Minus,
            _ => return self.parse_primary(),
        };

        let line = self.cur.1;
        self.advance()?;
        let expr = self.parse_factor()?;

        Ok(Expr::UnaryOp { op,
                           expr: Box::new(expr),
                           line })
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Primary expressions are number literals, parenthesized expressions
    /// and variable references. A variable must have been introduced by an
    /// earlier `LET`, `INPUT` or assignment before it can be read.
    ///
    /// # Returns
    /// The parsed primary [`Expr`].
    ///
    /// # Errors
    /// - [`ParseError::UndeclaredVariable`] for an identifier no statement
    ///   has introduced yet.
    /// - [`ParseError::ExpectedExpression`] for any other token.
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let (token, line) = (self.cur.0.clone(), self.cur.1);

        match token {
            Token::Integer(n) => {
                self.advance()?;
                Ok(Expr::Literal { value: n.into(),
                                   line })
            },
            Token::Real(r) => {
                self.advance()?;
                Ok(Expr::Literal { value: r.into(),
                                   line })
            },
            Token::LParen => self.parse_grouping(),
            Token::Identifier(name) => {
                if !self.declared_variables.contains(&name) {
                    return Err(ParseError::UndeclaredVariable { name, line });
                }

                self.advance()?;
                Ok(Expr::Variable { name, line })
            },
            _ => Err(ParseError::ExpectedExpression { found: token.to_string(),
                                                      line }),
        }
    }

    /// Parses a parenthesized expression.
    ///
    /// Grammar: `grouping := "(" expr ")"`
    ///
    /// # Returns
    /// The inner expression as-is (no wrapper node).
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::LParen)?;
        let expr = self.parse_expression()?;
        self.expect(&Token::RParen)?;

        Ok(expr)
    }
}
