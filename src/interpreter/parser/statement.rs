use tracing::trace;

use crate::{
    ast::{OutputContent, Statement},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::Token,
    },
};

impl Parser {
    /// Parses a compound block.
    ///
    /// Grammar: `compound := START statement_list END`
    ///
    /// # Returns
    /// A [`Statement::Compound`] holding the block's statements in source
    /// order.
    pub(crate) fn parse_compound(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&Token::Start)?;
        let statements = self.parse_statement_list()?;
        self.expect(&Token::End)?;

        Ok(Statement::Compound { statements, line })
    }

    /// Parses statements separated by `;`.
    ///
    /// Grammar: `statement_list := statement (SEMI statement)*`
    ///
    /// A trailing `;` is legal; the statement after it is simply empty.
    fn parse_statement_list(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = vec![self.parse_statement()?];

        while self.cur.0.is_kind(&Token::Semi) {
            self.advance()?;
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a nested `START ... END` block.
    /// - an assignment, with or without the `LET` keyword.
    /// - an `OUTPUT`, `INPUT`, `IF`, `WHILE`, `GOTO` or `LABEL` statement.
    /// - the empty statement, produced without consuming anything when the
    ///   statement position is immediately closed by `;`, `END`, `ENDIF`,
    ///   `ENDWHILE` or the end of input.
    ///
    /// Any other leading token is an invalid statement.
    ///
    /// # Returns
    /// A parsed [`Statement`] node.
    fn parse_statement(&mut self) -> ParseResult<Statement> {
        trace!(token = %self.cur.0, line = self.cur.1, "statement");

        match self.cur.0 {
            Token::Start => self.parse_compound(),
            Token::Let => self.parse_let(),
            Token::Identifier(_) => self.parse_assignment(),
            Token::Output => self.parse_output(),
            Token::Input => self.parse_input(),
            Token::If => self.parse_if(),
            Token::While => self.parse_while(),
            Token::Goto => self.parse_goto(),
            Token::Label => self.parse_label(),
            Token::Semi | Token::End | Token::Endif | Token::Endwhile | Token::Eof => {
                Ok(Statement::NoOp)
            },
            _ => Err(ParseError::InvalidStatement { found: self.cur.0.to_string(),
                                                    line:  self.cur.1, }),
        }
    }

    /// Parses a `LET` declaration.
    ///
    /// Grammar: `LET IDENT EQ expr`
    ///
    /// The name is introduced before the right-hand side is parsed, so
    /// `LET x = x + 1` is grammatically fine and only fails at run time if
    /// `x` has no value yet.
    fn parse_let(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&Token::Let)?;
        let (name, _) = self.expect_identifier()?;
        self.expect(&Token::Eq)?;

        self.declared_variables.insert(name.clone());
        let value = self.parse_expression()?;

        Ok(Statement::Assignment { name, value, line })
    }

    /// Parses a bare assignment.
    ///
    /// Grammar: `IDENT EQ expr`
    ///
    /// Behaves exactly like the `LET` form; the keyword is optional.
    fn parse_assignment(&mut self) -> ParseResult<Statement> {
        let (name, line) = self.expect_identifier()?;
        self.expect(&Token::Eq)?;

        self.declared_variables.insert(name.clone());
        let value = self.parse_expression()?;

        Ok(Statement::Assignment { name, value, line })
    }

    /// Parses an `OUTPUT` statement.
    ///
    /// Grammar: `OUTPUT (STRING | expr)`
    fn parse_output(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&Token::Output)?;

        let content = if let (Token::Str(text), _) = &self.cur {
            let text = text.clone();
            self.advance()?;
            OutputContent::Text(text)
        } else {
            OutputContent::Expression(self.parse_expression()?)
        };

        Ok(Statement::Output { content, line })
    }

    /// Parses an `INPUT` statement.
    ///
    /// Grammar: `INPUT IDENT`
    ///
    /// The named variable counts as declared from here on, even though the
    /// statement itself cannot be executed.
    fn parse_input(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&Token::Input)?;
        let (name, _) = self.expect_identifier()?;

        self.declared_variables.insert(name.clone());

        Ok(Statement::Input { name, line })
    }

    /// Parses an `IF` block.
    ///
    /// Grammar: `IF comparison THEN statement_list ENDIF`
    fn parse_if(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&Token::If)?;
        let condition = self.parse_comparison()?;
        self.expect(&Token::Then)?;

        let body = self.parse_statement_list()?;
        self.expect(&Token::Endif)?;

        Ok(Statement::If { condition, body, line })
    }

    /// Parses a `WHILE` block.
    ///
    /// Grammar: `WHILE comparison DO statement_list ENDWHILE`
    fn parse_while(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&Token::While)?;
        let condition = self.parse_comparison()?;
        self.expect(&Token::Do)?;

        let body = self.parse_statement_list()?;
        self.expect(&Token::Endwhile)?;

        Ok(Statement::While { condition, body, line })
    }

    /// Parses a `GOTO` statement.
    ///
    /// Grammar: `GOTO IDENT`
    ///
    /// The target is recorded for resolution after the whole program has
    /// been parsed, so jumping forward to a label declared later is legal.
    fn parse_goto(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&Token::Goto)?;
        let (label, _) = self.expect_identifier()?;

        self.referenced_labels.push((label.clone(), line));

        Ok(Statement::Goto { label, line })
    }

    /// Parses a `LABEL` declaration.
    ///
    /// Grammar: `LABEL IDENT`
    ///
    /// # Errors
    /// Returns [`ParseError::DuplicateLabel`] if the name was already
    /// declared.
    fn parse_label(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&Token::Label)?;
        let (name, _) = self.expect_identifier()?;

        if !self.declared_labels.insert(name.clone()) {
            return Err(ParseError::DuplicateLabel { name, line });
        }

        Ok(Statement::Label { name, line })
    }
}
