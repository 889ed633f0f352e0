use std::collections::HashSet;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{lexer::Lexer, token::Token},
};

/// Result type used by the parser.
///
/// All parsing functions return either a value of type `T` or a
/// [`ParseError`] describing the failure. Parse errors are fatal: the first
/// one aborts the run.
pub type ParseResult<T> = Result<T, ParseError>;

/// A streaming recursive-descent parser.
///
/// The parser owns its [`Lexer`] and pulls tokens on demand, holding the
/// current token plus a single token of lookahead. It never backtracks:
/// every grammar decision is made from those two tokens.
///
/// Two entry points exist. [`Parser::parse_program`] parses a complete
/// `START ... END` program; [`Parser::parse_single_expression`] parses one
/// expression and requires the input to end there.
pub struct Parser {
    pub(crate) lexer:              Lexer,
    /// The token under consideration, with the line it started on.
    pub(crate) cur:                (Token, usize),
    /// One token of lookahead.
    pub(crate) peek:               (Token, usize),
    /// Names introduced by `LET`, `INPUT` or assignment so far.
    pub(crate) declared_variables: HashSet<String>,
    /// Labels declared by `LABEL` so far.
    pub(crate) declared_labels:    HashSet<String>,
    /// `GOTO` targets in source order, with the referencing line.
    pub(crate) referenced_labels:  Vec<(String, usize)>,
}

impl Parser {
    /// Creates a parser over `lexer`, priming the token window.
    ///
    /// # Errors
    /// Returns a wrapped [`LexError`](crate::error::LexError) if either of
    /// the first two tokens fails to lex.
    pub fn new(mut lexer: Lexer) -> ParseResult<Self> {
        let cur = lexer.next_token()?;
        let peek = lexer.next_token()?;

        Ok(Self { lexer,
                  cur,
                  peek,
                  declared_variables: HashSet::new(),
                  declared_labels:    HashSet::new(),
                  referenced_labels:  Vec::new(), })
    }

    /// Parses a complete program.
    ///
    /// Grammar: `program := compound EOF`
    ///
    /// After the closing `END` the input must be exhausted, and every `GOTO`
    /// target must have been declared by a `LABEL` statement somewhere in
    /// the program.
    ///
    /// # Returns
    /// The root [`Statement::Compound`] node.
    ///
    /// # Errors
    /// Returns a [`ParseError`] if the program violates the grammar, if
    /// tokens remain after the closing `END`, or if a `GOTO` references an
    /// undeclared label.
    pub fn parse_program(mut self) -> ParseResult<Statement> {
        let program = self.parse_compound()?;
        self.expect(&Token::Eof)?;
        self.check_goto_targets()?;

        Ok(program)
    }

    /// Parses a standalone expression.
    ///
    /// Grammar: `expr EOF`
    ///
    /// # Returns
    /// The parsed expression node.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedTrailingTokens`] if anything follows
    /// the expression.
    pub fn parse_single_expression(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;

        if !self.cur.0.is_kind(&Token::Eof) {
            return Err(ParseError::UnexpectedTrailingTokens { found: self.cur.0.to_string(),
                                                              line:  self.cur.1, });
        }

        Ok(expr)
    }

    /// Shifts the token window one token forward.
    ///
    /// Past the end of input the lexer keeps yielding [`Token::Eof`], so
    /// advancing is always safe.
    pub(crate) fn advance(&mut self) -> ParseResult<()> {
        let pulled = self.lexer.next_token()?;
        self.cur = std::mem::replace(&mut self.peek, pulled);

        Ok(())
    }

    /// Consumes the current token if it matches `kind`, ignoring payloads.
    ///
    /// This is the parser's token-consumption primitive; nearly every
    /// grammar rule goes through it.
    ///
    /// # Parameters
    /// - `kind`: A token of the expected kind. Its payload is irrelevant.
    ///
    /// # Returns
    /// The line number of the consumed token.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] naming the expected kind and
    /// the token actually found.
    pub(crate) fn expect(&mut self, kind: &Token) -> ParseResult<usize> {
        if self.cur.0.is_kind(kind) {
            let line = self.cur.1;
            self.advance()?;
            return Ok(line);
        }

        Err(ParseError::UnexpectedToken { expected: kind.kind_name().to_string(),
                                          found:    self.cur.0.to_string(),
                                          line:     self.cur.1, })
    }

    /// Consumes the current token if it is an identifier.
    ///
    /// # Returns
    /// The identifier's name and line number.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] if the current token is not
    /// an identifier.
    pub(crate) fn expect_identifier(&mut self) -> ParseResult<(String, usize)> {
        if let (Token::Identifier(name), line) = &self.cur {
            let name = name.clone();
            let line = *line;
            self.advance()?;
            return Ok((name, line));
        }

        Err(ParseError::UnexpectedToken { expected: "IDENT".to_string(),
                                          found:    self.cur.0.to_string(),
                                          line:     self.cur.1, })
    }

    /// Verifies that every `GOTO` references a declared label.
    ///
    /// Resolution is deferred until the whole program has been parsed, so
    /// forward jumps are fine. The error carries the line of the first
    /// unresolved reference in source order.
    fn check_goto_targets(&self) -> ParseResult<()> {
        for (label, line) in &self.referenced_labels {
            if !self.declared_labels.contains(label) {
                return Err(ParseError::UndefinedLabel { name: label.clone(),
                                                        line: *line, });
            }
        }

        Ok(())
    }
}
