use crate::{error::LexError, interpreter::token::Token};

/// Result type used by the lexer.
///
/// All lexing functions return either a value of type `T` or a [`LexError`]
/// describing the failure. Lex errors are fatal: the first one aborts the run.
pub type LexResult<T> = Result<T, LexError>;

/// A single-pass lexer over source text.
///
/// The lexer walks the source with a cursor and at most one character of
/// lookahead, handing out one token per [`Lexer::next_token`] call. Whitespace
/// and `//` comments are skipped; newlines only advance the line counter and
/// never terminate anything.
pub struct Lexer {
    chars: Vec<char>,
    pos:   usize,
    line:  usize,
}

impl Lexer {
    /// Creates a lexer positioned at the start of `source`.
    ///
    /// Line counting is 1-based.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { chars: source.chars().collect(),
               pos:   0,
               line:  1, }
    }

    /// Produces the next token together with the line it started on.
    ///
    /// Once the cursor has passed the final character, every further call
    /// returns [`Token::Eof`].
    ///
    /// # Returns
    /// The `(token, line)` pair for the next lexeme in the source.
    ///
    /// # Errors
    /// Returns a [`LexError`] for characters outside the language, malformed
    /// or oversized number literals, illegal or unterminated strings, and a
    /// `!` that is not part of `!=`.
    ///
    /// # Example
    /// ```
    /// use basil::interpreter::{lexer::Lexer, token::Token};
    ///
    /// let mut lexer = Lexer::new("1 + 2");
    ///
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Integer(1), 1));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Plus, 1));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Integer(2), 1));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Eof, 1));
    /// ```
    pub fn next_token(&mut self) -> LexResult<(Token, usize)> {
        self.skip_insignificant();

        let line = self.line;
        let Some(c) = self.current() else {
            return Ok((Token::Eof, line));
        };

        if c.is_ascii_digit() {
            return Ok((self.lex_number()?, line));
        }
        if c.is_alphabetic() {
            return Ok((self.lex_word(), line));
        }
        if c == '"' {
            return Ok((self.lex_string()?, line));
        }

        self.advance();
        let token = match c {
            '=' if self.current() == Some('=') => {
                self.advance();
                Token::EqEq
            },
            '=' => Token::Eq,
            '<' if self.current() == Some('=') => {
                self.advance();
                Token::LtEq
            },
            '<' => Token::Lt,
            '>' if self.current() == Some('=') => {
                self.advance();
                Token::GtEq
            },
            '>' => Token::Gt,
            '!' if self.current() == Some('=') => {
                self.advance();
                Token::NotEq
            },
            '!' => return Err(LexError::ExpectedNotEqual { line }),
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Asterisk,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            ';' => Token::Semi,
            '.' => Token::Dot,
            _ => return Err(LexError::UnknownCharacter { found: c, line }),
        };

        Ok((token, line))
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Skips whitespace and `//` comments, counting newlines as it goes.
    fn skip_insignificant(&mut self) {
        while let Some(c) = self.current() {
            match c {
                ' ' | '\t' | '\r' => self.advance(),
                '\n' => {
                    self.line += 1;
                    self.advance();
                },
                '/' if self.peek() == Some('/') => {
                    while let Some(c) = self.current()
                          && c != '\n'
                    {
                        self.advance();
                    }
                },
                _ => break,
            }
        }
    }

    /// Lexes an integer or real literal starting at the cursor.
    ///
    /// A `.` after the integer part must be followed by at least one digit,
    /// so `12.` is malformed rather than an integer plus a dot.
    fn lex_number(&mut self) -> LexResult<Token> {
        let line = self.line;
        let mut text = String::new();

        while let Some(c) = self.current()
              && c.is_ascii_digit()
        {
            text.push(c);
            self.advance();
        }

        if self.current() == Some('.') {
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Err(LexError::MalformedNumber { line });
            }

            text.push('.');
            self.advance();
            while let Some(c) = self.current()
                  && c.is_ascii_digit()
            {
                text.push(c);
                self.advance();
            }

            let value = text.parse()
                            .map_err(|_| LexError::MalformedNumber { line })?;
            return Ok(Token::Real(value));
        }

        let value = text.parse()
                        .map_err(|_| LexError::NumberTooLarge { line })?;
        Ok(Token::Integer(value))
    }

    /// Lexes a keyword or identifier starting at the cursor.
    fn lex_word(&mut self) -> Token {
        let mut text = String::new();

        while let Some(c) = self.current()
              && c.is_alphanumeric()
        {
            text.push(c);
            self.advance();
        }

        match Token::keyword(&text) {
            Some(keyword) => keyword,
            None => Token::Identifier(text),
        }
    }

    /// Lexes a string literal starting at the opening quote.
    ///
    /// There are no escape sequences; raw tabs, newlines, carriage returns,
    /// backslashes and `%` are rejected outright.
    fn lex_string(&mut self) -> LexResult<Token> {
        let line = self.line;
        self.advance();

        let mut text = String::new();
        loop {
            match self.current() {
                None => return Err(LexError::UnterminatedString { line }),
                Some('"') => {
                    self.advance();
                    return Ok(Token::Str(text));
                },
                Some(c @ ('\r' | '\n' | '\t' | '\\' | '%')) => {
                    return Err(LexError::IllegalStringCharacter { found: c, line });
                },
                Some(c) => {
                    text.push(c);
                    self.advance();
                },
            }
        }
    }
}
