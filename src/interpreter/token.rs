/// A single lexeme of the language.
///
/// Literal variants carry their decoded payload; everything else is
/// identified by the variant alone.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Integer(i64),
    Real(f64),
    Str(String),
    Bool(bool),
    Identifier(String),

    Start,
    End,
    Let,
    Output,
    Input,
    If,
    Then,
    Endif,
    While,
    Do,
    Endwhile,
    Goto,
    Label,
    For,
    To,
    Next,
    Incr,
    Decr,

    Eq,
    EqEq,
    NotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,
    Plus,
    Minus,
    Asterisk,
    Slash,
    LParen,
    RParen,
    Semi,
    Dot,

    Eof,
}

impl Token {
    /// Looks up a word in the keyword table.
    ///
    /// # Parameters
    /// - `text`: The word to look up. Keywords are case-sensitive.
    ///
    /// # Returns
    /// The keyword token, or [`None`] if the word is an ordinary identifier.
    /// `TRUE` and `FALSE` map to [`Token::Bool`].
    #[must_use]
    pub fn keyword(text: &str) -> Option<Self> {
        let token = match text {
            "START" => Self::Start,
            "END" => Self::End,
            "LET" => Self::Let,
            "OUTPUT" => Self::Output,
            "INPUT" => Self::Input,
            "IF" => Self::If,
            "THEN" => Self::Then,
            "ENDIF" => Self::Endif,
            "WHILE" => Self::While,
            "DO" => Self::Do,
            "ENDWHILE" => Self::Endwhile,
            "GOTO" => Self::Goto,
            "LABEL" => Self::Label,
            "FOR" => Self::For,
            "TO" => Self::To,
            "NEXT" => Self::Next,
            "INCR" => Self::Incr,
            "DECR" => Self::Decr,
            "TRUE" => Self::Bool(true),
            "FALSE" => Self::Bool(false),
            _ => return None,
        };

        Some(token)
    }

    /// The uppercase kind label used in diagnostics.
    ///
    /// Both number variants report `NUMBER`; payloads are ignored.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Integer(_) | Self::Real(_) => "NUMBER",
            Self::Str(_) => "STRING",
            Self::Bool(_) => "BOOLEAN",
            Self::Identifier(_) => "IDENT",

            Self::Start => "START",
            Self::End => "END",
            Self::Let => "LET",
            Self::Output => "OUTPUT",
            Self::Input => "INPUT",
            Self::If => "IF",
            Self::Then => "THEN",
            Self::Endif => "ENDIF",
            Self::While => "WHILE",
            Self::Do => "DO",
            Self::Endwhile => "ENDWHILE",
            Self::Goto => "GOTO",
            Self::Label => "LABEL",
            Self::For => "FOR",
            Self::To => "TO",
            Self::Next => "NEXT",
            Self::Incr => "INCR",
            Self::Decr => "DECR",

            Self::Eq => "EQ",
            Self::EqEq => "EQEQ",
            Self::NotEq => "NOTEQ",
            Self::Gt => "GT",
            Self::GtEq => "GTEQ",
            Self::Lt => "LT",
            Self::LtEq => "LTEQ",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Asterisk => "ASTERISK",
            Self::Slash => "SLASH",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Semi => "SEMI",
            Self::Dot => "DOT",

            Self::Eof => "EOF",
        }
    }

    /// Checks whether two tokens are of the same kind, ignoring payloads.
    ///
    /// # Example
    /// ```
    /// use basil::interpreter::token::Token;
    ///
    /// assert!(Token::Integer(1).is_kind(&Token::Integer(2)));
    /// assert!(!Token::Integer(1).is_kind(&Token::Real(1.0)));
    /// ```
    #[must_use]
    pub fn is_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "NUMBER({value})"),
            Self::Real(value) => write!(f, "NUMBER({value})"),
            Self::Str(text) => write!(f, "STRING({text:?})"),
            Self::Bool(value) => write!(f, "BOOLEAN({value})"),
            Self::Identifier(name) => write!(f, "IDENT({name})"),
            _ => write!(f, "{}", self.kind_name()),
        }
    }
}
