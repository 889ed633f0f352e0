use basil::{
    error::LexError,
    interpreter::{lexer::Lexer, token::Token},
};

fn lex_all(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let (token, _) =
            lexer.next_token().unwrap_or_else(|e| panic!("Lexing {source:?} failed: {e}"));
        let done = token == Token::Eof;
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}

fn lex_error(source: &str) -> LexError {
    let mut lexer = Lexer::new(source);

    loop {
        match lexer.next_token() {
            Ok((Token::Eof, _)) => panic!("Lexing {source:?} succeeded but was expected to fail"),
            Ok(_) => {},
            Err(e) => return e,
        }
    }
}

#[test]
fn keywords_operators_and_identifiers() {
    assert_eq!(lex_all("IF+-123 foo*THEN/"),
               vec![Token::If,
                    Token::Plus,
                    Token::Minus,
                    Token::Integer(123),
                    Token::Identifier("foo".to_string()),
                    Token::Asterisk,
                    Token::Then,
                    Token::Slash,
                    Token::Eof]);
}

#[test]
fn integer_and_real_literals() {
    assert_eq!(lex_all("12.34 0.5 7"),
               vec![Token::Real(12.34), Token::Real(0.5), Token::Integer(7), Token::Eof]);
}

#[test]
fn malformed_and_oversized_numbers() {
    assert!(matches!(lex_error("12."), LexError::MalformedNumber { line: 1 }));
    assert!(matches!(lex_error("3.x"), LexError::MalformedNumber { line: 1 }));
    assert!(matches!(lex_error("9223372036854775808"), LexError::NumberTooLarge { line: 1 }));
}

#[test]
fn dot_is_its_own_token_between_numbers() {
    assert_eq!(lex_all("1 . 2"),
               vec![Token::Integer(1), Token::Dot, Token::Integer(2), Token::Eof]);
}

#[test]
fn string_literals() {
    assert_eq!(lex_all("\"hello world\""),
               vec![Token::Str("hello world".to_string()), Token::Eof]);
}

#[test]
fn broken_string_literals() {
    assert!(matches!(lex_error("\"oops"), LexError::UnterminatedString { line: 1 }));
    assert!(matches!(lex_error("\"a\tb\""),
                     LexError::IllegalStringCharacter { found: '\t', line: 1 }));
    assert!(matches!(lex_error("\"50%\""),
                     LexError::IllegalStringCharacter { found: '%', line: 1 }));
}

#[test]
fn comparison_and_assignment_operators() {
    assert_eq!(lex_all("== != < <= > >= ="),
               vec![Token::EqEq,
                    Token::NotEq,
                    Token::Lt,
                    Token::LtEq,
                    Token::Gt,
                    Token::GtEq,
                    Token::Eq,
                    Token::Eof]);
}

#[test]
fn lone_bang_is_rejected() {
    assert!(matches!(lex_error("1 ! 2"), LexError::ExpectedNotEqual { line: 1 }));
}

#[test]
fn comments_run_to_end_of_line() {
    assert_eq!(lex_all("1 // two 2 ;\n3"),
               vec![Token::Integer(1), Token::Integer(3), Token::Eof]);
    assert_eq!(lex_all("1 // trailing"), vec![Token::Integer(1), Token::Eof]);
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(lex_all("WHILE while"),
               vec![Token::While, Token::Identifier("while".to_string()), Token::Eof]);
}

#[test]
fn boolean_literals() {
    assert_eq!(lex_all("TRUE FALSE"),
               vec![Token::Bool(true), Token::Bool(false), Token::Eof]);
}

#[test]
fn loop_keywords_are_reserved() {
    assert_eq!(lex_all("FOR TO NEXT INCR DECR"),
               vec![Token::For, Token::To, Token::Next, Token::Incr, Token::Decr, Token::Eof]);
}

#[test]
fn line_numbers_advance_on_newlines() {
    let mut lexer = Lexer::new("x\n  y\n\nz");

    assert_eq!(lexer.next_token().unwrap(), (Token::Identifier("x".to_string()), 1));
    assert_eq!(lexer.next_token().unwrap(), (Token::Identifier("y".to_string()), 2));
    assert_eq!(lexer.next_token().unwrap(), (Token::Identifier("z".to_string()), 4));
    assert_eq!(lexer.next_token().unwrap(), (Token::Eof, 4));
}

#[test]
fn end_of_input_is_idempotent() {
    let mut lexer = Lexer::new("7");

    assert_eq!(lexer.next_token().unwrap(), (Token::Integer(7), 1));
    assert_eq!(lexer.next_token().unwrap(), (Token::Eof, 1));
    assert_eq!(lexer.next_token().unwrap(), (Token::Eof, 1));
}

#[test]
fn unknown_characters_are_reported() {
    let e = lex_error("1\n2\n&");

    assert!(matches!(e, LexError::UnknownCharacter { found: '&', line: 3 }));
    assert_eq!(e.to_string(), "Error on line 3: Unknown character '&'.");
}
