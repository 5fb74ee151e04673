use std::error::Error as _;
use std::io;

use super::*;

#[derive(Clone, Debug, PartialEq)]
enum Kind {
    Number,
    Plus,
}

#[test]
fn syntax_error_message_carries_position_and_remainder() {
    let err = LexError::<Kind>::syntax(SourcePosition::new(1, 2), "$ 11");
    assert!(err.is_syntax());
    assert!(!err.is_unexpected_token());
    assert_eq!(
        err.to_string(),
        "line 1, column 3: no token definition matches `$ 11`"
    );
}

#[test]
fn unexpected_token_names_found_token() {
    let found = Token::new(Kind::Plus, "+", SourcePosition::new(2, 4));
    let err = LexError::unexpected_token(found.position(), Kind::Number, None, Some(found));
    assert!(err.is_unexpected_token());
    assert_eq!(
        err.to_string(),
        "line 2, column 5: expected Number, found Plus `+`"
    );
}

#[test]
fn unexpected_token_with_expected_text() {
    let found = Token::new(Kind::Number, "7", SourcePosition::new(1, 0));
    let err = LexError::unexpected_token(found.position(), Kind::Number, Some("42"), Some(found));
    assert_eq!(
        err.to_string(),
        "line 1, column 1: expected Number `42`, found Number `7`"
    );
}

#[test]
fn unexpected_end_of_input() {
    let err = LexError::unexpected_token(SourcePosition::new(3, 9), Kind::Plus, None, None);
    assert_eq!(
        err.to_string(),
        "line 3, column 10: expected Plus, found end of input"
    );
    match err.kind() {
        LexErrorKind::UnexpectedToken { found, .. } => assert!(found.is_none()),
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn io_error_keeps_its_source() {
    let err = LexError::<Kind>::io(
        SourcePosition::new(4, 0),
        io::Error::new(io::ErrorKind::InvalidData, "bad utf-8"),
    );
    assert_eq!(err.position(), SourcePosition::new(4, 0));
    assert_eq!(
        err.to_string(),
        "line 4, column 1: failed to read source line"
    );
    let source = err.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("bad utf-8"));
}

#[test]
fn kind_is_not_repeated_in_error_chain() {
    let err = LexError::<Kind>::syntax(SourcePosition::new(1, 2), "$ 11");
    assert!(err.source().is_none());

    let found = Token::new(Kind::Plus, "+", SourcePosition::new(1, 0));
    let err = LexError::unexpected_token(found.position(), Kind::Number, None, Some(found));
    assert!(err.source().is_none());
}
