#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;

#[test]
fn match_takes_first_capture_group() {
    let def = TokenDefinition::new("num", r"(\d+)px").unwrap();
    let m = def.match_start("12px rest").unwrap();
    assert_eq!(m.text, "12");
    assert_eq!(m.len, 4);
    assert_eq!(m.chars, 4);
}

#[test]
fn match_is_anchored_at_start() {
    let def = TokenDefinition::new("num", r"(\d+)").unwrap();
    assert!(def.match_start("abc 123").is_none());
}

#[test]
fn anchor_survives_alternation() {
    // Without the wrapping group, `\Aa|(b)` would let `b` match anywhere.
    let def = TokenDefinition::new("ab", r"(a)|(b)").unwrap();
    assert!(def.match_start("xb").is_none());
    assert_eq!(def.match_start("a").unwrap().text, "a");
}

#[test]
fn non_participating_group_yields_empty_text() {
    let def = TokenDefinition::new("kw", r"(x)?y").unwrap();
    let m = def.match_start("y").unwrap();
    assert_eq!(m.text, "");
    assert_eq!(m.len, 1);
}

#[test]
fn zero_length_match_is_no_match() {
    let def = TokenDefinition::new("digits", r"(\d*)").unwrap();
    assert!(def.match_start("abc").is_none());
    assert_eq!(def.match_start("42").unwrap().text, "42");
}

#[test]
fn chars_counts_unicode_scalars() {
    let def = TokenDefinition::new("word", r"(\w+)").unwrap();
    let m = def.match_start("héllo").unwrap();
    assert_eq!(m.chars, 5);
    assert_eq!(m.len, "héllo".len());
}

#[test]
fn missing_capture_group_is_rejected() {
    let err = TokenDefinition::new("num", r"\d+").unwrap_err();
    assert!(matches!(err, DefinitionError::MissingCaptureGroup { ref pattern } if pattern == r"\d+"));
}

#[test]
fn non_capturing_group_does_not_count() {
    let err = TokenDefinition::new("num", r"(?:\d+)").unwrap_err();
    assert!(matches!(err, DefinitionError::MissingCaptureGroup { .. }));
}

#[test]
fn invalid_pattern_is_rejected() {
    let err = TokenDefinition::new("bad", r"(\d+").unwrap_err();
    assert!(matches!(err, DefinitionError::InvalidPattern { .. }));
    assert!(err.to_string().contains(r"(\d+"));
}

#[test]
fn ignored_constructor_sets_flag() {
    let def = TokenDefinition::ignored("ws", r"(\s+)").unwrap();
    assert!(def.is_ignored());
    assert_eq!(def.pattern(), r"(\s+)");
    assert_eq!(*def.kind(), "ws");
    assert!(!TokenDefinition::new("ws", r"(\s+)").unwrap().is_ignored());
}
