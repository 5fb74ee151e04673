//! Tokens and the lexer's lookahead slot.

use std::fmt;

use crate::SourcePosition;

/// A classified unit of text produced by matching a definition.
///
/// `K` is the caller's token-kind enumeration. The lexer only ever compares
/// kinds for equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<K> {
    kind: K,
    text: String,
    position: SourcePosition,
}

impl<K> Token<K> {
    pub fn new(kind: K, text: impl Into<String>, position: SourcePosition) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }

    /// The kind tag of the definition that produced this token.
    #[inline]
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// Text of the definition's first capture group.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Position of the first character of the match.
    #[inline]
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// Take the captured text, dropping the rest of the token.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl<K: fmt::Debug> fmt::Display for Token<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} `{}`", self.kind, self.text)
    }
}

/// State of the one-token lookahead slot.
///
/// `Unprimed` means the next token has not been computed yet, either because
/// nothing has been asked of the lexer or because the previous token was just
/// consumed or discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Lookahead<K> {
    Unprimed,
    Token(Token<K>),
    EndOfInput,
}

impl<K> Lookahead<K> {
    pub(crate) fn token(&self) -> Option<&Token<K>> {
        match self {
            Lookahead::Token(token) => Some(token),
            Lookahead::Unprimed | Lookahead::EndOfInput => None,
        }
    }
}
