//! Errors raised while producing or consuming tokens.
//!
//! Every error carries the [`SourcePosition`] it happened at. Callers match
//! on [`LexErrorKind`] to pick a recovery strategy:
//!
//! - [`LexErrorKind::UnexpectedToken`] leaves the offending token as the
//!   lookahead. `discard()` it (or consume it with a different call) and
//!   carry on.
//! - [`LexErrorKind::Syntax`] means no definition matched. The lexer has not
//!   moved past the bad text, so asking again fails the same way, and
//!   `discard()` does not help because no token was produced. Use
//!   `skip_line()` to abandon the rest of the line.
//! - [`LexErrorKind::Io`] means the source could not be read.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::{SourcePosition, Token};

/// A lexer failure at a known position.
///
/// Displays as `{position}: {kind}`. The kind is part of the message, not
/// the error chain; `source()` is the underlying I/O error, if any.
#[derive(Debug)]
pub struct LexError<K: fmt::Debug> {
    pub position: SourcePosition,
    pub kind: LexErrorKind<K>,
}

/// What went wrong.
#[derive(Debug, Error)]
pub enum LexErrorKind<K: fmt::Debug> {
    /// No registered definition matches at the start of the remaining text.
    #[error("no token definition matches `{remainder}`")]
    Syntax { remainder: String },

    /// The lookahead is not what a `consume` call required.
    #[error("expected {}, found {}", Expected(.expected, .expected_text.as_deref()), Found(.found.as_ref()))]
    UnexpectedToken {
        expected: K,
        expected_text: Option<String>,
        /// The actual lookahead; `None` at end of input.
        found: Option<Token<K>>,
    },

    #[error("failed to read source line")]
    Io(#[source] io::Error),
}

impl<K: fmt::Debug> LexError<K> {
    pub(crate) fn syntax(position: SourcePosition, remainder: &str) -> Self {
        LexError {
            position,
            kind: LexErrorKind::Syntax {
                remainder: remainder.to_owned(),
            },
        }
    }

    pub(crate) fn unexpected_token(
        position: SourcePosition,
        expected: K,
        expected_text: Option<&str>,
        found: Option<Token<K>>,
    ) -> Self {
        LexError {
            position,
            kind: LexErrorKind::UnexpectedToken {
                expected,
                expected_text: expected_text.map(str::to_owned),
                found,
            },
        }
    }

    pub(crate) fn io(position: SourcePosition, error: io::Error) -> Self {
        LexError {
            position,
            kind: LexErrorKind::Io(error),
        }
    }

    #[inline]
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    #[inline]
    pub fn kind(&self) -> &LexErrorKind<K> {
        &self.kind
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self.kind, LexErrorKind::Syntax { .. })
    }

    pub fn is_unexpected_token(&self) -> bool {
        matches!(self.kind, LexErrorKind::UnexpectedToken { .. })
    }
}

impl<K: fmt::Debug> fmt::Display for LexError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.kind)
    }
}

impl<K: fmt::Debug> std::error::Error for LexError<K> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            LexErrorKind::Io(error) => Some(error),
            LexErrorKind::Syntax { .. } | LexErrorKind::UnexpectedToken { .. } => None,
        }
    }
}

/// Renders the expectation of a failed `consume`.
struct Expected<'a, K>(&'a K, Option<&'a str>);

impl<K: fmt::Debug> fmt::Display for Expected<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.1 {
            Some(text) => write!(f, "{:?} `{text}`", self.0),
            None => write!(f, "{:?}", self.0),
        }
    }
}

/// Renders the lookahead that was found instead.
struct Found<'a, K>(Option<&'a Token<K>>);

impl<K: fmt::Debug> fmt::Display for Found<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(token) => fmt::Display::fmt(token, f),
            None => f.write_str("end of input"),
        }
    }
}

#[cfg(test)]
mod tests;
