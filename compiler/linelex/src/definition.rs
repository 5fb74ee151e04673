//! Token definitions: an anchored pattern, a kind tag and an ignore flag.
//!
//! Patterns are compiled as `\A(?:pattern)`, so they can only match at the
//! very start of the text they are run against. The wrapping group is
//! non-capturing and leaves the caller's group numbering intact.
//!
//! Every pattern must carry at least one capture group. The text of group 1
//! (not the whole match) becomes the token's text. Patterns without a group
//! are rejected when the definition is built, never at match time.

use regex::Regex;
use thiserror::Error;

/// Error building a [`TokenDefinition`].
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("invalid token pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("token pattern `{pattern}` has no capture group; the token text is taken from group 1")]
    MissingCaptureGroup { pattern: String },
}

/// A registered rule used to recognize tokens.
#[derive(Clone, Debug)]
pub struct TokenDefinition<K> {
    kind: K,
    pattern: String,
    regex: Regex,
    ignored: bool,
}

/// A successful anchored match of one definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DefinitionMatch {
    /// Byte length of the whole match.
    pub len: usize,
    /// Character length of the whole match.
    pub chars: usize,
    /// Text of capture group 1 (empty when the group did not participate).
    pub text: String,
}

impl<K> TokenDefinition<K> {
    /// Build a definition whose matches become tokens of `kind`.
    pub fn new(kind: K, pattern: &str) -> Result<Self, DefinitionError> {
        let anchored = format!(r"\A(?:{pattern})");
        let regex = Regex::new(&anchored).map_err(|source| DefinitionError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;

        // Group 0 is the whole match.
        if regex.captures_len() < 2 {
            return Err(DefinitionError::MissingCaptureGroup {
                pattern: pattern.to_owned(),
            });
        }

        Ok(TokenDefinition {
            kind,
            pattern: pattern.to_owned(),
            regex,
            ignored: false,
        })
    }

    /// Build a definition whose matches are recognized and skipped.
    pub fn ignored(kind: K, pattern: &str) -> Result<Self, DefinitionError> {
        let mut definition = Self::new(kind, pattern)?;
        definition.ignored = true;
        Ok(definition)
    }

    #[inline]
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// The pattern as registered, without the anchor.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[inline]
    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// Match against the start of `text`.
    ///
    /// A zero-length match counts as no match: it would leave the lexer
    /// where it started.
    pub(crate) fn match_start(&self, text: &str) -> Option<DefinitionMatch> {
        let captures = self.regex.captures(text)?;
        let whole = captures.get(0)?;
        if whole.is_empty() {
            return None;
        }
        let text = captures.get(1).map_or("", |group| group.as_str());
        Some(DefinitionMatch {
            len: whole.len(),
            chars: whole.as_str().chars().count(),
            text: text.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests;
