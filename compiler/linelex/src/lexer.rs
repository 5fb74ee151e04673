//! The line-oriented lexer.
//!
//! # Matching
//!
//! The lexer keeps the unconsumed text of the current line, left-trimmed.
//! To produce a token it tries every definition, in registration order,
//! against the start of that text. The first definition that matches wins,
//! even if a later one would match more text, so register specific patterns
//! (keywords) before general ones (identifiers).
//!
//! When the line runs out the next one is read; blank lines are skipped.
//! Ignored definitions consume their match and scanning continues.
//!
//! # Lookahead
//!
//! One token is held as lookahead. It is computed lazily, by the first query
//! after construction or after the previous token was consumed or discarded.
//! A successful `consume` therefore returns its text even when whatever
//! follows it does not lex, and an interactive source is not read past the
//! token just consumed. `discard` computes the lookahead before dropping
//! it, so it always drops the token that follows the last one consumed.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::mem;
use std::path::Path;

use crate::definition::{DefinitionError, TokenDefinition};
use crate::source::LineSource;
use crate::token::Lookahead;
use crate::{LexError, SourcePosition, Token};

/// Regex-driven lexer over a line-based source.
///
/// `K` is the caller's token-kind enumeration and `R` the reader lines are
/// pulled from. The lexer owns `R`; it is dropped once it reports end of
/// input, or together with the lexer.
pub struct Lexer<K, R> {
    source: LineSource<R>,
    definitions: Vec<TokenDefinition<K>>,
    /// Current line; only `line[offset..]` is still unconsumed.
    line: String,
    offset: usize,
    position: SourcePosition,
    lookahead: Lookahead<K>,
}

impl<K, R> Lexer<K, Cursor<R>>
where
    R: AsRef<[u8]>,
{
    /// Lex an in-memory string.
    pub fn from_text(text: R) -> Self {
        Lexer::new(Cursor::new(text))
    }
}

impl<K> Lexer<K, BufReader<File>> {
    /// Lex the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Lexer::new(BufReader::new(file)))
    }
}

impl<K, R> Lexer<K, R> {
    /// Wrap `reader`. Nothing is read until the first token is requested.
    pub fn new(reader: R) -> Self {
        Lexer {
            source: LineSource::new(reader),
            definitions: Vec::new(),
            line: String::new(),
            offset: 0,
            position: SourcePosition::START,
            lookahead: Lookahead::Unprimed,
        }
    }

    /// Register a definition whose matches become tokens of `kind`.
    ///
    /// Definitions are tried in the order they were registered. Registering
    /// after tokens have been requested is not supported.
    pub fn define(&mut self, kind: K, pattern: &str) -> Result<&mut Self, DefinitionError> {
        let definition = TokenDefinition::new(kind, pattern)?;
        Ok(self.push_definition(definition))
    }

    /// Register a definition whose matches are skipped (whitespace, comments).
    pub fn define_ignored(
        &mut self,
        kind: K,
        pattern: &str,
    ) -> Result<&mut Self, DefinitionError> {
        let definition = TokenDefinition::ignored(kind, pattern)?;
        Ok(self.push_definition(definition))
    }

    /// Register an already-built definition.
    pub fn push_definition(&mut self, definition: TokenDefinition<K>) -> &mut Self {
        self.definitions.push(definition);
        self
    }

    /// Registered definitions, in matching order.
    pub fn definitions(&self) -> &[TokenDefinition<K>] {
        &self.definitions
    }

    /// Current position: the line last read and the column reached on it.
    #[inline]
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// Unconsumed text of the current line, without leading whitespace.
    #[inline]
    pub fn remaining(&self) -> &str {
        &self.line[self.offset..]
    }

    /// Whether the reader has reported end of input and been released.
    pub fn is_source_released(&self) -> bool {
        self.source.is_released()
    }

    /// Abandon the rest of the current line, and the lookahead with it.
    ///
    /// This is the way past text that no definition matches.
    pub fn skip_line(&mut self) {
        if !self.remaining().is_empty() {
            tracing::debug!(
                line = self.position.line,
                skipped = self.remaining(),
                "skipping rest of line"
            );
        }
        self.offset = self.line.len();
        if !matches!(self.lookahead, Lookahead::EndOfInput) {
            self.lookahead = Lookahead::Unprimed;
        }
    }

    /// Give back the reader if it has not been released yet.
    ///
    /// Buffered but unconsumed text of the current line is lost.
    pub fn into_source(self) -> Option<R> {
        self.source.into_inner()
    }

    fn trim_start(&mut self) {
        let rest = &self.line[self.offset..];
        self.offset += rest.len() - rest.trim_start().len();
    }
}

impl<K, R> Lexer<K, R>
where
    K: Clone + PartialEq + fmt::Debug,
    R: BufRead,
{
    /// Register `definitions` in iteration order.
    pub fn with_definitions(
        mut self,
        definitions: impl IntoIterator<Item = TokenDefinition<K>>,
    ) -> Self {
        self.definitions.extend(definitions);
        self
    }

    /// The lookahead token, computing it if needed. `None` at end of input.
    pub fn peek(&mut self) -> Result<Option<&Token<K>>, LexError<K>> {
        self.prime()?;
        Ok(self.lookahead.token())
    }

    /// Whether the lookahead is a token of `kind`. Never consumes.
    pub fn check(&mut self, kind: &K) -> Result<bool, LexError<K>> {
        self.check_inner(kind, None)
    }

    /// Whether the lookahead is a token of `kind` whose text is `text`.
    pub fn check_text(&mut self, kind: &K, text: &str) -> Result<bool, LexError<K>> {
        self.check_inner(kind, Some(text))
    }

    /// Consume the lookahead if it is a token of `kind`.
    ///
    /// Returns `false`, and changes nothing, when it is not.
    pub fn try_consume(&mut self, kind: &K) -> Result<bool, LexError<K>> {
        self.try_consume_inner(kind, None)
    }

    /// Consume the lookahead if it is a token of `kind` with text `text`.
    pub fn try_consume_text(&mut self, kind: &K, text: &str) -> Result<bool, LexError<K>> {
        self.try_consume_inner(kind, Some(text))
    }

    /// Consume a token of `kind` and return its text.
    ///
    /// Fails with `UnexpectedToken` when the lookahead is anything else; the
    /// lookahead is left in place for the caller to inspect or discard.
    pub fn consume(&mut self, kind: &K) -> Result<String, LexError<K>> {
        self.consume_inner(kind, None)
    }

    /// Consume a token of `kind` whose text is `text`, returning the text.
    pub fn consume_text(&mut self, kind: &K, text: &str) -> Result<String, LexError<K>> {
        self.consume_inner(kind, Some(text))
    }

    /// Drop the lookahead, whatever it is, without looking at it.
    ///
    /// The lookahead is computed first if needed, so after a `consume` this
    /// drops the token that follows. At end of input it does nothing. After
    /// a `Syntax` error it fails the same way again: no token was produced,
    /// and the unmatched text is still in front of the lexer.
    pub fn discard(&mut self) -> Result<(), LexError<K>> {
        self.prime()?;
        if let Some(token) = self.take_token() {
            tracing::trace!(token = %TokenLabel(token.text()), "discarded");
        }
        Ok(())
    }

    /// Take the lookahead, whatever it is. `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token<K>>, LexError<K>> {
        self.prime()?;
        Ok(self.take_token())
    }

    /// Iterate over the remaining tokens.
    ///
    /// The iterator yields the first error it meets and then stops, so it
    /// never spins on text no definition matches.
    pub fn tokens(&mut self) -> Tokens<'_, K, R> {
        Tokens {
            lexer: self,
            failed: false,
        }
    }

    fn check_inner(&mut self, kind: &K, text: Option<&str>) -> Result<bool, LexError<K>> {
        self.prime()?;
        Ok(self
            .lookahead
            .token()
            .is_some_and(|token| token.kind() == kind && text.map_or(true, |t| token.text() == t)))
    }

    fn try_consume_inner(&mut self, kind: &K, text: Option<&str>) -> Result<bool, LexError<K>> {
        if self.check_inner(kind, text)? {
            self.take_token();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn consume_inner(&mut self, kind: &K, text: Option<&str>) -> Result<String, LexError<K>> {
        if self.check_inner(kind, text)? {
            if let Some(token) = self.take_token() {
                return Ok(token.into_text());
            }
        }
        Err(self.make_unexpected_error(kind, text))
    }

    #[cold]
    #[inline(never)]
    fn make_unexpected_error(&self, kind: &K, text: Option<&str>) -> LexError<K> {
        let found = self.lookahead.token().cloned();
        let position = found.as_ref().map_or(self.position, Token::position);
        LexError::unexpected_token(position, kind.clone(), text, found)
    }

    fn take_token(&mut self) -> Option<Token<K>> {
        match mem::replace(&mut self.lookahead, Lookahead::Unprimed) {
            Lookahead::Token(token) => Some(token),
            Lookahead::EndOfInput => {
                self.lookahead = Lookahead::EndOfInput;
                None
            }
            Lookahead::Unprimed => None,
        }
    }

    fn prime(&mut self) -> Result<(), LexError<K>> {
        if matches!(self.lookahead, Lookahead::Unprimed) {
            self.advance()?;
        }
        Ok(())
    }

    /// Compute the next lookahead.
    ///
    /// On error the slot stays `Unprimed` and the cursor stays in front of
    /// the text that failed.
    fn advance(&mut self) -> Result<(), LexError<K>> {
        self.lookahead = Lookahead::Unprimed;

        while self.fill_buffer()? {
            let rest = self.remaining();
            let Some((definition, matched)) = self
                .definitions
                .iter()
                .find_map(|definition| definition.match_start(rest).map(|m| (definition, m)))
            else {
                return Err(LexError::syntax(self.position, rest));
            };

            let start = self.position;
            let ignored = definition.is_ignored();
            let token = (!ignored).then(|| Token::new(definition.kind().clone(), matched.text, start));

            self.offset += matched.len;
            self.position.advance(matched.chars);
            self.trim_start();

            if let Some(token) = token {
                tracing::trace!(
                    kind = ?token.kind(),
                    text = token.text(),
                    line = start.line,
                    column = start.column,
                    "token"
                );
                self.lookahead = Lookahead::Token(token);
                return Ok(());
            }
            tracing::trace!(line = start.line, column = start.column, "ignored match");
        }

        self.lookahead = Lookahead::EndOfInput;
        Ok(())
    }

    /// Read lines until there is unconsumed text. `false` at end of input.
    ///
    /// Each line read bumps the line number and resets the column, including
    /// a line that fails to decode. At end of input the position stays where
    /// the last line left it.
    fn fill_buffer(&mut self) -> Result<bool, LexError<K>> {
        while self.remaining().is_empty() {
            match self.source.next_line() {
                Ok(Some(line)) => {
                    self.position.next_line();
                    tracing::trace!(line = self.position.line, len = line.len(), "read line");
                    self.line = line;
                    self.offset = 0;
                    self.trim_start();
                }
                Ok(None) => return Ok(false),
                // The bad line's bytes are gone, so it still counts as read.
                Err(error) => {
                    self.position.next_line();
                    self.line.clear();
                    self.offset = 0;
                    return Err(LexError::io(self.position, error));
                }
            }
        }
        Ok(true)
    }
}

impl<K, R> fmt::Debug for Lexer<K, R>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("definitions", &self.definitions.len())
            .field("remaining", &self.remaining())
            .field("position", &self.position)
            .field("lookahead", &self.lookahead)
            .finish_non_exhaustive()
    }
}

/// Iterator over a lexer's remaining tokens. See [`Lexer::tokens`].
pub struct Tokens<'a, K, R> {
    lexer: &'a mut Lexer<K, R>,
    failed: bool,
}

impl<K, R> Iterator for Tokens<'_, K, R>
where
    K: Clone + PartialEq + fmt::Debug,
    R: BufRead,
{
    type Item = Result<Token<K>, LexError<K>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.lexer.next_token() {
            Ok(token) => token.map(Ok),
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }
}

/// Shortens token text in trace output.
struct TokenLabel<'a>(&'a str);

impl fmt::Display for TokenLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX: usize = 32;
        match self.0.char_indices().nth(MAX) {
            Some((cut, _)) => write!(f, "{}...", &self.0[..cut]),
            None => f.write_str(self.0),
        }
    }
}
