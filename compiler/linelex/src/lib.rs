//! Regex-driven, line-oriented lexer with one token of lookahead.
//!
//! A [`Lexer`] is built over any [`BufRead`](std::io::BufRead) source and an
//! ordered list of [`TokenDefinition`]s. Callers pull tokens on demand:
//!
//! ```text
//! check(kind)         -> is the lookahead a `kind`?        (never consumes)
//! try_consume(kind)   -> consume it if so, report whether it was
//! consume(kind)       -> consume it or fail with UnexpectedToken
//! discard()           -> drop the lookahead unconditionally
//! ```
//!
//! Each comes in a `_text` variant that also requires the token's text.
//!
//! Definitions are tried in registration order and the first one matching
//! at the start of the remaining line wins. Tokens never span lines.
//!
//! ```
//! use linelex::Lexer;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Kind {
//!     Number,
//!     Op,
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut lexer = Lexer::from_text("1 + 2\n- 3");
//! lexer.define(Kind::Number, r"(\d+)")?;
//! lexer.define(Kind::Op, r"(\+|-)")?;
//!
//! assert_eq!(lexer.consume(&Kind::Number)?, "1");
//! assert!(lexer.try_consume_text(&Kind::Op, "+")?);
//! assert_eq!(lexer.consume(&Kind::Number)?, "2");
//!
//! // Drops the `-` that follows.
//! lexer.discard()?;
//! assert_eq!(lexer.consume(&Kind::Number)?, "3");
//! assert!(lexer.peek()?.is_none());
//! # Ok(())
//! # }
//! ```

mod definition;
mod lex_error;
mod lexer;
mod position;
mod source;
mod token;

pub use definition::{DefinitionError, TokenDefinition};
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{Lexer, Tokens};
pub use position::SourcePosition;
pub use token::Token;
