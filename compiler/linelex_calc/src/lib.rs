//! Line-at-a-time arithmetic REPL built on `linelex`.
//!
//! Each expression is `number operator number`. The session prints the
//! result of every expression and stops at the reserved word `exit` or at
//! end of input.
//!
//! Errors are printed and the session carries on:
//! - an unexpected token is discarded,
//! - text no definition matches is skipped up to the end of its line,
//! - evaluation errors (division by zero) just drop the expression.
//!
//! Only I/O failures end a session early.

mod error;
mod eval;
mod session;

pub use error::CalcError;
pub use eval::{evaluate, Operator};
pub use session::{Session, SessionConfig, SessionSummary};

use std::io::BufRead;

use linelex::{DefinitionError, Lexer};

/// Token kinds of the calculator language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CalcToken {
    Decimal,
    Operator,
    Reserved,
}

/// Build a lexer over `reader` with the calculator's definitions.
pub fn calculator_lexer<R: BufRead>(reader: R) -> Result<Lexer<CalcToken, R>, DefinitionError> {
    let mut lexer = Lexer::new(reader);
    lexer.define(CalcToken::Decimal, r"(\d+(?:\.\d+)?)")?;
    lexer.define(CalcToken::Operator, r"(\+|-|\*|\/)")?;
    lexer.define(CalcToken::Reserved, r"(exit)")?;
    Ok(lexer)
}
