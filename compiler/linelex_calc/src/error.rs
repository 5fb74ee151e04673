//! Calculator errors.

use std::io;
use std::num::ParseFloatError;

use linelex::{DefinitionError, LexError};
use thiserror::Error;

use crate::CalcToken;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError<CalcToken>),

    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error("`{text}` is not a number")]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("unknown operator `{0}`")]
    UnknownOperator(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("failed to write output")]
    Output(#[source] io::Error),
}

impl CalcError {
    /// Whether the session can carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        match self {
            CalcError::Lex(error) => !matches!(error.kind(), linelex::LexErrorKind::Io(_)),
            CalcError::InvalidNumber { .. }
            | CalcError::UnknownOperator(_)
            | CalcError::DivisionByZero => true,
            CalcError::Definition(_) | CalcError::Output(_) => false,
        }
    }
}
