//! The read-evaluate-print loop.

use std::io::{BufRead, Write};

use linelex::{LexErrorKind, Lexer};

use crate::eval::{evaluate, parse_number, Operator};
use crate::{calculator_lexer, CalcError, CalcToken};

/// Settings for a [`Session`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Written before each new line of input is read. `None` for no prompt.
    pub prompt: Option<String>,
}

impl SessionConfig {
    pub fn interactive() -> Self {
        SessionConfig {
            prompt: Some("> ".to_owned()),
        }
    }
}

/// Counts reported when a session ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub evaluated: usize,
    pub errors: usize,
}

enum Step {
    Continue,
    Exit,
}

/// One calculator session: reads expressions from `R`, writes to `W`.
pub struct Session<R, W> {
    lexer: Lexer<CalcToken, R>,
    out: W,
    config: SessionConfig,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, config: SessionConfig) -> Result<Self, CalcError> {
        Ok(Session {
            lexer: calculator_lexer(input)?,
            out,
            config,
            summary: SessionSummary::default(),
        })
    }

    /// Run until `exit`, end of input, or an unrecoverable error.
    pub fn run(&mut self) -> Result<SessionSummary, CalcError> {
        loop {
            self.prompt()?;
            match self.step() {
                Ok(Step::Continue) => {}
                Ok(Step::Exit) => break,
                Err(error) if error.is_recoverable() => {
                    self.summary.errors += 1;
                    writeln!(self.out, "error: {error}").map_err(CalcError::Output)?;
                    self.recover(&error)?;
                }
                Err(error) => return Err(error),
            }
        }
        tracing::debug!(
            evaluated = self.summary.evaluated,
            errors = self.summary.errors,
            "session finished"
        );
        Ok(self.summary)
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    fn step(&mut self) -> Result<Step, CalcError> {
        if self.lexer.peek()?.is_none() || self.lexer.check_text(&CalcToken::Reserved, "exit")? {
            return Ok(Step::Exit);
        }

        let lhs = parse_number(&self.lexer.consume(&CalcToken::Decimal)?)?;
        let op: Operator = self.lexer.consume(&CalcToken::Operator)?.parse()?;
        let rhs = parse_number(&self.lexer.consume(&CalcToken::Decimal)?)?;

        let result = evaluate(lhs, op, rhs)?;
        tracing::debug!(lhs, %op, rhs, result, "evaluated");
        self.summary.evaluated += 1;
        writeln!(self.out, "{result}").map_err(CalcError::Output)?;
        Ok(Step::Continue)
    }

    /// Get the lexer past whatever caused `error`.
    fn recover(&mut self, error: &CalcError) -> Result<(), CalcError> {
        let CalcError::Lex(error) = error else {
            return Ok(());
        };
        match error.kind() {
            LexErrorKind::UnexpectedToken { .. } => self.lexer.discard()?,
            // Discarding cannot get past text that never became a token.
            LexErrorKind::Syntax { .. } => self.lexer.skip_line(),
            LexErrorKind::Io(_) => {}
        }
        Ok(())
    }

    /// Prompt only when the next token has to come from a new line.
    fn prompt(&mut self) -> Result<(), CalcError> {
        if let Some(prompt) = &self.config.prompt {
            if self.lexer.remaining().is_empty() && !self.lexer.is_source_released() {
                write!(self.out, "{prompt}").map_err(CalcError::Output)?;
                self.out.flush().map_err(CalcError::Output)?;
            }
        }
        Ok(())
    }
}
