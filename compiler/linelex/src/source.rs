//! Line-at-a-time reader that owns the lexer's input.
//!
//! The reader is held in an `Option` and dropped the moment it reports end
//! of input. Whatever is still held when the `LineSource` itself is dropped
//! goes with it, so the handle is released exactly once on every path.

use std::io::{self, BufRead};

#[derive(Debug)]
pub(crate) struct LineSource<R> {
    reader: Option<R>,
    scratch: String,
}

impl<R> LineSource<R> {
    pub(crate) fn new(reader: R) -> Self {
        LineSource {
            reader: Some(reader),
            scratch: String::new(),
        }
    }

    pub(crate) fn is_released(&self) -> bool {
        self.reader.is_none()
    }

    /// Hand the reader back if it has not been released yet.
    pub(crate) fn into_inner(self) -> Option<R> {
        self.reader
    }
}

impl<R: BufRead> LineSource<R> {

    /// Read the next line without its `\n` / `\r\n` terminator.
    ///
    /// Returns `Ok(None)` once the reader is exhausted; the reader has been
    /// released by then and later calls keep returning `Ok(None)`.
    pub(crate) fn next_line(&mut self) -> io::Result<Option<String>> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };

        self.scratch.clear();
        if reader.read_line(&mut self.scratch)? == 0 {
            self.release();
            return Ok(None);
        }

        if self.scratch.ends_with('\n') {
            self.scratch.pop();
            if self.scratch.ends_with('\r') {
                self.scratch.pop();
            }
        }
        Ok(Some(self.scratch.clone()))
    }

    fn release(&mut self) {
        if self.reader.take().is_some() {
            tracing::debug!("line source exhausted, reader released");
        }
    }
}
