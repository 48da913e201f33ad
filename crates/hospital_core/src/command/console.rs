//! Line-oriented prompt/answer console over any reader and writers.

use super::{CommandError, CommandResult};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Interactive console used by command handlers.
///
/// Reports go to `output`, prompts go to `prompts`; the two may be the same
/// terminal stream or separate ones. Generic over all streams so handlers
/// run the same against a terminal and in-memory buffers.
pub struct Console<R, W, P> {
    input: R,
    output: W,
    prompts: P,
}

impl<R: BufRead, W: Write, P: Write> Console<R, W, P> {
    pub fn new(input: R, output: W, prompts: P) -> Self {
        Self {
            input,
            output,
            prompts,
        }
    }

    /// Writes one prompt line and flushes so it is visible before blocking on input.
    pub fn prompt(&mut self, message: &str) -> CommandResult<()> {
        writeln!(self.prompts, "{message}")?;
        self.prompts.flush()?;
        Ok(())
    }

    /// Reads the next line, trimmed. End of input or a blank line is
    /// `CommandError::EmptyInput`.
    pub fn read_field(&mut self, field: &'static str) -> CommandResult<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let value = line.trim();
        if value.is_empty() {
            return Err(CommandError::EmptyInput(field));
        }
        Ok(value.to_string())
    }

    /// Reads the next line and parses it as `T`.
    pub fn read_parsed<T: FromStr>(&mut self, field: &'static str) -> CommandResult<T> {
        let value = self.read_field(field)?;
        value
            .parse::<T>()
            .map_err(|_| CommandError::Parse { field, value })
    }

    /// Writes a rendered report followed by a newline.
    pub fn write_block(&mut self, block: &str) -> CommandResult<()> {
        writeln!(self.output, "{block}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Returns `(output, prompts)`.
    pub fn into_parts(self) -> (W, P) {
        (self.output, self.prompts)
    }
}
