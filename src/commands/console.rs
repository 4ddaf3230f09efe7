//! Line-oriented console over any reader/writer pair

use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Error type for console interaction
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The input stream reached end-of-file
    #[error("input stream closed")]
    Closed,
    /// A read was interrupted by the operating system
    #[error("input interrupted")]
    Interrupted,
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl ConsoleError {
    /// Whether the player walked away rather than something breaking
    #[must_use]
    pub const fn is_interrupt(&self) -> bool {
        matches!(self, Self::Closed | Self::Interrupted)
    }
}

/// Prompting console for the game
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` (without newline) and read one trimmed line
    ///
    /// Bytes that are not valid UTF-8 become replacement characters, so a garbled line
    /// reaches the caller as ordinary malformed input.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Closed` at end of input, `ConsoleError::Interrupted` if the
    /// read was interrupted, and `ConsoleError::Io` for any other I/O failure.
    pub fn prompt(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        match self.input.read_until(b'\n', &mut line) {
            Ok(0) => Err(ConsoleError::Closed),
            Ok(_) => Ok(String::from_utf8_lossy(&line).trim().to_string()),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Err(ConsoleError::Interrupted),
            Err(e) => Err(e.into()),
        }
    }

    /// Sink for rendered output
    pub const fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
