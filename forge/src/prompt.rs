use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use forge_core::error::{ForgeError, Result};

/// Line-oriented input seam so the interactive prompt can be driven
/// without a terminal.
pub trait InputSource {
    /// Display `prompt` and read one line. `None` means input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Interactive input from the process stdin.
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        io::stdout()
            .flush()
            .map_err(|e| ForgeError::Internal(format!("Failed to flush stdout: {e}")))?;

        let mut input = String::new();
        let bytes_read = io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| ForgeError::Internal(format!("Failed to read input: {e}")))?;

        if bytes_read == 0 {
            return Ok(None);
        }
        Ok(Some(input))
    }
}

/// Scripted input for tests; yields its lines in order, then reports
/// closed input.
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
