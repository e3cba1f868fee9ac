//! Interactive question/answer prompting over standard streams.
//!
//! All questions are a single blocking line read; answers are trimmed and
//! empty input falls back to the question's default. There are no retries
//! and no validation.

use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Asks questions on `output` and reads one-line answers from `input`.
///
/// Generic over the streams so tests can drive a full run from an in-memory
/// buffer; production code wraps locked stdin/stdout.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::StdoutLock<'static>> {
    /// A prompter over the process's standard streams.
    #[must_use]
    pub fn from_stdio() -> Self {
        Prompter {
            input: io::stdin().lock(),
            output: io::stdout().lock(),
        }
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Ask a free-text question, showing the current value as the default.
    ///
    /// Displays `question (default): `, reads one line, and trims it.
    /// Empty input (including EOF) returns the default unchanged.
    ///
    /// # Errors
    /// Returns any error from writing the prompt or reading the answer.
    pub fn ask(&mut self, question: &str, default: &str) -> io::Result<String> {
        let answer = self.read_answer(&format!("{question} ({default}): "))?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Ask a yes/no question defaulting to "no".
    ///
    /// Only `y`/`yes` (case-insensitive) count as yes; anything else,
    /// including empty input, is no. Used for the destructive opt-ins.
    ///
    /// # Errors
    /// Returns any error from writing the prompt or reading the answer.
    pub fn ask_yes_no(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.read_answer(&format!("{question} (y/N): "))?;
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }

    /// Ask for confirmation, defaulting to "proceed".
    ///
    /// Only `n`/`no` (case-insensitive) decline; anything else, including
    /// empty input, confirms.
    ///
    /// # Errors
    /// Returns any error from writing the prompt or reading the answer.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.read_answer(&format!("{question} (Y/n): "))?;
        Ok(!matches!(answer.to_lowercase().as_str(), "n" | "no"))
    }

    /// Print a prompt (no trailing newline), then read and trim one line.
    fn read_answer(&mut self, prompt_text: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt_text.cyan())?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}
