//! CLI implementation of Prompter over stdin/stdout

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use numguess_core::{Prompter, Result};
use owo_colors::OwoColorize;

/// Line-based prompter; warnings go to stderr
pub struct CliPrompter<R, W> {
    input: R,
    output: W,
}

impl CliPrompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for CliPrompter<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn display_message(&mut self, message: &str) {
        writeln!(self.output, "{}", message).ok();
    }

    fn display_warning(&mut self, message: &str) {
        eprintln!("{}", message.yellow());
    }
}
