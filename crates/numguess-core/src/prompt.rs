//! Console prompting seam.
//!
//! The game never touches stdin/stdout directly; it talks to a [`Prompter`].

use crate::error::{Error, Result};

/// Line-oriented console used by the game
pub trait Prompter {
    /// Show `prompt` and read one line.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    fn display_message(&mut self, message: &str);

    fn display_warning(&mut self, message: &str);
}

/// Prompt until `parse` accepts the input.
///
/// Rejected input shows `invalid_message` and prompts again. End of input
/// becomes [`Error::InputClosed`].
pub fn prompt_until<P, T, F>(
    prompter: &mut P,
    prompt: &str,
    invalid_message: &str,
    mut parse: F,
) -> Result<T>
where
    P: Prompter + ?Sized,
    F: FnMut(&str) -> Option<T>,
{
    loop {
        let line = prompter.read_line(prompt)?.ok_or(Error::InputClosed)?;
        match parse(&line) {
            Some(value) => return Ok(value),
            None => prompter.display_warning(invalid_message),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::Prompter;
    use crate::error::Result;

    /// Prompter fed from a fixed list of input lines
    #[derive(Debug, Default)]
    pub struct ScriptedPrompter {
        inputs: VecDeque<String>,
        pub prompts: Vec<String>,
        pub messages: Vec<String>,
        pub warnings: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new<I, S>(inputs: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                inputs: inputs.into_iter().map(Into::into).collect(),
                ..Default::default()
            }
        }

        pub fn output(&self) -> String {
            self.messages.join("\n")
        }
    }

    impl Prompter for ScriptedPrompter {
        fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
            self.prompts.push(prompt.to_string());
            Ok(self.inputs.pop_front())
        }

        fn display_message(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }

        fn display_warning(&mut self, message: &str) {
            self.warnings.push(message.to_string());
        }
    }
}
