//! Console prompts used by `verbump init`
//!
//! `Prompt` is the seam between the init sequence and the console. A real
//! terminal gets dialoguer widgets; piped input gets a plain line reader.

use crate::error::PromptError;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use std::io::{self, BufRead, IsTerminal, Write};

/// Source of answers for the init prompts
pub trait Prompt {
    /// Asks for one line of text; the answer is returned trimmed and may be empty
    fn text(&mut self, label: &str) -> Result<String, PromptError>;

    /// Asks a yes/no question; an empty answer selects `default`
    fn confirm(&mut self, label: &str, default: bool) -> Result<bool, PromptError>;

    /// Shows informational text before a question
    fn note(&mut self, text: &str) -> Result<(), PromptError>;
}

/// Prompts rendered with dialoguer on an interactive terminal
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        TerminalPrompt {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn text(&mut self, label: &str) -> Result<String, PromptError> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer.trim().to_string())
    }

    fn confirm(&mut self, label: &str, default: bool) -> Result<bool, PromptError> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(label)
            .default(default)
            .wait_for_newline(true)
            .interact()?)
    }

    fn note(&mut self, text: &str) -> Result<(), PromptError> {
        eprintln!("{}", text);
        Ok(())
    }
}

/// Line-oriented prompts over any reader/writer pair
///
/// Each question is written to `output` and answered by one line of `input`.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LinePrompt { input, output }
    }

    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed(question.trim_end().to_string()));
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn text(&mut self, label: &str) -> Result<String, PromptError> {
        self.ask(&format!("{}: ", label))
    }

    fn confirm(&mut self, label: &str, default: bool) -> Result<bool, PromptError> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            let answer = self.ask(&format!("{} {} ", label, hint))?;
            match answer.to_ascii_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer 'y' or 'n'.")?,
            }
        }
    }

    fn note(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}

/// Picks terminal widgets when stdin is a terminal, plain lines otherwise
///
/// Questions go to stderr so stdout stays clean.
pub fn console_prompt() -> Box<dyn Prompt> {
    if io::stdin().is_terminal() {
        Box::new(TerminalPrompt::new())
    } else {
        Box::new(LinePrompt::new(io::stdin().lock(), io::stderr()))
    }
}
