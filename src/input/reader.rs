use anyhow::{Context, Result, bail};
use inquire::Text;
use std::io::{self, BufRead, IsTerminal};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Label shown when asking for prompts on a terminal.
pub const PROMPT_LABEL: &str = "Enter prompts (comma-separated):";

pub struct PromptReader;

impl PromptReader {
    /// Reads one line of comma-separated prompts from stdin.
    ///
    /// On a terminal this goes through an interactive `inquire` prompt, whose
    /// cancellation surfaces as an [`inquire::InquireError`].
    pub fn read() -> Result<Vec<String>> {
        let line = if io::stdin().is_terminal() {
            Self::read_interactive()?
        } else {
            Self::read_line(io::stdin().lock())?
        };
        Ok(parse_prompts(&line))
    }

    fn read_interactive() -> Result<String> {
        let line = Text::new(PROMPT_LABEL)
            .with_help_message("e.g. Hello, World  (Ctrl+C to quit)")
            .prompt()?;
        Ok(line)
    }

    /// Reads a single line, rejecting anything over the size limit.
    fn read_line(reader: impl BufRead) -> Result<String> {
        let mut line = String::new();
        reader
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_line(&mut line)
            .context("Failed to read prompts from stdin")?;

        if line.len() > MAX_INPUT_SIZE {
            bail!(
                "Error: Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                 Consider splitting the prompts into smaller batches.",
                line.len() as f64 / 1024.0 / 1024.0
            );
        }

        Ok(line)
    }
}

/// Splits a line on commas, trimming each prompt and dropping empty ones.
pub fn parse_prompts(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|prompt| !prompt.is_empty())
        .map(ToString::to_string)
        .collect()
}
