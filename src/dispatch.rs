//! Sequential prompt × provider dispatch.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::provider::LlmProvider;

/// Notice printed instead of any response when no prompts were given.
pub const NO_PROMPTS_NOTICE: &str = "No prompts provided.";

/// Sends every prompt to every provider and writes the responses to `out`.
///
/// Prompts are handled in input order, and for each prompt the providers in
/// load order. Each prompt gets a blank line and a `Prompt: <text>` header.
pub fn run<W: Write>(
    out: &mut W,
    prompts: &[String],
    providers: &[Box<dyn LlmProvider>],
    language: &str,
) -> Result<()> {
    if prompts.is_empty() {
        writeln!(out, "{NO_PROMPTS_NOTICE}").context("Failed to write output")?;
        return Ok(());
    }

    for prompt in prompts {
        writeln!(out, "\nPrompt: {prompt}").context("Failed to write output")?;
        for provider in providers {
            debug!(provider = provider.name(), language, "generating response");
            let response = provider.generate(prompt, language);
            writeln!(out, "{response}").context("Failed to write output")?;
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}
