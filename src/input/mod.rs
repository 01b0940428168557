//! Prompt input from the terminal or a pipe.

mod reader;

pub use reader::{PROMPT_LABEL, PromptReader, parse_prompts};
