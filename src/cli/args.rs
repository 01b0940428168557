use clap::{ArgAction, Parser, Subcommand};

use crate::language::LANGUAGE_CODES;

#[derive(Parser, Debug)]
#[command(name = "fanout")]
#[command(about = "Send prompts to several LLM providers and print every response")]
#[command(version)]
pub struct Args {
    /// Response language for every prompt [default: en]
    #[arg(short = 'l', long = "lang", value_parser = LANGUAGE_CODES)]
    pub lang: Option<String>,

    /// Comma-separated providers (overrides LLM_PROVIDERS)
    #[arg(short = 'p', long)]
    pub providers: Option<String>,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug diagnostics on stderr (repeatable)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported providers and whether their credentials are set
    Providers,
    /// List supported language codes
    Languages,
}
