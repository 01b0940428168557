//! # fanout - Multi-provider prompt CLI
//!
//! `fanout` sends each of a list of prompts to every configured LLM provider
//! and prints the responses, grouped by prompt.
//!
//! ## Quick Start
//!
//! ```bash
//! export OPENAI_API_KEY=sk-... ANTHROPIC_API_KEY=sk-ant-...
//! export LLM_PROVIDERS=openai,anthropic
//!
//! # Enter prompts interactively
//! fanout
//!
//! # Pipe prompts, ask for Hebrew responses
//! echo "Hello, World" | fanout --lang he
//! ```
//!
//! ## Configuration
//!
//! Optional settings live in `~/.config/fanout/config.toml`:
//!
//! ```toml
//! [fanout]
//! providers = "openai,anthropic"
//! lang = "en"
//!
//! [providers.openai]
//! api_key = "sk-..."
//! ```
//!
//! `--providers` beats `LLM_PROVIDERS`, which beats the config file.
//! Provider credentials are read from the environment first.

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and precedence resolution.
pub mod config;

/// Sequential prompt dispatch.
pub mod dispatch;

/// Error taxonomy and exit codes.
pub mod error;

/// Prompt input from the terminal or a pipe.
pub mod input;

/// Supported language codes and instructions.
pub mod language;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// LLM provider clients, registry and loader.
pub mod provider;

/// Terminal UI helpers (colors, prompt cancellation).
pub mod ui;
