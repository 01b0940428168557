use anyhow::Result;
use std::io;
use tracing::debug;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::dispatch;
use crate::input::PromptReader;
use crate::provider::load_providers;
use crate::ui;

pub struct RunOptions {
    pub lang: Option<String>,
    pub providers: Option<String>,
}

/// Loads the configured providers, reads prompts and prints every response.
///
/// Providers are built before any input is read, so configuration errors
/// surface without waiting on stdin.
pub fn run_fanout(options: RunOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;
    debug!(path = %manager.config_path().display(), "loaded config");

    let resolve_options = ResolveOptions::from_env(options.providers, options.lang);
    let config = resolve_config(&resolve_options, &config_file)?;
    debug!(
        source = %config.provider_source,
        list = %config.provider_list,
        language = %config.language,
        "resolved configuration"
    );

    let providers = load_providers(&config.provider_list, &config_file)?;
    crate::status!(
        "Loaded {} provider(s): {}",
        providers.len(),
        providers
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    ui::handle_prompt_cancellation(|| {
        let prompts = PromptReader::read()?;
        let mut stdout = io::stdout().lock();
        dispatch::run(&mut stdout, &prompts, &providers, &config.language)
    })
}
