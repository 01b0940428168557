use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FanoutError;
use crate::language::{DEFAULT_LANGUAGE, validate_language};
use crate::paths;
use crate::provider::{CredentialSource, EnvCredentials, REGISTRY};
use crate::ui::Style;

/// Environment variable holding the comma-separated provider list.
pub const LLM_PROVIDERS_ENV: &str = "LLM_PROVIDERS";

/// Default settings in the `[fanout]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FanoutConfig {
    /// Comma-separated provider list (e.g. `"openai,anthropic"`).
    pub providers: Option<String>,
    /// Default language code.
    pub lang: Option<String>,
}

/// Per-provider settings under `[providers.<name>]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderConfig {
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/fanout/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub fanout: FanoutConfig,
    /// Provider settings keyed by registry name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

impl CredentialSource for ConfigFile {
    /// Prefers the environment variable, falling back to `api_key` in the file.
    fn credential(&self, provider: &str, env_var: &str) -> Option<String> {
        EnvCredentials.credential(provider, env_var).or_else(|| {
            self.providers
                .get(provider)
                .and_then(|p| p.api_key.clone())
                .filter(|key| !key.is_empty())
        })
    }
}

/// Where the provider list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderSource {
    Cli,
    Env,
    File,
    Unset,
}

impl fmt::Display for ProviderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self {
            Self::Cli => "--providers",
            Self::Env => LLM_PROVIDERS_ENV,
            Self::File => "config file",
            Self::Unset => "unset",
        };
        f.write_str(source)
    }
}

/// Resolved configuration after merging CLI arguments, environment and file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Raw provider list, possibly empty.
    pub provider_list: String,
    pub provider_source: ProviderSource,
    /// Language code passed to every `generate` call.
    pub language: String,
}

/// Options for resolving configuration.
///
/// Values here take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// `--providers` override.
    pub providers: Option<String>,
    /// Value of `LLM_PROVIDERS`.
    pub env_providers: Option<String>,
    /// `--lang` override.
    pub lang: Option<String>,
}

impl ResolveOptions {
    /// Builds options from CLI values, reading `LLM_PROVIDERS` from the environment.
    pub fn from_env(providers: Option<String>, lang: Option<String>) -> Self {
        Self {
            providers,
            env_providers: std::env::var(LLM_PROVIDERS_ENV).ok(),
            lang,
        }
    }
}

/// Resolves configuration by merging overrides with config file settings.
///
/// The provider list comes from the first non-blank of `--providers`,
/// `LLM_PROVIDERS` and the config file. An empty result is left for the
/// loader to reject.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig, FanoutError> {
    let candidates = [
        (options.providers.as_deref(), ProviderSource::Cli),
        (options.env_providers.as_deref(), ProviderSource::Env),
        (config_file.fanout.providers.as_deref(), ProviderSource::File),
    ];
    let (provider_list, provider_source) = candidates
        .into_iter()
        .find_map(|(value, source)| {
            value
                .filter(|list| !list.trim().is_empty())
                .map(|list| (list.to_string(), source))
        })
        .unwrap_or((String::new(), ProviderSource::Unset));

    let language = options
        .lang
        .as_ref()
        .or(config_file.fanout.lang.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    validate_language(&language)?;

    for name in config_file.providers.keys() {
        if !REGISTRY.iter().any(|entry| entry.name == name.as_str()) {
            crate::warn!(
                "{} Ignoring [providers.{name}] in config file: not a supported provider",
                Style::warning("Warning:")
            );
        }
    }

    Ok(ResolvedConfig {
        provider_list,
        provider_source,
        language,
    })
}

/// Manages loading configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/fanout/config.toml`
    /// or `~/.config/fanout/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a manager for an explicit config file path.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    /// Loads the config file, or the default configuration if none exists.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
