//! Configuration file management and precedence resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, FanoutConfig, LLM_PROVIDERS_ENV, ProviderConfig, ProviderSource,
    ResolveOptions, ResolvedConfig, resolve_config,
};
