//! LLM provider clients, their registry, and the loader that builds them.

use std::fmt;

use crate::error::FanoutError;
use crate::language::apply_instruction;

mod anthropic;
mod loader;
mod openai;
mod registry;

pub use anthropic::AnthropicClient;
pub use loader::{load_providers, parse_provider_list};
pub use openai::OpenAiClient;
pub use registry::{ProviderConstructor, ProviderEntry, REGISTRY, resolve};

/// Trait implemented by concrete LLM providers.
pub trait LlmProvider: fmt::Debug {
    /// Human-readable provider name used in response tags.
    fn name(&self) -> &'static str;

    /// Produces a response for `prompt` in the given language.
    fn generate(&self, prompt: &str, language: &str) -> String;
}

/// Source of provider credentials.
pub trait CredentialSource {
    /// Returns the credential for `provider`, normally read from `env_var`.
    fn credential(&self, provider: &str, env_var: &str) -> Option<String>;
}

/// Credentials taken from the process environment only.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn credential(&self, _provider: &str, env_var: &str) -> Option<String> {
        std::env::var(env_var).ok().filter(|key| !key.is_empty())
    }
}

/// A non-empty API key. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Fetches the key for a registry entry, failing if it is absent or empty.
    pub fn fetch(
        source: &dyn CredentialSource,
        provider: &'static str,
        env_var: &'static str,
    ) -> Result<Self, FanoutError> {
        source
            .credential(provider, env_var)
            .filter(|key| !key.is_empty())
            .map(Self)
            .ok_or(FanoutError::MissingCredential { provider, env_var })
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Formats the placeholder response shared by every client.
fn render_response(provider: &str, prompt: &str, language: &str) -> String {
    let prompt = apply_instruction(prompt, language);
    format!("[{provider}][{language}] Response to: {prompt}")
}
