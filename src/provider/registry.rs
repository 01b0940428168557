//! Static name-to-constructor table for the supported providers.

use super::{AnthropicClient, CredentialSource, LlmProvider, OpenAiClient};
use crate::error::FanoutError;

/// Builds a boxed provider from a credential source.
pub type ProviderConstructor =
    fn(&dyn CredentialSource) -> Result<Box<dyn LlmProvider>, FanoutError>;

/// One registered provider.
#[derive(Debug, Clone, Copy)]
pub struct ProviderEntry {
    /// Lowercase lookup name (e.g. `openai`).
    pub name: &'static str,
    /// Name used in response tags.
    pub display_name: &'static str,
    /// Environment variable holding the credential.
    pub api_key_env: &'static str,
    pub construct: ProviderConstructor,
}

/// All supported providers, in listing order.
pub const REGISTRY: &[ProviderEntry] = &[
    ProviderEntry {
        name: "openai",
        display_name: OpenAiClient::NAME,
        api_key_env: OpenAiClient::API_KEY_ENV,
        construct: build_openai,
    },
    ProviderEntry {
        name: "anthropic",
        display_name: AnthropicClient::NAME,
        api_key_env: AnthropicClient::API_KEY_ENV,
        construct: build_anthropic,
    },
];

fn build_openai(credentials: &dyn CredentialSource) -> Result<Box<dyn LlmProvider>, FanoutError> {
    Ok(Box::new(OpenAiClient::new(credentials)?))
}

fn build_anthropic(
    credentials: &dyn CredentialSource,
) -> Result<Box<dyn LlmProvider>, FanoutError> {
    Ok(Box::new(AnthropicClient::new(credentials)?))
}

/// Looks up a provider by name, ignoring case and surrounding whitespace.
pub fn resolve(name: &str) -> Result<&'static ProviderEntry, FanoutError> {
    let name = name.trim().to_lowercase();
    REGISTRY
        .iter()
        .find(|entry| entry.name == name)
        .ok_or(FanoutError::UnknownProvider(name))
}
