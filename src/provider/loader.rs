use tracing::debug;

use super::{CredentialSource, LlmProvider, resolve};
use crate::error::FanoutError;

/// Splits a comma-separated provider list into trimmed, lowercased tokens.
///
/// Empty tokens are dropped; order and duplicates are kept.
pub fn parse_provider_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Builds one provider per token of `list`, in order.
///
/// Tokens are resolved and constructed one at a time, so the first failure
/// (unknown name or missing credential) aborts the whole load.
pub fn load_providers(
    list: &str,
    credentials: &dyn CredentialSource,
) -> Result<Vec<Box<dyn LlmProvider>>, FanoutError> {
    let mut providers = Vec::new();

    for token in parse_provider_list(list) {
        let entry = resolve(&token)?;
        let provider = (entry.construct)(credentials)?;
        debug!(provider = entry.name, index = providers.len(), "constructed provider");
        providers.push(provider);
    }

    if providers.is_empty() {
        return Err(FanoutError::NoProviders);
    }

    Ok(providers)
}
