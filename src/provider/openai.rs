use super::{ApiKey, CredentialSource, LlmProvider, render_response};
use crate::error::FanoutError;

/// OpenAI chat client. Responses are generated locally.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    api_key: ApiKey,
}

impl OpenAiClient {
    pub const NAME: &'static str = "OpenAI";
    pub const API_KEY_ENV: &'static str = "OPENAI_API_KEY";

    pub fn new(credentials: &dyn CredentialSource) -> Result<Self, FanoutError> {
        let api_key = ApiKey::fetch(credentials, "openai", Self::API_KEY_ENV)?;
        Ok(Self { api_key })
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}

impl LlmProvider for OpenAiClient {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn generate(&self, prompt: &str, language: &str) -> String {
        render_response(Self::NAME, prompt, language)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::provider::testing::StaticCredentials;

    #[test]
    fn test_new_requires_key() {
        let err = OpenAiClient::new(&StaticCredentials::default()).unwrap_err();
        assert!(err.to_string().starts_with("Missing OPENAI_API_KEY"));
    }

    #[test]
    fn test_generate_tags_provider_and_language() {
        let client = OpenAiClient::new(&StaticCredentials::both()).unwrap();
        assert_eq!(client.api_key().expose(), "sk-openai");

        let response = client.generate("Hello", "en");
        assert_eq!(
            response,
            "[OpenAI][en] Response to: Respond in English.\nHello"
        );
    }

    #[test]
    fn test_generate_is_deterministic() {
        let client = OpenAiClient::new(&StaticCredentials::both()).unwrap();
        assert_eq!(client.generate("x", "fa"), client.generate("x", "fa"));
    }
}
