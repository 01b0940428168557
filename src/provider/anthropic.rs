use super::{ApiKey, CredentialSource, LlmProvider, render_response};
use crate::error::FanoutError;

/// Anthropic messages client. Responses are generated locally.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    api_key: ApiKey,
}

impl AnthropicClient {
    pub const NAME: &'static str = "Anthropic";
    pub const API_KEY_ENV: &'static str = "ANTHROPIC_API_KEY";

    pub fn new(credentials: &dyn CredentialSource) -> Result<Self, FanoutError> {
        let api_key = ApiKey::fetch(credentials, "anthropic", Self::API_KEY_ENV)?;
        Ok(Self { api_key })
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}

impl LlmProvider for AnthropicClient {
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
    use crate::language::LANGUAGE_CODES;
    use crate::provider::testing::StaticCredentials;

    #[test]
    fn test_new_rejects_empty_key() {
        let creds = StaticCredentials::default().with("ANTHROPIC_API_KEY", "");
        assert!(AnthropicClient::new(&creds).is_err());
    }

    #[test]
    fn test_generate_contains_tag_code_and_prompt() {
        let client = AnthropicClient::new(&StaticCredentials::both()).unwrap();
        assert_eq!(client.api_key().expose(), "sk-ant");

        for code in LANGUAGE_CODES {
            let response = client.generate("What is Rust?", code);
            assert!(response.starts_with(&format!("[Anthropic][{code}] Response to: ")));
            assert!(response.ends_with("\nWhat is Rust?"));
        }
    }

    #[test]
    fn test_generate_unknown_language_has_no_prefix() {
        let client = AnthropicClient::new(&StaticCredentials::both()).unwrap();
        assert_eq!(
            client.generate("Hi", "de"),
            "[Anthropic][de] Response to: Hi"
        );
    }
}
