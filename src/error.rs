//! Error types for configuration and provider loading.
//!
//! Everything else in the crate propagates `anyhow::Error`; the binary maps
//! the chain back onto a sysexits code with [`exit_code_for`].

use thiserror::Error;

/// Failures raised while resolving configuration and constructing providers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FanoutError {
    /// The provider's credential is unset or empty.
    #[error(
        "Missing {env_var}\n\n\
         Set the {env_var} environment variable:\n  \
         export {env_var}=\"your-api-key\"\n\n\
         Or set api_key under [providers.{provider}] in ~/.config/fanout/config.toml"
    )]
    MissingCredential {
        provider: &'static str,
        env_var: &'static str,
    },

    /// The provider list was empty, unset, or contained only separators.
    #[error(
        "No LLM providers configured\n\n\
         Please provide them via:\n  \
         - CLI option: fanout --providers openai,anthropic\n  \
         - Environment: LLM_PROVIDERS=openai,anthropic\n  \
         - Config file: providers under [fanout] in ~/.config/fanout/config.toml"
    )]
    NoProviders,

    /// A language code from the config file is not in the instruction table.
    #[error(
        "Invalid language code: '{0}'\n\n\
         Valid language codes: en, he, ar, fa\n\
         Run 'fanout languages' to see all supported codes."
    )]
    InvalidLanguage(String),

    /// A requested name has no registry entry.
    #[error("Unknown LLM provider: {0}\n\nRun 'fanout providers' to see the supported providers.")]
    UnknownProvider(String),
}

impl FanoutError {
    /// `true` for configuration errors, `false` for an unknown provider name.
    pub const fn is_configuration(&self) -> bool {
        !matches!(self, Self::UnknownProvider(_))
    }
}

/// Maps an application error onto a process exit code.
pub fn exit_code_for(err: &anyhow::Error) -> exitcode::ExitCode {
    if err.downcast_ref::<FanoutError>().is_some()
        || err.downcast_ref::<toml::de::Error>().is_some()
    {
        return exitcode::CONFIG;
    }
    if err
        .chain()
        .any(|cause| cause.downcast_ref::<std::io::Error>().is_some())
    {
        return exitcode::IOERR;
    }
    exitcode::SOFTWARE
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_missing_credential_message_names_variable() {
        let err = FanoutError::MissingCredential {
            provider: "openai",
            env_var: "OPENAI_API_KEY",
        };
        assert!(err.to_string().starts_with("Missing OPENAI_API_KEY"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_unknown_provider_is_not_configuration() {
        let err = FanoutError::UnknownProvider("gemini".to_string());
        assert!(err.to_string().starts_with("Unknown LLM provider: gemini"));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_no_providers_is_configuration() {
        assert!(FanoutError::NoProviders.is_configuration());
        assert!(FanoutError::InvalidLanguage("xx".to_string()).is_configuration());
    }

    #[test]
    fn test_exit_code_for_provider_error() {
        let err = anyhow::Error::new(FanoutError::NoProviders);
        assert_eq!(exit_code_for(&err), exitcode::CONFIG);

        let err = anyhow::Error::new(FanoutError::UnknownProvider("x".to_string()));
        assert_eq!(exit_code_for(&err), exitcode::CONFIG);
    }

    #[test]
    fn test_exit_code_for_io_error_with_context() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err = Err::<(), _>(io).context("Failed to write output").unwrap_err();
        assert_eq!(exit_code_for(&err), exitcode::IOERR);
    }

    #[test]
    fn test_exit_code_for_other_error() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&err), exitcode::SOFTWARE);
    }
}
