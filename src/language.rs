//! Language codes and the instruction prefixed to each prompt.

use std::borrow::Cow;

use crate::error::FanoutError;
use crate::ui::Style;

/// Language used when neither the CLI nor the config file names one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A supported language and the instruction line sent ahead of the prompt.
#[derive(Debug, Clone, Copy)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub instruction: &'static str,
}

/// Supported language codes, in the order `--lang` lists them.
pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language {
        code: "en",
        name: "English",
        instruction: "Respond in English.",
    },
    Language {
        code: "he",
        name: "Hebrew",
        instruction: "Respond in Hebrew (עברית).",
    },
    Language {
        code: "ar",
        name: "Arabic",
        instruction: "Respond in Arabic (العربية).",
    },
    Language {
        code: "fa",
        name: "Persian",
        instruction: "Respond in Persian (فارسی).",
    },
];

/// Codes accepted by `--lang`.
pub const LANGUAGE_CODES: [&str; 4] = ["en", "he", "ar", "fa"];

/// Looks up a language by its exact code.
pub fn find_language(code: &str) -> Option<&'static Language> {
    SUPPORTED_LANGUAGES.iter().find(|lang| lang.code == code)
}

/// Prefixes `prompt` with the instruction for `code`.
///
/// Unknown codes leave the prompt untouched.
pub fn apply_instruction<'a>(prompt: &'a str, code: &str) -> Cow<'a, str> {
    find_language(code).map_or(Cow::Borrowed(prompt), |lang| {
        Cow::Owned(format!("{}\n{prompt}", lang.instruction))
    })
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes"));
    for lang in SUPPORTED_LANGUAGES {
        println!(
            "  {} {:8} {}",
            Style::code(format!("{:4}", lang.code)),
            lang.name,
            Style::secondary(lang.instruction)
        );
    }
}

/// Validates that the given language code is supported.
pub fn validate_language(code: &str) -> Result<(), FanoutError> {
    if find_language(code).is_some() {
        Ok(())
    } else {
        Err(FanoutError::InvalidLanguage(code.to_string()))
    }
}
