//! Provider listing command handler.

use anyhow::Result;

use crate::config::ConfigManager;
use crate::provider::{CredentialSource, REGISTRY};
use crate::ui::Style;

/// Prints every registered provider with its credential status.
pub fn print_providers() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;

    println!("{}\n", Style::header("Supported providers"));
    for entry in REGISTRY {
        let has_key = config
            .credential(entry.name, entry.api_key_env)
            .is_some();
        println!(
            "  {} {}",
            Style::value(format!("{:10}", entry.name)),
            Style::secondary(entry.display_name)
        );
        println!(
            "    {} = {}",
            Style::code(entry.api_key_env),
            if has_key {
                Style::success("(set)")
            } else {
                Style::warning("(not set)")
            }
        );
    }

    Ok(())
}
