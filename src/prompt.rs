//! Interactive configuration prompts

use inquire::{Confirm, Text};

use crate::config::ConfigPrompter;
use crate::error::{Result, SweepError};
use crate::types::DEFAULT_TLDS;

/// Asks on the terminal with `inquire`
#[derive(Debug, Clone, Copy, Default)]
pub struct InquirePrompter;

fn prompt_error(e: inquire::InquireError) -> SweepError {
    SweepError::config(format!("Prompt failed: {}", e))
}

impl ConfigPrompter for InquirePrompter {
    fn source(&self) -> Result<Option<String>> {
        Text::new("Scan [W]ords or [N]ames?")
            .with_default("W")
            .prompt()
            .map(Some)
            .map_err(prompt_error)
    }

    fn min_length(&self) -> Result<Option<String>> {
        Text::new("Minimum word length:")
            .with_default("3")
            .prompt()
            .map(Some)
            .map_err(prompt_error)
    }

    fn max_length(&self) -> Result<Option<String>> {
        Text::new("Maximum word length:")
            .with_default("5")
            .prompt()
            .map(Some)
            .map_err(prompt_error)
    }

    fn custom_tlds(&self) -> Result<Option<String>> {
        let help = format!("Default: {}", DEFAULT_TLDS.join(", "));
        let custom = Confirm::new("Use custom TLDs?")
            .with_default(false)
            .with_help_message(&help)
            .prompt()
            .map_err(prompt_error)?;

        if !custom {
            return Ok(None);
        }

        Text::new("TLDs (comma-separated, e.g. .io, .dev):")
            .prompt()
            .map(Some)
            .map_err(prompt_error)
    }
}
