use dialoguer::{theme::ColorfulTheme, Input};

use crate::cli::core::CommandError;
use crate::domain::RawEntryInput;

/// Interactive add-entry form. Every field accepts free text, empty included;
/// numeric coercion happens at the ingestion boundary, so the form never
/// rejects what the user typed.
pub fn add_entry_form(theme: &ColorfulTheme) -> Result<RawEntryInput, CommandError> {
    let year = prompt(theme, "Fiscal year")?;
    let project_name = prompt(theme, "Project name")?;
    let budget = prompt(theme, "Budget amount")?;
    let spent = prompt(theme, "Spent amount")?;
    let returned = prompt(theme, "Returned amount")?;
    Ok(RawEntryInput {
        year,
        project_name,
        budget,
        spent,
        returned,
    })
}

fn prompt(theme: &ColorfulTheme, label: &str) -> Result<String, CommandError> {
    Input::<String>::with_theme(theme)
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .map_err(CommandError::from)
}
