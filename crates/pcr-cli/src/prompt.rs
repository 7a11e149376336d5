use std::io::IsTerminal;

use anyhow::Context;
use pcr_core::Project;

/// Ask for the project ID on the terminal.
pub fn project_id() -> anyhow::Result<String> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("no project ID given and stdin is not a terminal");
    }

    let input: String = dialoguer::Input::new()
        .with_prompt("Enter the project's Prolific ID")
        .validate_with(|value: &String| -> Result<(), String> {
            Project::validate_id(value)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()
        .context("failed to read project ID")?;

    Ok(Project::validate_id(&input)?.to_string())
}
