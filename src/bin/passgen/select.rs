use std::collections::BTreeMap;

use anyhow::Context;
use passgen::Options;

pub(crate) fn select_preset(
    presets: &BTreeMap<String, Options>,
) -> Result<&str, crate::ProgError> {
    if presets.is_empty() {
        return Err(crate::ProgError::NoPresets);
    }
    let names = presets.keys().map(String::as_str).collect::<Vec<_>>();
    let selection = dialoguer::FuzzySelect::with_theme(&dialoguer::theme::ColorfulTheme::default())
        .with_prompt("Preset")
        .items(&names)
        .interact_opt()
        .context("failed to query your selection")?
        .ok_or(crate::ProgError::PresetSelectionCancelled)?;

    Ok(names[selection])
}
