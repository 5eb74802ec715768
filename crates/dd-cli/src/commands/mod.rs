pub mod check;
pub mod create;

use std::path::Path;

use colored::Colorize;

use dd_creation::ScenarioData;
use dd_mechanics::AttributeStore;

/// Load a scenario, turning any error into the CLI's message form.
fn load_scenario(path: &Path) -> Result<ScenarioData, String> {
    ScenarioData::load(path).map_err(|e| e.to_string())
}

/// Render scores with positive values green, negative red, and zero dimmed.
fn colorize(store: &AttributeStore) -> String {
    store
        .iter()
        .map(|(attr, value)| {
            let shown = value.to_string();
            let shown = match value {
                v if v > 0 => shown.green(),
                v if v < 0 => shown.red(),
                _ => shown.dimmed(),
            };
            format!("{}: {shown}", attr.short_name())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dd_mechanics::Attribute;

    // One test, since the color override is process-wide.
    #[test]
    fn colorize_by_sign() {
        let mut store = AttributeStore::new();
        store.set(Attribute::Strength, 3);
        store.set(Attribute::Dexterity, -2);

        colored::control::set_override(true);
        let colored_out = colorize(&store);
        let expected = format!(
            "STR: {}, DEX: {}, CON: {}",
            "3".green(),
            "-2".red(),
            "0".dimmed()
        );
        colored::control::set_override(false);
        let plain_out = colorize(&store);
        colored::control::unset_override();

        assert!(colored_out.starts_with(&expected));
        assert_ne!(colored_out, plain_out);
        assert_eq!(plain_out, "STR: 3, DEX: -2, CON: 0, INT: 0, WIS: 0, CHA: 0");
    }
}
