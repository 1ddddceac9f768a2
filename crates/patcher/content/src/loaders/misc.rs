//! Editor id lists from `misc.json`.

use std::collections::HashSet;
use std::path::Path;

use crate::loaders::{LoadResult, read_file};

/// Contents of `misc.json`. Missing keys load as empty lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct MiscRules {
    pub resistances_and_weaknesses: Vec<String>,
    pub abilities_to_clean: Vec<String>,
    pub perks_to_clean: Vec<String>,
    pub kye_perk_names: Vec<String>,
    pub kye_ability_names: Vec<String>,
}

impl MiscRules {
    pub(crate) fn into_sets(self) -> [HashSet<String>; 5] {
        [
            self.resistances_and_weaknesses.into_iter().collect(),
            self.abilities_to_clean.into_iter().collect(),
            self.perks_to_clean.into_iter().collect(),
            self.kye_perk_names.into_iter().collect(),
            self.kye_ability_names.into_iter().collect(),
        ]
    }
}

/// Loader for `misc.json`.
pub struct MiscLoader;

impl MiscLoader {
    pub fn load(path: &Path) -> LoadResult<MiscRules> {
        let content = read_file(path)?;
        let rules: MiscRules = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_are_empty_lists() {
        let rules: MiscRules =
            serde_json::from_str(r#"{ "perks_to_clean": ["OtherArmorPerk"] }"#).unwrap();
        assert_eq!(rules.perks_to_clean, ["OtherArmorPerk"]);
        assert!(rules.resistances_and_weaknesses.is_empty());
        assert!(rules.kye_ability_names.is_empty());
    }

    #[test]
    fn duplicates_collapse_into_sets() {
        let rules = MiscRules {
            abilities_to_clean: vec!["AbA".into(), "AbA".into(), "AbB".into()],
            ..MiscRules::default()
        };
        let [_, abilities, ..] = rules.into_sets();
        assert_eq!(abilities.len(), 2);
    }
}
