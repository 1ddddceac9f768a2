//! Content factory for building the rule config from data files.

use std::path::{Path, PathBuf};

use kye_core::{CreatureRules, RuleConfig};
use tracing::debug;

use crate::loaders::{
    CreatureRulesLoader, LoadResult, MiscLoader, MiscRules, Settings, SettingsLoader,
};

/// Content factory that loads all rule data from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── misc.json
/// ├── settings.json
/// └── creature_rules.json
/// ```
///
/// All three files are required.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const MISC_FILE: &'static str = "misc.json";
    pub const SETTINGS_FILE: &'static str = "settings.json";
    pub const CREATURE_RULES_FILE: &'static str = "creature_rules.json";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load editor id lists from `misc.json`.
    pub fn load_misc(&self) -> LoadResult<MiscRules> {
        MiscLoader::load(&self.data_dir.join(Self::MISC_FILE))
    }

    /// Load scalar settings from `settings.json`.
    pub fn load_settings(&self) -> LoadResult<Settings> {
        SettingsLoader::load(&self.data_dir.join(Self::SETTINGS_FILE))
    }

    /// Load trait assignments from `creature_rules.json`.
    pub fn load_creature_rules(&self) -> LoadResult<CreatureRules> {
        CreatureRulesLoader::load(&self.data_dir.join(Self::CREATURE_RULES_FILE))
    }

    /// Load and assemble the full rule config.
    pub fn load_rule_config(&self) -> LoadResult<RuleConfig> {
        let misc = self.load_misc()?;
        let settings = self.load_settings()?;
        let creature_rules = self.load_creature_rules()?;

        let [
            resistances_and_weaknesses,
            abilities_to_clean,
            perks_to_clean,
            kye_perk_names,
            kye_ability_names,
        ] = misc.into_sets();

        let config = RuleConfig {
            resistances_and_weaknesses,
            abilities_to_clean,
            perks_to_clean,
            kye_perk_names,
            kye_ability_names,
            effect_intensity: settings.effect_intensity,
            patch_silver_perk: settings.patch_silver_perk,
            creature_rules,
        };
        debug!(
            data_dir = %self.data_dir.display(),
            resistances = config.resistances_and_weaknesses.len(),
            abilities_to_clean = config.abilities_to_clean.len(),
            perks_to_clean = config.perks_to_clean.len(),
            creature_rules = config.creature_rules.len(),
            "loaded rule config"
        );
        Ok(config)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
