//! Trait assignments from `creature_rules.json`.

use std::path::Path;

use kye_core::CreatureRules;

use crate::loaders::{LoadResult, read_file};

/// Loader for `creature_rules.json`: an object of `key -> [trait, ...]`.
pub struct CreatureRulesLoader;

impl CreatureRulesLoader {
    pub fn load(path: &Path) -> LoadResult<CreatureRules> {
        let content = read_file(path)?;
        let rules: CreatureRules = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        Ok(rules)
    }
}
