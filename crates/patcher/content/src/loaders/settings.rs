//! Scalar settings from `settings.json`.

use std::path::Path;

use kye_core::RuleConfig;

use crate::loaders::{LoadResult, read_file};

/// Contents of `settings.json`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Multiplier applied to this patch's own effects; `1.0` is unchanged.
    pub effect_intensity: f32,
    pub patch_silver_perk: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            effect_intensity: RuleConfig::DEFAULT_EFFECT_INTENSITY,
            patch_silver_perk: false,
        }
    }
}

/// Loader for `settings.json`.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from a JSON file.
    ///
    /// Range checks happen later in [`RuleConfig::validate`].
    pub fn load(path: &Path) -> LoadResult<Settings> {
        let content = read_file(path)?;
        let settings: Settings = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        Ok(settings)
    }
}
