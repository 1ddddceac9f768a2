//! Content loaders for reading rule data from JSON files.
//!
//! Every loader reads one file and hands back plain data; [`ContentFactory`]
//! assembles them into a [`kye_core::RuleConfig`].

pub mod creature_rules;
pub mod factory;
pub mod misc;
pub mod settings;

pub use creature_rules::CreatureRulesLoader;
pub use factory::ContentFactory;
pub use misc::{MiscLoader, MiscRules};
pub use settings::{Settings, SettingsLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
