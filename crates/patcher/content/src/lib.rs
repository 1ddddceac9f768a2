//! Data-driven patch content and loaders.
//!
//! This crate houses the static trait catalog and loaders for the JSON rule
//! files a patch run is configured with:
//! - Misc rules (`misc.json`): editor id lists for cleanup and intensity
//! - Settings (`settings.json`): effect intensity and the silver perk toggle
//! - Creature rules (`creature_rules.json`): trait lists per race, name, or editor id
//!
//! The bundled defaults live under `data/` next to this crate.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{TRAIT_CATALOG, bundled_data_dir};

#[cfg(feature = "loaders")]
pub use loaders::{
    ContentFactory, CreatureRulesLoader, MiscLoader, MiscRules, Settings, SettingsLoader,
};
