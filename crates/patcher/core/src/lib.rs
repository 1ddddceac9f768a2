//! Rule-driven record transform for the Know Your Enemy load-order patch.
//!
//! `kye-core` defines the record model, the [`store::RecordStore`] contract the
//! pipeline reads from and overlays into, and the five stages that make up a
//! patch run. All mutation flows through [`store::Overlay`] copies committed
//! back to the store; winning records are never edited in place.
//!
//! Loading rule files and load orders lives in `kye-content` and
//! `kye-runtime`; this crate only sees already-resolved in-memory data.
pub mod config;
pub mod error;
pub mod known;
pub mod perks;
pub mod pipeline;
pub mod record;
pub mod scaling;
pub mod stages;
pub mod store;

pub use config::{CreatureRules, RuleConfig};
pub use error::{ErrorSeverity, PatchError, PatchFailure};
pub use perks::{PerkTable, TraitCatalogEntry};
pub use pipeline::{PatchSummary, run_pipeline};
pub use record::{
    EffectData, EntryPoint, FormKey, FormKeyParseError, Keyword, MagicEffect, ModKey,
    Modification, Npc, Perk, PerkEffect, PerkPlacement, Race, Record, RecordKind, RecordType,
    Spell, SpellEffect, TemplateFlags,
};
pub use scaling::{adjust_damage_mod, adjust_magic_resist};
pub use stages::Stage;
pub use store::{Overlay, RecordStore, StoreExt};
