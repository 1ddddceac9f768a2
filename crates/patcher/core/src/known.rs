//! Well-known plugins and records the stages refer to by identity.

use crate::record::{FormKey, ModKey};

/// The plugin this patch extends; its absence aborts the run.
pub const KNOW_YOUR_ENEMY: ModKey = ModKey::from_static("know_your_enemy.esp");
pub const KNOW_YOUR_ELEMENTS: ModKey = ModKey::from_static("Know Your Elements.esp");
pub const LIGHT_AND_SHADOW: ModKey = ModKey::from_static("KYE Light and Shadow.esp");
pub const SKYRIM: ModKey = ModKey::from_static("Skyrim.esm");

/// Complete Alchemy & Cooking Overhaul.
pub const CACO: ModKey = ModKey::from_static("Complete Alchemy & Cooking Overhaul.esp");
/// Skyrim Immersive Creatures.
pub const IMMERSIVE_CREATURES: ModKey = ModKey::from_static("Skyrim Immersive Creatures.esp");

/// Default name of the emitted patch plugin.
pub const DEFAULT_PATCH_NAME: &str = "know_your_enemy_patcher.esp";

/// `ActorTypeGhost` keyword.
pub const ACTOR_TYPE_GHOST: FormKey = FormKey::from_static("Skyrim.esm", 0x0D205E);
/// Vanilla `SilverPerk`.
pub const SILVER_PERK: FormKey = FormKey::from_static("Skyrim.esm", 0x10D685);
/// `DummySilverPerk` carrying the replacement silver effects.
pub const DUMMY_SILVER_PERK: FormKey = FormKey::from_static("know_your_enemy.esp", 0x0BBE10);

pub const KYE_AB_GHOSTLY: FormKey = FormKey::from_static("know_your_enemy.esp", 0x060B93);
pub const KYE_AB_UNDEAD: FormKey = FormKey::from_static("know_your_enemy.esp", 0x00AA43);

/// Magic effect zeroed on the ghostly/undead abilities when CACO is present.
pub const RESIST_POISON_EFFECT: &str = "AbResistPoison";

/// Display name that always receives the ghostly trait.
pub const ICE_WRAITH: &str = "Ice Wraith";
pub const GHOSTLY_TRAIT: &str = "ghostly";
