//! Record model shared by the store, the stages, and the loaders.
//!
//! Records are plain data owned by a [`crate::store::RecordStore`]. Identity is
//! a [`FormKey`] (source plugin + local id); links between records are stored
//! as form keys and resolved through the store.
mod ids;
mod npc;
mod perk;
mod spell;

pub use ids::{FormKey, FormKeyParseError, ModKey};
pub use npc::{Npc, PerkPlacement, TemplateFlags};
pub use perk::{EntryPoint, Modification, Perk, PerkEffect};
pub use spell::{EffectData, Spell, SpellEffect};

/// Record types the pipeline reads or writes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RecordKind {
    Spell,
    Perk,
    MagicEffect,
    Npc,
    Race,
    Keyword,
}

/// Magic effect archetype referenced by spell effects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagicEffect {
    pub key: FormKey,
    pub editor_id: Option<String>,
}

/// Creature race; only its editor id matters to trait assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Race {
    pub key: FormKey,
    pub editor_id: Option<String>,
    pub name: Option<String>,
}

/// Keyword attached to actors (e.g. `ActorTypeGhost`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyword {
    pub key: FormKey,
    pub editor_id: Option<String>,
}

/// Any record held by a store.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Record {
    Spell(Spell),
    Perk(Perk),
    MagicEffect(MagicEffect),
    Npc(Npc),
    Race(Race),
    Keyword(Keyword),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Spell(_) => RecordKind::Spell,
            Record::Perk(_) => RecordKind::Perk,
            Record::MagicEffect(_) => RecordKind::MagicEffect,
            Record::Npc(_) => RecordKind::Npc,
            Record::Race(_) => RecordKind::Race,
            Record::Keyword(_) => RecordKind::Keyword,
        }
    }

    pub fn key(&self) -> &FormKey {
        match self {
            Record::Spell(r) => &r.key,
            Record::Perk(r) => &r.key,
            Record::MagicEffect(r) => &r.key,
            Record::Npc(r) => &r.key,
            Record::Race(r) => &r.key,
            Record::Keyword(r) => &r.key,
        }
    }

    pub fn editor_id(&self) -> Option<&str> {
        match self {
            Record::Spell(r) => r.editor_id.as_deref(),
            Record::Perk(r) => r.editor_id.as_deref(),
            Record::MagicEffect(r) => r.editor_id.as_deref(),
            Record::Npc(r) => r.editor_id.as_deref(),
            Record::Race(r) => r.editor_id.as_deref(),
            Record::Keyword(r) => r.editor_id.as_deref(),
        }
    }
}

impl Record {
    /// Every form key this record points at, its own key first.
    ///
    /// A patch holding this record needs each of their plugins as a master.
    pub fn form_links(&self) -> Vec<&FormKey> {
        let mut links = vec![self.key()];
        match self {
            Record::Spell(spell) => {
                links.extend(spell.effects.iter().map(|effect| &effect.base_effect));
            }
            Record::Perk(perk) => {
                links.extend(perk.effects.iter().filter_map(|effect| match effect {
                    PerkEffect::Ability { spell } => Some(spell),
                    PerkEffect::ModifyValue { .. } => None,
                }));
            }
            Record::Npc(npc) => {
                links.extend(npc.race.as_ref());
                links.extend(npc.keywords.iter());
                links.extend(npc.perks.iter().map(|placement| &placement.perk));
            }
            Record::MagicEffect(_) | Record::Race(_) | Record::Keyword(_) => {}
        }
        links
    }
}

/// Typed view over one [`Record`] variant.
///
/// Lets store helpers hand out `&Spell`, `&Npc`, ... instead of the enum and
/// lets overlays of a concrete type be committed back as a [`Record`].
pub trait RecordType: Clone + Into<Record> {
    const KIND: RecordKind;

    fn key(&self) -> &FormKey;

    fn editor_id(&self) -> Option<&str>;

    /// Borrows the typed record out of `record` if the variant matches.
    fn from_record(record: &Record) -> Option<&Self>;
}

macro_rules! impl_record_type {
    ($ty:ident) => {
        impl RecordType for $ty {
            const KIND: RecordKind = RecordKind::$ty;

            fn key(&self) -> &FormKey {
                &self.key
            }

            fn editor_id(&self) -> Option<&str> {
                self.editor_id.as_deref()
            }

            fn from_record(record: &Record) -> Option<&Self> {
                match record {
                    Record::$ty(inner) => Some(inner),
                    _ => None,
                }
            }
        }

        impl From<$ty> for Record {
            fn from(value: $ty) -> Self {
                Record::$ty(value)
            }
        }
    };
}

impl_record_type!(Spell);
impl_record_type!(Perk);
impl_record_type!(MagicEffect);
impl_record_type!(Npc);
impl_record_type!(Race);
impl_record_type!(Keyword);
