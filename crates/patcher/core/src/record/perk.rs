use super::FormKey;

/// Perk record (PERK).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Perk {
    pub key: FormKey,
    pub editor_id: Option<String>,
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<PerkEffect>,
}

/// Perk effect entries the pipeline distinguishes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum PerkEffect {
    /// Entry point that modifies a game value by a constant.
    ModifyValue {
        entry_point: EntryPoint,
        value: f32,
        modification: Modification,
    },
    /// Grants an ability spell while the perk is held.
    Ability { spell: FormKey },
}

impl PerkEffect {
    pub fn modify_value(entry_point: EntryPoint, value: f32, modification: Modification) -> Self {
        PerkEffect::ModifyValue {
            entry_point,
            value,
            modification,
        }
    }

    /// Returns the entry point for modify-value effects.
    pub fn entry_point(&self) -> Option<EntryPoint> {
        match self {
            PerkEffect::ModifyValue { entry_point, .. } => Some(*entry_point),
            PerkEffect::Ability { .. } => None,
        }
    }
}

/// Game calculation hooked by a perk entry point.
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
#[strum(ascii_case_insensitive)]
pub enum EntryPoint {
    ModIncomingDamage,
    ModAttackDamage,
    ModIncomingSpellMagnitude,
    ModSpellMagnitude,
    /// Any entry point this patch never touches.
    Other,
}

impl EntryPoint {
    /// Entry points whose value is a damage multiplier.
    pub const fn is_damage_mod(&self) -> bool {
        matches!(self, EntryPoint::ModIncomingDamage | EntryPoint::ModAttackDamage)
    }
}

/// How an entry point value is combined with the base value.
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
#[strum(ascii_case_insensitive)]
pub enum Modification {
    Set,
    Multiply,
    Add,
}
