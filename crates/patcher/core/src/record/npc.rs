use bitflags::bitflags;

use super::FormKey;

bitflags! {
    /// ACBS template flags: which data an NPC inherits from its template.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(
        feature = "serde",
        derive(serde::Serialize, serde::Deserialize),
        serde(transparent)
    )]
    pub struct TemplateFlags: u16 {
        const TRAITS           = 1 << 0;
        const STATS            = 1 << 1;
        const FACTIONS         = 1 << 2;
        const SPELL_LIST       = 1 << 3;
        const AI_DATA          = 1 << 4;
        const AI_PACKAGES      = 1 << 5;
        const MODEL_ANIMATION  = 1 << 6;
        const BASE_DATA        = 1 << 7;
        const INVENTORY        = 1 << 8;
        const SCRIPT           = 1 << 9;
        const DEF_PACK_LIST    = 1 << 10;
        const ATTACK_DATA      = 1 << 11;
        const KEYWORDS         = 1 << 12;
    }
}

/// Actor base record (NPC_).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Npc {
    pub key: FormKey,
    pub editor_id: Option<String>,
    /// Display name (FULL).
    pub name: Option<String>,
    pub race: Option<FormKey>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub keywords: Vec<FormKey>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub template_flags: TemplateFlags,
    #[cfg_attr(feature = "serde", serde(default))]
    pub perks: Vec<PerkPlacement>,
}

impl Npc {
    /// Templated spell lists come from the template record, not this one.
    pub fn inherits_spell_list(&self) -> bool {
        self.template_flags.contains(TemplateFlags::SPELL_LIST)
    }

    pub fn has_keyword(&self, keyword: &FormKey) -> bool {
        self.keywords.contains(keyword)
    }

    /// Name used in log lines: display name, then editor id, then form key.
    pub fn label(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.editor_id.clone())
            .unwrap_or_else(|| self.key.to_string())
    }
}

/// A perk granted to an NPC at a given rank.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerkPlacement {
    pub perk: FormKey,
    pub rank: u8,
}
