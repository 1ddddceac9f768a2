use super::FormKey;

/// Spell or ability record (SPEL).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spell {
    pub key: FormKey,
    pub editor_id: Option<String>,
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<SpellEffect>,
}

/// One magic effect entry of a spell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellEffect {
    /// Link to the [`super::MagicEffect`] archetype.
    pub base_effect: FormKey,
    /// EFIT block. Some plugins ship effects without it.
    pub data: Option<EffectData>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectData {
    pub magnitude: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub area: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: u32,
}

impl EffectData {
    pub fn with_magnitude(magnitude: f32) -> Self {
        Self {
            magnitude,
            area: 0,
            duration: 0,
        }
    }
}

impl SpellEffect {
    pub fn new(base_effect: FormKey, magnitude: f32) -> Self {
        Self {
            base_effect,
            data: Some(EffectData::with_magnitude(magnitude)),
        }
    }

    /// Returns the magnitude, if the effect carries a data block.
    pub fn magnitude(&self) -> Option<f32> {
        self.data.map(|d| d.magnitude)
    }
}
