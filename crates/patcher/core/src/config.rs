//! Rule configuration consumed by the stages.
//!
//! Built once by the loaders and immutable for the rest of the run.

use std::collections::{HashMap, HashSet};

use crate::error::{PatchError, Result};

/// Creature rules: key → ordered trait list.
///
/// Keys are race editor ids, display names, or NPC editor ids, all sharing one
/// namespace. Lookups are exact and case-sensitive.
pub type CreatureRules = HashMap<String, Vec<String>>;

#[derive(Clone, Debug, PartialEq)]
pub struct RuleConfig {
    /// Editor ids of magic effects treated as resistances or weaknesses.
    pub resistances_and_weaknesses: HashSet<String>,
    /// Spells from other mods whose resistances are neutralized.
    pub abilities_to_clean: HashSet<String>,
    /// Perks from other mods whose incoming-damage modifiers are neutralized.
    pub perks_to_clean: HashSet<String>,
    pub kye_perk_names: HashSet<String>,
    pub kye_ability_names: HashSet<String>,
    /// `1.0` leaves this patch's own effects untouched.
    pub effect_intensity: f32,
    pub patch_silver_perk: bool,
    pub creature_rules: CreatureRules,
}

impl RuleConfig {
    pub const DEFAULT_EFFECT_INTENSITY: f32 = 1.0;

    pub fn new() -> Self {
        Self {
            resistances_and_weaknesses: HashSet::new(),
            abilities_to_clean: HashSet::new(),
            perks_to_clean: HashSet::new(),
            kye_perk_names: HashSet::new(),
            kye_ability_names: HashSet::new(),
            effect_intensity: Self::DEFAULT_EFFECT_INTENSITY,
            patch_silver_perk: false,
            creature_rules: CreatureRules::new(),
        }
    }

    /// Returns true if intensity scaling would change anything.
    pub fn scales_intensity(&self) -> bool {
        (self.effect_intensity - 1.0).abs() > f32::EPSILON
    }

    /// Rejects settings the stages cannot apply meaningfully.
    ///
    /// # Errors
    ///
    /// Returns `PatchError::InvalidSettings` for a negative or non-finite intensity.
    pub fn validate(&self) -> Result<()> {
        if !self.effect_intensity.is_finite() || self.effect_intensity < 0.0 {
            return Err(PatchError::InvalidSettings {
                reason: format!(
                    "effect_intensity must be a finite, non-negative number (got {})",
                    self.effect_intensity
                ),
            });
        }
        Ok(())
    }

    pub fn is_resistance_or_weakness(&self, editor_id: &str) -> bool {
        self.resistances_and_weaknesses.contains(editor_id)
    }

    /// Traits listed for `key`, if any.
    pub fn rules_for(&self, key: &str) -> Option<&[String]> {
        self.creature_rules.get(key).map(Vec::as_slice)
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_intensity_does_not_scale() {
        let config = RuleConfig::default();
        assert!(!config.scales_intensity());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_negative_or_nan_intensity() {
        let mut config = RuleConfig::default();
        config.effect_intensity = -0.5;
        assert!(matches!(
            config.validate(),
            Err(PatchError::InvalidSettings { .. })
        ));

        config.effect_intensity = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn intensity_gate_uses_near_equality() {
        let mut config = RuleConfig::default();
        config.effect_intensity = 1.0 + f32::EPSILON / 2.0;
        assert!(!config.scales_intensity());

        config.effect_intensity = 1.0 + 2.0 * f32::EPSILON;
        assert!(config.scales_intensity());
    }
}
